//! Scenario: Shared project config
//!
//! Journey: A team commits a `menu-tree.toml` that switches search to
//! regular expressions and allows deeper menus. One developer still wants
//! substring search and ASCII output on their machine.
//!
//! Steps:
//! 1. Without config, a deep definition is rejected
//! 2. The committed project config accepts it and searches by regex
//! 3. Environment variables override the committed config for one developer
//! 4. A typo in the config is reported without failing the run
//!
//! Success Criteria:
//! - Precedence is CLI flags, then env, then project config
//! - Config mistakes are visible on stderr

use crate::common::*;

const TEAM_CONFIG: &str = r#"
[search]
mode = "regex"

[tree]
max_depth = 8
"#;

/// SCENARIO: A team config shared through the repository
#[test]
fn scenario_shared_project_config_with_local_overrides() {
    // Step 1: defaults reject 7 levels of menus
    let env = TestEnv::builder()
        .with_project_file("deep.json", &nested_menus_json(7))
        .build();
    let result = env.run(&["tree", "deep.json"]);
    assert!(!result.success, "Step 1: default max depth should reject 7 levels");

    // Step 2: the committed config allows it and enables regex search
    env.write_project_file("menu-tree.toml", TEAM_CONFIG);
    let result = env.run(&["search", "deep.json", "^level 7$"]);
    assert!(result.success, "Step 2 failed:\n{}", result.stderr);
    assert!(result.stdout.ends_with("1 of 1 items\n"), "Step 2:\n{}", result.stdout);

    // Step 3: local env switches back to substring, CLI asks for ASCII
    let result = env.run_with_env(
        &["search", "deep.json", "^level", "--ascii"],
        &[("MENU_TREE_SEARCH_MODE", "substring")],
    );
    assert!(result.success, "Step 3 failed:\n{}", result.stderr);
    assert_eq!(result.stdout, "No matching items\n0 of 1 items\n");

    // Step 4: a typo is reported, the run still succeeds
    env.write_project_file("menu-tree.toml", "[output]\nunicod = false\n");
    let result = env.run(&["tree", "deep.json"]);
    assert!(!result.success, "Step 4: max depth is back to the default");
    assert!(
        result.stderr.contains("unknown config key 'unicod'"),
        "Step 4: expected a warning, got:\n{}",
        result.stderr
    );
}
