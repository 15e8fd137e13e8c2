//! Scenario: Narrowing a search
//!
//! Journey: A user looks for the table style command in an editor menu bar,
//! typing one more character at a time.
//!
//! Steps:
//! 1. Empty query shows every menu
//! 2. A single letter matches both top-level menus, so the full tree stays
//! 3. "ta" switches to grouped matches
//! 4. "table s" leaves a single item under its menu
//! 5. A typo shows the empty state
//!
//! Success Criteria:
//! - Result counts never grow as the query gets longer
//! - Matches stay grouped under the menu the user would open

use crate::common::*;

fn count_line(stdout: &str) -> &str {
    stdout.lines().last().unwrap_or_default()
}

/// SCENARIO: Typing a query one step at a time
#[test]
fn scenario_narrowing_search_by_typing() {
    let env = TestEnv::builder()
        .with_project_file("editor.toml", EDITOR_MENUS_TOML)
        .build();

    // Step 1: nothing typed yet
    let result = env.run(&["search", "editor.toml", ""]);
    assert!(result.success, "Step 1 failed:\n{}", result.stderr);
    assert!(result.stdout.starts_with("▼ Insert\n"));
    assert_eq!(count_line(&result.stdout), "5 of 5 items");

    // Step 2: "t" is in "Insert" and "Format"
    let result = env.run(&["search", "editor.toml", "t"]);
    assert!(result.success);
    assert!(
        result.stdout.starts_with("▼ Insert\n"),
        "Step 2: expected the full tree, got:\n{}",
        result.stdout
    );
    assert_eq!(count_line(&result.stdout), "5 of 5 items");

    // Step 3: grouped matches
    let result = env.run(&["search", "editor.toml", "ta"]);
    assert!(result.success);
    assert!(result.stdout.starts_with("▸ Table\n  • Row above\n  • Column left\n"));
    assert_eq!(count_line(&result.stdout), "3 of 5 items");

    // Step 4: a single hit
    let result = env.run(&["search", "editor.toml", "table s"]);
    assert!(result.success);
    assert_eq!(result.stdout, "▸ Format\n  • Table style\n1 of 5 items\n");

    // Step 5: typo
    let result = env.run(&["search", "editor.toml", "table sx"]);
    assert!(result.success);
    assert_eq!(result.stdout, "No matching items\n0 of 5 items\n");
}

/// SCENARIO: The same narrowing through JSON output, as an editor plugin would
#[test]
fn scenario_narrowing_search_json_counts_never_grow() {
    let env = TestEnv::builder()
        .with_project_file("editor.toml", EDITOR_MENUS_TOML)
        .build();

    let mut previous = usize::MAX;
    for query in ["", "t", "ta", "tab", "table", "table s", "table sx"] {
        let result = env.run(&["search", "editor.toml", query, "--json"]);
        assert!(result.success, "query {query:?} failed:\n{}", result.stderr);

        let count = result.json()["result"]["results_count"]
            .as_u64()
            .expect("results_count must be a number") as usize;
        assert!(
            count <= previous,
            "query {query:?} returned {count} results, more than the shorter query ({previous})"
        );
        previous = count;
    }
    assert_eq!(previous, 0);
}
