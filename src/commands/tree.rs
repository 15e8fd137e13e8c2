use std::path::Path;

use anyhow::Result;

use menu_tree::render::render_tree;
use menu_tree::tree::count_items;

use super::{emit_json, load_registry, Context};

pub fn cmd_tree(file: &Path, ctx: &Context) -> Result<()> {
    let registry = load_registry(file, &ctx.config)?;
    let tree = registry.build_tree();

    if ctx.json() {
        return emit_json(&serde_json::json!({
            "file": file.display().to_string(),
            "total_items_count": count_items(&tree),
            "tree": tree,
        }));
    }

    print!("{}", render_tree(&tree, ctx.render));
    Ok(())
}
