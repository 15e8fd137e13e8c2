use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use menu_tree::definition::ItemId;
use menu_tree::render::render_flat;
use menu_tree::tree::flatten_tree;

use super::{emit_json, load_registry, Context};

#[derive(Serialize)]
struct FlatRow<'a> {
    item: ItemId,
    label: &'a str,
    breadcrumb: Vec<&'a str>,
}

pub fn cmd_flatten(file: &Path, ctx: &Context) -> Result<()> {
    let registry = load_registry(file, &ctx.config)?;
    let tree = registry.build_tree();
    let items = flatten_tree(&tree);

    if ctx.json() {
        let rows: Vec<FlatRow<'_>> = items
            .iter()
            .map(|flat| FlatRow {
                item: flat.node.item,
                label: &flat.node.search.raw,
                breadcrumb: flat.breadcrumb(),
            })
            .collect();
        return emit_json(&rows);
    }

    print!("{}", render_flat(&items, ctx.render));
    Ok(())
}
