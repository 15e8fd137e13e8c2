use std::path::Path;

use anyhow::Result;

use menu_tree::render::render_search;
use menu_tree::search::{search, MatchMode, SearchQuery};

use super::{emit_json, load_registry, Context};

pub fn cmd_search(file: &Path, query: &str, regex: bool, ctx: &Context) -> Result<()> {
    let mode = if regex {
        MatchMode::Regex
    } else {
        ctx.config.search.mode
    };
    let query = SearchQuery::parse(query, mode)?;

    let registry = load_registry(file, &ctx.config)?;
    let tree = registry.build_tree();
    let result = search(&tree, &query);
    let view = result.view();

    if ctx.json() {
        return emit_json(&serde_json::json!({
            "query": query.text(),
            "mode": query.mode(),
            "result": view,
        }));
    }

    print!("{}", render_search(&view, &tree, &query, ctx.render));
    Ok(())
}
