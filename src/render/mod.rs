//! Plain-text rendering for the CLI.
//!
//! Every function returns a `String` with one line per entry and a trailing
//! newline. Colors are limited to bold highlighting of matched text.

pub mod terminal;
pub mod theme;

use unicode_width::UnicodeWidthStr;

use crate::search::{FoundEntry, SearchQuery, SearchView};
use crate::tree::{walk, FlatItem, ItemEntry, MenuEntry, RootTree, Visitor, Flow};

use theme::{bold, Glyphs, UNTITLED};

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    /// Highlight matched text with ANSI bold
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            color: false,
        }
    }
}

struct Renderer<'q> {
    glyphs: Glyphs,
    query: Option<&'q SearchQuery>,
    color: bool,
}

impl<'q> Renderer<'q> {
    fn new(options: RenderOptions, query: Option<&'q SearchQuery>) -> Self {
        Self {
            glyphs: Glyphs::new(options.unicode),
            query,
            color: options.color,
        }
    }

    fn label(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return UNTITLED.to_string();
        }
        match self.query {
            Some(query) if self.color => highlight(raw, query),
            _ => raw.to_string(),
        }
    }
}

/// Bold every range of `label` matched by `query`.
pub fn highlight(label: &str, query: &SearchQuery) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last = 0;
    for range in query.highlight_ranges(label) {
        out.push_str(&label[last..range.start]);
        out.push_str(&bold(&label[range.clone()]));
        last = range.end;
    }
    out.push_str(&label[last..]);
    out
}

struct TreeLines<'r, 'q> {
    renderer: &'r Renderer<'q>,
    out: String,
}

impl<'t, M, I> Visitor<'t, M, I> for TreeLines<'_, '_> {
    fn enter_menu(&mut self, entry: &MenuEntry<'_, 't, M, I>) -> Flow {
        let indent = "  ".repeat(entry.parents.len() - 1);
        let label = self.renderer.label(&entry.node.search.raw);
        self.out
            .push_str(&format!("{indent}{} {label}\n", self.renderer.glyphs.menu));
        Flow::Descend
    }

    fn enter_item(&mut self, entry: &ItemEntry<'_, 't, M, I>) -> Flow {
        let indent = "  ".repeat(entry.parents.len() - 1);
        let label = self.renderer.label(&entry.node.search.raw);
        self.out
            .push_str(&format!("{indent}{} {label}\n", self.renderer.glyphs.item));
        Flow::Descend
    }
}

/// Render a tree with two spaces of indentation per nesting level.
pub fn render_tree<M, I>(tree: &RootTree<M, I>, options: RenderOptions) -> String {
    let renderer = Renderer::new(options, None);
    render_tree_with(&renderer, tree)
}

fn render_tree_with<M, I>(renderer: &Renderer<'_>, tree: &RootTree<M, I>) -> String {
    let mut lines = TreeLines {
        renderer,
        out: String::new(),
    };
    walk(&mut lines, tree);
    lines.out
}

/// Render a search view followed by a result count line.
///
/// A full-tree view renders `tree`, the unfiltered input of the search.
pub fn render_search<M, I>(
    view: &SearchView<'_, M, I>,
    tree: &RootTree<M, I>,
    query: &SearchQuery,
    options: RenderOptions,
) -> String {
    let renderer = Renderer::new(options, Some(query));
    let glyphs = renderer.glyphs;

    let mut out = match view {
        SearchView::FullTree { .. } => render_tree_with(&renderer, tree),
        SearchView::Found { entries, .. } if entries.is_empty() => "No matching items\n".to_string(),
        SearchView::Found { entries, .. } => {
            let mut out = String::new();
            for entry in entries {
                match entry {
                    FoundEntry::Item(item) => {
                        out.push_str(&format!("{} {}\n", glyphs.item, renderer.label(&item.search.raw)));
                    }
                    FoundEntry::Group { label, items, .. } => {
                        out.push_str(&format!("{} {}\n", glyphs.group, renderer.label(label)));
                        for item in items {
                            out.push_str(&format!(
                                "  {} {}\n",
                                glyphs.item,
                                renderer.label(&item.search.raw)
                            ));
                        }
                    }
                }
            }
            out
        }
    };

    out.push_str(&format!(
        "{} of {} items\n",
        view.results_count(),
        view.total_items_count()
    ));
    out
}

/// Render one line per item: its breadcrumb, then its label in an aligned column.
pub fn render_flat<M, I>(items: &[FlatItem<'_, M, I>], options: RenderOptions) -> String {
    let renderer = Renderer::new(options, None);

    let rows: Vec<(String, String)> = items
        .iter()
        .map(|item| {
            let crumbs: Vec<String> = item
                .breadcrumb()
                .into_iter()
                .map(|label| renderer.label(label))
                .collect();
            (
                crumbs.join(renderer.glyphs.breadcrumb),
                renderer.label(&item.node.search.raw),
            )
        })
        .collect();

    let width = rows
        .iter()
        .map(|(crumbs, _)| UnicodeWidthStr::width(crumbs.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (crumbs, label) in rows {
        let padding = width - UnicodeWidthStr::width(crumbs.as_str());
        out.push_str(&format!("{crumbs}{}  {label}\n", " ".repeat(padding)));
    }
    out
}
