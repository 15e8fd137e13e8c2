//! Search over a menu tree.
//!
//! A [`SearchQuery`] turns user text into a case-insensitive pattern. Running
//! it with [`search`] filters the tree; [`SearchResult::view`] then decides
//! what to show: the full menus when nothing was filtered out, otherwise a
//! list of matching items grouped under the menu that matched.

use std::fmt;
use std::ops::Range;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MenuTreeError, MenuTreeResult};
use crate::tree::{
    filter_by_pattern, group_by_first_found_parent, ItemNode, NodeRef, RootTree, SearchResult,
};

/// How query text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Literal text anywhere in the label
    #[default]
    Substring,
    /// Regular expression
    Regex,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => f.write_str("substring"),
            MatchMode::Regex => f.write_str("regex"),
        }
    }
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "regex" => Ok(MatchMode::Regex),
            other => Err(format!("unknown search mode '{other}'")),
        }
    }
}

/// Parsed search text.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    text: String,
    mode: MatchMode,
    pattern: Option<Regex>,
}

impl SearchQuery {
    /// Compile `text` for matching against normalized labels.
    ///
    /// Blank text matches everything.
    pub fn parse(text: &str, mode: MatchMode) -> MenuTreeResult<Self> {
        let trimmed = text.trim();

        let pattern = if trimmed.is_empty() {
            None
        } else {
            let source = match mode {
                MatchMode::Substring => regex::escape(&trimmed.to_lowercase()),
                MatchMode::Regex => trimmed.to_string(),
            };
            let pattern = RegexBuilder::new(&source)
                .case_insensitive(true)
                .build()
                .map_err(|e| MenuTreeError::InvalidPattern {
                    pattern: trimmed.to_string(),
                    message: e.to_string(),
                })?;
            Some(pattern)
        };

        Ok(Self {
            text: trimmed.to_string(),
            mode,
            pattern,
        })
    }

    /// A query matching everything
    pub fn match_all() -> Self {
        Self {
            text: String::new(),
            mode: MatchMode::default(),
            pattern: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    pub fn is_match_all(&self) -> bool {
        self.pattern.is_none()
    }

    /// Byte ranges of `label` matched by the query, for highlighting.
    ///
    /// Matching runs on the trimmed label, like filtering does, so anchored
    /// patterns highlight the same text they matched. Ranges index into the
    /// untrimmed `label`.
    pub fn highlight_ranges(&self, label: &str) -> Vec<Range<usize>> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        let offset = label.len() - label.trim_start().len();
        pattern
            .find_iter(label.trim())
            .filter(|m| !m.is_empty())
            .map(|m| m.start() + offset..m.end() + offset)
            .collect()
    }
}

/// Filter `tree` with the query.
pub fn search<M: Clone, I: Clone>(tree: &RootTree<M, I>, query: &SearchQuery) -> SearchResult<M, I> {
    debug!(query = query.text(), mode = %query.mode(), "searching menu tree");
    filter_by_pattern(query.pattern(), tree)
}

/// What a search should display.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SearchView<'t, M, I> {
    /// Nothing was filtered out: show the menus as they are
    FullTree {
        results_count: usize,
        total_items_count: usize,
    },
    /// Matching items, loose or grouped under their found menu
    Found {
        results_count: usize,
        total_items_count: usize,
        entries: Vec<FoundEntry<'t, M, I>>,
    },
}

impl<M, I> SearchView<'_, M, I> {
    pub fn results_count(&self) -> usize {
        match self {
            SearchView::FullTree { results_count, .. } | SearchView::Found { results_count, .. } => {
                *results_count
            }
        }
    }

    pub fn total_items_count(&self) -> usize {
        match self {
            SearchView::FullTree {
                total_items_count, ..
            }
            | SearchView::Found {
                total_items_count, ..
            } => *total_items_count,
        }
    }
}

/// One entry of a found list.
#[derive(Debug, Serialize)]
#[serde(tag = "kind")]
pub enum FoundEntry<'t, M, I> {
    /// Item whose display parent is the root
    Item(&'t ItemNode<I>),
    /// Items shown under a menu label
    Group {
        label: &'t str,
        menu: &'t M,
        items: Vec<&'t ItemNode<I>>,
    },
}

impl<M, I> SearchResult<M, I> {
    /// Decide how the result should be displayed.
    pub fn view(&self) -> SearchView<'_, M, I> {
        if self.is_complete() {
            return SearchView::FullTree {
                results_count: self.results_count,
                total_items_count: self.total_items_count,
            };
        }

        let mut entries = Vec::new();
        for group in group_by_first_found_parent(&self.filtered_tree) {
            match group.parent {
                NodeRef::Menu(menu) => entries.push(FoundEntry::Group {
                    label: menu.search.raw.as_str(),
                    menu: &menu.menu,
                    items: group.children,
                }),
                NodeRef::Root(_) | NodeRef::Item(_) => {
                    entries.extend(group.children.into_iter().map(FoundEntry::Item));
                }
            }
        }

        SearchView::Found {
            results_count: self.results_count,
            total_items_count: self.total_items_count,
            entries,
        }
    }
}
