//! Glyphs used by the text renderer.
//!
//! All glyphs must be sourced from this module, with an ASCII fallback for
//! terminals without Unicode support.

pub mod icons {
    pub const MENU: &str = "▼";
    pub const ITEM: &str = "•";
    pub const GROUP: &str = "▸";
    pub const BREADCRUMB: &str = " › ";
}

pub mod icons_ascii {
    pub const MENU: &str = "[v]";
    pub const ITEM: &str = "-";
    pub const GROUP: &str = ">";
    pub const BREADCRUMB: &str = " > ";
}

/// Label shown for menus and items without text
pub const UNTITLED: &str = "(untitled)";

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Glyph set selected by Unicode support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub menu: &'static str,
    pub item: &'static str,
    pub group: &'static str,
    pub breadcrumb: &'static str,
}

impl Glyphs {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                menu: icons::MENU,
                item: icons::ITEM,
                group: icons::GROUP,
                breadcrumb: icons::BREADCRUMB,
            }
        } else {
            Self {
                menu: icons_ascii::MENU,
                item: icons_ascii::ITEM,
                group: icons_ascii::GROUP,
                breadcrumb: icons_ascii::BREADCRUMB,
            }
        }
    }
}

/// Wrap `text` in bold escape codes.
pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}
