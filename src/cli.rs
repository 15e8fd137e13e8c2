use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// menu-tree - inspect and search dropdown menu definitions
#[derive(Parser, Debug)]
#[command(name = "menu-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./menu-tree.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use ASCII glyphs only
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the menu tree
    Tree {
        /// Menu definition file (.toml, .json, .yaml)
        file: PathBuf,
    },

    /// Search menus and items by label
    Search {
        /// Menu definition file (.toml, .json, .yaml)
        file: PathBuf,

        /// Text to look for (empty matches everything)
        #[arg(default_value = "")]
        query: String,

        /// Treat the query as a regular expression
        #[arg(long)]
        regex: bool,
    },

    /// Print every item with its breadcrumb
    Flatten {
        /// Menu definition file (.toml, .json, .yaml)
        file: PathBuf,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Tree { .. } => "tree",
            Commands::Search { .. } => "search",
            Commands::Flatten { .. } => "flatten",
        }
    }
}
