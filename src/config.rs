//! Configuration management for the shopping list command tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - User lexicon discovery
//! - Building the parser the rest of the program uses

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::lexicon::{Lexicon, user_lexicon_path};
use crate::parser::{CommandParser, KeywordMatch};

/// Command-line arguments for `shoplist`
#[derive(Debug, Parser)]
#[command(name = "shoplist")]
#[command(about = "Voice-style shopping list commands in English and Hindi")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,

    /// Extra lexicon file merged over the built-in vocabulary
    #[arg(long, global = true, help = "Lexicon TOML file to merge")]
    pub lexicon: Option<PathBuf>,

    /// Match intent keywords as whole words only
    #[arg(long, global = true)]
    pub strict_keywords: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Mode {
    /// Parse one transcript and print the command as JSON
    Parse {
        /// Transcript words, e.g. `add 2 milk`
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Read transcripts from stdin, one per line, and answer in JSON lines
    Serve {
        /// Reload the lexicon file when it changes
        #[arg(long)]
        watch: bool,
    },
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// User lexicon, explicit or discovered in the config directory
    pub lexicon_path: Option<PathBuf>,
    pub keyword_match: KeywordMatch,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let lexicon_path = match args.lexicon {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Lexicon file not found: {}", path.display());
                }
                Some(path)
            }
            None => user_lexicon_path().filter(|path| path.exists()),
        };

        let keyword_match = if args.strict_keywords {
            KeywordMatch::Token
        } else {
            KeywordMatch::Substring
        };

        Ok(Config {
            mode: args.mode,
            lexicon_path,
            keyword_match,
            log_level: args.log_level,
        })
    }

    /// Build a parser from the built-in lexicon plus the user lexicon, if any
    pub fn build_parser(&self) -> Result<CommandParser> {
        let lexicon = Lexicon::with_user_file(self.lexicon_path.as_deref())?;
        Ok(CommandParser::new(Arc::new(lexicon)).with_keyword_match(self.keyword_match))
    }
}
