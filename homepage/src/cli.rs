//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use home_render::UnknownSectionPolicy;

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "homepage")]
#[command(about = "Preview and check CMS home page content")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render home.json into a standalone HTML preview page
    Render {
        #[command(flatten)]
        content: ContentArgs,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Load home.json and report dropped buttons and unsupported sections
    Check {
        #[command(flatten)]
        content: ContentArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a people export and list it in display order
    People {
        /// JSON file with an array of person records
        file: PathBuf,

        /// Print the sorted records as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where the content comes from and how to render it.
#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// File path or http(s) URL of home.json [default: data/home.json]
    pub source: Option<String>,

    /// Config file [default: ./homepage.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How to handle unknown section kinds
    #[arg(long, value_enum)]
    pub unknown_sections: Option<UnknownArg>,

    /// Show richtext markup as escaped text instead of injecting it
    #[arg(long)]
    pub untrusted_richtext: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum UnknownArg {
    Fallback,
    Skip,
}

impl From<UnknownArg> for UnknownSectionPolicy {
    fn from(arg: UnknownArg) -> Self {
        match arg {
            UnknownArg::Fallback => UnknownSectionPolicy::Fallback,
            UnknownArg::Skip => UnknownSectionPolicy::Skip,
        }
    }
}

impl ContentArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            source: self.source.clone(),
            unknown_sections: self.unknown_sections.map(Into::into),
            untrusted_richtext: self.untrusted_richtext,
        }
    }
}
