//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod dashboard;
pub mod departments;
pub mod resolve;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// govdash - open-data publications per federal ministry, from GovData
#[derive(Parser, Debug)]
#[command(name = "govdash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json, html)
    #[arg(
        long,
        global = true,
        env = "GOVDASH_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GOVDASH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the CKAN action API base URL
    #[arg(long, global = true, env = "GOVDASH_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override the department hierarchy file (path or bundled name)
    #[arg(long, global = true, env = "GOVDASH_DEPARTMENTS_FILE", hide_env = true)]
    pub departments_file: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GOVDASH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the number of published datasets per federal ministry
    #[command(after_help = "\
JSON output wraps the report list in an envelope:
  {\"data\": [{\"name\": ..., \"datasetCount\": ...}], \"meta\": {...}}
Use `jq '.data'` to get the bare list of departments.")]
    Dashboard {
        /// Write the rendered output to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List the departments of the loaded hierarchy
    Departments {
        /// List every subordinate organization instead of counts
        #[arg(long, short = 's')]
        subordinates: bool,
    },

    /// Show which department an organization belongs to
    Resolve {
        /// Organization name as shown in the catalog
        name: String,
    },

    /// Show configuration and hierarchy status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   govdash completion bash > /etc/bash_completion.d/govdash
  zsh:    govdash completion zsh > \"${fpath[1]}/_govdash\"
  fish:   govdash completion fish > ~/.config/fish/completions/govdash.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
