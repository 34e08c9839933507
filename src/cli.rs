use clap::{Parser, Subcommand};
use std::path::PathBuf;
use supply_trace::application::dto::RenderFormat;
use supply_trace::config::CliOverrides;

/// Inspect supplier quality and trace serials on the traceability demo backend
#[derive(Parser, Debug)]
#[command(name = "supply-trace")]
#[command(version)]
#[command(about = "Inspect supplier quality and trace serials on the traceability demo backend", long_about = None)]
pub struct Args {
    /// Base URL of the backend (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Path to a config file (defaults to ./supply-trace.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<RenderFormat>,

    /// Enable the admin controls (clear, seed, random serials)
    #[arg(long, global = true)]
    pub admin: bool,

    /// Disable coloured text output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log diagnostics at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Probe backend health
    Health,
    /// Load the supplier quality report
    Suppliers,
    /// Trace a serial number to its batch and supplier
    Trace {
        /// Serial number to trace
        serial: String,
    },
    /// Sample random serials (admin)
    Random {
        /// Copy the N-th sampled serial (1-based) into the trace input
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        pick: Option<u32>,
    },
    /// Load the demo data set (admin)
    Seed,
    /// Wipe all backend data after confirmation (admin)
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive session over one dashboard
    Shell,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_base: self.api_base.clone(),
            admin_controls: self.admin,
            format: self.format,
        }
    }

    /// Whether the clear command should skip the prompt
    pub fn assume_yes(&self) -> bool {
        matches!(self.command, Command::Clear { yes: true })
    }
}
