//! Command-line configuration.

use clap::{Parser, Subcommand};

use catalogue_insights::DEFAULT_PERCENTILE;

pub const DEFAULT_BASE_URL: &str = "https://d30r5p5favh3z8.cloudfront.net";
pub const DEFAULT_USERNAME: &str = "brickfan35";

#[derive(Parser, Debug)]
#[command(name = "catalogue", version, about = "Check which building sets a user's collection can build")]
pub struct Cli {
    /// Base URL of the catalogue service
    #[arg(long, env = "CATALOGUE_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Sets the user can build from their own collection (default command)
    BuildableSets {
        #[arg(default_value = DEFAULT_USERNAME)]
        username: String,
    },
    /// Pieces the user lacks for one set
    MissingPieces { username: String, set_id: String },
    /// Other users whose collections make up what the user lacks for a set
    Collaborators { username: String, set_name: String },
    /// Recommended maximum size for a custom build
    BuildSize {
        username: String,
        /// Brick-count percentile of the users the build should suit, in (0, 1]
        #[arg(long, default_value_t = DEFAULT_PERCENTILE)]
        percentile: f64,
    },
    /// Sets buildable only by substituting colours within a design
    ColorFlexibility { username: String },
    /// All users known to the catalogue
    Users,
}

impl Cli {
    /// The command to run; no subcommand means the buildable-sets report for
    /// the default user.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::BuildableSets {
            username: DEFAULT_USERNAME.to_string(),
        })
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
