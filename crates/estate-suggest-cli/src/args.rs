use clap::{Parser, Subcommand};

/// CLI arguments for estate-suggest
#[derive(Debug, Parser)]
#[command(
    name = "estate-suggest",
    version,
    about = "Inspect and exercise the property search suggestion engine"
)]
pub struct CliArgs {
    /// Geography dataset (.json, .json.gz, .bin, .bin.gz). Defaults to the bundled sample.
    #[arg(short = 'g', long = "geo", global = true)]
    pub geo: Option<String>,

    /// Click history JSON file (created on first `click`)
    #[arg(
        short = 'H',
        long = "history",
        global = true,
        default_value = "clicks.json"
    )]
    pub history: String,

    /// Optional JSON file overriding limits, decay rate and match mode
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Code of the currently selected province (labels city/area matches)
    #[arg(long = "state", global = true)]
    pub state: Option<String>,

    /// Code of the currently selected city (labels area matches)
    #[arg(long = "city", global = true)]
    pub city: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the suggestion lists for a query (empty string for the default view)
    Suggest {
        query: String,

        /// Recent search term (repeatable)
        #[arg(long = "recent")]
        recent: Vec<String>,

        /// Trending term (repeatable)
        #[arg(long = "trending")]
        trending: Vec<String>,

        /// Recommended term (repeatable)
        #[arg(long = "smart")]
        smart: Vec<String>,

        /// Order term categories by click popularity
        #[arg(long)]
        rank: bool,
    },

    /// Match a query against provinces, cities and areas
    Locations { query: String },

    /// Record a click on a suggestion and save the history
    Click { term: String },

    /// Show the decayed popularity score and click count of a term
    Score { term: String },

    /// Order terms by decayed popularity
    Rank {
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// Show a summary of the geography and click history
    Stats,

    /// Write a binary snapshot of the geography dataset
    Cache {
        /// Output path (.bin or .bin.gz)
        out: String,
    },
}
