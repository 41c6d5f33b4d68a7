use bolero::catalog::EntityKind;
use bolero::commands::FieldSpec;
use bolero::params::SortOrder;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bolero", bin_name = "bolero", version)]
#[command(about = "Compose catalog searches for the Bolero backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Search form contents shared by every command that builds a search.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Fixed filter value (e.g. -F titre=Paris), repeatable
    #[arg(short = 'F', long = "fixed", value_name = "NAME=VALUE")]
    pub fixed: Vec<FieldSpec>,

    /// Add a search row (e.g. -f ean=978...), repeatable
    #[arg(short = 'f', long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<FieldSpec>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the fixed and selectable fields of an entity
    Fields {
        /// Entity type (ouvrage, recension, auteur)
        entity: EntityKind,
    },

    /// Show the fields a search row may still select
    Choices {
        entity: EntityKind,

        #[command(flatten)]
        filters: FilterArgs,

        /// Append an empty row after the given ones
        #[arg(long)]
        blank: bool,

        /// Row to compute choices for (defaults to the last row)
        #[arg(long)]
        row: Option<usize>,
    },

    /// Build the paginated list request
    #[command(alias = "ls")]
    List {
        entity: EntityKind,

        #[command(flatten)]
        filters: FilterArgs,

        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Page size (defaults to the configured page-size)
        #[arg(long)]
        limit: Option<u32>,

        /// Sort column
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (asc or desc)
        #[arg(long)]
        order: Option<SortOrder>,

        /// Print the request as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the export request (all matching records, no pagination)
    Export {
        entity: EntityKind,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the request as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (api-url, page-size, sort, order, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
