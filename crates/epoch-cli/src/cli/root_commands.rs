use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Click a point on the map and print the markers that result.
    Click(ClickArgs),
    /// Convert between signed years and year labels.
    Year {
        #[command(subcommand)]
        action: YearCommands,
    },
    /// Year range validation.
    Range {
        #[command(subcommand)]
        action: RangeCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ClickArgs {
    /// Latitude of the clicked point, in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the clicked point, in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Start year label (e.g. "500 BCE"). Defaults to `years.default_start`.
    #[arg(long)]
    pub start: Option<String>,

    /// End year label (e.g. "2024 CE"). Defaults to `years.default_end`.
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum YearCommands {
    /// Format a signed year (negative = BCE) as a label.
    Format {
        #[arg(allow_negative_numbers = true)]
        year: i64,
    },
    /// Parse a label such as "44 BCE" into a signed year.
    Parse { label: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum RangeCommands {
    /// Apply the field-change check as if the user had just edited one field.
    Check(RangeCheckArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RangeCheckArgs {
    #[arg(long)]
    pub start: String,

    #[arg(long)]
    pub end: String,

    /// Which field was edited.
    #[arg(long, value_enum, default_value = "start")]
    pub edited: EditedField,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum EditedField {
    Start,
    End,
}
