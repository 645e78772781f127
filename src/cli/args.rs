//! CLI argument definitions using clap
//!
//! Usage:
//! - tabq --file data.csv
//! - tabq --file data.csv --where "price>500"
//! - tabq --file data.csv --where "brand=xiaomi" --aggregate "price=avg"
//! - tabq --file data.csv --order-by "rating=desc"

use clap::Parser;
use std::path::PathBuf;

/// tabq - filter, sort, and aggregate tabular files
#[derive(Parser, Debug)]
#[command(name = "tabq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file
    #[arg(long)]
    pub file: PathBuf,

    /// Filter expression, e.g. "price>500" or "brand=apple"
    #[arg(long = "where", value_name = "EXPR")]
    pub filter: Option<String>,

    /// Sort expression: field plus asc or desc, e.g. "price=asc"
    #[arg(long = "order-by", value_name = "EXPR")]
    pub order_by: Option<String>,

    /// Aggregate expression: field plus min, max, avg, or median
    #[arg(long, value_name = "EXPR")]
    pub aggregate: Option<String>,

    /// Field delimiter of the input file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
