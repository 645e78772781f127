//! Top-level command: read, process, print

use super::args::Cli;
use super::errors::{CliError, CliResult};
use crate::engine::{Pipeline, PipelineSpec};
use crate::reader::CsvReader;
use crate::render::Renderer;

/// Parses arguments, runs one invocation, prints the result
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let rendered = execute(&cli)?;
    println!("{}", rendered);
    Ok(())
}

/// Runs one invocation end to end, returning the rendered result
pub fn execute(cli: &Cli) -> CliResult<String> {
    let delimiter =
        u8::try_from(cli.delimiter).map_err(|_| CliError::InvalidDelimiter(cli.delimiter))?;

    let dataset = CsvReader::read_with_delimiter(&cli.file, delimiter)?;

    let spec = PipelineSpec {
        filter: cli.filter.clone(),
        order_by: cli.order_by.clone(),
        aggregate: cli.aggregate.clone(),
    };
    let output = Pipeline::run(dataset, &spec)?;

    Ok(if cli.json {
        Renderer::json(&output)
    } else {
        Renderer::table(&output)
    })
}
