use std::path::Path;

use clap::Parser;

use sales_report::cli::Cli;
use sales_report::config::{ConfigLoader, FileConfigLoader, ReportConfig};
use sales_report::output::ErrorOutput;
use sales_report::pipeline::{self, PipelineOptions};
use sales_report::{EXIT_SUCCESS, Result, exit_code_for, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            ErrorOutput::stderr().print_report_error(&e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let options = build_options(cli)?;
    let outcome = pipeline::run(&options)?;
    if !cli.quiet {
        println!("{outcome}");
    }
    Ok(())
}

/// Load the config file (if any), apply flag overrides and validate the result.
fn build_options(cli: &Cli) -> Result<PipelineOptions> {
    let config = load_config(cli.config.as_deref())?.with_overrides(cli.overrides());
    config.validate()?;

    Ok(PipelineOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        format: cli.format,
        config,
    })
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    path.map_or_else(
        || Ok(ReportConfig::default()),
        |p| FileConfigLoader::new().load_from_path(p),
    )
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
