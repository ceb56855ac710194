use clap::Parser;
use md_link_report::config::Config;
use md_link_report::reporting::{ReportWriter, logging};
use md_link_report::runner;
use md_link_report::ui::{Cli, Commands, ProgressReporter};

use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_report_logic(&cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main report logic extracted from main() for testing
pub async fn run_report_logic(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    logging::init_logger(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Run => {
            let root = std::env::current_dir()?;
            let config = load_config(cli, root).inspect_err(|e| {
                logging::log_error("Could not load configuration", Some(e));
            })?;
            logging::log_config_info(&config);

            let mut progress = ProgressReporter::new(!cli.quiet);
            let report = runner::run(&config, Some(&mut progress)).await?;

            let writer =
                ReportWriter::new(&config.root, &config.output_dir, &config.report_file_name);
            let report_path = writer.write(&report)?;
            progress.finish_run(&report_path);

            Ok(report_path)
        }
    }
}

/// Load configuration from an explicit file, the root, or defaults
pub fn load_config(cli: &Cli, root: PathBuf) -> md_link_report::Result<Config> {
    if cli.no_config {
        Ok(Config::for_root(root))
    } else if let Some(ref config_file) = cli.config {
        Config::load_from_file(config_file, root)
    } else {
        Config::load_from_root(root)
    }
}
