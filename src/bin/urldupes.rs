use clap::Parser;
use clap::error::ErrorKind;
use urldupes::config::Config;
use urldupes::core::constants::usage::USAGE;
use urldupes::reporting::logging;
use urldupes::scan::{ScanDirectory, Scanner};
use urldupes::ui::{Cli, cli_to_config, output};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // Usage errors go to stdout with exit status 1
                println!("{USAGE}");
                println!();
                print!("{}", err.render());
                std::process::exit(1);
            }
        },
    };

    match run_urldupes_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main scan logic extracted from main() for testing
pub fn run_urldupes_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.merge_with_cli(&cli_to_config(cli));
    config.validate()?;

    logging::init_logger(config.verbose.unwrap_or(false), config.quiet.unwrap_or(false));
    logging::log_config_info(&config);

    let report = Scanner::default()
        .scan(&cli.directory, config.scan_mode())?;

    output::display_report(&report, config.output_format())?;

    Ok(0)
}
