use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use flatmat_cli::config::MatrixConfig;
use flatmat_cli::report::run_report;

fn matrix_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("rows")
                .short('r')
                .long("rows")
                .help("Number of rows. Overrides the value from the configuration file.")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("cols")
                .short('c')
                .long("cols")
                .help("Number of columns. Overrides the value from the configuration file.")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .help(
                    "Element type, as a type code (b h i q B H I Q f d) or a name (i32, f64, ...). \
                     Overrides the value from the configuration file.",
                )
                .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        )
        .arg(
            Arg::new("fill")
                .short('f')
                .long("fill")
                .help("Initial value of every element, as a JSON number.")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .allow_negative_numbers(true),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("FLATMAT_LOG", "error"))
        .init();

    let matches = Command::new("flatmat")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Row-major matrix over a single flat buffer, with aliasing row and column views")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(matrix_args(
            Command::new("demo")
                .about("Build the default 3x4 matrix, write 99 at (1, 2) and print its views"),
        ))
        .subcommand(matrix_args(
            Command::new("show")
                .about("Build a matrix from a JSON configuration file and print its views")
                .arg(
                    Arg::new("config")
                        .help("Path to matrix JSON configuration file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        ))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_m)) => handle_report(None, sub_m),
        Some(("show", sub_m)) => {
            let config_path = sub_m.get_one::<PathBuf>("config");
            log::info!("[flatmat] Building matrix from config: {:?}", config_path);
            handle_report(config_path, sub_m)
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_report(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<()> {
    let config = MatrixConfig::from_arguments(config_path.map(PathBuf::as_path), matches)?;
    log::debug!("Effective config: {:?}", config);

    match run_report(&config) {
        Ok(report) => {
            print!("{}", report);
            Ok(())
        }
        Err(e) => {
            log::error!("Report failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
