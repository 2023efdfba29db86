use chrono::Local;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sevendays::cli::args::Cli;
use sevendays::cli::commands;
use sevendays::config::Config;
use sevendays::error::SevenDaysError;
use sevendays::output::apply_color_setting;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sevendays=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run() -> Result<(), SevenDaysError> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completions {
        print!("{}", commands::completions(shell));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    apply_color_setting(cli.color.unwrap_or(config.general.color));

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let output = commands::show(&cli, &config, today)?;

    println!("{}", output.trim_end_matches('\n'));
    Ok(())
}
