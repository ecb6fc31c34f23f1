use colored::Colorize;
use netify::cli;
use netify::config::{init_logging, Config};
use std::error::Error;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = try_main() {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    log::info!("#Start main() output={} limit={}", config.output, config.subnet_limit);

    let matches = cli::build().get_matches();
    let cli = cli::parse_matches(&matches)?;
    cli::run(&cli, &config, &mut std::io::stdout().lock())?;

    log::info!("#End main()");
    Ok(())
}
