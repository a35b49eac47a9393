use anyhow::Context;
use clap::Parser;

use castbind_config::CastbindConfig;

mod cli;
mod driver;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("castbind error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = CastbindConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load castbind configuration")?;
    cli.apply_to(&mut config);
    config
        .validate()
        .context("invalid configuration after applying command-line flags")?;

    if !config.generator.is_configured() {
        tracing::warn!("no namespaces selected; generated functions will be empty (use -N)");
    }

    let generated = driver::Driver::new(&config, cli.xml).generate_all(&cli.files)?;
    output::write_code(&generated, cli.output.as_deref())?;
    if cli.report {
        output::write_reports(&generated)?;
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CASTBIND_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
