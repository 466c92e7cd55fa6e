//! Headless 3x3x3 Rubik's Cube simulator.

mod cli;
mod display;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging. `RUST_LOG` takes precedence over `--verbose`.
    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    color_eyre::install()?;

    cli::exec(args.subcommand)
}
