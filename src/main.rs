use clap::Parser;
use motifmark::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{plot, scan},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Plot(_) => "plot",
        Command::Scan(_) => "scan",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Plot(args) => plot::motifmark(args)?,
        Command::Scan(args) => scan::scan(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
