use clap::Parser;
use std::process::ExitCode;
use tasklist::cli::{run_menu, Cli};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Stdout carries the table, so diagnostics go to stderr
    if cli.debug || std::env::var("TASKLIST_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tasklist=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    run_menu(cli.color.swatch_style())
}
