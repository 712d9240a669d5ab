//! toast-notify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use toast_notify::cli::{run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    run(Cli::parse()).await
}
