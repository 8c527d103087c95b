use crate::cli::Cli;
use crate::errors::AppResult;
use crate::services::console::Console;
use crate::services::session::run_session;
use clap::Parser;
use log::info;
use std::io;

mod cli;
mod consts;
mod errors;
mod models;
mod services;
mod state;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    info!("Application started");

    let args = Cli::parse();

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_session(&mut console, &args.data_dir)?;

    Ok(())
}
