mod args;
mod config;
mod error;
mod http;
mod library;
mod notifier;
mod paths;
mod repl;

use std::fs::{self, File};
use std::sync::Arc;

use clap::Parser;
use log::{LevelFilter, info};
use simplelog::WriteLogger;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::args::Args;
use crate::config::Config;
use crate::error::CliError;
use crate::http::HttpActionClient;
use crate::notifier::TerminalNotifier;
use crate::repl::{Command, Reply, Session};

#[tokio::main]
async fn main() {
    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let config = Config::load(args.config.as_deref())?.with_args(&args);
    init_logging(config.level_filter()?);
    info!("Starting with server {}", config.server_url);

    let library_path = config.library_path().ok_or(CliError::NoLibrary)?;
    let songs = library::load(&library_path)?;
    info!("Loaded {} songs from {}", songs.len(), library_path.display());

    let root = library::page_document(&songs, &config.table);
    let client = HttpActionClient::new(&config.server_url)?;
    let mut session = Session::mount(
        root,
        config.table.clone(),
        Arc::new(client),
        Arc::new(TerminalNotifier),
    )?;

    println!("{}", session.render());
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match session.execute(command).await {
            Reply::Redraw => println!("{}", session.render()),
            Reply::Quiet => {}
            Reply::Message(text) => println!("{text}"),
            Reply::Quit => break,
        }
    }

    info!("Exiting");
    Ok(())
}

/// Log to `latest.log` in the cache directory, rotating the previous one.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, simplelog::Config::default(), file);
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}
