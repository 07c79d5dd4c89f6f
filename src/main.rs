//! CLI for subject-observer
//!
//! Subcommands:
//! - `demo`: replay the attach/detach walkthrough
//! - `broadcast`: publish the given messages to a set of observers

use clap::{Parser, Subcommand};
use subject_observer::config::load_config;
use subject_observer::demo;
use subject_observer::utils::error::Result;
use subject_observer::utils::logging;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "subject-observer")]
struct Cli {
    /// Log level, overriding the configured one
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay the attach/detach walkthrough
    Demo,
    /// Publish messages to a fresh set of observers
    Broadcast {
        /// Number of observers to attach
        #[arg(long, default_value_t = 3)]
        observers: usize,
        /// Run the business-logic trigger after the messages
        #[arg(long)]
        business_logic: bool,
        /// Messages to publish, in order
        messages: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        // no-op when logging was already set up
        logging::init("error");
        error!("subject-observer failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    dotenvy::dotenv().ok();
    let config = load_config()?;
    logging::init(cli.log_level.as_deref().unwrap_or(&config.logging.level));

    let report = match cli.command {
        Command::Demo => demo::run(&config.subject),
        Command::Broadcast {
            observers,
            business_logic,
            messages,
        } => demo::broadcast(&config.subject, observers, &messages, business_logic),
    };

    for (id, message) in &report.last_messages {
        info!("Observer \"{}\" last heard: {:?}", id, message);
    }
    Ok(())
}
