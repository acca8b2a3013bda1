// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vauchi Pin CLI
//!
//! Computes relay key pins from certificates and checks certificate chains
//! against a pin set.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "vauchi-pin")]
#[command(version, about = "Compute and check relay public key pins")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON pin configuration file
    #[arg(long, global = true, env = "VAUCHI_PINS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pin of every certificate in the given files
    Hash {
        /// PEM bundles or DER certificates
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Check a certificate chain against the configured pins
    Check {
        /// PEM bundle (leaf first) or DER certificate
        file: PathBuf,

        /// Pinned key hash (base64); may be repeated
        #[arg(long = "pin", value_name = "PIN")]
        pins: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vauchi_pin=info,vauchi_pinning=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Hash { files } => {
            commands::hash::run(&files)?;
        }
        Commands::Check { file, pins } => {
            let config = CliConfig {
                config_path: cli.config,
                pins,
            };
            if !commands::check::run(&file, &config)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "vauchi-pin", &mut io::stdout());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            display::error(&format!("{:#}", err));
            ExitCode::from(2)
        }
    }
}
