mod console;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::application::{run_session, AccountService};

pub use console::{StdinReader, StdoutWriter};

const DEFAULT_LOG_FILTER: &str = "acctmgr=error";
const VERBOSE_LOG_FILTER: &str = "acctmgr=debug";

/// Acctmgr - Account Management System
#[derive(Parser)]
#[command(name = "acctmgr")]
#[command(about = "An interactive balance manager: view, credit and debit a single account")]
#[command(version)]
pub struct Cli {
    /// Log every operation to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter used when RUST_LOG is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    // Logs go to stderr so stdout carries only the menu transcript.
    fn init_logging(&self) {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| self.log_filter().into()))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    pub async fn run(self) -> Result<()> {
        self.init_logging();

        let mut service = AccountService::new();
        let mut input = StdinReader::new();
        let mut output = StdoutWriter;

        run_session(&mut service, &mut input, &mut output)
            .await
            .context("Account session ended unexpectedly")?;

        Ok(())
    }
}
