//! PowerBill Tracker - Main entry point
//!
//! Interactive text shell for recording appliance usage and estimating
//! electricity costs.

use anyhow::Context;
use powerbill_tracker_lib::core::Config;
use powerbill_tracker_lib::shell::Shell;
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting PowerBill Tracker v{}", env!("CARGO_PKG_VERSION"));

    // Load or create configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let mut shell = Shell::from_config(&config).context("Invalid configuration")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", shell.welcome())?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        let output = shell.execute(&line);
        if !output.lines.is_empty() {
            writeln!(stdout, "{}", output.text())?;
        }
        if output.quit {
            break;
        }
    }

    log::info!(
        "Session ended with {} appliances recorded",
        shell.session().ledger().len()
    );
    Ok(())
}
