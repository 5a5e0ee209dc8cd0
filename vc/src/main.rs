use std::io::{self, Read};

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use displaysurface::{DisplaySurface, RegionStyle, TerminalSurface};
use vowelcipher::CipherApp;
use vowelcipher::app::{INPUT_FIELD, OUTPUT_FIELD, STATUS_REGION};
use vowelcipher::cli::{Cli, Command};
use vowelcipher::config::Config;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        }
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

/// Text from the argument, or all of stdin minus the final newline
fn read_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("vowelcipher starting");

    // Notices go to stderr so stdout carries only the transformed text
    let mut surface = TerminalSurface::new(io::stderr()).with_style(STATUS_REGION, RegionStyle::Notice);
    let filter = config.filter_input && !cli.no_filter;

    match cli.command {
        Command::Encrypt { text, copy } => {
            let app = CipherApp::new(config.scheme, filter);
            surface.set_input_value(INPUT_FIELD, &read_text(text)?);
            app.on_input(&mut surface);
            app.encrypt(&mut surface);
            println!("{}", surface.read_input_value(OUTPUT_FIELD));
            if copy {
                app.copy(&mut surface);
            }
        }
        Command::Decrypt { text, copy, scheme } => {
            let app = CipherApp::new(scheme.unwrap_or(config.scheme), filter);
            debug!(scheme = %app.scheme(), "main: decrypting");
            surface.set_input_value(INPUT_FIELD, &read_text(text)?);
            app.on_input(&mut surface);
            app.decrypt(&mut surface);
            println!("{}", surface.read_input_value(OUTPUT_FIELD));
            if copy {
                app.copy(&mut surface);
            }
        }
        Command::Filter { text } => {
            let app = CipherApp::new(config.scheme, true);
            surface.set_input_value(INPUT_FIELD, &read_text(text)?);
            app.on_input(&mut surface);
            println!("{}", surface.read_input_value(INPUT_FIELD));
        }
    }

    Ok(())
}
