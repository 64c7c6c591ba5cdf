//! refetch - CLI entry point.

use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::{fmt, EnvFilter};

use refetch::{
    cli::Args,
    error::{exit_codes, Error, Result},
    fetch::fetch,
    output::{create_download_bar, create_unknown_size_bar, print_error, print_success},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::InvalidUrl | Error::Header(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Timeout | Error::Transport(_) | Error::TooManyRedirects { .. } => {
                    ExitCode::from(exit_codes::NETWORK_ERROR as u8)
                }
                Error::Io(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let quiet = args.quiet;
    let mut config = args.into_config()?;

    // Wire the progress callback to a bar; the bar is created on the first
    // chunk because the expected total is unknown until a response arrives.
    let bar: Arc<Mutex<Option<ProgressBar>>> = Arc::new(Mutex::new(None));
    if !quiet {
        let bar = Arc::clone(&bar);
        config.on_progress = Some(Arc::new(move |_len, written, total| {
            let mut guard = bar.lock().unwrap();
            let pb = guard.get_or_insert_with(|| match total {
                Some(total) => create_download_bar(total),
                None => create_unknown_size_bar(),
            });
            pb.set_position(written);
        }));
    }

    let fetched = fetch(config).await?;

    if let Some(pb) = bar.lock().unwrap().take() {
        pb.finish_and_clear();
    }

    print_success(&format!(
        "saved {} bytes to {}{}",
        fetched.size,
        fetched.output.display(),
        if fetched.resumed { " (resumed)" } else { "" }
    ));

    Ok(())
}
