use std::process::ExitCode;

use tokio::io::{BufReader, BufWriter};

use microhttpd::config::Config;
use microhttpd::error::{Failure, Outcome};
use microhttpd::http::connection::Connection;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let loaded = Config::load();
    let settings = loaded
        .as_ref()
        .map(|cfg| cfg.settings.clone())
        .unwrap_or_default();

    // stdout carries the response
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(settings.log_level())
        .init();

    let mut conn = Connection::new(
        BufReader::new(tokio::io::stdin()),
        BufWriter::new(tokio::io::stdout()),
        ".",
        &settings,
    );

    let outcome = match loaded {
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            conn.reject(Failure::from(&e)).await
        }
        Ok(cfg) => match std::env::set_current_dir(&cfg.root) {
            Err(e) => {
                tracing::error!(root = %cfg.root.display(), error = %e, "document root not accessible");
                conn.reject(Failure::directory_not_accessible()).await
            }
            Ok(()) => {
                tracing::debug!(root = %cfg.root.display(), "serving request");
                conn.run().await
            }
        },
    };

    Ok(match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Failure(_) => ExitCode::FAILURE,
    })
}
