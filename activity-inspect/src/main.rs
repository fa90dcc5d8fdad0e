use std::io::{self, Read, Write};

use activity_inspect::inspect::inspect;
use activity_inspect::{Config, Result};
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    configure_logging(&config);

    let mut raw = Vec::new();
    io::stdin().lock().read_to_end(&mut raw)?;

    let report = match inspect(&raw, &config) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Failed to inspect activity");
            return Err(e);
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(&report.encoded)?;
    stdout.write_all(b"\n")?;

    Ok(())
}

fn configure_logging(config: &Config) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
