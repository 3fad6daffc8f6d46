use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, util::SubscriberInitExt, EnvFilter};

/// fmt subscriber; `ansi` off for pipes, files and log collectors.
pub fn subscriber<W>(filter: EnvFilter, make_writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_ansi(ansi)
        .finish()
}

/// Global logger on stderr, stdout gehört den Heartbeat-Zeilen.
pub fn init(filter: EnvFilter) {
    let ansi = std::io::stderr().is_terminal();
    subscriber(filter, std::io::stderr, ansi).init();
}
