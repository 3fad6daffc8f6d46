mod config;
mod error;
mod heartbeat;
mod logging;
mod shutdown;

use config::Config;
use error::WorkerError;
use heartbeat::Heartbeat;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), WorkerError> {
    config::load_dotenv()?;

    // Config aus ENV, Fehler sind fatal (kein stiller Fallback auf Defaults)
    let config = Config::load()?;

    let rust_log = std::env::var("RUST_LOG").ok();
    logging::init(config.log_filter(rust_log.as_deref())?);

    let mut stdout = std::io::stdout();
    Heartbeat::from_config(&config)
        .run(&mut stdout, shutdown::shutdown_signal())
        .await
}
