use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    // .env vorhanden, aber kaputt (fehlende .env ist kein Fehler)
    #[error("env file error: {0}")]
    Env(#[from] dotenvy::Error),

    #[error("config error: {0}")]
    Config(#[from] figment::Error),

    #[error("heartbeat interval must be at least 1 second")]
    InvalidInterval,

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    // stdout weg (Pipe zu, Disk voll, ...) -> Prozess soll laut sterben
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
