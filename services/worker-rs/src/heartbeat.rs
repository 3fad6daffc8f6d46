//! Liveness loop watched by the supervisor (docker, systemd, k8s log probes).
//!
//! Stdout carries exactly two line shapes: one [`STARTED_LINE`] at launch,
//! then one [`HEARTBEAT_LINE`] per interval. Diagnostics go through `tracing`.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::WorkerError;

pub const STARTED_LINE: &str = "Hello, World! Worker started.";
pub const HEARTBEAT_LINE: &str = "Worker heartbeat.";

pub struct Heartbeat {
    interval: Duration,
    beats: u64,
}

impl Heartbeat {
    pub fn new(interval: Duration) -> Self {
        Self { interval, beats: 0 }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.heartbeat_interval())
    }

    /// Writes the start line, then one heartbeat line per interval until
    /// `shutdown` resolves. Write errors end the loop and are returned as is.
    pub async fn run<W, F>(&mut self, out: &mut W, shutdown: F) -> Result<(), WorkerError>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        emit(out, STARTED_LINE)?;
        info!(interval_secs = self.interval.as_secs(), "Worker started");

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                // shutdown gewinnt, wenn beides gleichzeitig fertig ist
                biased;
                _ = &mut shutdown => break,
                _ = sleep(self.interval) => {
                    emit(out, HEARTBEAT_LINE)?;
                    self.beats += 1;
                    debug!(seq = self.beats, "Heartbeat emitted");
                }
            }
        }

        out.flush()?;
        info!(beats = self.beats, "Worker stopped");
        Ok(())
    }
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<(), WorkerError> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
