use tracing::{error, info};

/// Resolves on Ctrl-C / SIGINT, or SIGTERM on unix (docker stop, systemd, k8s).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("SIGINT received"),
            Err(e) => {
                error!("Failed to install Ctrl-C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("SIGTERM received");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;
    use std::time::Duration;
    use tokio::signal::unix::{signal, SignalKind};

    async fn resolves_on(kind: SignalKind, name: &str) {
        // eigener Listener: Handler ist installiert, Testprozess stirbt nicht am Signal
        let _guard = signal(kind).expect("install signal listener");

        let waiter = tokio::spawn(shutdown_signal());
        // shutdown_signal registriert seine Listener beim ersten poll
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let status = Command::new("kill")
            .args([name, &std::process::id().to_string()])
            .status()
            .expect("run kill");
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), waiter)
            .await
            .expect("shutdown_signal resolves after the signal")
            .expect("shutdown task did not panic");
    }

    #[tokio::test]
    async fn resolves_on_sigterm() {
        resolves_on(SignalKind::terminate(), "-TERM").await;
    }

    #[tokio::test]
    async fn resolves_on_sigint() {
        resolves_on(SignalKind::interrupt(), "-INT").await;
    }
}
