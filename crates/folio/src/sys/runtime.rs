use crate::events::AppEvent;
use async_channel::Sender;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tokio::runtime::Runtime;

pub fn start_background_services(
    config_path: PathBuf,
    loading_delay: Duration,
    tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                let _ = tx.send_blocking(AppEvent::ContentReady);
                return;
            }
        };

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(loading_delay).await;
                    let _ = tx.send(AppEvent::ContentReady).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::config::run_async_watcher(config_path, tx).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}
