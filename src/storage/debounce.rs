// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Debounced storage writes.
//!
//! A worker task coalesces rapid pushes into one write: only the latest value
//! is kept, the deadline resets on every push, and the value is flushed once
//! the deadline passes, on an explicit `flush`, or when the writer is
//! dropped. Write failures are logged and dropped (the host retries on the
//! next edit).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;

use super::WidgetDataStorage;

enum Command {
    Push(String),
    Flush(oneshot::Sender<()>),
}

/// Coalescing writer for one storage key.
pub struct DebouncedTextWriter {
    tx: mpsc::UnboundedSender<Command>,
}

impl DebouncedTextWriter {
    /// Spawns the worker task; requires a running tokio runtime.
    pub fn new(
        storage: Arc<dyn WidgetDataStorage>,
        key: impl Into<String>,
        delay: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(rx, storage, key.into(), delay));
        Self { tx }
    }

    /// Records `text` as the pending value and restarts the idle timer.
    pub fn push(&self, text: impl Into<String>) {
        if self.tx.send(Command::Push(text.into())).is_err() {
            log::warn!("debounced writer worker is gone; dropping pending text");
        }
    }

    /// Cancels the timer and writes the pending value immediately.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(Command::Flush(ack_tx)).is_err() {
            return;
        }
        let _ = ack_rx.await;
    }
}

async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<Command>,
    storage: Arc<dyn WidgetDataStorage>,
    key: String,
    delay: Duration,
) {
    let mut pending: Option<String> = None;
    let mut deadline = Instant::now();

    loop {
        let command = if pending.is_some() {
            tokio::select! {
                command = rx.recv() => command,
                () = tokio::time::sleep_until(deadline) => {
                    if let Some(text) = pending.take() {
                        write(storage.as_ref(), &key, &text).await;
                    }
                    continue;
                }
            }
        } else {
            rx.recv().await
        };

        match command {
            Some(Command::Push(text)) => {
                pending = Some(text);
                deadline = Instant::now() + delay;
            }
            Some(Command::Flush(ack)) => {
                if let Some(text) = pending.take() {
                    write(storage.as_ref(), &key, &text).await;
                }
                let _ = ack.send(());
            }
            // Writer dropped: flush what is left and stop.
            None => {
                if let Some(text) = pending.take() {
                    write(storage.as_ref(), &key, &text).await;
                }
                break;
            }
        }
    }
}

async fn write(storage: &dyn WidgetDataStorage, key: &str, text: &str) {
    if let Err(err) = storage.set_text(key, text).await {
        log::error!("debounced write for key `{key}` failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::DebouncedTextWriter;
    use crate::storage::memory::InMemoryWidgetDataStorage;
    use crate::storage::WidgetDataStorage;

    const DELAY: Duration = Duration::from_millis(3000);

    #[tokio::test(start_paused = true)]
    async fn flushes_after_the_idle_interval() {
        let storage = Arc::new(InMemoryWidgetDataStorage::new());
        let writer = DebouncedTextWriter::new(storage.clone(), "note", DELAY);

        writer.push("draft");
        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;

        assert_eq!(
            storage.get_text("note").await.expect("get").as_deref(),
            Some("draft")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn coalesces_rapid_pushes_into_the_latest_value() {
        let storage = Arc::new(InMemoryWidgetDataStorage::new());
        let writer = DebouncedTextWriter::new(storage.clone(), "note", DELAY);

        writer.push("first");
        tokio::time::sleep(Duration::from_millis(1000)).await;
        writer.push("second");
        tokio::time::sleep(Duration::from_millis(1000)).await;

        // Still inside the debounce window of the second push.
        assert_eq!(storage.get_text("note").await.expect("get"), None);

        tokio::time::sleep(DELAY).await;
        assert_eq!(
            storage.get_text("note").await.expect("get").as_deref(),
            Some("second")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_flush_writes_immediately() {
        let storage = Arc::new(InMemoryWidgetDataStorage::new());
        let writer = DebouncedTextWriter::new(storage.clone(), "note", DELAY);

        writer.push("draft");
        writer.flush().await;

        assert_eq!(
            storage.get_text("note").await.expect("get").as_deref(),
            Some("draft")
        );

        // The timer was cancelled; nothing further is written.
        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(
            storage.get_text("note").await.expect("get").as_deref(),
            Some("draft")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn flush_without_pending_value_is_a_no_op() {
        let storage = Arc::new(InMemoryWidgetDataStorage::new());
        let writer = DebouncedTextWriter::new(storage.clone(), "note", DELAY);

        writer.flush().await;

        assert_eq!(storage.get_text("note").await.expect("get"), None);
    }
}
