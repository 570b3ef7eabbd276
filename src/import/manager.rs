use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::import::{
    decoder::{ImageDecoder, PngDecoder, load_image},
    types::{ImportCompletion, ImportError, ImportTicket},
};

/// Runs image decodes in the background and hands completions back to the
/// synchronous event loop that owns the controller.
pub struct ImportManager {
    runtime: tokio::runtime::Handle,
    decoder: Arc<dyn ImageDecoder>,
    completion_tx: mpsc::UnboundedSender<ImportCompletion>,
    completion_rx: mpsc::UnboundedReceiver<ImportCompletion>,
    /// Decodes spawned but not yet collected.
    pending: usize,
}

impl ImportManager {
    /// Create an import manager using the default PNG decoder.
    ///
    /// # Arguments
    /// * `runtime_handle` - Tokio runtime handle for spawning decode tasks
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self::with_decoder(runtime_handle, Arc::new(PngDecoder))
    }

    /// Create an import manager with a custom decoder (useful for testing).
    pub fn with_decoder(
        runtime_handle: &tokio::runtime::Handle,
        decoder: Arc<dyn ImageDecoder>,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            runtime: runtime_handle.clone(),
            decoder,
            completion_tx,
            completion_rx,
            pending: 0,
        }
    }

    /// Start decoding `path` in the background.
    ///
    /// This is non-blocking; the completion is collected later with
    /// [`try_completions`](Self::try_completions) or [`wait_all`](Self::wait_all).
    pub fn request(&mut self, ticket: ImportTicket, path: PathBuf) {
        let decoder = self.decoder.clone();
        let tx = self.completion_tx.clone();
        self.pending += 1;

        let runtime = self.runtime.clone();
        self.runtime.spawn(async move {
            let task_path = path.clone();
            let decode = runtime
                .spawn(async move { load_image(decoder.as_ref(), ticket, &task_path).await });

            // Every request reports back, even when the decoder panics
            let completion = match decode.await {
                Ok(completion) => completion,
                Err(err) => {
                    log::warn!("Import #{} task failed: {err}", ticket.generation);
                    ImportCompletion {
                        ticket,
                        path,
                        result: Err(ImportError::Task(err.to_string())),
                    }
                }
            };
            if tx.send(completion).is_err() {
                log::debug!(
                    "Import #{} finished after the manager shut down",
                    ticket.generation
                );
            }
        });
    }

    /// Number of decodes still outstanding.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Collect every decode that has already finished, without blocking.
    pub fn try_completions(&mut self) -> Vec<ImportCompletion> {
        let mut done = Vec::new();
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            done.push(completion);
        }
        done
    }

    /// Block until every outstanding decode has finished, in completion order.
    ///
    /// Must not be called from inside the runtime's async context.
    pub fn wait_all(&mut self) -> Vec<ImportCompletion> {
        let mut done = Vec::new();
        while self.pending > 0 {
            match self.completion_rx.blocking_recv() {
                Some(completion) => {
                    self.pending -= 1;
                    done.push(completion);
                }
                None => break,
            }
        }
        done
    }
}
