use std::sync::{mpsc, Arc};
use std::thread;

use leadhook_logging::{hook_error, hook_info};

use crate::send::{ReqwestSender, SendSettings, WebhookSender};
use crate::{EngineEvent, SendError, SendFailureKind};

enum EngineCommand {
    Send { url: String, payload: String },
}

/// Submits work to the engine thread. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receives completions from the engine thread.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SendSettings) -> (Self, EngineEvents) {
        Self::with_sender(Arc::new(ReqwestSender::new(settings)))
    }

    /// Runs every send through `sender` on a runtime owned by a background thread.
    pub fn with_sender(sender: Arc<dyn WebhookSender>) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    hook_error!("Failed to start engine runtime: {}", err);
                    reject_all(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let sender = sender.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(sender.as_ref(), command, event_tx).await;
                });
            }
            hook_info!("Engine command channel closed");
        });

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    pub fn send(&self, url: impl Into<String>, payload: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Send {
            url: url.into(),
            payload: payload.into(),
        });
    }
}

impl EngineEvents {
    /// Blocks until the next event; `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    sender: &dyn WebhookSender,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Send { url, payload } => {
            let result = sender.send(&url, &payload).await;
            let _ = event_tx.send(EngineEvent::SendCompleted(result));
        }
    }
}

fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(EngineCommand::Send { .. }) = cmd_rx.recv() {
        let err = SendError::new(SendFailureKind::Client, reason);
        let _ = event_tx.send(EngineEvent::SendCompleted(Err(err)));
    }
}
