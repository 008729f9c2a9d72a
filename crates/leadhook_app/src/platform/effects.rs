use std::sync::mpsc;
use std::thread;

use leadhook_core::{Effect, Msg, TransportFailure, WebhookResponse};
use leadhook_engine::{
    EngineEvent, EngineEvents, EngineHandle, HttpResponse, SendError, StorageBackend,
};
use leadhook_logging::{hook_info, hook_warn};

use super::persistence::Persistence;
use super::router::Router;

/// Carries out core effects. Persistence and routing finish inline; sends
/// complete later through `event_tx`.
pub struct EffectRunner<B> {
    engine: EngineHandle,
    persistence: Persistence<B>,
    router: Router,
}

impl<B: StorageBackend> EffectRunner<B> {
    pub fn new<E>(
        engine: EngineHandle,
        events: EngineEvents,
        persistence: Persistence<B>,
        event_tx: mpsc::Sender<E>,
    ) -> Self
    where
        E: From<Msg> + Send + 'static,
    {
        spawn_event_loop(events, event_tx);
        Self {
            engine,
            persistence,
            router: Router::default(),
        }
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigate(&mut self, hash: &str) -> Msg {
        self.router.navigate(hash)
    }

    /// Runs `effects` in order and returns the messages they produce right away.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_up = Vec::new();
        for effect in effects {
            match effect {
                Effect::Navigate { hash } => follow_up.push(self.router.navigate(&hash)),
                Effect::PersistSavedSets(sets) => self.persistence.save_sets(&sets),
                Effect::PersistSavedWebhooks(webhooks) => {
                    self.persistence.save_webhooks(&webhooks)
                }
                Effect::SendWebhook { url, payload } => {
                    hook_info!("SendWebhook url={} payload_len={}", url, payload.len());
                    self.engine.send(url, payload);
                }
            }
        }
        follow_up
    }
}

fn spawn_event_loop<E>(events: EngineEvents, event_tx: mpsc::Sender<E>)
where
    E: From<Msg> + Send + 'static,
{
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            let msg = match event {
                EngineEvent::SendCompleted(result) => Msg::SendCompleted(map_result(result)),
            };
            if event_tx.send(E::from(msg)).is_err() {
                break;
            }
        }
    });
}

fn map_result(
    result: Result<HttpResponse, SendError>,
) -> Result<WebhookResponse, TransportFailure> {
    match result {
        Ok(response) => {
            hook_info!("Webhook answered {} {}", response.status, response.status_text);
            Ok(WebhookResponse {
                status: response.status,
                status_text: response.status_text,
                headers: response.headers,
                body: response.body,
            })
        }
        Err(err) => {
            hook_warn!("Webhook send failed: {}", err);
            if err.is_network() {
                Err(TransportFailure::Network)
            } else {
                Err(TransportFailure::Unknown)
            }
        }
    }
}
