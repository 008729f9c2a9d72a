//! Leadhook engine: storage and webhook IO behind the pure core.
mod engine;
mod persist;
mod send;
mod store;
mod types;

pub use engine::{EngineEvents, EngineHandle};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use send::{flatten_headers, ReqwestSender, SendSettings, WebhookSender};
pub use store::{FileBackend, KeyValueStore, MemoryBackend, StorageBackend, StoreError};
pub use types::{EngineEvent, HttpResponse, SendError, SendFailureKind};
