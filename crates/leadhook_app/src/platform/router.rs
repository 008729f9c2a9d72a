use leadhook_core::{Msg, FORM_HASH};
use leadhook_logging::hook_debug;

/// Stands in for the location hash; every change is fed back as `HashChanged`.
#[derive(Debug, Clone)]
pub struct Router {
    hash: String,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            hash: initial.into(),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn current_msg(&self) -> Msg {
        Msg::HashChanged(self.hash.clone())
    }

    pub fn navigate(&mut self, hash: &str) -> Msg {
        hook_debug!("navigate {} -> {}", self.hash, hash);
        self.hash = hash.to_string();
        self.current_msg()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(FORM_HASH)
    }
}
