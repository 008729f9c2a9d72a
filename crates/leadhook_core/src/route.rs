pub const WEBHOOK_HASH: &str = "#/webhook";
pub const FORM_HASH: &str = "#/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Form,
    Webhook,
}

impl Route {
    /// `#/webhook` selects the webhook screen; anything else, including empty, the form.
    pub fn from_hash(hash: &str) -> Self {
        if hash == WEBHOOK_HASH {
            Route::Webhook
        } else {
            Route::Form
        }
    }

    pub fn hash(self) -> &'static str {
        match self {
            Route::Form => FORM_HASH,
            Route::Webhook => WEBHOOK_HASH,
        }
    }
}
