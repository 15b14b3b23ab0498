//! Session-scoped user context.

/// Per-session cache of the active user and their tracking id.
///
/// The tracking id is write-once-read-many for a given user and is dropped
/// whenever the user context changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    user_id: Option<String>,
    tracking_id: Option<String>,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the active user, invalidating the cached tracking id when
    /// the user actually changes.
    pub fn set_user(&mut self, user_id: &str) {
        if self.user_id.as_deref() != Some(user_id) {
            self.user_id = Some(user_id.to_string());
            self.tracking_id = None;
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref()
    }

    pub fn cache_tracking_id(&mut self, tracking_id: &str) {
        self.tracking_id = Some(tracking_id.to_string());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
