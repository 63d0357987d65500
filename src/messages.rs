use std::sync::{Arc, Mutex};

/// Receives one human readable line per service outcome.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
}

/// In-memory message log, cheap to clone and share with a UI.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // a poisoned log still holds valid strings
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MessageSink for MessageLog {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_messages_in_order_until_cleared() {
        let log = MessageLog::new();
        log.add("first".to_string());
        log.add("second".to_string());
        assert_eq!(log.messages(), vec!["first", "second"]);

        let shared = log.clone();
        shared.clear();
        assert!(log.messages().is_empty());
    }
}
