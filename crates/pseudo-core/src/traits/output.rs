//! Output surfaces for management messages.

use std::sync::{Arc, Mutex};

use crate::management::Surface;

/// Receives the messages produced by management operations.
pub trait OutputSink: Send + Sync {
    /// Show `message` on `surface`, replacing whatever was shown there.
    fn display(&self, surface: Surface, message: &str);
}

impl<F> OutputSink for F
where
    F: Fn(Surface, &str) + Send + Sync,
{
    fn display(&self, surface: Surface, message: &str) {
        self(surface, message)
    }
}

/// An in-memory sink that keeps every displayed message.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<(Surface, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages displayed so far, oldest first.
    pub fn entries(&self) -> Vec<(Surface, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The message currently shown on `surface`.
    pub fn current(&self, surface: Surface) -> Option<String> {
        self.entries()
            .into_iter()
            .rev()
            .find(|(s, _)| *s == surface)
            .map(|(_, message)| message)
    }
}

impl OutputSink for RecordingSink {
    fn display(&self, surface: Surface, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((surface, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_tracks_current_message_per_surface() {
        let sink = RecordingSink::new();
        sink.display(Surface::Results, "first");
        sink.display(Surface::SetupResults, "setup");
        sink.display(Surface::Results, "second");

        assert_eq!(sink.entries().len(), 3);
        assert_eq!(sink.current(Surface::Results).as_deref(), Some("second"));
        assert_eq!(sink.current(Surface::SetupResults).as_deref(), Some("setup"));
    }

    #[test]
    fn recording_sink_survives_poisoned_lock() {
        let sink = RecordingSink::new();
        sink.display(Surface::Results, "before");

        let entries = Arc::clone(&sink.entries);
        let _ = std::thread::spawn(move || {
            let _guard = entries.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(sink.entries.is_poisoned());

        sink.display(Surface::Results, "after");
        let messages: Vec<String> = sink.entries().into_iter().map(|(_, m)| m).collect();
        assert_eq!(messages, ["before", "after"]);
    }

    #[test]
    fn closures_are_sinks() {
        let seen = Arc::new(Mutex::new(String::new()));
        let captured = Arc::clone(&seen);
        let sink = move |surface: Surface, message: &str| {
            *captured.lock().unwrap() = format!("{surface}={message}");
        };
        sink.display(Surface::SetupResults, "ok");
        assert_eq!(*seen.lock().unwrap(), "setup-results=ok");
    }
}
