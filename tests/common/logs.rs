//! Log capture
//!
//! A `tracing_subscriber::Layer` that records the formatted message of every
//! event. Installed as the thread's default subscriber, so tests must run on a
//! current-thread runtime (the `#[tokio::test]` default).

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use super::LINE_PREFIX;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Default)]
pub struct CapturedLogs {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start capturing on this thread until the guard is dropped
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    pub fn all(&self) -> Vec<CapturedLine> {
        self.lines.lock().unwrap().clone()
    }

    /// Messages of the lines written by the error logger
    pub fn error_lines(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|line| line.message.starts_with(LINE_PREFIX))
            .map(|line| line.message)
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.lines.lock().unwrap().push(CapturedLine {
                level: *event.metadata().level(),
                message,
            });
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}
