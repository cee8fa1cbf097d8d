use std::fmt;

use serde::Serialize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            _ => Level::Debug,
        }
    }
}

#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    level: Level,
    component: &'a str,
    message: &'a str,
}

/// Structured logging to the browser console, one JSON record per line
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        let record = LogRecord { level, component, message };
        let line = serde_json::to_string(&record)
            .unwrap_or_else(|_| format!("[{}] {}", component, message));

        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }
    }
}

type Sink = Box<dyn Fn(Level, &str, &str) + Send + Sync>;

/// `tracing` layer that writes events through [`Logger`], using the event
/// target (e.g. `shared::view_state`) as the component
pub struct ConsoleLayer {
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new() -> Self {
        Self::with_sink(Logger::log)
    }

    fn with_sink(sink: impl Fn(Level, &str, &str) + Send + Sync + 'static) -> Self {
        Self { sink: Box::new(sink) }
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageVisitor::default();
        event.record(&mut message);

        let metadata = event.metadata();
        (self.sink)(Level::from(metadata.level()), metadata.target(), &message.0);
    }
}

/// Collects the `message` field first, then any other fields as `key=value`
#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_debug(field, &format_args!("{}", value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0.insert_str(0, &format!("{:?}", value));
        } else {
            self.0.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_log_record_shape() {
        let record = LogRecord {
            level: Level::Warn,
            component: "search-task",
            message: "stale result",
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"level":"warn","component":"search-task","message":"stale result"}"#
        );
    }

    type Captured = Arc<Mutex<Vec<(Level, String, String)>>>;

    fn capturing_layer() -> (ConsoleLayer, Captured) {
        let captured = Captured::default();
        let sink = captured.clone();
        let layer = ConsoleLayer::with_sink(move |level, component, message| {
            sink.lock()
                .unwrap()
                .push((level, component.to_string(), message.to_string()));
        });
        (layer, captured)
    }

    #[wasm_bindgen_test]
    fn test_console_layer_forwards_shared_events() {
        let (layer, captured) = capturing_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "shared::view_state", "Ignoring stale search result {}", 3);
            tracing::trace!(target: "shared::search", ticket = 4, "Lookup done");
        });

        let captured = captured.lock().unwrap();
        assert_eq!(
            *captured,
            vec![
                (
                    Level::Warn,
                    "shared::view_state".to_string(),
                    "Ignoring stale search result 3".to_string()
                ),
                (
                    Level::Debug,
                    "shared::search".to_string(),
                    "Lookup done ticket=4".to_string()
                ),
            ]
        );
    }
}
