//! Colorful console output for validlist events.
//!
//! Provides a custom `tracing` layer that formats collection events with
//! colors.
//!
//! ## Log Levels
//!
//! - **DEBUG**: Collection lifecycle (creation, rejected bulk inserts)
//! - **TRACE**: Individual inserts and queries

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "validlist_core=debug";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`, falling back to `validlist_core=debug`.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ValidlistConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats validlist events with colors.
pub struct ValidlistConsoleLayer;

impl<S: Subscriber> Layer<S> for ValidlistConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("validlist") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    element: Option<String>,
    flags: Option<String>,
    key: Option<String>,
    outcome: Option<String>,
    rejected: Option<u64>,
    rejected_flag: Option<bool>,
    matched: Option<bool>,
    len: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "element" => self.element = Some(s),
            "flags" => self.flags = Some(s),
            "key" => self.key = Some(s),
            "outcome" => self.outcome = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "rejected" => self.rejected = Some(value),
            "len" => self.len = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "rejected" => self.rejected_flag = Some(value),
            "matched" => self.matched = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "element" => self.element = Some(value.to_string()),
            "flags" => self.flags = Some(value.to_string()),
            "key" => self.key = Some(value.to_string()),
            "outcome" => self.outcome = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "collection_created" => format_created(v),
        "entries_rejected" => format_rejected(v),
        "entry_added" if level == Level::TRACE => format_added(v),
        "query" if level == Level::TRACE => format_query(v),
        _ => String::new(),
    }
}

fn format_created(v: &EventVisitor) -> String {
    format!(
        "{} Collection<{}> {}",
        "▶".bright_green().bold(),
        v.element.as_deref().unwrap_or("?").white().bold(),
        v.flags.as_deref().unwrap_or("").bright_black()
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} bound entries kept as flags only",
        "!".yellow().bold(),
        v.rejected.unwrap_or(0).bright_yellow()
    )
}

fn format_added(v: &EventVisitor) -> String {
    let icon = if v.rejected_flag.unwrap_or(false) {
        "✗".bright_red().to_string()
    } else {
        "+".bright_green().to_string()
    };
    format!(
        "{} {:<10} │ {} entries",
        icon,
        v.key.as_deref().unwrap_or("?"),
        v.len.unwrap_or(0).bright_black()
    )
}

fn format_query(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("?");
    let source = if v.matched.unwrap_or(false) {
        "matched".to_string()
    } else {
        format!("fallback {}", v.flags.as_deref().unwrap_or(""))
    };
    format!(
        "{} {} │ {}",
        "?".bright_cyan(),
        format_outcome(outcome),
        source.bright_black()
    )
}

fn format_outcome(outcome: &str) -> String {
    match outcome {
        "FAIL" => outcome.bright_red().bold().to_string(),
        "PERFECT" => outcome.bright_magenta().bold().to_string(),
        "PASS" => outcome.bright_green().to_string(),
        score => score.bright_yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("solve_start"), Level::DEBUG).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::DEBUG).is_empty());
    }

    #[test]
    fn test_trace_events_need_trace_level() {
        assert!(format_event(&visitor("query"), Level::DEBUG).is_empty());
        assert!(!format_event(&visitor("query"), Level::TRACE).is_empty());
        assert!(format_event(&visitor("entry_added"), Level::INFO).is_empty());
    }

    #[test]
    fn test_created_mentions_element_type() {
        let v = EventVisitor {
            element: Some("i32".to_string()),
            ..visitor("collection_created")
        };
        assert!(format_event(&v, Level::DEBUG).contains("i32"));
    }

    #[test]
    fn test_query_reports_outcome() {
        let v = EventVisitor {
            outcome: Some("PERFECT".to_string()),
            matched: Some(true),
            ..visitor("query")
        };
        let line = format_event(&v, Level::TRACE);
        assert!(line.contains("PERFECT"));
        assert!(line.contains("matched"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(INIT.get().is_some());
    }

    #[test]
    fn test_layer_accepts_core_events() {
        use validlist_core::{KeyedCollection, Outcome};

        init();
        let mut list: KeyedCollection<u8> = KeyedCollection::new();
        list -= 3;
        assert_eq!(list.query(&3), Outcome::FAIL);
    }
}
