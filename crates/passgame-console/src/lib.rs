//! Colourful console output for PassGame.
//!
//! Provides a `tracing` layer that formats game events (`event = "..."`)
//! with colours. Events from other targets and unknown events are ignored.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Directive applied on top of `RUST_LOG`.
pub const DEFAULT_DIRECTIVE: &str = "passgame=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Does nothing
/// if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(GameConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats game events with colours.
pub struct GameConsoleLayer;

impl<S: Subscriber> Layer<S> for GameConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("passgame") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    fields: BTreeMap<&'static str, String>,
}

impl EventVisitor {
    fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.fields
            .insert(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name(), value.to_string());
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    let Some(event) = v.get("event") else {
        return String::new();
    };

    let body = match event {
        "validation_pass" => format!(
            "pass: {} satisfied, {} visible, {} newly satisfied",
            v.or("satisfied", "0").bright_green(),
            v.or("visible", "0").bright_yellow(),
            v.or("newly_satisfied", "0").white(),
        ),
        "difficulty_fallback" => format!(
            "unknown difficulty {} - using {}",
            v.or("requested", "?").bright_red(),
            v.or("fallback", "basic").bright_cyan(),
        ),
        "unknown_rule_id" => format!(
            "difficulty {} lists unknown rule {}",
            v.or("difficulty", "?").bright_cyan(),
            v.or("rule_id", "?").bright_red(),
        ),
        "predicate_failed" | "predicate_panicked" => format!(
            "rule {} could not be checked: {}",
            v.or("rule_id", "?").bright_yellow(),
            v.or("error", "unknown error").red(),
        ),
        "challenge_refreshed" => {
            let detail = v.get("name").or(v.get("word")).unwrap_or("");
            format!(
                "{} refreshed {}",
                v.or("challenge", "challenge").bright_magenta(),
                detail.white(),
            )
        }
        "milestone" => format!(
            "{} reached rule {}",
            player(v).bright_cyan(),
            v.or("rule_id", "?").bright_yellow().bold(),
        ),
        "game_completed" => format!(
            "{} {} all {} rules on {} in {}",
            player(v).bright_cyan(),
            "completed".bright_green().bold(),
            v.or("total", "?").white(),
            v.or("difficulty", "?").bright_cyan(),
            format_duration_ms(duration_ms(v)).yellow(),
        ),
        _ => return String::new(),
    };

    format!(
        "{} {} {} {}",
        timestamp().bright_black(),
        level_tag(level),
        "[PassGame]".bright_cyan(),
        body
    )
}

fn duration_ms(v: &EventVisitor) -> u64 {
    v.get("duration_ms").and_then(|s| s.parse().ok()).unwrap_or(0)
}

fn player(v: &EventVisitor) -> String {
    match (v.get("player").filter(|p| !p.is_empty()), v.get("session")) {
        (Some(player), _) => player.to_string(),
        (None, Some(session)) => format!("session {session}"),
        (None, None) => "player".to_string(),
    }
}

fn level_tag(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => "WARN ".bright_yellow().to_string(),
        Level::INFO => "INFO ".bright_green().to_string(),
        _ => "DEBUG".bright_black().to_string(),
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(fields: &[(&'static str, &str)]) -> EventVisitor {
        EventVisitor {
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    fn plain(s: &str) -> String {
        // Strip ANSI escape sequences.
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn events_without_a_name_are_skipped() {
        assert!(format_event(Level::INFO, &visitor(&[("message", "hi")])).is_empty());
        assert!(format_event(Level::INFO, &visitor(&[("event", "something_else")])).is_empty());
    }

    #[test]
    fn milestone_names_the_player() {
        let v = visitor(&[("event", "milestone"), ("player", "ada"), ("rule_id", "7")]);
        let line = plain(&format_event(Level::INFO, &v));
        assert!(line.contains("[PassGame]"));
        assert!(line.ends_with("ada reached rule 7"), "{line}");
    }

    #[test]
    fn completion_falls_back_to_session_id() {
        let v = visitor(&[
            ("event", "game_completed"),
            ("session", "s-1"),
            ("total", "6"),
            ("difficulty", "basic"),
            ("duration_ms", "65000"),
        ]);
        let line = plain(&format_event(Level::INFO, &v));
        assert!(line.ends_with("session s-1 completed all 6 rules on basic in 1m 5s"), "{line}");
    }

    #[test]
    fn warnings_are_tagged() {
        let v = visitor(&[("event", "difficulty_fallback"), ("requested", "x")]);
        let line = plain(&format_event(Level::WARN, &v));
        assert!(line.contains("WARN"));
        assert!(line.ends_with("unknown difficulty x - using basic"), "{line}");
    }

    #[derive(Clone, Default)]
    struct Capture(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            let line = format_event(*event.metadata().level(), &visitor);
            if !line.is_empty() {
                self.0.lock().unwrap().push(plain(&line));
            }
        }
    }

    #[test]
    fn engine_failures_name_the_rule() {
        use passgame_core::{validate, PriorState, RuleSet};
        use passgame_test::{contains, unavailable};

        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut set: RuleSet<()> =
                RuleSet::from_definitions("t", vec![contains(1, "a"), unavailable(2, "daily word")])
                    .unwrap();
            validate(&mut set, "a", &PriorState::new(), &());
        });

        let lines = capture.0.lock().unwrap();
        let failure = lines
            .iter()
            .find(|l| l.contains("could not be checked"))
            .expect("predicate failure is printed");
        assert!(failure.contains("WARN"), "{failure}");
        assert!(failure.contains("rule 2 could not be checked"), "{failure}");
        assert!(failure.contains("daily word"), "{failure}");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        assert!(INIT.get().is_some());
    }
}
