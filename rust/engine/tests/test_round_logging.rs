use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

use tablestakes_engine::action::Action;
use tablestakes_engine::round::BettingRound;
use tablestakes_engine::table::{Table, TableConfig};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    entries: Arc<Mutex<Vec<Captured>>>,
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.entries.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

fn capture(f: impl FnOnce()) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let entries = layer.entries.clone();
    let subscriber = Registry::default().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = entries.lock().unwrap().clone();
    out
}

fn field<'e>(entry: &'e Captured, name: &str) -> Option<&'e str> {
    entry
        .fields
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn round_start_and_end_are_info() {
    let logs = capture(|| {
        let mut t = Table::with_seed(&["ann", "bob"], TableConfig::default(), 1).unwrap();
        let mut round = BettingRound::new(&mut t);
        while let Some(seat) = round.next_turn().unwrap() {
            round.submit_action(seat, Action::check()).unwrap();
        }
        round.finish().unwrap();
    });

    let info: Vec<&str> = logs
        .iter()
        .filter(|e| e.level == Level::INFO)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(info, vec!["betting round started", "betting round ended"]);

    let applied: Vec<&Captured> = logs
        .iter()
        .filter(|e| e.level == Level::DEBUG && e.message == "action applied")
        .collect();
    assert_eq!(applied.len(), 2);
    assert_eq!(field(applied[0], "seat"), Some("0"));
    assert_eq!(field(applied[0], "action"), Some("check"));
}

#[test]
fn invalid_attempt_is_a_warning() {
    let logs = capture(|| {
        let mut t = Table::with_seed(&["ann", "bob"], TableConfig::default(), 1).unwrap();
        let mut round = BettingRound::new(&mut t);
        round.next_turn().unwrap();
        let _ = round.submit_action(0, Action::bet(75).unwrap());
        round.submit_action(0, Action::check()).unwrap();
        round.next_turn().unwrap();
        round.submit_action(1, Action::check()).unwrap();
        round.next_turn().unwrap();
        round.finish().unwrap();
    });

    let warnings: Vec<&Captured> = logs.iter().filter(|e| e.level == Level::WARN).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "invalid action");
    assert_eq!(field(warnings[0], "action"), Some("bet 75"));
    assert!(field(warnings[0], "reason")
        .unwrap()
        .contains("not a multiple of the chip unit 50"));
}

#[test]
fn abandoned_round_is_reported() {
    let logs = capture(|| {
        let mut t = Table::with_seed(&["ann", "bob"], TableConfig::default(), 1).unwrap();
        let mut round = BettingRound::new(&mut t);
        round.next_turn().unwrap();
    });
    assert!(logs
        .iter()
        .any(|e| e.level == Level::WARN && e.message == "betting round dropped before it ended"));
}
