//! Tests for the `tracing` events emitted by validator chains.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use validator_rail::{
    ConfigurationError, ValidationOutcome, ValidationResult, Validator, ValidatorChain,
};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn output(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a TRACE-level subscriber and returns everything it logged.
fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.output()
}

struct Passing;

impl Validator<String> for Passing {
    fn validate(&self, data: &String, _: Option<&()>) -> ValidationOutcome<String> {
        Ok(ValidationResult::new(data.clone()))
    }
}

struct Misconfigured;

impl Validator<String> for Misconfigured {
    fn validate(&self, _: &String, _: Option<&()>) -> ValidationOutcome<String> {
        Err(ConfigurationError::missing_template("Misconfigured", "tooLong"))
    }
}

#[test]
fn registration_and_resort_are_logged() {
    let logs = capture(|| {
        let mut chain: ValidatorChain<String> = ValidatorChain::new();
        chain.add_validator_with_priority(Passing, 4);
        assert!(chain.validate(&"x".to_string(), None).unwrap().is_valid());
    });

    assert!(logs.contains("TRACE"));
    assert!(logs.contains("validator registered"));
    assert!(logs.contains("priority=4"));
    assert!(logs.contains("DEBUG"));
    assert!(logs.contains("validator chain re-sorted"));
    assert!(logs.contains("running validator"));
    assert!(logs.contains("validator=\"Passing\"") || logs.contains("validator=Passing"));
}

#[test]
fn sorted_chain_is_not_resorted() {
    let mut chain: ValidatorChain<String> = ValidatorChain::new();
    chain.add_validator(Passing);
    assert!(chain.validate(&"x".to_string(), None).unwrap().is_valid());

    let logs = capture(|| {
        assert!(chain.validate(&"x".to_string(), None).unwrap().is_valid());
    });

    assert!(logs.contains("running validator"));
    assert!(!logs.contains("validator chain re-sorted"));
}

#[test]
fn configuration_error_is_logged_as_warning() {
    let logs = capture(|| {
        let mut chain: ValidatorChain<String> = ValidatorChain::new();
        chain.add_validator(Misconfigured);
        assert!(chain.validate(&"x".to_string(), None).is_err());
    });

    assert!(logs.contains("WARN"));
    assert!(logs.contains("validator mis-configured"));
    assert!(logs.contains("tooLong"));
}

#[test]
fn removal_is_logged() {
    let logs = capture(|| {
        let mut chain: ValidatorChain<String> = ValidatorChain::new();
        chain.add_validator(Passing);
        assert!(chain.remove_validator("Passing"));
    });

    assert!(logs.contains("validators removed"));
    assert!(logs.contains("removed=1"));
}
