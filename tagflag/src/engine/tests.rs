//! Tests for the `clap`-backed flag engine.

#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface engine mistakes"
)]

use super::*;
use crate::FlagError;
use clap::error::ErrorKind;
use rstest::{fixture, rstest};

fn spec(name: &str, kind: ScalarKind, default: ScalarValue) -> FlagSpec {
    FlagSpec {
        name: name.to_owned(),
        field: name.to_owned(),
        kind,
        default,
        description: String::new(),
    }
}

fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|token| (*token).to_owned()).collect()
}

#[fixture]
fn engine() -> ClapEngine {
    let mut engine = ClapEngine::new("engine-test");
    for flag in [
        spec("Age", ScalarKind::Int64, ScalarValue::Int64(20)),
        spec("IQ", ScalarKind::Int32, ScalarValue::Int32(42)),
        spec("Name", ScalarKind::Text, ScalarValue::Text("anon".to_owned())),
        spec("GDP", ScalarKind::Float64, ScalarValue::Float64(1.5)),
        spec("Verbose", ScalarKind::Bool, ScalarValue::Bool(false)),
    ] {
        engine.register(flag).expect("register flag");
    }
    engine
}

#[rstest]
fn unsupplied_flags_report_their_defaults(mut engine: ClapEngine) {
    engine.parse(Vec::new()).expect("parse");
    assert!(engine.visited().is_empty());
    assert_eq!(engine.value("Age"), Some(ScalarValue::Int64(20)));
    assert_eq!(engine.value("Name"), Some(ScalarValue::Text("anon".to_owned())));
    assert_eq!(engine.value("Verbose"), Some(ScalarValue::Bool(false)));
    assert!(engine.remaining().is_empty());
}

#[rstest]
fn supplied_flags_are_visited(mut engine: ClapEngine) {
    engine
        .parse(tokens(&["--Age", "10", "--GDP=2", "--Verbose"]))
        .expect("parse");
    let visited = engine.visited();
    assert_eq!(visited.len(), 3);
    assert!(visited.contains("Age"));
    assert!(visited.contains("GDP"));
    assert!(visited.contains("Verbose"));
    assert!(!visited.contains("IQ"));
    assert_eq!(engine.value("Age"), Some(ScalarValue::Int64(10)));
    assert_eq!(engine.value("GDP"), Some(ScalarValue::Float64(2.0)));
    assert_eq!(engine.value("Verbose"), Some(ScalarValue::Bool(true)));
}

#[rstest]
#[case::equals_true(&["--Verbose=true"], true)]
#[case::equals_false(&["--Verbose=false"], false)]
#[case::digit(&["--Verbose=0"], false)]
#[case::bare(&["--Verbose"], true)]
fn boolean_switch_forms(mut engine: ClapEngine, #[case] raw: &[&str], #[case] expected: bool) {
    engine.parse(tokens(raw)).expect("parse");
    assert_eq!(engine.value("Verbose"), Some(ScalarValue::Bool(expected)));
}

#[rstest]
fn hyphenated_values_are_taken(mut engine: ClapEngine) {
    engine
        .parse(tokens(&["--IQ", "-5", "--Name", "-dash"]))
        .expect("parse");
    assert_eq!(engine.value("IQ"), Some(ScalarValue::Int32(-5)));
    assert_eq!(engine.value("Name"), Some(ScalarValue::Text("-dash".to_owned())));
}

#[rstest]
fn radix_prefixed_integers(mut engine: ClapEngine) {
    engine.parse(tokens(&["--IQ", "0x2a"])).expect("parse");
    assert_eq!(engine.value("IQ"), Some(ScalarValue::Int32(42)));
}

#[rstest]
fn last_occurrence_wins(mut engine: ClapEngine) {
    engine
        .parse(tokens(&["--IQ", "1", "--IQ=2", "--IQ", "3"]))
        .expect("parse");
    assert_eq!(engine.value("IQ"), Some(ScalarValue::Int32(3)));
}

#[rstest]
fn first_positional_ends_flag_parsing(mut engine: ClapEngine) {
    engine
        .parse(tokens(&["--Age", "10", "hello", "--IQ", "7", "world"]))
        .expect("parse");
    assert_eq!(engine.remaining(), tokens(&["hello", "--IQ", "7", "world"]));
    assert!(!engine.visited().contains("IQ"));
    assert_eq!(engine.value("IQ"), Some(ScalarValue::Int32(42)));
}

#[rstest]
fn double_dash_is_consumed(mut engine: ClapEngine) {
    engine
        .parse(tokens(&["--IQ", "7", "--", "--Age", "3"]))
        .expect("parse");
    assert_eq!(engine.remaining(), tokens(&["--Age", "3"]));
    assert_eq!(engine.value("Age"), Some(ScalarValue::Int64(20)));
}

#[rstest]
#[case::unknown_flag(&["--Nope", "1"], ErrorKind::UnknownArgument)]
#[case::bad_integer(&["--IQ", "lots"], ErrorKind::ValueValidation)]
#[case::i32_overflow(&["--IQ", "4294967296"], ErrorKind::ValueValidation)]
#[case::bad_boolean(&["--Verbose=maybe"], ErrorKind::ValueValidation)]
fn parse_errors_surface_from_clap(
    mut engine: ClapEngine,
    #[case] raw: &[&str],
    #[case] kind: ErrorKind,
) {
    let err = engine.parse(tokens(raw)).expect_err("parse should fail");
    let FlagError::CliParsing(source) = err else {
        panic!("expected a clap error, got {err:?}");
    };
    assert_eq!(source.kind(), kind);
}

#[rstest]
fn help_is_not_built_in(mut engine: ClapEngine) {
    let err = engine
        .parse(tokens(&["--help"]))
        .expect_err("help is not registered");
    assert!(matches!(err, FlagError::CliParsing(ref e) if e.kind() == ErrorKind::UnknownArgument));
}

#[rstest]
fn duplicate_registration_is_rejected(mut engine: ClapEngine) {
    let mut clash = spec("Age", ScalarKind::Int32, ScalarValue::Int32(0));
    clash.field = "Age_".to_owned();
    let err = engine.register(clash).expect_err("duplicate flag");
    assert!(matches!(
        err,
        FlagError::DuplicateFlag { ref flag, ref first, ref second }
            if flag == "Age" && first == "Age" && second == "Age_"
    ));
}

#[test]
fn unregistered_flags_have_no_value() {
    let engine = ClapEngine::new("empty");
    assert_eq!(engine.value("Ghost"), None);
    assert!(engine.visited().is_empty());
    assert!(engine.remaining().is_empty());
}
