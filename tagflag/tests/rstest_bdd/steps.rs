//! Step definitions for binding scenarios.
#![expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes placeholder captures as owned strings"
)]

use crate::fixtures::{BindingState, Outcome, Sample};
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use tagflag::Binder;

fn bind(binding_state: &BindingState, args: Vec<String>) -> Result<()> {
    let mut record = binding_state
        .record
        .take()
        .ok_or_else(|| anyhow!("no record prepared"))?;
    let result = Binder::new()
        .program_name("behaviour")
        .args(args)
        .parse(&mut record);
    binding_state.record.set(record);
    binding_state.outcome.set(Outcome::from(result));
    Ok(())
}

fn outcome(binding_state: &BindingState) -> Result<Outcome> {
    binding_state
        .outcome
        .get()
        .ok_or_else(|| anyhow!("the record was never bound"))
}

#[given("a sample record")]
fn sample_record(binding_state: &BindingState) {
    binding_state.record.set(Sample::default());
}

#[given("a sample record with Foo preset to {value:i32}")]
fn preset_record(binding_state: &BindingState, value: i32) {
    binding_state.record.set(Sample {
        foo: Some(value),
        ..Sample::default()
    });
}

#[when("the record is bound without arguments")]
fn bind_without_arguments(binding_state: &BindingState) -> Result<()> {
    bind(binding_state, Vec::new())
}

#[when("the record is bound to {args}")]
fn bind_to(binding_state: &BindingState, args: String) -> Result<()> {
    bind(
        binding_state,
        args.split_whitespace().map(str::to_owned).collect(),
    )
}

#[then("binding succeeds")]
fn binding_succeeds(binding_state: &BindingState) -> Result<()> {
    let found = outcome(binding_state)?;
    ensure!(found == Outcome::Bound, "binding failed: {found:?}");
    Ok(())
}

#[then("binding fails on the ambiguous literal {token}")]
fn binding_is_ambiguous(binding_state: &BindingState, token: String) -> Result<()> {
    let found = outcome(binding_state)?;
    ensure!(
        found == Outcome::AmbiguousBoolean(token),
        "unexpected outcome {found:?}"
    );
    Ok(())
}

#[then("binding fails with a command-line error")]
fn binding_fails_on_input(binding_state: &BindingState) -> Result<()> {
    let found = outcome(binding_state)?;
    ensure!(
        matches!(found, Outcome::CommandLine(_)),
        "unexpected outcome {found:?}"
    );
    Ok(())
}

#[then("the field {flag} holds {expected}")]
fn field_holds(binding_state: &BindingState, flag: String, expected: String) -> Result<()> {
    let value = binding_state
        .record
        .with_ref(|record| record.value_of(&flag))
        .ok_or_else(|| anyhow!("no record available"))?;
    ensure!(
        value.as_deref() == Some(expected.as_str()),
        "{flag} holds {value:?}, expected {expected:?}"
    );
    Ok(())
}

#[then("the optional {flag} is unset")]
fn optional_is_unset(binding_state: &BindingState, flag: String) -> Result<()> {
    let value = binding_state
        .record
        .with_ref(|record| record.value_of(&flag))
        .ok_or_else(|| anyhow!("no record available"))?;
    ensure!(value.is_none(), "{flag} holds {value:?}");
    Ok(())
}

#[then("no arguments are left over")]
fn leftover_is_empty(binding_state: &BindingState) -> Result<()> {
    let args = binding_state
        .record
        .with_ref(|record| record.args.clone())
        .ok_or_else(|| anyhow!("no record available"))?;
    ensure!(args.is_empty(), "leftover {args:?}");
    Ok(())
}

#[then("the leftover arguments are {expected}")]
fn leftover_matches(binding_state: &BindingState, expected: String) -> Result<()> {
    let args = binding_state
        .record
        .with_ref(|record| record.args.clone())
        .ok_or_else(|| anyhow!("no record available"))?;
    let wanted: Vec<&str> = expected.split_whitespace().collect();
    ensure!(args == wanted, "leftover {args:?}, expected {wanted:?}");
    Ok(())
}

#[then("the usage text contains {text}")]
fn usage_contains(binding_state: &BindingState, text: String) -> Result<()> {
    let usage = binding_state
        .record
        .with_ref(|record| record.usage.clone())
        .ok_or_else(|| anyhow!("no record available"))?;
    ensure!(usage.contains(&text), "usage was {usage:?}");
    Ok(())
}
