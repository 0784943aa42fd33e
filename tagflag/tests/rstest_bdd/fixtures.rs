//! Shared fixtures for the behaviour scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tagflag::{FlagError, FlagRecord, FlagResult};

/// Record exercised by every scenario.
#[derive(Debug, Clone, Default, FlagRecord)]
pub struct Sample {
    #[flag("behaviour sample")]
    pub usage: String,
    #[flag("age in years | 20")]
    pub age: i64,
    #[flag("do not inflate | 42", rename = "IQ")]
    pub iq: i32,
    #[flag("downcase | 142")]
    pub iq_: i32,
    #[flag("! command ! 'yes | head'")]
    pub some_command: String,
    #[flag("chatty output | true")]
    pub verbose: bool,
    #[flag("only set when supplied")]
    pub bar: Option<i32>,
    #[flag("preset by the caller")]
    pub foo: Option<i32>,
    pub args: Vec<String>,
}

impl Sample {
    /// Renders the field whose flag is `flag`, or `None` when it is absent.
    #[must_use]
    pub fn value_of(&self, flag: &str) -> Option<String> {
        match flag {
            "Age" => Some(self.age.to_string()),
            "IQ" => Some(self.iq.to_string()),
            "iq" => Some(self.iq_.to_string()),
            "SomeCommand" => Some(self.some_command.clone()),
            "Verbose" => Some(self.verbose.to_string()),
            "Bar" => self.bar.map(|bar| bar.to_string()),
            "Foo" => self.foo.map(|foo| foo.to_string()),
            _ => None,
        }
    }
}

/// How a binding attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Bound,
    AmbiguousBoolean(String),
    ContractViolation(String),
    CommandLine(String),
}

impl From<FlagResult<()>> for Outcome {
    fn from(result: FlagResult<()>) -> Self {
        match result {
            Ok(()) => Self::Bound,
            Err(FlagError::AmbiguousBoolean { token }) => Self::AmbiguousBoolean(token),
            Err(err) if err.is_contract_violation() => Self::ContractViolation(err.to_string()),
            Err(err) => Self::CommandLine(err.to_string()),
        }
    }
}

/// Scenario state shared between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct BindingState {
    pub record: Slot<Sample>,
    pub outcome: Slot<Outcome>,
}

/// Creates a clean state for each scenario.
#[fixture]
pub fn binding_state() -> BindingState {
    BindingState::default()
}
