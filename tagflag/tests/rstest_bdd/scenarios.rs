//! Binds the behaviour feature files to the step registry.

use crate::fixtures::{BindingState, binding_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/binding.feature",
    fixtures = [binding_state: BindingState]
);
