//! Behaviour tests for `tagflag` using `rstest-bdd`.
//!
//! Step implementations live in [`steps`], while [`scenarios`] binds the
//! `.feature` files to the shared fixtures.

mod fixtures;
mod scenarios;
mod steps;
