//! Behavioral specifications for the teller workspace.
//!
//! These are end-to-end: they drive the public teller-core API the way a
//! composing application would and verify the observable outcomes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

// builder/
#[path = "specs/builder.rs"]
mod builder;

// contention/
#[path = "specs/contention.rs"]
mod contention;
