// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! teller-core: account coordination library for the teller demo
//!
//! This crate provides:
//! - A step-wise builder for immutable account-holder profiles
//! - A shared lock registry with atomic per-account check-and-set
//! - A transaction layer that skips, rather than queues, contended callers

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod event;
pub mod profile;

pub mod coordination;
pub mod transactions;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use coordination::{
    AccountId, AccountLock, Acquisition, HolderId, LockGuard, LockInput, LockRegistry, LockState,
};
pub use event::Event;
pub use profile::{Profile, ProfileBuilder, ProfileError};
pub use transactions::{Outcome, Teller, TransactionKind};
