// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination primitives for shared account access
//!
//! This module provides:
//! - **AccountLock** - Per-account Free/Busy state machine
//! - **LockRegistry** - Shared busy map with atomic check-and-set and
//!   scoped release

pub mod lock;
pub mod registry;

pub use lock::{AccountId, AccountLock, HolderId, LockInput, LockState};
pub use registry::{Acquisition, LockGuard, LockRegistry};
