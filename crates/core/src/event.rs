// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observable lock-registry events

use serde::{Deserialize, Serialize};
use tracing::info;

/// Events produced by lock transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Exclusive access to an account was granted
    LockAcquired { account: String, holder: String },

    /// An acquisition attempt found the account already held; the caller
    /// skips the operation instead of waiting
    LockDenied {
        account: String,
        holder: String,
        current_holder: String,
    },

    /// The holder released the account
    LockReleased { account: String, holder: String },
}

impl Event {
    /// Write the event to the tracing log, tagged with the caller identity
    pub fn record(&self) {
        match self {
            Event::LockAcquired { account, holder } => {
                info!(%account, %holder, "lock:acquired");
            }
            Event::LockDenied {
                account,
                holder,
                current_holder,
            } => {
                info!(%account, %holder, %current_holder, "lock:denied, skipping");
            }
            Event::LockReleased { account, holder } => {
                info!(%account, %holder, "lock:released");
            }
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
