// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-account lock state machine
//!
//! Models exclusive access to a single account. An attempt against a
//! busy account is denied, never queued; there is no Busy to Busy
//! self-transition.

use crate::clock::Clock;
use crate::event::Event;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Identifier an account's lock state is tracked under
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        AccountId(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        AccountId(s.to_string())
    }
}

/// Identity of the caller attempting an operation (e.g. "atm-thread")
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolderId(pub String);

impl HolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for HolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for HolderId {
    fn from(s: String) -> Self {
        HolderId(s)
    }
}

impl From<&str> for HolderId {
    fn from(s: &str) -> Self {
        HolderId(s.to_string())
    }
}

/// Lock state for one account
#[derive(Clone, Debug)]
pub enum LockState {
    /// Account is available
    Free,
    /// A caller holds exclusive access
    Busy { holder: HolderId, since: Instant },
}

/// Events that can trigger lock transitions
#[derive(Clone, Debug)]
pub enum LockInput {
    /// Attempt to take exclusive access
    Acquire { holder: HolderId },
    /// Give exclusive access back
    Release { holder: HolderId },
}

/// Exclusive-access lock for a single account
#[derive(Clone, Debug)]
pub struct AccountLock {
    pub account: AccountId,
    pub state: LockState,
}

impl AccountLock {
    pub fn new(account: AccountId) -> Self {
        Self {
            account,
            state: LockState::Free,
        }
    }

    /// Check if the account is currently available
    pub fn is_free(&self) -> bool {
        matches!(self.state, LockState::Free)
    }

    /// Check if the lock is held by a specific caller
    pub fn is_held_by(&self, holder: &HolderId) -> bool {
        matches!(&self.state, LockState::Busy { holder: h, .. } if h == holder)
    }

    /// Get the current holder, if any
    pub fn holder(&self) -> Option<&HolderId> {
        match &self.state {
            LockState::Free => None,
            LockState::Busy { holder, .. } => Some(holder),
        }
    }

    /// How long the current holder has held the lock
    pub fn held_for(&self, clock: &impl Clock) -> Option<Duration> {
        match &self.state {
            LockState::Free => None,
            LockState::Busy { since, .. } => Some(clock.now().duration_since(*since)),
        }
    }

    /// Pure state transition function
    pub fn transition(&self, input: LockInput, clock: &impl Clock) -> (AccountLock, Vec<Event>) {
        let mut next = self.clone();
        let mut events = Vec::new();

        match input {
            LockInput::Acquire { holder } => match &self.state {
                LockState::Free => {
                    next.state = LockState::Busy {
                        holder: holder.clone(),
                        since: clock.now(),
                    };
                    events.push(Event::LockAcquired {
                        account: self.account.0.clone(),
                        holder: holder.0,
                    });
                }
                LockState::Busy {
                    holder: current, ..
                } => {
                    // Held and attempts are never queued: deny
                    events.push(Event::LockDenied {
                        account: self.account.0.clone(),
                        holder: holder.0,
                        current_holder: current.0.clone(),
                    });
                }
            },

            LockInput::Release { holder } => match &self.state {
                LockState::Busy {
                    holder: current, ..
                } if current == &holder => {
                    next.state = LockState::Free;
                    events.push(Event::LockReleased {
                        account: self.account.0.clone(),
                        holder: holder.0,
                    });
                }
                _ => {
                    // Wrong holder or already free, no-op
                }
            },
        }

        (next, events)
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
