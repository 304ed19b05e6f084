// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared lock registry with atomic check-and-set
//!
//! One registry is shared by every caller in the process: construct it
//! once and hand clones to each caller instead of reaching for a global.
//! The map holds an entry only while an account is busy; absence means
//! free. The busy check and the busy mark happen under a single mutex
//! guard, so two concurrent callers can never both observe a free
//! account.

use crate::clock::{Clock, SystemClock};
use crate::coordination::lock::{AccountId, AccountLock, HolderId, LockInput};
use crate::event::Event;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type LockMap = Arc<Mutex<HashMap<AccountId, AccountLock>>>;

/// Result of a non-blocking acquisition attempt
#[derive(Debug)]
pub enum Acquisition {
    /// Exclusive access granted; dropping the guard releases it
    Acquired(LockGuard),
    /// Account already held; the caller should skip, not wait
    Busy { current: HolderId },
}

/// Shared registry of busy accounts.
///
/// Clones share the same underlying map, preserving the "one shared
/// registry" semantics; the composing code owns its lifetime.
#[derive(Clone, Default)]
pub struct LockRegistry {
    locks: LockMap,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to take exclusive access to `account`.
    ///
    /// Check and mark are one atomic step: the map mutex is held across
    /// both, so concurrent attempts on the same account resolve to
    /// exactly one guard. A busy account yields `Acquisition::Busy`
    /// immediately; there is no queueing.
    pub fn try_acquire(
        &self,
        account: &AccountId,
        holder: HolderId,
        clock: &impl Clock,
    ) -> (Acquisition, Vec<Event>) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        let lock = locks
            .get(account)
            .cloned()
            .unwrap_or_else(|| AccountLock::new(account.clone()));

        let (next, events) = lock.transition(
            LockInput::Acquire {
                holder: holder.clone(),
            },
            clock,
        );

        if next.is_held_by(&holder) {
            locks.insert(account.clone(), next);
            drop(locks);
            let guard = LockGuard {
                account: account.clone(),
                holder,
                locks: Arc::clone(&self.locks),
            };
            (Acquisition::Acquired(guard), events)
        } else {
            let current = next.holder().cloned().unwrap_or(holder);
            (Acquisition::Busy { current }, events)
        }
    }

    /// Whether an account currently has a holder
    pub fn is_busy(&self, account: &AccountId) -> bool {
        let locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.get(account).is_some_and(|l| !l.is_free())
    }

    /// Current holder of an account, if busy
    pub fn holder(&self, account: &AccountId) -> Option<HolderId> {
        let locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.get(account).and_then(|l| l.holder().cloned())
    }

    /// Accounts currently marked busy
    pub fn busy_accounts(&self) -> Vec<AccountId> {
        let locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks
            .iter()
            .filter(|(_, l)| !l.is_free())
            .map(|(id, _)| id.clone())
            .collect()
    }
}

/// Scoped acquisition of one account.
///
/// Releasing is `Drop`, so the busy mark is cleared on every exit path,
/// including a panic mid-operation. A holder can therefore never leak
/// its account.
pub struct LockGuard {
    account: AccountId,
    holder: HolderId,
    locks: LockMap,
}

impl LockGuard {
    pub fn account(&self) -> &AccountId {
        &self.account
    }

    pub fn holder(&self) -> &HolderId {
        &self.holder
    }
}

impl std::fmt::Debug for LockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockGuard")
            .field("account", &self.account)
            .field("holder", &self.holder)
            .finish()
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        let Some(lock) = locks.get(&self.account).cloned() else {
            return;
        };
        let (next, events) = lock.transition(
            LockInput::Release {
                holder: self.holder.clone(),
            },
            &SystemClock,
        );
        if next.is_free() {
            locks.remove(&self.account);
        }
        drop(locks);
        for event in &events {
            event.record();
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
