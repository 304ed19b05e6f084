// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deposit and withdraw processing gated by the lock registry
//!
//! Contention is a normal outcome, not an error: a busy account skips
//! the caller immediately instead of queueing it.

use crate::clock::{Clock, SystemClock};
use crate::coordination::{AccountId, Acquisition, HolderId, LockRegistry};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// What a caller wants done with an amount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        };
        f.write_str(verb)
    }
}

/// Result of one processing attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The simulated transaction ran to completion and the lock was released
    Completed {
        kind: TransactionKind,
        account: AccountId,
        amount: u64,
        holder: HolderId,
    },
    /// The account was held by another caller; nothing happened
    Skipped {
        account: AccountId,
        holder: HolderId,
        current_holder: HolderId,
    },
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }
}

/// Processes transactions against a shared [`LockRegistry`].
///
/// Every caller gets a clone; clones share the registry, so two tellers
/// can never operate on the same account at once.
#[derive(Clone)]
pub struct Teller<C: Clock = SystemClock> {
    registry: LockRegistry,
    clock: C,
    work_delay: Duration,
}

impl Teller<SystemClock> {
    pub fn new(registry: LockRegistry) -> Self {
        Self {
            registry,
            clock: SystemClock,
            // Reference behavior: one time unit per simulated transaction
            work_delay: Duration::from_secs(1),
        }
    }
}

impl<C: Clock> Teller<C> {
    /// Override the simulated transaction duration
    pub fn with_work_delay(mut self, delay: Duration) -> Self {
        self.work_delay = delay;
        self
    }

    /// Swap the clock used for lock timestamps
    pub fn with_clock<D: Clock>(self, clock: D) -> Teller<D> {
        Teller {
            registry: self.registry,
            clock,
            work_delay: self.work_delay,
        }
    }

    pub fn registry(&self) -> &LockRegistry {
        &self.registry
    }

    /// Run one deposit or withdraw against `account`.
    ///
    /// The busy check and mark are atomic; a busy account yields
    /// [`Outcome::Skipped`] immediately. The lock is released when the
    /// guard drops, on success and failure alike.
    pub async fn process(
        &self,
        account: &AccountId,
        holder: HolderId,
        kind: TransactionKind,
        amount: u64,
    ) -> Outcome {
        let (acquisition, events) = self
            .registry
            .try_acquire(account, holder.clone(), &self.clock);
        for event in &events {
            event.record();
        }

        let guard = match acquisition {
            Acquisition::Acquired(guard) => guard,
            Acquisition::Busy { current } => {
                return Outcome::Skipped {
                    account: account.clone(),
                    holder,
                    current_holder: current,
                };
            }
        };

        // Simulated transaction work
        tokio::time::sleep(self.work_delay).await;

        info!(account = %account, holder = %holder, kind = %kind, amount, "transaction complete");
        drop(guard);

        Outcome::Completed {
            kind,
            account: account.clone(),
            amount,
            holder,
        }
    }
}

#[cfg(test)]
#[path = "transactions_tests.rs"]
mod tests;
