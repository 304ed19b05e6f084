// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! teller demo binary
//!
//! Drives the two library components end to end: builds an account-holder
//! profile step by step, then races concurrent callers against the shared
//! lock registry (same account: the late caller skips; distinct accounts:
//! both complete).

use std::time::Duration;

use teller_core::{AccountId, LockRegistry, ProfileBuilder, Teller, TransactionKind};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    // Builder: required fields up front, optional contact details chained
    let profile = ProfileBuilder::new("Alice", 30)
        .with_email("alice@example.com")
        .with_phone("123456789")
        .build()?;
    info!(profile = %profile, "profile built");
    info!(json = %serde_json::to_string(&profile)?, "profile as json");

    // One registry, owned here; every caller gets a clone of the teller
    let registry = LockRegistry::new();
    let teller = Teller::new(registry).with_work_delay(Duration::from_secs(1));

    // ATM and mobile app race for the same account; the late caller skips
    let account = AccountId::from("acct_12345");
    let atm = {
        let teller = teller.clone();
        let account = account.clone();
        tokio::spawn(async move {
            teller
                .process(&account, "atm".into(), TransactionKind::Deposit, 100)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;
    let mobile = teller
        .process(&account, "mobile-app".into(), TransactionKind::Withdraw, 50)
        .await;
    let atm = atm.await?;
    info!(atm = ?atm, mobile = ?mobile, "same-account race finished");

    // Distinct accounts proceed independently
    let first = {
        let teller = teller.clone();
        tokio::spawn(async move {
            teller
                .process(
                    &AccountId::from("acct_1"),
                    "atm".into(),
                    TransactionKind::Deposit,
                    25,
                )
                .await
        })
    };
    let second = teller
        .process(
            &AccountId::from("acct_2"),
            "mobile-app".into(),
            TransactionKind::Withdraw,
            75,
        )
        .await;
    let first = first.await?;
    info!(first = ?first, second = ?second, "distinct-account run finished");

    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
