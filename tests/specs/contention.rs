use std::time::Duration;

use teller_core::{AccountId, HolderId, LockRegistry, Outcome, Teller, TransactionKind};

#[tokio::test(start_paused = true)]
async fn late_caller_skips_then_account_frees() {
    // Caller A withdraws from acct_9; caller B deposits a tenth of the
    // work delay later, observes the account busy and is skipped; once A
    // completes, the account accepts new work again.
    let registry = LockRegistry::new();
    let teller = Teller::new(registry.clone()).with_work_delay(Duration::from_secs(1));
    let account = AccountId::from("acct_9");

    let a = {
        let teller = teller.clone();
        let account = account.clone();
        tokio::spawn(async move {
            teller
                .process(
                    &account,
                    HolderId::from("caller-a"),
                    TransactionKind::Withdraw,
                    50,
                )
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    let b = teller
        .process(
            &account,
            HolderId::from("caller-b"),
            TransactionKind::Deposit,
            100,
        )
        .await;

    assert!(matches!(
        b,
        Outcome::Skipped { ref current_holder, .. } if current_holder == &HolderId::from("caller-a")
    ));

    let a = a.await.unwrap();
    assert!(a.is_completed());
    assert!(!registry.is_busy(&account));

    // Free again: a retry of B's deposit now completes
    let retry = teller
        .process(
            &account,
            HolderId::from("caller-b"),
            TransactionKind::Deposit,
            100,
        )
        .await;
    assert!(retry.is_completed());
}

#[tokio::test(start_paused = true)]
async fn distinct_accounts_run_independently() {
    let teller = Teller::new(LockRegistry::new()).with_work_delay(Duration::from_secs(1));

    let a = {
        let teller = teller.clone();
        tokio::spawn(async move {
            teller
                .process(
                    &AccountId::from("acct_1"),
                    HolderId::from("caller-a"),
                    TransactionKind::Deposit,
                    10,
                )
                .await
        })
    };
    let b = teller
        .process(
            &AccountId::from("acct_2"),
            HolderId::from("caller-b"),
            TransactionKind::Withdraw,
            20,
        )
        .await;

    assert!(a.await.unwrap().is_completed());
    assert!(b.is_completed());
}
