mod common;

use common::{balances, date, ids, InMemoryLedgerRepository, Operation};
use stable_ledger_core::{
    entities::{LedgerEntry, LedgerEntryId, LedgerEntryPatch, NewLedgerEntry},
    usecases::{LedgerUsecase, LedgerUsecaseImpl},
};

async fn ledger_with_two_entries() -> LedgerUsecaseImpl<InMemoryLedgerRepository> {
    let repository = InMemoryLedgerRepository::new();
    repository.seed(vec![
        LedgerEntry::new(LedgerEntryId(1), date(1), 100.0, 0.0),
        LedgerEntry::new(LedgerEntryId(2), date(2), 0.0, 40.0),
    ]);
    let mut ledger = LedgerUsecaseImpl::new(repository);
    ledger.reload().await.unwrap();
    ledger
}

#[tokio::test]
async fn reload_orders_by_id_and_folds() {
    let ledger = ledger_with_two_entries().await;
    assert_eq!(ids(ledger.entries()), vec![1, 2]);
    assert_eq!(balances(ledger.entries()), vec![100.0, 60.0]);
}

#[tokio::test]
async fn insert_goes_through_store_then_reloads() {
    let mut ledger = ledger_with_two_entries().await;
    let id = ledger
        .insert(NewLedgerEntry::new(date(3), 10.0, 0.0))
        .await
        .unwrap();

    assert_eq!(id, LedgerEntryId(3));
    assert_eq!(balances(ledger.entries()), vec![100.0, 60.0, 70.0]);
    assert_eq!(
        ledger.repository().calls(),
        vec![Operation::List, Operation::Create, Operation::List]
    );
}

#[tokio::test]
async fn insert_is_canonicalized_before_storing() {
    let mut ledger = ledger_with_two_entries().await;
    ledger
        .insert(NewLedgerEntry::new(date(3), 0.125, 0.0))
        .await
        .unwrap();
    assert_eq!(ledger.engine().get(LedgerEntryId(3)).unwrap().credit, 0.13);
    assert_eq!(ledger.engine().closing_balance(), 60.13);
}

#[tokio::test]
async fn update_and_delete_refold_the_whole_set() {
    let mut ledger = ledger_with_two_entries().await;
    ledger
        .insert(NewLedgerEntry::new(date(3), 10.0, 0.0))
        .await
        .unwrap();

    ledger
        .update(
            LedgerEntryId(1),
            LedgerEntryPatch {
                credit: Some(200.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(balances(ledger.entries()), vec![200.0, 160.0, 170.0]);

    ledger.delete(LedgerEntryId(2)).await.unwrap();
    assert_eq!(ids(ledger.entries()), vec![1, 3]);
    assert_eq!(balances(ledger.entries()), vec![200.0, 210.0]);
}

#[tokio::test]
async fn failed_mutation_leaves_entries_untouched() {
    let mut ledger = ledger_with_two_entries().await;
    let before = ledger.entries().to_vec();

    ledger.repository().fail_next(Operation::Create);
    assert!(ledger
        .insert(NewLedgerEntry::new(date(3), 10.0, 0.0))
        .await
        .is_err());
    assert_eq!(ledger.entries(), before.as_slice());

    assert!(ledger.delete(LedgerEntryId(99)).await.is_err());
    assert_eq!(ledger.entries(), before.as_slice());
}

#[tokio::test]
async fn failed_update_leaves_entries_untouched() {
    let mut ledger = ledger_with_two_entries().await;
    let before = ledger.entries().to_vec();

    ledger.repository().fail_next(Operation::Update);
    assert!(ledger
        .update(
            LedgerEntryId(1),
            LedgerEntryPatch {
                credit: Some(500.0),
                ..Default::default()
            },
        )
        .await
        .is_err());
    assert_eq!(ledger.entries(), before.as_slice());
    assert_eq!(
        ledger.repository().calls(),
        vec![Operation::List, Operation::Update]
    );

    // Nothing reached the store either.
    ledger.reload().await.unwrap();
    assert_eq!(balances(ledger.entries()), vec![100.0, 60.0]);
}

#[tokio::test]
async fn insert_stored_but_reload_failed_exposes_new_id() {
    let mut ledger = ledger_with_two_entries().await;
    let before = ledger.entries().to_vec();
    assert_eq!(ledger.last_created(), None);

    ledger.repository().fail_next(Operation::List);
    assert!(ledger
        .insert(NewLedgerEntry::new(date(3), 10.0, 0.0))
        .await
        .is_err());
    assert_eq!(ledger.entries(), before.as_slice());
    assert_eq!(ledger.last_created(), Some(LedgerEntryId(3)));

    // Reloading, not inserting again, brings the view up to date.
    ledger.reload().await.unwrap();
    assert_eq!(ids(ledger.entries()), vec![1, 2, 3]);
    assert_eq!(balances(ledger.entries()), vec![100.0, 60.0, 70.0]);
}

#[tokio::test]
async fn failed_create_does_not_record_an_id() {
    let mut ledger = ledger_with_two_entries().await;
    ledger.repository().fail_next(Operation::Create);
    assert!(ledger
        .insert(NewLedgerEntry::new(date(3), 10.0, 0.0))
        .await
        .is_err());
    assert_eq!(ledger.last_created(), None);
}

#[tokio::test]
async fn failed_reload_after_mutation_keeps_previous_view() {
    let mut ledger = ledger_with_two_entries().await;
    let before = ledger.entries().to_vec();

    ledger.repository().fail_next(Operation::List);
    assert!(ledger.delete(LedgerEntryId(2)).await.is_err());
    // The store applied the delete, but nothing is patched locally.
    assert_eq!(ledger.entries(), before.as_slice());

    ledger.reload().await.unwrap();
    assert_eq!(ids(ledger.entries()), vec![1]);
    assert_eq!(balances(ledger.entries()), vec![100.0]);
}

#[tokio::test]
async fn reload_picks_up_other_editors() {
    let mut ledger = ledger_with_two_entries().await;
    ledger
        .repository()
        .seed(vec![LedgerEntry::new(LedgerEntryId(5), date(5), 0.0, 5.5)]);
    ledger
        .insert(NewLedgerEntry::new(date(6), 1.0, 0.0))
        .await
        .unwrap();
    assert_eq!(ids(ledger.entries()), vec![1, 2, 5, 6]);
    assert_eq!(balances(ledger.entries()), vec![100.0, 60.0, 54.5, 55.5]);
}
