//! Email uniqueness under concurrent writers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use acctgate_core::{
    AccountPolicy, AccountStore, AcctError, CreateAccount, InvitationCodes, NewAccount, Role,
};
use acctgate_gateway::config::PasswordSection;
use acctgate_gateway::credential::Argon2Hasher;
use acctgate_gateway::infra::MemoryAccountStore;

fn new_account(email: &str) -> NewAccount {
    NewAccount {
        name: "racer".into(),
        email: email.into(),
        password_hash: "h".into(),
        role: Role::User,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inserts_admit_one_holder() {
    let store = Arc::new(MemoryAccountStore::new());

    let mut tasks = Vec::new();
    for _ in 0..32 {
        let s = Arc::clone(&store);
        tasks.push(tokio::spawn(async move { s.insert(new_account("same@email.com")).await }));
    }

    let mut ok = 0;
    for t in tasks {
        match t.await.unwrap() {
            Ok(_) => ok += 1,
            Err(AcctError::DuplicateEmail) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(store.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_through_policy_admit_one_holder() {
    let store = Arc::new(MemoryAccountStore::new());
    let hasher = Argon2Hasher::new(&PasswordSection {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap();
    let policy = Arc::new(AccountPolicy::new(
        store.clone(),
        Arc::new(hasher),
        InvitationCodes::new("join", "rule"),
    ));

    let mut tasks = Vec::new();
    for i in 0..16 {
        let p = Arc::clone(&policy);
        tasks.push(tokio::spawn(async move {
            p.create(CreateAccount {
                name: format!("racer {i}"),
                email: "race@email.com".into(),
                password: "abcdefgh".into(),
                invitation: "join".into(),
            })
            .await
        }));
    }

    let mut ok = 0;
    for t in tasks {
        match t.await.unwrap() {
            Ok(_) => ok += 1,
            Err(e) => assert!(matches!(e, AcctError::DuplicateEmail), "unexpected: {e}"),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(store.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_email_moves_admit_one_holder() {
    let store = Arc::new(MemoryAccountStore::new());
    let mut ids = Vec::new();
    for i in 0..8 {
        ids.push(store.insert(new_account(&format!("u{i}@email.com"))).await.unwrap());
    }

    let mut tasks = Vec::new();
    for mut a in ids {
        let s = Arc::clone(&store);
        tasks.push(tokio::spawn(async move {
            a.email = "target@email.com".into();
            s.update(a).await
        }));
    }

    let mut ok = 0;
    for t in tasks {
        if t.await.unwrap().is_ok() {
            ok += 1;
        }
    }
    assert_eq!(ok, 1);
    let holder = store.find_by_email("target@email.com").await.unwrap().unwrap();
    assert_eq!(holder.email, "target@email.com");
}
