// Concurrent registrations through the shared catalog

use crate::common::*;
use event_catalog::engine::Catalog;
use event_catalog::state::SharedCatalog;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_respect_capacity() {
    let mut catalog = Catalog::new();
    catalog.create_event(event_draft("Small Room", "2025-03-01", 10)).unwrap();
    let shared = SharedCatalog::new(catalog);

    let mut handles = Vec::new();
    for i in 0..50 {
        let shared = shared.clone();
        handles.push(tokio::spawn(async move {
            shared
                .transact(|c| {
                    c.register_for_event(1, registration_draft(&format!("S{}", i)))
                        .map(|r| r.id)
                })
                .await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 10);
    let (len, next_id) = shared
        .view(|c| (c.get_event_by_id(1).unwrap().registrations.len(), c.next_registration_id()))
        .await;
    assert_eq!(len, 10);
    assert_eq!(next_id, 11);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_student_admitted_once() {
    let mut catalog = Catalog::new();
    catalog.create_event(event_draft("Big Hall", "2025-03-01", 100)).unwrap();
    let shared = SharedCatalog::new(catalog);

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let shared = shared.clone();
            tokio::spawn(async move {
                shared
                    .transact(|c| c.register_for_event(1, registration_draft("S1")).map(|_| ()))
                    .await
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_unique_ids() {
    let shared = SharedCatalog::new(Catalog::seeded().unwrap());

    let handles: Vec<_> = (0..25)
        .map(|i| {
            let shared = shared.clone();
            tokio::spawn(async move {
                shared
                    .transact(|c| {
                        c.create_event(event_draft(&format!("E{}", i), "2025-03-01", 5))
                            .map(|e| e.id)
                    })
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }
    ids.sort_unstable();

    assert_eq!(ids, (6..31).collect::<Vec<u64>>());
}
