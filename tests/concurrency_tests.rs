//! Shared-repository access from several threads.

use std::sync::{Arc, RwLock};
use std::thread;

use cepmatch::{AddressRecord, AddressRepository, suggest_for_id};

#[test]
fn concurrent_readers_see_identical_suggestions() {
    let repo = Arc::new(AddressRepository::with_seed_data().expect("seed data loads"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || suggest_for_id(&repo, 0).expect("address 0 exists"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
}

#[test]
fn writers_behind_a_lock_keep_ids_unique() {
    let repo = Arc::new(RwLock::new(AddressRepository::new()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                for j in 0..25 {
                    let mut guard = repo.write().unwrap();
                    let id = guard.next_id();
                    guard.insert(AddressRecord {
                        id,
                        cep: format!("{i:02}{j:03}-000"),
                        ..Default::default()
                    });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let guard = repo.read().unwrap();
    assert_eq!(guard.len(), 200);
    let mut ids: Vec<_> = guard.fetch_all().iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}
