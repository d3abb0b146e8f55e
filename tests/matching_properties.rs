//! Matching properties checked through the umbrella crate.

use cepmatch::{
    AddressRecord, AddressRepository, BASE_SCORE, is_eligible, score, suggest, suggest_for_id,
    suggest_local,
};

const STREET: &str = "Rua Professor Doutor Edmundo Juarez";

fn address(id: u64, cep: &str, order: i64) -> AddressRecord {
    AddressRecord {
        id,
        cep: cep.into(),
        street: STREET.into(),
        locality: "Araraquara".into(),
        state: "SP".into(),
        street_order: order,
        ..Default::default()
    }
}

/// A spread of candidates on the target's street with varied ids, ceps and orders.
fn candidates() -> Vec<AddressRecord> {
    (0..40)
        .map(|i| address(i % 7, &format!("14808-{:03}", 560 + (i % 5)), (i as i64 * 13) % 160))
        .collect()
}

#[test]
fn candidate_sharing_target_id_never_appears() {
    for target_id in 0..7 {
        let target = address(target_id, "00000-000", 6);
        let out = suggest(&target, &candidates());
        assert!(out.iter().all(|s| s.cep.id != target_id));
    }
}

#[test]
fn candidate_sharing_target_cep_never_appears() {
    let target = address(100, "14808-562", 6);
    let out = suggest(&target, &candidates());
    assert!(!out.is_empty());
    assert!(out.iter().all(|s| s.cep.cep != target.cep));
}

#[test]
fn every_eligible_candidate_is_scored_by_distance() {
    let target = address(100, "14808-999", 6);
    let pool = candidates();
    let out = suggest(&target, &pool);

    let eligible: Vec<_> = pool.iter().filter(|c| is_eligible(c, &target)).collect();
    assert_eq!(out.len(), eligible.len());
    for (suggestion, candidate) in out.iter().zip(eligible) {
        assert_eq!(&suggestion.cep, candidate);
        assert_eq!(
            suggestion.score,
            BASE_SCORE - (candidate.street_order - target.street_order).abs()
        );
    }
}

#[test]
fn order_six_against_twelve_scores_94() {
    assert_eq!(score(&address(1, "b", 12), &address(0, "a", 6)), 94);
}

#[test]
fn get_by_id_round_trips_and_misses_cleanly() {
    let mut repo = AddressRepository::new();
    let record = address(42, "14808-560", 6);
    repo.insert(record.clone());

    assert_eq!(repo.get_by_id(42), Some(&record));
    assert_eq!(repo.get_by_id(41), None);
}

#[test]
fn two_records_on_one_street_yield_one_suggestion_of_94() {
    let mut repo = AddressRepository::new();
    repo.insert(address(0, "14808-560", 6));
    repo.insert(address(1, "14808-562", 12));

    let target = repo.get_by_id(0).unwrap().clone();
    let out = suggest_local(&repo, &target);

    assert_eq!(out.suggestions.len(), 1);
    assert_eq!(out.suggestions[0].score, 94);
    assert_eq!(out.suggestions[0].cep.id, 1);
}

#[test]
fn records_without_cep_are_not_candidates() {
    let mut repo = AddressRepository::new();
    repo.insert(address(0, "14808-560", 6));
    repo.insert(address(1, "", 6));

    let out = suggest_for_id(&repo, 0).unwrap();
    assert!(out.suggestions.is_empty());
}

#[test]
fn suggestions_json_shape() {
    let repo = AddressRepository::with_seed_data().unwrap();
    let out = suggest_for_id(&repo, 1).unwrap();
    let value = serde_json::to_value(&out).unwrap();

    let first = &value["suggestions"][0];
    assert_eq!(first["score"], 94);
    assert_eq!(first["cep"]["logradouro"], STREET);
}
