use spot_core::{SpotError, DECK_SCHEMA};
use spot_deck::{
    canonical_deck_hash, canonical_pool_hash, from_bytes, from_json, generate_deck, to_bytes,
    to_json, DeckDocument, SymbolPool,
};

fn document(count: usize) -> DeckDocument {
    let pool: SymbolPool = (0..count).map(|i| format!("sym{i:02}")).collect();
    DeckDocument::from_generated(&generate_deck(&pool).unwrap())
}

#[test]
fn json_roundtrip_preserves_document() {
    let doc = document(13);
    let json = to_json(&doc).unwrap();
    let restored = from_json(&json).unwrap();
    assert_eq!(restored, doc);
    assert_eq!(restored.deck().len(), 13);
    assert_eq!(restored.order.n(), 3);
}

#[test]
fn bytes_roundtrip_preserves_document() {
    let doc = document(31);
    let bytes = to_bytes(&doc).unwrap();
    assert_eq!(from_bytes(&bytes).unwrap(), doc);
}

#[test]
fn hashes_are_stable_and_recorded() {
    let doc = document(7);
    assert_eq!(doc.provenance.deck_hash.len(), 64);
    assert_eq!(doc.provenance.deck_hash, document(7).provenance.deck_hash);
    assert_eq!(doc.provenance.deck_hash, canonical_deck_hash(&doc.deck(), DECK_SCHEMA));
    assert_eq!(doc.provenance.pool_hash, canonical_pool_hash(&doc.symbols));
    assert_ne!(doc.provenance.deck_hash, document(13).provenance.deck_hash);
}

#[test]
fn tampered_cards_are_rejected() {
    let doc = document(7);
    let json = to_json(&doc).unwrap();
    let (head, tail) = json.split_at(json.find("\"cards\"").unwrap());
    let tampered = format!("{head}{}", tail.replacen("sym00", "sym99", 1));
    let err = from_json(&tampered).expect_err("hash mismatch");
    match err {
        SpotError::Serde(info) => assert_eq!(info.code, "deck-hash-mismatch"),
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn blanked_hash_is_rejected() {
    let mut doc = document(7);
    doc.provenance.deck_hash.clear();
    let json = to_json(&doc).unwrap();
    let err = from_json(&json).expect_err("missing hash");
    match err {
        SpotError::Serde(info) => assert_eq!(info.code, "deck-hash-missing"),
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = from_json("{\"order\": 4}").expect_err("invalid payload");
    assert_eq!(err.info().code, "json-deserialize");
}
