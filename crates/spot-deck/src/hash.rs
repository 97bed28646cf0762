use sha2::{Digest, Sha256};
use spot_core::SchemaVersion;

use crate::deck::Deck;
use crate::pool::SymbolPool;

fn update_symbols(hasher: &mut Sha256, symbols: &[String]) {
    hasher.update((symbols.len() as u64).to_le_bytes());
    for symbol in symbols {
        hasher.update((symbol.len() as u64).to_le_bytes());
        hasher.update(symbol.as_bytes());
    }
}

fn hex_digest(hasher: Sha256) -> String {
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}

/// Computes the canonical structural hash of a deck under a schema version.
pub fn canonical_deck_hash(deck: &Deck, version: SchemaVersion) -> String {
    let mut hasher = Sha256::new();
    hasher.update((version.major as u64).to_le_bytes());
    hasher.update((version.minor as u64).to_le_bytes());
    hasher.update((version.patch as u64).to_le_bytes());
    hasher.update((deck.order().n() as u64).to_le_bytes());
    hasher.update((deck.len() as u64).to_le_bytes());
    for card in deck.cards() {
        update_symbols(&mut hasher, card.symbols());
    }
    hex_digest(hasher)
}

/// Computes the hash of an ordered symbol pool.
pub fn canonical_pool_hash(pool: &SymbolPool) -> String {
    let mut hasher = Sha256::new();
    update_symbols(&mut hasher, pool.symbols());
    hex_digest(hasher)
}
