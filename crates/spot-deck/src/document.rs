use serde::{Deserialize, Serialize};
use spot_core::{DeckProvenance, ErrorInfo, SchemaVersion, SpotError, DECK_SCHEMA};
use spot_plane::PlaneOrder;

use crate::deck::{Card, Deck};
use crate::diagnostics::DiagnosticReport;
use crate::generate::GeneratedDeck;
use crate::hash::{canonical_deck_hash, canonical_pool_hash};
use crate::pool::SymbolPool;

/// Exported artifact describing one generated deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDocument {
    /// Schema version of the payload.
    pub schema_version: SchemaVersion,
    /// Hashes and tool metadata.
    pub provenance: DeckProvenance,
    /// Selected plane order.
    pub order: PlaneOrder,
    /// Full pool the deck was generated from.
    pub symbols: SymbolPool,
    /// Cards in generation order.
    pub cards: Vec<Card>,
    /// Findings recorded during generation.
    #[serde(default)]
    pub diagnostics: DiagnosticReport,
}

impl DeckDocument {
    /// Builds a document from a generation result, filling in both hashes.
    pub fn from_generated(generated: &GeneratedDeck) -> Self {
        let provenance = DeckProvenance {
            pool_hash: canonical_pool_hash(&generated.pool),
            deck_hash: canonical_deck_hash(&generated.deck, DECK_SCHEMA),
            ..DeckProvenance::default()
        };
        Self {
            schema_version: DECK_SCHEMA,
            provenance,
            order: generated.deck.order(),
            symbols: generated.pool.clone(),
            cards: generated.deck.cards().to_vec(),
            diagnostics: generated.diagnostics.clone(),
        }
    }

    /// Returns the cards as a [`Deck`].
    pub fn deck(&self) -> Deck {
        Deck::new(self.order, self.cards.clone())
    }

    fn check_hash(&self) -> Result<(), SpotError> {
        if self.provenance.deck_hash.is_empty() {
            let info = ErrorInfo::new("deck-hash-missing", "deck document carries no deck hash")
                .with_hint("regenerate the document with `spot-cli generate`");
            return Err(SpotError::Serde(info));
        }
        let actual = canonical_deck_hash(&self.deck(), self.schema_version);
        if actual != self.provenance.deck_hash {
            let info = ErrorInfo::new("deck-hash-mismatch", "deck contents do not match their hash")
                .with_context("expected", self.provenance.deck_hash.clone())
                .with_context("actual", actual);
            return Err(SpotError::Serde(info));
        }
        Ok(())
    }
}

/// Serializes a deck document to a JSON string.
pub fn to_json(document: &DeckDocument) -> Result<String, SpotError> {
    serde_json::to_string_pretty(document)
        .map_err(|err| SpotError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a deck document from JSON, rejecting payloads whose hash is missing or does not match.
pub fn from_json(data: &str) -> Result<DeckDocument, SpotError> {
    let document: DeckDocument = serde_json::from_str(data)
        .map_err(|err| SpotError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    document.check_hash()?;
    Ok(document)
}

/// Serializes a deck document into a binary blob.
pub fn to_bytes(document: &DeckDocument) -> Result<Vec<u8>, SpotError> {
    let json = to_json(document)?;
    bincode::serialize(&json)
        .map_err(|err| SpotError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a deck document from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<DeckDocument, SpotError> {
    let json: String = bincode::deserialize(bytes)
        .map_err(|err| SpotError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    from_json(&json)
}
