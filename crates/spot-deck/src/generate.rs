use serde::{Deserialize, Serialize};
use spot_core::SpotError;
use spot_plane::{select_order, PlaneOrder, ProjectivePlane};

use crate::deck::Deck;
use crate::diagnostics::DiagnosticReport;
use crate::mapper::map_symbols;
use crate::pool::SymbolPool;
use crate::verify::verify_pairs;

/// Deck produced from a pool, returned together with the pool and findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDeck {
    /// Ordered cards.
    pub deck: Deck,
    /// Data-integrity findings raised while mapping and verifying.
    pub diagnostics: DiagnosticReport,
    /// Pool the deck was generated from.
    pub pool: SymbolPool,
}

impl GeneratedDeck {
    /// Returns the plane order that was selected.
    pub fn order(&self) -> PlaneOrder {
        self.deck.order()
    }

    /// Returns the part of the pool the deck actually draws from.
    pub fn used_symbols(&self) -> &[String] {
        self.pool.prefix(self.deck.order().plane_size())
    }
}

/// Generates a deck in which every pair of cards shares exactly one symbol.
///
/// Fails with an `Input` error when the pool holds fewer symbols than the
/// smallest supported plane, and with a `Plane` error if construction breaks
/// an incidence guarantee. Every other anomaly is returned in
/// [`GeneratedDeck::diagnostics`].
pub fn generate_deck(pool: &SymbolPool) -> Result<GeneratedDeck, SpotError> {
    let order = select_order(pool.len())?;
    let plane = ProjectivePlane::build(order)?;
    let symbols = pool.prefix(order.plane_size());

    let mut diagnostics = DiagnosticReport::new();
    let cards = map_symbols(&plane.incidence(), symbols, &mut diagnostics);
    verify_pairs(&cards, &mut diagnostics);

    tracing::debug!(
        order = order.n(),
        cards = cards.len(),
        unused = pool.len() - symbols.len(),
        diagnostics = diagnostics.len(),
        "generated deck"
    );
    Ok(GeneratedDeck {
        deck: Deck::new(order, cards),
        diagnostics,
        pool: pool.clone(),
    })
}
