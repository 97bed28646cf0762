use std::collections::BTreeSet;

use crate::deck::Card;
use crate::diagnostics::{Diagnostic, DiagnosticReport};

/// Replaces every point index with the symbol at that position of `symbols`.
///
/// `symbols` is the consumed pool prefix, one entry per point. Indices past
/// its end are clamped with modulo and recorded as
/// [`Diagnostic::OutOfRange`]; repeated symbols on a card are recorded as
/// [`Diagnostic::DuplicateSymbol`]. Mapping never aborts. An empty prefix
/// maps every card to a blank card.
pub fn map_symbols(
    cards: &[Vec<usize>],
    symbols: &[String],
    report: &mut DiagnosticReport,
) -> Vec<Card> {
    let total = symbols.len();
    if total == 0 {
        return cards.iter().map(|_| Card::new(Vec::new())).collect();
    }

    let mut mapped = Vec::with_capacity(cards.len());
    for (card_idx, indices) in cards.iter().enumerate() {
        let mut seen = BTreeSet::new();
        let mut card = Vec::with_capacity(indices.len());
        for (position, &raw) in indices.iter().enumerate() {
            let mut index = raw;
            if index >= total {
                index %= total;
                report.push(Diagnostic::OutOfRange {
                    card: card_idx,
                    position,
                    index: raw,
                    clamped: index,
                });
            }
            if !seen.insert(symbols[index].as_str()) {
                report.push(Diagnostic::DuplicateSymbol {
                    card: card_idx,
                    symbol: symbols[index].clone(),
                });
            }
            card.push(symbols[index].clone());
        }
        mapped.push(Card::new(card));
    }
    mapped
}
