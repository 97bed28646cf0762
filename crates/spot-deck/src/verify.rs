use std::collections::BTreeSet;

use crate::deck::{Card, Deck};
use crate::diagnostics::{Diagnostic, DiagnosticReport};
use crate::pool::SymbolPool;

/// Checks that every unordered pair of cards shares exactly one symbol.
///
/// Cost is quadratic in the number of cards and in the card size, which is
/// negligible for the supported orders.
pub fn verify_pairs(cards: &[Card], report: &mut DiagnosticReport) {
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let shared = cards[i].shared_with(&cards[j]);
            if shared.len() != 1 {
                report.push(Diagnostic::UnexpectedMatchCount {
                    first: i,
                    second: j,
                    count: shared.len(),
                    shared,
                });
            }
        }
    }
}

fn verify_distinct(cards: &[Card], report: &mut DiagnosticReport) {
    for (idx, card) in cards.iter().enumerate() {
        let mut seen = BTreeSet::new();
        for symbol in card.symbols() {
            if !seen.insert(symbol.as_str()) {
                report.push(Diagnostic::DuplicateSymbol {
                    card: idx,
                    symbol: symbol.clone(),
                });
            }
        }
    }
}

/// Runs every structural check on a finished deck.
pub fn verify_deck(deck: &Deck) -> DiagnosticReport {
    let mut report = DiagnosticReport::new();
    verify_distinct(deck.cards(), &mut report);
    verify_pairs(deck.cards(), &mut report);
    report
}

/// Flags symbols that are not among the first `plane_size` entries of `pool`.
pub fn verify_membership(deck: &Deck, pool: &SymbolPool, report: &mut DiagnosticReport) {
    let allowed: BTreeSet<&str> = pool
        .prefix(deck.order().plane_size())
        .iter()
        .map(String::as_str)
        .collect();
    for (idx, card) in deck.cards().iter().enumerate() {
        for symbol in card.symbols() {
            if !allowed.contains(symbol.as_str()) {
                report.push(Diagnostic::ForeignSymbol {
                    card: idx,
                    symbol: symbol.clone(),
                });
            }
        }
    }
}
