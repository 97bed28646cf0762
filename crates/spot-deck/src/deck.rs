use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use spot_plane::PlaneOrder;

/// Symbols printed on one card, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    symbols: Vec<String>,
}

impl Card {
    /// Creates a card from its symbols.
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    /// Returns the symbols on the card.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the number of symbols on the card.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns whether the card is blank.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns whether the card carries `symbol`.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Returns the symbols this card shares with `other`, in this card's order.
    pub fn shared_with(&self, other: &Card) -> Vec<String> {
        let mut shared = Vec::new();
        for s1 in &self.symbols {
            for s2 in &other.symbols {
                if s1 == s2 {
                    shared.push(s1.clone());
                }
            }
        }
        shared
    }
}

/// Ordered cards built for a single plane order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    order: PlaneOrder,
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck from cards produced for `order`.
    pub fn new(order: PlaneOrder, cards: Vec<Card>) -> Self {
        Self { order, cards }
    }

    /// Returns the plane order the deck was built from.
    pub fn order(&self) -> PlaneOrder {
        self.order
    }

    /// Returns the cards in generation order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of symbols each card is expected to carry.
    pub fn symbols_per_card(&self) -> usize {
        self.order.symbols_per_card()
    }

    /// Returns the deck as plain nested identifier lists.
    pub fn to_nested(&self) -> Vec<Vec<String>> {
        self.cards.iter().map(|c| c.symbols().to_vec()).collect()
    }

    /// Computes occurrence statistics over the deck.
    pub fn stats(&self) -> DeckStats {
        DeckStats::from_deck(self)
    }
}

/// Occurrence statistics of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Plane order of the deck.
    pub order: PlaneOrder,
    /// Number of cards.
    pub cards: usize,
    /// Expected symbols per card.
    pub symbols_per_card: usize,
    /// Number of distinct symbols in the deck.
    pub distinct_symbols: usize,
    /// How many cards each symbol appears on.
    pub occurrences: BTreeMap<String, usize>,
    /// Lowest occurrence count, if the deck has any symbol.
    pub min_occurrences: Option<usize>,
    /// Highest occurrence count, if the deck has any symbol.
    pub max_occurrences: Option<usize>,
}

impl DeckStats {
    /// Tallies symbol occurrences over every card.
    pub fn from_deck(deck: &Deck) -> Self {
        let mut occurrences = BTreeMap::new();
        for card in deck.cards() {
            for symbol in card.symbols() {
                *occurrences.entry(symbol.clone()).or_insert(0) += 1;
            }
        }
        Self {
            order: deck.order(),
            cards: deck.len(),
            symbols_per_card: deck.symbols_per_card(),
            distinct_symbols: occurrences.len(),
            min_occurrences: occurrences.values().copied().min(),
            max_occurrences: occurrences.values().copied().max(),
            occurrences,
        }
    }

    /// Returns whether every symbol appears on exactly `n + 1` cards.
    pub fn is_uniform(&self) -> bool {
        let expected = Some(self.symbols_per_card);
        self.min_occurrences == expected && self.max_occurrences == expected
    }
}
