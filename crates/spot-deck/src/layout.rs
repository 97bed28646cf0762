use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use spot_core::{ErrorInfo, SpotError};

use crate::deck::Deck;

/// Page geometry in millimetres for printing cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of one card.
    #[serde(default = "default_card_extent")]
    pub card_width: f64,
    /// Height of one card.
    #[serde(default = "default_card_extent")]
    pub card_height: f64,
    /// Edge length of the square box each symbol is drawn in.
    #[serde(default = "default_symbol_size")]
    pub symbol_size: f64,
    /// Radius of the circle symbol centres sit on.
    #[serde(default = "default_ring_radius")]
    pub ring_radius: f64,
    /// Cards placed side by side on a row.
    #[serde(default = "default_grid")]
    pub cards_per_row: usize,
    /// Rows placed on a page before starting a new one.
    #[serde(default = "default_grid")]
    pub rows_per_page: usize,
    /// Offset of the first card from the page's top-left corner.
    #[serde(default = "default_margin")]
    pub margin: f64,
}

fn default_card_extent() -> f64 {
    50.0
}

fn default_symbol_size() -> f64 {
    20.0
}

fn default_ring_radius() -> f64 {
    20.0
}

fn default_grid() -> usize {
    4
}

fn default_margin() -> f64 {
    10.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: default_card_extent(),
            card_height: default_card_extent(),
            symbol_size: default_symbol_size(),
            ring_radius: default_ring_radius(),
            cards_per_row: default_grid(),
            rows_per_page: default_grid(),
            margin: default_margin(),
        }
    }
}

impl LayoutConfig {
    /// Rejects non-positive extents and empty grids.
    pub fn validate(&self) -> Result<(), SpotError> {
        let extents = [
            ("card_width", self.card_width),
            ("card_height", self.card_height),
            ("symbol_size", self.symbol_size),
        ];
        for (name, value) in extents {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(name, value.to_string(), "must be a positive length"));
            }
        }
        let offsets = [("ring_radius", self.ring_radius), ("margin", self.margin)];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(name, value.to_string(), "must not be negative"));
            }
        }
        if self.cards_per_row == 0 {
            return Err(invalid("cards_per_row", "0".into(), "must be at least 1"));
        }
        if self.rows_per_page == 0 {
            return Err(invalid("rows_per_page", "0".into(), "must be at least 1"));
        }
        if self.cards_per_row.checked_mul(self.rows_per_page).is_none() {
            return Err(invalid(
                "rows_per_page",
                self.rows_per_page.to_string(),
                "times cards_per_row must fit in a page count",
            ));
        }
        Ok(())
    }

    /// Number of cards that fit on one page.
    ///
    /// Saturates for grids that [`LayoutConfig::validate`] rejects.
    pub fn cards_per_page(&self) -> usize {
        self.cards_per_row.saturating_mul(self.rows_per_page)
    }
}

fn invalid(field: &str, value: String, hint: &str) -> SpotError {
    SpotError::Layout(
        ErrorInfo::new("invalid-layout", "layout parameter out of range")
            .with_context("field", field)
            .with_context("value", value)
            .with_hint(format!("{field} {hint}")),
    )
}

/// Top-left corner of one symbol box on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPlacement {
    /// Symbol identifier to draw.
    pub symbol: String,
    /// Horizontal offset from the page origin.
    pub x: f64,
    /// Vertical offset from the page origin.
    pub y: f64,
    /// Edge length of the symbol box.
    pub size: f64,
}

/// Position of one card and its symbols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPlacement {
    /// Index of the card in the deck.
    pub card: usize,
    /// Zero-based page number.
    pub page: usize,
    /// Row on the page.
    pub row: usize,
    /// Column within the row.
    pub column: usize,
    /// Horizontal offset of the card border.
    pub x: f64,
    /// Vertical offset of the card border.
    pub y: f64,
    /// Card width.
    pub width: f64,
    /// Card height.
    pub height: f64,
    /// Symbols evenly spaced on a circle around the card centre.
    pub symbols: Vec<SymbolPlacement>,
}

/// Placement of every card of a deck on printable pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckLayout {
    /// Geometry the layout was computed with.
    pub config: LayoutConfig,
    /// Number of pages needed.
    pub pages: usize,
    /// Card placements in deck order.
    pub cards: Vec<CardPlacement>,
}

/// Lays cards out row by row and symbols on a ring inside each card.
///
/// The symbol count is taken from each card, so decks of any order lay out
/// correctly.
pub fn layout_deck(deck: &Deck, config: &LayoutConfig) -> Result<DeckLayout, SpotError> {
    config.validate()?;
    let per_page = config.cards_per_page();
    let mut cards = Vec::with_capacity(deck.len());

    for (idx, card) in deck.cards().iter().enumerate() {
        let page = idx / per_page;
        let slot = idx % per_page;
        let row = slot / config.cards_per_row;
        let column = slot % config.cards_per_row;
        let x = config.margin + column as f64 * config.card_width;
        let y = config.margin + row as f64 * config.card_height;

        let centre_x = x + config.card_width / 2.0;
        let centre_y = y + config.card_height / 2.0;
        let half = config.symbol_size / 2.0;
        let count = card.len();
        let symbols = card
            .symbols()
            .iter()
            .enumerate()
            .map(|(i, symbol)| {
                let angle = i as f64 / count as f64 * TAU;
                SymbolPlacement {
                    symbol: symbol.clone(),
                    x: centre_x + config.ring_radius * angle.cos() - half,
                    y: centre_y + config.ring_radius * angle.sin() - half,
                    size: config.symbol_size,
                }
            })
            .collect();

        cards.push(CardPlacement {
            card: idx,
            page,
            row,
            column,
            x,
            y,
            width: config.card_width,
            height: config.card_height,
            symbols,
        });
    }

    Ok(DeckLayout {
        config: config.clone(),
        pages: deck.len().div_ceil(per_page),
        cards,
    })
}
