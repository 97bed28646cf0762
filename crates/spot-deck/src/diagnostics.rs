use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-fatal data-integrity finding raised while mapping or verifying a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A point index fell outside the consumed pool and was clamped with modulo.
    OutOfRange {
        /// Card on which the index appeared.
        card: usize,
        /// Position of the index within the card.
        position: usize,
        /// Index as produced by line enumeration.
        index: usize,
        /// Index actually used after clamping.
        clamped: usize,
    },
    /// A card carries the same symbol more than once.
    DuplicateSymbol {
        /// Offending card.
        card: usize,
        /// Repeated symbol identifier.
        symbol: String,
    },
    /// Two cards do not share exactly one symbol.
    UnexpectedMatchCount {
        /// Lower card index of the pair.
        first: usize,
        /// Higher card index of the pair.
        second: usize,
        /// Number of shared symbols.
        count: usize,
        /// The shared symbols, in the order they appear on `first`.
        shared: Vec<String>,
    },
    /// A card carries a symbol outside the consumed part of the pool.
    ForeignSymbol {
        /// Offending card.
        card: usize,
        /// Symbol that is not part of the pool prefix.
        symbol: String,
    },
}

/// Discriminant of a [`Diagnostic`] used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// See [`Diagnostic::OutOfRange`].
    OutOfRange,
    /// See [`Diagnostic::DuplicateSymbol`].
    DuplicateSymbol,
    /// See [`Diagnostic::UnexpectedMatchCount`].
    UnexpectedMatchCount,
    /// See [`Diagnostic::ForeignSymbol`].
    ForeignSymbol,
}

impl Diagnostic {
    /// Returns the discriminant of the finding.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::OutOfRange { .. } => DiagnosticKind::OutOfRange,
            Diagnostic::DuplicateSymbol { .. } => DiagnosticKind::DuplicateSymbol,
            Diagnostic::UnexpectedMatchCount { .. } => DiagnosticKind::UnexpectedMatchCount,
            Diagnostic::ForeignSymbol { .. } => DiagnosticKind::ForeignSymbol,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OutOfRange {
                card,
                position,
                index,
                clamped,
            } => write!(
                f,
                "out of range symbol index {index} at card {card} position {position}, clamped to {clamped}"
            ),
            Diagnostic::DuplicateSymbol { card, symbol } => {
                write!(f, "duplicate symbol {symbol} on card {card}")
            }
            Diagnostic::UnexpectedMatchCount {
                first,
                second,
                count,
                shared,
            } => write!(
                f,
                "cards {first} and {second} share {count} symbols: {shared:?}"
            ),
            Diagnostic::ForeignSymbol { card, symbol } => {
                write!(f, "card {card} carries symbol {symbol} outside the pool")
            }
        }
    }
}

/// Accumulated diagnostics returned alongside a deck.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticReport {
    entries: Vec<Diagnostic>,
}

impl DiagnosticReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding and emits it on the log stream.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(kind = ?diagnostic.kind(), "{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Returns whether no finding was recorded.
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the findings in the order they were recorded.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns the number of findings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the report is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the findings of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.entries.iter().filter(move |d| d.kind() == kind)
    }

    /// Counts findings per kind.
    pub fn counts(&self) -> BTreeMap<DiagnosticKind, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.kind()).or_insert(0) += 1;
        }
        counts
    }
}
