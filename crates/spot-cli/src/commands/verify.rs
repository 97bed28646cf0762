use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use spot_deck::{verify_deck, verify_membership, DiagnosticReport};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Deck document produced by `spot-cli generate`.
    #[arg(long)]
    pub deck: PathBuf,
}

#[derive(Debug, Serialize)]
struct VerifySummary {
    order: u32,
    cards: usize,
    expected_cards: usize,
    diagnostics: DiagnosticReport,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let document = crate::load_document(&args.deck)?;
    let deck = document.deck();
    let mut report = verify_deck(&deck);
    verify_membership(&deck, &document.symbols, &mut report);

    let summary = VerifySummary {
        order: deck.order().n(),
        cards: deck.len(),
        expected_cards: deck.order().plane_size(),
        diagnostics: report,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if summary.cards != summary.expected_cards {
        return Err(format!(
            "deck has {} cards, expected {}",
            summary.cards, summary.expected_cards
        )
        .into());
    }
    if !summary.diagnostics.is_clean() {
        return Err(format!(
            "deck verification found {} problems",
            summary.diagnostics.len()
        )
        .into());
    }
    Ok(())
}
