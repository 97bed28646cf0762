use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use spot_deck::{generate_deck, to_json, DeckDocument, SymbolPool};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory of symbol files, or a manifest with one identifier per line.
    #[arg(long)]
    pub symbols: PathBuf,
    /// Destination for the deck document (JSON).
    #[arg(long)]
    pub out: PathBuf,
    /// Optional YAML configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Fail instead of writing a deck that carries diagnostics.
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let config = crate::load_config(args.config.as_deref())?;
    let pool = SymbolPool::from_path(&args.symbols)?;
    tracing::debug!(path = %args.symbols.display(), symbols = pool.len(), "loaded symbol pool");
    let generated = generate_deck(&pool)?;

    if (args.strict || config.strict) && !generated.diagnostics.is_clean() {
        return Err(format!(
            "deck generation recorded {} diagnostics in strict mode",
            generated.diagnostics.len()
        )
        .into());
    }

    let mut document = DeckDocument::from_generated(&generated);
    document.provenance.created_at = Some(chrono::Utc::now().to_rfc3339());
    document
        .provenance
        .tool_versions
        .insert("spot-cli".into(), env!("CARGO_PKG_VERSION").into());

    crate::write_text(&args.out, &to_json(&document)?)?;

    let unused = pool.len() - generated.used_symbols().len();
    println!(
        "generated {} cards with {} symbols each (order {}, {} unused symbols, {} diagnostics)",
        generated.deck.len(),
        generated.deck.symbols_per_card(),
        generated.order(),
        unused,
        generated.diagnostics.len()
    );
    Ok(())
}
