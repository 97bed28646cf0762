use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use spot_deck::layout_deck;

#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Deck document produced by `spot-cli generate`.
    #[arg(long)]
    pub deck: PathBuf,
    /// Destination for the layout (JSON).
    #[arg(long)]
    pub out: PathBuf,
    /// Optional YAML configuration providing the page geometry.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &LayoutArgs) -> Result<(), Box<dyn Error>> {
    let config = crate::load_config(args.config.as_deref())?;
    let document = crate::load_document(&args.deck)?;
    let layout = layout_deck(&document.deck(), &config.layout)?;
    crate::write_json(&args.out, &layout)?;
    println!(
        "laid out {} cards on {} pages",
        layout.cards.len(),
        layout.pages
    );
    Ok(())
}
