use std::error::Error;
use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Deck document produced by `spot-cli generate`.
    #[arg(long)]
    pub deck: PathBuf,
}

pub fn run(args: &StatsArgs) -> Result<(), Box<dyn Error>> {
    let document = crate::load_document(&args.deck)?;
    let stats = document.deck().stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
