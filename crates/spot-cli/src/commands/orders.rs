use std::error::Error;

use serde::Serialize;
use spot_plane::SUPPORTED_ORDERS;

#[derive(Debug, Serialize)]
struct OrderRow {
    order: u32,
    cards: usize,
    symbols_per_card: usize,
    min_symbols: usize,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let rows: Vec<_> = SUPPORTED_ORDERS
        .iter()
        .map(|order| OrderRow {
            order: order.n(),
            cards: order.plane_size(),
            symbols_per_card: order.symbols_per_card(),
            min_symbols: order.plane_size(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
