use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn spot_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spot-cli"))
        .args(args)
        .output()
        .expect("spawn spot-cli")
}

fn write_symbols(dir: &Path, count: usize) {
    fs::create_dir_all(dir).unwrap();
    for i in 0..count {
        fs::write(dir.join(format!("sticker{i:02}.png")), b"png").unwrap();
    }
}

#[test]
fn generate_verify_layout_and_stats() {
    let temp = tempdir().unwrap();
    let symbols = temp.path().join("uploads");
    write_symbols(&symbols, 57);
    let deck = temp.path().join("out").join("deck.json");
    let layout = temp.path().join("layout.json");

    let output = spot_cli(&[
        "generate",
        "--symbols",
        symbols.to_str().unwrap(),
        "--out",
        deck.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("generated 57 cards with 8 symbols each"));

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&deck).unwrap()).unwrap();
    assert_eq!(document["order"], 7);
    assert_eq!(document["cards"].as_array().unwrap().len(), 57);
    assert_eq!(document["symbols"][0], "sticker00.png");
    assert!(document["provenance"]["created_at"].is_string());

    let output = spot_cli(&["verify", "--deck", deck.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let output = spot_cli(&[
        "layout",
        "--deck",
        deck.to_str().unwrap(),
        "--out",
        layout.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let placement: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&layout).unwrap()).unwrap();
    assert_eq!(placement["pages"], 4);

    let output = spot_cli(&["stats", "--deck", deck.to_str().unwrap()]);
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["min_occurrences"], 8);
    assert_eq!(stats["max_occurrences"], 8);
}

#[test]
fn too_few_symbols_fail() {
    let temp = tempdir().unwrap();
    let symbols = temp.path().join("uploads");
    write_symbols(&symbols, 6);
    let deck = temp.path().join("deck.json");
    let output = spot_cli(&[
        "generate",
        "--symbols",
        symbols.to_str().unwrap(),
        "--out",
        deck.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("insufficient-symbols"));
    assert!(!deck.exists());
}

#[test]
fn strict_mode_rejects_duplicate_symbols() {
    let temp = tempdir().unwrap();
    let manifest = temp.path().join("symbols.txt");
    fs::write(&manifest, "a\nb\nc\nd\ne\nf\na\n").unwrap();
    let deck = temp.path().join("deck.json");

    let lenient = spot_cli(&[
        "generate",
        "--symbols",
        manifest.to_str().unwrap(),
        "--out",
        deck.to_str().unwrap(),
    ]);
    assert!(lenient.status.success());
    let verify = spot_cli(&["verify", "--deck", deck.to_str().unwrap()]);
    assert!(!verify.status.success());

    let strict_deck = temp.path().join("strict.json");
    let strict = spot_cli(&[
        "generate",
        "--symbols",
        manifest.to_str().unwrap(),
        "--out",
        strict_deck.to_str().unwrap(),
        "--strict",
    ]);
    assert!(!strict.status.success());
    assert!(!strict_deck.exists());
}

#[test]
fn orders_lists_the_supported_table() {
    let output = spot_cli(&["orders"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let orders: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["order"].as_u64().unwrap())
        .collect();
    assert_eq!(orders, vec![2, 3, 5, 7]);
}
