use spot_core::SpotError;
use spot_deck::{generate_deck, layout_deck, DeckConfig, LayoutConfig, SymbolPool};

const EPS: f64 = 1e-9;

fn pool(count: usize) -> SymbolPool {
    (0..count).map(|i| format!("{i}.png")).collect()
}

#[test]
fn full_deck_spans_four_pages() {
    let generated = generate_deck(&pool(57)).unwrap();
    let layout = layout_deck(&generated.deck, &LayoutConfig::default()).unwrap();
    assert_eq!(layout.pages, 4);
    assert_eq!(layout.cards.len(), 57);

    let seventeenth = &layout.cards[16];
    assert_eq!((seventeenth.page, seventeenth.row, seventeenth.column), (1, 0, 0));
    let sixth = &layout.cards[5];
    assert_eq!((sixth.page, sixth.row, sixth.column), (0, 1, 1));
    assert!((sixth.x - 60.0).abs() < EPS);
    assert!((sixth.y - 60.0).abs() < EPS);
}

#[test]
fn symbols_sit_evenly_on_the_ring() {
    let generated = generate_deck(&pool(13)).unwrap();
    let config = LayoutConfig::default();
    let layout = layout_deck(&generated.deck, &config).unwrap();
    let card = &layout.cards[0];
    assert_eq!(card.symbols.len(), 4);

    let centre = (card.x + card.width / 2.0, card.y + card.height / 2.0);
    let half = config.symbol_size / 2.0;
    let first = &card.symbols[0];
    assert!((first.x - (centre.0 + config.ring_radius - half)).abs() < EPS);
    assert!((first.y - (centre.1 - half)).abs() < EPS);
    let second = &card.symbols[1];
    assert!((second.x - (centre.0 - half)).abs() < EPS);
    assert!((second.y - (centre.1 + config.ring_radius - half)).abs() < EPS);

    for symbol in &card.symbols {
        let dx = symbol.x + half - centre.0;
        let dy = symbol.y + half - centre.1;
        assert!(((dx * dx + dy * dy).sqrt() - config.ring_radius).abs() < 1e-6);
    }
    let names: Vec<_> = card.symbols.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(names, generated.deck.cards()[0].symbols());
}

#[test]
fn invalid_geometry_is_rejected() {
    let generated = generate_deck(&pool(7)).unwrap();
    let config = LayoutConfig {
        cards_per_row: 0,
        ..LayoutConfig::default()
    };
    let err = layout_deck(&generated.deck, &config).expect_err("empty grid");
    match err {
        SpotError::Layout(info) => {
            assert_eq!(info.code, "invalid-layout");
            assert_eq!(info.context["field"], "cards_per_row");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }

    let config = LayoutConfig {
        symbol_size: -1.0,
        ..LayoutConfig::default()
    };
    assert!(layout_deck(&generated.deck, &config).is_err());
}

#[test]
fn oversized_grid_is_rejected_instead_of_overflowing() {
    let err = DeckConfig::from_yaml_str(
        "layout:\n  cards_per_row: 9223372036854775808\n  rows_per_page: 2\n",
    )
    .expect_err("grid overflows the page count");
    assert_eq!(err.info().code, "invalid-layout");
    assert_eq!(err.info().context["field"], "rows_per_page");

    let generated = generate_deck(&pool(7)).unwrap();
    let config = LayoutConfig {
        cards_per_row: usize::MAX,
        rows_per_page: 2,
        ..LayoutConfig::default()
    };
    assert_eq!(config.cards_per_page(), usize::MAX);
    match layout_deck(&generated.deck, &config).expect_err("overflowing grid") {
        SpotError::Layout(info) => assert_eq!(info.code, "invalid-layout"),
        other => panic!("unexpected error variant: {:?}", other),
    }
}
