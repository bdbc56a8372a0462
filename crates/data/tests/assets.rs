use std::collections::HashSet;
use std::path::PathBuf;
use tarot_core::{deal, PhysicalShuffler, RngState};
use tarot_data::{find_spread, load_catalog, load_shuffle_config, load_spreads, Arcana, Suit};

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

#[test]
fn shipped_catalog_is_a_full_tarot_deck() {
    let catalog = load_catalog(&assets_root()).expect("load catalog");
    assert_eq!(catalog.len(), 78);
    let majors = catalog
        .cards
        .iter()
        .filter(|card| card.arcana == Arcana::Major)
        .count();
    assert_eq!(majors, 22);
    for suit in [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles] {
        let count = catalog
            .cards
            .iter()
            .filter(|card| card.suit == Some(suit))
            .count();
        assert_eq!(count, 14, "{suit:?}");
    }
    assert_eq!(catalog.card(1).map(|card| card.name.as_str()), Some("The Fool"));
}

#[test]
fn shipped_shuffle_matches_defaults() {
    let config = load_shuffle_config(&assets_root()).expect("load shuffle");
    assert_eq!(config, tarot_core::ShuffleConfig::default());
}

#[test]
fn three_card_spread_is_past_present_future() {
    let spreads = load_spreads(&assets_root()).expect("load spreads");
    let spread = find_spread(&spreads, "three card").expect("three card spread");
    let names: Vec<&str> = spread
        .ordered_positions()
        .into_iter()
        .map(|position| position.name.as_str())
        .collect();
    assert_eq!(names, vec!["Past", "Present", "Future"]);
    assert!(find_spread(&spreads, "celtic cross").is_none());
}

#[test]
fn reading_from_shipped_assets() {
    let root = assets_root();
    let catalog = load_catalog(&root).expect("load catalog");
    let spreads = load_spreads(&root).expect("load spreads");
    let config = load_shuffle_config(&root).expect("load shuffle");
    let spread = find_spread(&spreads, "Three Card").expect("spread");

    for seed in 0..50 {
        let mut shuffler = PhysicalShuffler::with_rng(config.clone(), RngState::from_seed(seed));
        let placements = deal(spread, catalog.ids(), &mut shuffler).expect("deal");
        assert_eq!(placements.len(), 3);
        let ids: HashSet<u32> = placements.iter().map(|p| p.card_id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| catalog.card(*id).is_some()));
    }
}
