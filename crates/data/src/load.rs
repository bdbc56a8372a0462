use crate::schema::{Catalog, ShuffleConfig, Spread};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const SHUFFLE_FILE: &str = "shuffle.json";
pub const SPREADS_FILE: &str = "spreads.json";
pub const DECK_FILE: &str = "deck.json";

/// Reads `shuffle.json` from `dir`, falling back to the defaults when absent.
pub fn load_shuffle_config(dir: &Path) -> anyhow::Result<ShuffleConfig> {
    let path = dir.join(SHUFFLE_FILE);
    if !path.exists() {
        log::debug!("{} not found, using default shuffle", path.display());
        return Ok(ShuffleConfig::default());
    }
    let config: ShuffleConfig = load_json(&path)?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

pub fn load_spreads(dir: &Path) -> anyhow::Result<Vec<Spread>> {
    let path = dir.join(SPREADS_FILE);
    let spreads: Vec<Spread> = load_json(&path)?;
    let mut names = HashSet::new();
    for spread in &spreads {
        spread
            .validate()
            .with_context(|| format!("validate {}", path.display()))?;
        if !names.insert(spread.name.to_lowercase()) {
            bail!("{}: duplicate spread {:?}", path.display(), spread.name);
        }
    }
    Ok(spreads)
}

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let path = dir.join(DECK_FILE);
    let catalog: Catalog = load_json(&path)?;
    let mut ids = HashSet::new();
    for card in &catalog.cards {
        if !ids.insert(card.id) {
            bail!("{}: duplicate card id {}", path.display(), card.id);
        }
    }
    log::debug!("loaded {} cards from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Case-insensitive lookup by spread name.
pub fn find_spread<'a>(spreads: &'a [Spread], name: &str) -> Option<&'a Spread> {
    spreads
        .iter()
        .find(|spread| spread.name.eq_ignore_ascii_case(name))
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tarot-data-{}-{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).expect("clear scratch dir");
        }
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn missing_shuffle_file_uses_defaults() {
        let dir = scratch_dir("no-shuffle");
        let config = load_shuffle_config(&dir).expect("load");
        assert_eq!(config, ShuffleConfig::default());
        fs::remove_dir_all(&dir).expect("clean up");
    }

    #[test]
    fn partial_shuffle_file_overrides_named_fields() {
        let dir = scratch_dir("partial-shuffle");
        fs::write(
            dir.join(SHUFFLE_FILE),
            r#"{ "flip_probability": 0.5, "split_variance": 2 }"#,
        )
        .expect("write");
        let config = load_shuffle_config(&dir).expect("load");
        assert_eq!(config.flip_probability, 0.5);
        assert_eq!(config.split_variance, 2);
        assert_eq!(config.packet_max, 12);
        fs::remove_dir_all(&dir).expect("clean up");
    }

    #[test]
    fn shuffle_file_cannot_change_the_ritual() {
        let dir = scratch_dir("ritual-shuffle");
        for body in [
            r#"{ "riffles": 0 }"#,
            r#"{ "opening_overhands": 0, "closing_overhands": 0 }"#,
            r#"{ "riffle_min_len": 0 }"#,
            r#"{ "cut_min_len": 0 }"#,
        ] {
            fs::write(dir.join(SHUFFLE_FILE), body).expect("write");
            let err = load_shuffle_config(&dir).expect_err(body);
            assert!(format!("{err:#}").contains("unknown field"), "{err:#}");
        }
        fs::remove_dir_all(&dir).expect("clean up");
    }

    #[test]
    fn oversized_split_variance_is_rejected() {
        let dir = scratch_dir("huge-variance");
        fs::write(
            dir.join(SHUFFLE_FILE),
            r#"{ "split_variance": 9223372036854775808 }"#,
        )
        .expect("write");
        let err = load_shuffle_config(&dir).expect_err("variance over cap");
        assert!(format!("{err:#}").contains("split_variance"), "{err:#}");
        fs::remove_dir_all(&dir).expect("clean up");
    }

    #[test]
    fn invalid_shuffle_file_is_rejected() {
        let dir = scratch_dir("bad-shuffle");
        fs::write(dir.join(SHUFFLE_FILE), r#"{ "cut_low": 0.9, "cut_high": 0.1 }"#)
            .expect("write");
        let err = load_shuffle_config(&dir).expect_err("inverted cut window");
        assert!(err.to_string().contains("validate"));
        fs::remove_dir_all(&dir).expect("clean up");
    }

    #[test]
    fn duplicate_card_ids_are_rejected() {
        let dir = scratch_dir("dup-cards");
        fs::write(
            dir.join(DECK_FILE),
            r#"{ "name": "Dup", "cards": [
                { "id": 1, "name": "The Fool", "number": 0, "arcana": "major" },
                { "id": 1, "name": "The Magician", "number": 1, "arcana": "major" }
            ] }"#,
        )
        .expect("write");
        let err = load_catalog(&dir).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate card id 1"));
        fs::remove_dir_all(&dir).expect("clean up");
    }

    #[test]
    fn duplicate_spread_names_are_rejected() {
        let dir = scratch_dir("dup-spreads");
        fs::write(
            dir.join(SPREADS_FILE),
            r#"[
                { "name": "One", "positions": [ { "number": 1, "name": "Focus" } ] },
                { "name": "one", "positions": [ { "number": 1, "name": "Focus" } ] }
            ]"#,
        )
        .expect("write");
        assert!(load_spreads(&dir).is_err());
        fs::remove_dir_all(&dir).expect("clean up");
    }

    #[test]
    fn spread_without_positions_is_rejected() {
        let dir = scratch_dir("empty-spread");
        fs::write(dir.join(SPREADS_FILE), r#"[ { "name": "Void", "positions": [] } ]"#)
            .expect("write");
        let err = load_spreads(&dir).expect_err("no positions");
        assert!(format!("{err:#}").contains("no positions"));
        fs::remove_dir_all(&dir).expect("clean up");
    }

    #[test]
    fn missing_deck_names_the_file() {
        let dir = scratch_dir("no-deck");
        let err = load_catalog(&dir).expect_err("missing deck");
        assert!(err.to_string().contains(DECK_FILE));
        fs::remove_dir_all(&dir).expect("clean up");
    }
}
