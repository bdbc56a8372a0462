use serde::Serialize;
use tarot_core::{CardId, Orientation, Placement, Spread};
use tarot_data::Catalog;

#[derive(Debug, Serialize)]
pub struct ReadingView<'a> {
    pub deck: &'a str,
    pub spread: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub cards: Vec<CardView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CardView<'a> {
    pub position: u32,
    pub position_name: &'a str,
    pub card_id: CardId,
    pub card_name: &'a str,
    pub orientation: Orientation,
}

impl<'a> ReadingView<'a> {
    pub fn new(
        catalog: &'a Catalog,
        spread: &'a Spread,
        placements: &'a [Placement],
        seed: Option<u64>,
    ) -> Self {
        let cards = placements
            .iter()
            .map(|placement| CardView {
                position: placement.position.number,
                position_name: &placement.position.name,
                card_id: placement.card_id,
                card_name: catalog
                    .card(placement.card_id)
                    .map(|card| card.name.as_str())
                    .unwrap_or("unknown card"),
                orientation: placement.orientation,
            })
            .collect();
        Self {
            deck: &catalog.name,
            spread: &spread.name,
            seed,
            cards,
        }
    }

    pub fn to_text(&self) -> String {
        let width = self
            .cards
            .iter()
            .map(|card| card.position_name.len())
            .max()
            .unwrap_or(0);
        let mut out = format!("{} / {}\n", self.deck, self.spread);
        for card in &self.cards {
            out.push_str(&format!(
                "{:>2}. {:<width$}  {} ({})\n",
                card.position,
                format!("{}:", card.position_name),
                card.card_name,
                card.orientation,
                width = width + 1,
            ));
        }
        out
    }
}

pub fn spread_list(spreads: &[Spread]) -> String {
    let mut out = String::new();
    for spread in spreads {
        out.push_str(&format!("{} ({} cards)\n", spread.name, spread.num_cards()));
        for position in spread.ordered_positions() {
            out.push_str(&format!("  {}. {}\n", position.number, position.name));
        }
    }
    out
}
