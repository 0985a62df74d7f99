//! Plain-text rendering of carousel state.

use std::fmt;

use folio_carousel::CarouselSnapshot;
use folio_model::CardLike;
use serde::Serialize;

/// Text payload carried by the player's carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
}

impl Card {
    pub fn from_card_like(card: &impl CardLike) -> Self {
        Self {
            title: card.title().to_string(),
            subtitle: card.subtitle().to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subtitle.is_empty() {
            f.write_str(&self.title)
        } else {
            write!(f, "{} ({})", self.title, self.subtitle)
        }
    }
}

pub fn cards<C: CardLike>(items: &[C]) -> Vec<Card> {
    items.iter().map(Card::from_card_like).collect()
}

/// One dot per indicator, filled for the active one.
pub fn dot_strip(snapshot: &CarouselSnapshot<Card>) -> String {
    snapshot
        .indicators
        .iter()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect()
}

/// `[2/9] ●●○… | Title A (Org) | Title B (Org)  [paused]`
pub fn snapshot_line(snapshot: &CarouselSnapshot<Card>) -> String {
    let mut line = format!(
        "[{}/{}] {}",
        snapshot.current_index + 1,
        snapshot.indicator_count(),
        dot_strip(snapshot)
    );
    for card in &snapshot.window {
        line.push_str(" | ");
        line.push_str(&card.to_string());
    }
    if snapshot.paused {
        line.push_str("  [paused]");
    }
    line
}

/// The text strip, or the whole snapshot as a single JSON line.
pub fn render_snapshot(
    snapshot: &CarouselSnapshot<Card>,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(snapshot)?)
    } else {
        Ok(snapshot_line(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_carousel::{
        CarouselConfig, CarouselEngine, CarouselKey, ManualTimers,
    };
    use folio_model::CERTIFICATES;

    #[test]
    fn line_shows_position_window_and_pause() {
        let mut engine = CarouselEngine::mount(
            CarouselKey::Certificates,
            cards(CERTIFICATES),
            CarouselConfig::certificates_defaults(),
            1280,
            ManualTimers::new(),
        );
        engine.next_item();
        let line = snapshot_line(&engine.snapshot());
        assert!(line.starts_with("[2/9] ○●○○○○○○○ | "), "{line}");
        assert!(line.contains(CERTIFICATES[1].title));
        assert!(line.contains(CERTIFICATES[2].title));
        assert!(line.ends_with("[paused]"));
    }
}
