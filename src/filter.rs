//! Project Filter
//!
//! Case-insensitive substring search over the project cards.

use crate::models::ProjectCard;

/// Which cards survive a query, in card order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    pub visible: Vec<bool>,
}

impl FilterOutcome {
    pub fn shown(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// The "no results" note is up exactly when nothing is visible
    pub fn no_results(&self) -> bool {
        self.shown() == 0
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }
}

/// Everything a card can be found by: its rendered text plus its tags
pub fn searchable_text(card: &ProjectCard) -> String {
    let chips = card.tag_list().collect::<Vec<_>>().join(" ");
    format!("{} {} {} {}", card.title, card.summary, chips, card.tags).to_lowercase()
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn card_matches(card: &ProjectCard, query: &str) -> bool {
    query.is_empty() || searchable_text(card).contains(query)
}

pub fn filter_projects(query: &str, cards: &[ProjectCard]) -> FilterOutcome {
    let query = normalize_query(query);
    let visible = cards.iter().map(|card| card_matches(card, &query)).collect();
    FilterOutcome { visible }
}
