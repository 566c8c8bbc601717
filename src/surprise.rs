//! Random-content selection for the surprise page
//!
//! Once quotes, incidents, and themes are all cached, the page picks one
//! category uniformly at random among those that have records, then a
//! uniformly random record within it.

use rand::Rng;

use crate::data::{Incident, Quote, Theme};

/// One piece of surprise content, tagged by category
///
/// Matched exhaustively at render time; there is no untyped branch.
#[derive(Debug, Clone, PartialEq)]
pub enum SurpriseContent {
    Quote(Quote),
    Incident(Incident),
    Theme(Theme),
}

impl SurpriseContent {
    /// Display label for the category badge
    pub fn category(&self) -> &'static str {
        match self {
            SurpriseContent::Quote(_) => "Random Quote",
            SurpriseContent::Incident(_) => "Historical Incident",
            SurpriseContent::Theme(_) => "Stoic Theme",
        }
    }
}

/// Picks a random record from a random non-empty category.
///
/// Returns `None` only when all three collections are empty.
pub fn pick(
    quotes: &[Quote],
    incidents: &[Incident],
    themes: &[Theme],
    rng: &mut impl Rng,
) -> Option<SurpriseContent> {
    let mut categories: Vec<u8> = Vec::with_capacity(3);
    if !quotes.is_empty() {
        categories.push(0);
    }
    if !incidents.is_empty() {
        categories.push(1);
    }
    if !themes.is_empty() {
        categories.push(2);
    }

    let category = *categories.get(rng.gen_range(0..categories.len().max(1)))?;
    Some(match category {
        0 => SurpriseContent::Quote(quotes[rng.gen_range(0..quotes.len())].clone()),
        1 => SurpriseContent::Incident(incidents[rng.gen_range(0..incidents.len())].clone()),
        _ => SurpriseContent::Theme(themes[rng.gen_range(0..themes.len())].clone()),
    })
}
