//! Core data models for the Stoic Wisdom terminal browser
//!
//! This module contains the typed records returned by the backend API:
//! philosophers, quotes, themes, timeline events, and historical incidents.
//! All entities are server-owned; the client only reads and displays them.

use serde::{Deserialize, Serialize};

/// A Stoic philosopher with biography and teachings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Philosopher {
    /// Unique identifier within the philosophers collection
    pub id: i64,
    /// Full name, e.g. "Marcus Aurelius"
    pub name: String,
    /// Historical era, e.g. "Roman Imperial"
    pub era: String,
    /// Birth year (signed, negative = BCE)
    pub birth_year: i64,
    /// Death year (signed, negative = BCE)
    pub death_year: i64,
    /// Biography text
    pub biography: String,
    /// Major written works
    pub key_works: String,
    /// Summary of core teachings
    pub core_teachings: String,
}

/// A philosopher together with all of their quotes
///
/// The backend flattens the philosopher fields into the top-level object,
/// with the quotes as an array alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhilosopherWithQuotes {
    #[serde(flatten)]
    pub philosopher: Philosopher,
    pub quotes: Vec<Quote>,
}

/// A single quote with attribution and interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier within the quotes collection
    pub id: i64,
    /// Id of the philosopher this quote belongs to
    pub philosopher_id: i64,
    /// Denormalized philosopher name for display
    pub philosopher_name: String,
    /// The quote text itself
    pub text: String,
    /// Source work, e.g. "Meditations, Book 4"
    pub source: String,
    /// Historical context, when known
    pub context: Option<String>,
    /// What the quote means for a modern reader
    pub modern_interpretation: String,
}

/// A Stoic theme or practice area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Unique identifier within the themes collection
    pub id: i64,
    /// Theme name, e.g. "Dichotomy of Control"
    pub name: String,
    /// The underlying Stoic principle
    pub principle: String,
    /// How the principle applies to modern life
    pub modern_application: String,
    /// A concrete practice method
    pub practice_method: String,
    /// Supporting scientific research, when available
    pub scientific_basis: Option<String>,
}

/// An event on the historical timeline of Stoicism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Unique identifier within the timeline collection
    pub id: i64,
    /// Year of the event (signed, negative = BCE)
    pub year: i64,
    /// What happened
    pub event: String,
    /// Why it mattered for Stoicism
    pub significance: String,
    /// Philosopher associated with the event, if any
    pub related_philosopher: Option<String>,
}

/// A historical incident and the Stoic response to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Unique identifier within the incidents collection
    pub id: i64,
    /// Short title of the incident
    pub title: String,
    /// Id of the philosopher involved
    pub philosopher_id: i64,
    /// Denormalized philosopher name for display
    pub philosopher_name: String,
    /// Year of the incident (signed, negative = BCE)
    pub year: i64,
    /// What happened
    pub description: String,
    /// How the philosopher responded
    pub stoic_response: String,
    /// The lesson drawn from the incident
    pub lesson: String,
    /// A modern-day parallel situation
    pub modern_parallel: String,
}

/// Backend health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Health status string, e.g. "ok"
    pub status: String,
}

/// Formats a signed year for display: negative years are BCE, the rest CE.
///
/// Year zero does not occur in the dataset; it formats as "0 CE".
pub fn format_year(year: i64) -> String {
    if year < 0 {
        format!("{} BCE", -year)
    } else {
        format!("{} CE", year)
    }
}
