//! Client-side filtering for the quotes page
//!
//! Pure, synchronous filtering over the already-cached quotes list. The
//! backend supports server-side filters too, but the quotes page works on
//! the full list so typing in the search box never hits the network.

use crate::data::Quote;

/// Philosopher filter selection: everything, or one exact name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhilosopherSelection {
    #[default]
    All,
    Name(String),
}

impl PhilosopherSelection {
    fn matches(&self, quote: &Quote) -> bool {
        match self {
            PhilosopherSelection::All => true,
            PhilosopherSelection::Name(name) => quote.philosopher_name == *name,
        }
    }
}

/// Filter inputs for the quotes page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteFilter {
    /// Philosopher selection (exact match or all)
    pub philosopher: PhilosopherSelection,
    /// Free-text search term; empty matches everything
    pub search: String,
}

impl QuoteFilter {
    /// Whether a single quote passes the filter
    pub fn matches(&self, quote: &Quote) -> bool {
        if !self.philosopher.matches(quote) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        quote.text.to_lowercase().contains(&term)
            || quote.modern_interpretation.to_lowercase().contains(&term)
            || quote.source.to_lowercase().contains(&term)
    }
}

/// Filters quotes by philosopher and case-insensitive substring search
/// over text, modern interpretation, and source
pub fn filter_quotes(quotes: &[Quote], filter: &QuoteFilter) -> Vec<Quote> {
    quotes
        .iter()
        .filter(|quote| filter.matches(quote))
        .cloned()
        .collect()
}

/// Sorted, deduplicated philosopher names present in the quotes list
pub fn unique_philosophers(quotes: &[Quote]) -> Vec<String> {
    let mut names: Vec<String> = quotes
        .iter()
        .map(|quote| quote.philosopher_name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: i64, philosopher: &str, text: &str) -> Quote {
        Quote {
            id,
            philosopher_id: id,
            philosopher_name: philosopher.to_string(),
            text: text.to_string(),
            source: "Test Source".to_string(),
            context: None,
            modern_interpretation: "interpretation".to_string(),
        }
    }

    fn sample_quotes() -> Vec<Quote> {
        vec![
            quote(1, "Seneca", "A"),
            quote(2, "Epictetus", "B"),
        ]
    }

    #[test]
    fn test_filter_by_philosopher_exact_match() {
        let quotes = sample_quotes();
        let filter = QuoteFilter {
            philosopher: PhilosopherSelection::Name("Seneca".to_string()),
            search: String::new(),
        };

        let filtered = filter_quotes(&quotes, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "A");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let quotes = sample_quotes();
        let filter = QuoteFilter {
            philosopher: PhilosopherSelection::All,
            search: "b".to_string(),
        };

        let filtered = filter_quotes(&quotes, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "B");
    }

    #[test]
    fn test_search_covers_interpretation_and_source() {
        let mut quotes = sample_quotes();
        quotes[0].modern_interpretation = "Memento mori".to_string();
        quotes[1].source = "Enchiridion".to_string();

        let by_interpretation = filter_quotes(
            &quotes,
            &QuoteFilter {
                philosopher: PhilosopherSelection::All,
                search: "MEMENTO".to_string(),
            },
        );
        assert_eq!(by_interpretation.len(), 1);
        assert_eq!(by_interpretation[0].id, 1);

        let by_source = filter_quotes(
            &quotes,
            &QuoteFilter {
                philosopher: PhilosopherSelection::All,
                search: "enchi".to_string(),
            },
        );
        assert_eq!(by_source.len(), 1);
        assert_eq!(by_source[0].id, 2);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let quotes = sample_quotes();
        let filtered = filter_quotes(&quotes, &QuoteFilter::default());
        assert_eq!(filtered, quotes);
    }

    #[test]
    fn test_philosopher_and_search_combine_with_and() {
        let quotes = sample_quotes();
        let filter = QuoteFilter {
            philosopher: PhilosopherSelection::Name("Seneca".to_string()),
            search: "b".to_string(),
        };

        // Seneca's quote doesn't contain "b"
        assert!(filter_quotes(&quotes, &filter).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let quotes = sample_quotes();
        let filter = QuoteFilter {
            philosopher: PhilosopherSelection::Name("Epictetus".to_string()),
            search: "b".to_string(),
        };

        let once = filter_quotes(&quotes, &filter);
        let twice = filter_quotes(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unique_philosophers_sorted_and_deduped() {
        let quotes = vec![
            quote(1, "Seneca", "x"),
            quote(2, "Epictetus", "y"),
            quote(3, "Seneca", "z"),
        ];

        assert_eq!(
            unique_philosophers(&quotes),
            vec!["Epictetus".to_string(), "Seneca".to_string()]
        );
    }
}
