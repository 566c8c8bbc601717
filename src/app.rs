//! Application state management for the Stoic Wisdom terminal browser
//!
//! This module owns the page state machine, keyboard handling, and the
//! data loading that runs between frames: each page declares its cache
//! keys, subscribes to them while mounted, and drives fetches through the
//! keyed store.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;

use crate::api::ApiClient;
use crate::cache::{BindingView, CacheKey, Store, Subscription};
use crate::cli::{StartPage, StartupConfig};
use crate::data::{Incident, Philosopher, PhilosopherWithQuotes, Quote, Theme, TimelineEvent};
use crate::filter::{unique_philosophers, PhilosopherSelection, QuoteFilter};
use crate::surprise::{self, SurpriseContent};

/// Cosmetic pause before surprise content updates, to signal "generation"
const GENERATION_DELAY: Duration = Duration::from_millis(600);

/// Current page of the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Random quote of the moment
    Home,
    /// All philosophers
    Philosophers,
    /// One philosopher with their quotes
    PhilosopherDetail(i64),
    /// All quotes with client-side filtering
    Quotes,
    /// Stoic themes and practices
    Themes,
    /// Historical timeline
    Timeline,
    /// Historical incidents and Stoic responses
    Incidents,
    /// Random quote / incident / theme
    Surprise,
}

impl From<StartPage> for Page {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Home => Page::Home,
            StartPage::Philosophers => Page::Philosophers,
            StartPage::Quotes => Page::Quotes,
            StartPage::Themes => Page::Themes,
            StartPage::Timeline => Page::Timeline,
            StartPage::Incidents => Page::Incidents,
            StartPage::Surprise => Page::Surprise,
        }
    }
}

/// Main application struct managing state and data
pub struct App {
    /// Current page
    pub page: Page,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Keyed request cache shared by all pages
    pub store: Store,
    /// Selection index in the current list page
    pub list_index: usize,
    /// Scroll offset in detail views
    pub detail_scroll: u16,
    /// Filter inputs for the quotes page
    pub filter: QuoteFilter,
    /// Whether keystrokes feed the quotes search box
    pub search_mode: bool,
    /// Refresh counter folded into the home page's cache key
    pub refresh_key: u32,
    /// Content currently shown on the surprise page
    pub surprise_content: Option<SurpriseContent>,
    /// Whether the surprise page is mid-"generation"
    pub is_generating: bool,
    /// Timestamp of the last completed load
    pub last_refresh: Option<DateTime<Local>>,
    /// Whether the current page still has fetches to run
    needs_load: bool,
    /// Subscriptions for the mounted page's cache keys
    subscriptions: Vec<Subscription>,
    /// API client
    client: ApiClient,
}

impl App {
    /// Creates a new App from the startup configuration
    pub fn new(config: &StartupConfig) -> Self {
        Self {
            page: config.start_page.map(Page::from).unwrap_or(Page::Home),
            should_quit: false,
            show_help: false,
            store: Store::new(),
            list_index: 0,
            detail_scroll: 0,
            filter: QuoteFilter::default(),
            search_mode: false,
            refresh_key: 0,
            surprise_content: None,
            is_generating: false,
            last_refresh: None,
            needs_load: true,
            subscriptions: Vec::new(),
            client: ApiClient::new(config.api_url.clone()),
        }
    }

    /// Creates an App with a specific client and store (for testing)
    #[cfg(test)]
    pub fn with_parts(client: ApiClient, store: Store) -> Self {
        let mut app = Self::new(&StartupConfig::default());
        app.client = client;
        app.store = store;
        app
    }

    // ------------------------------------------------------------------
    // Cache keys
    // ------------------------------------------------------------------

    pub fn home_key(&self) -> CacheKey {
        CacheKey::with_variant("quote_random", self.refresh_key)
    }

    pub fn philosophers_key() -> CacheKey {
        CacheKey::new("philosophers")
    }

    pub fn philosopher_detail_key(id: i64) -> CacheKey {
        CacheKey::with_variant("philosopher_quotes", id)
    }

    pub fn quotes_key() -> CacheKey {
        CacheKey::new("quotes")
    }

    pub fn themes_key() -> CacheKey {
        CacheKey::new("themes")
    }

    pub fn timeline_key() -> CacheKey {
        CacheKey::new("timeline")
    }

    pub fn incidents_key() -> CacheKey {
        CacheKey::new("incidents")
    }

    /// Cache keys the current page reads
    fn page_keys(&self) -> Vec<CacheKey> {
        match &self.page {
            Page::Home => vec![self.home_key()],
            Page::Philosophers => vec![Self::philosophers_key()],
            Page::PhilosopherDetail(id) => vec![Self::philosopher_detail_key(*id)],
            Page::Quotes => vec![Self::quotes_key()],
            Page::Themes => vec![Self::themes_key()],
            Page::Timeline => vec![Self::timeline_key()],
            Page::Incidents => vec![Self::incidents_key()],
            Page::Surprise => vec![
                Self::quotes_key(),
                Self::incidents_key(),
                Self::themes_key(),
            ],
        }
    }

    // ------------------------------------------------------------------
    // Data loading
    // ------------------------------------------------------------------

    /// Runs any pending fetches for the current page.
    ///
    /// Called from the main loop between frames. Cache hits return
    /// immediately, so calling this after every input is cheap.
    pub async fn tick(&mut self) {
        if self.needs_load {
            self.needs_load = false;
            self.mount_subscriptions();
            self.load_page().await;
            self.last_refresh = Some(Local::now());
        }

        if self.is_generating {
            self.generate_surprise().await;
        }
    }

    /// Replaces the previous page's subscriptions with the current page's
    fn mount_subscriptions(&mut self) {
        self.subscriptions = self
            .page_keys()
            .into_iter()
            .map(|key| self.store.subscribe(key))
            .collect();
    }

    async fn load_page(&mut self) {
        match self.page.clone() {
            Page::Home => {
                let client = self.client.clone();
                let _ = self
                    .store
                    .fetch(&self.home_key(), move || async move {
                        client.random_quote().await
                    })
                    .await;
            }
            Page::Philosophers => {
                let client = self.client.clone();
                let _ = self
                    .store
                    .fetch(&Self::philosophers_key(), move || async move {
                        client.philosophers().await
                    })
                    .await;
            }
            Page::PhilosopherDetail(id) => {
                let client = self.client.clone();
                let _ = self
                    .store
                    .fetch(&Self::philosopher_detail_key(id), move || async move {
                        client.philosopher_with_quotes(id).await
                    })
                    .await;
            }
            Page::Quotes => {
                let client = self.client.clone();
                let _ = self
                    .store
                    .fetch(&Self::quotes_key(), move || async move {
                        client.quotes().await
                    })
                    .await;
            }
            Page::Themes => {
                let client = self.client.clone();
                let _ = self
                    .store
                    .fetch(&Self::themes_key(), move || async move {
                        client.themes().await
                    })
                    .await;
            }
            Page::Timeline => {
                let client = self.client.clone();
                let _ = self
                    .store
                    .fetch(&Self::timeline_key(), move || async move {
                        client.timeline().await
                    })
                    .await;
            }
            Page::Incidents => {
                let client = self.client.clone();
                let _ = self
                    .store
                    .fetch(&Self::incidents_key(), move || async move {
                        client.incidents().await
                    })
                    .await;
            }
            Page::Surprise => {
                // The three resources load concurrently and independently;
                // the page is ready once all of them have resolved.
                let quotes_client = self.client.clone();
                let incidents_client = self.client.clone();
                let themes_client = self.client.clone();
                let quotes_key = Self::quotes_key();
                let incidents_key = Self::incidents_key();
                let themes_key = Self::themes_key();
                let (quotes, incidents, themes) = futures::join!(
                    self.store.fetch(&quotes_key, move || async move {
                        quotes_client.quotes().await
                    }),
                    self.store.fetch(&incidents_key, move || async move {
                        incidents_client.incidents().await
                    }),
                    self.store.fetch(&themes_key, move || async move {
                        themes_client.themes().await
                    }),
                );

                if self.surprise_content.is_none()
                    && quotes.is_ok()
                    && incidents.is_ok()
                    && themes.is_ok()
                {
                    self.is_generating = true;
                }
            }
        }
    }

    /// Picks new surprise content after the cosmetic generation delay
    async fn generate_surprise(&mut self) {
        let quotes = self.store.cached::<Vec<Quote>>(&Self::quotes_key());
        let incidents = self.store.cached::<Vec<Incident>>(&Self::incidents_key());
        let themes = self.store.cached::<Vec<Theme>>(&Self::themes_key());

        let (Some(quotes), Some(incidents), Some(themes)) = (quotes, incidents, themes) else {
            self.is_generating = false;
            return;
        };

        tokio::time::sleep(GENERATION_DELAY).await;

        let mut rng = rand::thread_rng();
        self.surprise_content = surprise::pick(&quotes, &incidents, &themes, &mut rng);
        self.is_generating = false;
    }

    // ------------------------------------------------------------------
    // Bindings read by the renderers
    // ------------------------------------------------------------------

    pub fn home_binding(&self) -> BindingView<Quote> {
        self.store.lookup(&self.home_key())
    }

    pub fn philosophers_binding(&self) -> BindingView<Vec<Philosopher>> {
        self.store.lookup(&Self::philosophers_key())
    }

    pub fn philosopher_detail_binding(&self, id: i64) -> BindingView<PhilosopherWithQuotes> {
        self.store.lookup(&Self::philosopher_detail_key(id))
    }

    pub fn quotes_binding(&self) -> BindingView<Vec<Quote>> {
        self.store.lookup(&Self::quotes_key())
    }

    pub fn themes_binding(&self) -> BindingView<Vec<Theme>> {
        self.store.lookup(&Self::themes_key())
    }

    pub fn timeline_binding(&self) -> BindingView<Vec<TimelineEvent>> {
        self.store.lookup(&Self::timeline_key())
    }

    pub fn incidents_binding(&self) -> BindingView<Vec<Incident>> {
        self.store.lookup(&Self::incidents_key())
    }

    /// Number of rows in the current page's list, after filtering
    pub fn current_list_len(&self) -> usize {
        match &self.page {
            Page::Philosophers => self
                .philosophers_binding()
                .data
                .map_or(0, |list| list.len()),
            Page::Quotes => self.quotes_binding().data.map_or(0, |quotes| {
                quotes.iter().filter(|q| self.filter.matches(q)).count()
            }),
            Page::Themes => self.themes_binding().data.map_or(0, |list| list.len()),
            Page::Timeline => self.timeline_binding().data.map_or(0, |list| list.len()),
            Page::Incidents => self.incidents_binding().data.map_or(0, |list| list.len()),
            _ => 0,
        }
    }

    // ------------------------------------------------------------------
    // Navigation and input
    // ------------------------------------------------------------------

    /// Switches to a page, resetting per-page view state
    pub fn go_to(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        self.page = page;
        self.list_index = 0;
        self.detail_scroll = 0;
        self.search_mode = false;
        self.needs_load = true;
    }

    fn move_selection_up(&mut self) {
        self.list_index = self.list_index.saturating_sub(1);
    }

    fn move_selection_down(&mut self) {
        let len = self.current_list_len();
        if len > 0 && self.list_index < len - 1 {
            self.list_index += 1;
        }
    }

    /// Invalidate and refetch everything the current page reads
    fn refresh_current_page(&mut self) {
        for key in self.page_keys() {
            self.store.invalidate(&key);
        }
        self.store.evict_idle();
        self.needs_load = true;
    }

    /// Advances the philosopher filter: All, then each name in order
    fn cycle_philosopher_filter(&mut self) {
        let Some(quotes) = self.quotes_binding().data else {
            return;
        };
        let names = unique_philosophers(&quotes);
        self.filter.philosopher = match &self.filter.philosopher {
            PhilosopherSelection::All => match names.first() {
                Some(first) => PhilosopherSelection::Name(first.clone()),
                None => PhilosopherSelection::All,
            },
            PhilosopherSelection::Name(current) => {
                match names.iter().position(|name| name == current) {
                    Some(pos) if pos + 1 < names.len() => {
                        PhilosopherSelection::Name(names[pos + 1].clone())
                    }
                    _ => PhilosopherSelection::All,
                }
            }
        };
        self.list_index = 0;
    }

    /// Id of the philosopher currently selected in the list, if loaded
    fn selected_philosopher_id(&self) -> Option<i64> {
        self.philosophers_binding()
            .data
            .and_then(|list| list.get(self.list_index).map(|p| p.id))
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key bindings
    /// - `1`-`7`: switch page (home, philosophers, quotes, themes,
    ///   timeline, incidents, surprise)
    /// - `Up`/`k`, `Down`/`j`: move selection in list pages
    /// - `Enter`: open detail view (philosophers)
    /// - `n`: new random quote (home)
    /// - `s`: new surprise content (surprise)
    /// - `/`: edit the search box, `f`: cycle the philosopher filter (quotes)
    /// - `r`: invalidate and refetch the current page
    /// - `h`: return home, `Esc`: back / quit from home
    /// - `?`: help overlay, `q`: quit
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Search mode feeds keystrokes into the quotes search box
        if self.search_mode {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.search_mode = false;
                }
                KeyCode::Backspace => {
                    self.filter.search.pop();
                    self.list_index = 0;
                }
                KeyCode::Char(c) => {
                    self.filter.search.push(c);
                    self.list_index = 0;
                }
                _ => {}
            }
            return;
        }

        // Global keys
        match key_event.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Char('1') => return self.go_to(Page::Home),
            KeyCode::Char('2') => return self.go_to(Page::Philosophers),
            KeyCode::Char('3') => return self.go_to(Page::Quotes),
            KeyCode::Char('4') => return self.go_to(Page::Themes),
            KeyCode::Char('5') => return self.go_to(Page::Timeline),
            KeyCode::Char('6') => return self.go_to(Page::Incidents),
            KeyCode::Char('7') => return self.go_to(Page::Surprise),
            KeyCode::Char('h') => return self.go_to(Page::Home),
            KeyCode::Char('r') => {
                self.refresh_current_page();
                return;
            }
            _ => {}
        }

        match self.page.clone() {
            Page::Home => match key_event.code {
                KeyCode::Char('n') => {
                    // A new key means a new cache entry and a fresh fetch;
                    // the old entry stays valid.
                    self.refresh_key += 1;
                    self.needs_load = true;
                }
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                _ => {}
            },
            Page::Philosophers => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
                KeyCode::Enter => {
                    if let Some(id) = self.selected_philosopher_id() {
                        self.go_to(Page::PhilosopherDetail(id));
                    }
                }
                KeyCode::Esc => self.go_to(Page::Home),
                _ => {}
            },
            Page::PhilosopherDetail(_) => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.detail_scroll = self.detail_scroll.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.detail_scroll = self.detail_scroll.saturating_add(1);
                }
                KeyCode::Esc => self.go_to(Page::Philosophers),
                _ => {}
            },
            Page::Quotes => match key_event.code {
                KeyCode::Char('/') => self.search_mode = true,
                KeyCode::Char('f') => self.cycle_philosopher_filter(),
                KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
                KeyCode::Esc => self.go_to(Page::Home),
                _ => {}
            },
            Page::Themes | Page::Timeline | Page::Incidents => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
                KeyCode::Esc => self.go_to(Page::Home),
                _ => {}
            },
            Page::Surprise => match key_event.code {
                KeyCode::Char('s') | KeyCode::Enter => {
                    if !self.is_generating {
                        self.is_generating = true;
                    }
                }
                KeyCode::Esc => self.go_to(Page::Home),
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::with_parts(ApiClient::default(), Store::new())
    }

    fn sample_quote(id: i64, philosopher: &str) -> Quote {
        Quote {
            id,
            philosopher_id: id,
            philosopher_name: philosopher.to_string(),
            text: format!("quote {id}"),
            source: "Letters".to_string(),
            context: None,
            modern_interpretation: "meaning".to_string(),
        }
    }

    async fn preload_quotes(app: &App, quotes: Vec<Quote>) {
        app.store
            .fetch(&App::quotes_key(), move || async move {
                Ok::<_, ApiError>(quotes)
            })
            .await
            .unwrap();
    }

    #[test]
    fn test_new_app_starts_on_home() {
        let app = test_app();
        assert_eq!(app.page, Page::Home);
        assert!(!app.should_quit);
        assert!(app.needs_load);
    }

    #[test]
    fn test_start_page_from_config() {
        let config = StartupConfig {
            start_page: Some(StartPage::Timeline),
            ..StartupConfig::default()
        };
        let app = App::new(&config);
        assert_eq!(app.page, Page::Timeline);
    }

    #[test]
    fn test_number_keys_switch_pages() {
        let mut app = test_app();

        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.page, Page::Quotes);

        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.page, Page::Timeline);

        app.handle_key(key(KeyCode::Char('7')));
        assert_eq!(app.page, Page::Surprise);

        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_q_quits_from_any_page() {
        let mut app = test_app();
        app.go_to(Page::Themes);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_on_home_quits() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_on_list_page_returns_home() {
        let mut app = test_app();
        app.go_to(Page::Incidents);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.page, Page::Home);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_overlay_intercepts_keys() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);

        // Page switches are ignored while help is shown
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.page, Page::Home);
        assert!(app.show_help);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_new_quote_bumps_refresh_key() {
        let mut app = test_app();
        let first_key = app.home_key();

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.refresh_key, 1);
        assert!(app.needs_load);
        assert_ne!(app.home_key(), first_key, "new counter derives a new key");
    }

    #[test]
    fn test_search_mode_captures_text() {
        let mut app = test_app();
        app.go_to(Page::Quotes);

        app.handle_key(key(KeyCode::Char('/')));
        assert!(app.search_mode);

        app.handle_key(key(KeyCode::Char('f')));
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('t')));
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.filter.search, "fate");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.filter.search, "fat");

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.search_mode);
        assert_eq!(app.filter.search, "fat", "leaving search keeps the term");
    }

    #[test]
    fn test_search_mode_blocks_global_keys() {
        let mut app = test_app();
        app.go_to(Page::Quotes);
        app.handle_key(key(KeyCode::Char('/')));

        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit, "'q' is text while searching");
        assert_eq!(app.filter.search, "q");
    }

    #[tokio::test]
    async fn test_cycle_philosopher_filter_walks_names_then_all() {
        let mut app = test_app();
        app.go_to(Page::Quotes);
        preload_quotes(
            &app,
            vec![
                sample_quote(1, "Seneca"),
                sample_quote(2, "Epictetus"),
                sample_quote(3, "Seneca"),
            ],
        )
        .await;

        assert_eq!(app.filter.philosopher, PhilosopherSelection::All);

        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(
            app.filter.philosopher,
            PhilosopherSelection::Name("Epictetus".to_string())
        );

        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(
            app.filter.philosopher,
            PhilosopherSelection::Name("Seneca".to_string())
        );

        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.filter.philosopher, PhilosopherSelection::All);
    }

    #[tokio::test]
    async fn test_selection_respects_filtered_length() {
        let mut app = test_app();
        app.go_to(Page::Quotes);
        preload_quotes(
            &app,
            vec![sample_quote(1, "Seneca"), sample_quote(2, "Epictetus")],
        )
        .await;

        assert_eq!(app.current_list_len(), 2);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.list_index, 1);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.list_index, 1, "selection stops at the last row");

        app.filter.philosopher = PhilosopherSelection::Name("Seneca".to_string());
        assert_eq!(app.current_list_len(), 1);
    }

    #[tokio::test]
    async fn test_enter_opens_philosopher_detail() {
        let mut app = test_app();
        app.go_to(Page::Philosophers);

        let philosophers = vec![Philosopher {
            id: 42,
            name: "Epictetus".to_string(),
            era: "Roman".to_string(),
            birth_year: 50,
            death_year: 135,
            biography: "Born a slave.".to_string(),
            key_works: "Discourses".to_string(),
            core_teachings: "Dichotomy of control.".to_string(),
        }];
        app.store
            .fetch(&App::philosophers_key(), move || async move {
                Ok::<_, ApiError>(philosophers)
            })
            .await
            .unwrap();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page, Page::PhilosopherDetail(42));

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.page, Page::Philosophers);
    }

    #[tokio::test]
    async fn test_tick_mounts_subscriptions_for_page_keys() {
        // Port 1 is never listening, so the fetches fail fast
        let mut app = App::with_parts(ApiClient::new("http://127.0.0.1:1"), Store::new());
        app.go_to(Page::Surprise);

        // The fetches fail, but mounting happens regardless
        app.tick().await;

        assert_eq!(app.store.subscriber_count(&App::quotes_key()), 1);
        assert_eq!(app.store.subscriber_count(&App::incidents_key()), 1);
        assert_eq!(app.store.subscriber_count(&App::themes_key()), 1);

        app.go_to(Page::Timeline);
        app.tick().await;

        assert_eq!(app.store.subscriber_count(&App::quotes_key()), 0);
        assert_eq!(app.store.subscriber_count(&App::timeline_key()), 1);
    }

    #[test]
    fn test_refresh_invalidates_current_page() {
        let mut app = test_app();
        app.go_to(Page::Themes);
        app.needs_load = false;

        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.needs_load);
    }

    #[test]
    fn test_surprise_regenerate_sets_flag() {
        let mut app = test_app();
        app.go_to(Page::Surprise);

        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.is_generating);
    }

    #[tokio::test]
    async fn test_generate_surprise_without_data_clears_flag() {
        let mut app = test_app();
        app.go_to(Page::Surprise);
        app.is_generating = true;

        // No cached quotes/incidents/themes: generation is a no-op.
        app.generate_surprise().await;
        assert!(!app.is_generating);
        assert!(app.surprise_content.is_none());
    }

    #[test]
    fn test_go_to_same_page_keeps_state() {
        let mut app = test_app();
        app.go_to(Page::Quotes);
        app.needs_load = false;
        app.list_index = 3;

        app.go_to(Page::Quotes);
        assert_eq!(app.list_index, 3);
        assert!(!app.needs_load);
    }
}
