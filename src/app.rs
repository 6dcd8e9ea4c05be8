//! Application state management for clima
//!
//! This module contains the main application state: the current selection
//! (country, city, unit), the last weather record and error, the favorites
//! list, and the keyboard handling that drives all of them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::cli::StartupConfig;
use crate::config;
use crate::data::{all_countries, Country, QueryError, WeatherClient, WeatherRecord};
use crate::display::{TempBand, Unit};
use crate::favorites::{title_case_words, FavoritesStore};

/// Which part of the screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The country selector
    Country,
    /// The city text input
    City,
    /// The saved favorites list
    Favorites,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Country => Focus::City,
            Focus::City => Focus::Favorites,
            Focus::Favorites => Focus::Country,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Country => Focus::Favorites,
            Focus::City => Focus::Country,
            Focus::Favorites => Focus::City,
        }
    }
}

/// Main application struct managing state and data
pub struct App {
    /// Current keyboard focus
    pub focus: Focus,
    /// Index into the country table, `None` until a country is chosen
    pub country_index: Option<usize>,
    /// Live city input, re-title-cased on every edit
    pub city: String,
    /// Current display unit
    pub unit: Unit,
    /// Last successful weather record, kept across failed queries
    pub weather: Option<WeatherRecord>,
    /// Background band derived from the last record's Celsius temperature
    pub band: Option<TempBand>,
    /// Last query error message, cleared when a new query starts
    pub error: Option<String>,
    /// Whether a query is currently running
    pub loading: bool,
    /// Set by input handling, drained by the event loop
    pub query_requested: bool,
    /// Cursor position in the favorites list
    pub favorite_index: usize,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Saved favorites, loaded once at startup
    pub favorites: FavoritesStore,
    /// Weather API client
    weather_client: WeatherClient,
}

impl App {
    /// Creates a new App instance with default state
    ///
    /// Loads the favorites list from the platform data directory and the
    /// API key from the environment/config file.
    pub fn new() -> Self {
        Self::with_parts(
            WeatherClient::new(config::api_key()),
            FavoritesStore::new(),
        )
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// This is used to apply CLI arguments like --country/--city to set the
    /// initial selection, and to trigger the first lookup when both were
    /// supplied.
    ///
    /// # Arguments
    /// * `config` - The startup configuration derived from CLI arguments
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();
        app.apply_startup_config(config);
        app
    }

    /// Creates a new App instance with custom collaborators (for testing)
    fn with_parts(weather_client: WeatherClient, favorites: FavoritesStore) -> Self {
        Self {
            focus: Focus::Country,
            country_index: None,
            city: String::new(),
            unit: Unit::default(),
            weather: None,
            band: None,
            error: None,
            loading: false,
            query_requested: false,
            favorite_index: 0,
            show_help: false,
            should_quit: false,
            favorites,
            weather_client,
        }
    }

    /// Test constructor over a throwaway store and a keyless client
    #[cfg(test)]
    pub fn with_store(favorites: FavoritesStore) -> Self {
        Self::with_parts(WeatherClient::new(String::new()), favorites)
    }

    fn apply_startup_config(&mut self, config: StartupConfig) {
        self.unit = config.unit;
        if let Some(country) = config.initial_country {
            self.country_index = all_countries()
                .iter()
                .position(|candidate| candidate.code == country.code);
        }
        if let Some(city) = config.initial_city {
            self.city = title_case_words(&city);
            self.focus = Focus::City;
        }
        if config.auto_query {
            self.query_requested = true;
        }
    }

    /// Returns the currently selected country, if any
    pub fn selected_country(&self) -> Option<&'static Country> {
        self.country_index.and_then(|i| all_countries().get(i))
    }

    /// Display name of the selected country, empty when none is selected
    ///
    /// The empty string deliberately fails country resolution in the query
    /// pipeline, which is how "no country selected" surfaces as an error.
    pub fn country_name(&self) -> &'static str {
        self.selected_country().map(|c| c.name).unwrap_or("")
    }

    /// Moves the country selection up, selecting the first entry when none
    /// is selected yet
    fn country_up(&mut self) {
        let index = match self.country_index {
            None => 0,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.set_country(index);
    }

    /// Moves the country selection down
    fn country_down(&mut self) {
        let last = all_countries().len() - 1;
        let index = match self.country_index {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.set_country(index);
    }

    /// Selects a country and clears the city input
    ///
    /// A city is only meaningful relative to its country, so changing the
    /// country invalidates whatever was typed.
    fn set_country(&mut self, index: usize) {
        if self.country_index != Some(index) {
            self.city.clear();
        }
        self.country_index = Some(index);
    }

    /// Appends a character to the city input and re-applies the live
    /// title-casing
    fn push_city_char(&mut self, ch: char) {
        self.city.push(ch);
        self.city = title_case_words(&self.city);
    }

    /// Removes the last character of the city input
    fn backspace_city(&mut self) {
        self.city.pop();
    }

    /// Requests a query unless one is already running
    ///
    /// The loading flag is a best-effort gate: the event loop additionally
    /// runs requests one at a time to completion.
    pub fn request_query(&mut self) {
        if !self.loading {
            self.query_requested = true;
        }
    }

    /// Marks the query as started: clears the previous error, sets loading
    ///
    /// Called before the loading frame is drawn so the user sees the state
    /// flip immediately.
    pub fn begin_query(&mut self) {
        self.error = None;
        self.loading = true;
    }

    /// Runs the lookup for the current selection to completion
    pub async fn run_query(&mut self) {
        let city = self.city.clone();
        let country_name = self.country_name();
        let result = self.weather_client.lookup(&city, country_name).await;
        self.finish_query(result);
    }

    /// Applies a finished lookup to the application state
    ///
    /// On success the record is replaced wholesale and the background band
    /// is derived from its raw Celsius temperature. On failure only the
    /// error message changes: a previously displayed record and its band
    /// stay on screen next to the error.
    pub fn finish_query(&mut self, result: Result<WeatherRecord, QueryError>) {
        match result {
            Ok(record) => {
                self.band = Some(TempBand::for_celsius(record.temp_c));
                self.weather = Some(record);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    /// Saves the current city/country pair to favorites
    ///
    /// Delegates validation (empty fields, duplicates) to the store; a
    /// persistence failure keeps the in-memory entry and is not surfaced
    /// as a query error.
    pub fn save_favorite(&mut self) {
        let Some(country) = self.selected_country() else {
            return;
        };
        let city = self.city.clone();
        let _ = self.favorites.add(&city, country.name);
    }

    /// Removes the favorite under the cursor and keeps the cursor in range
    pub fn remove_selected_favorite(&mut self) {
        let _ = self.favorites.remove(self.favorite_index);
        if self.favorite_index >= self.favorites.len() && self.favorite_index > 0 {
            self.favorite_index = self.favorites.len().saturating_sub(1);
        }
    }

    /// Re-populates the selection from the favorite under the cursor and
    /// requests the same query path a manual submit would take
    pub fn load_selected_favorite(&mut self) {
        let Some(entry) = self.favorites.entries().get(self.favorite_index) else {
            return;
        };

        // A stale country name (edited file) leaves the selection empty;
        // the query then reports the missing country like any other submit.
        self.country_index = all_countries()
            .iter()
            .position(|candidate| candidate.name == entry.country);
        self.city = entry.city.clone();
        self.request_query();
    }

    fn favorites_up(&mut self) {
        self.favorite_index = self.favorite_index.saturating_sub(1);
    }

    fn favorites_down(&mut self) {
        if self.favorite_index + 1 < self.favorites.len() {
            self.favorite_index += 1;
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `Esc`: Quit (or dismiss the help overlay)
    /// - `Tab`/`BackTab`: Cycle focus between country, city and favorites
    /// - `Up`/`Down`: Change the country or move the favorites cursor
    /// - `Enter`: Country -> focus city; City -> submit; Favorites ->
    ///   re-query the selected entry
    /// - `Ctrl-U`: Toggle °C/°F
    /// - `Ctrl-S`: Save the current pair as a favorite
    /// - `Ctrl-D` (or `Delete` on the list): Remove the selected favorite
    /// - `?`: Show help (when the city input is not focused)
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

        match key_event.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            match key_event.code {
                KeyCode::Char('u') => {
                    self.unit = self.unit.toggled();
                }
                KeyCode::Char('s') => {
                    self.save_favorite();
                }
                KeyCode::Char('d') => {
                    self.remove_selected_favorite();
                }
                _ => {}
            }
            return;
        }

        match self.focus {
            Focus::Country => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.country_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.country_down();
                }
                KeyCode::Enter => {
                    self.focus = Focus::City;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                _ => {}
            },
            Focus::City => match key_event.code {
                KeyCode::Enter => {
                    self.request_query();
                }
                KeyCode::Backspace => {
                    self.backspace_city();
                }
                // Plain characters are text, including 'q' and '?'
                KeyCode::Char(ch) => {
                    self.push_city_char(ch);
                }
                _ => {}
            },
            Focus::Favorites => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.favorites_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.favorites_down();
                }
                KeyCode::Enter => {
                    self.load_selected_favorite();
                }
                KeyCode::Delete => {
                    self.remove_selected_favorite();
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                _ => {}
            },
        }
    }
}
