use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::event::Event;
use crate::tmdb::{self, Tmdb};
use crate::types::{Movie, MovieDetails};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Search,  // Query input + paginated result list
    Details, // Single movie record
}

pub struct App {
    pub screen: Screen,

    // Search screen
    pub query: String,
    pub input: String,
    pub search_mode: bool,
    pub movies: Vec<Movie>,
    pub page: u32,
    pub total_pages: u32,
    pub selected: usize,
    pub loading: bool,
    pub loading_more: bool,

    // Details screen
    pub details: Option<MovieDetails>,
    pub details_loading: bool,
    pub current_movie_id: Option<u64>,
    pub scroll_offset: usize,

    pub error: Option<String>,
    pub should_quit: bool,

    initial_query: Option<String>,
    load_seq: u64,
    details_seq: u64,
    tmdb: Arc<Tmdb>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(
        tmdb: Tmdb,
        initial_query: Option<String>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            screen: Screen::Search,

            query: String::new(),
            input: String::new(),
            search_mode: false,
            movies: Vec::new(),
            page: 1,
            total_pages: 0,
            selected: 0,
            loading: false,
            loading_more: false,

            details: None,
            details_loading: false,
            current_movie_id: None,
            scroll_offset: 0,

            error: None,
            should_quit: false,

            initial_query,
            load_seq: 0,
            details_seq: 0,
            tmdb: Arc::new(tmdb),
            action_tx,
        }
    }

    /// True while the API reports pages beyond the one currently stored
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    fn can_load_more(&self) -> bool {
        self.has_more() && !self.loading_more && !self.loading
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Init => Action::SetQuery(self.initial_query.clone().unwrap_or_default()),
            Event::Key(key) => self.handle_key(key),
            _ => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        if self.search_mode {
            return match key.code {
                KeyCode::Esc => Action::ExitSearchMode,
                KeyCode::Enter => Action::SearchConfirm,
                KeyCode::Backspace => Action::SearchBackspace,
                KeyCode::Char(c) => Action::SearchInput(c),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.screen == Screen::Search {
                    Action::Quit
                } else {
                    Action::Back
                }
            }
            KeyCode::Char('/') => {
                if self.screen == Screen::Search {
                    Action::EnterSearchMode
                } else {
                    Action::None
                }
            }
            KeyCode::Char('c') => {
                if self.screen == Screen::Search {
                    Action::ClearSearch
                } else {
                    Action::None
                }
            }
            KeyCode::Char('r') => {
                if self.screen == Screen::Search {
                    Action::Refresh
                } else {
                    Action::None
                }
            }
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('g') => Action::GoToTop,
            KeyCode::Char('G') => Action::GoToBottom,
            KeyCode::Enter => Action::Select,
            KeyCode::Char('o') => Action::OpenInBrowser,
            KeyCode::Char('y') => Action::YankUrl,
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) {
        if self.error.is_some() && !matches!(action, Action::Quit | Action::Back) {
            self.error = None;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => match self.screen {
                Screen::Search => {
                    self.should_quit = true;
                }
                Screen::Details => {
                    self.screen = Screen::Search;
                    self.details = None;
                    self.details_loading = false;
                    self.current_movie_id = None;
                    self.scroll_offset = 0;
                    // Invalidate any detail fetch still in flight
                    self.details_seq += 1;
                }
            },
            Action::ScrollUp => match self.screen {
                Screen::Search => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    }
                }
                Screen::Details => {
                    if self.scroll_offset > 0 {
                        self.scroll_offset -= 1;
                    }
                }
            },
            Action::ScrollDown => match self.screen {
                Screen::Search => {
                    if !self.movies.is_empty() && self.selected < self.movies.len() - 1 {
                        self.selected += 1;
                    }
                    // Reaching the bottom of the list is the "end reached" trigger
                    if self.selected + 1 >= self.movies.len() {
                        self.load_more();
                    }
                }
                Screen::Details => {
                    self.scroll_offset += 1;
                }
            },
            Action::GoToTop => match self.screen {
                Screen::Search => {
                    self.selected = 0;
                }
                Screen::Details => {
                    self.scroll_offset = 0;
                }
            },
            Action::GoToBottom => {
                if self.screen == Screen::Search && !self.movies.is_empty() {
                    self.selected = self.movies.len() - 1;
                }
            }
            Action::Select => {
                if self.screen == Screen::Search {
                    if let Some(movie) = self.movies.get(self.selected) {
                        let id = movie.id;
                        self.current_movie_id = Some(id);
                        self.screen = Screen::Details;
                        self.details = None;
                        self.details_loading = true;
                        self.scroll_offset = 0;
                        self.details_seq += 1;
                        self.spawn_load_details(id);
                    }
                }
            }

            // Search input
            Action::EnterSearchMode => {
                self.search_mode = true;
                self.input = self.query.clone();
            }
            Action::ExitSearchMode => {
                self.search_mode = false;
                self.input.clear();
            }
            Action::SearchInput(c) => {
                self.input.push(c);
            }
            Action::SearchBackspace => {
                self.input.pop();
            }
            Action::SearchConfirm => {
                self.search_mode = false;
                let text = std::mem::take(&mut self.input);
                self.set_query(text);
            }
            Action::ClearSearch => {
                self.set_query(String::new());
            }

            // Feed loads
            Action::SetQuery(text) => {
                self.set_query(text);
            }
            Action::LoadMore => {
                self.load_more();
            }
            Action::Refresh => {
                self.set_query(self.query.clone());
            }
            Action::PageLoaded {
                movies,
                page,
                total_pages,
                load_id,
            } => {
                if load_id == self.load_seq {
                    self.loading = false;
                    self.movies = movies;
                    self.page = page;
                    self.total_pages = total_pages;
                    self.selected = 0;
                }
            }
            Action::PageAppended {
                movies,
                page,
                total_pages,
                load_id,
            } => {
                if load_id == self.load_seq {
                    self.loading_more = false;
                    self.movies.extend(movies);
                    self.page = page;
                    self.total_pages = total_pages;
                }
            }
            Action::PageFailed { message, load_id } => {
                if load_id == self.load_seq {
                    self.loading = false;
                    self.loading_more = false;
                    self.error = Some(message);
                }
            }

            // Details
            Action::DetailsLoaded(details, load_id) => {
                if load_id == self.details_seq {
                    self.details_loading = false;
                    self.details = Some(*details);
                }
            }
            Action::DetailsUnavailable(load_id) => {
                // The record stays unset; the details screen renders "not found"
                if load_id == self.details_seq {
                    self.details_loading = false;
                }
            }

            Action::OpenInBrowser => {
                if let Some(url) = self.current_url() {
                    if let Err(e) = open::that(&url) {
                        self.error = Some(format!("Could not open browser: {}", e));
                    }
                }
            }
            Action::YankUrl => {
                if let Some(url) = self.current_url() {
                    let copied = arboard::Clipboard::new().and_then(|mut c| c.set_text(url));
                    if let Err(e) = copied {
                        self.error = Some(format!("Clipboard error: {}", e));
                    }
                }
            }

            Action::Error(msg) => {
                self.loading = false;
                self.loading_more = false;
                self.details_loading = false;
                self.error = Some(msg);
            }
            Action::None => {}
        }
    }

    /// The TMDB web page for whatever the user is looking at
    fn current_url(&self) -> Option<String> {
        match self.screen {
            Screen::Search => self.movies.get(self.selected).map(|m| tmdb::movie_url(m.id)),
            Screen::Details => self.current_movie_id.map(tmdb::movie_url),
        }
    }

    /// Install a new query and start a page-1 replace fetch. The empty query
    /// selects the popular feed instead of a search.
    fn set_query(&mut self, text: String) {
        self.query = text;
        self.page = 1;
        self.selected = 0;
        self.loading = true;
        self.loading_more = false;
        self.load_seq += 1;
        self.spawn_load_page(1, false);
    }

    fn load_more(&mut self) {
        if !self.can_load_more() {
            return;
        }
        self.loading_more = true;
        self.spawn_load_page(self.page + 1, true);
    }

    fn spawn_load_page(&self, page: u32, append: bool) {
        let tx = self.action_tx.clone();
        let tmdb = Arc::clone(&self.tmdb);
        let query = self.query.clone();
        let load_id = self.load_seq;
        tokio::spawn(async move {
            let result = if query.is_empty() {
                tmdb.popular(page).await
            } else {
                tmdb.search(&query, page).await
            };

            match result {
                Ok(result_page) => {
                    let action = if append {
                        Action::PageAppended {
                            movies: result_page.movies,
                            page: result_page.page,
                            total_pages: result_page.total_pages,
                            load_id,
                        }
                    } else {
                        Action::PageLoaded {
                            movies: result_page.movies,
                            page: result_page.page,
                            total_pages: result_page.total_pages,
                            load_id,
                        }
                    };
                    tx.send(action).ok();
                }
                Err(e) => {
                    tracing::warn!("page {} load failed: {}", page, e);
                    tx.send(Action::PageFailed {
                        message: e.to_string(),
                        load_id,
                    })
                    .ok();
                }
            }
        });
    }

    fn spawn_load_details(&self, id: u64) {
        let tx = self.action_tx.clone();
        let tmdb = Arc::clone(&self.tmdb);
        let load_id = self.details_seq;
        tokio::spawn(async move {
            match tmdb.details(id).await {
                Ok(details) => {
                    tx.send(Action::DetailsLoaded(Box::new(details), load_id))
                        .ok();
                }
                Err(e) => {
                    tracing::warn!("details load failed for movie {}: {}", id, e);
                    tx.send(Action::DetailsUnavailable(load_id)).ok();
                }
            }
        });
    }
}
