use crate::error::ReelError;
use crate::types::{Movie, MovieDetails};

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,
    ScrollUp,
    ScrollDown,
    GoToTop,
    GoToBottom,
    Select,

    // Search input
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    SearchConfirm,
    ClearSearch,

    // Feed loads. `load_id` is the generation the request was spawned under;
    // responses from a stale generation are dropped on arrival.
    SetQuery(String),
    LoadMore,
    Refresh,
    PageLoaded {
        movies: Vec<Movie>,
        page: u32,
        total_pages: u32,
        load_id: u64,
    },
    PageAppended {
        movies: Vec<Movie>,
        page: u32,
        total_pages: u32,
        load_id: u64,
    },
    PageFailed {
        message: String,
        load_id: u64,
    },

    // Details
    DetailsLoaded(Box<MovieDetails>, u64),
    DetailsUnavailable(u64),

    // Polish
    OpenInBrowser,
    YankUrl,

    Error(String),
    None,
}

impl From<ReelError> for Action {
    fn from(err: ReelError) -> Self {
        Action::Error(err.to_string())
    }
}
