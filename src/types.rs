use chrono::Datelike;

/// Movie list entry as shown on the search screen
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub release_date: String,
    pub poster_path: Option<String>,
    pub overview: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full movie record for the details screen
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub release_date: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: String,
    pub runtime: u32,
    pub genres: Vec<Genre>,
}

/// One page of list results plus the pagination cursor reported by the API
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub page: u32,
    pub total_pages: u32,
}

impl MoviePage {
    /// True while the API reports pages beyond this one
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

fn parse_year(date: &str) -> Option<i32> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

impl Movie {
    pub fn release_year(&self) -> Option<i32> {
        parse_year(&self.release_date)
    }
}

impl MovieDetails {
    pub fn release_year(&self) -> Option<i32> {
        parse_year(&self.release_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, total_pages: u32) -> MoviePage {
        MoviePage {
            movies: vec![],
            page,
            total_pages,
        }
    }

    #[test]
    fn has_more_below_total() {
        assert!(page(1, 5).has_more());
    }

    #[test]
    fn has_more_false_on_last_page() {
        assert!(!page(5, 5).has_more());
    }

    #[test]
    fn has_more_false_past_total() {
        assert!(!page(6, 5).has_more());
    }

    #[test]
    fn has_more_false_on_empty_feed() {
        // TMDB reports total_pages = 0 for a query with no results
        assert!(!page(1, 0).has_more());
    }

    #[test]
    fn release_year_from_iso_date() {
        let movie = Movie {
            id: 1,
            title: "Batman Begins".to_string(),
            release_date: "2005-06-10".to_string(),
            poster_path: None,
            overview: String::new(),
        };
        assert_eq!(movie.release_year(), Some(2005));
    }

    #[test]
    fn release_year_empty_date() {
        let movie = Movie {
            id: 1,
            title: "Unreleased".to_string(),
            release_date: String::new(),
            poster_path: None,
            overview: String::new(),
        };
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn release_year_garbage_date() {
        let movie = Movie {
            id: 1,
            title: "Odd".to_string(),
            release_date: "soon".to_string(),
            poster_path: None,
            overview: String::new(),
        };
        assert_eq!(movie.release_year(), None);
    }
}
