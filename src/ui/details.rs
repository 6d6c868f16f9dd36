use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::tmdb;
use crate::types::MovieDetails;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(movie) = &app.details else {
        let block = Block::default().borders(Borders::ALL).title("Movie");
        let text = if app.details_loading {
            "Loading..."
        } else {
            "Movie details not found."
        };
        let empty = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    };

    let lines = header_lines(movie);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(lines.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Details"));
    frame.render_widget(header, chunks[0]);

    render_overview(frame, app, movie, chunks[1]);
}

fn header_lines(movie: &MovieDetails) -> Vec<Line<'_>> {
    let label = Style::default().fg(Color::Gray);

    let release = if movie.release_date.is_empty() {
        "unknown"
    } else {
        movie.release_date.as_str()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            &movie.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Release date: ", label),
            Span::raw(release),
            Span::raw(" | "),
            Span::styled("Runtime: ", label),
            Span::raw(format!("{} min", movie.runtime)),
        ]),
    ];

    if !movie.genres.is_empty() {
        let mut spans = vec![Span::styled("Genres: ", label)];
        for (i, genre) in movie.genres.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(", "));
            }
            spans.push(Span::styled(&genre.name, Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));
    }

    // Absent image paths suppress the link lines entirely
    if let Some(path) = &movie.backdrop_path {
        lines.push(Line::from(vec![
            Span::styled("Backdrop: ", label),
            Span::styled(tmdb::backdrop_url(path), Style::default().fg(Color::Blue)),
        ]));
    }
    if let Some(path) = &movie.poster_path {
        lines.push(Line::from(vec![
            Span::styled("Poster: ", label),
            Span::styled(tmdb::poster_thumb_url(path), Style::default().fg(Color::Blue)),
        ]));
    }

    lines
}

fn render_overview(frame: &mut Frame, app: &App, movie: &MovieDetails, area: Rect) {
    let text = if movie.overview.is_empty() {
        "No overview available."
    } else {
        movie.overview.as_str()
    };

    let overview = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Overview"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset as u16, 0));

    frame.render_widget(overview, area);
}
