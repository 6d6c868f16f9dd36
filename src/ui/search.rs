use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::truncate;
use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_query_input(frame, app, chunks[0]);
    render_movie_list(frame, app, chunks[1]);
}

fn render_query_input(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.search_mode {
        (format!("{}▏", app.input), Style::default())
    } else if app.query.is_empty() {
        (
            "Press / to search movies...".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.query.clone(), Style::default())
    };

    let border_style = if app.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style),
    );

    frame.render_widget(input, area);
}

fn render_movie_list(frame: &mut Frame, app: &App, area: Rect) {
    if app.movies.is_empty() && !app.loading {
        let block = Block::default().borders(Borders::ALL).title("Movies");
        let empty = Paragraph::new("No movies found")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let w = area.width.saturating_sub(2) as usize;
    let fixed = 45; // marker(2) + title(32) + space(1) + year(6) + spaces(2) + margin(2)
    let flex = w.saturating_sub(fixed).max(10);

    let items: Vec<ListItem> = app
        .movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let style = if i == app.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            // The filled glyph stands in for the poster thumbnail; the hollow
            // one is the missing-poster placeholder
            let marker = if movie.poster_path.is_some() {
                Span::styled("▣ ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("□ ", Style::default().fg(Color::DarkGray))
            };

            let year = movie
                .release_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "----".to_string());

            let overview = truncate(movie.overview.lines().next().unwrap_or(""), flex);

            let line = Line::from(vec![
                marker,
                Span::styled(format!("{:<32}", truncate(&movie.title, 32)), style),
                Span::raw(" "),
                Span::styled(format!("({})", year), Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled(
                    format!("{:<flex$}", overview),
                    Style::default().fg(Color::Gray),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let title = if app.total_pages > 0 {
        format!(
            "Movies ({}) - page {}/{}",
            app.movies.len(),
            app.page,
            app.total_pages
        )
    } else {
        format!("Movies ({})", app.movies.len())
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
