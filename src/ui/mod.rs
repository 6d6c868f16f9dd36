mod details;
mod search;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.screen {
        Screen::Search => search::render(frame, app, chunks[1]),
        Screen::Details => details::render(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Search => {
            if app.query.is_empty() {
                "reel - Popular Movies".to_string()
            } else {
                format!("reel - Search: {}", app.query)
            }
        }
        Screen::Details => match &app.details {
            Some(movie) => format!("reel - {}", movie.title),
            None => "reel - Movie".to_string(),
        },
    };

    let header = Paragraph::new(Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(error) = &app.error {
        Line::from(vec![Span::styled(
            format!("Error: {} | r: retry", error),
            Style::default().fg(Color::Red),
        )])
    } else if app.loading || app.details_loading {
        Line::from(vec![Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )])
    } else if app.loading_more {
        Line::from(vec![Span::styled(
            "Loading more...",
            Style::default().fg(Color::Yellow),
        )])
    } else {
        let help = if app.search_mode {
            "type query | Enter: search | Esc: cancel"
        } else {
            match app.screen {
                Screen::Search => {
                    "/: search | c: clear | j/k/g/G: nav | Enter: details | o: browser | y: yank | r: refresh | q: quit"
                }
                Screen::Details => "j/k: scroll | o: browser | y: yank | q: back",
            }
        };
        Line::from(vec![Span::styled(help, Style::default().fg(Color::Gray))])
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

/// Truncate to a display budget without splitting a character
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("Heat", 10), "Heat");
    }

    #[test]
    fn truncate_long_text_gets_ellipsis() {
        assert_eq!(truncate("The Shawshank Redemption", 10), "The Sha...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Amélie à Montmartre étoilée", 10), "Amélie ...");
    }
}
