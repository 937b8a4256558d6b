//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message log for the game.

use super::app::{App, MessageStyle};
use crate::core::{Classification, Letter};
use crate::game::board::Row;
use crate::game::{Board, GameStatus, KEYBOARD_LAYOUT, Key};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Background/foreground for a classification; `None` is an unused key
#[must_use]
pub fn classification_style(classification: Option<Classification>) -> Style {
    match classification {
        Some(Classification::InWordRightPlace) => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(Classification::InWordWrongPlace) => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(Classification::NotInWord) => Style::default().bg(Color::DarkGray).fg(Color::Gray),
        Some(Classification::InProgress) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for cell in row {
        let letter = cell.letter.map_or('·', Letter::to_char);
        spans.push(Span::styled(
            format!(" {letter} "),
            classification_style(Some(cell.classification)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App<'_>, area: Rect) {
    let board = Board::from_session(&app.session);

    // Blank line between rows so squares read as a grid
    let mut lines = Vec::new();
    for row in board.rows() {
        lines.push(board_line(row));
        lines.push(Line::from(""));
    }

    let title = match app.session.status() {
        GameStatus::InProgress => " Board ",
        GameStatus::Won => " 🎉 Solved! ",
        GameStatus::Lost => " Game Over ",
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App<'_>, area: Rect) {
    let record = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&key| {
                    let hint = match key {
                        Key::Letter(letter) => record.get(letter),
                        Key::Enter | Key::Delete => None,
                    };
                    [
                        Span::styled(format!(" {key} "), classification_style(hint)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App<'_>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let guesses_text = format!("Guesses left: {}", app.session.remaining_guesses());
    f.render_widget(
        Paragraph::new(guesses_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.status().is_over() {
        "Any key: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;

    #[test]
    fn styles_rank_visually() {
        assert_eq!(
            classification_style(Some(Classification::InWordRightPlace)).bg,
            Some(Color::Green)
        );
        assert_eq!(
            classification_style(Some(Classification::InWordWrongPlace)).bg,
            Some(Color::Yellow)
        );
        assert_eq!(classification_style(None).bg, None);
    }

    #[test]
    fn renders_typed_letters() {
        let dict = WordList::from_strs(&["CRANE"]).unwrap();
        let mut app = App::new(&dict, StdRng::seed_from_u64(0));
        for ch in "CRA".chars() {
            app.session.append_letter(ch);
        }

        let mut terminal = ratatui::Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains(" C   R   A "));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Guesses left: 6"));
    }
}
