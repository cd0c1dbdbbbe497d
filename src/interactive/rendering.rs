//! TUI rendering with ratatui
//!
//! Visualizations for the ladder explorer.

use super::app::{App, HISTORY_LIMIT, MessageStyle};
use crate::commands::LadderOutcome;
use crate::output::formatters::changed_position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Ladder
            Constraint::Percentage(40), // Neighbors, history, messages
        ])
        .split(chunks[1]);

    render_ladder(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 DOUBLETS - Word Ladder Explorer")
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

/// One rung, with the letter that changed from the previous rung highlighted
fn rung_line<'a>(index: usize, previous: Option<&str>, word: &'a str) -> Line<'a> {
    let changed = previous.and_then(|prev| changed_position(prev, word));

    let mut spans = vec![Span::styled(
        format!("{:>3}. ", index + 1),
        Style::default().fg(Color::DarkGray),
    )];

    for (i, c) in word.chars().enumerate() {
        let style = if Some(i) == changed {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(c.to_uppercase().to_string(), style));
    }

    Line::from(spans)
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Ladder ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(view) = &app.current else {
        let paragraph = Paragraph::new("Enter two words to find a ladder").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut content = vec![
        Line::from(vec![
            Span::styled(
                view.start.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" → "),
            Span::styled(
                view.end.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    match &view.outcome {
        LadderOutcome::Found | LadderOutcome::Identity => {
            for (i, word) in view.ladder.iter().enumerate() {
                let previous = i.checked_sub(1).map(|p| view.ladder[p].as_str());
                content.push(rung_line(i, previous, word));
            }
            content.push(Line::from(""));
            content.push(Line::styled(
                format!(
                    "{} steps | {} expanded | {} visited",
                    view.ladder.len().saturating_sub(1),
                    view.search.expanded,
                    view.search.visited
                ),
                Style::default().fg(Color::Cyan),
            ));
        }
        LadderOutcome::LengthMismatch => {
            content.push(Line::styled(
                "No ladder: different lengths",
                Style::default().fg(Color::Red),
            ));
        }
        LadderOutcome::NotAWord(word) => {
            content.push(Line::styled(
                format!("No ladder: '{}' is not a word", word.to_uppercase()),
                Style::default().fg(Color::Red),
            ));
        }
        LadderOutcome::Unreachable => {
            content.push(Line::styled(
                format!(
                    "No ladder: searched {} words without reaching the target",
                    view.search.visited
                ),
                Style::default().fg(Color::Red),
            ));
        }
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Neighbors
            Constraint::Length(3),      // Coverage gauge
            Constraint::Min(4),         // History
            Constraint::Length(7),      // Messages
        ])
        .split(area);

    render_neighbors(f, app, chunks[0]);
    render_coverage(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_neighbors(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = match &app.focus {
        Some(focus) => {
            let title = format!(" Neighbors of {} ", focus.word.to_uppercase());
            let mut lines = Vec::new();
            if !focus.is_word {
                lines.push(Line::styled(
                    "(not in dictionary)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if focus.neighbors.is_empty() {
                lines.push(Line::from("None"));
            }
            lines.extend(
                focus
                    .neighbors
                    .iter()
                    .map(|n| Line::styled(n.to_uppercase(), Style::default().fg(Color::Green))),
            );
            (title, lines)
        }
        None => (" Neighbors ".to_string(), vec![Line::from("Nothing selected")]),
    };

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_coverage(f: &mut Frame, app: &App, area: Rect) {
    let total = app.game.word_count();
    let visited = app.current.as_ref().map_or(0, |view| view.search.visited);
    let percent = if total > 0 {
        ((visited as f64 / total as f64) * 100.0).min(100.0) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Dictionary Explored ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{visited}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(HISTORY_LIMIT)
        .map(|entry| {
            let (suffix, style) = match entry.steps {
                Some(steps) => (format!("{steps} steps"), Style::default().fg(Color::Green)),
                None => ("-".to_string(), Style::default().fg(Color::DarkGray)),
            };
            ListItem::new(format!("{:<12} {suffix}", entry.query.to_uppercase())).style(style)
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter 'start end' for a ladder, or one word for its neighbors ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let words = Paragraph::new(format!("Dictionary: {}", app.game.word_count()))
        .alignment(Alignment::Center);
    f.render_widget(words, chunks[0]);

    let queries = Paragraph::new(format!(
        "Ladders: {}/{}",
        app.stats.ladders_found, app.stats.queries
    ))
    .alignment(Alignment::Center);
    f.render_widget(queries, chunks[1]);

    let longest = Paragraph::new(format!("Longest: {} words", app.stats.longest_ladder))
        .alignment(Alignment::Center);
    f.render_widget(longest, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Enter: Search | ↑: Recall | ^U: Clear")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
