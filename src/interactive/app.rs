//! TUI application state and logic

use crate::Doublets;
use crate::commands::{LadderConfig, LadderOutcome, find_ladder, list_neighbors};
use crate::ladder::SearchStats;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Most recent queries kept for the history panel
pub const HISTORY_LIMIT: usize = 8;

/// Application state
pub struct App<'a> {
    pub game: &'a Doublets,
    pub input_buffer: String,
    pub current: Option<LadderView>,
    pub focus: Option<FocusView>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// The ladder currently on screen
#[derive(Debug, Clone)]
pub struct LadderView {
    pub start: String,
    pub end: String,
    pub ladder: Vec<String>,
    pub outcome: LadderOutcome,
    pub search: SearchStats,
}

/// The word whose neighbors are listed
#[derive(Debug, Clone)]
pub struct FocusView {
    pub word: String,
    pub is_word: bool,
    pub neighbors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub query: String,
    /// Steps in the resulting ladder; `None` if no ladder was found
    pub steps: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub queries: usize,
    pub ladders_found: usize,
    pub longest_ladder: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: &'a Doublets) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            current: None,
            focus: None,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: format!("Welcome! {} words loaded.", game.word_count()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type 'start end' for a ladder, or one word for its neighbors"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Run the query in the input buffer
    pub fn submit(&mut self) {
        let input = self.input_buffer.trim().to_string();
        let words: Vec<&str> = input.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            [word] => {
                self.show_neighbors(word);
                self.input_buffer.clear();
            }
            [start, end] => {
                self.run_ladder(start, end);
                self.input_buffer.clear();
            }
            _ => self.add_message(
                "Enter one word (neighbors) or two words (ladder)",
                MessageStyle::Error,
            ),
        }
    }

    fn show_neighbors(&mut self, word: &str) {
        let result = list_neighbors(word, self.game);
        self.add_message(
            &format!(
                "{} has {} neighbor{}",
                result.word.to_uppercase(),
                result.neighbors.len(),
                if result.neighbors.len() == 1 { "" } else { "s" }
            ),
            MessageStyle::Info,
        );
        self.record(HistoryEntry {
            query: result.word.clone(),
            steps: None,
        });
        self.focus = Some(FocusView {
            word: result.word,
            is_word: result.is_word,
            neighbors: result.neighbors,
        });
    }

    fn run_ladder(&mut self, start: &str, end: &str) {
        let result = find_ladder(LadderConfig::new(start.to_string(), end.to_string()), self.game);
        self.stats.queries += 1;

        let steps = match &result.outcome {
            LadderOutcome::Found | LadderOutcome::Identity => {
                self.stats.ladders_found += 1;
                self.stats.longest_ladder = self.stats.longest_ladder.max(result.ladder.len());
                self.add_message(
                    &format!("Found a ladder in {} steps", result.steps()),
                    MessageStyle::Success,
                );
                Some(result.steps())
            }
            LadderOutcome::LengthMismatch => {
                self.add_message("Words must be the same length", MessageStyle::Error);
                None
            }
            LadderOutcome::NotAWord(word) => {
                self.add_message(
                    &format!("'{}' is not in the dictionary", word.to_uppercase()),
                    MessageStyle::Error,
                );
                None
            }
            LadderOutcome::Unreachable => {
                self.add_message("No ladder connects those words", MessageStyle::Error);
                None
            }
        };

        self.record(HistoryEntry {
            query: format!("{} {}", result.start, result.end),
            steps,
        });

        // Neighbors of the last rung, or of the start when nothing was found
        let focus_word = result.ladder.last().unwrap_or(&result.start).clone();
        let neighbors = list_neighbors(&focus_word, self.game);
        self.focus = Some(FocusView {
            word: neighbors.word,
            is_word: neighbors.is_word,
            neighbors: neighbors.neighbors,
        });

        self.current = Some(LadderView {
            start: result.start,
            end: result.end,
            ladder: result.ladder,
            outcome: result.outcome,
            search: result.stats,
        });
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
    }

    /// Put the most recent query back into the input buffer
    pub fn recall_last(&mut self) {
        if let Some(entry) = self.history.last() {
            self.input_buffer = entry.query.clone();
        } else {
            self.add_message("No previous query", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.input_buffer.clear();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Up => {
                    app.recall_last();
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
