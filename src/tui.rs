//! TUI (Terminal User Interface) module for the Hangman Solver
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringLength` → `MarkingPositions` (once per suggested letter) → `GameOver`
//! - `GameOver` → `EnteringLength` on N, ESC quits from any state

use crate::game_state::{FeedbackInput, GameInterface, Progress, UserAction};
use crate::solver::{MISS, PLACEHOLDER};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_LENGTH_DIGITS: usize = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const CONFIRMED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const MARKED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const UNKNOWN_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const CURSOR_MODIFIER: Modifier = Modifier::BOLD.union(Modifier::UNDERLINED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringLength,
    MarkingPositions { cursor: usize },
    /// Session ended; the outcome message is stored in `message`
    GameOver,
}

fn instructions(state: TuiState) -> &'static str {
    match state {
        TuiState::EnteringLength => "Type the word length | ENTER: Start | ESC: Quit",
        TuiState::MarkingPositions { .. } => {
            "←/→: Move | SPACE or 1-9: Mark slot | ENTER: Submit (none marked = miss) | 0 or M: Miss | N: New game | ESC: Quit"
        }
        TuiState::GameOver => "N or ENTER: New Game | ESC: Quit",
    }
}

fn is_miss_key(c: char) -> bool {
    matches!(c, '0' | 'm' | 'M')
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    length_input: &'a str,
    pattern: &'a str,
    marks: &'a [bool],
    suggestion: Option<char>,
    guessed: &'a [char],
    candidate_count: usize,
    candidate_sample: &'a [String],
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and session display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    length_input: String,
    pattern: String,
    marks: Vec<bool>,
    suggestion: Option<char>,
    guessed: Vec<char>,
    candidate_count: usize,
    candidate_sample: Vec<String>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            state: TuiState::EnteringLength,
            length_input: String::new(),
            pattern: String::new(),
            marks: Vec::new(),
            suggestion: None,
            guessed: Vec::new(),
            candidate_count: 0,
            candidate_sample: Vec::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            length_input: &self.length_input,
            pattern: &self.pattern,
            marks: &self.marks,
            suggestion: self.suggestion,
            guessed: &self.guessed,
            candidate_count: self.candidate_count,
            candidate_sample: &self.candidate_sample,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Pattern board
                Constraint::Min(8),    // Info panel
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN SOLVER")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Word").borders(Borders::ALL);

        let lines = if ctx.state == TuiState::EnteringLength {
            vec![Line::from(vec![
                Span::raw("  Word length: "),
                Span::styled(format!("{}_", ctx.length_input), INFO_STYLE),
            ])]
        } else {
            let cursor = match ctx.state {
                TuiState::MarkingPositions { cursor } => Some(cursor),
                _ => None,
            };
            Self::pattern_lines(ctx, cursor)
        };

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn pattern_lines<'a>(ctx: &RenderContext, cursor: Option<usize>) -> Vec<Line<'a>> {
        let mut slots = vec![Span::raw("  ")];
        let mut numbers = vec![Span::raw("  ")];

        for (i, c) in ctx.pattern.chars().enumerate() {
            let marked = ctx.marks.get(i).copied().unwrap_or(false);
            let (letter, mut style) = if c != PLACEHOLDER {
                (c, CONFIRMED_STYLE)
            } else if marked {
                (ctx.suggestion.unwrap_or(' '), MARKED_STYLE)
            } else {
                (' ', UNKNOWN_STYLE)
            };
            if cursor == Some(i) {
                style = style.add_modifier(CURSOR_MODIFIER);
            }

            slots.push(Span::styled(format!(" {letter} "), style));
            slots.push(Span::raw(" "));
            numbers.push(Span::raw(format!("{:^3} ", i + 1)));
        }

        vec![Line::from(slots), Line::from(numbers)]
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(letter) = ctx.suggestion
            && matches!(ctx.state, TuiState::MarkingPositions { .. })
        {
            lines.push(Line::from(vec![Span::styled(
                format!("Suggested letter: {letter}"),
                SUCCESS_STYLE,
            )]));
            lines.push(Line::from(""));
        }

        if !ctx.guessed.is_empty() {
            let guessed: Vec<String> = ctx.guessed.iter().map(char::to_string).collect();
            lines.push(Line::from(vec![
                Span::styled("Guessed: ", HEADER_STYLE),
                Span::raw(guessed.join(" ")),
            ]));
        }

        if ctx.state != TuiState::EnteringLength {
            lines.push(Line::from(vec![Span::styled(
                format!("Possible candidates ({}):", ctx.candidate_count),
                INFO_STYLE,
            )]));
            for word in ctx.candidate_sample {
                lines.push(Line::from(format!("  {word}")));
            }
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let paragraph = Paragraph::new(instructions(state))
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Waits briefly for the next key press, dropping everything else.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let key = match event::read()? {
            Event::Key(key) => key,
            other => {
                debug_log!("next_key() - Ignoring non-key event: {:?}", other);
                return Ok(None);
            }
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        // Escape sequences from alt-tab can arrive as replacement or control characters
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("next_key() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        if key.modifiers.contains(KeyModifiers::ALT)
            || key.modifiers.contains(KeyModifiers::CONTROL)
        {
            debug_log!("next_key() - Ignoring key with modifier: {:?}", key.modifiers);
            return Ok(None);
        }

        debug_log!("next_key() - state={:?} code={:?}", self.state, key.code);
        Ok(Some(key))
    }

    fn handle_length_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Char(c)
                if c.is_ascii_digit() && self.length_input.len() < MAX_LENGTH_DIGITS =>
            {
                self.length_input.push(c);
            }
            KeyCode::Backspace => {
                self.length_input.pop();
            }
            KeyCode::Enter => match self.length_input.parse::<usize>() {
                Ok(n) if n > 0 => {
                    self.length_input.clear();
                    info_log!("handle_length_input() - length {} submitted", n);
                    return Some(UserAction::WordLength(n));
                }
                _ => self.error_message = "Enter a word length of at least 1".to_string(),
            },
            KeyCode::Esc => return Some(UserAction::Exit),
            KeyCode::Char(c) => {
                self.error_message = format!("Only digits are allowed! ('{c}' is not a digit)");
            }
            _ => {}
        }
        None
    }

    fn handle_game_over_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => {
                self.transition_to_entering_length();
                self.status = "New game - enter the word length".to_string();
                None
            }
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn handle_marking_input(&mut self, key: KeyEvent) -> Option<FeedbackInput> {
        let TuiState::MarkingPositions { cursor } = self.state else {
            return None;
        };
        let word_length = self.marks.len();
        self.error_message.clear();

        match key.code {
            KeyCode::Esc => return Some(FeedbackInput::Exit),
            KeyCode::Char('n' | 'N') => return Some(FeedbackInput::NewGame),
            KeyCode::Char(c) if is_miss_key(c) => {
                return Some(FeedbackInput::Positions(MISS.to_vec()));
            }
            KeyCode::Left if cursor > 0 => {
                self.state = TuiState::MarkingPositions { cursor: cursor - 1 };
            }
            KeyCode::Right if cursor + 1 < word_length => {
                self.state = TuiState::MarkingPositions { cursor: cursor + 1 };
            }
            KeyCode::Char(' ') => self.toggle_mark(cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = c.to_digit(10).map_or(0, |d| d as usize) - 1;
                if index < word_length {
                    self.toggle_mark(index);
                    self.state = TuiState::MarkingPositions { cursor: index };
                } else {
                    self.error_message = format!("There is no slot {c}");
                }
            }
            KeyCode::Backspace => self.marks.iter_mut().for_each(|m| *m = false),
            KeyCode::Enter => return Some(FeedbackInput::Positions(self.marked_positions())),
            KeyCode::Char(c) => {
                self.error_message = format!("'{c}' doesn't do anything here");
            }
            _ => {}
        }
        None
    }

    fn toggle_mark(&mut self, index: usize) {
        let confirmed = self
            .pattern
            .chars()
            .nth(index)
            .is_some_and(|c| c != PLACEHOLDER);
        if confirmed {
            self.error_message = format!("Slot {} is already known", index + 1);
        } else if let Some(mark) = self.marks.get_mut(index) {
            *mark = !*mark;
        }
    }

    fn marked_positions(&self) -> Vec<usize> {
        let positions: Vec<usize> = self
            .marks
            .iter()
            .enumerate()
            .filter(|&(_, marked)| *marked)
            .map(|(i, _)| i + 1)
            .collect();
        if positions.is_empty() {
            MISS.to_vec()
        } else {
            positions
        }
    }

    fn transition_to_entering_length(&mut self) {
        self.state = TuiState::EnteringLength;
        self.length_input.clear();
        self.pattern.clear();
        self.marks.clear();
        self.suggestion = None;
        self.guessed.clear();
        self.candidate_count = 0;
        self.candidate_sample.clear();
    }

    fn transition_to_game_over(&mut self) {
        self.state = TuiState::GameOver;
        self.suggestion = None;
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self, word_count: usize) {
        self.message = format!("Loaded {word_count} words.");
        self.status = "Enter the length of the word to solve".to_string();
        self.draw_or_log();
    }

    fn read_word_length(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_word_length() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            let key = match self.next_key() {
                Ok(Some(key)) => key,
                Ok(None) => continue,
                Err(e) => {
                    info_log!("read_word_length() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            };

            let action = match self.state {
                TuiState::GameOver => self.handle_game_over_input(key),
                _ => {
                    if self.state != TuiState::EnteringLength {
                        self.transition_to_entering_length();
                    }
                    self.handle_length_input(key)
                }
            };
            if action.is_some() {
                return action;
            }
        }
    }

    fn display_progress(&mut self, progress: &Progress) {
        self.pattern.clone_from(&progress.status.pattern);
        self.marks = vec![false; self.pattern.chars().count()];
        self.guessed.clone_from(&progress.guessed);
        self.candidate_count = progress.status.candidate_count;
        self.candidate_sample.clone_from(&progress.status.candidate_sample);
        self.message.clear();
        self.draw_or_log();
    }

    fn display_suggestion(&mut self, letter: char) {
        self.suggestion = Some(letter);
        self.state = TuiState::MarkingPositions { cursor: 0 };
        self.status = format!("Guess {letter} - mark every slot where it appears");
        self.draw_or_log();
    }

    fn read_feedback(&mut self, _letter: char, _word_length: usize) -> Option<FeedbackInput> {
        loop {
            if self.draw().is_err() {
                debug_log!("read_feedback() - Draw failed");
                return Some(FeedbackInput::Exit);
            }

            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(input) = self.handle_marking_input(key) {
                        info_log!("read_feedback() - {:?}", input);
                        return Some(input);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    debug_log!("read_feedback() - Input error: {}", e);
                    return Some(FeedbackInput::Exit);
                }
            }
        }
    }

    fn display_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.draw_or_log();
    }

    fn display_no_words(&mut self, word_length: usize) {
        self.transition_to_entering_length();
        self.error_message = format!("No dictionary words have {word_length} letters");
        self.draw_or_log();
    }

    fn display_solution_found(&mut self, solution: &str) {
        self.transition_to_game_over();
        self.message = format!("✓ Word solved: {solution}");
        self.status = format!("Game Over - Solution: {solution}");
        self.draw_or_log();
    }

    fn display_no_match(&mut self) {
        self.transition_to_game_over();
        self.candidate_count = 0;
        self.candidate_sample.clear();
        self.message = "No words match that feedback. Check your inputs.".to_string();
        self.status = "Error: No valid candidates found".to_string();
        self.draw_or_log();
    }

    fn display_letters_exhausted(&mut self, progress: &Progress) {
        self.display_progress(progress);
        self.transition_to_game_over();
        self.message = "Every letter in the remaining candidates has been tried.".to_string();
        self.status = "Game Over - Out of letters".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self) {
        self.transition_to_entering_length();
        self.message = "New game started.".to_string();
        self.status = "New game - enter the word length".to_string();
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
