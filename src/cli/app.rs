use super::autocomplete::Autocompleter;
use super::ui;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::io;
use tui_textarea::TextArea;
use txkv::{CommandOutcome, KvDatabase};

pub struct App<'a> {
    pub textarea: TextArea<'a>,
    pub messages: Vec<Line<'static>>,
    pub db: KvDatabase,
    pub exit: bool,

    // Autocomplete state
    pub autocompleter: Autocompleter,
    pub suggestions: Vec<String>,
    pub suggestion_index: usize,
    pub popup_open: bool,
}

impl App<'_> {
    pub fn new() -> Self {
        let textarea = Self::new_textarea();

        Self {
            textarea,
            messages: vec![
                Line::from(vec![Span::styled(
                    "TxKV interactive shell",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from("Commands: SET, GET, DELETE, COUNT, BEGIN, COMMIT, ROLLBACK."),
                Line::from("Press Enter to execute, Tab for completion, Esc to quit."),
                Line::from("--------------------------------------------------"),
            ],
            db: KvDatabase::new(),
            exit: false,
            autocompleter: Autocompleter::new(),
            suggestions: Vec::new(),
            suggestion_index: 0,
            popup_open: false,
        }
    }

    fn new_textarea() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("SET $key $value | GET $key | BEGIN | ...");
        textarea.set_block(
            ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .title(" Command "),
        );
        textarea
    }

    fn reset_textarea(&mut self) {
        self.textarea = Self::new_textarea();
    }

    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Navigation inside the suggestion popup
                    if self.popup_open {
                        match key.code {
                            KeyCode::Down => {
                                if !self.suggestions.is_empty() {
                                    self.suggestion_index =
                                        (self.suggestion_index + 1) % self.suggestions.len();
                                }
                                continue;
                            }
                            KeyCode::Up => {
                                if !self.suggestions.is_empty() {
                                    self.suggestion_index =
                                        (self.suggestion_index + self.suggestions.len() - 1)
                                            % self.suggestions.len();
                                }
                                continue;
                            }
                            KeyCode::Enter | KeyCode::Tab => {
                                self.accept_suggestion();
                                continue;
                            }
                            KeyCode::Esc => {
                                self.popup_open = false;
                                continue;
                            }
                            _ => {
                                // Close the popup but let the key reach the textarea
                                self.popup_open = false;
                            }
                        }
                    }

                    match key.code {
                        KeyCode::Esc => {
                            self.exit = true;
                            return Ok(());
                        }
                        KeyCode::Enter => {
                            self.execute_command();
                        }
                        KeyCode::Tab => {
                            self.update_suggestions();
                            if !self.suggestions.is_empty() {
                                self.popup_open = true;
                                self.suggestion_index = 0;
                            }
                        }
                        _ => {
                            self.textarea.input(key);
                            // Auto-trigger while typing letters
                            if let KeyCode::Char(c) = key.code {
                                if c.is_alphabetic() {
                                    self.update_suggestions();
                                    self.popup_open = !self.suggestions.is_empty();
                                } else {
                                    self.popup_open = false;
                                }
                            }
                        }
                    }
                }
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    fn update_suggestions(&mut self) {
        let (word, _) = self.current_word();
        if word.is_empty() {
            self.suggestions.clear();
            self.popup_open = false;
            return;
        }

        self.suggestions = self.autocompleter.suggestions(&word, &self.db);
        self.suggestion_index = 0;
    }

    fn accept_suggestion(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let suggestion = self.suggestions[self.suggestion_index].clone();
        let (word, _) = self.current_word();

        for _ in 0..word.chars().count() {
            self.textarea.delete_char();
        }
        self.textarea.insert_str(&suggestion);
        self.popup_open = false;
    }

    /// The word the cursor sits after, and the column it starts at.
    fn current_word(&self) -> (String, usize) {
        let (row, col) = self.textarea.cursor();
        if row >= self.textarea.lines().len() || col == 0 {
            return (String::new(), 0);
        }

        let line = &self.textarea.lines()[row];
        let prefix: Vec<char> = line.chars().take(col).collect();

        match prefix.iter().rposition(|&c| c.is_whitespace()) {
            Some(sep) => {
                let word: String = prefix[sep + 1..].iter().collect();
                (word, sep + 1)
            }
            None => (prefix.iter().collect(), 0),
        }
    }

    fn execute_command(&mut self) {
        let input = self.textarea.lines().join(" ");

        // Blank input is echoed like any other line but produces no outcome.
        self.messages.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(input.clone()),
        ]));
        self.reset_textarea();
        self.popup_open = false;

        match self.db.execute(&input) {
            None => {}
            Some(CommandOutcome::Success { payload }) => {
                if payload.is_empty() {
                    self.messages.push(Line::from(Span::styled(
                        "OK",
                        Style::default().fg(Color::Green),
                    )));
                } else {
                    self.messages.push(Line::from(Span::styled(
                        payload,
                        Style::default().fg(Color::Green),
                    )));
                }
            }
            Some(CommandOutcome::Failure { message }) => {
                self.messages.push(Line::from(Span::styled(
                    message,
                    Style::default().fg(Color::Red),
                )));
            }
        }
    }
}

impl Default for App<'_> {
    fn default() -> Self {
        Self::new()
    }
}
