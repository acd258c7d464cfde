//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store, handles
//! user input, and renders the two views (welcome screen and task list).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use crate::store::TaskStore;
use crate::tui::{
    colors::{INDIGO, LEAF_GREEN, SLATE},
    enums::{AppState, InputMode},
    input::InputField,
    utils::centered_rect,
};

/// Main application state for the terminal user interface.
///
/// Owns the task store for the session and coordinates between the welcome
/// screen and the task view. Every mutation goes through `mutate_store`,
/// which recomputes the visible ordering before the next draw.
pub struct App {
    state: AppState,
    input_mode: InputMode,
    store: TaskStore,
    input: InputField,
    list_state: ListState,
    visible: Vec<u64>,
    status_message: String,
}

impl App {
    /// Create a new App with an empty task store.
    pub fn new(skip_welcome: bool) -> Self {
        App {
            state: if skip_welcome {
                AppState::Tasks
            } else {
                AppState::Welcome
            },
            input_mode: InputMode::Text,
            store: TaskStore::new(),
            input: InputField::new(),
            list_state: ListState::default(),
            visible: Vec::new(),
            status_message: String::new(),
        }
    }

    /// Apply a mutation to the store, then recompute the visible ordering
    /// and clamp the selection to the new list length.
    fn mutate_store(&mut self, f: impl FnOnce(&mut TaskStore)) {
        f(&mut self.store);
        self.update_visible();
    }

    /// Recompute the display-order projection.
    fn update_visible(&mut self) {
        self.visible = self.store.display_order().map(|t| t.id).collect();
        match self.list_state.selected() {
            Some(_) if self.visible.is_empty() => {
                self.list_state.select(None);
            }
            Some(i) if i >= self.visible.len() => {
                self.list_state.select(Some(self.visible.len() - 1));
            }
            None if !self.visible.is_empty() && self.input_mode == InputMode::Browse => {
                self.list_state.select(Some(0));
            }
            _ => {}
        }
    }

    /// Id of the currently highlighted task, if any.
    fn selected_id(&self) -> Option<u64> {
        self.list_state
            .selected()
            .and_then(|i| self.visible.get(i).copied())
    }

    fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.visible.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(prev));
    }

    /// Submit the input buffer to the store. The buffer clears only when
    /// the add succeeded; blank input leaves it untouched.
    fn submit_input(&mut self) {
        let text = self.input.value.clone();
        let mut added = None;
        self.mutate_store(|store| {
            added = store.add(&text);
        });
        if let Some(id) = added {
            self.input.clear();
            if let Some(task) = self.store.get(id) {
                self.status_message = format!("Added '{}'", task.text);
            }
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.mutate_store(|store| store.toggle_complete(id));
            if let Some(task) = self.store.get(id) {
                self.status_message = if task.completed {
                    format!("Done: '{}'", task.text)
                } else {
                    format!("Reopened: '{}'", task.text)
                };
            }
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let text = self.store.get(id).map(|t| t.text.clone());
            self.mutate_store(|store| store.delete(id));
            if let Some(text) = text {
                self.status_message = format!("Deleted '{}'", text);
            }
        }
    }

    fn handle_welcome_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Enter | KeyCode::Char('s') => {
                self.state = AppState::Tasks;
                self.input_mode = InputMode::Text;
            }
            KeyCode::Char('q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    fn handle_browse_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                self.state = AppState::Welcome;
            }
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
                self.input_mode = InputMode::Text;
                self.list_state.select(None);
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
        false
    }

    fn handle_text_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Tab => {
                self.input_mode = InputMode::Browse;
                if !self.visible.is_empty() && self.list_state.selected().is_none() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char(c) => self.input.handle_char(c),
            KeyCode::Backspace => self.input.handle_backspace(),
            KeyCode::Delete => self.input.handle_delete(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Down => {
                // Jump from the field into the list.
                if !self.visible.is_empty() {
                    self.input_mode = InputMode::Browse;
                    self.list_state.select(Some(0));
                }
            }
            _ => {}
        }
        false
    }

    /// Poll for a key event and dispatch it to the current view.
    /// Returns true when the user asked to quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.status_message.clear();

                let should_quit = match self.state {
                    AppState::Welcome => self.handle_welcome_input(key.code),
                    AppState::Tasks => match self.input_mode {
                        InputMode::Browse => self.handle_browse_input(key.code),
                        InputMode::Text => self.handle_text_input(key.code, key.modifiers),
                    },
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render the static welcome screen.
    fn render_welcome(&mut self, f: &mut Frame, area: Rect) {
        let backdrop = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(INDIGO));
        f.render_widget(backdrop, area);

        let panel = centered_rect(70, 60, area);
        f.render_widget(Clear, panel);

        let lines = vec![
            Line::from(Span::styled(
                "TODO ADVENTURE",
                Style::default().fg(INDIGO).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("A fun and colourful task manager for organising"),
            Line::from("your activities, one session at a time."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Easy to use", Style::default().fg(LEAF_GREEN)),
                Span::raw("  -  type a task, press Enter, tick it off"),
            ]),
            Line::from(vec![
                Span::styled("Track progress", Style::default().fg(LEAF_GREEN)),
                Span::raw("  -  counters show how much is left"),
            ]),
            Line::from(vec![
                Span::styled("Celebrate", Style::default().fg(LEAF_GREEN)),
                Span::raw("  -  finish everything and take a bow"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Nothing is saved to disk; the list lives for this run only.",
                Style::default().fg(SLATE).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to start your adventure, q to quit",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let content = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(INDIGO))
                    .title(" Welcome "),
            )
            .alignment(Alignment::Center);
        f.render_widget(content, panel);
    }

    /// Render the input field, the ordered task list and the summary pane.
    fn render_tasks(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input field
                Constraint::Min(0),    // Task list
                Constraint::Length(3), // Stats / celebration
            ])
            .split(area);

        self.render_input(f, chunks[0]);
        self.render_list(f, chunks[1]);
        self.render_summary(f, chunks[2]);
    }

    fn render_input(&mut self, f: &mut Frame, area: Rect) {
        let active = self.input_mode == InputMode::Text;
        let border = if active {
            Style::default().fg(INDIGO)
        } else {
            Style::default().fg(SLATE)
        };
        let input = Paragraph::new(self.input.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" What do you want to do today? "),
        );
        f.render_widget(input, area);

        if active {
            f.set_cursor_position(Position::new(
                area.x + 1 + self.input.cursor as u16,
                area.y + 1,
            ));
        }
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let stats = self.store.stats();

        let items: Vec<ListItem> = if self.visible.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "Let's add some fun tasks!",
                Style::default().fg(SLATE).add_modifier(Modifier::ITALIC),
            )))]
        } else {
            self.visible
                .iter()
                .filter_map(|&id| self.store.get(id))
                .map(|task| {
                    let (marker, text_style) = if task.completed {
                        (
                            Span::styled("[x] ", Style::default().fg(LEAF_GREEN)),
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::CROSSED_OUT),
                        )
                    } else {
                        (
                            Span::styled("[ ] ", Style::default().fg(INDIGO)),
                            Style::default().fg(Color::White),
                        )
                    };
                    ListItem::new(Line::from(vec![
                        marker,
                        Span::styled(task.text.clone(), text_style),
                        Span::styled(
                            format!("  (added {})", task.added_at_label()),
                            Style::default().fg(SLATE),
                        ),
                    ]))
                })
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(INDIGO))
                    .title(format!(" Tasks ({}/{}) ", stats.completed, stats.total)),
            )
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_summary(&mut self, f: &mut Frame, area: Rect) {
        let stats = self.store.stats();

        let (text, style) = if stats.is_all_completed {
            (
                "Amazing job! All tasks complete!".to_string(),
                Style::default().fg(LEAF_GREEN).add_modifier(Modifier::BOLD),
            )
        } else if stats.total == 0 {
            (
                "Your list is empty - add something above.".to_string(),
                Style::default().fg(SLATE),
            )
        } else {
            (
                format!(
                    "{} total | {} done | {} to go",
                    stats.total, stats.completed, stats.remaining
                ),
                Style::default().fg(Color::White),
            )
        };

        let border = if stats.is_all_completed {
            Style::default().fg(LEAF_GREEN)
        } else {
            Style::default().fg(INDIGO)
        };

        let summary = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(summary, area);
    }

    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Welcome => "Enter: start | q: quit".to_string(),
                AppState::Tasks => match self.input_mode {
                    InputMode::Text => {
                        "Enter: add task | Esc/Tab: browse list | Ctrl+C: quit".to_string()
                    }
                    InputMode::Browse => {
                        "j/k: move | Enter/Space: toggle | d: delete | a: new task | Esc: welcome | q: quit"
                            .to_string()
                    }
                },
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(INDIGO).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the current view.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.state {
            AppState::Welcome => self.render_welcome(f, chunks[0]),
            AppState::Tasks => self.render_tasks(f, chunks[0]),
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
