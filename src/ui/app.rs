//! Main TUI application state and logic

use super::panes::{
    render_status_bar, render_values_pane, StatusRenderData, ValuesRenderData, ValuesScrollState,
};
use super::tree::ValueTree;
use crate::accessor::ValueAccessor;
use crate::render::decode::is_placeholder;
use crate::render::Engine;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App<'a, A: ValueAccessor> {
    /// Renders rows on demand
    pub engine: Engine<'a, A>,

    /// Flattened tree of visible rows
    pub tree: ValueTree<A::Handle>,

    /// Index of the highlighted row
    pub selected: usize,

    pub values_scroll: ValuesScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl<'a, A: ValueAccessor> App<'a, A> {
    /// Create a new app showing `roots`, all collapsed
    pub fn new(engine: Engine<'a, A>, roots: &[(String, A::Handle)]) -> Self {
        let tree = ValueTree::new(&engine, roots);
        App {
            engine,
            tree,
            selected: 0,
            values_scroll: ValuesScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Values pane, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        render_values_pane(
            frame,
            main_chunks[0],
            ValuesRenderData {
                rows: self.tree.rows(),
                selected: self.selected,
            },
            &mut self.values_scroll,
        );

        let on_placeholder = self
            .tree
            .rows()
            .get(self.selected)
            .is_some_and(|row| is_placeholder(row.rendered.text()));
        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                selected: self.selected,
                total_rows: self.tree.len(),
                on_placeholder,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < self.tree.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Home => {
                self.selected = 0;
            }
            KeyCode::End => {
                self.selected = self.tree.len().saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Enter => self.expand(),
            KeyCode::Left => self.collapse(),
            _ => {}
        }
    }

    /// Expand the selected row, or step into it if it is already open
    fn expand(&mut self) {
        let Some(row) = self.tree.rows().get(self.selected) else {
            return;
        };
        let label = row.label.clone();

        if row.expanded {
            self.selected += 1;
        } else if !row.is_expandable() {
            self.status_message = format!("{} has no children", label);
        } else if self.tree.expand(&self.engine, self.selected) {
            self.status_message = format!("Expanded {}", label);
        }
    }

    /// Collapse the selected row, or jump to its parent if it is closed
    fn collapse(&mut self) {
        let Some(row) = self.tree.rows().get(self.selected) else {
            return;
        };

        if row.expanded {
            let label = row.label.clone();
            self.tree.collapse(self.selected);
            self.status_message = format!("Collapsed {}", label);
        } else if let Some(parent) = self.tree.parent(self.selected) {
            self.selected = parent;
        }
    }
}
