//! Analyzing screen: a short pause before the career list.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::storage::Store;
use crate::time::ticks_for_ms;

use super::{Outcome, Page, Route};

pub const ANALYZE_DELAY_TICKS: u32 = ticks_for_ms(2500);

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct AnalyzingPage {
    elapsed: u32,
    /// Navigation fires once; later ticks are ignored.
    done: bool,
}

impl AnalyzingPage {
    pub fn new() -> Self {
        Self {
            elapsed: 0,
            done: false,
        }
    }

    fn progress(&self) -> f64 {
        (self.elapsed as f64 / ANALYZE_DELAY_TICKS as f64).min(1.0)
    }
}

impl Page for AnalyzingPage {
    fn handle_input(&mut self, _event: &InputEvent, _store: &mut Store) -> Outcome {
        Outcome::Ignored
    }

    fn tick(&mut self, delta_ticks: u32) -> Outcome {
        if self.done {
            return Outcome::Ignored;
        }
        self.elapsed = self.elapsed.saturating_add(delta_ticks);
        if self.elapsed >= ANALYZE_DELAY_TICKS {
            self.done = true;
            Outcome::Navigate(Route::Careers)
        } else {
            Outcome::Ignored
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, _click_state: &Rc<RefCell<ClickState>>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Length(2), // Message
                Constraint::Length(1), // Gauge
                Constraint::Min(0),
            ])
            .split(inner);

        let spinner = SPINNER_FRAMES[self.elapsed as usize % SPINNER_FRAMES.len()];
        let message = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(Color::Yellow)),
                Span::styled(
                    "Analyzing your profile",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "Matching interests and goals to career routes...",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(message, chunks[1]);

        let gauge_area = Rect::new(
            chunks[2].x + chunks[2].width / 6,
            chunks[2].y,
            chunks[2].width - chunks[2].width / 3,
            chunks[2].height,
        );
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(self.progress());
        f.render_widget(gauge, gauge_area);
    }
}
