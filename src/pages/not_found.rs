//! Fallback for unknown paths.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::storage::Store;
use crate::widgets::ClickableList;

use super::actions::RETURN_HOME;
use super::{Outcome, Page, Route};

pub struct NotFoundPage {
    path: String,
}

impl NotFoundPage {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl Page for NotFoundPage {
    fn handle_input(&mut self, event: &InputEvent, _store: &mut Store) -> Outcome {
        match event {
            InputEvent::Key('h') | InputEvent::Enter | InputEvent::Back => {
                Outcome::Navigate(Route::Landing)
            }
            InputEvent::Click(RETURN_HOME) => Outcome::Navigate(Route::Landing),
            _ => Outcome::Ignored,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        let mut cl = ClickableList::new();
        cl.push(Line::from(Span::styled(
            " 404",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
        cl.push(Line::from(vec![
            Span::styled(" Oops! Page not found: ", Style::default().fg(Color::Gray)),
            Span::styled(self.path.clone(), Style::default().fg(Color::White)),
        ]));
        cl.push(Line::from(""));
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    " [H] ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("Return to Home", Style::default().fg(Color::White)),
            ]),
            RETURN_HOME,
        );

        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0, area.width.saturating_sub(2));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        f.render_widget(
            Paragraph::new(cl.into_lines())
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}
