//! Career list: the classifier's options for the stored profile.

mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::career::classifier::{classify, Recommendation};
use crate::input::{ClickState, InputEvent};
use crate::storage::{Selection, Store};

use super::actions::*;
use super::{Outcome, Page, Route};

pub struct CareersPage {
    pub recommendation: Recommendation,
    pub cursor: usize,
}

impl CareersPage {
    pub fn new(store: &Store) -> Self {
        Self {
            recommendation: classify(&store.profile_or_default()),
            cursor: 0,
        }
    }

    fn len(&self) -> usize {
        self.recommendation.careers.len()
    }

    /// Persist the career and its routes, then open the map.
    fn choose(&mut self, index: usize, store: &mut Store) -> Outcome {
        let Some(career) = self.recommendation.careers.get(index) else {
            return Outcome::Ignored;
        };
        self.cursor = index;
        store.save_selection(&Selection {
            career_id: career.id.clone(),
            routes: career.routes.clone(),
        });
        Outcome::Navigate(Route::CareerMap)
    }
}

impl Page for CareersPage {
    fn handle_input(&mut self, event: &InputEvent, store: &mut Store) -> Outcome {
        match event {
            InputEvent::Key('e') | InputEvent::Back => Outcome::Navigate(Route::Student),
            InputEvent::Click(EDIT_PROFILE) => Outcome::Navigate(Route::Student),
            InputEvent::Key(c @ '1'..='9') => self.choose((*c as u8 - b'1') as usize, store),
            InputEvent::Click(id) if (CHOOSE_CAREER_BASE..EDIT_PROFILE).contains(id) => {
                self.choose((id - CHOOSE_CAREER_BASE) as usize, store)
            }
            InputEvent::Enter => self.choose(self.cursor, store),
            InputEvent::FocusNext if self.len() > 0 => {
                self.cursor = (self.cursor + 1) % self.len();
                Outcome::Consumed
            }
            InputEvent::FocusPrev if self.len() > 0 => {
                self.cursor = (self.cursor + self.len() - 1) % self.len();
                Outcome::Consumed
            }
            _ => Outcome::Ignored,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}
