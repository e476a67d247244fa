//! Landing page: hero text and a route preview for the current career.

mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::career::classifier::{classify, resolve_career, CareerOption};
use crate::career::preview::RoutePreview;
use crate::input::{ClickState, InputEvent};
use crate::storage::Store;

use super::actions::*;
use super::{Outcome, Page, Route};

pub struct LandingPage {
    pub career: Option<CareerOption>,
    pub preview: Option<RoutePreview>,
    /// A career was already chosen, so the map can be opened directly.
    pub has_selection: bool,
}

impl LandingPage {
    pub fn new(store: &Store) -> Self {
        let recommendation = classify(&store.profile_or_default());
        let selection = store.load_selection();
        let career = resolve_career(
            &recommendation.careers,
            selection.as_ref().map(|s| s.career_id.as_str()),
        )
        .cloned();
        let preview = career.as_ref().map(RoutePreview::for_career);
        Self {
            career,
            preview,
            has_selection: selection.is_some(),
        }
    }

    fn select_route(&mut self, index: usize) -> Outcome {
        let Some(preview) = self.preview.as_mut() else {
            return Outcome::Ignored;
        };
        if preview.select_index(index) {
            Outcome::Consumed
        } else {
            Outcome::Ignored
        }
    }

    /// Forget the stored profile and selection.
    fn clear_data(&mut self, store: &mut Store) -> Outcome {
        if !self.has_selection {
            return Outcome::Ignored;
        }
        store.clear();
        *self = Self::new(store);
        Outcome::Consumed
    }

    fn open_map(&self) -> Outcome {
        if self.has_selection {
            Outcome::Navigate(Route::CareerMap)
        } else {
            Outcome::Ignored
        }
    }
}

impl Page for LandingPage {
    fn handle_input(&mut self, event: &InputEvent, store: &mut Store) -> Outcome {
        match event {
            InputEvent::Key('s') | InputEvent::Enter => Outcome::Navigate(Route::Student),
            InputEvent::Click(START_PROFILE) => Outcome::Navigate(Route::Student),
            InputEvent::Key('m') | InputEvent::Click(OPEN_CAREER_MAP) => self.open_map(),
            InputEvent::Key('x') | InputEvent::Click(CLEAR_DATA) => self.clear_data(store),
            InputEvent::Key(c @ '1'..='4') => self.select_route((*c as u8 - b'1') as usize),
            InputEvent::Click(id) if (PREVIEW_ROUTE_BASE..PREVIEW_ROUTE_BASE + 4).contains(id) => {
                self.select_route((id - PREVIEW_ROUTE_BASE) as usize)
            }
            _ => Outcome::Ignored,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::profile::StudentProfile;
    use crate::career::stages::RouteId;
    use crate::storage::Selection;

    #[test]
    fn fresh_visitor_sees_generalist_routes() {
        let store = Store::in_memory();
        let page = LandingPage::new(&store);
        assert_eq!(page.career.as_ref().unwrap().id, "generalist");
        let preview = page.preview.as_ref().unwrap();
        assert_eq!(preview.active().unwrap().id, RouteId::Route2);
        assert!(!page.has_selection);
    }

    #[test]
    fn stored_selection_picks_career() {
        let mut store = Store::in_memory();
        store.save_profile(&StudentProfile {
            interest: "Technology".into(),
            ..Default::default()
        });
        store.save_selection(&Selection {
            career_id: "mentor".into(),
            routes: vec![RouteId::Route1, RouteId::Route4],
        });
        let page = LandingPage::new(&store);
        assert_eq!(page.career.as_ref().unwrap().title, "Tech Mentor / Educator");
        assert!(page.has_selection);
    }

    #[test]
    fn start_goes_to_student_form() {
        let mut store = Store::in_memory();
        let mut page = LandingPage::new(&store);
        assert_eq!(
            page.handle_input(&InputEvent::Key('s'), &mut store),
            Outcome::Navigate(Route::Student)
        );
        assert_eq!(
            page.handle_input(&InputEvent::Click(START_PROFILE), &mut store),
            Outcome::Navigate(Route::Student)
        );
    }

    #[test]
    fn map_shortcut_needs_selection() {
        let mut store = Store::in_memory();
        let mut page = LandingPage::new(&store);
        assert_eq!(page.handle_input(&InputEvent::Key('m'), &mut store), Outcome::Ignored);

        store.save_selection(&Selection {
            career_id: "generalist".into(),
            routes: vec![RouteId::Route4, RouteId::Route2],
        });
        let mut page = LandingPage::new(&store);
        assert_eq!(
            page.handle_input(&InputEvent::Key('m'), &mut store),
            Outcome::Navigate(Route::CareerMap)
        );
    }

    #[test]
    fn clear_forgets_profile_and_selection() {
        let mut store = Store::in_memory();
        store.save_profile(&StudentProfile {
            hobbies: "sports".into(),
            ..Default::default()
        });
        store.save_selection(&Selection {
            career_id: "coach".into(),
            routes: vec![RouteId::Route4],
        });
        let mut page = LandingPage::new(&store);
        assert_eq!(page.career.as_ref().unwrap().id, "coach");

        assert_eq!(page.handle_input(&InputEvent::Key('x'), &mut store), Outcome::Consumed);
        assert!(store.load_profile().is_none());
        assert!(!page.has_selection);
        assert_eq!(page.career.as_ref().unwrap().id, "generalist");
        assert_eq!(page.handle_input(&InputEvent::Click(CLEAR_DATA), &mut store), Outcome::Ignored);
    }

    #[test]
    fn route_keys_switch_preview() {
        let mut store = Store::in_memory();
        let mut page = LandingPage::new(&store);
        // generalist: route2, route4 visible
        assert_eq!(page.handle_input(&InputEvent::Key('2'), &mut store), Outcome::Consumed);
        assert_eq!(page.preview.as_ref().unwrap().active().unwrap().id, RouteId::Route4);
        assert_eq!(page.handle_input(&InputEvent::Key('3'), &mut store), Outcome::Ignored);
        assert_eq!(
            page.handle_input(&InputEvent::Click(PREVIEW_ROUTE_BASE), &mut store),
            Outcome::Consumed
        );
        assert_eq!(page.preview.as_ref().unwrap().active().unwrap().id, RouteId::Route2);
    }

    #[test]
    fn route_keys_without_preview_are_ignored() {
        let mut store = Store::in_memory();
        let mut page = LandingPage {
            career: None,
            preview: None,
            has_selection: false,
        };
        assert_eq!(page.handle_input(&InputEvent::Key('1'), &mut store), Outcome::Ignored);
        assert_eq!(
            page.handle_input(&InputEvent::Click(PREVIEW_ROUTE_BASE + 1), &mut store),
            Outcome::Ignored
        );
    }
}
