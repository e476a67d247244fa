//! Career map: the route state machine for the chosen career.

mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::career::classifier::{classify, resolve_career};
use crate::career::route_map::RouteMap;
use crate::career::stages::{RouteId, MAP_GRAPH, PREVIEW_GRAPH};
use crate::input::{ClickState, InputEvent};
use crate::storage::Store;

use super::actions::*;
use super::{Outcome, Page, Route};

pub struct CareerMapPage {
    pub map: RouteMap,
    pub student_name: String,
    pub career_title: Option<String>,
    /// Names of the preview routes stored with the selection.
    pub route_names: Vec<&'static str>,
}

impl CareerMapPage {
    pub fn new(store: &Store) -> Self {
        let profile = store.profile_or_default();
        let selection = store.load_selection();
        let recommendation = classify(&profile);
        let career_title = resolve_career(
            &recommendation.careers,
            selection.as_ref().map(|s| s.career_id.as_str()),
        )
        .map(|c| c.title.clone());
        let route_names = selection
            .map(|s| {
                s.routes
                    .iter()
                    .filter_map(|id| PREVIEW_GRAPH.route_by_id(*id))
                    .map(|r| r.name)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            map: RouteMap::for_age(profile.effective_age()),
            student_name: profile.name,
            career_title,
            route_names,
        }
    }

    fn select_stage(&mut self, index: usize) -> Outcome {
        match MAP_GRAPH.stages.get(index) {
            Some(stage) => {
                self.map.select_stage(stage.id);
                Outcome::Consumed
            }
            None => Outcome::Ignored,
        }
    }

    fn show_route(&mut self, id: RouteId) -> Outcome {
        if self.map.route_id() != id {
            self.map.toggle_route();
        }
        Outcome::Consumed
    }
}

impl Page for CareerMapPage {
    fn handle_input(&mut self, event: &InputEvent, _store: &mut Store) -> Outcome {
        match event {
            InputEvent::Key('c') | InputEvent::Enter | InputEvent::Click(COMPLETE_STAGE) => {
                if self.map.advance() {
                    Outcome::Consumed
                } else {
                    Outcome::Ignored
                }
            }
            InputEvent::Key('r') | InputEvent::Click(REROUTE) => {
                self.map.toggle_route();
                Outcome::Consumed
            }
            InputEvent::Key('e') | InputEvent::Click(CHANGE_INTEREST) => {
                Outcome::Navigate(Route::Student)
            }
            InputEvent::Back | InputEvent::Click(BACK_TO_CAREERS) => {
                Outcome::Navigate(Route::Careers)
            }
            InputEvent::Click(SHOW_BEST) => self.show_route(RouteId::Best),
            InputEvent::Click(SHOW_ALTERNATE) => self.show_route(RouteId::Alternate),
            InputEvent::Key(c @ '1'..='8') => self.select_stage((*c as u8 - b'1') as usize),
            InputEvent::Click(id) if (SELECT_STAGE_BASE..COMPLETE_STAGE).contains(id) => {
                self.select_stage((id - SELECT_STAGE_BASE) as usize)
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
    use crate::storage::Selection;

    fn page_for_age(age: f64) -> (CareerMapPage, Store) {
        let mut store = Store::in_memory();
        store.save_profile(&StudentProfile {
            name: "Ravi".into(),
            age: Some(age),
            interest: "Technology".into(),
            ..Default::default()
        });
        store.save_selection(&Selection {
            career_id: "software-engineer".into(),
            routes: vec![RouteId::Route1, RouteId::Route2],
        });
        (CareerMapPage::new(&store), store)
    }

    #[test]
    fn opens_on_stage_for_age() {
        assert_eq!(page_for_age(16.0).0.map.stage_id(), "school");
        assert_eq!(page_for_age(19.0).0.map.stage_id(), "exam");
        assert_eq!(page_for_age(23.0).0.map.stage_id(), "learn");
    }

    #[test]
    fn missing_profile_opens_at_school() {
        let page = CareerMapPage::new(&Store::in_memory());
        assert_eq!(page.map.stage_id(), "school");
        assert_eq!(page.map.route_id(), RouteId::Best);
        assert!(page.route_names.is_empty());
        assert_eq!(page.career_title.as_deref(), Some("Multi-Domain Professional"));
    }

    #[test]
    fn header_data_from_selection() {
        let (page, _) = page_for_age(18.0);
        assert_eq!(page.student_name, "Ravi");
        assert_eq!(page.career_title.as_deref(), Some("Software Engineer"));
        assert_eq!(page.route_names, ["Traditional Academic", "Certification Path"]);
    }

    #[test]
    fn complete_advances_along_route() {
        let (mut page, mut store) = page_for_age(16.0);
        assert_eq!(page.handle_input(&InputEvent::Key('c'), &mut store), Outcome::Consumed);
        assert_eq!(page.map.stage_id(), "exam");
        page.handle_input(&InputEvent::Click(COMPLETE_STAGE), &mut store);
        assert_eq!(page.map.stage_id(), "govt");
    }

    #[test]
    fn complete_at_job_is_ignored() {
        let (mut page, mut store) = page_for_age(16.0);
        page.handle_input(&InputEvent::Key('8'), &mut store);
        assert_eq!(page.map.stage_id(), "job");
        assert_eq!(page.handle_input(&InputEvent::Enter, &mut store), Outcome::Ignored);
        assert_eq!(page.map.stage_id(), "job");
    }

    #[test]
    fn reroute_keeps_stage() {
        let (mut page, mut store) = page_for_age(19.0);
        page.handle_input(&InputEvent::Key('r'), &mut store);
        assert_eq!(page.map.route_id(), RouteId::Alternate);
        assert_eq!(page.map.stage_id(), "exam");
        page.handle_input(&InputEvent::Key('c'), &mut store);
        assert_eq!(page.map.stage_id(), "private");
    }

    #[test]
    fn route_tabs_pick_route() {
        let (mut page, mut store) = page_for_age(19.0);
        page.handle_input(&InputEvent::Click(SHOW_BEST), &mut store);
        assert_eq!(page.map.route_id(), RouteId::Best);
        page.handle_input(&InputEvent::Click(SHOW_ALTERNATE), &mut store);
        page.handle_input(&InputEvent::Click(SHOW_ALTERNATE), &mut store);
        assert_eq!(page.map.route_id(), RouteId::Alternate);
    }

    #[test]
    fn stage_clicks_select_any_stage() {
        let (mut page, mut store) = page_for_age(16.0);
        let private = MAP_GRAPH.stages.iter().position(|s| s.id == "private").unwrap();
        page.handle_input(&InputEvent::Click(SELECT_STAGE_BASE + private as u16), &mut store);
        assert_eq!(page.map.stage_id(), "private");
        assert!(!page.map.is_on_route("private"));
        assert_eq!(page.handle_input(&InputEvent::Key('c'), &mut store), Outcome::Ignored);
        assert_eq!(page.handle_input(&InputEvent::Key('9'), &mut store), Outcome::Ignored);
    }

    #[test]
    fn navigation_keys() {
        let (mut page, mut store) = page_for_age(16.0);
        assert_eq!(
            page.handle_input(&InputEvent::Key('e'), &mut store),
            Outcome::Navigate(Route::Student)
        );
        assert_eq!(
            page.handle_input(&InputEvent::Back, &mut store),
            Outcome::Navigate(Route::Careers)
        );
    }
}
