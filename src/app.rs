//! Application state: the store, the current route and its page.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::console;
use crate::input::{ClickState, InputEvent};
use crate::pages::{create_page, Outcome, Page, Route};
use crate::storage::Store;

pub struct App {
    pub store: Store,
    pub route: Route,
    page: Box<dyn Page>,
}

impl App {
    pub fn new(store: Store, route: Route) -> Self {
        let page = create_page(&route, &store);
        Self { store, route, page }
    }

    /// Replace the page with a fresh one for `route`, built from whatever
    /// the store holds now.
    pub fn navigate(&mut self, route: Route) {
        console::log(&format!("navigate: {} -> {}", self.route.path(), route.path()));
        self.page = create_page(&route, &self.store);
        self.route = route;
    }

    /// Follow a URL path that changed outside the app (back/forward,
    /// typed URL). Returns true when the route changed.
    pub fn sync_to_path(&mut self, path: &str) -> bool {
        let route = Route::from_path(path);
        if route == self.route {
            return false;
        }
        self.navigate(route);
        true
    }

    /// Returns true when the route changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let outcome = self.page.handle_input(event, &mut self.store);
        self.apply(outcome)
    }

    pub fn tick(&mut self, delta_ticks: u32) -> bool {
        let outcome = self.page.tick(delta_ticks);
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Navigate(route) => {
                self.navigate(route);
                true
            }
            Outcome::Ignored | Outcome::Consumed => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        self.page.render(f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::stages::RouteId;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_input(&InputEvent::Key(c));
        }
    }

    #[test]
    fn full_journey_from_landing_to_map() {
        let mut app = App::new(Store::in_memory(), Route::Landing);
        assert!(app.handle_input(&InputEvent::Key('s')));
        assert_eq!(app.route, Route::Student);

        type_str(&mut app, "Asha");
        app.handle_input(&InputEvent::FocusNext);
        type_str(&mut app, "22");
        app.handle_input(&InputEvent::FocusNext);
        type_str(&mut app, "2"); // undergraduate
        app.handle_input(&InputEvent::FocusNext);
        type_str(&mut app, "1"); // Technology
        app.handle_input(&InputEvent::FocusNext);
        app.handle_input(&InputEvent::FocusNext);
        type_str(&mut app, "1"); // Software Engineer
        for _ in 0..3 {
            app.handle_input(&InputEvent::FocusNext);
        }
        type_str(&mut app, "Remote");
        assert!(app.handle_input(&InputEvent::Enter));
        assert_eq!(app.route, Route::Analyzing);

        assert!(!app.tick(24));
        assert!(app.tick(1));
        assert_eq!(app.route, Route::Careers);

        assert!(app.handle_input(&InputEvent::Key('2')));
        assert_eq!(app.route, Route::CareerMap);

        let selection = app.store.load_selection().unwrap();
        assert_eq!(selection.career_id, "software-engineer");
        assert_eq!(selection.routes, vec![RouteId::Route1, RouteId::Route2]);
        assert_eq!(app.store.raw("studentAge").as_deref(), Some("22"));
        assert_eq!(app.store.raw("studentEducation").as_deref(), Some("undergraduate"));
    }

    #[test]
    fn consumed_input_keeps_route() {
        let mut app = App::new(Store::in_memory(), Route::Student);
        assert!(!app.handle_input(&InputEvent::Key('a')));
        assert_eq!(app.route, Route::Student);
    }

    #[test]
    fn unknown_route_returns_home() {
        let mut app = App::new(Store::in_memory(), Route::from_path("#/nowhere"));
        assert_eq!(app.route, Route::NotFound("/nowhere".into()));
        assert!(app.handle_input(&InputEvent::Enter));
        assert_eq!(app.route, Route::Landing);
    }

    #[test]
    fn navigate_rebuilds_from_store() {
        let mut app = App::new(Store::in_memory(), Route::Careers);
        app.handle_input(&InputEvent::Key('1'));
        assert_eq!(app.route, Route::CareerMap);
        app.navigate(Route::Landing);
        assert!(app.handle_input(&InputEvent::Key('m')));
        assert_eq!(app.route, Route::CareerMap);
    }

    #[test]
    fn external_path_change_navigates_once() {
        let mut app = App::new(Store::in_memory(), Route::CareerMap);
        assert!(app.sync_to_path("#/careers"));
        assert_eq!(app.route, Route::Careers);
        assert!(!app.sync_to_path("#/careers"));

        // The rebuilt page answers input for the new route.
        assert!(app.handle_input(&InputEvent::Key('e')));
        assert_eq!(app.route, Route::Student);
    }
}
