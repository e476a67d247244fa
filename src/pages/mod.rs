//! Page trait, navigation paths, and page construction.

pub mod actions;
pub mod analyzing;
pub mod canvas;
pub mod career_map;
pub mod careers;
pub mod landing;
pub mod not_found;
pub mod student;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::storage::Store;

/// What a page did with an input or tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Ignored,
    Consumed,
    Navigate(Route),
}

/// Trait that all pages implement.
pub trait Page {
    /// Handle an input event. Pages read and write persisted state only
    /// through `store`.
    fn handle_input(&mut self, event: &InputEvent, store: &mut Store) -> Outcome;

    /// Advance time by `delta_ticks` discrete ticks.
    fn tick(&mut self, _delta_ticks: u32) -> Outcome {
        Outcome::Ignored
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);
}

/// Navigable views, addressed by URL path.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Landing,
    Student,
    Analyzing,
    Careers,
    CareerMap,
    NotFound(String),
}

impl Route {
    /// Parse a path (`/careers`) or URL hash (`#/careers`).
    pub fn from_path(path: &str) -> Route {
        let path = path.strip_prefix('#').unwrap_or(path);
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Landing,
            "/student" => Route::Student,
            "/analyzing" => Route::Analyzing,
            "/careers" => Route::Careers,
            "/career-map" => Route::CareerMap,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::Student => "/student",
            Route::Analyzing => "/analyzing",
            Route::Careers => "/careers",
            Route::CareerMap => "/career-map",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Career Navigator",
            Route::Student => "Student Career Profile",
            Route::Analyzing => "Analyzing",
            Route::Careers => "Your Career Destinations",
            Route::CareerMap => "Your Career Map",
            Route::NotFound(_) => "Page Not Found",
        }
    }
}

/// Build the page for a route from the current persisted state.
pub fn create_page(route: &Route, store: &Store) -> Box<dyn Page> {
    match route {
        Route::Landing => Box::new(landing::LandingPage::new(store)),
        Route::Student => Box::new(student::StudentPage::new()),
        Route::Analyzing => Box::new(analyzing::AnalyzingPage::new()),
        Route::Careers => Box::new(careers::CareersPage::new(store)),
        Route::CareerMap => Box::new(career_map::CareerMapPage::new(store)),
        Route::NotFound(path) => Box::new(not_found::NotFoundPage::new(path)),
    }
}
