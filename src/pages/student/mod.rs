//! Student profile form.
//!
//! Text fields take typed characters; chip fields (education, interest,
//! goal) take a digit to pick an option. Typing a custom interest or goal
//! clears the chip, and picking a chip clears the custom text.

mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::career::profile::{parse_age, StudentProfile};
use crate::input::{ClickState, InputEvent};
use crate::storage::Store;

use super::actions::*;
use super::{Outcome, Page, Route};

/// Longest text accepted in any field.
const MAX_FIELD_LEN: usize = 60;

/// `(stored id, display label)`
pub const EDUCATION_OPTIONS: [(&str, &str); 3] = [
    ("school", "School Student"),
    ("undergraduate", "Undergraduate"),
    ("graduate", "Graduate"),
];

pub const INTEREST_OPTIONS: [&str; 4] = ["Technology", "Medical", "Business", "Arts"];

pub const GOAL_OPTIONS: [&str; 3] = ["Software Engineer", "Doctor", "Data Scientist"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Name,
    Age,
    Education,
    Interest,
    CustomInterest,
    Goal,
    CustomGoal,
    Hobbies,
    Location,
}

pub const ALL_FIELDS: [Field; 9] = [
    Field::Name,
    Field::Age,
    Field::Education,
    Field::Interest,
    Field::CustomInterest,
    Field::Goal,
    Field::CustomGoal,
    Field::Hobbies,
    Field::Location,
];

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Age => "Your Age",
            Field::Education => "Current Education Level",
            Field::Interest => "Your Interest",
            Field::CustomInterest => "Other Interest (optional)",
            Field::Goal => "Career Goal",
            Field::CustomGoal => "Other Career Goal (optional)",
            Field::Hobbies => "Hobbies & Activities",
            Field::Location => "Preferred Location",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter your name",
            Field::Age => "e.g. 17, 20, 24",
            Field::CustomInterest => "e.g. Law, Design, Finance",
            Field::CustomGoal => "e.g. Product Manager, Economist",
            Field::Hobbies => "e.g. coding, chess, sports, music",
            Field::Location => "e.g. India, USA, Europe, Remote",
            Field::Education | Field::Interest | Field::Goal => "",
        }
    }

    pub fn index(self) -> usize {
        ALL_FIELDS.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn is_choice(self) -> bool {
        matches!(self, Field::Education | Field::Interest | Field::Goal)
    }

    fn choice_count(self) -> usize {
        match self {
            Field::Education => EDUCATION_OPTIONS.len(),
            Field::Interest => INTEREST_OPTIONS.len(),
            Field::Goal => GOAL_OPTIONS.len(),
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub education: Option<usize>,
    pub interest: Option<usize>,
    pub custom_interest: String,
    pub goal: Option<usize>,
    pub custom_goal: String,
    pub hobbies: String,
    pub location: String,
}

impl StudentForm {
    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Age => Some(&mut self.age),
            Field::CustomInterest => Some(&mut self.custom_interest),
            Field::CustomGoal => Some(&mut self.custom_goal),
            Field::Hobbies => Some(&mut self.hobbies),
            Field::Location => Some(&mut self.location),
            Field::Education | Field::Interest | Field::Goal => None,
        }
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::CustomInterest => &self.custom_interest,
            Field::CustomGoal => &self.custom_goal,
            Field::Hobbies => &self.hobbies,
            Field::Location => &self.location,
            Field::Education | Field::Interest | Field::Goal => "",
        }
    }

    pub fn choice(&self, field: Field) -> Option<usize> {
        match field {
            Field::Education => self.education,
            Field::Interest => self.interest,
            Field::Goal => self.goal,
            _ => None,
        }
    }

    /// Append a character to a text field. The age field takes digits and
    /// one decimal point only.
    pub fn type_char(&mut self, field: Field, c: char) -> bool {
        if field == Field::Age && !(c.is_ascii_digit() || (c == '.' && !self.age.contains('.'))) {
            return false;
        }
        let Some(text) = self.text_mut(field) else {
            return false;
        };
        if text.chars().count() >= MAX_FIELD_LEN || c.is_control() {
            return false;
        }
        text.push(c);
        match field {
            Field::CustomInterest => self.interest = None,
            Field::CustomGoal => self.goal = None,
            _ => {}
        }
        true
    }

    pub fn backspace(&mut self, field: Field) -> bool {
        self.text_mut(field).and_then(|t| t.pop()).is_some()
    }

    pub fn choose(&mut self, field: Field, index: usize) -> bool {
        if index >= field.choice_count() {
            return false;
        }
        match field {
            Field::Education => self.education = Some(index),
            Field::Interest => {
                self.interest = Some(index);
                self.custom_interest.clear();
            }
            Field::Goal => {
                self.goal = Some(index);
                self.custom_goal.clear();
            }
            _ => return false,
        }
        true
    }

    /// Custom text wins over the chip.
    pub fn effective_interest(&self) -> String {
        if !self.custom_interest.is_empty() {
            return self.custom_interest.clone();
        }
        self.interest
            .map(|i| INTEREST_OPTIONS[i].to_string())
            .unwrap_or_default()
    }

    pub fn effective_goal(&self) -> String {
        if !self.custom_goal.is_empty() {
            return self.custom_goal.clone();
        }
        self.goal
            .map(|i| GOAL_OPTIONS[i].to_string())
            .unwrap_or_default()
    }

    /// Required fields that are still empty. Hobbies are optional.
    pub fn missing(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(Field::Name);
        }
        if parse_age(&self.age).is_none() {
            missing.push(Field::Age);
        }
        if self.education.is_none() {
            missing.push(Field::Education);
        }
        if self.effective_interest().is_empty() {
            missing.push(Field::Interest);
        }
        if self.effective_goal().is_empty() {
            missing.push(Field::Goal);
        }
        if self.location.is_empty() {
            missing.push(Field::Location);
        }
        missing
    }

    pub fn can_submit(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn to_profile(&self) -> StudentProfile {
        StudentProfile {
            name: self.name.clone(),
            age: parse_age(&self.age),
            education: self
                .education
                .map(|i| EDUCATION_OPTIONS[i].0.to_string())
                .unwrap_or_default(),
            interest: self.effective_interest(),
            goal: self.effective_goal(),
            hobbies: self.hobbies.clone(),
            location: self.location.clone(),
        }
    }
}

pub struct StudentPage {
    pub form: StudentForm,
    pub focus: Field,
    /// Set after a rejected submit so the render can point at the gaps.
    pub show_missing: bool,
}

impl StudentPage {
    pub fn new() -> Self {
        Self {
            form: StudentForm::default(),
            focus: Field::Name,
            show_missing: false,
        }
    }

    fn focus_next(&mut self) {
        let i = self.focus.index();
        self.focus = ALL_FIELDS[(i + 1) % ALL_FIELDS.len()];
    }

    fn focus_prev(&mut self) {
        let i = self.focus.index();
        self.focus = ALL_FIELDS[(i + ALL_FIELDS.len() - 1) % ALL_FIELDS.len()];
    }

    fn submit(&mut self, store: &mut Store) -> Outcome {
        if !self.form.can_submit() {
            self.show_missing = true;
            if let Some(first) = self.form.missing().first() {
                self.focus = *first;
            }
            return Outcome::Consumed;
        }
        store.save_profile(&self.form.to_profile());
        Outcome::Navigate(Route::Analyzing)
    }

    fn choose(&mut self, field: Field, index: usize) -> Outcome {
        self.focus = field;
        if self.form.choose(field, index) {
            Outcome::Consumed
        } else {
            Outcome::Ignored
        }
    }

    fn handle_click(&mut self, id: u16, store: &mut Store) -> Outcome {
        match id {
            SUBMIT_PROFILE => self.submit(store),
            CANCEL_PROFILE => Outcome::Navigate(Route::Landing),
            id if (FOCUS_FIELD_BASE..FOCUS_FIELD_BASE + ALL_FIELDS.len() as u16).contains(&id) => {
                self.focus = ALL_FIELDS[(id - FOCUS_FIELD_BASE) as usize];
                Outcome::Consumed
            }
            id if (EDUCATION_BASE..EDUCATION_BASE + 3).contains(&id) => {
                self.choose(Field::Education, (id - EDUCATION_BASE) as usize)
            }
            id if (INTEREST_BASE..INTEREST_BASE + 4).contains(&id) => {
                self.choose(Field::Interest, (id - INTEREST_BASE) as usize)
            }
            id if (GOAL_BASE..GOAL_BASE + 3).contains(&id) => {
                self.choose(Field::Goal, (id - GOAL_BASE) as usize)
            }
            _ => Outcome::Ignored,
        }
    }
}

impl Page for StudentPage {
    fn handle_input(&mut self, event: &InputEvent, store: &mut Store) -> Outcome {
        match event {
            InputEvent::Click(id) => self.handle_click(*id, store),
            InputEvent::Back => Outcome::Navigate(Route::Landing),
            InputEvent::FocusNext => {
                self.focus_next();
                Outcome::Consumed
            }
            InputEvent::FocusPrev => {
                self.focus_prev();
                Outcome::Consumed
            }
            InputEvent::Enter => {
                if self.focus == Field::Location {
                    self.submit(store)
                } else {
                    self.focus_next();
                    Outcome::Consumed
                }
            }
            InputEvent::Backspace => {
                if self.form.backspace(self.focus) {
                    Outcome::Consumed
                } else {
                    Outcome::Ignored
                }
            }
            InputEvent::Key(c) if self.focus.is_choice() => match c.to_digit(10) {
                Some(d) if d >= 1 => self.choose(self.focus, d as usize - 1),
                _ => Outcome::Ignored,
            },
            InputEvent::Key(c) => {
                if self.form.type_char(self.focus, *c) {
                    Outcome::Consumed
                } else {
                    Outcome::Ignored
                }
            }
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(page: &mut StudentPage, store: &mut Store, s: &str) {
        for c in s.chars() {
            page.handle_input(&InputEvent::Key(c), store);
        }
    }

    fn fill_valid(page: &mut StudentPage, store: &mut Store) {
        type_str(page, store, "Meera");
        page.handle_input(&InputEvent::Enter, store); // -> Age
        type_str(page, store, "18");
        page.handle_input(&InputEvent::Enter, store); // -> Education
        page.handle_input(&InputEvent::Key('1'), store); // school
        page.handle_input(&InputEvent::Enter, store); // -> Interest
        page.handle_input(&InputEvent::Key('1'), store); // Technology
        page.handle_input(&InputEvent::Enter, store); // -> CustomInterest
        page.handle_input(&InputEvent::Enter, store); // -> Goal
        page.handle_input(&InputEvent::Key('2'), store); // Doctor
        page.handle_input(&InputEvent::Enter, store); // -> CustomGoal
        page.handle_input(&InputEvent::Enter, store); // -> Hobbies
        type_str(page, store, "football");
        page.handle_input(&InputEvent::Enter, store); // -> Location
        type_str(page, store, "India");
    }

    #[test]
    fn full_form_submits_and_saves() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        fill_valid(&mut page, &mut store);
        assert_eq!(page.focus, Field::Location);
        assert!(page.form.can_submit());

        let outcome = page.handle_input(&InputEvent::Enter, &mut store);
        assert_eq!(outcome, Outcome::Navigate(Route::Analyzing));

        let saved = store.load_profile().unwrap();
        assert_eq!(saved.name, "Meera");
        assert_eq!(saved.age, Some(18.0));
        assert_eq!(saved.education, "school");
        assert_eq!(saved.interest, "Technology");
        assert_eq!(saved.goal, "Doctor");
        assert_eq!(saved.hobbies, "football");
        assert_eq!(saved.location, "India");
    }

    #[test]
    fn incomplete_form_stays_and_focuses_gap() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        type_str(&mut page, &mut store, "Meera");
        let outcome = page.handle_input(&InputEvent::Click(SUBMIT_PROFILE), &mut store);
        assert_eq!(outcome, Outcome::Consumed);
        assert!(page.show_missing);
        assert_eq!(page.focus, Field::Age);
        assert!(store.load_profile().is_none());
    }

    #[test]
    fn hobbies_are_optional() {
        let mut form = StudentForm {
            name: "A".into(),
            age: "20".into(),
            education: Some(2),
            interest: Some(3),
            goal: Some(0),
            location: "Remote".into(),
            ..Default::default()
        };
        assert!(form.can_submit());
        form.location.clear();
        assert_eq!(form.missing(), vec![Field::Location]);
    }

    #[test]
    fn custom_text_overrides_and_clears_chip() {
        let mut form = StudentForm::default();
        form.choose(Field::Interest, 0);
        assert_eq!(form.effective_interest(), "Technology");
        form.type_char(Field::CustomInterest, 'L');
        assert_eq!(form.interest, None);
        assert_eq!(form.effective_interest(), "L");

        form.choose(Field::Interest, 1);
        assert!(form.custom_interest.is_empty());
        assert_eq!(form.effective_interest(), "Medical");
    }

    #[test]
    fn custom_goal_clears_goal_chip() {
        let mut form = StudentForm::default();
        form.choose(Field::Goal, 0);
        for c in "Economist".chars() {
            form.type_char(Field::CustomGoal, c);
        }
        assert_eq!(form.goal, None);
        assert_eq!(form.to_profile().goal, "Economist");
    }

    #[test]
    fn age_field_accepts_numbers_only() {
        let mut form = StudentForm::default();
        assert!(form.type_char(Field::Age, '1'));
        assert!(!form.type_char(Field::Age, 'x'));
        assert!(form.type_char(Field::Age, '.'));
        assert!(!form.type_char(Field::Age, '.'));
        assert!(form.type_char(Field::Age, '5'));
        assert_eq!(form.age, "1.5");
    }

    #[test]
    fn lone_decimal_point_is_not_an_age() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        fill_valid(&mut page, &mut store);
        page.form.age.clear();
        assert!(page.form.type_char(Field::Age, '.'));
        assert!(!page.form.can_submit());
        assert_eq!(page.form.missing(), vec![Field::Age]);

        assert_eq!(page.handle_input(&InputEvent::Enter, &mut store), Outcome::Consumed);
        assert_eq!(page.focus, Field::Age);
        assert!(store.load_profile().is_none());
    }

    #[test]
    fn digits_type_into_text_fields() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        type_str(&mut page, &mut store, "R2");
        assert_eq!(page.form.name, "R2");
    }

    #[test]
    fn out_of_range_chip_ignored() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        page.focus = Field::Goal;
        assert_eq!(page.handle_input(&InputEvent::Key('9'), &mut store), Outcome::Ignored);
        assert_eq!(page.handle_input(&InputEvent::Key('0'), &mut store), Outcome::Ignored);
        assert_eq!(page.form.goal, None);
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        type_str(&mut page, &mut store, "Ann");
        assert_eq!(page.handle_input(&InputEvent::Backspace, &mut store), Outcome::Consumed);
        assert_eq!(page.form.name, "An");
        page.focus = Field::Education;
        assert_eq!(page.handle_input(&InputEvent::Backspace, &mut store), Outcome::Ignored);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        page.handle_input(&InputEvent::FocusPrev, &mut store);
        assert_eq!(page.focus, Field::Location);
        page.handle_input(&InputEvent::FocusNext, &mut store);
        assert_eq!(page.focus, Field::Name);
    }

    #[test]
    fn chip_clicks_focus_and_choose() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        page.handle_input(&InputEvent::Click(EDUCATION_BASE + 1), &mut store);
        assert_eq!(page.focus, Field::Education);
        assert_eq!(page.form.education, Some(1));
        page.handle_input(&InputEvent::Click(GOAL_BASE + 2), &mut store);
        assert_eq!(page.form.effective_goal(), "Data Scientist");
        page.handle_input(&InputEvent::Click(FOCUS_FIELD_BASE + Field::Hobbies.index() as u16), &mut store);
        assert_eq!(page.focus, Field::Hobbies);
    }

    #[test]
    fn escape_and_cancel_go_home() {
        let mut store = Store::in_memory();
        let mut page = StudentPage::new();
        assert_eq!(
            page.handle_input(&InputEvent::Back, &mut store),
            Outcome::Navigate(Route::Landing)
        );
        assert_eq!(
            page.handle_input(&InputEvent::Click(CANCEL_PROFILE), &mut store),
            Outcome::Navigate(Route::Landing)
        );
    }

    #[test]
    fn field_length_capped() {
        let mut form = StudentForm::default();
        for _ in 0..100 {
            form.type_char(Field::Hobbies, 'a');
        }
        assert_eq!(form.hobbies.len(), MAX_FIELD_LEN);
    }
}
