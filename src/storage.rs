//! Persisted student state.
//!
//! Pages never touch `localStorage` directly. They go through [`Store`],
//! which wraps an injected [`KeyValue`] backend: the browser's
//! `localStorage` on wasm, an in-memory map in tests.
//!
//! ## Keys
//!
//! - `studentProfile`: JSON [`StudentProfile`].
//! - `selectedCareer`: chosen career id.
//! - `availableRoutes`: JSON array of route ids for the chosen career.
//! - `studentAge`, `studentEducation`: copies of the profile fields.
//!
//! There is no schema version. Anything that fails to parse loads as
//! absent and the callers fall back to their defaults.

use std::collections::HashMap;

use crate::career::profile::StudentProfile;
use crate::career::stages::RouteId;
use crate::console;

pub const PROFILE_KEY: &str = "studentProfile";
pub const SELECTED_CAREER_KEY: &str = "selectedCareer";
pub const AVAILABLE_ROUTES_KEY: &str = "availableRoutes";
pub const AGE_KEY: &str = "studentAge";
pub const EDUCATION_KEY: &str = "studentEducation";

/// String key-value storage backend.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns false if the backend rejected the write.
    fn set(&mut self, key: &str, value: &str) -> bool;
    fn remove(&mut self, key: &str);
}

/// In-memory backend for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.entries.insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Browser `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValue for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        match self.storage.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                console::warn(&format!("failed to write {key} to localStorage: {e:?}"));
                false
            }
        }
    }

    fn remove(&mut self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// The career the student picked on the careers page.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub career_id: String,
    pub routes: Vec<RouteId>,
}

pub struct Store {
    backend: Box<dyn KeyValue>,
}

impl Store {
    pub fn new(backend: Box<dyn KeyValue>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }

    pub fn load_profile(&self) -> Option<StudentProfile> {
        let json = self.backend.get(PROFILE_KEY)?;
        match serde_json::from_str(&json) {
            Ok(profile) => Some(profile),
            Err(e) => {
                console::warn(&format!("ignoring unreadable {PROFILE_KEY}: {e}"));
                None
            }
        }
    }

    /// Profile for classification: the stored one, or an empty profile.
    pub fn profile_or_default(&self) -> StudentProfile {
        self.load_profile().unwrap_or_default()
    }

    /// Persist the profile plus the duplicated age / education scalars.
    pub fn save_profile(&mut self, profile: &StudentProfile) -> bool {
        let json = match serde_json::to_string(profile) {
            Ok(j) => j,
            Err(e) => {
                console::warn(&format!("failed to serialize profile: {e}"));
                return false;
            }
        };
        if !self.backend.set(PROFILE_KEY, &json) {
            return false;
        }
        let age = profile.age.map(format_age).unwrap_or_default();
        let age_ok = self.backend.set(AGE_KEY, &age);
        let education_ok = self.backend.set(EDUCATION_KEY, &profile.education);
        console::log(&format!("saved profile for {}", profile.name));
        age_ok && education_ok
    }

    /// The stored career choice. Route ids that are no longer known are
    /// dropped; an unreadable route list loads as empty.
    pub fn load_selection(&self) -> Option<Selection> {
        let career_id = self.backend.get(SELECTED_CAREER_KEY)?;
        let routes = self
            .backend
            .get(AVAILABLE_ROUTES_KEY)
            .map(|json| parse_routes(&json))
            .unwrap_or_default();
        Some(Selection { career_id, routes })
    }

    pub fn save_selection(&mut self, selection: &Selection) -> bool {
        let ids: Vec<&str> = selection.routes.iter().map(|r| r.as_str()).collect();
        let json = match serde_json::to_string(&ids) {
            Ok(j) => j,
            Err(e) => {
                console::warn(&format!("failed to serialize routes: {e}"));
                return false;
            }
        };
        let career_ok = self.backend.set(SELECTED_CAREER_KEY, &selection.career_id);
        let routes_ok = self.backend.set(AVAILABLE_ROUTES_KEY, &json);
        console::log(&format!("selected career {}", selection.career_id));
        career_ok && routes_ok
    }

    pub fn clear(&mut self) {
        for key in [
            PROFILE_KEY,
            SELECTED_CAREER_KEY,
            AVAILABLE_ROUTES_KEY,
            AGE_KEY,
            EDUCATION_KEY,
        ] {
            self.backend.remove(key);
        }
    }

    #[cfg(test)]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.backend.get(key)
    }

    #[cfg(test)]
    pub fn set_raw(&mut self, key: &str, value: &str) {
        self.backend.set(key, value);
    }
}

fn parse_routes(json: &str) -> Vec<RouteId> {
    match serde_json::from_str::<Vec<String>>(json) {
        Ok(ids) => ids.iter().filter_map(|s| RouteId::parse(s)).collect(),
        Err(e) => {
            console::warn(&format!("ignoring unreadable {AVAILABLE_ROUTES_KEY}: {e}"));
            Vec::new()
        }
    }
}

/// Whole ages print without a fractional part ("17", not "17.0").
fn format_age(age: f64) -> String {
    if age.fract() == 0.0 && age.abs() < 1e15 {
        format!("{}", age as i64)
    } else {
        age.to_string()
    }
}
