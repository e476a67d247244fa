//! Landing-page route preview: which of a career's routes is highlighted.

use super::classifier::CareerOption;
use super::stages::{Route, RouteId, PREVIEW_GRAPH};

#[derive(Clone, Debug, PartialEq)]
pub struct RoutePreview {
    visible: Vec<&'static Route>,
    active: Option<RouteId>,
}

impl RoutePreview {
    /// Routes the career offers, in preview-table order. The first one is
    /// active. Route ids missing from the table are skipped.
    pub fn for_career(career: &CareerOption) -> Self {
        let visible: Vec<&'static Route> = PREVIEW_GRAPH
            .routes
            .iter()
            .filter(|r| career.routes.contains(&r.id))
            .collect();
        let active = visible.first().map(|r| r.id);
        Self { visible, active }
    }

    pub fn visible(&self) -> &[&'static Route] {
        &self.visible
    }

    pub fn active(&self) -> Option<&'static Route> {
        let id = self.active?;
        self.visible.iter().copied().find(|r| r.id == id)
    }

    /// Activate a visible route. Ids the career does not offer are ignored.
    pub fn select(&mut self, id: RouteId) -> bool {
        if self.visible.iter().any(|r| r.id == id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Activate the visible route at `index` (display order).
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(id) = self.visible.get(index).map(|r| r.id) else {
            return false;
        };
        self.select(id)
    }

    pub fn is_on_active_route(&self, stage: &str) -> bool {
        self.active().is_some_and(|r| r.contains(stage))
    }
}
