//! Career map route state machine.
//!
//! Tracks the active route (best / alternate) and the stage the student is
//! on. The starting stage depends only on age and is not required to lie on
//! the active route.

use super::stages::{Route, RouteId, Stage, StageId, MAP_GRAPH};

/// Stage the map opens on for a student of the given age.
pub fn start_stage_for_age(age: f64) -> StageId {
    if age < 17.0 {
        "school"
    } else if age <= 20.0 {
        "exam"
    } else {
        "learn"
    }
}

/// Guidance shown for the active stage, where there is any.
pub fn stage_hint(stage: &str) -> Option<&'static str> {
    match stage {
        "school" => Some("Complete school with a minimum 70% and choose a stream aligned with engineering."),
        "exam" => Some("Recommended exams: JEE / CET / Other alternatives"),
        "learn" => Some("Focus on core CS, projects, and problem-solving."),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteMap {
    route: RouteId,
    stage: StageId,
}

impl RouteMap {
    pub fn for_age(age: f64) -> Self {
        Self {
            route: RouteId::Best,
            stage: start_stage_for_age(age),
        }
    }

    pub fn route_id(&self) -> RouteId {
        self.route
    }

    pub fn stage_id(&self) -> StageId {
        self.stage
    }

    pub fn active_route(&self) -> Option<&'static Route> {
        MAP_GRAPH.route_by_id(self.route)
    }

    pub fn active_stage(&self) -> Option<&'static Stage> {
        MAP_GRAPH.stage_by_id(self.stage)
    }

    pub fn is_on_route(&self, stage: &str) -> bool {
        self.active_route().is_some_and(|r| r.contains(stage))
    }

    /// Move to the next stage of the active route. Does nothing when the
    /// current stage is off the route or already its last stage.
    pub fn advance(&mut self) -> bool {
        let Some(route) = self.active_route() else {
            return false;
        };
        match route.position(self.stage) {
            Some(i) if i + 1 < route.stages.len() => {
                self.stage = route.stages[i + 1];
                true
            }
            _ => false,
        }
    }

    /// Jump to any stage, on the active route or not.
    pub fn select_stage(&mut self, stage: StageId) {
        self.stage = stage;
    }

    /// Swap between the best and alternate routes. The current stage is kept
    /// even if the new route does not pass through it.
    pub fn toggle_route(&mut self) {
        self.route = match self.route {
            RouteId::Best => RouteId::Alternate,
            _ => RouteId::Best,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stage_age_brackets() {
        assert_eq!(start_stage_for_age(16.0), "school");
        assert_eq!(start_stage_for_age(17.0), "exam");
        assert_eq!(start_stage_for_age(20.0), "exam");
        assert_eq!(start_stage_for_age(21.0), "learn");
        assert_eq!(start_stage_for_age(20.5), "learn");
        assert_eq!(start_stage_for_age(15.0), "school");
    }

    #[test]
    fn new_map_uses_best_route() {
        let m = RouteMap::for_age(18.0);
        assert_eq!(m.route_id(), RouteId::Best);
        assert_eq!(m.stage_id(), "exam");
        assert_eq!(m.active_stage().unwrap().label, "Entrance Exams");
    }

    #[test]
    fn advance_walks_best_route() {
        let mut m = RouteMap::for_age(16.0);
        let mut seen = vec![m.stage_id()];
        while m.advance() {
            seen.push(m.stage_id());
        }
        assert_eq!(seen, vec!["school", "exam", "govt", "learn", "cert", "job"]);
    }

    #[test]
    fn advance_at_last_stage_is_noop() {
        let mut m = RouteMap::for_age(30.0);
        m.select_stage("job");
        assert!(!m.advance());
        assert!(!m.advance());
        assert_eq!(m.stage_id(), "job");
    }

    #[test]
    fn advance_off_route_is_noop() {
        let mut m = RouteMap::for_age(18.0);
        m.select_stage("private");
        assert!(!m.is_on_route("private"));
        assert!(!m.advance());
        assert_eq!(m.stage_id(), "private");
    }

    #[test]
    fn toggle_keeps_stage() {
        let mut m = RouteMap::for_age(18.0);
        m.select_stage("govt");
        m.toggle_route();
        assert_eq!(m.route_id(), RouteId::Alternate);
        assert_eq!(m.stage_id(), "govt");
        assert!(!m.is_on_route("govt"));
        // Off the alternate route, so advancing is stuck until re-routed.
        assert!(!m.advance());
        m.toggle_route();
        assert!(m.advance());
        assert_eq!(m.stage_id(), "learn");
    }

    #[test]
    fn alternate_route_goes_through_private() {
        let mut m = RouteMap::for_age(18.0);
        m.toggle_route();
        assert!(m.advance());
        assert_eq!(m.stage_id(), "private");
    }

    #[test]
    fn select_unknown_stage_has_no_node() {
        let mut m = RouteMap::for_age(18.0);
        m.select_stage("moon");
        assert!(m.active_stage().is_none());
        assert!(!m.advance());
    }

    #[test]
    fn hints_only_for_some_stages() {
        assert!(stage_hint("school").is_some());
        assert!(stage_hint("exam").is_some());
        assert!(stage_hint("learn").is_some());
        assert!(stage_hint("govt").is_none());
        assert!(stage_hint("job").is_none());
    }
}
