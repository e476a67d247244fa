//! Fixed stage graphs: node coordinates, named routes, and edge curves.
//!
//! Two graphs exist. The preview graph backs the landing-page route
//! selector (`route1`..`route4`); the career map graph backs the
//! best / alternate route state machine.

use serde::{Deserialize, Serialize};

pub type StageId = &'static str;

/// Identifier of one fixed path through a stage graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteId {
    Route1,
    Route2,
    Route3,
    Route4,
    Best,
    Alternate,
}

impl RouteId {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteId::Route1 => "route1",
            RouteId::Route2 => "route2",
            RouteId::Route3 => "route3",
            RouteId::Route4 => "route4",
            RouteId::Best => "best",
            RouteId::Alternate => "alternate",
        }
    }

    pub fn parse(s: &str) -> Option<RouteId> {
        match s {
            "route1" => Some(RouteId::Route1),
            "route2" => Some(RouteId::Route2),
            "route3" => Some(RouteId::Route3),
            "route4" => Some(RouteId::Route4),
            "best" => Some(RouteId::Best),
            "alternate" => Some(RouteId::Alternate),
            _ => None,
        }
    }
}

/// A node in a stage graph, positioned in the graph's viewport.
#[derive(Debug, PartialEq)]
pub struct Stage {
    pub id: StageId,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
}

/// A named, ordered path through a stage graph.
#[derive(Debug, PartialEq)]
pub struct Route {
    pub id: RouteId,
    pub name: &'static str,
    pub stages: &'static [StageId],
}

impl Route {
    pub fn position(&self, stage: &str) -> Option<usize> {
        self.stages.iter().position(|s| *s == stage)
    }

    pub fn contains(&self, stage: &str) -> bool {
        self.position(stage).is_some()
    }
}

/// Stage nodes plus the routes drawn over them. Coordinates grow right and
/// down, like an SVG viewport of `width` × `height`.
pub struct StageGraph {
    pub width: f64,
    pub height: f64,
    pub stages: &'static [Stage],
    pub routes: &'static [Route],
}

impl StageGraph {
    pub fn stage_by_id(&self, id: &str) -> Option<&'static Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    pub fn route_by_id(&self, id: RouteId) -> Option<&'static Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Consecutive stage pairs of a route, skipping pairs with an unknown end.
    pub fn route_edges(&self, route: &Route) -> Vec<(&'static Stage, &'static Stage)> {
        route
            .stages
            .windows(2)
            .filter_map(|pair| Some((self.stage_by_id(pair[0])?, self.stage_by_id(pair[1])?)))
            .collect()
    }
}

// ── Preview graph (landing page) ───────────────────────────────────────

pub const PREVIEW_GRAPH: StageGraph = StageGraph {
    width: 650.0,
    height: 400.0,
    stages: &[
        Stage { id: "start", label: "Start Career", x: 50.0, y: 200.0 },
        Stage { id: "exam", label: "Entrance Exams", x: 200.0, y: 80.0 },
        Stage { id: "cert", label: "Certifications", x: 200.0, y: 200.0 },
        Stage { id: "intern", label: "Internship", x: 200.0, y: 320.0 },
        Stage { id: "college", label: "College", x: 400.0, y: 120.0 },
        Stage { id: "company", label: "Company Exp.", x: 400.0, y: 280.0 },
        Stage { id: "destination", label: "Career Goal", x: 600.0, y: 200.0 },
    ],
    routes: &[
        Route {
            id: RouteId::Route1,
            name: "Traditional Academic",
            stages: &["start", "exam", "college", "destination"],
        },
        Route {
            id: RouteId::Route2,
            name: "Certification Path",
            stages: &["start", "cert", "college", "destination"],
        },
        Route {
            id: RouteId::Route3,
            name: "Industry First",
            stages: &["start", "intern", "company", "destination"],
        },
        Route {
            id: RouteId::Route4,
            name: "Hybrid Path",
            stages: &["start", "cert", "company", "destination"],
        },
    ],
};

// ── Career map graph ───────────────────────────────────────────────────

pub const MAP_GRAPH: StageGraph = StageGraph {
    width: 1000.0,
    height: 420.0,
    stages: &[
        Stage { id: "start", label: "Start", x: 80.0, y: 210.0 },
        Stage { id: "school", label: "School (10-12)", x: 240.0, y: 210.0 },
        Stage { id: "exam", label: "Entrance Exams", x: 400.0, y: 210.0 },
        Stage { id: "govt", label: "Govt / Top College", x: 560.0, y: 120.0 },
        Stage { id: "private", label: "Private College", x: 560.0, y: 300.0 },
        Stage { id: "learn", label: "Skill Learning", x: 720.0, y: 210.0 },
        Stage { id: "cert", label: "Certifications", x: 850.0, y: 300.0 },
        Stage { id: "job", label: "Job (Software Engineer)", x: 940.0, y: 210.0 },
    ],
    routes: &[
        Route {
            id: RouteId::Best,
            name: "Best path",
            stages: &["start", "school", "exam", "govt", "learn", "cert", "job"],
        },
        Route {
            id: RouteId::Alternate,
            name: "Alternate path",
            stages: &["start", "school", "exam", "private", "learn", "cert", "job"],
        },
    ],
};

/// Sample the edge curve from `a` to `b` at `segments + 1` points.
///
/// The curve is a cubic Bézier leaving `a` horizontally and entering `b`
/// horizontally, with control points at 35% and 65% of the x distance.
pub fn curve_points(a: &Stage, b: &Stage, segments: usize) -> Vec<(f64, f64)> {
    let segments = segments.max(1);
    let dx = b.x - a.x;
    let p0 = (a.x, a.y);
    let p1 = (a.x + dx * 0.35, a.y);
    let p2 = (a.x + dx * 0.65, b.y);
    let p3 = (b.x, b.y);

    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let u = 1.0 - t;
            let w0 = u * u * u;
            let w1 = 3.0 * u * u * t;
            let w2 = 3.0 * u * t * t;
            let w3 = t * t * t;
            (
                w0 * p0.0 + w1 * p1.0 + w2 * p2.0 + w3 * p3.0,
                w0 * p0.1 + w1 * p1.1 + w2 * p2.1 + w3 * p3.1,
            )
        })
        .collect()
}
