//! Profile classifier: maps the free-text profile fields to a career list.
//!
//! Rules are evaluated top to bottom and the first match wins. A new
//! category is a new row in [`RULES`].

use serde::Serialize;

use super::profile::StudentProfile;
use super::stages::RouteId;

/// Static definition of a career option.
pub struct CareerEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub recommended: bool,
    pub routes: &'static [RouteId],
}

/// A recommendable career and the preview routes that lead to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CareerOption {
    pub id: String,
    pub title: String,
    pub description: String,
    pub recommended: bool,
    pub routes: Vec<RouteId>,
}

impl From<&CareerEntry> for CareerOption {
    fn from(entry: &CareerEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            recommended: entry.recommended,
            routes: entry.routes.to_vec(),
        }
    }
}

/// Output of [`classify`]: the profile it was computed from plus the careers.
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub student: StudentProfile,
    pub careers: Vec<CareerOption>,
    /// Name of the rule that fired; `None` for the fallback list.
    pub matched_rule: Option<&'static str>,
}

pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&StudentProfile) -> bool,
    pub careers: &'static [CareerEntry],
}

pub const TECHNOLOGY_CAREERS: [CareerEntry; 3] = [
    CareerEntry {
        id: "data-scientist",
        title: "Data Science Engineer",
        description: "Works with data, ML models, and analytics",
        recommended: true,
        routes: &[RouteId::Route2, RouteId::Route4, RouteId::Route1],
    },
    CareerEntry {
        id: "software-engineer",
        title: "Software Engineer",
        description: "Builds scalable software systems",
        recommended: false,
        routes: &[RouteId::Route1, RouteId::Route2],
    },
    CareerEntry {
        id: "mentor",
        title: "Tech Mentor / Educator",
        description: "Guides others through teaching & mentoring",
        recommended: false,
        routes: &[RouteId::Route1, RouteId::Route4],
    },
];

pub const MEDICAL_CAREERS: [CareerEntry; 2] = [
    CareerEntry {
        id: "doctor",
        title: "Medical Doctor",
        description: "Clinical practice and patient care",
        recommended: true,
        routes: &[RouteId::Route1],
    },
    CareerEntry {
        id: "medical-researcher",
        title: "Medical Researcher",
        description: "Research & innovation in healthcare",
        recommended: false,
        routes: &[RouteId::Route1, RouteId::Route3],
    },
];

pub const SPORTS_CAREERS: [CareerEntry; 2] = [
    CareerEntry {
        id: "athlete",
        title: "Professional Athlete",
        description: "Competitive sports and training",
        recommended: true,
        routes: &[RouteId::Route3, RouteId::Route4],
    },
    CareerEntry {
        id: "coach",
        title: "Sports Coach",
        description: "Training and mentoring athletes",
        recommended: false,
        routes: &[RouteId::Route4],
    },
];

pub const FALLBACK_CAREERS: [CareerEntry; 1] = [CareerEntry {
    id: "generalist",
    title: "Multi-Domain Professional",
    description: "Flexible career across domains",
    recommended: true,
    routes: &[RouteId::Route4, RouteId::Route2],
}];

fn is_technology(p: &StudentProfile) -> bool {
    p.interest.contains("Technology") || p.goal.contains("Software")
}

fn is_medical(p: &StudentProfile) -> bool {
    p.interest.contains("Medical") || p.goal.contains("Doctor")
}

fn is_sports(p: &StudentProfile) -> bool {
    p.hobbies.to_lowercase().contains("sport")
}

pub static RULES: [Rule; 3] = [
    Rule {
        name: "technology",
        matches: is_technology,
        careers: &TECHNOLOGY_CAREERS,
    },
    Rule {
        name: "medical",
        matches: is_medical,
        careers: &MEDICAL_CAREERS,
    },
    Rule {
        name: "sports",
        matches: is_sports,
        careers: &SPORTS_CAREERS,
    },
];

/// The first rule the profile satisfies.
pub fn matching_rule(profile: &StudentProfile) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(profile))
}

pub fn classify(profile: &StudentProfile) -> Recommendation {
    let rule = matching_rule(profile);
    let careers: &'static [CareerEntry] = rule.map(|r| r.careers).unwrap_or(&FALLBACK_CAREERS);
    Recommendation {
        student: profile.clone(),
        careers: careers.iter().map(CareerOption::from).collect(),
        matched_rule: rule.map(|r| r.name),
    }
}

/// The career the student picked, or the first one when the stored
/// selection is missing or no longer offered.
pub fn resolve_career<'a>(
    careers: &'a [CareerOption],
    selected_id: Option<&str>,
) -> Option<&'a CareerOption> {
    selected_id
        .and_then(|id| careers.iter().find(|c| c.id == id))
        .or_else(|| careers.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::stages::PREVIEW_GRAPH;

    fn profile(interest: &str, goal: &str, hobbies: &str) -> StudentProfile {
        StudentProfile {
            interest: interest.into(),
            goal: goal.into(),
            hobbies: hobbies.into(),
            ..Default::default()
        }
    }

    fn ids(rec: &Recommendation) -> Vec<&str> {
        rec.careers.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn technology_interest() {
        let rec = classify(&profile("Technology", "", ""));
        assert_eq!(ids(&rec), vec!["data-scientist", "software-engineer", "mentor"]);
        assert!(rec.careers[0].recommended);
        assert!(!rec.careers[1].recommended);
        assert!(!rec.careers[2].recommended);
    }

    #[test]
    fn software_goal_is_technology() {
        let rec = classify(&profile("Arts", "Software Engineer", ""));
        assert_eq!(rec.careers[0].id, "data-scientist");
    }

    #[test]
    fn medical_interest() {
        let rec = classify(&profile("Medical", "", ""));
        assert_eq!(ids(&rec), vec!["doctor", "medical-researcher"]);
        assert!(rec.careers[0].recommended);
    }

    #[test]
    fn doctor_goal_is_medical() {
        let rec = classify(&profile("", "Doctor", ""));
        assert_eq!(rec.careers[0].id, "doctor");
    }

    #[test]
    fn sports_hobby_case_insensitive() {
        let rec = classify(&profile("", "", "I love sports"));
        assert_eq!(ids(&rec), vec!["athlete", "coach"]);
        assert!(rec.careers[0].recommended);

        let rec = classify(&profile("", "", "SPORTS and music"));
        assert_eq!(rec.careers[0].id, "athlete");
    }

    #[test]
    fn interest_and_goal_are_case_sensitive() {
        let rec = classify(&profile("technology", "software", ""));
        assert_eq!(ids(&rec), vec!["generalist"]);
    }

    #[test]
    fn technology_wins_over_medical_and_sports() {
        let rec = classify(&profile("Technology", "Doctor", "sport"));
        assert_eq!(rec.careers[0].id, "data-scientist");

        let rec = classify(&profile("Medical", "", "sport"));
        assert_eq!(rec.careers[0].id, "doctor");
    }

    #[test]
    fn empty_profile_falls_back() {
        let rec = classify(&StudentProfile::default());
        assert_eq!(ids(&rec), vec!["generalist"]);
        assert!(rec.careers[0].recommended);
    }

    #[test]
    fn classify_echoes_student() {
        let p = profile("Business", "Economist", "chess");
        let rec = classify(&p);
        assert_eq!(rec.student, p);
    }

    #[test]
    fn career_routes_exist_in_preview_table() {
        let lists: [&[CareerEntry]; 4] = [
            &TECHNOLOGY_CAREERS,
            &MEDICAL_CAREERS,
            &SPORTS_CAREERS,
            &FALLBACK_CAREERS,
        ];
        for list in lists {
            for entry in list {
                assert!(!entry.routes.is_empty(), "{} has no routes", entry.id);
                for route in entry.routes {
                    assert!(
                        PREVIEW_GRAPH.route_by_id(*route).is_some(),
                        "{} references unknown route {:?}",
                        entry.id,
                        route
                    );
                }
            }
        }
    }

    #[test]
    fn every_list_leads_with_single_recommendation() {
        let lists: [&[CareerEntry]; 4] = [
            &TECHNOLOGY_CAREERS,
            &MEDICAL_CAREERS,
            &SPORTS_CAREERS,
            &FALLBACK_CAREERS,
        ];
        for list in lists {
            assert!(list[0].recommended);
            assert_eq!(list.iter().filter(|c| c.recommended).count(), 1);
        }
    }

    #[test]
    fn matched_rule_names_the_category() {
        assert_eq!(classify(&profile("Technology", "", "")).matched_rule, Some("technology"));
        assert_eq!(classify(&profile("", "Doctor", "")).matched_rule, Some("medical"));
        assert_eq!(classify(&profile("", "", "Sports")).matched_rule, Some("sports"));
        assert_eq!(classify(&profile("Arts", "", "")).matched_rule, None);
    }

    #[test]
    fn rule_names_are_unique() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn resolve_career_by_id_or_first() {
        let rec = classify(&profile("Technology", "", ""));
        let picked = resolve_career(&rec.careers, Some("mentor")).unwrap();
        assert_eq!(picked.id, "mentor");

        let fallback = resolve_career(&rec.careers, Some("astronaut")).unwrap();
        assert_eq!(fallback.id, "data-scientist");

        let none_selected = resolve_career(&rec.careers, None).unwrap();
        assert_eq!(none_selected.id, "data-scientist");

        assert!(resolve_career(&[], Some("mentor")).is_none());
    }
}
