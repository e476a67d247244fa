//! Semantic action IDs for click targets, grouped by page.

// ── Landing ──────────────────────────────────────────────────
pub const START_PROFILE: u16 = 1;
pub const OPEN_CAREER_MAP: u16 = 2;
pub const CLEAR_DATA: u16 = 3;
pub const PREVIEW_ROUTE_BASE: u16 = 10; // +index 0..3

// ── Student form ─────────────────────────────────────────────
pub const FOCUS_FIELD_BASE: u16 = 100; // +Field index
pub const EDUCATION_BASE: u16 = 120; // +index 0..2
pub const INTEREST_BASE: u16 = 130; // +index 0..3
pub const GOAL_BASE: u16 = 140; // +index 0..2
pub const SUBMIT_PROFILE: u16 = 150;
pub const CANCEL_PROFILE: u16 = 151;

// ── Career list ──────────────────────────────────────────────
pub const CHOOSE_CAREER_BASE: u16 = 200; // +index
pub const EDIT_PROFILE: u16 = 250;

// ── Career map ───────────────────────────────────────────────
pub const SELECT_STAGE_BASE: u16 = 300; // +MAP_GRAPH stage index
pub const COMPLETE_STAGE: u16 = 320;
pub const REROUTE: u16 = 321;
pub const CHANGE_INTEREST: u16 = 322;
pub const SHOW_BEST: u16 = 323;
pub const SHOW_ALTERNATE: u16 = 324;
pub const BACK_TO_CAREERS: u16 = 325;

// ── Not found ────────────────────────────────────────────────
pub const RETURN_HOME: u16 = 400;
