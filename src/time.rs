//! Frame clock: turns draw-loop timestamps into whole ticks.
//!
//! `draw_web()` fires at the display refresh rate with uneven gaps. Pages
//! that wait on wall time (the analyzing screen) count ticks instead, which
//! keeps them deterministic under test.

pub const TICKS_PER_SEC: u32 = 10;

/// Longest gap credited for one frame. A tab coming back from the
/// background should not skip a whole page in one frame.
const MAX_FRAME_MS: f64 = 500.0;

pub struct FrameClock {
    ms_per_tick: f64,
    /// Milliseconds not yet turned into a tick.
    carry_ms: f64,
    last_frame_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            carry_ms: 0.0,
            last_frame_ms: None,
        }
    }

    /// Feed the current timestamp (`performance.now()`), get the number of
    /// ticks that elapsed since the previous frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_frame_ms {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        self.carry_ms += delta;
        let ticks = (self.carry_ms / self.ms_per_tick) as u32;
        self.carry_ms -= ticks as f64 * self.ms_per_tick;
        ticks
    }
}

/// Ticks covering `ms` milliseconds at [`TICKS_PER_SEC`], rounded up.
pub const fn ticks_for_ms(ms: u32) -> u32 {
    (ms * TICKS_PER_SEC).div_ceil(1000)
}
