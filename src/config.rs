use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Nav switches to its compact look past this many pixels
pub const NAV_SCROLLED_THRESHOLD: f64 = 60.0;

// Open interval of hero progress that gets the extra scale/opacity
pub const CLIMAX_WINDOW: (f64, f64) = (0.65, 0.85);

pub const SWEEP_START: f64 = 0.62;
pub const SWEEP_SPAN: f64 = 0.2;
pub const SWEEP_TRAVEL_PERCENT: f64 = 80.0;
pub const SWEEP_OPACITY: f64 = 0.8;

pub const PARTICLE_COUNT: usize = 18;
pub const PARTICLE_DEPTH_MIN: f64 = 0.06;
pub const PARTICLE_DEPTH_RANGE: f64 = 0.35;
pub const PARTICLE_FALL: f64 = 260.0;
pub const PARTICLE_DRIFT: f64 = 80.0;
pub const PARTICLE_DEFAULT_DEPTH: f64 = 0.1;

pub const REVEAL_THRESHOLD: f64 = 0.15;

// Fraction of the viewport height added to scrollY so the story starts
// animating slightly before its top reaches the top of the screen
pub const STICKY_LEAD: f64 = 0.1;

pub const STORY_LAYER_STAGGER: f64 = 0.04;

pub const WORK_DEFAULT_DEPTH: f64 = 0.15;
pub const WORK_TRAVEL: f64 = 80.0;

// Process step closest to this fraction of the viewport is highlighted
pub const PROCESS_FOCUS_LINE: f64 = 0.4;
