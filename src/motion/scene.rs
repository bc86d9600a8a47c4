//! Composes everything one frame writes, without touching the DOM.
//!
//! Reduced motion is applied here: frames built with `reduced_motion` carry
//! no transforms at all, only opacities, widths, text and active indices.

use crate::config::{CLIMAX_WINDOW, NAV_SCROLLED_THRESHOLD, PROCESS_FOCUS_LINE};
use crate::motion::layers::{
    closest_to_line, particle_offset, story_layer, story_shine_opacity, sweep, translate,
    work_poster_shift, HERO_LAYERS,
};
use crate::motion::math::step_index;
use crate::motion::phrases::{caption, MICRO_CAPTIONS, PHRASES, STORY_CAPTIONS};

#[derive(Clone, Debug, PartialEq)]
pub struct LayerStyle {
    pub transform: Option<String>,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroFrame {
    pub progress: f64,
    pub phrase_index: usize,
    pub micro_caption: &'static str,
    pub fill_width: String,
    /// Parallel to `HERO_LAYERS`.
    pub layers: Vec<LayerStyle>,
    pub sweep: LayerStyle,
    pub in_climax: bool,
}

pub fn in_climax(progress: f64) -> bool {
    progress > CLIMAX_WINDOW.0 && progress < CLIMAX_WINDOW.1
}

fn motion(reduced_motion: bool, transform: impl FnOnce() -> String) -> Option<String> {
    if reduced_motion { None } else { Some(transform()) }
}

pub fn hero_frame(progress: f64, reduced_motion: bool) -> HeroFrame {
    let phrase_index = step_index(progress, PHRASES.len());
    let climax = in_climax(progress);

    let layers = HERO_LAYERS
        .iter()
        .map(|cfg| {
            let pose = cfg.pose(progress, climax);
            LayerStyle {
                transform: motion(reduced_motion, || pose.transform()),
                opacity: pose.opacity,
            }
        })
        .collect();

    let sweep_pose = sweep(progress);

    HeroFrame {
        progress,
        phrase_index,
        micro_caption: caption(MICRO_CAPTIONS, phrase_index),
        fill_width: format!("{}%", progress * 100.0),
        layers,
        sweep: LayerStyle {
            transform: motion(reduced_motion, || sweep_pose.transform()),
            opacity: sweep_pose.opacity,
        },
        in_climax: climax,
    }
}

/// Particle transforms for the given depths; empty under reduced motion.
pub fn particle_transforms(progress: f64, depths: &[f64], reduced_motion: bool) -> Vec<String> {
    if reduced_motion {
        return Vec::new();
    }
    depths
        .iter()
        .map(|&depth| {
            let (x, y) = particle_offset(progress, depth);
            translate(x, y)
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryFrame {
    pub step_index: usize,
    pub caption: &'static str,
    /// One entry per story layer, `None` under reduced motion.
    pub layers: Vec<Option<String>>,
    pub shine_opacity: f64,
}

pub fn story_frame(
    progress: f64,
    steps: usize,
    layer_count: usize,
    reduced_motion: bool,
) -> StoryFrame {
    let step = step_index(progress, steps);
    let layers = (0..layer_count)
        .map(|i| {
            motion(reduced_motion, || {
                let (y, s) = story_layer(progress, i);
                format!("translate3d(0, {}px, 0) scale({})", y, s)
            })
        })
        .collect();

    StoryFrame {
        step_index: step,
        caption: caption(STORY_CAPTIONS, step),
        layers,
        shine_opacity: story_shine_opacity(progress),
    }
}

/// `posters` holds `(rect_top, rect_height, depth)` for each work poster.
pub fn work_transforms(
    posters: &[(f64, f64, f64)],
    viewport_h: f64,
    reduced_motion: bool,
) -> Vec<Option<String>> {
    posters
        .iter()
        .map(|&(top, height, depth)| {
            motion(reduced_motion, || {
                translate(0.0, work_poster_shift(top, height, viewport_h, depth))
            })
        })
        .collect()
}

pub fn process_active(rects: &[(f64, f64)], viewport_h: f64) -> usize {
    closest_to_line(rects, viewport_h * PROCESS_FOCUS_LINE)
}

pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}
