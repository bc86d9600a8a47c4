use crate::config::{
    PARTICLE_DRIFT, PARTICLE_FALL, STORY_LAYER_STAGGER, SWEEP_OPACITY, SWEEP_SPAN, SWEEP_START,
    SWEEP_TRAVEL_PERCENT, WORK_TRAVEL,
};
use crate::motion::math::{clamp, ease_out, lerp};

/// Cosmetic parameters of one parallax layer in the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerConfig {
    pub selector: &'static str,
    pub speed_x: f64,
    pub speed_y: f64,
    pub scale: (f64, f64),
    pub rotate: (f64, f64),
    pub opacity: (f64, f64),
    /// Slice of hero progress during which this layer moves.
    pub gate: (f64, f64),
    pub climax_boost: Option<f64>,
    pub climax_opacity: Option<f64>,
}

const fn layer(
    selector: &'static str,
    speed_y: f64,
    speed_x: f64,
    scale: (f64, f64),
    rotate: (f64, f64),
    opacity: (f64, f64),
    gate: (f64, f64),
) -> LayerConfig {
    LayerConfig {
        selector,
        speed_x,
        speed_y,
        scale,
        rotate,
        opacity,
        gate,
        climax_boost: None,
        climax_opacity: None,
    }
}

pub const HERO_LAYERS: &[LayerConfig] = &[
    layer(".layer-grid", -120.0, 0.0, (1.0, 1.06), (-0.6, 0.6), (0.35, 0.65), (0.0, 1.0)),
    layer(".layer-noise", 16.0, 8.0, (1.0, 1.02), (0.0, 0.0), (0.06, 0.12), (0.0, 1.0)),
    layer(".layer-lines", 140.0, -40.0, (1.0, 1.03), (-2.0, 2.0), (0.05, 0.32), (0.1, 0.92)),
    layer(".layer-shape-a", -160.0, 30.0, (0.96, 1.08), (-3.0, 2.0), (0.18, 0.7), (0.0, 1.0)),
    layer(".layer-shape-b", 120.0, -26.0, (0.92, 1.06), (1.0, -2.0), (0.16, 0.6), (0.0, 1.0)),
    LayerConfig {
        climax_boost: Some(0.04),
        ..layer(".layer-card-a", -80.0, 18.0, (0.92, 1.08), (-4.0, 2.0), (0.3, 1.0), (0.05, 0.95))
    },
    LayerConfig {
        climax_boost: Some(0.03),
        ..layer(".layer-card-b", 110.0, -14.0, (0.9, 1.06), (3.0, -2.0), (0.28, 0.9), (0.08, 0.92))
    },
    LayerConfig {
        climax_opacity: Some(0.2),
        ..layer(".layer-typo", 40.0, 0.0, (1.0, 1.02), (0.0, 0.0), (0.0, 0.85), (0.28, 0.9))
    },
    layer(".layer-focus", 0.0, 0.0, (1.0, 1.02), (0.0, 0.0), (0.4, 0.8), (0.0, 1.0)),
];

pub const STORY_LAYER_SPEEDS: [f64; 5] = [12.0, 24.0, 38.0, 60.0, -18.0];
pub const STORY_LAYER_SCALES: [f64; 5] = [0.01, 0.02, 0.04, 0.0, 0.0];

/// Resolved values for one layer on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub opacity: f64,
}

impl LayerPose {
    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }
}

impl LayerConfig {
    /// Local progress inside the gate window, unsmoothed.
    pub fn gated(&self, progress: f64) -> f64 {
        let (start, end) = self.gate;
        clamp((progress - start) / (end - start).max(0.0001), 0.0, 1.0)
    }

    pub fn pose(&self, progress: f64, in_climax: bool) -> LayerPose {
        let g = self.gated(progress);
        let eased = ease_out(g);

        // translation follows raw progress so the swing reads as physical
        let mut pose = LayerPose {
            x: lerp(0.0, self.speed_x, g),
            y: lerp(0.0, self.speed_y, g),
            scale: lerp(self.scale.0, self.scale.1, eased),
            rotate: lerp(self.rotate.0, self.rotate.1, g),
            opacity: lerp(self.opacity.0, self.opacity.1, g),
        };

        if in_climax {
            if let Some(boost) = self.climax_boost {
                pose.scale += boost;
            }
            if let Some(boost) = self.climax_opacity {
                pose.opacity = clamp(pose.opacity + boost, 0.0, 1.0);
            }
        }
        pose
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPose {
    pub x_percent: f64,
    pub opacity: f64,
}

impl SweepPose {
    pub fn transform(&self) -> String {
        format!("translate3d({}%, 0, 0)", self.x_percent)
    }
}

/// The light sweep crosses the hero once, just ahead of the climax.
pub fn sweep(progress: f64) -> SweepPose {
    let phase = clamp((progress - SWEEP_START) / SWEEP_SPAN, 0.0, 1.0);
    SweepPose {
        x_percent: lerp(-SWEEP_TRAVEL_PERCENT, SWEEP_TRAVEL_PERCENT, phase),
        opacity: if phase > 0.0 && phase < 1.0 { SWEEP_OPACITY } else { 0.0 },
    }
}

/// Drift of one particle dot for the given hero progress.
pub fn particle_offset(progress: f64, depth: f64) -> (f64, f64) {
    let y = progress * depth * PARTICLE_FALL;
    let x = ((progress + depth) * 6.28).sin() * depth * PARTICLE_DRIFT;
    (x, y)
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate3d({}px, {}px, 0)", x, y)
}

/// Story layer `index` is offset a little further along than the one before it.
pub fn story_layer(progress: f64, index: usize) -> (f64, f64) {
    let local = clamp(progress + index as f64 * STORY_LAYER_STAGGER, 0.0, 1.0);
    let speed = STORY_LAYER_SPEEDS.get(index).copied().unwrap_or(0.0);
    let scale = STORY_LAYER_SCALES.get(index).copied().unwrap_or(0.0);
    (local * speed, 1.0 + local * scale)
}

pub fn story_shine_opacity(progress: f64) -> f64 {
    lerp(0.3, 0.8, progress)
}

/// Vertical counter-shift of a work poster, driven by how far its center sits
/// from the middle of the viewport.
pub fn work_poster_shift(rect_top: f64, rect_height: f64, viewport_h: f64, depth: f64) -> f64 {
    let distance = (rect_top + rect_height / 2.0) - viewport_h / 2.0;
    let ratio = clamp(distance / viewport_h.max(1.0), -1.0, 1.0);
    -ratio * depth * WORK_TRAVEL
}

/// Index of the rect whose center is nearest `focus_y`. Ties keep the earliest.
pub fn closest_to_line(rects: &[(f64, f64)], focus_y: f64) -> usize {
    let mut active = 0;
    let mut best = f64::INFINITY;
    for (i, (top, height)) in rects.iter().enumerate() {
        let distance = ((top + height / 2.0) - focus_y).abs();
        if distance < best {
            best = distance;
            active = i;
        }
    }
    active
}
