use crate::config::STICKY_LEAD;
use crate::motion::math::clamp;

/// Cached offsets of the measured sections. Heights are never zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub hero_top: f64,
    pub hero_height: f64,
    pub story_top: f64,
    pub story_height: f64,
    pub story_sticky_h: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            hero_top: 0.0,
            hero_height: 1.0,
            story_top: 0.0,
            story_height: 1.0,
            story_sticky_h: 1.0,
        }
    }
}

impl Layout {
    pub fn new(
        hero_top: f64,
        hero_height: f64,
        story_top: f64,
        story_height: f64,
        story_sticky_h: f64,
    ) -> Self {
        Self {
            hero_top,
            hero_height: or_one(hero_height),
            story_top,
            story_height: or_one(story_height),
            story_sticky_h: or_one(story_sticky_h),
        }
    }
}

// offsetHeight is 0 for hidden elements
fn or_one(h: f64) -> f64 {
    if h > 0.0 { h } else { 1.0 }
}

/// Scroll position and viewport as last reported by the listeners.
#[derive(Clone, Debug)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_w: f64,
    pub viewport_h: f64,
    pub layout: Layout,
    dirty: bool,
}

/// Everything a single frame reads, copied out of [`ScrollState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub scroll_y: f64,
    pub viewport_h: f64,
    pub layout: Layout,
}

impl ScrollState {
    pub fn new(scroll_y: f64, viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            scroll_y,
            viewport_w,
            viewport_h,
            layout: Layout::default(),
            dirty: true,
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        self.dirty = true;
    }

    /// The layout is swapped in together with the new size, so the frame
    /// that follows never mixes a fresh viewport with stale offsets.
    pub fn on_resize(&mut self, viewport_w: f64, viewport_h: f64, layout: Layout) {
        self.viewport_w = viewport_w;
        self.viewport_h = viewport_h;
        self.layout = layout;
        self.dirty = true;
    }

    /// Hands out the frame input and clears the dirty flag, or `None` when
    /// nothing changed since the last applied pass.
    pub fn take_frame(&mut self) -> Option<FrameInput> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(FrameInput {
            scroll_y: self.scroll_y,
            viewport_h: self.viewport_h,
            layout: self.layout,
        })
    }
}

impl FrameInput {
    pub fn hero_progress(&self) -> f64 {
        let denom = (self.layout.hero_height - self.viewport_h).max(1.0);
        clamp((self.scroll_y - self.layout.hero_top) / denom, 0.0, 1.0)
    }

    /// Progress through the pinned story section, measured against the
    /// distance the sticky block actually travels.
    pub fn story_progress(&self) -> f64 {
        let denom = (self.layout.story_height - self.layout.story_sticky_h).max(1.0);
        let raw = (self.scroll_y - self.layout.story_top + self.viewport_h * STICKY_LEAD) / denom;
        clamp(raw, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Layout {
        Layout::new(0.0, 4000.0, 4800.0, 3000.0, 800.0)
    }

    fn input(scroll_y: f64, viewport_h: f64, layout: Layout) -> FrameInput {
        FrameInput { scroll_y, viewport_h, layout }
    }

    #[test]
    fn progress_stays_in_unit_range_for_any_offset() {
        let layouts = [page(), Layout::default(), Layout::new(100.0, 0.0, 50.0, 0.0, 0.0)];
        for layout in layouts {
            let mut y = -2000.0;
            while y < 20000.0 {
                for vh in [0.0, 320.0, 900.0, 6000.0] {
                    let f = input(y, vh, layout);
                    let (hero, story) = (f.hero_progress(), f.story_progress());
                    assert!((0.0..=1.0).contains(&hero), "hero {hero} at y={y} vh={vh}");
                    assert!((0.0..=1.0).contains(&story), "story {story} at y={y} vh={vh}");
                }
                y += 37.0;
            }
        }
    }

    #[test]
    fn hero_progress_endpoints() {
        let layout = page();
        assert_eq!(input(0.0, 1000.0, layout).hero_progress(), 0.0);
        assert_eq!(input(1500.0, 1000.0, layout).hero_progress(), 0.5);
        assert_eq!(input(3000.0, 1000.0, layout).hero_progress(), 1.0);
    }

    #[test]
    fn hero_shorter_than_viewport_does_not_divide_by_zero() {
        let layout = Layout::new(0.0, 600.0, 0.0, 1.0, 1.0);
        let f = input(0.5, 900.0, layout);
        assert_eq!(f.hero_progress(), 0.5);
    }

    #[test]
    fn story_progress_leads_by_a_tenth_of_the_viewport() {
        let layout = page();
        // travel = 3000 - 800 = 2200, lead = 100
        assert_eq!(input(4700.0, 1000.0, layout).story_progress(), 0.0);
        assert_eq!(input(5800.0, 1000.0, layout).story_progress(), 0.5);
        assert_eq!(input(6900.0, 1000.0, layout).story_progress(), 1.0);
    }

    #[test]
    fn zero_heights_are_replaced() {
        let layout = Layout::new(10.0, 0.0, 20.0, -4.0, 0.0);
        assert_eq!(layout.hero_height, 1.0);
        assert_eq!(layout.story_height, 1.0);
        assert_eq!(layout.story_sticky_h, 1.0);
    }

    #[test]
    fn frames_are_only_handed_out_when_dirty() {
        let mut state = ScrollState::new(0.0, 1280.0, 800.0);
        assert!(state.take_frame().is_some());
        assert!(state.take_frame().is_none());

        state.on_scroll(120.0);
        let frame = state.take_frame().expect("scroll dirties the state");
        assert_eq!(frame.scroll_y, 120.0);
        assert!(state.take_frame().is_none());
    }

    #[test]
    fn resize_layout_is_used_by_the_next_frame() {
        let mut state = ScrollState::new(1000.0, 1280.0, 1000.0);
        state.on_resize(1280.0, 1000.0, page());
        let _ = state.take_frame();

        // hero grows after a reflow: same scroll offset, smaller ratio
        let taller = Layout::new(0.0, 5000.0, 5800.0, 3000.0, 800.0);
        state.on_resize(1280.0, 1000.0, taller);
        let frame = state.take_frame().expect("resize dirties the state");
        assert_eq!(frame.layout, taller);
        assert_eq!(frame.hero_progress(), 0.25);
    }
}
