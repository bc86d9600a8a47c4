use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Math};
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

use crate::config::{
    PARTICLE_COUNT, PARTICLE_DEFAULT_DEPTH, PARTICLE_DEPTH_MIN, PARTICLE_DEPTH_RANGE,
    REDUCED_MOTION_QUERY, REVEAL_THRESHOLD, WORK_DEFAULT_DEPTH,
};
use crate::motion::layers::HERO_LAYERS;
use crate::motion::phrases::{PhraseCarousel, PHRASES};
use crate::motion::progress::{FrameInput, Layout, ScrollState};
use crate::motion::scene::{
    hero_frame, nav_scrolled, particle_transforms, process_active, story_frame, work_transforms,
    LayerStyle,
};

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else { return Vec::new() };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn html_elements(list: Result<NodeList, JsValue>) -> Vec<HtmlElement> {
    elements(list)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn required<T>(found: Option<T>, what: &str) -> Result<T, JsValue> {
    found.ok_or_else(|| JsValue::from_str(&format!("missing element: {}", what)))
}

fn depth_of(el: &HtmlElement, default: f64) -> f64 {
    el.dataset()
        .get("depth")
        .and_then(|d| d.parse::<f64>().ok())
        .unwrap_or(default)
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

fn apply(el: &HtmlElement, style: &LayerStyle) {
    if let Some(transform) = &style.transform {
        set_style(el, "transform", transform);
    }
    set_style(el, "opacity", &style.opacity.to_string());
}

fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn viewport(window: &Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

struct Hero {
    section: HtmlElement,
    phrases: PhraseCarousel<Element>,
    progress_fill: Option<HtmlElement>,
    micro: Option<Element>,
    /// Parallel to `HERO_LAYERS`; absent layers are skipped.
    layers: Vec<Option<HtmlElement>>,
    sweep: Option<HtmlElement>,
    particle_layer: Option<HtmlElement>,
    particles: Vec<(HtmlElement, f64)>,
}

struct Story {
    section: HtmlElement,
    sticky: HtmlElement,
    steps: Vec<Element>,
    layers: Vec<HtmlElement>,
    caption: Option<Element>,
}

/// Element handles plus the scroll state, shared between listeners and the
/// frame callback.
struct Stage {
    state: ScrollState,
    reduced_motion: bool,
    nav: Option<Element>,
    hero: Hero,
    story: Story,
    work_posters: Vec<(HtmlElement, f64)>,
    process_steps: Vec<Element>,
}

impl Stage {
    /// Looks up every element the effects drive. Only reads the DOM, so a
    /// missing required element leaves the page untouched.
    fn resolve(
        document: &Document,
        state: ScrollState,
        reduced_motion: bool,
    ) -> Result<Self, JsValue> {
        let hero_section = required(
            document.get_element_by_id("hero").and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            "#hero",
        )?;
        let current = required(
            query(document, ".hero__phrase--current"),
            ".hero__phrase--current",
        )?;
        let next = required(query(document, ".hero__phrase--next"), ".hero__phrase--next")?;

        let story_section = required(
            document.get_element_by_id("story").and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            "#story",
        )?;
        let sticky = required(
            story_section
                .query_selector(".story__layers")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            ".story__layers",
        )?;

        let hero = Hero {
            section: hero_section,
            phrases: PhraseCarousel::new(current, next, PHRASES.len()),
            progress_fill: query_html(document, ".hero__progress-fill"),
            micro: query(document, ".hero__micro"),
            layers: HERO_LAYERS
                .iter()
                .map(|cfg| query_html(document, cfg.selector))
                .collect(),
            sweep: query_html(document, ".layer-sweep"),
            particle_layer: query_html(document, ".layer-particles"),
            particles: Vec::new(),
        };

        let story = Story {
            steps: elements(story_section.query_selector_all(".story__steps li")),
            layers: html_elements(story_section.query_selector_all(".story__layers .layer")),
            caption: story_section.query_selector(".story__caption").ok().flatten(),
            section: story_section,
            sticky,
        };

        let work_posters = html_elements(document.query_selector_all(".work__poster"))
            .into_iter()
            .map(|el| {
                let depth = depth_of(&el, WORK_DEFAULT_DEPTH);
                (el, depth)
            })
            .collect();

        Ok(Self {
            state,
            reduced_motion,
            nav: query(document, ".nav"),
            hero,
            story,
            work_posters,
            process_steps: elements(document.query_selector_all(".process__step")),
        })
    }

    fn measure_layout(&self) -> Layout {
        let layout = Layout::new(
            self.hero.section.offset_top() as f64,
            self.hero.section.offset_height() as f64,
            self.story.section.offset_top() as f64,
            self.story.section.offset_height() as f64,
            self.story.sticky.offset_height() as f64,
        );
        debug!("Measured layout {:?}", layout);
        layout
    }

    fn seed_particles(&mut self, document: &Document) {
        if let Some(layer) = &self.hero.particle_layer {
            self.hero.particles = seed_particles(document, layer);
        }
    }

    fn resize(&mut self, window: &Window) {
        let (w, h) = viewport(window);
        let layout = self.measure_layout();
        self.state.on_resize(w, h, layout);
        debug!("Viewport {}x{}", self.state.viewport_w, self.state.viewport_h);
    }

    /// Runs every animation frame; only writes when something moved.
    fn frame(&mut self) {
        let Some(input) = self.state.take_frame() else {
            return;
        };
        self.update_nav(&input);
        self.update_hero(&input);
        self.update_story(&input);
        self.update_work(&input);
        self.update_process(&input);
    }

    fn update_nav(&self, input: &FrameInput) {
        if let Some(nav) = &self.nav {
            toggle_class(nav, "is-scrolled", nav_scrolled(input.scroll_y));
        }
    }

    fn update_hero(&mut self, input: &FrameInput) {
        let frame = hero_frame(input.hero_progress(), self.reduced_motion);

        if let Some((incoming, outgoing)) = self.hero.phrases.advance(frame.phrase_index) {
            incoming.set_text_content(PHRASES.get(frame.phrase_index).copied());
            toggle_class(incoming, "hero__phrase--current", true);
            toggle_class(incoming, "hero__phrase--next", false);
            toggle_class(outgoing, "hero__phrase--next", true);
            toggle_class(outgoing, "hero__phrase--current", false);
            debug!(
                "Hero phrase {} (progress {:.3}, climax: {})",
                frame.phrase_index, frame.progress, frame.in_climax
            );
        }

        if let Some(fill) = &self.hero.progress_fill {
            set_style(fill, "width", &frame.fill_width);
        }
        if let Some(micro) = &self.hero.micro {
            micro.set_text_content(Some(frame.micro_caption));
        }

        for (el, style) in self.hero.layers.iter().zip(&frame.layers) {
            if let Some(el) = el {
                apply(el, style);
            }
        }

        if let Some(sweep) = &self.hero.sweep {
            apply(sweep, &frame.sweep);
        }

        let depths: Vec<f64> = self.hero.particles.iter().map(|(_, d)| *d).collect();
        let transforms = particle_transforms(frame.progress, &depths, self.reduced_motion);
        for ((dot, _), transform) in self.hero.particles.iter().zip(&transforms) {
            set_style(dot, "transform", transform);
        }
    }

    fn update_story(&self, input: &FrameInput) {
        let story = &self.story;
        let frame = story_frame(
            input.story_progress(),
            story.steps.len(),
            story.layers.len(),
            self.reduced_motion,
        );

        for (i, step) in story.steps.iter().enumerate() {
            toggle_class(step, "is-active", i == frame.step_index);
        }
        if let Some(caption) = &story.caption {
            caption.set_text_content(Some(frame.caption));
        }

        for (layer, transform) in story.layers.iter().zip(&frame.layers) {
            if let Some(transform) = transform {
                set_style(layer, "transform", transform);
            }
            if layer.class_list().contains("shine") {
                set_style(layer, "opacity", &frame.shine_opacity.to_string());
            }
        }
    }

    fn update_work(&self, input: &FrameInput) {
        if self.reduced_motion {
            return;
        }
        // read every rect before the first write
        let posters: Vec<(f64, f64, f64)> = self
            .work_posters
            .iter()
            .map(|(el, depth)| {
                let rect = el.get_bounding_client_rect();
                (rect.top(), rect.height(), *depth)
            })
            .collect();
        let transforms = work_transforms(&posters, input.viewport_h, false);
        for ((el, _), transform) in self.work_posters.iter().zip(transforms) {
            if let Some(transform) = transform {
                set_style(el, "transform", &transform);
            }
        }
    }

    fn update_process(&self, input: &FrameInput) {
        if self.process_steps.is_empty() {
            return;
        }
        let rects: Vec<(f64, f64)> = self
            .process_steps
            .iter()
            .map(|step| {
                let rect = step.get_bounding_client_rect();
                (rect.top(), rect.height())
            })
            .collect();
        let active = process_active(&rects, input.viewport_h);
        for (i, step) in self.process_steps.iter().enumerate() {
            toggle_class(step, "is-active", i == active);
        }
    }
}

fn seed_particles(document: &Document, layer: &HtmlElement) -> Vec<(HtmlElement, f64)> {
    let fragment = document.create_document_fragment();
    for _ in 0..PARTICLE_COUNT {
        let Some(dot) = document
            .create_element("span")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let depth = PARTICLE_DEPTH_MIN + Math::random() * PARTICLE_DEPTH_RANGE;
        let _ = dot.dataset().set("depth", &format!("{:.3}", depth));
        set_style(&dot, "left", &format!("{}%", Math::random() * 100.0));
        set_style(&dot, "top", &format!("{}%", Math::random() * 100.0));
        let _ = fragment.append_child(&dot);
    }
    let _ = layer.append_child(&fragment);

    // pick up any dots that were already in the markup too
    let children = layer.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|dot| {
            let depth = depth_of(&dot, PARTICLE_DEFAULT_DEPTH);
            (dot, depth)
        })
        .collect()
}

fn observe_reveals(
    reveals: &[Element],
    reduced_motion: bool,
) -> Result<Option<(IntersectionObserver, RevealCallback)>, JsValue> {
    if reduced_motion {
        for el in reveals {
            let _ = el.class_list().add_1("reveal-in");
        }
        return Ok(None);
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1("reveal-in");
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in reveals {
        observer.observe(el);
    }
    Ok(Some((observer, callback)))
}

/// Owns the listeners and the frame loop. Dropping it stops all effects and
/// unregisters whatever was registered, so a half-finished mount cleans up
/// after itself too.
pub struct Animator {
    window: Window,
    stage: Rc<RefCell<Stage>>,
    frame_loop: FrameLoop,
    frame_id: Rc<Cell<Option<i32>>>,
    on_scroll: Option<Closure<dyn FnMut()>>,
    on_resize: Option<Closure<dyn FnMut()>>,
    reveals: Option<(IntersectionObserver, RevealCallback)>,
}

impl Animator {
    pub fn mount() -> Result<Self, JsValue> {
        let window = required(web_sys::window(), "window")?;
        let document = required(window.document(), "document")?;

        let reduced_motion = prefers_reduced_motion(&window);
        let (w, h) = viewport(&window);
        let state = ScrollState::new(window.scroll_y().unwrap_or(0.0), w, h);
        let stage = Stage::resolve(&document, state, reduced_motion)?;

        let mut animator = Self {
            window: window.clone(),
            stage: Rc::new(RefCell::new(stage)),
            frame_loop: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            on_scroll: None,
            on_resize: None,
            reveals: None,
        };

        // Fallible registrations first; an early return drops `animator`,
        // which removes anything registered so far.
        animator.listen()?;
        animator.start_loop()?;
        let reveals = elements(document.query_selector_all(".reveal"));
        animator.reveals = observe_reveals(&reveals, reduced_motion)?;

        // Nothing below can fail, the page is only written from here on
        if reduced_motion {
            if let Some(body) = document.body() {
                let _ = body.class_list().add_1("reduce-motion");
            }
        }
        {
            let mut stage = animator.stage.borrow_mut();
            stage.seed_particles(&document);
            stage.resize(&window);
            stage.frame();
        }

        info!(
            "Scroll animator mounted ({} hero layers, {} story steps, reduced motion: {})",
            HERO_LAYERS.len(),
            animator.stage.borrow().story.steps.len(),
            reduced_motion
        );
        Ok(animator)
    }

    fn listen(&mut self) -> Result<(), JsValue> {
        let on_scroll = {
            let stage = self.stage.clone();
            let window = self.window.clone();
            Closure::wrap(Box::new(move || {
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                stage.borrow_mut().state.on_scroll(scroll_y);
            }) as Box<dyn FnMut()>)
        };
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )?;
        self.on_scroll = Some(on_scroll);

        let on_resize = {
            let stage = self.stage.clone();
            let window = self.window.clone();
            Closure::wrap(Box::new(move || {
                stage.borrow_mut().resize(&window);
            }) as Box<dyn FnMut()>)
        };
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);
        Ok(())
    }

    fn start_loop(&mut self) -> Result<(), JsValue> {
        {
            let next_frame = self.frame_loop.clone();
            let stage = self.stage.clone();
            let window = self.window.clone();
            let frame_id = self.frame_id.clone();
            *self.frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                stage.borrow_mut().frame();
                if let Some(callback) = next_frame.borrow().as_ref() {
                    let next = window.request_animation_frame(callback.as_ref().unchecked_ref());
                    frame_id.set(next.ok());
                }
            }) as Box<dyn FnMut()>));
        }
        if let Some(callback) = self.frame_loop.borrow().as_ref() {
            let id = self.window.request_animation_frame(callback.as_ref().unchecked_ref())?;
            self.frame_id.set(Some(id));
        }
        Ok(())
    }

    /// Index of the phrase currently shown in the hero.
    pub fn phrase_index(&self) -> usize {
        self.stage.borrow().hero.phrases.index()
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // the closure holds a handle to its own slot, clearing it breaks the cycle
        self.frame_loop.borrow_mut().take();

        if let Some(on_scroll) = &self.on_scroll {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }
        if let Some(on_resize) = &self.on_resize {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        if let Some((observer, _)) = &self.reveals {
            observer.disconnect();
        }
        if self.stage.borrow().reduced_motion {
            if let Some(body) = self.window.document().and_then(|d| d.body()) {
                let _ = body.class_list().remove_1("reduce-motion");
            }
        }
        info!("Scroll animator stopped at phrase {}", self.phrase_index());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::motion::math::step_index;
    use crate::motion::phrases::{MICRO_CAPTIONS, STORY_CAPTIONS};
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::Promise;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"
        <nav class="nav"></nav>
        <section id="hero" style="height: 4000px; position: relative;">
            <p class="hero__phrase hero__phrase--current">x</p>
            <p class="hero__phrase hero__phrase--next"></p>
            <div class="hero__progress-fill"></div>
            <p class="hero__micro"></p>
            <div class="layer layer-grid"></div>
            <div class="layer layer-particles"></div>
        </section>
        <section id="story" style="height: 3000px; position: relative;">
            <div class="story__layers" style="height: 500px;">
                <div class="layer"></div>
                <div class="layer shine"></div>
            </div>
            <ol class="story__steps"><li>a</li><li>b</li><li>c</li></ol>
            <p class="story__caption"></p>
        </section>
    "#;

    fn window() -> Window {
        web_sys::window().unwrap()
    }

    fn document() -> Document {
        window().document().unwrap()
    }

    fn fixture(html: &str) {
        document().body().unwrap().set_inner_html(html);
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn select(selector: &str) -> Element {
        document().query_selector(selector).unwrap().unwrap()
    }

    fn select_html(selector: &str) -> HtmlElement {
        select(selector).dyn_into::<HtmlElement>().unwrap()
    }

    fn stage(reduced_motion: bool) -> Stage {
        let state = ScrollState::new(0.0, 1280.0, 1000.0);
        Stage::resolve(&document(), state, reduced_motion).unwrap()
    }

    fn pinned_layout() -> Layout {
        Layout::new(0.0, 4000.0, 4000.0, 3000.0, 500.0)
    }

    async fn pause(ms: i32) {
        let promise = Promise::new(&mut |resolve, _| {
            let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        });
        let _ = JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    fn mount_requires_the_hero() {
        fixture("<main></main>");
        assert!(Animator::mount().is_err());
    }

    #[wasm_bindgen_test]
    fn failed_mount_leaves_the_page_untouched() {
        fixture(
            r#"<section id="hero">
                <p class="hero__phrase--current"></p>
                <p class="hero__phrase--next"></p>
                <div class="layer-particles"></div>
            </section>"#,
        );
        assert!(Animator::mount().is_err());
        assert_eq!(select(".layer-particles").children().length(), 0);
        assert!(!document().body().unwrap().class_list().contains("reduce-motion"));
    }

    #[wasm_bindgen_test]
    fn first_frame_is_written_on_mount() {
        fixture(FIXTURE);
        let animator = Animator::mount().unwrap();

        assert_eq!(animator.phrase_index(), 0);
        assert_eq!(select(".hero__micro").text_content().unwrap(), MICRO_CAPTIONS[0]);
        assert_eq!(select(".story__caption").text_content().unwrap(), STORY_CAPTIONS[0]);
        assert!(select(".story__steps li").class_list().contains("is-active"));
        assert!(!select(".nav").class_list().contains("is-scrolled"));
    }

    #[wasm_bindgen_test]
    fn particles_are_seeded_once() {
        fixture(FIXTURE);
        let animator = Animator::mount().unwrap();
        let layer = select(".layer-particles");
        assert_eq!(layer.children().length() as usize, PARTICLE_COUNT);
        drop(animator);
        assert_eq!(layer.children().length() as usize, PARTICLE_COUNT);
    }

    #[wasm_bindgen_test]
    fn dropping_a_reduced_motion_animator_clears_the_body_class() {
        fixture(FIXTURE);
        let body = document().body().unwrap();
        body.class_list().add_1("reduce-motion").unwrap();

        // nothing registered yet, as after an early failure in `mount`
        let animator = Animator {
            window: window(),
            stage: Rc::new(RefCell::new(stage(true))),
            frame_loop: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            on_scroll: None,
            on_resize: None,
            reveals: None,
        };
        drop(animator);
        assert!(!body.class_list().contains("reduce-motion"));
    }

    #[wasm_bindgen_test]
    fn phrase_slots_trade_roles_on_swap() {
        fixture(FIXTURE);
        let slots = elements(document().query_selector_all(".hero__phrase"));
        let mut stage = stage(false);
        stage.state.on_resize(1280.0, 1000.0, pinned_layout());
        stage.state.on_scroll(1500.0);
        stage.frame();

        // progress 0.5 over eight phrases
        assert_eq!(stage.hero.phrases.index(), 4);
        let (first, second) = (&slots[0], &slots[1]);
        assert_eq!(second.text_content().unwrap(), PHRASES[4]);
        assert!(second.class_list().contains("hero__phrase--current"));
        assert!(!second.class_list().contains("hero__phrase--next"));
        assert!(first.class_list().contains("hero__phrase--next"));
        assert!(!first.class_list().contains("hero__phrase--current"));
        assert_eq!(select(".hero__micro").text_content().unwrap(), MICRO_CAPTIONS[4]);

        // the slots keep trading on the next change
        stage.state.on_scroll(3000.0);
        stage.frame();
        assert_eq!(first.text_content().unwrap(), PHRASES[PHRASES.len() - 1]);
        assert!(first.class_list().contains("hero__phrase--current"));
        assert!(second.class_list().contains("hero__phrase--next"));
    }

    #[wasm_bindgen_test]
    fn unchanged_index_does_not_rewrite_phrase() {
        fixture(FIXTURE);
        let mut stage = stage(false);
        stage.state.on_resize(1280.0, 1000.0, pinned_layout());
        stage.state.on_scroll(100.0);
        stage.frame();
        // still bucket 0, the markup text stays as rendered
        assert_eq!(select(".hero__phrase--current").text_content().unwrap(), "x");
    }

    #[wasm_bindgen_test]
    fn resize_measures_before_the_next_frame() {
        fixture(FIXTURE);
        let mut stage = stage(false);
        stage.resize(&window());
        stage.state.on_scroll(1800.0);
        stage.frame();

        select_html("#hero").style().set_property("height", "8000px").unwrap();
        stage.resize(&window());
        assert_eq!(stage.state.layout.hero_height, 8000.0);

        let input = FrameInput {
            scroll_y: stage.state.scroll_y,
            viewport_h: stage.state.viewport_h,
            layout: stage.state.layout,
        };
        let expected = step_index(input.hero_progress(), PHRASES.len());
        stage.frame();
        assert_eq!(select(".hero__micro").text_content().unwrap(), MICRO_CAPTIONS[expected]);
    }

    #[wasm_bindgen_test]
    fn reduced_motion_writes_no_transform() {
        fixture(FIXTURE);
        let mut stage = stage(true);
        stage.seed_particles(&document());
        stage.state.on_resize(1280.0, 1000.0, pinned_layout());
        stage.state.on_scroll(1500.0);
        stage.frame();

        let grid = select_html(".layer-grid");
        assert_eq!(grid.style().get_property_value("transform").unwrap(), "");
        assert_ne!(grid.style().get_property_value("opacity").unwrap(), "");

        for (dot, _) in &stage.hero.particles {
            assert_eq!(dot.style().get_property_value("transform").unwrap(), "");
        }
        for layer in &stage.story.layers {
            assert_eq!(layer.style().get_property_value("transform").unwrap(), "");
        }
        let shine = select_html(".story__layers .shine");
        assert_ne!(shine.style().get_property_value("opacity").unwrap(), "");
        assert_eq!(select(".hero__micro").text_content().unwrap(), MICRO_CAPTIONS[4]);
    }

    #[wasm_bindgen_test]
    fn moving_frame_writes_transforms() {
        fixture(FIXTURE);
        let mut stage = stage(false);
        stage.state.on_resize(1280.0, 1000.0, pinned_layout());
        stage.state.on_scroll(2000.0);
        stage.frame();
        let grid = select_html(".layer-grid");
        assert_ne!(grid.style().get_property_value("transform").unwrap(), "");
    }

    #[wasm_bindgen_test]
    fn reduced_motion_reveals_everything_at_once() {
        fixture(r#"<p class="reveal"></p><p class="reveal" style="margin-top: 6000px"></p>"#);
        let reveals = elements(document().query_selector_all(".reveal"));
        let observer = observe_reveals(&reveals, true).unwrap();
        assert!(observer.is_none());
        for el in &reveals {
            assert!(el.class_list().contains("reveal-in"));
        }
    }

    #[wasm_bindgen_test]
    async fn observer_reveals_only_what_is_on_screen() {
        fixture(
            r#"<p class="reveal" style="height: 40px">near</p>
               <p class="reveal" style="height: 40px; margin-top: 6000px">far</p>"#,
        );
        let reveals = elements(document().query_selector_all(".reveal"));
        let armed = observe_reveals(&reveals, false).unwrap();
        assert!(armed.is_some());

        pause(200).await;
        assert!(reveals[0].class_list().contains("reveal-in"));
        assert!(!reveals[1].class_list().contains("reveal-in"));
        if let Some((observer, _)) = &armed {
            observer.disconnect();
        }
    }
}
