use log::{info, warn};
use yew::prelude::*;

use crate::animator::Animator;
use crate::motion::layers::HERO_LAYERS;
use crate::motion::phrases::{MICRO_CAPTIONS, PHRASES, STORY_CAPTIONS, STORY_STEPS};

const WORK: &[(&str, &str, &str)] = &[
    ("Northwind", "Commerce platform rebuild", "0.12"),
    ("Halcyon", "Brand system and site", "0.22"),
    ("Meridian", "Product onboarding", "0.18"),
    ("Basalt", "Design system", "0.28"),
];

const PROCESS: &[(&str, &str)] = &[
    ("Listen", "Workshops, audits and analytics until the real problem is obvious."),
    ("Shape", "Information architecture and prototypes you can click through in week two."),
    ("Build", "Accessible, fast front-ends with a design system behind them."),
    ("Grow", "Measure, learn and ship improvements every sprint after launch."),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Start from the top on mount, then hand the page over to the animator
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                let animator = match Animator::mount() {
                    Ok(animator) => Some(animator),
                    Err(err) => {
                        warn!("Scroll effects disabled: {:?}", err);
                        None
                    }
                };
                move || {
                    if animator.is_some() {
                        info!("Leaving home page");
                    }
                    drop(animator);
                }
            },
            (), // mount only
        );
    }

    // Class names are the selectors the layer table drives, minus the dot
    let hero_layers = HERO_LAYERS.iter().map(|cfg| {
        let class = format!("layer {}", cfg.selector.trim_start_matches('.'));
        html! { <div class={class} aria-hidden="true"></div> }
    });

    html! {
        <main class="home">
            <section id="hero" class="hero">
                <div class="hero__stage">
                    { for hero_layers }
                    <div class="layer layer-sweep" aria-hidden="true"></div>
                    <div class="layer layer-particles" aria-hidden="true"></div>
                </div>
                <div class="hero__copy">
                    <h1 class="hero__phrases">
                        <span class="hero__phrase hero__phrase--current">{PHRASES[0]}</span>
                        <span class="hero__phrase hero__phrase--next" aria-hidden="true"></span>
                    </h1>
                    <div class="hero__progress"><div class="hero__progress-fill"></div></div>
                    <p class="hero__micro">{MICRO_CAPTIONS[0]}</p>
                </div>
            </section>

            <section id="story" class="story">
                <div class="story__layers">
                    <div class="layer story__backdrop"></div>
                    <div class="layer story__grid"></div>
                    <div class="layer story__device"></div>
                    <div class="layer shine"></div>
                    <div class="layer story__glow"></div>
                </div>
                <div class="story__text">
                    <ol class="story__steps">
                        { for STORY_STEPS.iter().map(|step| html! { <li>{*step}</li> }) }
                    </ol>
                    <p class="story__caption">{STORY_CAPTIONS[0]}</p>
                </div>
            </section>

            <section id="work" class="work">
                <h2 class="reveal">{"Selected work"}</h2>
                <div class="work__grid reveal">
                    { for WORK.iter().map(|(client, title, depth)| html! {
                        <article class="work__poster" data-depth={*depth}>
                            <h3>{*client}</h3>
                            <p>{*title}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="process" class="process">
                <h2 class="reveal">{"How we work"}</h2>
                { for PROCESS.iter().enumerate().map(|(i, (name, text))| html! {
                    <div class="process__step reveal">
                        <span class="process__index">{format!("0{}", i + 1)}</span>
                        <h3>{*name}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>

            <footer class="footer reveal">
                <h2>{"Less noise. More clarity."}</h2>
                <a href="mailto:hello@example.com" class="footer__cta">{"Start a project"}</a>
            </footer>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 500vh;
                    }
                    .hero__stage, .hero__copy {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                    }
                    .hero__copy {
                        margin-top: -100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 0 8vw;
                    }
                    .hero__stage .layer {
                        position: absolute;
                        inset: 0;
                        will-change: transform, opacity;
                    }
                    .layer-particles span {
                        position: absolute;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.6);
                    }
                    .hero__phrases {
                        position: relative;
                        min-height: 2.6em;
                    }
                    .hero__phrase {
                        position: absolute;
                        transition: opacity 0.4s ease, transform 0.4s ease;
                    }
                    .hero__phrase--next {
                        opacity: 0;
                        transform: translateY(0.4em);
                    }
                    .hero__progress {
                        height: 2px;
                        background: rgba(255, 255, 255, 0.15);
                    }
                    .hero__progress-fill {
                        height: 100%;
                        width: 0;
                        background: #1e90ff;
                    }
                    .story {
                        position: relative;
                        height: 400vh;
                    }
                    .story__layers {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                    }
                    .story__steps li.is-active {
                        color: #1e90ff;
                    }
                    .process__step.is-active {
                        border-color: #1e90ff;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .reveal.reveal-in {
                        opacity: 1;
                        transform: none;
                    }
                    .reduce-motion .reveal,
                    .reduce-motion .hero__phrase {
                        transition: none;
                        transform: none;
                    }
                "#}
            </style>
        </main>
    }
}
