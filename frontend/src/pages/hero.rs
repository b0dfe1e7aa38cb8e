use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::scroll_to_section;
use crate::hooks::scroll::use_window_scroll;
use crate::motion::css_number;
use crate::motion::scroll_progress::hero_opacity;
use crate::Route;

/// Fixed full-screen intro. Fades out over the first viewport of scrolling
/// while the sections slide over it.
#[function_component(Hero)]
pub fn hero() -> Html {
    let navigator = use_navigator();
    let scroll = use_window_scroll();
    let opacity = hero_opacity(scroll.scroll_y, scroll.viewport_height);

    let explore = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("projects");
    });

    let open_admin = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Admin);
        }
    });

    let style = format!(
        "opacity: {}; pointer-events: {};",
        css_number(opacity),
        if opacity > 0.0 { "auto" } else { "none" }
    );

    html! {
        <section id="hero" class="hero" {style}>
            <style>
                {r#"
                .hero {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1.5rem;
                    background: #EF4444;
                    color: #fff;
                }
                .hero-kicker {
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    opacity: 0.8;
                    margin-bottom: 1.5rem;
                }
                .hero-title {
                    font-family: var(--font-display);
                    font-size: clamp(3rem, 12vw, 10rem);
                    font-weight: 700;
                    line-height: 0.9;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                }
                .hero-subtitle {
                    max-width: 40rem;
                    margin: 2rem auto 3rem;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    opacity: 0.9;
                }
                .secret-trigger { cursor: text; }
                .hero-cta {
                    padding: 1rem 2.5rem;
                    background: #fff;
                    color: #EF4444;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover { transform: translateY(-4px); }
                "#}
            </style>
            <p class="hero-kicker">{"Software Engineer & Automation Specialist"}</p>
            <h1 class="hero-title">{"Md"}<br/>{"Umor"}</h1>
            <p class="hero-subtitle">
                {"Crafting "}
                <span class="secret-trigger" onclick={open_admin}>{"modern"}</span>
                {" digital experiences with clean code, thoughtful design and a little automation magic."}
            </p>
            <button class="hero-cta" onclick={explore}>{"Start Exploring"}</button>
        </section>
    }
}
