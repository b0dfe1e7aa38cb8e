use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::{NAV_ITEMS, OWNER_NAME};
use crate::hooks::scroll::use_window_scroll;

pub fn scroll_to_section(section_id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section_id))
    else {
        log::warn!("No section with id {}", section_id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_window_scroll().scroll_y > 50.0;

    let go_to = {
        let menu_open = menu_open.clone();
        move |section_id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(section_id);
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem;
                    background: #EF4444;
                    color: #fff;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: #fff;
                    color: #EF4444;
                    padding: 1rem 1.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }
                .nav-content {
                    max-width: 1400px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr auto 1fr;
                    align-items: center;
                }
                .nav-logo {
                    font-family: var(--font-display);
                    font-weight: 700;
                    font-size: 1.5rem;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                }
                .nav-links {
                    display: flex;
                    gap: 3rem;
                    justify-content: center;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    opacity: 0.8;
                }
                .nav-link:hover { opacity: 1; }
                .nav-cta {
                    justify-self: end;
                    padding: 0.5rem 1.5rem;
                    border: 1px solid currentColor;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .burger-menu { display: none; justify-self: end; font-size: 1.5rem; }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: inherit;
                    color: inherit;
                }
                .mobile-menu button {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                @media (max-width: 768px) {
                    .nav-content { grid-template-columns: 1fr auto; }
                    .nav-links, .nav-cta { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to("hero")}>
                    {OWNER_NAME}{"."}
                </button>
                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <button class="nav-link" onclick={go_to(item.section_id)}>{item.label}</button>
                    }) }
                </div>
                <button class="nav-cta" onclick={go_to("contact")}>{"Start Project"}</button>
                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <button onclick={go_to("hero")}>{"Home"}</button>
                            { for NAV_ITEMS.iter().map(|item| html! {
                                <button onclick={go_to(item.section_id)}>{item.label}</button>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
