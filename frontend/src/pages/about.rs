use yew::prelude::*;

use crate::components::chase_animation::ChaseAnimation;
use crate::components::reveal::Reveal;
use crate::content::{CORE_STACK, SERVICES};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about-section">
            <style>
                {r#"
                .about-section {
                    position: relative;
                    background: #fff;
                    color: #1a1a1a;
                    padding-bottom: 10rem;
                    overflow: hidden;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .about-lead {
                    font-size: 1.5rem;
                    line-height: 1.5;
                    margin-bottom: 2rem;
                }
                .stack-list li {
                    padding: 1rem 0;
                    border-bottom: 1px solid #eee;
                    font-weight: 600;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin-top: 4rem;
                }
                .service-card {
                    padding: 2rem;
                    border: 1px solid #eee;
                    transition: border-color 0.3s ease;
                }
                .service-card:hover { border-color: #7A3F91; }
                .service-card h3 { font-family: var(--font-display); font-size: 1.25rem; margin-bottom: 0.5rem; }
                .service-card p { color: #666; }
                @media (max-width: 768px) {
                    .about-grid, .service-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="section-inner">
                <Reveal animation="fly-left">
                    <h2 class="section-title">{"About Me"}</h2>
                </Reveal>
                <div class="about-grid">
                    <Reveal animation="fly-left" delay="delay-100">
                        <p class="about-lead">
                            {"I'm a software engineer who enjoys turning messy business processes into clean, automated systems and polished interfaces."}
                        </p>
                        <p>
                            {"From Java and C# backends to React frontends and AI driven workflows, I like owning the whole path from idea to deployment."}
                        </p>
                    </Reveal>
                    <Reveal animation="fly-right" delay="delay-200">
                        <h3 class="eyebrow">{"Core Stack"}</h3>
                        <ul class="stack-list">
                            { for CORE_STACK.iter().map(|item| html! { <li>{*item}</li> }) }
                        </ul>
                    </Reveal>
                </div>
                <div class="service-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal animation="assemble" delay={format!("delay-{}", (i + 1) * 100)}>
                            <div class="service-card">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
            <ChaseAnimation />
        </section>
    }
}
