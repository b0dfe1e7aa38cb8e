use yew::prelude::*;

use crate::content::PROJECTS;
use crate::hooks::scroll::use_scroll_progress;
use crate::motion::slide_sequencer::{active_slide, slide_transform, title_opacity};

/// Tall scroll track with a sticky stage. Scrolling through the track plays
/// the slides in one after another.
#[function_component(Projects)]
pub fn projects() -> Html {
    let track_ref = use_node_ref();
    let progress = use_scroll_progress(track_ref.clone());
    let active = active_slide(progress);

    html! {
        <section id="projects" class="projects-track" ref={track_ref}>
            <style>
                {r#"
                .projects-track { position: relative; height: 400vh; background: #1a1a1a; }
                .projects-stage {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                }
                .project-slide {
                    position: absolute;
                    inset: 0;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    background: #1a1a1a;
                    color: #fff;
                    will-change: transform;
                }
                .project-slide:nth-child(even) { background: #EF4444; }
                .project-image { width: 100%; height: 100%; object-fit: cover; }
                .project-copy {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 4rem;
                }
                .project-number { font-size: 0.875rem; letter-spacing: 0.3em; opacity: 0.6; }
                .project-title {
                    font-family: var(--font-display);
                    font-size: clamp(2rem, 5vw, 4rem);
                    font-weight: 700;
                    line-height: 1;
                    margin: 1rem 0 1.5rem;
                }
                .project-tags { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-top: 2rem; }
                .project-tag { padding: 0.25rem 0.75rem; border: 1px solid rgba(255, 255, 255, 0.4); font-size: 0.75rem; }
                .projects-title {
                    position: absolute;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                    font-family: var(--font-display);
                    font-size: clamp(3rem, 10vw, 8rem);
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #fff;
                    mix-blend-mode: difference;
                }
                .progress-dots {
                    position: absolute;
                    right: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .progress-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: 1px solid #fff;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .progress-dot.active { background: #fff; transform: scale(1.3); }
                @media (max-width: 768px) {
                    .project-slide { grid-template-columns: 1fr; grid-template-rows: 40% 60%; }
                    .project-copy { padding: 2rem; }
                }
                "#}
            </style>
            <div class="projects-stage">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <article
                        key={project.id}
                        class="project-slide"
                        style={slide_transform(index, progress).to_style()}
                    >
                        <img class="project-image" src={project.image} alt={project.title} />
                        <div class="project-copy">
                            <span class="project-number">{format!("0{}", index + 1)}</span>
                            <h3 class="project-title">{project.title}</h3>
                            <p>{project.description}</p>
                            <div class="project-tags">
                                { for project.tags.iter().map(|tag| html! { <span class="project-tag">{*tag}</span> }) }
                            </div>
                        </div>
                    </article>
                }) }
                <h2 class="projects-title" style={format!("opacity: {};", title_opacity(progress))}>
                    {"Selected Work"}
                </h2>
                <div class="progress-dots">
                    { for (0..PROJECTS.len()).map(|index| html! {
                        <span class={classes!("progress-dot", (index == active).then(|| "active"))}></span>
                    }) }
                </div>
            </div>
        </section>
    }
}
