use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::skill_runner::SkillRunner;
use crate::content::{SKILLS, TECH_TAGS};

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="section skills-section">
            <style>
                {r#"
                .skills-section { background: #7A3F91; color: #fff; }
                .skill-rows { position: relative; margin: 4rem 0; }
                .skill-row { height: 6rem; display: flex; flex-direction: column; justify-content: flex-end; }
                .skill-label {
                    display: flex;
                    justify-content: space-between;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }
                .skill-bar { height: 6px; background: rgba(255, 255, 255, 0.2); }
                .skill-fill { height: 100%; background: #fff; transition: width 1.5s ease-out; }
                .tech-tags { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                .tech-tag {
                    padding: 0.5rem 1.25rem;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                "#}
            </style>
            <div class="section-inner">
                <Reveal animation="fly-top">
                    <h2 class="section-title">{"Skills"}</h2>
                </Reveal>
                <div class="skill-rows">
                    <SkillRunner />
                    { for SKILLS.iter().map(|skill| html! {
                        <div class="skill-row">
                            <div class="skill-label">
                                <span>{skill.subject}</span>
                                <span>{format!("{}%", skill.level)}</span>
                            </div>
                            <div class="skill-bar">
                                <div class="skill-fill" style={format!("width: {}%;", skill.level)}></div>
                            </div>
                        </div>
                    }) }
                </div>
                <Reveal animation="fly-bottom" delay="delay-200">
                    <div class="tech-tags">
                        { for TECH_TAGS.iter().map(|tag| html! { <span class="tech-tag">{*tag}</span> }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
