use yew::prelude::*;

use crate::content::skill_levels;
use crate::motion::skill_track::SkillTrack;

const ANIMATION_NAME: &str = "skill-runner-path";

/// Small figure that sprints along each skill bar and drops to the next row.
/// Sits in the same relative container as the bars.
#[function_component(SkillRunner)]
pub fn skill_runner() -> Html {
    let track = use_memo(|_| SkillTrack::new(&skill_levels()), ());

    if track.is_empty() {
        return html! {};
    }

    html! {
        <>
            <style>
                { track.to_css_keyframes(ANIMATION_NAME) }
                {r#"
                .skill-runner {
                    position: absolute;
                    width: 60px;
                    height: 60px;
                    margin-left: -30px;
                    z-index: 20;
                    pointer-events: none;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.25rem;
                    filter: drop-shadow(0 2px 2px rgba(0, 0, 0, 0.3));
                }
                "#}
            </style>
            <div class="skill-runner" style={track.animation_style(ANIMATION_NAME)} aria-hidden="true">
                {"🏃"}
            </div>
        </>
    }
}
