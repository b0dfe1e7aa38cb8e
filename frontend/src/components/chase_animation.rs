use yew::prelude::*;

/// Pacman chasing a ghost along the bottom of the about section. Pure css.
#[function_component(ChaseAnimation)]
pub fn chase_animation() -> Html {
    html! {
        <div class="chase-strip" aria-hidden="true">
            <style>
                {r#"
                .chase-strip {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    width: 100%;
                    height: 6rem;
                    overflow: hidden;
                    pointer-events: none;
                    opacity: 0.8;
                }
                @keyframes moveRight {
                    0% { transform: translateX(-20vw); }
                    100% { transform: translateX(120vw); }
                }
                @keyframes chompTop {
                    0%, 100% { transform: rotate(-45deg); }
                    50% { transform: rotate(0deg); }
                }
                @keyframes chompBottom {
                    0%, 100% { transform: rotate(45deg); }
                    50% { transform: rotate(0deg); }
                }
                .chase-scene {
                    position: absolute;
                    left: 0;
                    bottom: 20px;
                    display: flex;
                    align-items: center;
                    gap: 60px;
                    animation: moveRight 15s linear infinite;
                }
                .chase-dots { display: flex; gap: 2rem; margin-right: 2rem; }
                .chase-dot { width: 8px; height: 8px; border-radius: 50%; background: rgba(122, 63, 145, 0.3); }
                .pacman { position: relative; width: 32px; height: 32px; }
                .pacman-half { position: absolute; left: 0; width: 100%; height: 50%; background: #facc15; }
                .pacman-top { top: 0; border-radius: 32px 32px 0 0; transform-origin: bottom; animation: chompTop 0.25s infinite; }
                .pacman-bottom { bottom: 0; border-radius: 0 0 32px 32px; transform-origin: top; animation: chompBottom 0.25s infinite; }
                .ghost {
                    width: 32px;
                    height: 32px;
                    background: #ef4444;
                    border-radius: 16px 16px 4px 4px;
                    animation: bounce 0.6s infinite;
                }
                "#}
            </style>
            <div class="chase-scene">
                <div class="chase-dots">
                    <div class="chase-dot"></div>
                    <div class="chase-dot"></div>
                    <div class="chase-dot"></div>
                </div>
                <div class="pacman">
                    <div class="pacman-half pacman-top"></div>
                    <div class="pacman-half pacman-bottom"></div>
                </div>
                <div class="ghost"></div>
            </div>
        </div>
    }
}
