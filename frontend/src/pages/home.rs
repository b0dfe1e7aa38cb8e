use yew::prelude::*;

use crate::components::ai_chat::AiChat;
use crate::components::navbar::Nav;
use crate::components::social_links::SocialLinks;
use crate::pages::about::About;
use crate::pages::contact::Contact;
use crate::pages::hero::Hero;
use crate::pages::projects::Projects;
use crate::pages::skills::Skills;

/// The whole one-page site. The hero stays fixed underneath; a viewport
/// tall spacer lets it show before the content layer scrolls over it.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <Nav />
            <SocialLinks />
            <Hero />
            <div class="hero-spacer" aria-hidden="true"></div>
            <main class="content-layer">
                <About />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <footer class="site-footer">
                {format!("© {} Md Umor. All rights reserved.", chrono::Local::now().format("%Y"))}
            </footer>
            <AiChat />
        </div>
    }
}
