use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod motion;
mod hooks;
mod components {
    pub mod ai_chat;
    pub mod chase_animation;
    pub mod navbar;
    pub mod reveal;
    pub mod skill_runner;
    pub mod social_links;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod about;
    pub mod skills;
    pub mod projects;
    pub mod contact;
}
mod admin {
    pub mod portal;
}

use pages::home::Home;
use admin::portal::AdminPortal;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <AdminPortal /> }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
