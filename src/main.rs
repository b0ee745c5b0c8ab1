use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod content;
mod hooks;
mod components {
    pub mod command_row;
    pub mod cta_link;
    pub mod feature_card;
    pub mod icon;
    pub mod phase_step;
    pub mod renderable;
    pub mod role_card;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        // Single-page site: unknown paths still get the landing page.
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    match SiteContent::shipped() {
        Ok(content) => {
            info!(
                "Starting application with {} features, {} roles, {} phases, {} commands",
                content.features.len(),
                content.roles.len(),
                content.phases.len(),
                content.commands.len()
            );
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => error!("Site content failed validation: {err}"),
    }
}
