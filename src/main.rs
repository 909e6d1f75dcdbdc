use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod lead;
mod map;
mod menu;
mod phone;
mod reveal;
mod scroll;

mod components {
    pub mod anchor_link;
    pub mod lead_form;
    pub mod locations_map;
    pub mod nav;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::nav::Nav;
use menu::{lock_body_scroll, MenuContext, MenuState};
use pages::{landing::Landing, not_found::NotFound};

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let menu = use_reducer(MenuState::default);

    {
        let state = *menu;
        use_effect_with_deps(
            move |state| {
                lock_body_scroll(*state);
                || ()
            },
            state,
        );
    }

    html! {
        <ContextProvider<MenuContext> context={menu.clone()}>
            <BrowserRouter>
                <Nav menu={menu} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<MenuContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
