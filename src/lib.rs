use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod controller;
pub mod motion;
pub mod selfcheck;
pub mod viewport;

pub mod components {
    pub mod blocks;
    pub mod contact;
    pub mod decor;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod reveal;
    pub mod styles;
}

pub mod pages {
    pub mod one_page;
}

use pages::one_page::OnePage;

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
            info!("Rendering one-page site");
            html! { <OnePage /> }
        }
        // Everything lives on a single page; stray paths land back on it.
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
pub fn App() -> Html {
    let basename = config::router_basename();

    html! {
        <BrowserRouter basename={basename}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
