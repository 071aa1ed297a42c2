use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod utils {
    pub mod api;
    pub mod circuit;
    pub mod contact;
    pub mod listeners;
}
mod components {
    pub mod client_logos;
    pub mod contact_modal;
    pub mod header;
    pub mod hero_card;
    pub mod interactive_background;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
