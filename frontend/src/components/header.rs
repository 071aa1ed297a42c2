use yew::prelude::*;

pub const LOGO_SRC: &str = "/assets/logo.svg";

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="site-logo">
                <img src={LOGO_SRC} alt="Adaptica Logo" />
            </div>
        </header>
    }
}
