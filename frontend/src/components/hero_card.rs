use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::utils::contact::TriggerRect;

#[function_component(HeroCard)]
pub fn hero_card() -> Html {
    let modal_open = use_state(|| false);
    let trigger = use_state(|| None::<TriggerRect>);
    let button_ref = use_node_ref();

    let open_modal = {
        let modal_open = modal_open.clone();
        let trigger = trigger.clone();
        let button_ref = button_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(button) = button_ref.cast::<HtmlElement>() {
                trigger.set(Some(button.get_bounding_client_rect().into()));
            }
            modal_open.set(true);
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <>
            <div class="hero-card-wrap">
                <div class="hero-card">
                    <div class="hero-card-bars">
                        <div class="bar-base"></div>
                        <div class="bar-green"></div>
                        <div class="bar-red"></div>
                        <div class="bar-dark"></div>
                        <div class="bar-red"></div>
                        <div class="bar-green"></div>
                        <div class="bar-base"></div>
                    </div>
                    <div class="hero-card-content">
                        <div class="hero-status">
                            <span class="pulse-dot"></span>
                            <span>{"System Online"}</span>
                        </div>
                        <h1>
                            {"It’s time to move from"}<br/>
                            <span class="text-green">{"AI curious"}</span>{" to "}<span class="text-red">{"AI-native."}</span>
                        </h1>
                        <div class="hero-copy">
                            <p>
                                {"At "}<strong>{"ADAPTICA"}</strong>{", we believe the conversation around artificial intelligence has been dominated by hype, fear, and empty promises. Too many businesses have been left with pretty slides and failed prototypes, but no real progress."}
                            </p>
                            <p>
                                {"The challenges ahead are real: slowing productivity, tighter competition, and rising expectations. The margin for inefficiency is gone. Every company now faces a choice - "}
                                <span class="underline-red">{"speed up or fall behind."}</span>
                            </p>
                            <p>
                                {"AI is the path forward. It provides the infrastructure for a new level of business performance. Used well, AI does not replace people. It fundamentally redefines how they create value."}
                            </p>
                            <blockquote>
                                {"We don’t just implement AI. We build AI operating systems for the next decade of growth."}
                            </blockquote>
                            <p>
                                {"The future has arrived. And it belongs to those who are willing to step off the sidelines and into the action."}
                            </p>
                        </div>
                        <div class="hero-actions">
                            <span class="hero-hint">{"// Initialize Protocol"}</span>
                            <button ref={button_ref} class="hero-cta" onclick={open_modal}>
                                {"Get in touch"}
                                <span class="hero-cta-arrow">{"→"}</span>
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            if *modal_open {
                <ContactModal on_close={close_modal} trigger={*trigger} />
            }
        </>
    }
}
