use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::utils::circuit::Viewport;
use crate::utils::contact::{
    submit_contact, ContactField, ContactForm, LaunchGeometry, SubmissionState, SubmitOutcome,
    TriggerRect,
};

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub on_close: Callback<()>,
    pub trigger: Option<TriggerRect>,
}

fn current_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

fn field_input(form: &UseStateHandle<ContactForm>, field: ContactField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let Some(target) = e.target() else { return };
        let value = match target.dyn_into::<HtmlInputElement>() {
            Ok(input) => input.value(),
            Err(target) => match target.dyn_into::<HtmlTextAreaElement>() {
                Ok(area) => area.value(),
                Err(_) => return,
            },
        };
        let mut next = (*form).clone();
        next.set(field, value);
        form.set(next);
    })
}

const MODAL_CSS: &str = r#"
.contact-overlay {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.contact-beam {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    pointer-events: none;
    overflow: visible;
    animation: hologram-fade 0.6s ease-out both;
}
.contact-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(24px);
    z-index: 10;
}
.contact-card {
    position: relative;
    z-index: 20;
    width: 100%;
    max-width: 480px;
    min-height: 500px;
    padding: 2.5rem;
    background: #1C1C1C;
    border-radius: 40px;
    box-shadow: 0 0 50px rgba(166, 58, 66, 0.3);
    display: flex;
    flex-direction: column;
    animation: hologram-enter 0.5s cubic-bezier(0.2, 0.8, 0.2, 1) both;
}
.contact-card h2 {
    font-family: 'Orbitron', sans-serif;
    font-size: 1.9rem;
    color: #F5F5F7;
    margin: 0;
}
.contact-status {
    font-size: 11px;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: rgba(245, 245, 247, 0.4);
}
.contact-status::before {
    content: '';
    display: inline-block;
    width: 6px;
    height: 6px;
    margin-right: 0.5rem;
    border-radius: 50%;
    background: #3E7C67;
}
.contact-close {
    position: absolute;
    top: 2rem;
    right: 2rem;
    width: 40px;
    height: 40px;
    border: none;
    border-radius: 50%;
    background: #1C1C1C;
    color: rgba(245, 245, 247, 0.6);
    box-shadow: 5px 5px 10px #141414, -5px -5px 10px #242424;
    cursor: pointer;
}
.contact-close:hover {
    color: #A63A42;
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
    margin-top: 1.5rem;
}
.contact-form input,
.contact-form textarea {
    background: #181818;
    color: #F5F5F7;
    border: none;
    border-radius: 1rem;
    padding: 1rem 1.5rem;
    font-size: 15px;
    outline: none;
    resize: none;
    box-shadow: inset 2px 2px 4px #0e0e0e, inset -2px -2px 4px #2a2a2a;
}
.contact-form input:focus,
.contact-form textarea:focus {
    box-shadow: inset 2px 2px 4px #0e0e0e, inset -2px -2px 4px #2a2a2a, 0 0 0 1px #A63A42;
}
.contact-submit {
    padding: 1.25rem;
    border: none;
    border-radius: 1rem;
    background: linear-gradient(90deg, #A63A42, #802028);
    color: #F5F5F7;
    font-family: 'Orbitron', sans-serif;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    cursor: pointer;
}
.contact-error {
    color: #E0777F;
    font-size: 0.9rem;
}
.contact-received {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    gap: 2rem;
}
.contact-received h3 {
    font-family: 'Orbitron', sans-serif;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: #F5F5F7;
}
.contact-received h3 span {
    color: #3E7C67;
}
.contact-received p {
    color: rgba(245, 245, 247, 0.6);
    max-width: 20rem;
}
.contact-terminate {
    background: none;
    border: none;
    font-family: 'Orbitron', sans-serif;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    color: rgba(245, 245, 247, 0.4);
    cursor: pointer;
}
.contact-terminate:hover {
    color: #A63A42;
}
@keyframes hologram-enter {
    from {
        opacity: 0;
        transform: translate(var(--start-x, 0), var(--start-y, 0)) scale(0.1);
    }
    to {
        opacity: 1;
        transform: translate(0, 0) scale(1);
    }
}
@keyframes hologram-fade {
    from { opacity: 0; }
    to { opacity: 1; }
}
"#;

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let form = use_state(ContactForm::default);
    let state = use_state(|| SubmissionState::Editing);
    let outcome = use_state(|| None::<SubmitOutcome>);

    let onsubmit = {
        let form = form.clone();
        let state = state.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = (*form).clone();
            let state = state.clone();
            let outcome = outcome.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = submit_contact(&payload).await;
                if let Some(msg) = result.error_message() {
                    gloo_console::log!(format!("Contact submission did not go through: {}", msg));
                }
                state.set(result.next_state());
                outcome.set(Some(result));
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let geometry = use_memo(
        |trigger| LaunchGeometry::new(*trigger, current_viewport()),
        props.trigger,
    );
    let card_style = (*geometry)
        .as_ref()
        .map(LaunchGeometry::card_style)
        .unwrap_or_default();
    let beam = match (*geometry).as_ref() {
        Some(geometry) => html! {
            <svg class="contact-beam">
                <defs>
                    <linearGradient id="beamGrad" x1="0%" y1="100%" x2="0%" y2="0%">
                        <stop offset="0%" stop-color="#A63A42" stop-opacity="0.8" />
                        <stop offset="100%" stop-color="#A63A42" stop-opacity="0" />
                    </linearGradient>
                </defs>
                <path d={geometry.beam.clone()} fill="url(#beamGrad)" opacity="0.5" />
                <path d={geometry.beam.clone()} stroke="#A63A42" stroke-width="1" fill="none" stroke-opacity="0.5" stroke-dasharray="4 4" />
            </svg>
        },
        None => html! {},
    };

    let body = match *state {
        SubmissionState::Editing => {
            let error = (*outcome).as_ref().and_then(|o| o.error_message()).map(|msg| {
                html! { <p class="contact-error">{format!("Could not send your message: {}", msg)}</p> }
            });
            html! {
                <>
                    <div>
                        <h2>{"Get in touch"}</h2>
                        <span class="contact-status">{"Systems Online"}</span>
                    </div>
                    <form class="contact-form" onsubmit={onsubmit}>
                        <input
                            type="text"
                            required=true
                            placeholder="Name"
                            value={form.name.clone()}
                            oninput={field_input(&form, ContactField::Name)}
                        />
                        <input
                            type="email"
                            required=true
                            placeholder="Email"
                            value={form.email.clone()}
                            oninput={field_input(&form, ContactField::Email)}
                        />
                        <input
                            type="tel"
                            placeholder="Phone"
                            value={form.phone.clone()}
                            oninput={field_input(&form, ContactField::Phone)}
                        />
                        <textarea
                            rows="3"
                            required=true
                            placeholder="How can we help?"
                            value={form.message.clone()}
                            oninput={field_input(&form, ContactField::Message)}
                        />
                        { for error }
                        <button type="submit" class="contact-submit">{"Initialize Protocol"}</button>
                    </form>
                </>
            }
        }
        SubmissionState::Submitted => {
            let (headline, detail) = match (*outcome).as_ref().and_then(|o| o.error_message()) {
                None => (
                    "Received",
                    "Your data packet has been successfully uploaded to our secure servers. An agent will intercept your signal shortly.".to_string(),
                ),
                Some(msg) => ("Interrupted", format!("{}. Please try again later.", msg)),
            };
            html! {
                <div class="contact-received">
                    <h3>{"Transmission"}<br/><span>{headline}</span></h3>
                    <p>{detail}</p>
                    <button class="contact-terminate" onclick={close.clone()}>{"[ Terminate Session ]"}</button>
                </div>
            }
        }
    };

    html! {
        <div class="contact-overlay">
            <style>{MODAL_CSS}</style>
            {beam}
            <div class="contact-backdrop" onclick={close.clone()}></div>
            <div class="contact-card" style={card_style}>
                <button class="contact-close" onclick={close} aria-label="Close">{"✕"}</button>
                {body}
            </div>
        </div>
    }
}
