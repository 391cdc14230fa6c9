//! Contact Form Component
//!
//! Demo form: validates locally and shows an inline hint. Nothing is sent.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{CONTACT_SENT_HINT, HINT_CLEAR_MS};
use crate::contact::{validate_contact, ContactError};

#[component]
pub fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (hint, set_hint) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_contact(&name.get_untracked(), &email.get_untracked(), &message.get_untracked()) {
            Err(err) => {
                let ContactError::Incomplete(missing) = &err;
                log::debug!("[CONTACT] Incomplete, missing {:?}", missing);
                set_hint.set(err.to_string());
            }
            Ok(sent) => {
                log::info!("[CONTACT] Demo submission from {}", sent.email);
                set_hint.set(CONTACT_SENT_HINT.to_string());
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
                Timeout::new(HINT_CLEAR_MS, move || set_hint.set(String::new())).forget();
            }
        }
    };

    view! {
        <section class="contact" id="contact">
            <h2>"Contact"</h2>
            <form class="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    name="name"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    name="message"
                    placeholder="Message"
                    prop:value=move || message.get()
                    on:input=move |ev| {
                        let area = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok());
                        if let Some(area) = area {
                            set_message.set(area.value());
                        }
                    }
                ></textarea>
                <button type="submit">"Send"</button>
            </form>
            <p class="form-hint" aria-live="polite">{move || hint.get()}</p>
        </section>
    }
}
