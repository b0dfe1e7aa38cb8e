use std::time::Duration;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

const STATUS_RESET: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmitStatus {
    fn button_label(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sending => "Sending...",
            SubmitStatus::Success => "Message Sent!",
            SubmitStatus::Error => "Try Again",
        }
    }
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

async fn send_contact(form: &ContactForm) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        return Ok(());
    }
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Request failed with status {}", response.status())),
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state_eq(|| SubmitStatus::Idle);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            status.set(SubmitStatus::Sending);

            let form = form.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            let payload = (*form).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match send_contact(&payload).await {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        SubmitStatus::Success
                    }
                    Err(e) => {
                        log::error!("Contact form submission failed: {}", e);
                        SubmitStatus::Error
                    }
                };
                status.set(outcome);

                let status = status.clone();
                let timeout = Timeout::new(STATUS_RESET.as_millis() as u32, move || {
                    status.set(SubmitStatus::Idle);
                });
                // replacing drops (and cancels) any earlier reset
                *reset_timer.borrow_mut() = Some(timeout);
            });
        })
    };

    let sending = *status == SubmitStatus::Sending;

    html! {
        <section id="contact" class="section contact-section">
            <style>
                {r#"
                .contact-section { background: #EF4444; color: #fff; }
                .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; }
                .contact-lead { font-size: 1.5rem; line-height: 1.5; }
                .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    padding: 1rem 0;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.5);
                    color: #fff;
                    font-size: 1.125rem;
                    outline: none;
                }
                .contact-form input::placeholder, .contact-form textarea::placeholder { color: rgba(255, 255, 255, 0.7); }
                .contact-form textarea { min-height: 8rem; resize: vertical; }
                .contact-submit {
                    align-self: flex-start;
                    padding: 1rem 2.5rem;
                    background: #fff;
                    color: #EF4444;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .contact-submit:disabled { opacity: 0.7; cursor: wait; }
                .contact-status { font-weight: 600; }
                @media (max-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="section-inner contact-grid">
                <Reveal animation="fly-left">
                    <h2 class="section-title">{"Let's Talk"}</h2>
                    <p class="contact-lead">
                        {"Have a project in mind or just want to say hi? Drop a message and I'll get back to you."}
                    </p>
                </Reveal>
                <Reveal animation="fly-right" delay="delay-200">
                    <form class="contact-form" {onsubmit}>
                        <input
                            type="text"
                            placeholder="Your Name"
                            required=true
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                        <input
                            type="email"
                            placeholder="Your Email"
                            required=true
                            value={form.email.clone()}
                            oninput={on_email}
                        />
                        <textarea
                            placeholder="Your Message"
                            required=true
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                        <button class="contact-submit" type="submit" disabled={sending}>
                            { status.button_label() }
                        </button>
                        {
                            match *status {
                                SubmitStatus::Success => html! {
                                    <p class="contact-status">{"Thanks! Your message has been received."}</p>
                                },
                                SubmitStatus::Error => html! {
                                    <p class="contact-status">{"Something went wrong. Please try again."}</p>
                                },
                                _ => html! {},
                            }
                        }
                    </form>
                </Reveal>
            </div>
        </section>
    }
}
