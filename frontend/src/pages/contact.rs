use log::{error, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::CONTACT_DETAILS;
use crate::webhook::{self, ContactForm};

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Failure(String),
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let is_submitting = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

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
        let is_submitting = is_submitting.clone();
        let notice = notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let submission = (*form).clone();
            if let Err(err) = submission.validate() {
                notice.set(Some(Notice::Failure(err.to_string())));
                return;
            }

            is_submitting.set(true);
            notice.set(None);
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let notice = notice.clone();

            wasm_bindgen_futures::spawn_local(async move {
                info!("Sending contact form submission");
                match webhook::submit(&submission).await {
                    Ok(()) => {
                        info!("Contact form submission delivered");
                        form.set(ContactForm::default());
                        notice.set(Some(Notice::Success("Message sent successfully!".to_string())));
                    }
                    Err(err) => {
                        // Fields stay as typed so the visitor can retry.
                        error!("Contact form error: {}", err);
                        notice.set(Some(Notice::Failure(err.to_string())));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| notice.set(None))
    };

    html! {
        <div class="section-container">
            <Reveal class={classes!("section-header")}>
                <h2 class="section-title">{"Get In Touch"}</h2>
                <div class="section-divider"></div>
            </Reveal>

            <div class="contact-content">
                <Reveal class={classes!("contact-info")} delay_ms={200}>
                    <h3>{"Let's collaborate on security research"}</h3>
                    <p>
                        {"I'm always interested in discussing game security, reverse engineering challenges, and innovative solutions. Whether you have a complex problem or want to explore new possibilities, feel free to reach out!"}
                    </p>
                    <div class="contact-details">
                        {
                            CONTACT_DETAILS.iter().map(|(icon, text)| html! {
                                <div key={*text} class="contact-item">
                                    <span class="contact-icon">{*icon}</span>
                                    <span>{*text}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>

                <Reveal class={classes!("contact-form")} delay_ms={400}>
                    <form onsubmit={onsubmit}>
                        <div class="form-group">
                            <label for="name">{"Name"}</label>
                            <input type="text" id="name" name="name" required={true}
                                value={form.name.clone()} oninput={on_name} />
                        </div>
                        <div class="form-group">
                            <label for="email">{"Email"}</label>
                            <input type="email" id="email" name="email" required={true}
                                value={form.email.clone()} oninput={on_email} />
                        </div>
                        <div class="form-group">
                            <label for="message">{"Message"}</label>
                            <textarea id="message" name="message" required={true}
                                value={form.message.clone()} oninput={on_message} />
                        </div>
                        {
                            match &*notice {
                                Some(Notice::Success(text)) => html! {
                                    <div class="form-notice success" onclick={dismiss.clone()}>{text}</div>
                                },
                                Some(Notice::Failure(text)) => html! {
                                    <div class="form-notice failure" onclick={dismiss.clone()}>{text}</div>
                                },
                                None => html! {},
                            }
                        }
                        <button type="submit" class="submit-button" disabled={*is_submitting}>
                            { if *is_submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </Reveal>
            </div>
            <style>
                {r#"
                .contact-content {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-info h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .contact-info p {
                    color: var(--text-secondary);
                    margin-bottom: 2rem;
                    line-height: 1.7;
                }
                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: var(--text-secondary);
                    transition: transform 0.3s ease;
                }
                .contact-item:hover {
                    transform: translateX(5px);
                }
                .contact-icon {
                    font-size: 1.2rem;
                }
                .contact-form form {
                    background: var(--surface);
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 4px 20px var(--shadow);
                }
                .form-group {
                    margin-bottom: 1.5rem;
                }
                .form-group label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-weight: 500;
                }
                .form-group input,
                .form-group textarea {
                    width: 100%;
                    padding: 0.75rem;
                    border: 2px solid var(--border);
                    border-radius: 0.5rem;
                    font-size: 1rem;
                    font-family: inherit;
                    background: var(--background);
                    color: var(--text);
                    transition: all 0.3s ease;
                }
                .form-group textarea {
                    resize: vertical;
                    min-height: 120px;
                }
                .form-group input:focus,
                .form-group textarea:focus {
                    outline: none;
                    border-color: var(--primary);
                    transform: scale(1.02);
                }
                .form-notice {
                    margin-bottom: 1rem;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .form-notice.success {
                    background: rgba(34, 197, 94, 0.15);
                    color: #16a34a;
                }
                .form-notice.failure {
                    background: rgba(239, 68, 68, 0.15);
                    color: #dc2626;
                }
                .submit-button {
                    width: 100%;
                    background: var(--primary);
                    color: white;
                    border: none;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .submit-button:hover:not(:disabled) {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 20px var(--shadow);
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                @media (max-width: 768px) {
                    .contact-content {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
