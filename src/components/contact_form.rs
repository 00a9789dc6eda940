//! Contact section: form with inline validation and EmailJS delivery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every DOM event becomes one `ContactFormState` transition. The send runs
//! in a local task and its result goes back through `complete`, which
//! decides the notification and whether the setup guide opens.

use leptos::prelude::*;

use crate::components::services::service_titles;
use crate::net::emailjs::SetupSummary;
use crate::state::contact_form::{ContactFormState, SubmitDecision};
use crate::state::notification::NotificationState;
use crate::util::validation::FieldId;

#[component]
fn FieldError(field: FieldId) -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    move || {
        form.with(|f| f.errors.get(field))
            .map(|message| view! { <div class="error-message">{message}</div> })
    }
}

#[component]
fn TextField(
    field: FieldId,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    let key = field.key();

    view! {
        <div class="form-group">
            <label for=key>{label}</label>
            <input
                type=input_type
                id=key
                name=key
                placeholder=placeholder
                required=field.is_required()
                class:error=move || form.with(|f| f.errors.get(field).is_some())
                prop:value=move || form.with(|f| f.values.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.input(field, event_target_value(&ev)))
                on:blur=move |_| {
                    form.update(|f| {
                        f.blur(field);
                    });
                }
            />
            <FieldError field=field />
        </div>
    }
}

#[component]
fn ServiceSelect() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    let field = FieldId::Service;

    view! {
        <div class="form-group">
            <label for=field.key()>"Service Interested In"</label>
            <select
                id=field.key()
                name=field.key()
                required=true
                class:error=move || form.with(|f| f.errors.get(field).is_some())
                prop:value=move || form.with(|f| f.values.service.clone())
                on:change=move |ev| form.update(|f| f.input(field, event_target_value(&ev)))
                on:blur=move |_| {
                    form.update(|f| {
                        f.blur(field);
                    });
                }
            >
                <option value="">"Select a service"</option>
                {service_titles().map(|title| view! { <option value=title>{title}</option> }).collect_view()}
                <option value="Other">"Other"</option>
            </select>
            <FieldError field=field />
        </div>
    }
}

#[component]
fn MessageField() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    let field = FieldId::Message;

    view! {
        <div class="form-group">
            <label for=field.key()>"Project Details"</label>
            <textarea
                id=field.key()
                name=field.key()
                rows="5"
                placeholder="Tell us about your infrastructure and goals"
                required=true
                class:error=move || form.with(|f| f.errors.get(field).is_some())
                prop:value=move || form.with(|f| f.values.message.clone())
                on:input=move |ev| form.update(|f| f.input(field, event_target_value(&ev)))
                on:blur=move |_| {
                    form.update(|f| {
                        f.blur(field);
                    });
                }
            ></textarea>
            <FieldError field=field />
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let setup_guide = expect_context::<RwSignal<Option<SetupSummary>>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.try_update(ContactFormState::submit) {
            Some(SubmitDecision::Send(payload)) => payload,
            Some(SubmitDecision::Invalid) => {
                log::debug!("contact form blocked by validation");
                return;
            }
            Some(SubmitDecision::Busy) | None => return,
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let config = crate::config::EmailJsConfig::from_build_env();
            let result = crate::net::emailjs::send_contact(config, &payload).await;
            let Some(completion) = form.try_update(|f| f.complete(result)).flatten() else {
                return;
            };
            crate::util::notify::show(notifications, completion.message, completion.kind);
            if let Some(payload) = completion.setup_guide {
                setup_guide.set(Some(SetupSummary::from_payload(&payload)));
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (payload, notifications, setup_guide);
    };

    let submitting = move || form.with(ContactFormState::is_submitting);

    view! {
        <section class="contact" id="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Let's Talk"</h2>
                    <p class="section-subtitle">"Tell us where your platform is today and where it needs to go."</p>
                </div>
                <div class="contact-content">
                    <div class="contact-info">
                        <div class="contact-item">
                            <i class="fas fa-envelope"></i>
                            <span>"hello@cloudninja.solutions"</span>
                        </div>
                        <div class="contact-item">
                            <i class="fas fa-clock"></i>
                            <span>"Replies within one business day"</span>
                        </div>
                        <div class="contact-item">
                            <i class="fas fa-globe"></i>
                            <span>"Remote-first, working worldwide"</span>
                        </div>
                    </div>
                    <form class="contact-form" id="contact-form" novalidate=true on:submit=on_submit>
                        <TextField field=FieldId::Name label="Full Name" placeholder="Jane Doe" />
                        <TextField
                            field=FieldId::Email
                            label="Email Address"
                            input_type="email"
                            placeholder="jane@company.com"
                        />
                        <TextField field=FieldId::Company label="Company" placeholder="Optional" />
                        <ServiceSelect />
                        <MessageField />
                        <button
                            type="submit"
                            class="btn btn-primary btn-full"
                            class:loading=submitting
                            disabled=submitting
                        >
                            <span>{move || form.with(ContactFormState::submit_label)}</span>
                            <Show
                                when=submitting
                                fallback=|| view! { <i class="fas fa-paper-plane"></i> }
                            >
                                <i class="fas fa-spinner fa-spin"></i>
                            </Show>
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
