//! Modal explaining how to configure EmailJS, shown when a send fails for
//! configuration reasons.

#[cfg(test)]
#[path = "setup_guide_modal_test.rs"]
mod setup_guide_modal_test;

use leptos::prelude::*;

use crate::config::{PUBLIC_KEY_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR, TO_EMAIL_VAR};
use crate::net::emailjs::{SetupSummary, TEMPLATE_VARIABLES};

fn template_variable_list() -> String {
    TEMPLATE_VARIABLES
        .iter()
        .map(|var| format!("{{{{{var}}}}}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fullscreen setup guide for the given submission.
#[component]
pub fn SetupGuideModal(summary: SetupSummary, on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let env_vars = format!("{SERVICE_ID_VAR}, {TEMPLATE_ID_VAR} and {PUBLIC_KEY_VAR}");

    view! {
        <div class="setup-guide__backdrop" on:click=on_backdrop>
            <div
                class="setup-guide"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="setup-guide__close" title="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <div class="setup-guide__header">
                    <h2>"EmailJS Setup (5 minutes)"</h2>
                    <p>"Set this up once and every contact form message is emailed to you automatically."</p>
                </div>
                <div class="setup-guide__submission">
                    <strong>"Current Form Submission:"</strong>
                    <div>{summary.email} " | " {summary.name}</div>
                    <div>{summary.company} " | " {summary.service}</div>
                    <div>{summary.message_preview}</div>
                </div>
                <div class="setup-guide__steps">
                    <h3>"Quick Setup Steps:"</h3>
                    <ol>
                        <li>
                            "Go to "
                            <a href="https://emailjs.com" target="_blank" rel="noopener">
                                "emailjs.com"
                            </a>
                            " and sign up with the address that should receive messages"
                        </li>
                        <li>"Add an email service and allow EmailJS to send from it"</li>
                        <li>
                            "Create an email template with these exact variables:"
                            <code class="setup-guide__vars">{template_variable_list()}</code>
                        </li>
                        <li>"Copy your Service ID, Template ID, and Public Key"</li>
                        <li>
                            "Rebuild the site with " {env_vars} " set (and optionally "
                            {TO_EMAIL_VAR} ")"
                        </li>
                    </ol>
                </div>
                <div class="setup-guide__actions">
                    <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                        "Got it! I'll set this up"
                    </button>
                </div>
            </div>
        </div>
    }
}
