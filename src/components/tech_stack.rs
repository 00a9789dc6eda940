//! Tech stack grid. Items pulse on hover and announce themselves on click.

use leptos::prelude::*;

use crate::state::notification::{NotificationKind, NotificationState};
use crate::util::notify;
use crate::util::reveal::{PULSE_ANIMATION, tech_click_message};

#[derive(Clone, Copy)]
struct Tech {
    name: &'static str,
    icon: &'static str,
}

const TECHS: &[Tech] = &[
    Tech { name: "AWS", icon: "fab fa-aws" },
    Tech { name: "Microsoft Azure", icon: "fab fa-microsoft" },
    Tech { name: "Google Cloud", icon: "fab fa-google" },
    Tech { name: "Docker", icon: "fab fa-docker" },
    Tech { name: "Kubernetes", icon: "fas fa-dharmachakra" },
    Tech { name: "Terraform", icon: "fas fa-layer-group" },
    Tech { name: "Jenkins", icon: "fab fa-jenkins" },
    Tech { name: "GitHub Actions", icon: "fab fa-github" },
    Tech { name: "Python", icon: "fab fa-python" },
    Tech { name: "Linux", icon: "fab fa-linux" },
];

#[component]
fn TechItem(tech: Tech) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let hovered = RwSignal::new(false);

    let on_click = move |_| {
        if let Some(message) = tech_click_message(tech.name) {
            notify::show(notifications, message, NotificationKind::Info);
        }
    };

    view! {
        <div
            class="tech-item"
            data-tooltip=tech.name
            style:animation=move || if hovered.get() { PULSE_ANIMATION } else { "" }
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
            on:click=on_click
        >
            <i class=tech.icon></i>
            <span>{tech.name}</span>
        </div>
    }
}

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section class="tech-stack" id="tech">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Technology Stack"</h2>
                    <p class="section-subtitle">"Tools we run in production every day."</p>
                </div>
                <div class="tech-grid">
                    {TECHS.iter().map(|tech| view! { <TechItem tech=*tech /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
