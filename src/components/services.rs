//! Service cards.

use leptos::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Clone, Copy)]
struct Service {
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        icon: "fas fa-cloud-upload-alt",
        title: "Cloud Migration",
        summary: "Move workloads to AWS, Azure or GCP with a plan that keeps production running.",
        features: &["Readiness assessment", "Lift-and-shift or re-platform", "Zero-downtime cutover"],
    },
    Service {
        icon: "fas fa-infinity",
        title: "DevOps & CI/CD",
        summary: "Pipelines that build, test and ship every commit.",
        features: &["GitHub Actions & GitLab CI", "Release automation", "Quality gates"],
    },
    Service {
        icon: "fas fa-cubes",
        title: "Kubernetes & Containers",
        summary: "Container platforms sized for your traffic and your team.",
        features: &["Cluster design", "Helm & GitOps", "Autoscaling"],
    },
    Service {
        icon: "fas fa-code",
        title: "Infrastructure as Code",
        summary: "Reproducible environments described in reviewed code.",
        features: &["Terraform modules", "Policy as code", "Drift detection"],
    },
    Service {
        icon: "fas fa-chart-line",
        title: "Monitoring & Observability",
        summary: "Know what production is doing before your users tell you.",
        features: &["Metrics & tracing", "Alert tuning", "SLO dashboards"],
    },
    Service {
        icon: "fas fa-shield-alt",
        title: "Cloud Security",
        summary: "Hardened accounts, least-privilege access and audit trails.",
        features: &["IAM review", "Secrets management", "Compliance baselines"],
    },
];

/// Number of animated service cards.
pub(crate) const SERVICE_COUNT: usize = SERVICES.len();

/// Service names offered in the contact form.
pub(crate) fn service_titles() -> impl Iterator<Item = &'static str> {
    SERVICES.iter().map(|s| s.title)
}

#[component]
pub fn Services(
    /// Stagger index of the first card.
    base_index: usize,
) -> impl IntoView {
    view! {
        <section class="services" id="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-subtitle">"End-to-end cloud engineering, from first workload to day-two operations."</p>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <Reveal index=base_index + i class="service-card">
                                    <div class="service-icon">
                                        <i class=service.icon></i>
                                    </div>
                                    <h3>{service.title}</h3>
                                    <p>{service.summary}</p>
                                    <ul class="service-features">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
