//! Portfolio case studies.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal::Reveal;

#[derive(Clone, Copy)]
struct Project {
    title: &'static str,
    summary: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform Migration",
        summary: "Moved a monolithic storefront to containers on EKS and cut hosting costs by 40%.",
        image: "/images/portfolio-ecommerce.jpg",
        tags: &["AWS", "Kubernetes", "Terraform"],
    },
    Project {
        title: "Fintech CI/CD Overhaul",
        summary: "Replaced manual releases with audited pipelines shipping dozens of times a day.",
        image: "/images/portfolio-fintech.jpg",
        tags: &["GitHub Actions", "Docker", "Azure"],
    },
    Project {
        title: "Healthcare Observability",
        summary: "Unified metrics, logs and traces across three regions with HIPAA-ready retention.",
        image: "/images/portfolio-health.jpg",
        tags: &["Google Cloud", "Prometheus", "Grafana"],
    },
];

pub(crate) const PROJECT_COUNT: usize = PROJECTS.len();

#[component]
pub fn Portfolio(
    /// Stagger index of the first project.
    base_index: usize,
) -> impl IntoView {
    view! {
        <section class="portfolio" id="portfolio">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Recent Work"</h2>
                    <p class="section-subtitle">"A few of the platforms we have built and run."</p>
                </div>
                <div class="portfolio-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal index=base_index + i class="portfolio-item">
                                    <div class="portfolio-image">
                                        <LazyImage src=project.image alt=project.title />
                                    </div>
                                    <div class="portfolio-content">
                                        <h3>{project.title}</h3>
                                        <p>{project.summary}</p>
                                        <div class="portfolio-tags">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| view! { <span class="tag">{*tag}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
