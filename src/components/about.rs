//! About section with certifications.

use leptos::prelude::*;

use crate::components::reveal::Reveal;

const CERTIFICATIONS: &[(&str, &str)] = &[
    ("fab fa-aws", "AWS Solutions Architect Professional"),
    ("fab fa-microsoft", "Azure DevOps Engineer Expert"),
    ("fab fa-google", "Google Professional Cloud Architect"),
    ("fas fa-dharmachakra", "Certified Kubernetes Administrator"),
    ("fas fa-layer-group", "HashiCorp Terraform Associate"),
];

/// Number of animated blocks in this section.
pub(crate) const ABOUT_BLOCKS: usize = 2;

#[component]
pub fn About(base_index: usize) -> impl IntoView {
    view! {
        <section class="about" id="about">
            <div class="container">
                <div class="about-content">
                    <Reveal index=base_index class="about-text">
                        <h2 class="section-title">"About CloudNinja Solutions"</h2>
                        <p>
                            "We are a small team of cloud and platform engineers who have spent years running "
                            "production systems for startups and enterprises alike."
                        </p>
                        <p>
                            "Every engagement ends with infrastructure your own team understands, documented "
                            "in code and observable from day one."
                        </p>
                    </Reveal>
                    <Reveal index=base_index + 1 class="certifications">
                        <h3>"Certifications"</h3>
                        <ul class="cert-list">
                            {CERTIFICATIONS
                                .iter()
                                .map(|(icon, name)| {
                                    view! {
                                        <li class="cert-item">
                                            <i class=*icon></i>
                                            <span>{*name}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
