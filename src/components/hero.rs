//! Hero section: headline, call-to-action links, counting stats and the
//! parallax visual.

use leptos::prelude::*;

use crate::components::nav_bar::AnchorLink;
use crate::components::reveal::Reveal;
use crate::components::stat_counter::StatCounter;
use crate::state::nav::NavState;

#[derive(Clone, Copy)]
struct Stat {
    data_target: Option<&'static str>,
    text: &'static str,
    suffix: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { data_target: Some("150"), text: "0", suffix: "+", label: "Projects Delivered" },
    Stat { data_target: None, text: "98", suffix: "%", label: "Client Satisfaction" },
    Stat { data_target: Some("1200"), text: "0", suffix: "+", label: "Deployments Automated" },
    Stat { data_target: Some("24"), text: "0", suffix: "/7", label: "Support Coverage" },
];

const CONTENT_INDEX: usize = 0;
const VISUAL_INDEX: usize = 1;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let stats_started = RwSignal::new(false);
    let on_stats_revealed = Callback::new(move |()| stats_started.set(true));

    view! {
        <section class="hero" id="home">
            <div class="hero-container">
                <Reveal index=CONTENT_INDEX class="hero-content">
                    <h1 class="hero-title">
                        "Cloud Infrastructure, "
                        <span class="gradient-text">"Engineered to Scale"</span>
                    </h1>
                    <p class="hero-subtitle">
                        "We design, automate and operate cloud platforms so your team can ship faster with confidence."
                    </p>
                    <div class="hero-buttons">
                        <AnchorLink href="#contact" class="btn btn-primary">
                            "Get Started"
                        </AnchorLink>
                        <AnchorLink href="#services" class="btn btn-secondary">
                            "Our Services"
                        </AnchorLink>
                    </div>
                    <Reveal index=CONTENT_INDEX class="hero-stats" on_reveal=on_stats_revealed>
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <StatCounter
                                        data_target=stat.data_target
                                        text=stat.text
                                        suffix=stat.suffix
                                        label=stat.label
                                        started=stats_started
                                    />
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </Reveal>
                <Reveal index=VISUAL_INDEX class="hero-visual">
                    <div
                        class="cloud-animation"
                        style:transform=move || nav.with(NavState::parallax_transform)
                    >
                        <i class="fas fa-cloud cloud-main"></i>
                        <i class="fas fa-server cloud-node"></i>
                        <i class="fas fa-database cloud-node"></i>
                        <i class="fas fa-shield-alt cloud-node"></i>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
