//! Single-page layout of all site sections.

use leptos::prelude::*;

use crate::components::about::{ABOUT_BLOCKS, About};
use crate::components::contact_form::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::portfolio::{PROJECT_COUNT, Portfolio};
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::services::{SERVICE_COUNT, Services};
use crate::components::tech_stack::TechStack;

/// Reveal stagger order: hero content and visual first, then service cards,
/// portfolio items, and the about blocks.
const SERVICES_BASE: usize = 2;
const PORTFOLIO_BASE: usize = SERVICES_BASE + SERVICE_COUNT;
const ABOUT_BASE: usize = PORTFOLIO_BASE + PROJECT_COUNT;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar />
        <main>
            <Hero />
            <Services base_index=SERVICES_BASE />
            <TechStack />
            <Portfolio base_index=PORTFOLIO_BASE />
            <About base_index=ABOUT_BASE />
            <ContactSection />
        </main>
        <Footer />
        <ScrollToTop />
    }
}
