//! Page footer.

use leptos::prelude::*;

use crate::components::nav_bar::AnchorLink;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <i class="fas fa-cloud"></i>
                    <span>"CloudNinja Solutions"</span>
                </div>
                <nav class="footer-links">
                    <AnchorLink href="#services">"Services"</AnchorLink>
                    <AnchorLink href="#portfolio">"Portfolio"</AnchorLink>
                    <AnchorLink href="#contact">"Contact"</AnchorLink>
                </nav>
                <p class="footer-copy">"© CloudNinja Solutions. All rights reserved."</p>
            </div>
        </footer>
    }
}
