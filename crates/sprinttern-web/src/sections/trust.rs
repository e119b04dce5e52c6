//! Trust & risk reduction badges

use leptos::prelude::*;

use crate::components::FeatureCard;
use crate::content::TRUST_BADGES;

#[component]
pub fn TrustSection() -> impl IntoView {
    view! {
        <section class="trust-section">
            <div class="container">
                <div class="trust-grid">
                    {TRUST_BADGES
                        .iter()
                        .map(|badge| view! { <FeatureCard feature=badge card_class="trust-card" icon_class="trust-icon" /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
