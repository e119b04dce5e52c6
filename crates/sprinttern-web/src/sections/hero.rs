//! Hero

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-card">
                    <div class="hero-content-wrapper">
                        <h1 class="hero-headline">
                            "Get small business tasks done quickly - without hiring or long-term commitment"
                        </h1>
                        <p class="hero-clarifying-line">
                            "Short, fixed-scope tasks completed by vetted university students."
                        </p>
                        <p class="hero-subheadline">
                            "We're onboarding a small number of businesses to ensure quality during our limited pilot programme."
                        </p>
                        <a href="#waitlist-form" class="cta-button primary">"Request pilot access"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
