//! Main App Component

use leptos::prelude::*;

use crate::components::SectionDivider;
use crate::sections::{
    ExampleTasks, Footer, Hero, HowItWorks, SiteHeader, TrustSection, WaitlistForm, WhatThisIs,
    WhyModelWorks,
};

/// Root application component. One page, no router.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <SiteHeader />
            <Hero />
            <SectionDivider />
            <WhatThisIs />
            <SectionDivider reverse=true />
            <WhyModelWorks />
            <SectionDivider />
            <ExampleTasks />
            <SectionDivider />
            <HowItWorks />
            <SectionDivider reverse=true />
            <TrustSection />
            <SectionDivider />
            <WaitlistForm />
            <Footer />
        </div>
    }
}
