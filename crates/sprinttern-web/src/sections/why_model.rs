//! "Why this model works"

use leptos::prelude::*;

use crate::components::Icon;
use crate::content::MODEL_BENEFITS;

#[component]
pub fn WhyModelWorks() -> impl IntoView {
    view! {
        <section class="why-model-works">
            <div class="container">
                <h2 class="section-title">"Why this model works"</h2>
                <div class="model-content">
                    <div class="model-intro">
                        <p class="model-text">
                            "This approach works because students are motivated differently. They care about doing a good job, value feedback, and take small, well-scoped tasks seriously. They're building real experience, not chasing volume."
                        </p>
                    </div>

                    <div class="model-benefits">
                        {MODEL_BENEFITS
                            .iter()
                            .map(|benefit| {
                                view! {
                                    <div class="benefit-item">
                                        <div class="benefit-icon">
                                            <Icon kind={benefit.icon} />
                                        </div>
                                        <p>{benefit.text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="model-human-note">
                        <p class="human-text">
                            "For some students, this is their first real piece of paid work. Students build real deliverables they can put on their CV."
                        </p>
                    </div>

                    <div class="model-reassurance">
                        <div class="reassurance-content">
                            <p class="reassurance-text">
                                <strong>"Every task is low-risk:"</strong>
                                " Students complete a readiness task before working on anything paid. All tasks are fixed-scope and reviewed. You're paying for output, not sponsoring anyone."
                            </p>
                        </div>
                    </div>

                    <div class="model-payoff">
                        <p class="payoff-text">
                            "For many businesses, this is also a way to support someone at the start of their career - without hiring risk."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
