use leptos::prelude::*;

use crate::content::STEPS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <div class="container">
                <h2 class="section-title">"How It Works"</h2>
                <div class="steps-container">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div class="step">
                                    <div class="step-number">{i + 1}</div>
                                    <h3>{step.title}</h3>
                                    <p>{step.detail}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
