use leptos::prelude::*;

use crate::components::FeatureCard;
use crate::content::EXAMPLE_TASKS;

#[component]
pub fn ExampleTasks() -> impl IntoView {
    view! {
        <section class="example-tasks">
            <div class="container">
                <h2 class="section-title">"Example Tasks"</h2>
                <div class="tasks-grid">
                    {EXAMPLE_TASKS
                        .iter()
                        .map(|task| view! { <FeatureCard feature=task card_class="task-card" icon_class="task-icon" /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
