use leptos::prelude::*;

use crate::content::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">{BRAND}</div>
                    <p>"Limited pilot programme for UK small businesses (1–20 employees)"</p>
                </div>
            </div>
        </footer>
    }
}
