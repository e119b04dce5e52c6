//! Site Header

use leptos::prelude::*;

use crate::content::BRAND;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container">
                <div class="header-content">
                    <div class="logo">{BRAND}</div>
                </div>
            </div>
        </header>
    }
}
