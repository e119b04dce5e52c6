use leptos::prelude::*;

use crate::components::Icon;
use crate::content::WHAT_THIS_IS;

#[component]
pub fn WhatThisIs() -> impl IntoView {
    view! {
        <section class="what-this-is">
            <div class="container">
                <h2 class="section-title">"What This Is"</h2>
                <div class="bullet-list">
                    {WHAT_THIS_IS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="bullet-item card">
                                    <div class="bullet-icon-wrapper">
                                        <Icon kind={item.icon} class="bullet-icon" />
                                    </div>
                                    <div class="bullet-content">
                                        <h3>{item.title}</h3>
                                        <p>{item.detail}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
