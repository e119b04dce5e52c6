//! Waitlist Form
//!
//! The only interactive part of the page. State lives in a single
//! `FormController` signal; the request body is the snapshot taken when the
//! submit starts, so typing during the request is safe.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sprinttern_core::{Budget, Field, FormController, SubmissionStatus, Timeline, WaitlistApi};

use crate::api;
use crate::content::FOUNDER_PROFILE_URL;

#[component]
pub fn WaitlistForm() -> impl IntoView {
    let controller = RwSignal::new(FormController::new());
    let in_flight = move || controller.with(FormController::is_in_flight);
    let status = move || controller.with(FormController::status);
    let error_message = move || controller.with(FormController::error_message);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if controller.with_untracked(FormController::is_in_flight) {
            return;
        }
        let Some(pending) = controller.try_update(FormController::begin_submit) else {
            return;
        };

        spawn_local(async move {
            let outcome = match api::waitlist_client() {
                Ok(client) => client.submit(pending.draft()).await,
                Err(e) => Err(e),
            };
            controller.update(|c| {
                c.finish_submit(outcome);
            });
        });
    };

    let timeline_options: Vec<_> = Timeline::ALL.iter().map(|t| (t.as_str(), t.label())).collect();
    let budget_options: Vec<_> = Budget::ALL.iter().map(|b| (b.as_str(), b.label())).collect();

    view! {
        <section id="waitlist-form" class="waitlist-form">
            <div class="container">
                <div class="form-header">
                    <h2 class="section-title">"Request Pilot Access"</h2>
                    <p class="form-helper">"Takes ~2 minutes"</p>
                </div>

                <form on:submit=on_submit class="form">
                    <div class="form-group">
                        <label for=Field::TaskDescription.key()>
                            "Describe one specific task you'd like help with in the next 30 days"
                        </label>
                        <textarea
                            id=Field::TaskDescription.key()
                            name=Field::TaskDescription.key()
                            rows="5"
                            required=true
                            placeholder="e.g., Create a simple landing page for our new service, including contact form and basic SEO setup..."
                            prop:value=move || controller.with(|c| c.draft().task_description.clone())
                            on:input=move |ev| {
                                controller.update(|c| c.update_field(Field::TaskDescription, event_target_value(&ev)));
                            }
                        ></textarea>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for=Field::CompanyName.key()>"Company name"</label>
                            <TextInput controller=controller field=Field::CompanyName />
                        </div>
                        <div class="form-group">
                            <label for=Field::Role.key()>"Your role"</label>
                            <TextInput controller=controller field=Field::Role />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for=Field::Email.key()>"Email"</label>
                            <TextInput controller=controller field=Field::Email input_type="email" />
                        </div>
                        <div class="form-group">
                            <label for=Field::Website.key()>"Website or LinkedIn"</label>
                            <TextInput controller=controller field=Field::Website placeholder="https://..." />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for=Field::Timeline.key()>
                                "Timeline"
                                <span class="info-tooltip">
                                    <span class="info-icon">"i"</span>
                                    <span class="info-text">
                                        "When would you like to be matched with a student by?"
                                    </span>
                                </span>
                            </label>
                            <SelectInput
                                controller=controller
                                field=Field::Timeline
                                prompt="Select timeline"
                                options=timeline_options
                            />
                        </div>
                        <div class="form-group">
                            <label for=Field::Budget.key()>"Budget range"</label>
                            <SelectInput
                                controller=controller
                                field=Field::Budget
                                prompt="Select budget"
                                options=budget_options
                            />
                        </div>
                    </div>

                    <Show when=move || status() == SubmissionStatus::Success>
                        <div class="form-success">
                            "Thank you for your request. We'll be in touch shortly."
                        </div>
                    </Show>
                    <Show when=move || status() == SubmissionStatus::Error>
                        <div class="form-error">{error_message}</div>
                    </Show>

                    <button type="submit" class="cta-button primary submit-button" disabled=in_flight>
                        {move || if in_flight() { "Submitting..." } else { "Request pilot access" }}
                    </button>
                </form>

                <div class="founder-credibility">
                    <p class="credibility-text">
                        "Built by a founder who's worked inside high-growth UK tech teams (Monzo, incident.io)."
                    </p>
                    <p class="credibility-text">
                        "The goal is simple: get real work done for businesses, and real experience for students."
                    </p>
                    <a href=FOUNDER_PROFILE_URL target="_blank" rel="noopener noreferrer" class="credibility-link">
                        "View founder profile →"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Single-line input bound to one draft field
#[component]
fn TextInput(
    controller: RwSignal<FormController>,
    field: Field,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type=input_type.unwrap_or("text")
            id=field.key()
            name=field.key()
            required=field.is_required()
            placeholder=placeholder
            prop:value=move || controller.with(|c| c.draft().get(field).to_string())
            on:input=move |ev| {
                controller.update(|c| c.update_field(field, event_target_value(&ev)));
            }
        />
    }
}

/// Dropdown over a fixed set of wire values, with an empty prompt option
#[component]
fn SelectInput(
    controller: RwSignal<FormController>,
    field: Field,
    prompt: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <select
            id=field.key()
            name=field.key()
            required=field.is_required()
            prop:value=move || controller.with(|c| c.draft().get(field).to_string())
            on:change=move |ev| {
                controller.update(|c| c.update_field(field, event_target_value(&ev)));
            }
        >
            <option value="">{prompt}</option>
            {options
                .into_iter()
                .map(|(value, label)| view! { <option value=value>{label}</option> })
                .collect_view()}
        </select>
    }
}
