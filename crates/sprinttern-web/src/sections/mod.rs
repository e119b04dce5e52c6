//! Page Sections, top to bottom

mod example_tasks;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod trust;
mod waitlist;
mod what_this_is;
mod why_model;

pub use example_tasks::ExampleTasks;
pub use footer::Footer;
pub use header::SiteHeader;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use trust::TrustSection;
pub use waitlist::WaitlistForm;
pub use what_this_is::WhatThisIs;
pub use why_model::WhyModelWorks;
