//! Static page copy

use crate::components::IconKind;

/// Icon + heading + one line of detail
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub detail: &'static str,
}

/// Icon + a single sentence
pub struct Benefit {
    pub icon: IconKind,
    pub text: &'static str,
}

pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const BRAND: &str = "Sprinttern";

pub static WHAT_THIS_IS: [Feature; 3] = [
    Feature {
        icon: IconKind::CheckCircle,
        title: "Short, fixed-scope tasks",
        detail: "Clear deliverables with defined boundaries",
    },
    Feature {
        icon: IconKind::Money,
        title: "Fixed price, low risk",
        detail: "Know the cost upfront, no surprises",
    },
    Feature {
        icon: IconKind::People,
        title: "Personally managed pilot",
        detail: "Direct oversight to ensure quality",
    },
];

pub static MODEL_BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: IconKind::CheckCircle,
        text: "Students care about doing a good job",
    },
    Benefit {
        icon: IconKind::People,
        text: "They value feedback",
    },
    Benefit {
        icon: IconKind::Layout,
        text: "They take small, well-scoped tasks seriously",
    },
    Benefit {
        icon: IconKind::Money,
        text: "They are building real experience, not chasing volume",
    },
];

pub static EXAMPLE_TASKS: [Feature; 6] = [
    Feature {
        icon: IconKind::Layout,
        title: "Create a simple landing page",
        detail: "Professional one-page website for your service or product",
    },
    Feature {
        icon: IconKind::People,
        title: "Draft 5–10 social media posts",
        detail: "Ready-to-use content for your social channels",
    },
    Feature {
        icon: IconKind::Document,
        title: "Clean and organise sales data",
        detail: "Structured spreadsheet with clear categories and formatting",
    },
    Feature {
        icon: IconKind::Search,
        title: "Research competitors or suppliers",
        detail: "Summary document with key findings and recommendations",
    },
    Feature {
        icon: IconKind::Mail,
        title: "Create email templates",
        detail: "Professional templates for common customer communications",
    },
    Feature {
        icon: IconKind::People,
        title: "Organise customer feedback",
        detail: "Compile and categorise feedback into actionable insights",
    },
];

pub static STEPS: [Step; 3] = [
    Step {
        title: "Describe the task you need help with",
        detail: "Tell us exactly what you need completed",
    },
    Step {
        title: "We match you with a vetted student",
        detail: "Hand-selected based on your specific requirements",
    },
    Step {
        title: "You receive the completed work and only pay for the task",
        detail: "Fixed price, no ongoing commitments",
    },
];

pub static TRUST_BADGES: [Feature; 4] = [
    Feature {
        icon: IconKind::Shield,
        title: "Limited pilot",
        detail: "Max 10 businesses",
    },
    Feature {
        icon: IconKind::CheckCircle,
        title: "No long-term commitment",
        detail: "Pay per task only",
    },
    Feature {
        icon: IconKind::Money,
        title: "Fixed scope and pricing",
        detail: "Clear upfront costs",
    },
    Feature {
        icon: IconKind::People,
        title: "Manual oversight",
        detail: "Quality assured",
    },
];

pub const FOUNDER_PROFILE_URL: &str = "https://www.linkedin.com/in/anthony-oparaocha-287633271/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_sizes() {
        assert_eq!(WHAT_THIS_IS.len(), 3);
        assert_eq!(MODEL_BENEFITS.len(), 4);
        assert_eq!(EXAMPLE_TASKS.len(), 6);
        assert_eq!(STEPS.len(), 3);
        assert_eq!(TRUST_BADGES.len(), 4);
    }

    #[test]
    fn test_no_blank_copy() {
        let features = WHAT_THIS_IS.iter().chain(&EXAMPLE_TASKS).chain(&TRUST_BADGES);
        for feature in features {
            assert!(!feature.title.is_empty());
            assert!(!feature.detail.is_empty());
        }
        assert!(STEPS.iter().all(|s| !s.title.is_empty() && !s.detail.is_empty()));
    }
}
