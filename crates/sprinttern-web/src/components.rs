//! UI Components

use leptos::prelude::*;

use crate::content::Feature;

/// Line icons drawn on a 24x24 grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    CheckCircle,
    Money,
    People,
    Layout,
    Document,
    Search,
    Mail,
    Shield,
}

impl IconKind {
    /// SVG path data; circles and rects are written as arcs and lines
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::CheckCircle => &[
                "M9 12l2 2 4-4",
                "M21 12c0 4.97-4.03 9-9 9s-9-4.03-9-9 4.03-9 9-9 9 4.03 9 9z",
            ],
            Self::Money => &["M12 2v20M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Self::People => &[
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18M9 21V9",
            ],
            Self::Document => &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6M16 13H8M16 17H8M10 9H8",
            ],
            Self::Search => &["M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0", "M21 21l-4.35-4.35"],
            Self::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Self::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
            {kind
                .paths()
                .iter()
                .map(|&d| view! { <path d=d stroke-linecap="round" stroke-linejoin="round" /> })
                .collect_view()}
        </svg>
    }
}

/// Wave between two sections
#[component]
pub fn SectionDivider(#[prop(optional)] reverse: bool) -> impl IntoView {
    let (class, d, fill) = if reverse {
        (
            "section-divider section-divider-reverse",
            "M0,60 Q300,100 600,60 T1200,60 L1200,0 L0,0 Z",
            "var(--white)",
        )
    } else {
        (
            "section-divider",
            "M0,60 Q300,20 600,60 T1200,60 L1200,120 L0,120 Z",
            "var(--bg-alt)",
        )
    };

    view! {
        <div class=class>
            <svg viewBox="0 0 1200 120" preserveAspectRatio="none" class="divider-svg">
                <path d=d fill=fill />
            </svg>
        </div>
    }
}

/// Card with an icon, heading and one line of detail
#[component]
pub fn FeatureCard(
    feature: &'static Feature,
    card_class: &'static str,
    icon_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=card_class>
            <div class=icon_class>
                <Icon kind={feature.icon} />
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.detail}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        let kinds = [
            IconKind::CheckCircle,
            IconKind::Money,
            IconKind::People,
            IconKind::Layout,
            IconKind::Document,
            IconKind::Search,
            IconKind::Mail,
            IconKind::Shield,
        ];
        for kind in kinds {
            assert!(!kind.paths().is_empty(), "{kind:?}");
            assert!(kind.paths().iter().all(|d| d.starts_with('M')), "{kind:?}");
        }
    }
}
