//! Risk Badge Component

use leptos::*;

use waterwatch::RiskLevel;

/// Colored pill showing a risk level
#[component]
pub fn RiskBadge(risk: RiskLevel) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 rounded {}", risk.style().badge_class)>
            {risk.label()}
        </span>
    }
}
