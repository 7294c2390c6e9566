//! Card Components
//!
//! Layout containers used by every view. No state, no behaviour.

use leptos::*;

const CARD_CLASS: &str = "bg-white shadow-md rounded-lg";
const CARD_HEADER_CLASS: &str = "px-4 py-5 border-b border-gray-200 sm:px-6";
const CARD_CONTENT_CLASS: &str = "px-4 py-5 sm:p-6";

/// Append caller classes to a container's base classes
pub fn compose_class(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// White rounded panel
#[component]
pub fn Card(
    /// Extra classes appended to the base style
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=compose_class(CARD_CLASS, &class)>
            {children()}
        </div>
    }
}

/// Card title row with a bottom border
#[component]
pub fn CardHeader(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=compose_class(CARD_HEADER_CLASS, &class)>
            {children()}
        </div>
    }
}

/// Padded card body
#[component]
pub fn CardContent(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=compose_class(CARD_CONTENT_CLASS, &class)>
            {children()}
        </div>
    }
}
