//! Inline SVG icons for card headers

use leptos::*;

use waterwatch::views::CardIcon;

/// Stroke icon in the current text color
#[component]
pub fn Icon(
    kind: CardIcon,
    /// Color classes, e.g. "text-red-500"
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let paths = match kind {
        CardIcon::AlertTriangle => view! {
            <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" />
            <path d="M12 9v4" />
            <path d="M12 17h.01" />
        }
        .into_view(),
        CardIcon::Droplet => view! {
            <path d="M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 11.1 5 13 5 15a7 7 0 0 0 7 7z" />
        }
        .into_view(),
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            {paths}
        </svg>
    }
}
