//! Navigation Component
//!
//! Header bar with the title, one button per view and the static user label.

use leptos::*;

use waterwatch::View;

const BUTTON_CLASS: &str = "px-3 py-2 rounded transition-colors";

/// Classes for a navigation button
pub fn button_class(active: bool) -> String {
    if active {
        format!("{BUTTON_CLASS} bg-blue-800 ring-2 ring-white/60")
    } else {
        format!("{BUTTON_CLASS} bg-blue-700 hover:bg-blue-800")
    }
}

/// Navigation header component
#[component]
pub fn Nav(
    #[prop(into)]
    title: String,
    #[prop(into)]
    user_label: String,
    /// Currently shown view
    #[prop(into)]
    active: Signal<View>,
    /// Requests a view change
    #[prop(into)]
    on_select: Callback<View>,
) -> impl IntoView {
    view! {
        <nav class="bg-blue-600 p-4 text-white">
            <div class="container mx-auto flex justify-between items-center">
                <h1 class="text-2xl font-bold">{title}</h1>

                <div class="flex items-center space-x-4">
                    {View::ALL
                        .into_iter()
                        .map(|view| view! { <NavButton view=view active=active on_select=on_select /> })
                        .collect_view()}

                    <span>{user_label}</span>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation button
#[component]
fn NavButton(
    view: View,
    active: Signal<View>,
    on_select: Callback<View>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_select.call(view)
            class=move || button_class(active.get() == view)
            aria-pressed=move || (active.get() == view).to_string()
        >
            {view.label()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert!(button_class(true).contains("bg-blue-800"));
        assert!(button_class(false).starts_with("px-3 py-2 rounded"));
        assert_ne!(button_class(true), button_class(false));
    }
}
