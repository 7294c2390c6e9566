//! App Root Component
//!
//! Owns the active-view state and renders exactly one page.

use leptos::*;

use waterwatch::{Shell, View};

use crate::components::Nav;
use crate::pages::{Dashboard, Reports, RiskMap};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide read-only data to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The single piece of mutable state; children get a signal and a callback
    let shell = create_rw_signal(Shell::new());
    let active = create_memo(move |_| shell.get().active());
    let on_select = Callback::new(move |view: View| {
        shell.update(|shell| {
            shell.select_view(view);
        });
    });

    view! {
        <div class="min-h-screen bg-gray-100">
            <Nav
                title=state.config.dashboard.title.clone()
                user_label=state.config.dashboard.user_label.clone()
                active=active
                on_select=on_select
            />

            <main>
                {move || match active.get() {
                    View::Dashboard => view! { <Dashboard /> }.into_view(),
                    View::Reports => view! { <Reports /> }.into_view(),
                    View::Map => view! { <RiskMap /> }.into_view(),
                }}
            </main>
        </div>
    }
}
