//! Dashboard Page
//!
//! Critical alerts, the fixed supply figures and the status chart.

use leptos::*;

use waterwatch::views::{CardIcon, DashboardSummary, SummaryCard};

use crate::components::{BarChart, Card, CardContent, CardHeader, Icon};
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let summary = DashboardSummary::from_bodies(state.bodies(), &state.config.dashboard);

    view! {
        <div class="container mx-auto mt-8 p-4">
            // Summary row
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <CriticalAlerts count=summary.critical_count names=summary.critical_names />
                <FigureCard card=summary.water_demand />
                <FigureCard card=summary.supply_gap />
            </div>

            // Main chart
            <Card class="mb-8">
                <CardHeader>
                    <h2 class="text-xl font-semibold">"Water Bodies Status"</h2>
                </CardHeader>
                <CardContent>
                    <div class="h-80">
                        <BarChart />
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

/// Count and names of high-risk water bodies
#[component]
fn CriticalAlerts(count: usize, names: Vec<String>) -> impl IntoView {
    view! {
        <Card>
            <CardHeader class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Critical Alerts"</h2>
                <Icon kind=CardIcon::AlertTriangle class="text-red-500" />
            </CardHeader>
            <CardContent>
                <p class="text-3xl font-bold text-red-500">{count}</p>
                <p>"High-risk water bodies:"</p>
                <ul class="list-disc pl-5">
                    {names
                        .into_iter()
                        .map(|name| view! { <li class="text-sm">{name}</li> })
                        .collect_view()}
                </ul>
            </CardContent>
        </Card>
    }
}

/// Card with a single fixed figure
#[component]
fn FigureCard(card: SummaryCard) -> impl IntoView {
    let accent = card.accent.text_class();

    view! {
        <Card>
            <CardHeader class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">{card.title}</h2>
                <Icon kind=card.icon class=accent />
            </CardHeader>
            <CardContent>
                <p class=format!("text-3xl font-bold {}", accent)>{card.figure}</p>
                <p>{card.caption}</p>
            </CardContent>
        </Card>
    }
}
