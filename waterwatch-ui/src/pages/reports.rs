//! Reports Page
//!
//! Risk assessment table, one row per water body.

use leptos::*;

use waterwatch::views::{report_rows, REPORT_COLUMNS};

use crate::components::{Card, CardContent, CardHeader, RiskBadge};
use crate::state::GlobalState;

#[component]
pub fn Reports() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="container mx-auto mt-8 p-4">
            <Card>
                <CardHeader>
                    <h2 class="text-xl font-semibold">"Risk Assessment Report"</h2>
                </CardHeader>
                <CardContent>
                    <table class="min-w-full">
                        <thead>
                            <tr>
                                {REPORT_COLUMNS
                                    .into_iter()
                                    .map(|column| view! { <th class="text-left">{column}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {report_rows(state.bodies())
                                .map(|row| view! {
                                    <tr class={row.row_class()}>
                                        <td class="py-2">{row.name}</td>
                                        <td class="py-2">
                                            <RiskBadge risk=row.risk />
                                        </td>
                                        <td class="py-2">{row.affected}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </CardContent>
            </Card>
        </div>
    }
}
