use crate::{
    api::DashboardStats,
    components::layout::{ErrorMessage, LoadingSpinner},
    state::Loadable,
    theme::tokens,
};
use leptos::*;

/// Today's counters. A failed fetch shows one error in place of all three.
#[component]
pub fn SummarySection(#[prop(into)] stats: Signal<Loadable<DashboardStats>>) -> impl IntoView {
    view! {
        <div class=tokens::CARD>
            <div>
                <h3 class=tokens::SUBHEADING>"Overview"</h3>
                <p class=tokens::MUTED>"Headcount and today's attendance at a glance."</p>
            </div>
            {move || match stats.get() {
                Loadable::Idle | Loadable::Loading => view! { <LoadingSpinner/> }.into_view(),
                Loadable::Failed(message) => view! { <ErrorMessage message=message/> }.into_view(),
                Loadable::Ready(data) => view! {
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                        <Metric label="Total Employees" value=data.total_employees/>
                        <Metric label="Present Today" value=data.present_today/>
                        <Metric label="Absent Today" value=data.absent_today/>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn Metric(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface p-5" role="group" aria-label={format!("{}: {}", label, value)}>
            <p class="text-xs font-semibold uppercase tracking-wide text-fg-muted">{label}</p>
            <p class="mt-2 text-3xl font-bold text-fg">{value.to_string()}</p>
        </div>
    }
}
