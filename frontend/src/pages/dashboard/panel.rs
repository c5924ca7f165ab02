use crate::{
    pages::dashboard::{
        components::{QuickActions, SummarySection},
        view_model::{use_dashboard_view_model, DashboardViewModel},
    },
    theme::tokens,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    create_effect(move |_| vm.load_stats());
    view! { <DashboardPanel vm=vm/> }
}

#[component]
pub fn DashboardPanel(vm: DashboardViewModel) -> impl IntoView {
    view! {
        <Title text="Dashboard"/>
        <div class="space-y-6">
            <div>
                <h2 class=tokens::HEADING>"Dashboard"</h2>
                <p class=tokens::MUTED>"Welcome to HRMS Lite."</p>
            </div>
            <SummarySection stats=vm.stats/>
            <QuickActions/>
        </div>
    }
}
