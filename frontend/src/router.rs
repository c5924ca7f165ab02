use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::{Layout, APP_TITLE},
    pages::{AttendancePage, DashboardPage, EmployeesPage},
    state::navigation::provide_navigation,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    provide_navigation();
    view! {
        <Title formatter=|page: String| format!("{} | {}", page, APP_TITLE)/>
        <Router>
            <AppShell/>
        </Router>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());
    view! {
        <Layout current_path=current_path>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/*any" view=DashboardPage/>
            </Routes>
        </Layout>
    }
}
