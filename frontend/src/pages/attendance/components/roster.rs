use crate::{
    api::Employee,
    components::{empty_state::EmptyState, forms::SearchBox, layout::LoadingSpinner},
    state::Loadable,
    theme::tokens,
};
use leptos::*;

/// Employees with a button that opens their attendance history.
#[component]
pub fn RosterTable(
    #[prop(into)] state: Signal<Loadable<Vec<Employee>>>,
    #[prop(into)] rows: Signal<Vec<Employee>>,
    search: RwSignal<String>,
    on_view: Callback<Employee>,
    #[prop(into)] selected: Signal<Option<i64>>,
) -> impl IntoView {
    let loading = Signal::derive(move || state.with(|s| matches!(s, Loadable::Idle | Loadable::Loading)));
    let loaded = Signal::derive(move || state.with(|s| s.ready().is_some()));

    view! {
        <div class=tokens::CARD>
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <h3 class=tokens::SUBHEADING>"Employees"</h3>
                <SearchBox
                    query=search
                    placeholder="Search by name, ID or department"
                    label="Search roster"
                />
            </div>
            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || loaded.get() && rows.with(Vec::is_empty)>
                <EmptyState title="No employees found"/>
            </Show>
            <Show when=move || !rows.with(Vec::is_empty)>
                <div class="overflow-x-auto">
                    <table class=tokens::TABLE>
                        <thead>
                            <tr>
                                <th class=tokens::TABLE_HEAD>"Employee ID"</th>
                                <th class=tokens::TABLE_HEAD>"Full Name"</th>
                                <th class=tokens::TABLE_HEAD>"Department"</th>
                                <th class=tokens::TABLE_HEAD><span class="sr-only">"Actions"</span></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || rows.get()
                                key=|employee| employee.id
                                children=move |employee: Employee| {
                                    let id = employee.id;
                                    let target = employee.clone();
                                    let row_class = move || {
                                        if selected.get() == Some(id) { "bg-surface-muted" } else { "" }
                                    };
                                    view! {
                                        <tr class=row_class>
                                            <td class=tokens::TABLE_CELL>{employee.employee_id.clone()}</td>
                                            <td class=tokens::TABLE_CELL>{employee.full_name.clone()}</td>
                                            <td class=tokens::TABLE_CELL>{employee.department.clone()}</td>
                                            <td class=tokens::TABLE_CELL>
                                                <button
                                                    type="button"
                                                    class=tokens::LINK_BUTTON
                                                    on:click=move |_| on_view.call(target.clone())
                                                >
                                                    "View Attendance"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
