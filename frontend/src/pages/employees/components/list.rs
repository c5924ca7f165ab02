use crate::{
    api::Employee,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    state::Loadable,
    theme::tokens,
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn EmployeeTable(
    #[prop(into)] state: Signal<Loadable<Vec<Employee>>>,
    #[prop(into)] rows: Signal<Vec<Employee>>,
    on_delete: Callback<Employee>,
    #[prop(into)] deleting: Signal<bool>,
) -> impl IntoView {
    let loading = Signal::derive(move || state.with(|s| matches!(s, Loadable::Idle | Loadable::Loading)));
    let loaded = Signal::derive(move || state.with(|s| s.ready().is_some()));
    let has_any = Signal::derive(move || state.with(|s| s.ready().map(|l| !l.is_empty()).unwrap_or(false)));

    view! {
        <div class=tokens::CARD>
            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || loaded.get() && rows.with(Vec::is_empty)>
                {move || if has_any.get() {
                    view! { <EmptyState title="No employees match your search"/> }.into_view()
                } else {
                    view! {
                        <EmptyState
                            title="No employees found"
                            description="Add your first employee to get started."
                        />
                    }
                    .into_view()
                }}
            </Show>
            <Show when=move || !rows.with(Vec::is_empty)>
                <div class="overflow-x-auto">
                    <table class=tokens::TABLE>
                        <thead>
                            <tr>
                                <th class=tokens::TABLE_HEAD>"Employee ID"</th>
                                <th class=tokens::TABLE_HEAD>"Full Name"</th>
                                <th class=tokens::TABLE_HEAD>"Email"</th>
                                <th class=tokens::TABLE_HEAD>"Department"</th>
                                <th class=tokens::TABLE_HEAD>"Hire Date"</th>
                                <th class=tokens::TABLE_HEAD><span class="sr-only">"Actions"</span></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || rows.get()
                                key=|employee| employee.id
                                children=move |employee: Employee| {
                                    let target = employee.clone();
                                    view! {
                                        <tr>
                                            <td class=tokens::TABLE_CELL>{employee.employee_id.clone()}</td>
                                            <td class=tokens::TABLE_CELL>{employee.full_name.clone()}</td>
                                            <td class=tokens::TABLE_CELL>{employee.email.clone()}</td>
                                            <td class=tokens::TABLE_CELL>{employee.department.clone()}</td>
                                            <td class=tokens::TABLE_CELL>{format_display_date(employee.hire_date)}</td>
                                            <td class=tokens::TABLE_CELL>
                                                <button
                                                    type="button"
                                                    class="text-sm font-medium text-action-danger-bg hover:underline disabled:opacity-50"
                                                    disabled=move || deleting.get()
                                                    on:click=move |_| on_delete.call(target.clone())
                                                >
                                                    "Delete"
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
