use super::{
    components::{create_form::CreateEmployeeDialog, list::EmployeeTable},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::{
    api::Employee,
    components::{
        confirm_dialog::ConfirmDialog,
        forms::SearchBox,
        layout::{ErrorMessage, SuccessMessage},
    },
    state::MessageState,
    theme::tokens,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    create_effect(move |_| vm.load_employees());
    view! { <EmployeesPanel vm=vm/> }
}

#[component]
pub fn EmployeesPanel(vm: EmployeesViewModel) -> impl IntoView {
    let load_error = Signal::derive(move || vm.employees.with(|s| s.error().map(str::to_string)));
    let messages = vm.messages;
    let deleting = vm.delete_action.pending();

    let confirm_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|employee: Employee| {
                format!(
                    "Are you sure you want to delete {} ({})?",
                    employee.full_name, employee.employee_id
                )
            })
            .unwrap_or_default()
    });

    view! {
        <Title text="Employees"/>
        <div class="space-y-6">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h2 class=tokens::HEADING>"Employees"</h2>
                    <p class=tokens::MUTED>"Manage the employee roster."</p>
                </div>
                <button type="button" class=tokens::BUTTON_PRIMARY on:click=move |_| vm.open_create_dialog()>
                    "Add Employee"
                </button>
            </div>

            {move || load_error.get().map(|message| view! { <ErrorMessage message=message/> })}
            {move || messages.get().error.map(|message| view! {
                <ErrorMessage
                    message=message
                    on_dismiss=Callback::new(move |_| messages.update(MessageState::clear_error))
                />
            })}
            {move || messages.get().success.map(|message| view! {
                <SuccessMessage
                    message=message
                    on_dismiss=Callback::new(move |_| messages.update(MessageState::clear_success))
                />
            })}

            <SearchBox
                query=vm.search
                placeholder="Search by name, ID, email or department"
                label="Search employees"
            />
            <EmployeeTable
                state=vm.employees
                rows=vm.filtered()
                on_delete=Callback::new(move |employee: Employee| vm.request_delete(employee))
                deleting=deleting
            />
        </div>

        <CreateEmployeeDialog vm=vm/>
        <ConfirmDialog
            is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
            title="Delete employee"
            message=confirm_message
            confirm_label="Delete"
            destructive=true
            confirm_disabled=deleting
            on_confirm=Callback::new(move |_| vm.confirm_delete())
            on_cancel=Callback::new(move |_| vm.cancel_delete())
        />
    }
}
