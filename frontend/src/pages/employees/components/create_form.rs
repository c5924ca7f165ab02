use crate::{
    components::{
        error::InlineErrorMessage,
        forms::{SubmitButton, TextField},
    },
    pages::employees::{utils::CREATE_FAILED, view_model::EmployeesViewModel},
    theme::tokens,
};
use leptos::{ev, *};

#[component]
pub fn CreateEmployeeDialog(vm: EmployeesViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.create_action.pending();
    let incomplete = Signal::derive(move || !form.with(|state| state.is_valid()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_create();
    };
    let on_close = move |_| vm.close_create_dialog();

    view! {
        <Show when=move || vm.dialog_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button type="button" aria-label="Close" class=tokens::OVERLAY on:click=on_close></button>
                <div class=tokens::DIALOG role="dialog" aria-modal="true">
                    <div class="flex items-start justify-between gap-3">
                        <h2 class=tokens::SUBHEADING>"Add Employee"</h2>
                        <button type="button" aria-label="Close" class="text-fg-muted hover:text-fg" on:click=on_close>
                            {"✕"}
                        </button>
                    </div>
                    <InlineErrorMessage error=vm.form_error fallback=CREATE_FAILED/>
                    <form class="space-y-3" on:submit=on_submit>
                        <TextField
                            label="Employee ID"
                            value=Signal::derive(move || form.with(|s| s.employee_id.clone()))
                            on_input=Callback::new(move |v: String| form.update(|s| s.employee_id = v))
                            placeholder="EMP-001"
                        />
                        <TextField
                            label="Full Name"
                            value=Signal::derive(move || form.with(|s| s.full_name.clone()))
                            on_input=Callback::new(move |v: String| form.update(|s| s.full_name = v))
                        />
                        <TextField
                            label="Email"
                            input_type="email"
                            value=Signal::derive(move || form.with(|s| s.email.clone()))
                            on_input=Callback::new(move |v: String| form.update(|s| s.email = v))
                        />
                        <TextField
                            label="Department"
                            value=Signal::derive(move || form.with(|s| s.department.clone()))
                            on_input=Callback::new(move |v: String| form.update(|s| s.department = v))
                        />
                        <TextField
                            label="Hire Date"
                            input_type="date"
                            value=Signal::derive(move || form.with(|s| s.hire_date.clone()))
                            on_input=Callback::new(move |v: String| form.update(|s| s.hire_date = v))
                        />
                        <div class="flex justify-end gap-2 pt-2">
                            <button type="button" class=tokens::BUTTON_SECONDARY on:click=on_close>
                                "Cancel"
                            </button>
                            <SubmitButton
                                disabled=incomplete
                                pending=pending
                                label="Create"
                                pending_label="Creating..."
                            />
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
