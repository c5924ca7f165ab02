use crate::{
    api::{AttendanceStatus, Employee},
    components::forms::SubmitButton,
    pages::attendance::{utils::picker_label, view_model::AttendanceViewModel},
    theme::tokens,
};
use leptos::{ev, *};

#[component]
pub fn MarkAttendanceCard(vm: AttendanceViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.mark_action.pending();
    let options = vm.picker_options();
    let no_selection = Signal::derive(move || !form.with(|state| state.has_selection()));
    let show_options = Signal::derive(move || {
        form.with(|state| !state.has_selection() && !state.picker_query.trim().is_empty())
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_mark();
    };

    view! {
        <div class=tokens::CARD>
            <h3 class=tokens::SUBHEADING>"Mark Attendance"</h3>
            <form class="grid gap-4 md:grid-cols-4 md:items-end" on:submit=on_submit>
                <div class="relative md:col-span-2">
                    <label class=tokens::LABEL>"Employee"</label>
                    <div class="flex gap-2">
                        <input
                            type="text"
                            class=tokens::INPUT
                            placeholder="Search by name, ID or department"
                            autocomplete="off"
                            prop:value=move || form.with(|s| s.picker_query.clone())
                            on:input=move |ev| form.update(|s| s.set_query(event_target_value(&ev)))
                        />
                        <Show when=move || form.with(|s| s.has_selection())>
                            <button
                                type="button"
                                class=tokens::BUTTON_GHOST
                                on:click=move |_| form.update(|s| s.clear_selection())
                            >
                                "Clear"
                            </button>
                        </Show>
                    </div>
                    <Show when=move || show_options.get()>
                        <ul
                            role="listbox"
                            class="absolute z-10 mt-1 w-full max-h-60 overflow-auto rounded-md border border-border bg-surface-elevated shadow"
                        >
                            {move || {
                                let list = options.get();
                                if list.is_empty() {
                                    view! {
                                        <li class="px-3 py-2 text-sm text-fg-muted">"No matching employees"</li>
                                    }
                                    .into_view()
                                } else {
                                    list.into_iter()
                                        .map(|employee: Employee| {
                                            let label = picker_label(&employee);
                                            view! {
                                                <li>
                                                    <button
                                                        type="button"
                                                        role="option"
                                                        class="w-full px-3 py-2 text-left text-sm text-fg hover:bg-surface-muted"
                                                        on:click=move |_| vm.select_employee(employee.clone())
                                                    >
                                                        {label}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }
                            }}
                        </ul>
                    </Show>
                </div>
                <div>
                    <label class=tokens::LABEL>"Date"</label>
                    <input
                        type="date"
                        class=tokens::INPUT
                        prop:value=move || form.with(|s| s.date.clone())
                        on:input=move |ev| form.update(|s| s.date = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=tokens::LABEL>"Status"</label>
                    <select
                        class=tokens::INPUT
                        prop:value=move || form.with(|s| s.status.as_str())
                        on:change=move |ev| {
                            if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                form.update(|s| s.status = status);
                            }
                        }
                    >
                        {AttendanceStatus::ALL
                            .iter()
                            .map(|status| {
                                let value = status.as_str();
                                view! {
                                    <option value=value selected=move || form.with(|s| s.status.as_str() == value)>
                                        {value}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="md:col-span-4 flex justify-end">
                    <SubmitButton
                        disabled=no_selection
                        pending=pending
                        label="Mark Attendance"
                        pending_label="Marking..."
                    />
                </div>
            </form>
        </div>
    }
}
