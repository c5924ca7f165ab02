use super::{
    components::{form::MarkAttendanceCard, history::HistorySection, roster::RosterTable},
    view_model::{use_attendance_view_model, AttendanceViewModel},
};
use crate::{
    api::Employee,
    components::layout::{ErrorMessage, SuccessMessage},
    state::MessageState,
    theme::tokens,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    create_effect(move |_| vm.load_employees());
    view! { <AttendancePanel vm=vm/> }
}

#[component]
pub fn AttendancePanel(vm: AttendanceViewModel) -> impl IntoView {
    let load_error = Signal::derive(move || vm.employees.with(|s| s.error().map(str::to_string)));
    let messages = vm.messages;
    let selected = Signal::derive(move || vm.history_employee.with(|e| e.as_ref().map(|e| e.id)));

    view! {
        <Title text="Attendance"/>
        <div class="space-y-6">
            <div>
                <h2 class=tokens::HEADING>"Attendance"</h2>
                <p class=tokens::MUTED>"Mark daily attendance and review history per employee."</p>
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

            <MarkAttendanceCard vm=vm/>
            <RosterTable
                state=vm.employees
                rows=vm.roster()
                search=vm.roster_search
                on_view=Callback::new(move |employee: Employee| vm.view_history(employee))
                selected=selected
            />
            <HistorySection panel=vm.history_panel()/>
        </div>
    }
}
