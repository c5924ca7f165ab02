use crate::{
    api::AttendanceRecord,
    components::{empty_state::EmptyState, layout::{ErrorMessage, LoadingSpinner}},
    pages::attendance::{utils::NO_RECORDS, view_model::HistoryPanel},
    state::Loadable,
    theme::{status_badge, tokens},
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn HistorySection(#[prop(into)] panel: Signal<Option<HistoryPanel>>) -> impl IntoView {
    move || {
        panel.get().map(|panel| {
            let heading = format!(
                "Attendance History: {} ({})",
                panel.employee.full_name, panel.employee.employee_id
            );
            let body = match panel.records {
                Loadable::Idle | Loadable::Loading => view! { <LoadingSpinner/> }.into_view(),
                Loadable::Failed(message) => view! { <ErrorMessage message=message/> }.into_view(),
                Loadable::Ready(records) if records.is_empty() => {
                    view! { <EmptyState title=NO_RECORDS/> }.into_view()
                }
                Loadable::Ready(records) => view! { <HistoryTable records=records/> }.into_view(),
            };
            view! {
                <section class=tokens::CARD aria-live="polite">
                    <h3 class=tokens::SUBHEADING>{heading}</h3>
                    {body}
                </section>
            }
        })
    }
}

#[component]
fn HistoryTable(records: Vec<AttendanceRecord>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class=tokens::TABLE>
                <thead>
                    <tr>
                        <th class=tokens::TABLE_HEAD>"Date"</th>
                        <th class=tokens::TABLE_HEAD>"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {records
                        .into_iter()
                        .map(|record| {
                            view! {
                                <tr>
                                    <td class=tokens::TABLE_CELL>{format_display_date(record.date)}</td>
                                    <td class=tokens::TABLE_CELL>
                                        <span class=status_badge(record.status)>{record.status.as_str()}</span>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
