use crate::theme::tokens;
use leptos::*;

pub const SHORTCUTS: [(&str, &str, &str); 2] = [
    ("/employees", "Manage Employees", "Add, search and remove employees."),
    ("/attendance", "Mark Attendance", "Record today's attendance and review history."),
];

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class=tokens::CARD>
            <h3 class=tokens::SUBHEADING>"Quick Actions"</h3>
            <div class="grid grid-cols-1 gap-3 sm:grid-cols-2">
                {SHORTCUTS
                    .iter()
                    .map(|(href, label, hint)| view! {
                        <a
                            href=*href
                            class="block rounded-lg border border-border p-4 hover:border-action-primary-bg hover:bg-surface-muted"
                        >
                            <p class="font-medium text-fg">{*label}</p>
                            <p class=tokens::MUTED>{*hint}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
