use crate::api::ApiError;
use leptos::*;

/// Form-level error: the backend detail verbatim (or `fallback`) plus the
/// HTTP status when a response was received.
#[component]
pub fn InlineErrorMessage(
    #[prop(into)] error: Signal<Option<ApiError>>,
    fallback: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
                role="alert"
            >
                <div class="font-bold">
                    {move || error.get().map(|e| e.message_or(fallback)).unwrap_or_default()}
                </div>
                {move || {
                    error
                        .get()
                        .and_then(|e| e.status)
                        .map(|status| view! { <div class="text-xs opacity-75">{format!("Status: {}", status)}</div> })
                }}
            </div>
        </Show>
    }
}
