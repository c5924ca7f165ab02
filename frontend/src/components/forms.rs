use crate::theme::tokens;
use leptos::*;

#[component]
pub fn SearchBox(
    query: RwSignal<String>,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Search".to_string());
    view! {
        <div class="w-full sm:max-w-sm">
            <label class="sr-only">{label}</label>
            <input
                type="search"
                class=tokens::INPUT
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled text input bound to one field of a form state signal.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class=tokens::LABEL>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                class=tokens::INPUT
                placeholder=placeholder.unwrap_or_default()
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    label: &'static str,
    pending_label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=tokens::BUTTON_PRIMARY
            disabled=move || disabled.get() || pending.get()
        >
            <Show when=move || pending.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {move || if pending.get() { pending_label } else { label }}
        </button>
    }
}
