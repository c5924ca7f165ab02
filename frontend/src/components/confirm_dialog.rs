use crate::theme::tokens;
use leptos::ev::KeyboardEvent;
use leptos::*;

fn label_or(text: String, default: &str) -> String {
    if text.trim().is_empty() {
        default.to_string()
    } else {
        text
    }
}

/// Modal yes/no prompt. Backdrop click, the close button and Escape all cancel.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive {
        tokens::BUTTON_DANGER
    } else {
        tokens::BUTTON_PRIMARY
    };
    let confirm_text = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let cancel_text = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class=tokens::OVERLAY
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class=tokens::DIALOG
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class=tokens::SUBHEADING>{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    <p class=tokens::MUTED>{move || message_text.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class=tokens::BUTTON_SECONDARY
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_text.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_class
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
