use crate::{
    state::navigation::{is_active, use_navigation, NAV_ITEMS},
    theme::tokens,
};
use leptos::*;

pub const APP_TITLE: &str = "Human Resource Management System";
pub const MENU_TITLE: &str = "HRMS";

#[component]
pub fn AppBar() -> impl IntoView {
    let nav = use_navigation();
    let open = nav.is_open();
    let toggle_menu = move |_| nav.toggle();

    view! {
        <header class=tokens::APP_BAR>
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex items-center h-16 gap-3">
                    <button
                        type="button"
                        class=tokens::BUTTON_GHOST
                        on:click=toggle_menu
                        aria-expanded=move || open.get()
                        aria-controls="side-nav"
                    >
                        <span class="sr-only">
                            {move || if open.get() { "Collapse menu" } else { "Expand menu" }}
                        </span>
                        <svg
                            class="h-6 w-6"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 24 24"
                            stroke="currentColor"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M4 6h16M4 12h16M4 18h16"
                            />
                        </svg>
                    </button>
                    <h1 class="text-xl font-semibold text-fg">{APP_TITLE}</h1>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SideNav(#[prop(into)] current_path: MaybeSignal<String>) -> impl IntoView {
    let current_path = Signal::derive(move || current_path.get());
    let nav = use_navigation();
    let open = nav.is_open();
    let width = move || if open.get() { "w-60 p-4" } else { "w-16 p-2" };

    view! {
        <aside id="side-nav" class=move || format!("{} {}", tokens::SIDE_NAV, width()) aria-label="Main navigation">
            <div class="mb-6 px-3 text-lg font-bold text-fg">
                {move || if open.get() { MENU_TITLE } else { "H" }}
            </div>
            <nav class="space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        let active = move || is_active(&current_path.get(), item.path);
                        view! {
                            <a
                                href=item.path
                                title=item.label
                                class=move || if active() { tokens::NAV_LINK_ACTIVE } else { tokens::NAV_LINK }
                                aria-current=move || active().then_some("page")
                            >
                                {move || if open.get() { item.label } else { item.short }}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn Layout(#[prop(into)] current_path: MaybeSignal<String>, children: Children) -> impl IntoView {
    view! {
        <div class=tokens::PAGE>
            <AppBar/>
            <div class="flex">
                <SideNav current_path=current_path/>
                <main class="flex-1 max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class=tokens::SPINNER></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=tokens::BANNER_ERROR role="alert">
            <div class="flex items-start">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3 flex-1">
                    <p class="text-sm">{message}</p>
                </div>
                <DismissButton on_dismiss=on_dismiss/>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=tokens::BANNER_SUCCESS role="status">
            <div class="flex items-start">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3 flex-1">
                    <p class="text-sm">{message}</p>
                </div>
                <DismissButton on_dismiss=on_dismiss/>
            </div>
        </div>
    }
}

#[component]
fn DismissButton(on_dismiss: Option<Callback<()>>) -> impl IntoView {
    on_dismiss.map(|callback| {
        view! {
            <button
                type="button"
                aria-label="Dismiss"
                class="ml-3 text-sm opacity-75 hover:opacity-100"
                on:click=move |_| callback.call(())
            >
                {"✕"}
            </button>
        }
    })
}
