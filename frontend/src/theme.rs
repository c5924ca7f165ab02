use crate::api::AttendanceStatus;

/// Utility-class tokens shared by every view. Components compose these
/// instead of spelling out palette classes, so a palette change stays here.
pub mod tokens {
    pub const PAGE: &str = "min-h-screen bg-surface text-fg";
    pub const CARD: &str = "bg-surface-elevated shadow rounded-lg p-6 border border-border space-y-4";
    pub const HEADING: &str = "text-2xl font-semibold text-fg";
    pub const SUBHEADING: &str = "text-lg font-medium text-fg";
    pub const MUTED: &str = "text-sm text-fg-muted";
    pub const LABEL: &str = "block text-sm font-medium text-fg-muted";
    pub const INPUT: &str =
        "mt-1 w-full border border-border rounded px-3 py-2 bg-surface text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg";

    pub const BUTTON_PRIMARY: &str =
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50";
    pub const BUTTON_DANGER: &str =
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50";
    pub const BUTTON_SECONDARY: &str =
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated";
    pub const BUTTON_GHOST: &str =
        "inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover";
    pub const LINK_BUTTON: &str = "text-sm font-medium text-action-primary-bg hover:underline";

    pub const TABLE: &str = "min-w-full divide-y divide-border";
    pub const TABLE_HEAD: &str =
        "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
    pub const TABLE_CELL: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg";

    pub const APP_BAR: &str = "bg-surface-elevated shadow-sm border-b border-border";
    pub const SIDE_NAV: &str = "bg-surface-elevated border-r border-border min-h-screen transition-all";
    pub const NAV_LINK: &str =
        "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover";
    pub const NAV_LINK_ACTIVE: &str =
        "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text";

    pub const BANNER_ERROR: &str =
        "bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4";
    pub const BANNER_SUCCESS: &str =
        "bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4";

    pub const BADGE_PRESENT: &str =
        "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-status-success-bg text-status-success-text";
    pub const BADGE_ABSENT: &str =
        "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-status-error-bg text-status-error-text";

    pub const SPINNER: &str = "animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg";
    pub const OVERLAY: &str = "absolute inset-0 bg-overlay-backdrop";
    pub const DIALOG: &str =
        "relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4";
}

pub fn status_badge(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => tokens::BADGE_PRESENT,
        AttendanceStatus::Absent => tokens::BADGE_ABSENT,
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    const DARK_CLASS: &str = "dark";

    fn update_html_class(html: &web_sys::Element, is_dark: bool) {
        let list = html.class_list();
        let _ = if is_dark {
            list.add_1(DARK_CLASS)
        } else {
            list.remove_1(DARK_CLASS)
        };
    }

    /// Follows `prefers-color-scheme` by toggling `dark` on `<html>`.
    pub fn init() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(html) = window.document().and_then(|doc| doc.document_element()) else {
            return;
        };

        match window.match_media("(prefers-color-scheme: dark)").ok().flatten() {
            Some(query) => {
                update_html_class(&html, query.matches());
                let target = html.clone();
                let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
                    update_html_class(&target, event.matches());
                }) as Box<dyn FnMut(_)>);
                if query
                    .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not watch color scheme changes");
                }
                closure.forget();
            }
            None => update_html_class(&html, false),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::init as init_system_theme;

#[cfg(not(target_arch = "wasm32"))]
pub fn init_system_theme() {}
