use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    /// Shown in place of the label while the menu is collapsed.
    pub short: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        path: "/",
        label: "Dashboard",
        short: "DB",
    },
    NavItem {
        path: "/employees",
        label: "Employees",
        short: "EM",
    },
    NavItem {
        path: "/attendance",
        label: "Attendance",
        short: "AT",
    },
];

/// Side menu state shared by the app bar toggle and the menu itself.
#[derive(Clone, Copy)]
pub struct NavigationState {
    pub open: RwSignal<bool>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            open: create_rw_signal(true),
        }
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn is_open(&self) -> Signal<bool> {
        self.open.into()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_navigation() -> NavigationState {
    let state = NavigationState::new();
    provide_context(state);
    state
}

pub fn use_navigation() -> NavigationState {
    use_context::<NavigationState>().unwrap_or_else(provide_navigation)
}

pub fn is_active(current_path: &str, item_path: &str) -> bool {
    let current = current_path.trim_end_matches('/');
    let item = item_path.trim_end_matches('/');
    if item.is_empty() {
        return current.is_empty();
    }
    current == item || current.starts_with(&format!("{}/", item))
}
