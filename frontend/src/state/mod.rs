pub mod loadable;
pub mod message;
pub mod navigation;

pub use loadable::{load_latest, spawn_load_latest, Loadable, RequestToken, RequestTracker};
pub use message::MessageState;
pub use navigation::{use_navigation, NavigationState};
