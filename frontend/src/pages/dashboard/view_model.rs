use super::repository::DashboardRepository;
use crate::{
    api::{ApiClient, DashboardStats},
    state::{spawn_load_latest, Loadable, RequestTracker},
};
use leptos::*;
use std::rc::Rc;

pub const STATS_FAILED: &str = "Failed to load dashboard stats";

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats: RwSignal<Loadable<DashboardStats>>,
    repository: StoredValue<DashboardRepository>,
    tracker: RequestTracker,
}

impl DashboardViewModel {
    pub fn load_stats(&self) {
        let repo = self.repository.get_value();
        spawn_load_latest(self.tracker, self.stats, STATS_FAILED, async move {
            repo.fetch_stats().await
        });
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    DashboardViewModel {
        stats: create_rw_signal(Loadable::Idle),
        repository: store_value(DashboardRepository::new_with_client(Rc::new(api))),
        tracker: RequestTracker::new(),
    }
}
