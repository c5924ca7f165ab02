use crate::api::{ApiClient, ApiError, DashboardStats};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
        self.client.get_dashboard_stats().await
    }
}
