use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, DashboardStats},
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let url = self.endpoint("/dashboard/stats").await;
        let response = self.send(self.http_client().get(url)).await?;
        map_typed_response(response).await
    }
}
