use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, CreateEmployee, Employee, ListParams},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.list_employees_page(ListParams::default()).await
    }

    pub async fn list_employees_page(&self, params: ListParams) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees/").await;
        let query = params.to_query();
        let mut request = self.http_client().get(url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        let response = self.send(request).await?;
        map_typed_response(response).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, ApiError> {
        let url = self.endpoint(&format!("/employees/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        map_typed_response(response).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees/").await;
        let response = self
            .send(self.http_client().post(url).json(payload))
            .await?;
        map_typed_response(response).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/employees/{}", id)).await;
        let response = self.send(self.http_client().delete(url)).await?;
        map_empty_response(response).await
    }
}
