use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, AttendanceRecord, CreateAttendance, ListParams},
};

impl ApiClient {
    pub async fn list_attendance_by_employee(
        &self,
        employee_id: i64,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.list_attendance_by_employee_page(employee_id, ListParams::default())
            .await
    }

    pub async fn list_attendance_by_employee_page(
        &self,
        employee_id: i64,
        params: ListParams,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self
            .endpoint(&format!("/attendance/employee/{}", employee_id))
            .await;
        let query = params.to_query();
        let mut request = self.http_client().get(url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        let response = self.send(request).await?;
        map_typed_response(response).await
    }

    pub async fn create_attendance(
        &self,
        payload: &CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/attendance/").await;
        let response = self
            .send(self.http_client().post(url).json(payload))
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_all_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/attendance/").await;
        let response = self.send(self.http_client().get(url)).await?;
        map_typed_response(response).await
    }
}
