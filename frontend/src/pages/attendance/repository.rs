use crate::api::{ApiClient, ApiError, AttendanceRecord, CreateAttendance, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn fetch_history(&self, employee_id: i64) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance_by_employee(employee_id).await
    }

    pub async fn mark_attendance(
        &self,
        payload: CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.client.create_attendance(&payload).await
    }
}
