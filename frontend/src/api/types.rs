use chrono::{NaiveDate, NaiveDateTime};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub hire_date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

/// `created_at` is informational only. Offsets are normalized to UTC and an
/// unreadable value becomes `None` instead of failing the whole payload.
mod lenient_timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(Value::as_str).and_then(parse))
    }

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        raw.parse::<NaiveDateTime>().ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|stamp| stamp.naive_utc())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAttendance {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub present_today: u64,
    pub absent_today: u64,
}

/// Optional `skip`/`limit` paging accepted by the list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorKind {
    /// No response was received.
    Network,
    /// 4xx from the backend.
    Validation,
    /// 5xx from the backend.
    Server,
    /// A response arrived but its body could not be parsed.
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            kind: ApiErrorKind::Network,
            status: None,
            detail: None,
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            kind: ApiErrorKind::Decode,
            status: None,
            detail: None,
        }
    }

    /// Builds the error for a non-success response from its status code and raw body.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<ErrorPayload>(body)
            .ok()
            .and_then(|payload| payload.into_detail());
        let kind = if status >= 500 {
            ApiErrorKind::Server
        } else {
            ApiErrorKind::Validation
        };
        let error = match &detail {
            Some(detail) => detail.clone(),
            None => format!("Request failed with status {}", status),
        };
        Self {
            error,
            kind,
            status: Some(status),
            detail,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Network => "REQUEST_FAILED",
            ApiErrorKind::Validation => "VALIDATION_ERROR",
            ApiErrorKind::Server => "SERVER_ERROR",
            ApiErrorKind::Decode => "DECODE_ERROR",
        }
    }

    /// Text shown to the user: the backend's detail when it sent one, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail
            .as_deref()
            .filter(|detail| !detail.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Error bodies the backend sends: `{"detail": ...}` from request validation and
/// `{"error": CODE, "message": ...}` from domain exceptions.
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorPayload {
    fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(Value::String(text)) => return Some(text),
            Some(Value::Array(items)) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text.clone()),
                        other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                    })
                    .collect();
                if !messages.is_empty() {
                    return Some(messages.join("; "));
                }
            }
            _ => {}
        }
        self.message.filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_deserializes_with_and_without_created_at() {
        let raw = json!({
            "id": 7,
            "employee_id": "EMP-007",
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "department": "Engineering",
            "hire_date": "2024-03-01",
            "created_at": "2024-03-01T09:30:00"
        });
        let employee: Employee = serde_json::from_value(raw).unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(
            employee.hire_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(employee.created_at.is_some());

        let bare = json!({
            "id": 8,
            "employee_id": "EMP-008",
            "full_name": "Grace Hopper",
            "email": "grace@example.com",
            "department": "Research",
            "hire_date": "2023-12-31"
        });
        let employee: Employee = serde_json::from_value(bare).unwrap();
        assert!(employee.created_at.is_none());
    }

    #[test]
    fn created_at_accepts_offsets_and_ignores_unreadable_values() {
        let with_stamp = |stamp: Value| {
            json!({
                "id": 1,
                "employee_id": 4,
                "date": "2025-01-02",
                "status": "Present",
                "created_at": stamp
            })
        };
        let expected = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();

        let zulu: AttendanceRecord =
            serde_json::from_value(with_stamp(json!("2025-01-02T08:15:00Z"))).unwrap();
        assert_eq!(zulu.created_at, Some(expected));

        let offset: AttendanceRecord =
            serde_json::from_value(with_stamp(json!("2025-01-02T10:15:00+02:00"))).unwrap();
        assert_eq!(offset.created_at, Some(expected));

        let fractional: AttendanceRecord =
            serde_json::from_value(with_stamp(json!("2025-01-02T08:15:00.123456"))).unwrap();
        assert!(fractional.created_at.is_some());

        for junk in [json!("yesterday"), json!(42), Value::Null] {
            let record: AttendanceRecord = serde_json::from_value(with_stamp(junk)).unwrap();
            assert_eq!(record.created_at, None);
            assert_eq!(record.status, AttendanceStatus::Present);
        }

        let roster: Vec<Employee> = serde_json::from_value(json!([{
            "id": 9,
            "employee_id": "EMP-009",
            "full_name": "Katherine Johnson",
            "email": "kj@example.com",
            "department": "Research",
            "hire_date": "2024-02-01",
            "created_at": "2024-02-01T12:00:00+00:00"
        }]))
        .unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster[0].created_at.is_some());
    }

    #[test]
    fn create_attendance_serializes_status_as_plain_word() {
        let payload = CreateAttendance {
            employee_id: 3,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            status: AttendanceStatus::Absent,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({ "employee_id": 3, "date": "2025-01-02", "status": "Absent" })
        );
    }

    #[test]
    fn attendance_status_parse_and_default() {
        assert_eq!(AttendanceStatus::default(), AttendanceStatus::Present);
        assert_eq!(
            AttendanceStatus::parse("Absent"),
            Some(AttendanceStatus::Absent)
        );
        assert_eq!(AttendanceStatus::parse("late"), None);
        assert_eq!(AttendanceStatus::Present.to_string(), "Present");
    }

    #[test]
    fn list_params_only_emit_set_values() {
        assert!(ListParams::default().to_query().is_empty());
        let params = ListParams {
            skip: Some(20),
            limit: None,
        };
        assert_eq!(params.to_query(), vec![("skip", "20".to_string())]);
    }

    #[test]
    fn from_status_reads_string_detail() {
        let error = ApiError::from_status(409, br#"{"detail":"Employee already exists"}"#);
        assert_eq!(error.kind, ApiErrorKind::Validation);
        assert_eq!(error.status, Some(409));
        assert_eq!(error.detail.as_deref(), Some("Employee already exists"));
        assert_eq!(error.to_string(), "Employee already exists");
    }

    #[test]
    fn from_status_joins_validation_list_messages() {
        let body = json!({
            "detail": [
                { "loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error" },
                { "loc": ["body", "hire_date"], "msg": "field required", "type": "missing" }
            ]
        });
        let error = ApiError::from_status(422, body.to_string().as_bytes());
        assert_eq!(
            error.detail.as_deref(),
            Some("value is not a valid email address; field required")
        );
    }

    #[test]
    fn from_status_falls_back_to_domain_message() {
        let body = json!({
            "error": "BUSINESS_RULE_VIOLATION",
            "message": "Attendance already marked for employee 1 on 2025-01-02",
            "details": {}
        });
        let error = ApiError::from_status(400, body.to_string().as_bytes());
        assert_eq!(
            error.detail.as_deref(),
            Some("Attendance already marked for employee 1 on 2025-01-02")
        );
    }

    #[test]
    fn from_status_without_body_uses_generic_text() {
        let error = ApiError::from_status(503, b"");
        assert_eq!(error.kind, ApiErrorKind::Server);
        assert_eq!(error.code(), "SERVER_ERROR");
        assert!(error.detail.is_none());
        assert_eq!(error.message_or("Failed to load employees"), "Failed to load employees");
        assert!(error.error.contains("503"));
    }

    #[test]
    fn message_or_prefers_detail() {
        let error = ApiError::from_status(400, br#"{"detail":"Invalid date"}"#);
        assert_eq!(error.message_or("Failed to mark attendance"), "Invalid date");

        let network = ApiError::request_failed("Request failed: connection refused");
        assert_eq!(network.code(), "REQUEST_FAILED");
        assert_eq!(network.message_or("Failed to mark attendance"), "Failed to mark attendance");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::decode("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::request_failed("bad input").into();
        assert_eq!(raw, "bad input");
    }
}
