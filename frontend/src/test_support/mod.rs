#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn employee(id: i64, code: &str, name: &str, email: &str, department: &str) -> Employee {
        Employee {
            id,
            employee_id: code.into(),
            full_name: name.into(),
            email: email.into(),
            department: department.into(),
            hire_date: date(2024, 1, 15),
            created_at: None,
        }
    }

    pub fn sample_roster() -> Vec<Employee> {
        vec![
            employee(1, "EMP-001", "Ada Lovelace", "ada@example.com", "Engineering"),
            employee(2, "EMP-002", "Grace Hopper", "grace@navy.mil", "Research"),
            employee(3, "OPS-7", "Linus Pauling", "linus@example.com", "Operations"),
        ]
    }

    pub fn record(id: i64, employee_id: i64, on: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id,
            date: on,
            status,
            created_at: None,
        }
    }

    pub fn employee_json(employee: &Employee) -> Value {
        json!({
            "id": employee.id,
            "employee_id": employee.employee_id,
            "full_name": employee.full_name,
            "email": employee.email,
            "department": employee.department,
            "hire_date": employee.hire_date.to_string(),
        })
    }

    pub fn roster_json(employees: &[Employee]) -> Value {
        Value::Array(employees.iter().map(employee_json).collect())
    }

    pub fn record_json(record: &AttendanceRecord) -> Value {
        json!({
            "id": record.id,
            "employee_id": record.employee_id,
            "date": record.date.to_string(),
            "status": record.status.as_str(),
        })
    }

    pub fn records_json(records: &[AttendanceRecord]) -> Value {
        Value::Array(records.iter().map(record_json).collect())
    }
}
