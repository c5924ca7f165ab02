use crate::{
    api::{AttendanceStatus, CreateAttendance, Employee},
    utils::time::{parse_input_date, to_input_value, today_local},
};

pub const LOAD_EMPLOYEES_FAILED: &str = "Failed to load employees";
pub const MARK_FAILED: &str = "Failed to mark attendance";
pub const HISTORY_FAILED: &str = "Failed to load attendance records";
pub const SELECT_EMPLOYEE: &str = "Please select an employee";
pub const INVALID_DATE: &str = "Please choose a valid date";
pub const MARK_SUCCESS: &str = "Attendance marked successfully!";
pub const NO_RECORDS: &str = "No attendance records found";

/// Options shown under the picker input at once.
pub const PICKER_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendanceForm {
    /// Server id of the picked employee.
    pub employee_id: Option<i64>,
    pub picker_query: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl Default for MarkAttendanceForm {
    fn default() -> Self {
        Self {
            employee_id: None,
            picker_query: String::new(),
            date: to_input_value(today_local()),
            status: AttendanceStatus::Present,
        }
    }
}

impl MarkAttendanceForm {
    pub fn select(&mut self, employee: &Employee) {
        self.employee_id = Some(employee.id);
        self.picker_query = picker_label(employee);
    }

    /// Typing in the picker drops any earlier selection.
    pub fn set_query(&mut self, query: String) {
        self.picker_query = query;
        self.employee_id = None;
    }

    pub fn clear_selection(&mut self) {
        self.employee_id = None;
        self.picker_query.clear();
    }

    pub fn has_selection(&self) -> bool {
        self.employee_id.is_some()
    }

    pub fn to_request(&self) -> Result<CreateAttendance, &'static str> {
        let employee_id = self.employee_id.ok_or(SELECT_EMPLOYEE)?;
        let date = parse_input_date(&self.date).ok_or(INVALID_DATE)?;
        Ok(CreateAttendance {
            employee_id,
            date,
            status: self.status,
        })
    }
}

pub fn picker_label(employee: &Employee) -> String {
    format!(
        "{} ({}) - {}",
        employee.full_name, employee.employee_id, employee.department
    )
}

/// Roster and picker search: name, business id or department. Email is not
/// searched on this page. The query is matched as typed.
pub fn filter_roster(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|employee| {
            employee.full_name.to_lowercase().contains(&needle)
                || employee.employee_id.to_lowercase().contains(&needle)
                || employee.department.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn picker_options(employees: &[Employee], form: &MarkAttendanceForm) -> Vec<Employee> {
    if form.has_selection() {
        return Vec::new();
    }
    let mut options = filter_roster(employees, &form.picker_query);
    options.truncate(PICKER_LIMIT);
    options
}
