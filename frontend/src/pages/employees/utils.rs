use crate::{
    api::{CreateEmployee, Employee},
    utils::time::{parse_input_date, to_input_value, today_local},
};

pub const LOAD_FAILED: &str = "Failed to load employees";
pub const CREATE_FAILED: &str = "Failed to create employee";
pub const DELETE_FAILED: &str = "Failed to delete employee";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    /// `YYYY-MM-DD`, as held by the date input.
    pub hire_date: String,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            full_name: String::new(),
            email: String::new(),
            department: String::new(),
            hire_date: to_input_value(today_local()),
        }
    }
}

impl EmployeeFormState {
    pub fn is_valid(&self) -> bool {
        !(self.employee_id.trim().is_empty()
            || self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.department.trim().is_empty())
            && parse_input_date(&self.hire_date).is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Option<CreateEmployee> {
        if !self.is_valid() {
            return None;
        }
        Some(CreateEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
            hire_date: parse_input_date(&self.hire_date)?,
        })
    }
}

/// Case-insensitive substring match on name, business id, email and
/// department. The query is matched as typed; only an empty query keeps
/// every employee.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|employee| {
            [
                &employee.full_name,
                &employee.employee_id,
                &employee.email,
                &employee.department,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
