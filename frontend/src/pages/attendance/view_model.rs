use super::{
    repository::AttendanceRepository,
    utils::{
        filter_roster, picker_options, MarkAttendanceForm, HISTORY_FAILED, LOAD_EMPLOYEES_FAILED,
        MARK_FAILED, MARK_SUCCESS,
    },
};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, CreateAttendance, Employee},
    state::{load_latest, spawn_load_latest, Loadable, MessageState, RequestTracker},
    utils::timers::{run_after, NOTICE_DISMISS_MS},
};
use leptos::*;
use std::rc::Rc;

/// One employee's history at a time; a new selection replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPanel {
    pub employee: Employee,
    pub records: Loadable<Vec<AttendanceRecord>>,
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub employees: RwSignal<Loadable<Vec<Employee>>>,
    pub roster_search: RwSignal<String>,
    pub form: RwSignal<MarkAttendanceForm>,
    pub messages: RwSignal<MessageState>,
    pub history_employee: RwSignal<Option<Employee>>,
    pub history: RwSignal<Loadable<Vec<AttendanceRecord>>>,
    pub mark_action: Action<CreateAttendance, Result<AttendanceRecord, ApiError>>,
    repository: StoredValue<AttendanceRepository>,
    employees_tracker: RequestTracker,
    history_tracker: RequestTracker,
}

impl AttendanceViewModel {
    pub fn load_employees(&self) {
        let repo = self.repository.get_value();
        spawn_load_latest(
            self.employees_tracker,
            self.employees,
            LOAD_EMPLOYEES_FAILED,
            async move { repo.fetch_employees().await },
        );
    }

    pub fn roster(&self) -> Signal<Vec<Employee>> {
        let employees = self.employees;
        let search = self.roster_search;
        Signal::derive(move || {
            employees.with(|state| {
                state
                    .ready()
                    .map(|list| search.with(|query| filter_roster(list, query)))
                    .unwrap_or_default()
            })
        })
    }

    pub fn picker_options(&self) -> Signal<Vec<Employee>> {
        let employees = self.employees;
        let form = self.form;
        Signal::derive(move || {
            employees.with(|state| {
                state
                    .ready()
                    .map(|list| form.with(|form| picker_options(list, form)))
                    .unwrap_or_default()
            })
        })
    }

    pub fn history_panel(&self) -> Signal<Option<HistoryPanel>> {
        let employee = self.history_employee;
        let records = self.history;
        Signal::derive(move || {
            employee.get().map(|employee| HistoryPanel {
                employee,
                records: records.get(),
            })
        })
    }

    pub fn select_employee(&self, employee: Employee) {
        self.form.update(|form| form.select(&employee));
    }

    pub fn view_history(&self, employee: Employee) {
        let repo = self.repository.get_value();
        let id = employee.id;
        self.history_employee.set(Some(employee));
        spawn_load_latest(self.history_tracker, self.history, HISTORY_FAILED, async move {
            repo.fetch_history(id).await
        });
    }

    /// Validates locally, then dispatches. Returns whether a request was sent.
    pub fn submit_mark(&self) -> bool {
        if self.mark_action.pending().get_untracked() {
            return false;
        }
        match self.form.get_untracked().to_request() {
            Ok(payload) => {
                self.messages.update(MessageState::clear);
                self.mark_action.dispatch(payload);
                true
            }
            Err(message) => {
                self.messages.update(|state| state.set_error(message));
                false
            }
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));

    let employees = create_rw_signal(Loadable::<Vec<Employee>>::Idle);
    let roster_search = create_rw_signal(String::new());
    let form = create_rw_signal(MarkAttendanceForm::default());
    let messages = create_rw_signal(MessageState::default());
    let history_employee = create_rw_signal(None::<Employee>);
    let history = create_rw_signal(Loadable::<Vec<AttendanceRecord>>::Idle);
    let employees_tracker = RequestTracker::new();
    let history_tracker = RequestTracker::new();

    let repo_for_mark = repository.clone();
    let mark_action = create_action(move |payload: &CreateAttendance| {
        let repo = repo_for_mark.clone();
        let payload = payload.clone();
        async move {
            let employee_id = payload.employee_id;
            let result = repo.mark_attendance(payload).await;
            match &result {
                Ok(_) => {
                    messages.update(|state| state.set_success(MARK_SUCCESS));
                    run_after(NOTICE_DISMISS_MS, move || {
                        messages.update(MessageState::clear_success)
                    });
                    let showing_same = history_employee
                        .get_untracked()
                        .map(|shown| shown.id == employee_id)
                        .unwrap_or(false);
                    if showing_same {
                        load_latest(
                            history_tracker,
                            history,
                            HISTORY_FAILED,
                            repo.fetch_history(employee_id),
                        )
                        .await;
                    }
                }
                Err(err) => {
                    messages.update(|state| state.set_error(err.message_or(MARK_FAILED)));
                }
            }
            result
        }
    });

    AttendanceViewModel {
        employees,
        roster_search,
        form,
        messages,
        history_employee,
        history,
        mark_action,
        repository: store_value(repository),
        employees_tracker,
        history_tracker,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::AttendanceStatus;
    use crate::pages::attendance::utils::SELECT_EMPLOYEE;
    use crate::test_support::helpers::{
        date, record, record_json, records_json, roster_json, sample_roster,
    };
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use serde_json::json;

    fn attendance_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/");
            then.status(200).json_body(roster_json(&sample_roster()));
        });
        server
    }

    async fn loaded_view_model(server: &MockServer) -> AttendanceViewModel {
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        let vm = use_attendance_view_model();
        vm.load_employees();
        assert!(
            wait_until(|| vm.employees.get_untracked().ready().is_some()).await,
            "employees should load"
        );
        vm
    }

    async fn show_history(vm: &AttendanceViewModel, employee: Employee) {
        vm.view_history(employee);
        assert!(
            wait_until(|| vm.history.get_untracked().ready().is_some()).await,
            "history should load"
        );
    }

    fn mark(vm: &AttendanceViewModel, employee: &Employee, on: &str) {
        vm.form.update(|form| {
            form.select(employee);
            form.date = on.into();
            form.status = AttendanceStatus::Present;
        });
        assert!(vm.submit_mark());
    }

    #[test]
    fn marking_shown_employee_refreshes_history() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = attendance_server();
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/employee/1");
                then.status(200).json_body(json!([]));
            });
            let vm = loaded_view_model(&server).await;
            let ada = sample_roster()[0].clone();
            show_history(&vm, ada.clone()).await;
            assert_eq!(vm.history.get_untracked(), Loadable::Ready(Vec::new()));

            let marked = record(50, 1, date(2025, 3, 3), AttendanceStatus::Present);
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(201).json_body(record_json(&marked));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/employee/1");
                then.status(200).json_body(records_json(&[marked.clone()]));
            });

            mark(&vm, &ada, "2025-03-03");
            assert!(wait_until(|| vm.mark_action.value().get_untracked().is_some()).await);

            let panel = vm.history_panel().get().expect("panel");
            assert_eq!(panel.employee.id, 1);
            let records = panel.records.ready_cloned().expect("records");
            assert!(records
                .iter()
                .any(|r| r.date == date(2025, 3, 3) && r.status == AttendanceStatus::Present));
            assert_eq!(server.hits(GET, "/api/attendance/employee/1"), 2);
            assert_eq!(
                vm.messages.get_untracked().success.as_deref(),
                Some(MARK_SUCCESS)
            );

            let sent = server
                .received()
                .into_iter()
                .find(|request| request.method == POST)
                .and_then(|request| request.body);
            assert_eq!(
                sent,
                Some(json!({ "employee_id": 1, "date": "2025-03-03", "status": "Present" }))
            );
            runtime.dispose();
        });
    }

    #[test]
    fn marking_other_employee_leaves_panel_untouched() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = attendance_server();
            let grace_records = vec![record(7, 2, date(2025, 1, 2), AttendanceStatus::Absent)];
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/employee/2");
                then.status(200).json_body(records_json(&grace_records));
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(201).json_body(json!({
                    "id": 51, "employee_id": 1, "date": "2025-03-03", "status": "Present"
                }));
            });
            let vm = loaded_view_model(&server).await;
            show_history(&vm, sample_roster()[1].clone()).await;
            let before = vm.history_panel().get();

            mark(&vm, &sample_roster()[0], "2025-03-03");
            assert!(wait_until(|| vm.mark_action.value().get_untracked().is_some()).await);

            assert_eq!(vm.history_panel().get(), before);
            assert_eq!(
                vm.history.get_untracked(),
                Loadable::Ready(grace_records.clone())
            );
            assert_eq!(server.hits(GET, "/api/attendance/employee/2"), 1);
            assert_eq!(server.hits(GET, "/api/attendance/employee/1"), 0);
            runtime.dispose();
        });
    }

    #[test]
    fn duplicate_mark_surfaces_backend_detail() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = attendance_server();
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(400).json_body(json!({
                    "detail": "Attendance already marked for this employee on 2025-03-03"
                }));
            });
            let vm = loaded_view_model(&server).await;
            mark(&vm, &sample_roster()[0], "2025-03-03");
            assert!(wait_until(|| vm.mark_action.value().get_untracked().is_some()).await);
            assert_eq!(
                vm.messages.get_untracked().error.as_deref(),
                Some("Attendance already marked for this employee on 2025-03-03")
            );
            assert!(vm.messages.get_untracked().success.is_none());
            runtime.dispose();
        });
    }

    #[test]
    fn submit_without_employee_sets_error_and_sends_nothing() {
        with_runtime(|| {
            let server = attendance_server();
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_attendance_view_model();
            assert!(!vm.submit_mark());
            assert_eq!(
                vm.messages.get_untracked().error.as_deref(),
                Some(SELECT_EMPLOYEE)
            );
            assert!(server.received().is_empty());
        });
    }

    #[test]
    fn newer_history_selection_replaces_panel() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = attendance_server();
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/employee/1");
                then.status(200).json_body(records_json(&[record(
                    1,
                    1,
                    date(2025, 1, 1),
                    AttendanceStatus::Present,
                )]));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/employee/3");
                then.status(500).json_body(json!({}));
            });
            let vm = loaded_view_model(&server).await;

            vm.view_history(sample_roster()[0].clone());
            vm.view_history(sample_roster()[2].clone());
            assert!(wait_until(|| vm.history.get_untracked().error().is_some()).await);
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;

            let panel = vm.history_panel().get().expect("panel");
            assert_eq!(panel.employee.id, 3);
            assert_eq!(panel.records.error(), Some(HISTORY_FAILED));
            runtime.dispose();
        });
    }

    #[test]
    fn roster_search_and_picker_exclude_email() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = attendance_server();
            let vm = loaded_view_model(&server).await;

            vm.roster_search.set("navy".into());
            assert!(vm.roster().get().is_empty());
            vm.roster_search.set("operations".into());
            assert_eq!(vm.roster().get().len(), 1);

            vm.form.update(|form| form.set_query("emp-00".into()));
            assert_eq!(vm.picker_options().get().len(), 2);
            vm.select_employee(sample_roster()[1].clone());
            assert!(vm.picker_options().get().is_empty());
            assert_eq!(vm.form.get_untracked().employee_id, Some(2));
            runtime.dispose();
        });
    }
}
