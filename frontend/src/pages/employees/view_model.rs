use super::{
    repository::EmployeesRepository,
    utils::{filter_employees, EmployeeFormState, DELETE_FAILED, LOAD_FAILED},
};
use crate::{
    api::{ApiClient, ApiError, CreateEmployee, Employee},
    state::{load_latest, spawn_load_latest, Loadable, MessageState, RequestTracker},
    utils::timers::{run_after, NOTICE_DISMISS_MS},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees: RwSignal<Loadable<Vec<Employee>>>,
    pub search: RwSignal<String>,
    pub form: RwSignal<EmployeeFormState>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub dialog_open: RwSignal<bool>,
    pub messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub create_action: Action<CreateEmployee, Result<Employee, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    repository: StoredValue<EmployeesRepository>,
    tracker: RequestTracker,
}

impl EmployeesViewModel {
    pub fn load_employees(&self) {
        let repo = self.repository.get_value();
        spawn_load_latest(self.tracker, self.employees, LOAD_FAILED, async move {
            repo.fetch_employees().await
        });
    }

    pub fn filtered(&self) -> Signal<Vec<Employee>> {
        let employees = self.employees;
        let search = self.search;
        Signal::derive(move || {
            employees.with(|state| {
                state
                    .ready()
                    .map(|list| search.with(|query| filter_employees(list, query)))
                    .unwrap_or_default()
            })
        })
    }

    pub fn open_create_dialog(&self) {
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn close_create_dialog(&self) {
        self.dialog_open.set(false);
        self.form_error.set(None);
    }

    /// Dispatches the create request when the form is complete and no other
    /// submission is in flight.
    pub fn submit_create(&self) -> bool {
        if self.create_action.pending().get_untracked() {
            return false;
        }
        match self.form.get_untracked().to_request() {
            Some(payload) => {
                self.form_error.set(None);
                self.create_action.dispatch(payload);
                true
            }
            None => false,
        }
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(employee.id);
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let employees = create_rw_signal(Loadable::<Vec<Employee>>::Idle);
    let search = create_rw_signal(String::new());
    let form = create_rw_signal(EmployeeFormState::default());
    let form_error = create_rw_signal(None::<ApiError>);
    let dialog_open = create_rw_signal(false);
    let messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<Employee>);
    let tracker = RequestTracker::new();

    let repo_for_create = repository.clone();
    let create = leptos::create_action(move |payload: &CreateEmployee| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move {
            let result = repo.create_employee(payload).await;
            match &result {
                Ok(employee) => {
                    dialog_open.set(false);
                    form.update(EmployeeFormState::reset);
                    form_error.set(None);
                    messages.update(|state| {
                        state.set_success(format!("Employee '{}' created", employee.full_name))
                    });
                    run_after(NOTICE_DISMISS_MS, move || {
                        messages.update(MessageState::clear_success)
                    });
                    load_latest(tracker, employees, LOAD_FAILED, repo.fetch_employees()).await;
                }
                Err(err) => {
                    form_error.set(Some(err.clone()));
                }
            }
            result
        }
    });

    let repo_for_delete = repository.clone();
    let delete = leptos::create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move {
            let result = repo.delete_employee(id).await;
            match &result {
                Ok(()) => {
                    messages.update(MessageState::clear);
                    load_latest(tracker, employees, LOAD_FAILED, repo.fetch_employees()).await;
                }
                Err(err) => {
                    messages.update(|state| state.set_error(err.message_or(DELETE_FAILED)));
                }
            }
            result
        }
    });

    EmployeesViewModel {
        employees,
        search,
        form,
        form_error,
        dialog_open,
        messages,
        pending_delete,
        create_action: create,
        delete_action: delete,
        repository: store_value(repository),
        tracker,
    }
}
