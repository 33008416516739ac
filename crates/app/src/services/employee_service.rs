//! Employee service — use-cases for managing employee records.

use staffhub_domain::employee::Employee;
use staffhub_domain::error::{NotFoundError, StaffHubError};
use staffhub_domain::id::EmployeeId;

use crate::ports::EmployeeRepository;

const ENTITY: &str = "Employee";

fn not_found(id: &EmployeeId) -> StaffHubError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for employee CRUD operations.
pub struct EmployeeService<R> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Add a new employee after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if the id is blank,
    /// [`StaffHubError::Conflict`] if an employee with the same id is
    /// already stored, or a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(employee_id = %employee.id()))]
    pub async fn add_employee(&self, employee: Employee) -> Result<Employee, StaffHubError> {
        employee.validate()?;
        let created = self.repo.create(employee).await?;
        tracing::debug!("employee added");
        Ok(created)
    }

    /// List all employees in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, StaffHubError> {
        self.repo.get_all().await
    }

    /// Look up an employee by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(employee_id = %id))]
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, StaffHubError> {
        let found = self.repo.get_by_id(id.clone()).await?;
        found.ok_or_else(|| not_found(&id))
    }

    /// Replace the name, address and email of the stored employee whose id
    /// matches `employee`, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no employee with that id is
    /// stored (nothing is changed), or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(employee_id = %employee.id()))]
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, StaffHubError> {
        let id = employee.id().clone();
        match self.repo.update(employee).await? {
            Some(updated) => {
                tracing::debug!("employee updated");
                Ok(updated)
            }
            None => {
                tracing::warn!("update skipped, employee not found");
                Err(not_found(&id))
            }
        }
    }

    /// Remove the employee with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no employee with `id` is
    /// stored (nothing is changed), or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(employee_id = %id))]
    pub async fn remove_employee(&self, id: EmployeeId) -> Result<(), StaffHubError> {
        if self.repo.delete(id.clone()).await? {
            tracing::debug!("employee removed");
            Ok(())
        } else {
            tracing::warn!("remove skipped, employee not found");
            Err(not_found(&id))
        }
    }

    /// Number of stored employees.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_employees(&self) -> Result<usize, StaffHubError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffhub_domain::error::{ConflictError, ValidationError};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryEmployeeRepo {
        store: Mutex<Vec<Employee>>,
    }

    impl EmployeeRepository for InMemoryEmployeeRepo {
        fn create(
            &self,
            employee: Employee,
        ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = if store.iter().any(|e| e.id() == employee.id()) {
                Err(ConflictError {
                    entity: ENTITY,
                    id: employee.id().to_string(),
                }
                .into())
            } else {
                store.push(employee.clone());
                Ok(employee)
            };
            async move { result }
        }

        fn get_by_id(
            &self,
            id: EmployeeId,
        ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|e| *e.id() == id).cloned();
            async move { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.clone();
            async move { Ok(result) }
        }

        fn update(
            &self,
            employee: Employee,
        ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store
                .iter_mut()
                .find(|e| e.id() == employee.id())
                .map(|stored| {
                    stored.apply_changes(&employee);
                    stored.clone()
                });
            async move { Ok(result) }
        }

        fn delete(
            &self,
            id: EmployeeId,
        ) -> impl Future<Output = Result<bool, StaffHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let position = store.iter().position(|e| *e.id() == id);
            if let Some(index) = position {
                store.remove(index);
            }
            async move { Ok(position.is_some()) }
        }

        fn count(&self) -> impl Future<Output = Result<usize, StaffHubError>> + Send {
            let len = self.store.lock().unwrap().len();
            async move { Ok(len) }
        }
    }

    fn make_service() -> EmployeeService<InMemoryEmployeeRepo> {
        EmployeeService::new(InMemoryEmployeeRepo::default())
    }

    fn john(id: &str) -> Employee {
        Employee::new(id, "John Doe", "San Jose", "john@playground.com")
    }

    async fn seeded_service() -> EmployeeService<InMemoryEmployeeRepo> {
        let svc = make_service();
        svc.add_employee(john("01")).await.unwrap();
        svc.add_employee(john("02")).await.unwrap();
        svc
    }

    fn snapshot(employees: &[Employee]) -> Vec<String> {
        employees.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn should_list_employees_in_insertion_order() {
        let svc = seeded_service().await;

        let all = svc.list_employees().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, ["01", "02"]);
    }

    #[tokio::test]
    async fn should_reject_add_when_id_is_blank() {
        let svc = make_service();

        let result = svc.add_employee(john(" ")).await;
        assert!(matches!(
            result,
            Err(StaffHubError::Validation(ValidationError::EmptyId))
        ));
        assert_eq!(svc.count_employees().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_reject_add_when_id_already_exists() {
        let svc = seeded_service().await;

        let result = svc.add_employee(john("01")).await;
        assert!(matches!(result, Err(StaffHubError::Conflict(_))));
        assert_eq!(svc.count_employees().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_update_only_the_matching_employee() {
        let svc = seeded_service().await;

        let mut changed = john("02");
        changed.set_address("California");
        let saved = svc.update_employee(changed).await.unwrap();
        assert_eq!(saved.address(), "California");

        let first = svc.get_employee("01".into()).await.unwrap();
        assert_eq!(first.address(), "San Jose");

        let second = svc.get_employee("02".into()).await.unwrap();
        assert_eq!(second.name(), "John Doe");
        assert_eq!(second.address(), "California");
        assert_eq!(second.email(), "john@playground.com");
    }

    #[tokio::test]
    async fn should_leave_collection_unchanged_when_updating_missing_id() {
        let svc = seeded_service().await;
        let before = snapshot(&svc.list_employees().await.unwrap());

        let result = svc.update_employee(john("99")).await;
        assert!(matches!(result, Err(StaffHubError::NotFound(_))));

        let after = snapshot(&svc.list_employees().await.unwrap());
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn should_leave_collection_unchanged_when_removing_missing_id() {
        let svc = seeded_service().await;
        let before = snapshot(&svc.list_employees().await.unwrap());

        let result = svc.remove_employee("99".into()).await;
        assert!(matches!(result, Err(StaffHubError::NotFound(_))));

        let after = snapshot(&svc.list_employees().await.unwrap());
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn should_empty_collection_after_removing_both_employees() {
        let svc = seeded_service().await;

        svc.remove_employee("01".into()).await.unwrap();
        svc.remove_employee("02".into()).await.unwrap();

        assert!(svc.list_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_employee_missing() {
        let svc = make_service();
        let result = svc.get_employee("01".into()).await;
        assert!(matches!(
            result,
            Err(StaffHubError::NotFound(NotFoundError { entity: "Employee", .. }))
        ));
    }
}
