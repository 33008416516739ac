//! In-memory implementation of [`EmployeeRepository`].

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use staffhub_app::ports::EmployeeRepository;
use staffhub_domain::employee::Employee;
use staffhub_domain::error::{ConflictError, StaffHubError};
use staffhub_domain::id::EmployeeId;

use crate::error::StorageError;

/// Insertion-ordered employee store.
///
/// Clones share the same underlying collection.
#[derive(Clone, Default)]
pub struct MemoryEmployeeRepository {
    store: Arc<Mutex<Vec<Employee>>>,
}

impl MemoryEmployeeRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Employee>>, StorageError> {
        self.store.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn create_sync(&self, employee: Employee) -> Result<Employee, StaffHubError> {
        let mut store = self.lock()?;
        if store.iter().any(|stored| stored.id() == employee.id()) {
            return Err(ConflictError {
                entity: "Employee",
                id: employee.id().to_string(),
            }
            .into());
        }
        store.push(employee.clone());
        tracing::trace!(employee_id = %employee.id(), len = store.len(), "employee stored");
        Ok(employee)
    }

    fn get_by_id_sync(&self, id: &EmployeeId) -> Result<Option<Employee>, StaffHubError> {
        let store = self.lock()?;
        Ok(store.iter().find(|stored| stored.id() == id).cloned())
    }

    fn get_all_sync(&self) -> Result<Vec<Employee>, StaffHubError> {
        Ok(self.lock()?.clone())
    }

    fn update_sync(&self, employee: &Employee) -> Result<Option<Employee>, StaffHubError> {
        let mut store = self.lock()?;
        Ok(store
            .iter_mut()
            .find(|stored| stored.id() == employee.id())
            .map(|stored| {
                stored.apply_changes(employee);
                stored.clone()
            }))
    }

    fn delete_sync(&self, id: &EmployeeId) -> Result<bool, StaffHubError> {
        let mut store = self.lock()?;
        match store.iter().position(|stored| stored.id() == id) {
            Some(index) => {
                store.remove(index);
                tracing::trace!(employee_id = %id, len = store.len(), "employee deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count_sync(&self) -> Result<usize, StaffHubError> {
        Ok(self.lock()?.len())
    }
}

impl EmployeeRepository for MemoryEmployeeRepository {
    fn create(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send {
        let result = self.create_sync(employee);
        async move { result }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send {
        let result = self.get_by_id_sync(&id);
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send {
        let result = self.get_all_sync();
        async move { result }
    }

    fn update(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send {
        let result = self.update_sync(&employee);
        async move { result }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, StaffHubError>> + Send {
        let result = self.delete_sync(&id);
        async move { result }
    }

    fn count(&self) -> impl Future<Output = Result<usize, StaffHubError>> + Send {
        let result = self.count_sync();
        async move { result }
    }
}
