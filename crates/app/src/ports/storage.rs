//! Storage port — repository traits for employee records.

use std::future::Future;

use staffhub_domain::employee::Employee;
use staffhub_domain::error::StaffHubError;
use staffhub_domain::id::EmployeeId;

/// Repository for persisting and querying [`Employee`]s.
///
/// Implementations keep records in insertion order and hold at most one
/// record per [`EmployeeId`].
pub trait EmployeeRepository {
    /// Append a new employee.
    ///
    /// Fails with [`StaffHubError::Conflict`] when the id is already stored.
    fn create(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send;

    /// Get an employee by id.
    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send;

    /// Get every employee, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send;

    /// Overwrite the name, address and email of the stored record sharing
    /// `employee`'s id. Resolves to `None` when no such record exists.
    fn update(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send;

    /// Remove the record with `id`. Resolves to `false` when nothing matched.
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, StaffHubError>> + Send;

    /// Number of stored records.
    fn count(&self) -> impl Future<Output = Result<usize, StaffHubError>> + Send;
}
