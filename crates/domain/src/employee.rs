//! Employee — a directory record keyed by its [`EmployeeId`].

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{StaffHubError, ValidationError};
use crate::id::EmployeeId;

/// A single employee record.
///
/// Identity is the [`EmployeeId`] alone: two records with the same id compare
/// equal even when their other fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    address: String,
    email: String,
}

impl Employee {
    /// Create a record from its four fields without validating.
    #[must_use]
    pub fn new(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            email: email.into(),
        }
    }

    /// Create a builder for constructing an [`Employee`].
    #[must_use]
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_id(&mut self, id: impl Into<EmployeeId>) {
        self.id = id.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Copy every field except the id from `other`.
    pub fn apply_changes(&mut self, other: &Employee) {
        self.name.clone_from(&other.name);
        self.address.clone_from(&other.address);
        self.email.clone_from(&other.email);
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] when the id is blank.
    pub fn validate(&self) -> Result<(), StaffHubError> {
        if self.id.is_blank() {
            return Err(ValidationError::EmptyId.into());
        }
        Ok(())
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee {{ id: {}, name: {}, address: {}, email: {} }}",
            self.id, self.name, self.address, self.email
        )
    }
}

/// Step-by-step builder for [`Employee`].
#[derive(Debug, Default)]
pub struct EmployeeBuilder {
    id: Option<EmployeeId>,
    name: Option<String>,
    address: Option<String>,
    email: Option<String>,
}

impl EmployeeBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<EmployeeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Consume the builder, validate, and return an [`Employee`].
    ///
    /// Missing text fields default to empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if `id` is missing or blank.
    pub fn build(self) -> Result<Employee, StaffHubError> {
        let employee = Employee {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        };
        employee.validate()?;
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn john(id: &str) -> Employee {
        Employee::new(id, "John Doe", "San Jose", "john@playground.com")
    }

    #[test]
    fn should_build_valid_employee_when_id_provided() {
        let employee = Employee::builder()
            .id("01")
            .name("John Doe")
            .address("San Jose")
            .email("john@playground.com")
            .build()
            .unwrap();

        assert_eq!(employee.id().as_str(), "01");
        assert_eq!(employee.name(), "John Doe");
        assert_eq!(employee.address(), "San Jose");
        assert_eq!(employee.email(), "john@playground.com");
    }

    #[test]
    fn should_return_validation_error_when_id_is_missing() {
        let result = Employee::builder().name("John Doe").build();
        assert!(matches!(
            result,
            Err(StaffHubError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_not_validate_on_set() {
        let mut employee = john("01");
        employee.set_id("");
        assert_eq!(employee.id().as_str(), "");
        assert!(employee.validate().is_err());
    }

    #[test]
    fn should_mutate_in_place_through_setters() {
        let mut employee = john("02");
        employee.set_name("Jane Roe");
        employee.set_address("California");
        employee.set_email("jane@playground.com");

        assert_eq!(employee.name(), "Jane Roe");
        assert_eq!(employee.address(), "California");
        assert_eq!(employee.email(), "jane@playground.com");
    }

    #[test]
    fn should_compare_by_id_only() {
        let mut moved = john("01");
        moved.set_address("California");

        assert_eq!(john("01"), moved);
        assert_ne!(john("01"), john("02"));

        let set: HashSet<Employee> = [john("01"), moved, john("02")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn should_keep_id_when_applying_changes() {
        let mut stored = john("01");
        let incoming = Employee::new("other", "Jane Roe", "California", "jane@playground.com");

        stored.apply_changes(&incoming);

        assert_eq!(stored.id().as_str(), "01");
        assert_eq!(stored.name(), "Jane Roe");
        assert_eq!(stored.address(), "California");
        assert_eq!(stored.email(), "jane@playground.com");
    }

    #[test]
    fn should_render_all_fields_when_displayed() {
        assert_eq!(
            john("01").to_string(),
            "Employee { id: 01, name: John Doe, address: San Jose, email: john@playground.com }"
        );
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let employee = john("01");
        let json = serde_json::to_string(&employee).unwrap();
        let parsed: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id(), employee.id());
        assert_eq!(parsed.address(), employee.address());
    }
}
