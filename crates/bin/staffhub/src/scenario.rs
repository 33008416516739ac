//! The fixed demo sequence: add two employees, list, move one to a new
//! address, list again, then remove both.

use std::io::Write;

use staffhub_app::ports::EmployeeRepository;
use staffhub_app::services::employee_service::EmployeeService;
use staffhub_domain::employee::Employee;
use staffhub_domain::error::StaffHubError;

/// Failures while running the scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("employee service call failed")]
    Service(#[from] StaffHubError),
    #[error("failed to write listing")]
    Io(#[from] std::io::Error),
}

fn john(id: &str) -> Employee {
    Employee::new(id, "John Doe", "San Jose", "john@playground.com")
}

/// Run the demo against `service`, writing each listing to `out`.
///
/// # Errors
///
/// Returns [`ScenarioError::Service`] if any service call fails, or
/// [`ScenarioError::Io`] if writing to `out` fails.
pub async fn run<R, W>(service: &EmployeeService<R>, out: &mut W) -> Result<(), ScenarioError>
where
    R: EmployeeRepository,
    W: Write,
{
    let first = john("01");
    let mut second = john("02");

    service.add_employee(first.clone()).await?;
    service.add_employee(second.clone()).await?;
    let count = service.count_employees().await?;
    tracing::info!(count, "employees added");
    print_all(service, out).await?;

    second.set_address("California");
    service.update_employee(second.clone()).await?;
    tracing::info!(employee_id = %second.id(), "employee updated");
    print_all(service, out).await?;

    service.remove_employee(first.id().clone()).await?;
    service.remove_employee(second.id().clone()).await?;
    let count = service.count_employees().await?;
    tracing::info!(count, "employees removed");

    Ok(())
}

async fn print_all<R, W>(service: &EmployeeService<R>, out: &mut W) -> Result<(), ScenarioError>
where
    R: EmployeeRepository,
    W: Write,
{
    for employee in service.list_employees().await? {
        writeln!(out, "{employee}")?;
    }
    Ok(())
}
