use hrcore::employee::Employee;

/// A fully populated record in the read shape, as `GET /employees/1/`
/// would return it.
pub const EMPLOYEE: &str = include_str!("../data/employee.json");

pub fn employee() -> anyhow::Result<Employee> {
    Ok(serde_json::from_str(EMPLOYEE)?)
}
