use std::ops::Deref;
use crate::route;
use super::*;

impl From<Vec<Employee>> for Employees {
    fn from(args: Vec<Employee>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Employee; N]> for Employees {
    fn from(args: [Employee; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Employees {
    type Target = Vec<Employee>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Employees {
    type Item = Employee;
    type IntoIter = std::vec::IntoIter<Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Employees {
    pub fn entries(&self) -> Vec<ListEntry> {
        self.0.iter()
            .map(ListEntry::from)
            .collect()
    }
}

impl Employee {
    /// First and last name, as shown in listings.
    pub fn short_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The full name triple, omitting an absent patronymic.
    pub fn full_name(&self) -> String {
        match self.patronymic.as_deref() {
            Some(patronymic) if !patronymic.is_empty() => format!(
                "{} {} {patronymic}",
                self.first_name,
                self.last_name,
            ),
            _ => self.short_name(),
        }
    }

    pub fn href(&self) -> String {
        route::employee_href(self.id)
    }

    pub fn edit_href(&self) -> String {
        route::employee_edit_href(self.id)
    }
}

impl WorkExperience {
    pub fn end_date_label(&self) -> &str {
        match self.end_date.as_deref() {
            Some(end_date) if !end_date.is_empty() => end_date,
            _ => "Current",
        }
    }
}

impl From<&Employee> for ListEntry {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            label: employee.short_name(),
            href: employee.href(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn listing_entries() -> anyhow::Result<()> {
        let employees: Employees = serde_json::from_str(r#"[
            {"id": 1, "first_name": "Anna", "last_name": "Ivanova"}
        ]"#)?;
        let entries = employees.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].href, "/employees/1");
        assert_eq!(entries[0].label, "Anna Ivanova");
        Ok(())
    }

    #[test]
    fn names() {
        let mut employee = Employee {
            id: 4,
            first_name: "Anna".to_string(),
            last_name: "Ivanova".to_string(),
            .. Default::default()
        };
        assert_eq!(employee.full_name(), "Anna Ivanova");
        employee.patronymic = Some(String::new());
        assert_eq!(employee.full_name(), "Anna Ivanova");
        employee.patronymic = Some("Sergeevna".to_string());
        assert_eq!(employee.full_name(), "Anna Ivanova Sergeevna");
        assert_eq!(employee.edit_href(), "/employees/4/edit");
    }

    #[test]
    fn current_position() {
        let mut work = WorkExperience {
            employer: "Acme".to_string(),
            .. Default::default()
        };
        assert_eq!(work.end_date_label(), "Current");
        work.end_date = Some("2020-01-31".to_string());
        assert_eq!(work.end_date_label(), "2020-01-31");
    }
}
