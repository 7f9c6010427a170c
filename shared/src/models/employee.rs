//! Employee Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee record
///
/// `id` is `None` until the row has been persisted; the store assigns it on
/// insert. Fields are private so an assigned id cannot be changed in place;
/// an update is expressed as a new value carrying the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    #[serde(default)]
    id: Option<i64>,
    name: String,
    role: String,
}

impl Employee {
    /// Transient employee, not yet persisted
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.into(),
        }
    }

    /// Employee with a known id (persisted row or client-chosen id)
    pub fn with_id(id: i64, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            role: role.into(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Employee{{id={id}, ")?,
            None => write!(f, "Employee{{id=null, ")?,
        }
        write!(f, "name='{}', role='{}'}}", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_has_no_id() {
        let emp = Employee::new("Frodo Baggins", "ring bearer");
        assert_eq!(emp.id(), None);
        assert_eq!(emp.name(), "Frodo Baggins");
        assert_eq!(emp.role(), "ring bearer");
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let a = Employee::with_id(1, "Frodo Baggins", "ring bearer");
        let b = Employee::with_id(1, "Frodo Baggins", "ring bearer");
        let c = Employee::with_id(2, "Frodo Baggins", "ring bearer");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Employee::new("Frodo Baggins", "ring bearer"));

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let emp = Employee::with_id(3, "Bilbo Baggins", "burglar");
        assert_eq!(
            emp.to_string(),
            "Employee{id=3, name='Bilbo Baggins', role='burglar'}"
        );
        assert_eq!(
            Employee::new("Sam", "gardener").to_string(),
            "Employee{id=null, name='Sam', role='gardener'}"
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Employee::new("Sam", "gardener")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": null, "name": "Sam", "role": "gardener" })
        );

        let emp: Employee =
            serde_json::from_str(r#"{"id":7,"name":"Sam","role":"gardener"}"#).unwrap();
        assert_eq!(emp, Employee::with_id(7, "Sam", "gardener"));
    }

    #[test]
    fn test_json_missing_id_is_none() {
        let emp: Employee = serde_json::from_str(r#"{"name":"Sam","role":"gardener"}"#).unwrap();
        assert_eq!(emp.id(), None);
    }

    #[test]
    fn test_json_requires_name_and_role() {
        assert!(serde_json::from_str::<Employee>(r#"{"name":"Sam"}"#).is_err());
        assert!(serde_json::from_str::<Employee>(r#"{"name":null,"role":"x"}"#).is_err());
    }
}
