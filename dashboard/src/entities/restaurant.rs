use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRestaurant {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_fields_deserialize_from_null() {
        let r: ManagedRestaurant = serde_json::from_str(
            r#"{"id":"r1","name":"Pizza Shop","description":null,"managerId":null,"createdAt":"2024-05-01T12:00:00Z","updatedAt":null}"#,
        )
        .unwrap();
        assert_eq!(r.name, "Pizza Shop");
        assert!(r.description.is_none());
        assert!(r.manager_id.is_none());
        assert!(r.created_at.is_some());
        assert!(r.updated_at.is_none());
    }
}
