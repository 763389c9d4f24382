//! Portal Entities
//!
//! Read-only mirrors of the backend's resources: users, courses,
//! assignments, announcements and analytics.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Backend identifier, accepted as a JSON integer or string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{}", id),
            EntityId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Int(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

impl std::str::FromStr for EntityId {
    type Err = std::convert::Infallible;

    /// Numeric input becomes `Int`, anything else `Text`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(EntityId::Int)
            .unwrap_or_else(|_| EntityId::Text(s.to_string())))
    }
}

/// Portal role, selects which dashboard is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    /// Any role string this client does not know about
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account profile as returned by `/me` and `/admin/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: EntityId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<Due>,
}

impl Assignment {
    /// Due date for display, `-` when the assignment has none
    pub fn due_label(&self) -> String {
        match &self.due_date {
            Some(Due::At(dt)) => dt.format("%Y-%m-%d %H:%M").to_string(),
            Some(Due::Raw(raw)) => raw.clone(),
            None => "-".to_string(),
        }
    }
}

/// Assignment due date
///
/// Values no known format matches are kept as sent so one odd date does not
/// fail the whole assignment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Due {
    At(DateTime<Utc>),
    Raw(String),
}

impl Due {
    /// Parse a backend date string, naive values are read as UTC
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Due::At(dt.with_timezone(&Utc));
        }

        const NAIVE_FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
        ];
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Due::At(naive.and_utc());
            }
        }

        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Due::At(date.and_time(chrono::NaiveTime::MIN).and_utc()),
            Err(_) => Due::Raw(raw.to_string()),
        }
    }

    /// Epoch milliseconds
    pub fn from_millis(millis: i64) -> Self {
        match Utc.timestamp_millis_opt(millis).single() {
            Some(dt) => Due::At(dt),
            None => Due::Raw(millis.to_string()),
        }
    }

    pub fn at(&self) -> Option<DateTime<Utc>> {
        match self {
            Due::At(dt) => Some(*dt),
            Due::Raw(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: EntityId,
    pub title: String,
    pub content: String,
}

/// Backend analytics, metric name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats(pub BTreeMap<String, f64>);

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.0.get(metric).copied()
    }

    /// Entries in key order with values formatted for display
    pub fn entries(&self) -> impl Iterator<Item = (&str, String)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), format_stat(*value)))
    }
}

/// Whole numbers print without a fractional part
fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Due dates arrive as strings or epoch milliseconds
#[derive(Deserialize)]
#[serde(untagged)]
enum WireDue {
    Text(String),
    Millis(f64),
    Other(serde::de::IgnoredAny),
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<Due>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<WireDue>::deserialize(deserializer)? {
        Some(WireDue::Text(raw)) if raw.trim().is_empty() => None,
        Some(WireDue::Text(raw)) => Some(Due::parse(&raw)),
        Some(WireDue::Millis(millis)) => Some(Due::from_millis(millis as i64)),
        Some(WireDue::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id_accepts_int_and_string() {
        let a: EntityId = serde_json::from_value(json!(7)).unwrap();
        let b: EntityId = serde_json::from_value(json!("64f0c2")).unwrap();
        assert_eq!(a, EntityId::Int(7));
        assert_eq!(b, EntityId::Text("64f0c2".to_string()));
        assert_eq!("42".parse::<EntityId>().unwrap(), EntityId::Int(42));
        assert_eq!("abc".parse::<EntityId>().unwrap().to_string(), "abc");
    }

    #[test]
    fn test_user_defaults_approved() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Ada",
            "email": "ada@school.test",
            "role": "teacher"
        }))
        .unwrap();
        assert_eq!(user.role, Role::Teacher);
        assert!(!user.approved);
    }

    #[test]
    fn test_unknown_role() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Pat",
            "email": "pat@school.test",
            "role": "parent",
            "approved": true
        }))
        .unwrap();
        assert_eq!(user.role, Role::Unknown);
    }

    #[test]
    fn test_due_date_formats() {
        let with_offset: Assignment = serde_json::from_value(json!({
            "id": 1, "title": "Essay", "due_date": "2024-03-01T09:30:00+00:00"
        }))
        .unwrap();
        assert_eq!(with_offset.due_label(), "2024-03-01 09:30");

        let naive: Assignment = serde_json::from_value(json!({
            "id": 2, "title": "Lab", "due_date": "2024-03-02T14:00:00"
        }))
        .unwrap();
        assert_eq!(naive.due_label(), "2024-03-02 14:00");

        let none: Assignment =
            serde_json::from_value(json!({ "id": 3, "title": "Reading", "due_date": null })).unwrap();
        assert_eq!(none.due_label(), "-");

        let missing: Assignment = serde_json::from_value(json!({ "id": 4, "title": "Quiz" })).unwrap();
        assert!(missing.due_date.is_none());
    }

    #[test]
    fn test_loose_due_dates() {
        assert_eq!(Due::parse("2024-05-01T12:00").at().unwrap().to_rfc3339(), "2024-05-01T12:00:00+00:00");
        assert_eq!(Due::parse("2024-05-01 12:00:00").at().unwrap().to_rfc3339(), "2024-05-01T12:00:00+00:00");
        assert_eq!(Due::parse("2024-05-01").at().unwrap().to_rfc3339(), "2024-05-01T00:00:00+00:00");
        assert_eq!(Due::from_millis(1_714_564_800_000).at().unwrap().to_rfc3339(), "2024-05-01T12:00:00+00:00");
        assert_eq!(Due::parse("next week"), Due::Raw("next week".to_string()));
    }

    #[test]
    fn test_odd_due_date_keeps_the_list() {
        for odd in [
            json!("2024-05-01"),
            json!("2024-05-01T12:00"),
            json!("2024-05-01 12:00:00"),
            json!(1_714_564_800_000i64),
            json!("end of term"),
        ] {
            let list: Vec<Assignment> = serde_json::from_value(json!([
                { "id": 1, "title": "Essay", "due_date": "2024-03-01T09:30:00Z" },
                { "id": 2, "title": "Lab", "due_date": odd },
            ]))
            .unwrap();
            assert_eq!(list.len(), 2);
            assert_eq!(list[0].due_label(), "2024-03-01 09:30");
            assert_ne!(list[1].due_label(), "-");
        }

        let list: Vec<Assignment> = serde_json::from_value(json!([
            { "id": 1, "title": "Essay", "due_date": "end of term" },
            { "id": 2, "title": "Lab", "due_date": "" },
        ]))
        .unwrap();
        assert_eq!(list[0].due_label(), "end of term");
        assert_eq!(list[1].due_label(), "-");
    }

    #[test]
    fn test_stats_entries() {
        let stats: Stats = serde_json::from_value(json!({
            "users": 12, "courses": 3, "avg_grade": 81.5
        }))
        .unwrap();
        let entries: Vec<_> = stats.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("avg_grade", "81.5".to_string()),
                ("courses", "3".to_string()),
                ("users", "12".to_string()),
            ]
        );
        assert_eq!(stats.get("users"), Some(12.0));
    }
}
