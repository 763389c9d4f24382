//! Portal Entities
//!
//! Wire types returned by the backend plus the list helpers the dashboards
//! use to apply mutation results.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// Backend identifier, numeric or string
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{}", id),
            EntityId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
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

    /// Role chosen in the registration select
    pub fn from_select(value: &str) -> Self {
        match value {
            "teacher" => Role::Teacher,
            _ => Role::Student,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub approved: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    pub subject: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Assignment {
    pub id: EntityId,
    pub title: String,
    #[serde(default, deserialize_with = "due_text")]
    pub due_date: Option<String>,
}

/// Due dates arrive as strings or epoch milliseconds
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum WireDue {
    Text(String),
    Millis(f64),
    Other(serde::de::IgnoredAny),
}

fn due_text<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    use serde::Deserialize;

    Ok(match Option::<WireDue>::deserialize(deserializer)? {
        Some(WireDue::Text(raw)) => Some(raw),
        Some(WireDue::Millis(millis)) => Utc
            .timestamp_millis_opt(millis as i64)
            .single()
            .map(|dt| dt.to_rfc3339()),
        Some(WireDue::Other(_)) | None => None,
    })
}

impl Assignment {
    pub fn due_label(&self) -> String {
        format_due(self.due_date.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Announcement {
    pub id: EntityId,
    pub title: String,
    pub content: String,
}

/// Analytics counters keyed by name
pub type Stats = BTreeMap<String, f64>;

/// Due date as `YYYY-MM-DD HH:MM`, `-` when absent.
///
/// Values without an offset are read as UTC. Unparseable values are shown
/// as sent.
pub fn format_due(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };

    match parse_due(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

fn parse_due(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(chrono::NaiveTime::MIN))
        })
        .map(|naive| naive.and_utc())
}

/// Whole numbers without a trailing `.0`
pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// New courses go to the top of the list
pub fn prepend_course(courses: &mut Vec<Course>, course: Course) {
    courses.insert(0, course);
}

/// Swap in the server's copy of a user on every row with its id
pub fn replace_user(users: &mut [User], updated: User) {
    for slot in users.iter_mut().filter(|u| u.id == updated.id) {
        *slot = updated.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, approved: bool) -> User {
        User {
            id: EntityId::Int(id),
            name: format!("user{}", id),
            email: format!("user{}@school.test", id),
            role: Role::Student,
            approved,
        }
    }

    #[test]
    fn test_due_date_formats() {
        assert_eq!(format_due(Some("2024-05-01T09:30:00Z")), "2024-05-01 09:30");
        assert_eq!(format_due(Some("2024-05-01T09:30:00")), "2024-05-01 09:30");
        assert_eq!(format_due(Some("2024-05-01T11:30:00+02:00")), "2024-05-01 09:30");
        assert_eq!(format_due(None), "-");
        assert_eq!(format_due(Some("")), "-");
        assert_eq!(format_due(Some("next week")), "next week");
        assert_eq!(format_due(Some("2024-05-01T12:00")), "2024-05-01 12:00");
        assert_eq!(format_due(Some("2024-05-01 12:00:00")), "2024-05-01 12:00");
        assert_eq!(format_due(Some("2024-05-01")), "2024-05-01 00:00");
    }

    #[test]
    fn test_numeric_due_date_keeps_the_list() {
        let list: Vec<Assignment> = serde_json::from_str(
            r#"[{"id":1,"title":"Essay","due_date":1714564800000},{"id":2,"title":"Lab","due_date":null}]"#,
        )
        .unwrap();
        assert_eq!(list[0].due_label(), "2024-05-01 12:00");
        assert_eq!(list[1].due_label(), "-");
    }

    #[test]
    fn test_prepend_course() {
        let mut courses = vec![Course {
            id: EntityId::Int(1),
            title: "Algebra".to_string(),
            subject: "Math".to_string(),
        }];
        prepend_course(
            &mut courses,
            Course {
                id: EntityId::Text("c-2".to_string()),
                title: "Optics".to_string(),
                subject: "Physics".to_string(),
            },
        );

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].title, "Optics");
        assert_eq!(courses[1].title, "Algebra");
    }

    #[test]
    fn test_replace_user_only_touches_match() {
        let mut users = vec![user(1, false), user(2, false), user(3, true)];
        let mut updated = user(2, true);
        updated.name = "renamed".to_string();
        replace_user(&mut users, updated);

        assert!(!users[0].approved);
        assert!(users[1].approved);
        assert_eq!(users[1].name, "renamed");
        assert!(users[2].approved);
    }

    #[test]
    fn test_replace_user_updates_duplicate_rows() {
        let mut users = vec![user(4, false), user(5, false), user(4, false)];
        replace_user(&mut users, user(4, true));

        assert!(users[0].approved);
        assert!(!users[1].approved);
        assert!(users[2].approved);
    }

    #[test]
    fn test_replace_user_unknown_id_is_noop() {
        let mut users = vec![user(1, false)];
        replace_user(&mut users, user(9, true));
        assert_eq!(users, vec![user(1, false)]);
    }

    #[test]
    fn test_wire_shapes() {
        let u: User = serde_json::from_str(
            r#"{"id":"u-1","name":"Ada","email":"ada@school.test","role":"principal"}"#,
        )
        .unwrap();
        assert_eq!(u.id, EntityId::Text("u-1".to_string()));
        assert_eq!(u.role, Role::Unknown);
        assert!(!u.approved);

        let stats: Stats = serde_json::from_str(r#"{"users":4,"courses":2.5}"#).unwrap();
        assert_eq!(format_stat(stats["users"]), "4");
        assert_eq!(format_stat(stats["courses"]), "2.5");
        assert_eq!(capitalize("users"), "Users");
    }

    #[test]
    fn test_role_select() {
        assert_eq!(Role::from_select("teacher"), Role::Teacher);
        assert_eq!(Role::from_select("student"), Role::Student);
        assert_eq!(Role::from_select("admin"), Role::Student);
    }
}
