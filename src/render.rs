//! Terminal Rendering
//!
//! Plain-text and JSON views of a shell [`Screen`].

use serde_json::json;

use crate::dashboard::{AdminDashboard, Dashboard, Section, StudentDashboard, TeacherDashboard};
use crate::models::User;
use crate::shell::Screen;

const TITLE: &str = "Student Portal";

/// Render a screen as text
pub fn render_screen(screen: &Screen<'_>) -> String {
    match screen {
        Screen::AuthForm { error } => {
            let mut out = String::from("Welcome back\n");
            out.push_str("Log in with `portal login <email> <password>`.\n");
            if let Some(error) = error {
                out.push_str(&format!("Error: {}\n", error));
            }
            out
        }
        Screen::ProfileUnavailable => format!(
            "{}\nSigned in, but your profile could not be loaded.\n\
             Try again later or run `portal logout`.\n",
            TITLE
        ),
        Screen::Dashboard { profile, dashboard } => {
            let mut out = topbar(profile);
            match dashboard {
                Some(Dashboard::Student(student)) => render_student(&mut out, student),
                Some(Dashboard::Teacher(teacher)) => render_teacher(&mut out, teacher),
                Some(Dashboard::Admin(admin)) => render_admin(&mut out, admin),
                None => {}
            }
            out
        }
    }
}

/// Render a screen as JSON
pub fn screen_json(screen: &Screen<'_>) -> serde_json::Value {
    match screen {
        Screen::AuthForm { error } => json!({ "screen": "auth", "error": error }),
        Screen::ProfileUnavailable => json!({ "screen": "profile_unavailable" }),
        Screen::Dashboard { profile, dashboard } => json!({
            "screen": "dashboard",
            "profile": profile,
            "dashboard": dashboard,
        }),
    }
}

fn topbar(profile: &User) -> String {
    format!("{} | {} ({})\n", TITLE, profile.name, profile.role)
}

fn render_student(out: &mut String, dashboard: &StudentDashboard) {
    list(out, "My Courses", &dashboard.courses, "Not enrolled yet.", |c| {
        vec![c.title.clone(), c.subject.clone()]
    });
    list(out, "Announcements", &dashboard.announcements, "No announcements.", |a| {
        vec![a.title.clone(), a.content.clone()]
    });
    list(out, "Assignments", &dashboard.assignments, "No assignments yet.", |a| {
        vec![a.title.clone(), format!("Due: {}", a.due_label())]
    });
}

fn render_teacher(out: &mut String, dashboard: &TeacherDashboard) {
    list(out, "My Courses", &dashboard.courses, "No courses yet.", |c| {
        vec![format!("{} [{}]", c.title, c.id), c.subject.clone()]
    });
}

fn render_admin(out: &mut String, dashboard: &AdminDashboard) {
    list(out, "Users", &dashboard.users, "No users yet.", |u| {
        let action = if u.approved { "Revoke" } else { "Approve" };
        vec![
            format!("{} - {} [{}]", u.name, u.role, u.id),
            u.email.clone(),
            format!("Action: {}", action),
        ]
    });

    heading(out, "Analytics");
    match &dashboard.stats {
        Section::Loaded(stats) => {
            let width = stats.entries().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (name, value) in stats.entries() {
                out.push_str(&format!("  {:<width$}  {}\n", capitalize(name), value, width = width));
            }
        }
        Section::Pending => out.push_str("  Loading...\n"),
        Section::Failed(_) => out.push_str("  Could not load analytics.\n"),
    }
}

fn heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}

/// One section: first line of each item as a bullet, the rest indented
fn list<T>(
    out: &mut String,
    title: &str,
    section: &Section<Vec<T>>,
    empty: &str,
    lines: impl Fn(&T) -> Vec<String>,
) {
    heading(out, title);
    match section {
        Section::Pending => out.push_str("  Loading...\n"),
        Section::Failed(_) => {
            out.push_str(&format!("  Could not load {}.\n", title.to_lowercase()));
        }
        Section::Loaded(items) if items.is_empty() => {
            out.push_str(&format!("  {}\n", empty));
        }
        Section::Loaded(items) => {
            for item in items {
                for (i, line) in lines(item).into_iter().enumerate() {
                    let prefix = if i == 0 { "  - " } else { "    " };
                    out.push_str(prefix);
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
