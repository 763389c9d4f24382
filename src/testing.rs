//! In-memory backend used by unit tests

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::api::{ApiError, ApiResult, PortalApi};
use crate::models::{Announcement, Assignment, Course, EntityId, Role, Stats, User};

struct Account {
    password: String,
    user: User,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    student_courses: Vec<Course>,
    assignments: Vec<Assignment>,
    announcements: Vec<Announcement>,
    teacher_courses: Vec<Course>,
    stats: Stats,
    failing: HashSet<String>,
    calls: Vec<String>,
    next_id: i64,
}

/// Fake portal backend; tokens are `token-<email>`
#[derive(Default)]
pub(crate) struct FakeApi {
    state: Mutex<State>,
}

fn fail(endpoint: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        message: format!("{} unavailable", endpoint),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state().next_id = 100;
        api
    }

    pub fn with_account(email: &str, password: &str, role: Role) -> Self {
        let api = Self::new();
        api.add_account(email, password, role);
        api
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn add_account(&self, email: &str, password: &str, role: Role) -> User {
        let mut state = self.state();
        state.next_id += 1;
        let user = User {
            id: EntityId::Int(state.next_id),
            name: email.split('@').next().unwrap_or(email).to_string(),
            email: email.to_string(),
            role,
            approved: false,
        };
        state.accounts.push(Account {
            password: password.to_string(),
            user: user.clone(),
        });
        user
    }

    pub fn token_for(&self, email: &str) -> String {
        format!("token-{}", email)
    }

    pub fn fail_endpoint(&self, endpoint: &str) {
        self.state().failing.insert(endpoint.to_string());
    }

    pub fn set_student_data(&self, courses: Vec<Course>, assignments: Vec<Assignment>, announcements: Vec<Announcement>) {
        let mut state = self.state();
        state.student_courses = courses;
        state.assignments = assignments;
        state.announcements = announcements;
    }

    pub fn set_teacher_courses(&self, courses: Vec<Course>) {
        self.state().teacher_courses = courses;
    }

    pub fn set_stats(&self, stats: Stats) {
        self.state().stats = stats;
    }

    /// Endpoints hit so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    fn enter(&self, endpoint: &str, token: Option<&str>) -> ApiResult<Option<User>> {
        let mut state = self.state();
        state.calls.push(endpoint.to_string());
        if state.failing.contains(endpoint) {
            return Err(fail(endpoint));
        }
        let Some(token) = token else {
            return Ok(None);
        };
        state
            .accounts
            .iter()
            .find(|a| format!("token-{}", a.user.email) == token)
            .map(|a| Some(a.user.clone()))
            .ok_or(ApiError::Status {
                status: 401,
                message: "invalid token".to_string(),
            })
    }
}

#[async_trait]
impl PortalApi for FakeApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        self.enter("/auth/login", None)?;
        let state = self.state();
        state
            .accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| format!("token-{}", a.user.email))
            .ok_or(ApiError::Status {
                status: 401,
                message: "Incorrect email or password".to_string(),
            })
    }

    async fn register(&self, name: &str, email: &str, password: &str, role: Role) -> ApiResult<String> {
        self.enter("/auth/register", None)?;
        if self.state().accounts.iter().any(|a| a.user.email == email) {
            return Err(ApiError::Status {
                status: 400,
                message: "Email already registered".to_string(),
            });
        }
        let mut user = self.add_account(email, password, role);
        user.name = name.to_string();
        if let Some(account) = self.state().accounts.last_mut() {
            account.user = user;
        }
        Ok(self.token_for(email))
    }

    async fn me(&self, token: &str) -> ApiResult<User> {
        self.enter("/me", Some(token))?
            .ok_or(ApiError::Decode("no user".to_string()))
    }

    async fn student_courses(&self, token: &str) -> ApiResult<Vec<Course>> {
        self.enter("/student/courses", Some(token))?;
        Ok(self.state().student_courses.clone())
    }

    async fn student_assignments(&self, token: &str) -> ApiResult<Vec<Assignment>> {
        self.enter("/student/assignments", Some(token))?;
        Ok(self.state().assignments.clone())
    }

    async fn announcements(&self, token: &str) -> ApiResult<Vec<Announcement>> {
        self.enter("/announcements", Some(token))?;
        Ok(self.state().announcements.clone())
    }

    async fn teacher_courses(&self, token: &str) -> ApiResult<Vec<Course>> {
        self.enter("/teacher/courses", Some(token))?;
        Ok(self.state().teacher_courses.clone())
    }

    async fn create_course(&self, token: &str, title: &str, subject: &str) -> ApiResult<Course> {
        self.enter("POST /teacher/courses", Some(token))?;
        let mut state = self.state();
        state.next_id += 1;
        let course = Course {
            id: EntityId::Int(state.next_id),
            title: title.to_string(),
            subject: subject.to_string(),
        };
        state.teacher_courses.insert(0, course.clone());
        Ok(course)
    }

    async fn admin_users(&self, token: &str) -> ApiResult<Vec<User>> {
        self.enter("/admin/users", Some(token))?;
        Ok(self.state().accounts.iter().map(|a| a.user.clone()).collect())
    }

    async fn admin_stats(&self, token: &str) -> ApiResult<Stats> {
        self.enter("/admin/stats", Some(token))?;
        Ok(self.state().stats.clone())
    }

    async fn set_approval(&self, token: &str, user_id: &EntityId, approved: bool) -> ApiResult<User> {
        self.enter("/admin/approve", Some(token))?;
        let mut state = self.state();
        let account = state
            .accounts
            .iter_mut()
            .find(|a| &a.user.id == user_id)
            .ok_or(ApiError::Status {
                status: 404,
                message: "User not found".to_string(),
            })?;
        account.user.approved = approved;
        Ok(account.user.clone())
    }
}
