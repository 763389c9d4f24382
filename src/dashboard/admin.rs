//! Admin Dashboard

use serde::Serialize;

use super::{DashboardError, Section};
use crate::models::{EntityId, Stats, User};
use crate::session::SessionContext;

/// User approval list and backend analytics
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminDashboard {
    pub users: Section<Vec<User>>,
    pub stats: Section<Stats>,
}

impl AdminDashboard {
    pub async fn mount(ctx: &SessionContext) -> Self {
        let api = ctx.api();
        let users = Section::from_result("users", api.admin_users(ctx.token()).await);
        let stats = Section::from_result("stats", api.admin_stats(ctx.token()).await);
        Self { users, stats }
    }

    /// Flip a listed user's approval and splice the server's answer in
    pub async fn toggle_approval(
        &mut self,
        ctx: &SessionContext,
        user_id: &EntityId,
    ) -> Result<User, DashboardError> {
        let current = self
            .users
            .loaded()
            .and_then(|users| users.iter().find(|u| &u.id == user_id))
            .map(|u| u.approved)
            .ok_or_else(|| DashboardError::UnknownUser(user_id.clone()))?;

        let updated = ctx.api().set_approval(ctx.token(), user_id, !current).await?;
        tracing::info!(user_id = %updated.id, approved = updated.approved, "Updated approval");

        if let Section::Loaded(users) = &mut self.users {
            replace_by_id(users, &updated);
        }
        Ok(updated)
    }
}

/// Replace every entry with the same id as `updated`
fn replace_by_id(users: &mut [User], updated: &User) {
    for user in users.iter_mut().filter(|u| u.id == updated.id) {
        *user = updated.clone();
    }
}
