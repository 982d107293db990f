//! Mock login state, derived from the routes the visitor has opened.

use crate::models::{MockUser, UserRole};
use crate::routing::AppRoute;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub user: MockUser,
}

impl Session {
    pub fn signed_in(role: UserRole) -> Self {
        Self {
            logged_in: true,
            user: MockUser::for_role(role),
        }
    }

    /// Updates the session for a newly visited path.
    ///
    /// Learner pages sign in the student, the instructor page signs in the
    /// instructor. Public pages leave the session as it is.
    pub fn observe(&mut self, path: &str) {
        let role = match AppRoute::parse(path) {
            AppRoute::Dashboard | AppRoute::Course(_) | AppRoute::Lesson(_) => UserRole::Student,
            AppRoute::Instructor => UserRole::Instructor,
            AppRoute::Landing | AppRoute::Login | AppRoute::Signup => return,
        };

        if !self.logged_in || self.user.role != role {
            log::debug!("mock session switched to {role} for {path}");
        }
        *self = Self::signed_in(role);
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// The user to display, if any.
    pub fn current_user(&self) -> Option<&MockUser> {
        self.logged_in.then_some(&self.user)
    }

    /// Where the user menu's home link points.
    pub fn home_route(&self) -> AppRoute {
        match self.user.role {
            UserRole::Student => AppRoute::Dashboard,
            UserRole::Instructor => AppRoute::Instructor,
        }
    }
}
