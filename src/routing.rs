//! Typed view of the client-side routes.
//!
//! The Leptos router in [`crate::frontend`] matches the same paths. This type
//! exists so the rest of the crate can build links and reason about the
//! current location without string juggling.

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    #[default]
    Landing,
    Login,
    Signup,
    Dashboard,
    Course(String),
    Lesson(String),
    Instructor,
}

impl AppRoute {
    /// Parses a location pathname. Anything unmatched falls back to the
    /// landing page, like the router's fallback.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Self::Landing,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["dashboard"] => Self::Dashboard,
            ["instructor"] => Self::Instructor,
            ["course", id] if !id.is_empty() => Self::Course((*id).to_string()),
            ["lesson", id] if !id.is_empty() => Self::Lesson((*id).to_string()),
            _ => Self::Landing,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Course(id) => format!("/course/{id}"),
            Self::Lesson(id) => format!("/lesson/{id}"),
            Self::Instructor => "/instructor".to_string(),
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.href())
    }
}
