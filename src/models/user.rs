use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Instructor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Demo identity shown in the navbar. There is no account behind it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MockUser {
    pub name: &'static str,
    pub avatar: &'static str,
    pub role: UserRole,
}

impl MockUser {
    pub const STUDENT: MockUser = MockUser {
        name: "John Doe",
        avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100&h=100&fit=crop&crop=face",
        role: UserRole::Student,
    };

    pub const INSTRUCTOR: MockUser = MockUser {
        name: "Paxora Consulting",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b5b6e15f?w=100&h=100&fit=crop&crop=face",
        role: UserRole::Instructor,
    };

    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Student => Self::STUDENT,
            UserRole::Instructor => Self::INSTRUCTOR,
        }
    }
}

impl Default for MockUser {
    fn default() -> Self {
        Self::STUDENT
    }
}
