use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Zip,
    Code,
    Link,
    #[default]
    #[serde(other)]
    Other,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Zip => "zip",
            Self::Code => "code",
            Self::Link => "link",
            Self::Other => "other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pdf => "📄",
            Self::Zip => "🗜",
            Self::Code => "💻",
            Self::Link => "🔗",
            Self::Other => "📎",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub video_url: String,
    pub thumbnail: String,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub completed: bool,
    /// Sort key within the course. Not unique, not contiguous.
    pub order: i32,
}
