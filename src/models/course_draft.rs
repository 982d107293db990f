use serde::{Deserialize, Serialize};

use super::Level;
use crate::common::DraftError;

/// Categories offered by the upload form.
pub const COURSE_CATEGORIES: [&str; 5] = [
    "Web Development",
    "Data Science",
    "Design",
    "Marketing",
    "Photography",
];

/// Raw state of the instructor upload form.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: Level,
    pub price: String,
}

/// A draft that passed the same checks the form's `required` inputs make.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidCourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: Level,
    pub price: f64,
}

fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

impl CourseDraft {
    pub fn validate(&self) -> Result<ValidCourseDraft, DraftError> {
        let title = required(&self.title, "title")?;
        let description = required(&self.description, "description")?;
        let category = required(&self.category, "category")?;
        let raw_price = required(&self.price, "price")?;

        let price = raw_price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(DraftError::InvalidPrice(raw_price))?;

        Ok(ValidCourseDraft {
            title,
            description,
            category,
            level: self.level,
            price,
        })
    }
}
