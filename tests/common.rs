#![allow(dead_code)]

use paxora::catalog::Catalog;

const COURSES: &str = r#"[
    {
        "id": "c1",
        "title": "Rust for Beginners",
        "description": "Ownership, borrowing and lifetimes",
        "thumbnail": "https://example.com/c1.jpg",
        "instructor": { "id": "i1", "name": "Ferris Crab", "avatar": "", "bio": "" },
        "duration": "4h",
        "studentsCount": 1000,
        "rating": 4.5,
        "price": 10,
        "category": "Programming",
        "level": "Beginner",
        "progress": 40,
        "enrolled": true,
        "lessonsCount": 3,
        "tags": ["Rust", "Systems"]
    },
    {
        "id": "c2",
        "title": "Watercolour Basics",
        "description": "Paint with light washes",
        "thumbnail": "https://example.com/c2.jpg",
        "instructor": { "id": "i2", "name": "Ada Brush", "avatar": "", "bio": "" },
        "duration": "2h",
        "studentsCount": 250,
        "rating": 3.5,
        "price": 20.5,
        "category": "Art",
        "level": "Advanced",
        "lessonsCount": 0
    }
]"#;

const LESSONS: &str = r#"[
    {
        "id": "l3", "courseId": "c1", "title": "Lifetimes", "description": "",
        "duration": "10:00", "videoUrl": "", "thumbnail": "", "order": 30
    },
    {
        "id": "l1", "courseId": "c1", "title": "Ownership", "description": "",
        "duration": "05:00", "videoUrl": "", "thumbnail": "", "completed": true, "order": 10
    },
    {
        "id": "l2", "courseId": "c1", "title": "Borrowing", "description": "",
        "duration": "07:30", "videoUrl": "", "thumbnail": "", "order": 20,
        "resources": [{ "title": "Slides", "url": "https://example.com/s.pdf", "type": "pdf" }]
    }
]"#;

/// Two courses: `c1` (enrolled, three lessons with gapped orders, one
/// completed) and `c2` (not enrolled, no lessons).
pub fn small_catalog() -> Catalog {
    Catalog::from_json(COURSES, LESSONS).expect("Invalid JSON in test helper")
}

pub fn lesson_ids<'a>(lessons: impl IntoIterator<Item = &'a paxora::models::Lesson>) -> Vec<&'a str> {
    lessons.into_iter().map(|l| l.id.as_str()).collect()
}

pub fn course_ids<'a>(courses: impl IntoIterator<Item = &'a paxora::models::Course>) -> Vec<&'a str> {
    courses.into_iter().map(|c| c.id.as_str()).collect()
}
