pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        // Navigation
        "nav.courses" => "Courses",
        "nav.dashboard" => "Dashboard",
        "nav.login" => "Login",
        "nav.signup" => "Sign Up",
        "nav.logout" => "Logout",
        "nav.instructor" => "Instructor",
        // Landing page
        "landing.hero.title" => "Learn Anything, Anywhere",
        "landing.hero.subtitle" => "Master new skills with expert instructors in your preferred language",
        "landing.hero.cta" => "Start Learning",
        "landing.features.title" => "Why Choose Our Platform?",
        "landing.features.anywhere" => "Learn Anywhere",
        "landing.features.anywhere.desc" => "Access courses on any device, anytime",
        "landing.features.language" => "In Your Language",
        "landing.features.language.desc" => "Content available in multiple languages",
        "landing.features.expert" => "Expert Instructors",
        "landing.features.expert.desc" => "Learn from industry professionals",
        "landing.featured" => "Popular Courses",
        // Auth
        "auth.name" => "Full Name",
        "auth.email" => "Email",
        "auth.password" => "Password",
        "auth.login" => "Login",
        "auth.signup" => "Sign Up",
        "auth.signin.title" => "Welcome Back",
        "auth.signin.subtitle" => "Sign in to continue your learning journey",
        "auth.signup.title" => "Join Our Platform",
        "auth.signup.subtitle" => "Start your learning adventure today",
        "auth.google" => "Continue with Google",
        "auth.facebook" => "Continue with Facebook",
        "auth.or" => "or",
        "auth.no_account" => "Don't have an account?",
        "auth.have_account" => "Already have an account?",
        // Dashboard
        "dashboard.welcome" => "Welcome back!",
        "dashboard.subtitle" => "Continue your learning journey and explore new courses",
        "dashboard.continue" => "Continue Watching",
        "dashboard.recommended" => "Recommended for You",
        "dashboard.mycourses" => "My Courses",
        "dashboard.progress" => "Progress",
        "dashboard.empty" => "No courses match your search",
        // Course
        "course.start" => "Start Course",
        "course.continue" => "Continue",
        "course.lessons" => "Lessons",
        "course.instructor" => "Instructor",
        "course.duration" => "Duration",
        "course.students" => "Students",
        // Lesson
        "lesson.completed" => "Mark as Completed",
        "lesson.next" => "Next Lesson",
        "lesson.transcript" => "Transcript",
        "lesson.resources" => "Resources",
        "lesson.back" => "Back to Course",
        // Instructor
        "instructor.dashboard" => "Instructor Dashboard",
        "instructor.upload" => "Upload New Course",
        "instructor.title" => "Course Title",
        "instructor.description" => "Description",
        "instructor.category" => "Category",
        "instructor.level" => "Level",
        "instructor.price" => "Price ($)",
        "instructor.video" => "Upload Video",
        "instructor.save" => "Save Course",
        "instructor.cancel" => "Cancel",
        "instructor.mycourses" => "My Courses",
        // Common
        "common.search" => "Search courses...",
        "common.filter" => "Filter",
        "common.all" => "All levels",
        "common.view_all" => "View All",
        "common.loading" => "Loading...",
        "common.error" => "Something went wrong",
        "footer.tagline" => "Learn anything, anywhere, in your language.",
        _ => return None,
    };
    Some(text)
}
