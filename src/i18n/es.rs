pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        // Navigation
        "nav.courses" => "Cursos",
        "nav.dashboard" => "Panel",
        "nav.login" => "Iniciar Sesión",
        "nav.signup" => "Registrarse",
        "nav.logout" => "Cerrar Sesión",
        "nav.instructor" => "Instructor",
        // Landing page
        "landing.hero.title" => "Aprende Todo, En Cualquier Lugar",
        "landing.hero.subtitle" => "Domina nuevas habilidades con instructores expertos en tu idioma preferido",
        "landing.hero.cta" => "Comenzar a Aprender",
        "landing.features.title" => "¿Por Qué Elegir Nuestra Plataforma?",
        "landing.features.anywhere" => "Aprende En Cualquier Lugar",
        "landing.features.anywhere.desc" => "Accede a cursos en cualquier dispositivo, en cualquier momento",
        "landing.features.language" => "En Tu Idioma",
        "landing.features.language.desc" => "Contenido disponible en múltiples idiomas",
        "landing.features.expert" => "Instructores Expertos",
        "landing.features.expert.desc" => "Aprende de profesionales de la industria",
        "landing.featured" => "Cursos Populares",
        // Auth
        "auth.name" => "Nombre Completo",
        "auth.email" => "Correo Electrónico",
        "auth.password" => "Contraseña",
        "auth.login" => "Iniciar Sesión",
        "auth.signup" => "Registrarse",
        "auth.signin.title" => "Bienvenido de Vuelta",
        "auth.signin.subtitle" => "Inicia sesión para continuar tu viaje de aprendizaje",
        "auth.signup.title" => "Únete a Nuestra Plataforma",
        "auth.signup.subtitle" => "Comienza tu aventura de aprendizaje hoy",
        "auth.google" => "Continuar con Google",
        "auth.facebook" => "Continuar con Facebook",
        "auth.or" => "o",
        "auth.no_account" => "¿No tienes una cuenta?",
        "auth.have_account" => "¿Ya tienes una cuenta?",
        // Dashboard
        "dashboard.welcome" => "¡Bienvenido de vuelta!",
        "dashboard.subtitle" => "Continúa tu aprendizaje y explora nuevos cursos",
        "dashboard.continue" => "Continuar Viendo",
        "dashboard.recommended" => "Recomendado para Ti",
        "dashboard.mycourses" => "Mis Cursos",
        "dashboard.progress" => "Progreso",
        "dashboard.empty" => "Ningún curso coincide con tu búsqueda",
        // Course
        "course.start" => "Comenzar Curso",
        "course.continue" => "Continuar",
        "course.lessons" => "Lecciones",
        "course.instructor" => "Instructor",
        "course.duration" => "Duración",
        "course.students" => "Estudiantes",
        // Lesson
        "lesson.completed" => "Marcar como Completado",
        "lesson.next" => "Siguiente Lección",
        "lesson.transcript" => "Transcripción",
        "lesson.resources" => "Recursos",
        "lesson.back" => "Volver al Curso",
        // Instructor
        "instructor.dashboard" => "Panel de Instructor",
        "instructor.upload" => "Subir Nuevo Curso",
        "instructor.title" => "Título del Curso",
        "instructor.description" => "Descripción",
        "instructor.category" => "Categoría",
        "instructor.level" => "Nivel",
        "instructor.price" => "Precio ($)",
        "instructor.video" => "Subir Video",
        "instructor.save" => "Guardar Curso",
        "instructor.cancel" => "Cancelar",
        "instructor.mycourses" => "Mis Cursos",
        // Common
        "common.search" => "Buscar cursos...",
        "common.filter" => "Filtrar",
        "common.all" => "Todos los niveles",
        "common.view_all" => "Ver Todo",
        "common.loading" => "Cargando...",
        "common.error" => "Algo salió mal",
        "footer.tagline" => "Aprende todo, en cualquier lugar, en tu idioma.",
        _ => return None,
    };
    Some(text)
}
