pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        // Navigation
        "nav.courses" => "Cours",
        "nav.dashboard" => "Tableau de bord",
        "nav.login" => "Connexion",
        "nav.signup" => "S'inscrire",
        "nav.logout" => "Déconnexion",
        "nav.instructor" => "Instructeur",
        // Landing page
        "landing.hero.title" => "Apprenez Tout, Partout",
        "landing.hero.subtitle" => "Maîtrisez de nouvelles compétences avec des instructeurs experts dans votre langue préférée",
        "landing.hero.cta" => "Commencer à Apprendre",
        "landing.features.title" => "Pourquoi Choisir Notre Plateforme?",
        "landing.features.anywhere" => "Apprenez Partout",
        "landing.features.anywhere.desc" => "Accédez aux cours sur n'importe quel appareil, à tout moment",
        "landing.features.language" => "Dans Votre Langue",
        "landing.features.language.desc" => "Contenu disponible en plusieurs langues",
        "landing.features.expert" => "Instructeurs Experts",
        "landing.features.expert.desc" => "Apprenez auprès de professionnels de l'industrie",
        "landing.featured" => "Cours Populaires",
        // Auth
        "auth.name" => "Nom Complet",
        "auth.email" => "Email",
        "auth.password" => "Mot de passe",
        "auth.login" => "Connexion",
        "auth.signup" => "S'inscrire",
        "auth.signin.title" => "Bon Retour",
        "auth.signin.subtitle" => "Connectez-vous pour continuer votre parcours d'apprentissage",
        "auth.signup.title" => "Rejoignez Notre Plateforme",
        "auth.signup.subtitle" => "Commencez votre aventure d'apprentissage aujourd'hui",
        "auth.google" => "Continuer avec Google",
        "auth.facebook" => "Continuer avec Facebook",
        "auth.or" => "ou",
        "auth.no_account" => "Pas encore de compte?",
        "auth.have_account" => "Vous avez déjà un compte?",
        // Dashboard
        "dashboard.welcome" => "Bon retour!",
        "dashboard.subtitle" => "Poursuivez votre apprentissage et découvrez de nouveaux cours",
        "dashboard.continue" => "Continuer à Regarder",
        "dashboard.recommended" => "Recommandé pour Vous",
        "dashboard.mycourses" => "Mes Cours",
        "dashboard.progress" => "Progrès",
        "dashboard.empty" => "Aucun cours ne correspond à votre recherche",
        // Course
        "course.start" => "Commencer le Cours",
        "course.continue" => "Continuer",
        "course.lessons" => "Leçons",
        "course.instructor" => "Instructeur",
        "course.duration" => "Durée",
        "course.students" => "Étudiants",
        // Lesson
        "lesson.completed" => "Marquer comme Terminé",
        "lesson.next" => "Leçon Suivante",
        "lesson.transcript" => "Transcription",
        "lesson.resources" => "Ressources",
        "lesson.back" => "Retour au Cours",
        // Instructor
        "instructor.dashboard" => "Tableau de Bord Instructeur",
        "instructor.upload" => "Télécharger un Nouveau Cours",
        "instructor.title" => "Titre du Cours",
        "instructor.description" => "Description",
        "instructor.category" => "Catégorie",
        "instructor.level" => "Niveau",
        "instructor.price" => "Prix ($)",
        "instructor.video" => "Télécharger une Vidéo",
        "instructor.save" => "Sauvegarder le Cours",
        "instructor.cancel" => "Annuler",
        "instructor.mycourses" => "Mes Cours",
        // Common
        "common.search" => "Rechercher des cours...",
        "common.filter" => "Filtrer",
        "common.all" => "Tous niveaux",
        "common.view_all" => "Tout Voir",
        "common.loading" => "Chargement...",
        "common.error" => "Quelque chose s'est mal passé",
        "footer.tagline" => "Apprenez tout, partout, dans votre langue.",
        _ => return None,
    };
    Some(text)
}
