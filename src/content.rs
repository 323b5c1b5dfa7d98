//! Static page content.

pub struct NavLink {
    pub href: &'static str,
    pub text: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub featured: bool,
}

pub struct ContactMethod {
    pub title: &'static str,
    pub description: String,
    pub href: String,
}

pub const HEADLINE: &str = "Desarrollador Java Certificado.";
pub const TAGLINE: &str = "Creando soluciones eficientes y escalables.";

pub const ABOUT: &[&str] = &[
    "Soy desarrollador Java certificado con experiencia en el diseño y construcción de aplicaciones empresariales robustas.",
    "Me especializo en Spring Boot, arquitecturas de microservicios y en llevar soluciones a producción con buenas prácticas de calidad.",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Desarrollo Java",
        description: "Especializado en Java SE y frameworks modernos",
    },
    Feature {
        title: "Trabajo en Equipo",
        description: "Experiencia colaborativa en metodologías ágiles",
    },
    Feature {
        title: "Orientado a Resultados",
        description: "Enfoque en soluciones eficientes y escalables",
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Lenguajes",
        skills: &["Java", "C#", "JavaScript", "TypeScript", "HTML/CSS", "SQL"],
    },
    SkillCategory {
        name: "Frameworks y Librerías",
        skills: &[
            "Spring Boot",
            "React",
            "Next.js",
            "JPA/Hibernate",
            "Jakarta EE",
            "Bootstrap",
            "Tailwind CSS",
            "jQuery",
            "Backbone.js",
        ],
    },
    SkillCategory {
        name: "Bases de Datos",
        skills: &["MySQL", "Oracle", "DB2", "MongoDB", "PostgreSQL"],
    },
    SkillCategory {
        name: "Herramientas y DevOps",
        skills: &[
            "Docker",
            "Maven",
            "Git/GitHub",
            "Jenkins",
            "CI/CD",
            "JUnit",
            "Postman",
            "Swagger",
            "SonarQube",
            "WebLogic",
        ],
    },
    SkillCategory {
        name: "Servicios y APIs",
        skills: &[
            "REST API",
            "GraphQL",
            "Microservicios",
            "WebServices",
            "RESTful Services",
        ],
    },
    SkillCategory {
        name: "Metodologías",
        skills: &[
            "Agile",
            "Scrum",
            "DevOps",
            "Test-Driven Development",
            "Object-Oriented Programming",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Sistema de Gestión de Fincas",
        description: "Plataforma integral para la administración de fincas, automatizando la facturación, gestión de incidencias y comunicación con propietarios. Desarrollado con Spring Boot y arquitectura de microservicios.",
        tags: &["Java", "Spring Boot", "Microservicios", "React"],
        github: "#",
        live: "#",
        featured: true,
    },
    Project {
        title: "E-commerce de Moda",
        description: "Tienda online de alto rendimiento con pasarela de pago segura, sistema de recomendaciones personalizadas y un panel de administración para gestionar el catálogo y los pedidos. Implementado con Jakarta EE y JPA/Hibernate.",
        tags: &["Jakarta EE", "JPA", "MySQL", "JavaScript"],
        github: "#",
        live: "#",
        featured: true,
    },
    Project {
        title: "API para App de Smart Home",
        description: "Backend RESTful para una aplicación móvil que controla dispositivos inteligentes en el hogar. La API gestiona la autenticación, la comunicación en tiempo real con los dispositivos y la persistencia de datos en MongoDB.",
        tags: &["REST API", "MongoDB", "Docker", "JWT"],
        github: "#",
        live: "#",
        featured: false,
    },
];

pub const CONTACT_INFO: &[&str] = &[
    "Disponible para proyectos",
    "Respuesta rápida",
];

/// Header entries; the projects entry only exists behind the feature flag.
pub fn nav_links(show_projects: bool) -> Vec<NavLink> {
    let mut links = vec![NavLink {
        href: "/#habilidades",
        text: "Habilidades",
    }];

    if show_projects {
        links.push(NavLink {
            href: "/projects",
            text: "Proyectos",
        });
    }

    links.push(NavLink {
        href: "/#contact",
        text: "Contacto",
    });

    links
}

pub fn contact_methods(site: &crate::config::SiteConfig) -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            title: "Email",
            description: site.email.to_owned(),
            href: format!("mailto:{}", site.email),
        },
        ContactMethod {
            title: "LinkedIn",
            description: "Conectemos profesionalmente".to_owned(),
            href: site.linkedin.to_owned(),
        },
        ContactMethod {
            title: "GitHub",
            description: "Ve mi código en acción".to_owned(),
            href: site.github.to_owned(),
        },
    ]
}
