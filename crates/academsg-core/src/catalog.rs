//! Fixed catalog data: message categories, rosters and templates.
//!
//! Everything here is process-wide constant configuration. Templates use the
//! tokens `{curso}`, `{hora}` and `{fecha}` (see [`crate::template`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Professor roster.
pub const PROFESSORS: &[&str] = &[
    "Julio Yarasca",
    "Jorge Gonzalez Reaño",
    "Carlos Williams",
    "Geraldo Colchado",
    "Violeta Reaño",
];

/// Course roster.
pub const COURSES: &[&str] = &[
    "Compiladores",
    "Arquitectura de Computadoras",
    "Sistemas Operativos",
    "Cloud Computing",
    "Base de Datos 1",
    "Programación 3",
    "DBP",
];

const WHATSAPP_TEMPLATES: &[&str] = &[
    "¿Viste el grupo de WhatsApp de {curso}?",
    "Recordatorio: tenemos clase de {curso} en 10 minutos.",
    "Te mando el material de {curso} por WhatsApp.",
];

const CORREO_TEMPLATES: &[&str] = &[
    "Adjunto el informe de {curso}.",
    "Buenas tardes, tengo dudas sobre la práctica de {curso}.",
    "Por favor, revisa el correo con la calificación de {curso}.",
];

const ZOOM_TEMPLATES: &[&str] = &[
    "Invitación Zoom para la sesión de {curso} a las {hora}.",
    "Reunión de Zoom de {curso} programada mañana.",
    "Aquí está el link de Zoom para {curso}.",
];

const TAREA_TEMPLATES: &[&str] = &[
    "Tarea pendiente de {curso}: ejercicios 1 al 5.",
    "No olvides entregar la tarea de {curso} antes del viernes.",
    "La práctica de {curso} está pendiente en la plataforma.",
];

const DEADLINE_TEMPLATES: &[&str] = &[
    "Deadline del proyecto de {curso} para MAÑANA.",
    "Recuerda que el proyecto de {curso} vence el {fecha}.",
    "Último aviso: entrega del proyecto de {curso} pasado mañana.",
];

/// Kind of academic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Chat reminder
    Whatsapp,
    /// Email
    Correo,
    /// Video-call invite
    Zoom,
    /// Homework notice
    Tarea,
    /// Deadline alert
    Deadline,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Whatsapp,
        Category::Correo,
        Category::Zoom,
        Category::Tarea,
        Category::Deadline,
    ];

    /// Name used in file names, JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Whatsapp => "whatsapp",
            Category::Correo => "correo",
            Category::Zoom => "zoom",
            Category::Tarea => "tarea",
            Category::Deadline => "deadline",
        }
    }

    /// Template list for this category.
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Category::Whatsapp => WHATSAPP_TEMPLATES,
            Category::Correo => CORREO_TEMPLATES,
            Category::Zoom => ZOOM_TEMPLATES,
            Category::Tarea => TAREA_TEMPLATES,
            Category::Deadline => DEADLINE_TEMPLATES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_three_templates() {
        for category in Category::ALL {
            assert_eq!(category.templates().len(), 3, "{category}");
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("correo".parse::<Category>().unwrap(), Category::Correo);
        assert_eq!("ZOOM".parse::<Category>().unwrap(), Category::Zoom);
        assert_eq!(" Tarea ".parse::<Category>().unwrap(), Category::Tarea);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "sms".parse::<Category>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(ref s) if s == "sms"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Deadline).unwrap();
        assert_eq!(json, "\"deadline\"");
        let parsed: Category = serde_json::from_str("\"whatsapp\"").unwrap();
        assert_eq!(parsed, Category::Whatsapp);
    }

    #[test]
    fn display_matches_as_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn templates_only_use_known_tokens() {
        for category in Category::ALL {
            for template in category.templates() {
                let stripped = template
                    .replace("{curso}", "")
                    .replace("{hora}", "")
                    .replace("{fecha}", "");
                assert!(!stripped.contains('{'), "stray token in {template}");
                assert!(template.contains("{curso}"), "{template}");
            }
        }
    }
}
