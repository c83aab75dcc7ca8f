//! Project Status
//!
//! Maps the backend's integer `estado` to labels, badge classes and chart colors.

use std::borrow::Cow;

/// Known project states (wire value in parentheses)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Estado {
    /// 1
    #[default]
    Pendiente,
    /// 2
    EnProgreso,
    /// 3
    Completado,
}

impl Estado {
    pub const ALL: [Estado; 3] = [Estado::Pendiente, Estado::EnProgreso, Estado::Completado];

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Estado::Pendiente),
            2 => Some(Estado::EnProgreso),
            3 => Some(Estado::Completado),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Estado::Pendiente => 1,
            Estado::EnProgreso => 2,
            Estado::Completado => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Estado::Pendiente => "Pendiente",
            Estado::EnProgreso => "En Progreso",
            Estado::Completado => "Completado",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Estado::Pendiente => "badge badge-pendiente",
            Estado::EnProgreso => "badge badge-progreso",
            Estado::Completado => "badge badge-completado",
        }
    }

    /// Bar fill used by the status chart
    pub fn color(self) -> &'static str {
        match self {
            Estado::Pendiente => "#FCD34D",
            Estado::EnProgreso => "#60A5FA",
            Estado::Completado => "#34D399",
        }
    }
}

pub const UNKNOWN_BADGE_CLASS: &str = "badge badge-desconocido";
pub const UNKNOWN_COLOR: &str = "#6366F1";

/// Label and style class for a status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: Cow<'static, str>,
    pub class: &'static str,
}

/// Unrecognized codes get a generic label carrying the raw value.
pub fn status_badge(code: i32) -> StatusBadge {
    match Estado::from_code(code) {
        Some(estado) => StatusBadge {
            label: Cow::Borrowed(estado.label()),
            class: estado.badge_class(),
        },
        None => StatusBadge {
            label: Cow::Owned(format!("Estado {}", code)),
            class: UNKNOWN_BADGE_CLASS,
        },
    }
}

pub fn status_color(code: i32) -> &'static str {
    Estado::from_code(code).map_or(UNKNOWN_COLOR, Estado::color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(status_badge(1).label, "Pendiente");
        assert_eq!(status_badge(2).label, "En Progreso");
        assert_eq!(status_badge(3).label, "Completado");
        assert_eq!(status_badge(2).class, "badge badge-progreso");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let badge = status_badge(99);
        assert!(badge.label.contains("99"));
        assert_eq!(badge.class, UNKNOWN_BADGE_CLASS);
        assert_eq!(status_color(99), UNKNOWN_COLOR);
    }

    #[test]
    fn test_code_round_trip() {
        for estado in Estado::ALL {
            assert_eq!(Estado::from_code(estado.code()), Some(estado));
        }
        assert_eq!(Estado::from_code(0), None);
    }
}
