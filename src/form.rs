//! Project Form Model
//!
//! Controlled form state for create/edit and its client-side validation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Proyecto, ProyectoPayload};
use crate::status::Estado;

pub const NOMBRE_MIN_CHARS: usize = 3;
pub const DESCRIPCION_MIN_CHARS: usize = 10;

/// Fields that can carry an inline error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Nombre,
    Descripcion,
    Estado,
    FechaInicio,
    FechaFin,
}

/// Inline validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub nombre: String,
    pub descripcion: String,
    /// `None` when a loaded record carries a code outside the known states
    pub estado: Option<Estado>,
    /// `YYYY-MM-DD`, empty when unset
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            descripcion: String::new(),
            estado: Some(Estado::default()),
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
        }
    }
}

impl ProjectForm {
    /// Pre-fill from a fetched record (editing mode)
    pub fn from_proyecto(p: &Proyecto) -> Self {
        let estado = Estado::from_code(p.estado);
        if estado.is_none() {
            log::warn!("[FORM] Project {} has unknown estado {}", p.id, p.estado);
        }
        Self {
            nombre: p.nombre.clone(),
            descripcion: p.descripcion.clone(),
            estado,
            fecha_inicio: p.fecha_inicio_dia().unwrap_or_default().to_string(),
            fecha_fin: p.fecha_fin_dia().unwrap_or_default().to_string(),
        }
    }

    /// Update a text field by name
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Nombre => self.nombre = value,
            FormField::Descripcion => self.descripcion = value,
            FormField::FechaInicio => self.fecha_inicio = value,
            FormField::FechaFin => self.fecha_fin = value,
            FormField::Estado => {
                if let Some(estado) = value.parse().ok().and_then(Estado::from_code) {
                    self.estado = Some(estado);
                }
            }
        }
    }

    pub fn descripcion_chars(&self) -> usize {
        self.descripcion.chars().count()
    }

    /// Check every field and build the request body, or report what is wrong.
    pub fn validate(&self) -> Result<ProyectoPayload, FormErrors> {
        let mut errors = FormErrors::default();

        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            errors.insert(FormField::Nombre, "El nombre es obligatorio");
        } else if nombre.chars().count() < NOMBRE_MIN_CHARS {
            errors.insert(FormField::Nombre, "El nombre debe tener al menos 3 caracteres");
        }

        let descripcion = self.descripcion.trim();
        if descripcion.is_empty() {
            errors.insert(FormField::Descripcion, "La descripción es obligatoria");
        } else if descripcion.chars().count() < DESCRIPCION_MIN_CHARS {
            errors.insert(FormField::Descripcion, "La descripción debe tener al menos 10 caracteres");
        }

        if self.estado.is_none() {
            errors.insert(FormField::Estado, "Selecciona un estado válido");
        }

        let fecha_inicio = parse_date(&self.fecha_inicio, FormField::FechaInicio, &mut errors);
        let fecha_fin = parse_date(&self.fecha_fin, FormField::FechaFin, &mut errors);
        if let (Some(inicio), Some(fin)) = (fecha_inicio, fecha_fin) {
            if fin < inicio {
                errors.insert(
                    FormField::FechaFin,
                    "La fecha de fin no puede ser anterior a la fecha de inicio",
                );
            }
        }

        let estado = match self.estado {
            Some(estado) if errors.is_empty() => estado,
            _ => return Err(errors),
        };

        Ok(ProyectoPayload {
            nombre: nombre.to_string(),
            descripcion: descripcion.to_string(),
            estado: estado.code(),
            fecha_inicio,
            fecha_fin,
        })
    }
}

fn parse_date(value: &str, field: FormField, errors: &mut FormErrors) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, "Fecha no válida");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProyectoId;

    fn valid_form() -> ProjectForm {
        ProjectForm {
            nombre: "  Portal web ".to_string(),
            descripcion: "Rediseño completo del portal".to_string(),
            estado: Some(Estado::EnProgreso),
            fecha_inicio: "2024-02-01".to_string(),
            fecha_fin: "2024-06-30".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_trimmed_payload() {
        let payload = valid_form().validate().unwrap();
        assert_eq!(payload.nombre, "Portal web");
        assert_eq!(payload.estado, 2);
        assert_eq!(payload.fecha_inicio, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(payload.fecha_fin, NaiveDate::from_ymd_opt(2024, 6, 30));
    }

    #[test]
    fn test_required_fields() {
        let errors = ProjectForm::default().validate().unwrap_err();
        assert_eq!(errors.get(FormField::Nombre), Some("El nombre es obligatorio"));
        assert_eq!(errors.get(FormField::Descripcion), Some("La descripción es obligatoria"));
        assert_eq!(errors.get(FormField::FechaFin), None);
    }

    #[test]
    fn test_minimum_lengths() {
        let mut form = valid_form();
        form.nombre = "ab".to_string();
        form.descripcion = "corta".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Nombre), Some("El nombre debe tener al menos 3 caracteres"));
        assert_eq!(
            errors.get(FormField::Descripcion),
            Some("La descripción debe tener al menos 10 caracteres")
        );
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut form = valid_form();
        form.fecha_fin = "2024-01-01".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FormField::FechaFin).is_some());

        // same day is fine
        form.fecha_fin = form.fecha_inicio.clone();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_dates_are_optional() {
        let mut form = valid_form();
        form.fecha_inicio.clear();
        form.fecha_fin.clear();
        let payload = form.validate().unwrap();
        assert_eq!(payload.fecha_inicio, None);
        assert_eq!(payload.fecha_fin, None);
    }

    #[test]
    fn test_bad_date_reported_on_field() {
        let mut form = valid_form();
        form.fecha_inicio = "31/12/2024".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::FechaInicio), Some("Fecha no válida"));
    }

    #[test]
    fn test_from_proyecto_uses_date_part() {
        let p = Proyecto {
            id: ProyectoId::from(4),
            nombre: "CRM".to_string(),
            descripcion: "Migración del CRM".to_string(),
            estado: 3,
            fecha_inicio: Some("2023-10-05T00:00:00.000Z".to_string()),
            fecha_fin: None,
        };
        let form = ProjectForm::from_proyecto(&p);
        assert_eq!(form.estado, Some(Estado::Completado));
        assert_eq!(form.fecha_inicio, "2023-10-05");
        assert_eq!(form.fecha_fin, "");
    }

    #[test]
    fn test_set_and_clear_error() {
        let mut form = ProjectForm::default();
        form.set(FormField::Estado, "3".to_string());
        assert_eq!(form.estado, Some(Estado::Completado));
        form.set(FormField::Estado, "9".to_string());
        assert_eq!(form.estado, Some(Estado::Completado));

        let mut errors = form.validate().unwrap_err();
        errors.clear(FormField::Nombre);
        assert_eq!(errors.get(FormField::Nombre), None);
    }

    #[test]
    fn test_unknown_estado_must_be_picked_before_saving() {
        let p = Proyecto {
            id: ProyectoId::from(9),
            nombre: "Intranet".to_string(),
            descripcion: "Portal interno de empleados".to_string(),
            estado: 7,
            fecha_inicio: None,
            fecha_fin: None,
        };
        let mut form = ProjectForm::from_proyecto(&p);
        assert_eq!(form.estado, None);

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Estado), Some("Selecciona un estado válido"));

        form.set(FormField::Estado, "2".to_string());
        assert_eq!(form.validate().unwrap().estado, 2);
    }

    #[test]
    fn test_new_form_starts_pending() {
        assert_eq!(ProjectForm::default().estado, Some(Estado::Pendiente));
    }
}
