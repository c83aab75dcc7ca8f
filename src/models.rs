//! Frontend Models
//!
//! Data structures matching the backend's project resources.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque project identifier assigned by the backend.
///
/// The backend may send it as a JSON number or a string; it is kept as text
/// and only ever echoed back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProyectoId(String);

impl ProyectoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProyectoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for ProyectoId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProyectoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Float(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Project record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proyecto {
    pub id: ProyectoId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub estado: i32,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
}

impl Proyecto {
    /// Start date as `YYYY-MM-DD`, if any
    pub fn fecha_inicio_dia(&self) -> Option<&str> {
        self.fecha_inicio.as_deref().map(date_part).filter(|d| !d.is_empty())
    }

    /// End date as `YYYY-MM-DD`, if any
    pub fn fecha_fin_dia(&self) -> Option<&str> {
        self.fecha_fin.as_deref().map(date_part).filter(|d| !d.is_empty())
    }
}

/// Keep only the date portion of an ISO date-time string.
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or_default().trim()
}

/// Body sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProyectoPayload {
    pub nombre: String,
    pub descripcion: String,
    pub estado: i32,
    pub fecha_inicio: Option<chrono::NaiveDate>,
    pub fecha_fin: Option<chrono::NaiveDate>,
}

/// `GET /proyectos` has been seen both as a bare array and wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProyectosResponse {
    List(Vec<Proyecto>),
    Wrapped { proyectos: Vec<Proyecto> },
}

impl ProyectosResponse {
    pub fn into_vec(self) -> Vec<Proyecto> {
        match self {
            ProyectosResponse::List(items) => items,
            ProyectosResponse::Wrapped { proyectos } => proyectos,
        }
    }
}

/// One row of the status histogram
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusCount {
    pub estado: i32,
    #[serde(deserialize_with = "deserialize_count")]
    pub cantidad: u32,
}

/// SQL `COUNT` columns often arrive as strings.
fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(u64),
        Float(f64),
        Text(String),
    }

    Ok(match RawCount::deserialize(deserializer)? {
        RawCount::Int(n) => u32::try_from(n).unwrap_or(u32::MAX),
        RawCount::Float(n) if n.is_finite() && n > 0.0 => n as u32,
        RawCount::Float(_) => 0,
        RawCount::Text(s) => leading_integer(&s),
    })
}

/// Parse leading decimal digits, ignoring the rest (`"12abc"` -> 12).
fn leading_integer(s: &str) -> u32 {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// AI analysis response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiSummary {
    #[serde(default)]
    pub resume: Option<String>,
}

pub const SUMMARY_FALLBACK: &str = "No se pudo generar el análisis.";

impl AiSummary {
    /// Text to reveal, falling back to a placeholder when the backend sent nothing
    pub fn text_or_fallback(&self) -> String {
        match self.resume.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => SUMMARY_FALLBACK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proyecto_accepts_numeric_and_text_ids() {
        let numeric: Proyecto = serde_json::from_str(
            r#"{"id": 7, "nombre": "Web", "descripcion": "Sitio corporativo", "estado": 2}"#,
        )
        .unwrap();
        assert_eq!(numeric.id.as_str(), "7");
        assert_eq!(numeric.fecha_inicio, None);

        let text: Proyecto = serde_json::from_str(
            r#"{"id": "a1b2", "nombre": "Web", "descripcion": "x", "estado": 1,
                "fechaInicio": "2024-03-01T00:00:00.000Z", "fechaFin": null}"#,
        )
        .unwrap();
        assert_eq!(text.id.as_str(), "a1b2");
        assert_eq!(text.fecha_inicio_dia(), Some("2024-03-01"));
        assert_eq!(text.fecha_fin_dia(), None);
    }

    #[test]
    fn test_list_response_shapes() {
        let bare: ProyectosResponse =
            serde_json::from_str(r#"[{"id": 1, "nombre": "a", "descripcion": "b", "estado": 3}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 1);

        let wrapped: ProyectosResponse =
            serde_json::from_str(r#"{"proyectos": [{"id": 1, "nombre": "a", "descripcion": "b", "estado": 3}]}"#)
                .unwrap();
        assert_eq!(wrapped.into_vec().len(), 1);
    }

    #[test]
    fn test_status_count_parses_string_cantidad() {
        let counts: Vec<StatusCount> = serde_json::from_str(
            r#"[{"estado": 1, "cantidad": "4"}, {"estado": 2, "cantidad": 3}, {"estado": 3, "cantidad": "n/a"}]"#,
        )
        .unwrap();
        assert_eq!(counts[0].cantidad, 4);
        assert_eq!(counts[1].cantidad, 3);
        assert_eq!(counts[2].cantidad, 0);
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = ProyectoPayload {
            nombre: "App".to_string(),
            descripcion: "Aplicación móvil".to_string(),
            estado: 2,
            fecha_inicio: chrono::NaiveDate::from_ymd_opt(2024, 1, 15),
            fecha_fin: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["estado"], 2);
        assert_eq!(json["fechaInicio"], "2024-01-15");
        assert!(json["fechaFin"].is_null());
    }

    #[test]
    fn test_summary_fallback() {
        assert_eq!(AiSummary::default().text_or_fallback(), SUMMARY_FALLBACK);
        let blank = AiSummary { resume: Some("   ".to_string()) };
        assert_eq!(blank.text_or_fallback(), SUMMARY_FALLBACK);
        let real = AiSummary { resume: Some("Todo bien".to_string()) };
        assert_eq!(real.text_or_fallback(), "Todo bien");
    }

    #[test]
    fn test_summary_text_is_kept_verbatim() {
        let text = "\n### Resumen\n*   uno\n\n";
        let summary = AiSummary { resume: Some(text.to_string()) };
        assert_eq!(summary.text_or_fallback(), text);
    }
}
