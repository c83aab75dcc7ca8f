//! Status Chart Model
//!
//! Turns `/proyectos/graficos` counts into bars and summary totals.

use std::borrow::Cow;

use crate::models::StatusCount;
use crate::status::{status_badge, status_color, Estado};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub estado: i32,
    pub label: Cow<'static, str>,
    pub cantidad: u32,
    pub color: &'static str,
    /// Height relative to the tallest bar, 0..=100
    pub height_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub bars: Vec<ChartBar>,
    pub total: u32,
    pub pendientes: u32,
    pub en_progreso: u32,
    pub completados: u32,
}

impl ChartData {
    pub fn from_counts(counts: &[StatusCount]) -> Self {
        let max = counts.iter().map(|c| c.cantidad).max().unwrap_or(0);
        let bars = counts
            .iter()
            .map(|c| ChartBar {
                estado: c.estado,
                label: status_badge(c.estado).label,
                cantidad: c.cantidad,
                color: status_color(c.estado),
                height_pct: if max == 0 { 0.0 } else { f64::from(c.cantidad) * 100.0 / f64::from(max) },
            })
            .collect();

        let count_of = |estado: Estado| {
            counts
                .iter()
                .filter(|c| c.estado == estado.code())
                .map(|c| c.cantidad)
                .sum::<u32>()
        };

        Self {
            bars,
            total: counts.iter().map(|c| c.cantidad).sum(),
            pendientes: count_of(Estado::Pendiente),
            en_progreso: count_of(Estado::EnProgreso),
            completados: count_of(Estado::Completado),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest count, used for the y-axis top
    pub fn max(&self) -> u32 {
        self.bars.iter().map(|b| b.cantidad).max().unwrap_or(0)
    }
}
