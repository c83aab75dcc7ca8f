//! Charts Page
//!
//! Summary cards, the status chart and the AI analysis panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::chart::ChartData;
use crate::components::{AiSummaryPanel, StatusChart};
use crate::store::{notify_error, use_app_store};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();

    let chart = RwSignal::new(ChartData::default());
    let (loading, set_loading) = signal(true);

    // Load counts on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_status_counts().await {
                Ok(counts) => {
                    log::info!("[CHART] Loaded {} status rows", counts.len());
                    chart.set(ChartData::from_counts(&counts));
                }
                Err(err) => {
                    log::error!("[CHART] Failed to load status counts: {}", err);
                    notify_error(&store, "Error al cargar los datos del gráfico");
                }
            }
            set_loading.set(false);
        });
    });

    let card = move |title: &'static str, class: &'static str, value: fn(&ChartData) -> u32| {
        view! {
            <div class=class>
                <p class="card-title">{title}</p>
                <p class="card-value">{move || chart.with(value)}</p>
            </div>
        }
    };

    view! {
        <div class="dashboard">
            <div class="page-header">
                <h1>"Dashboard de Análisis"</h1>
                <p>"Visualiza el estado de tus proyectos y obtén insights con IA"</p>
            </div>

            <div class="summary-cards">
                {card("Total Proyectos", "card card-total", |d| d.total)}
                {card("Pendientes", "card card-pendiente", |d| d.pendientes)}
                {card("En Progreso", "card card-progreso", |d| d.en_progreso)}
                {card("Completados", "card card-completado", |d| d.completados)}
            </div>

            <StatusChart chart=chart loading=loading />

            <AiSummaryPanel />
        </div>
    }
}
