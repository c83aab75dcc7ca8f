//! Status Chart Component
//!
//! Bar chart of project counts per status, drawn with plain elements.

use leptos::prelude::*;

use crate::chart::{ChartBar, ChartData};

fn bar_view(bar: ChartBar) -> impl IntoView {
    let style = format!("height: {:.1}%; background-color: {};", bar.height_pct, bar.color);
    let tooltip = format!("{}: {}", bar.label, bar.cantidad);
    view! {
        <div class="chart-column" title=tooltip>
            <span class="chart-value">{bar.cantidad}</span>
            <div class="chart-track">
                <div class="chart-bar" style=style></div>
            </div>
            <span class="chart-label">{bar.label.into_owned()}</span>
        </div>
    }
}

#[component]
pub fn StatusChart(
    #[prop(into)] chart: Signal<ChartData>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <section class="chart-card">
            <h2>"Distribución por Estado"</h2>
            {move || {
                if loading.get() {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p>"Cargando gráfico..."</p>
                        </div>
                    }.into_any()
                } else if chart.with(ChartData::is_empty) {
                    view! {
                        <div class="empty-state">
                            <p>"No hay datos disponibles para mostrar"</p>
                        </div>
                    }.into_any()
                } else {
                    let data = chart.get();
                    view! {
                        <div class="chart">
                            <div class="chart-axis">
                                <span>{data.max()}</span>
                                <span>"0"</span>
                            </div>
                            <div class="chart-bars">
                                {data.bars.into_iter().map(bar_view).collect_view()}
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}
