//! AI Summary Panel
//!
//! Requests the AI analysis and reveals it with the typewriter effect.
//! The panel owns one `Typewriter`; its timer dies with the panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::SummaryView;
use crate::config::config;
use crate::store::{notify_error, use_app_store};
use crate::typewriter::{IntervalScheduler, Typewriter, TypewriterRevealer};

#[component]
pub fn AiSummaryPanel() -> impl IntoView {
    let store = use_app_store();

    let (revealed, set_revealed) = signal(String::new());
    let (revealing, set_revealing) = signal(false);
    let (loading, set_loading) = signal(false);
    let (generated, set_generated) = signal(false);

    let typewriter = StoredValue::new_local(Typewriter::new(
        IntervalScheduler,
        config().reveal_interval_ms,
        move |r: &TypewriterRevealer| {
            set_revealed.set(r.revealed().to_string());
            set_revealing.set(r.is_running());
        },
    ));
    on_cleanup(move || typewriter.update_value(|tw| tw.stop()));

    let has_text = Memo::new(move |_| revealed.with(|t| !t.is_empty()));

    let generate = move |_| {
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        set_generated.set(false);
        typewriter.update_value(|tw| tw.reset());

        spawn_local(async move {
            match api::get_ai_summary().await {
                Ok(summary) => {
                    let text = summary.text_or_fallback();
                    log::info!("[AI] Summary received ({} chars)", text.chars().count());
                    typewriter.update_value(|tw| tw.start(&text));
                    set_generated.set(true);
                }
                Err(err) => {
                    log::error!("[AI] Failed to generate summary: {}", err);
                    notify_error(&store, "Error al generar el análisis IA");
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <section class="ai-card">
            <div class="ai-header">
                <div>
                    <h2>"Análisis con Inteligencia Artificial"</h2>
                    <p>"Obtén un resumen del estado de tus proyectos"</p>
                </div>
                <button class="btn-primary" disabled=move || loading.get() on:click=generate>
                    {move || if loading.get() { "Analizando..." } else { "Generar Análisis" }}
                </button>
            </div>

            <div class="ai-output">
                {move || {
                    if loading.get() {
                        view! {
                            <div class="loading">
                                <div class="spinner"></div>
                                <p>"Procesando análisis con IA, por favor espera..."</p>
                            </div>
                        }.into_any()
                    } else if has_text.get() {
                        view! {
                            <SummaryView text=revealed />
                            <Show when=move || revealing.get()>
                                <span class="caret">"▍"</span>
                            </Show>
                        }.into_any()
                    } else {
                        view! {
                            <p class="ai-placeholder">
                                "Haz clic en \"Generar Análisis\" para obtener un resumen de tus proyectos"
                            </p>
                        }.into_any()
                    }
                }}
            </div>

            <Show when=move || generated.get() && !loading.get() && !revealing.get()>
                <p class="ai-done">"Análisis generado correctamente"</p>
            </Show>
        </section>
    }
}
