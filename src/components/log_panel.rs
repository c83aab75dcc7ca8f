//! Log Panel Component
//!
//! Collapsible footer showing the latest lines kept by the rolling logger.

use leptos::prelude::*;

/// Lines shown when the panel is opened or refreshed
pub const LOG_PANEL_LINES: usize = 50;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(rolling_logger::recent_lines(LOG_PANEL_LINES));

    let toggle = move |_| {
        let now_open = !open.get();
        if now_open {
            refresh();
        }
        set_open.set(now_open);
    };

    view! {
        <footer class="log-panel">
            <button class="log-panel-toggle" on:click=toggle>
                {move || if open.get() { "Ocultar registro" } else { "Ver registro" }}
            </button>
            <Show when=move || open.get()>
                <button class="log-panel-refresh" on:click=move |_| refresh()>
                    "Actualizar"
                </button>
                <Show
                    when=move || lines.with(|l| !l.is_empty())
                    fallback=|| view! { <p class="log-panel-empty">"Sin registros"</p> }
                >
                    <pre class="log-panel-lines">{move || lines.get().join("\n")}</pre>
                </Show>
            </Show>
        </footer>
    }
}
