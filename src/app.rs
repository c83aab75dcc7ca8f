//! Gestor de Proyectos Frontend App
//!
//! Page shell: navbar, the active page, the log footer and the toast layer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::{AppContext, Page};
use crate::store::AppState;
use crate::components::{DashboardPage, LogPanel, Navbar, ProjectFormPage, ProjectListPage, Toaster};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Inicio);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page)));
    provide_context(Store::new(AppState::new()));

    view! {
        <div class="app-layout">
            <Navbar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Inicio => view! { <ProjectListPage /> }.into_any(),
                    Page::Formulario(id) => view! { <ProjectFormPage id=id /> }.into_any(),
                    Page::Graficos => view! { <DashboardPage /> }.into_any(),
                }}
            </main>

            <LogPanel />
            <Toaster />
        </div>
    }
}
