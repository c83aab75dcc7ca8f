//! Project List Page
//!
//! Fetches all projects once, then searches and pages through them locally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, EstadoBadge, Pager};
use crate::context::{AppContext, Page};
use crate::list_view::ListViewModel;
use crate::models::{Proyecto, ProyectoId};
use crate::store::{notify_error, notify_success, use_app_store};

/// Project list with search, pagination and row actions
#[component]
pub fn ProjectListPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let vm = RwSignal::new(ListViewModel::new());
    let (loading, set_loading) = signal(true);

    // Load projects on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_proyectos().await {
                Ok(items) => {
                    log::info!("[LIST] Loaded {} projects", items.len());
                    vm.update(|v| v.set_items(items));
                }
                Err(err) => {
                    log::error!("[LIST] Failed to load projects: {}", err);
                    notify_error(&store, "Error al cargar proyectos");
                }
            }
            set_loading.set(false);
        });
    });

    let eliminar = move |id: ProyectoId| {
        spawn_local(async move {
            match api::delete_proyecto(&id).await {
                Ok(()) => {
                    log::info!("[LIST] Deleted project {}", id);
                    vm.update(|v| {
                        v.remove_by_id(&id);
                    });
                    notify_success(&store, "Proyecto eliminado correctamente");
                }
                Err(err) => {
                    log::error!("[LIST] Failed to delete project {}: {}", id, err);
                    notify_error(&store, "No se pudo eliminar el proyecto");
                }
            }
        });
    };

    let nuevo = move |_| ctx.navigate(Page::Formulario(None));

    let row = move |p: Proyecto| {
        let edit_id = p.id.clone();
        let delete_id = p.id.clone();
        let inicio = p.fecha_inicio_dia().unwrap_or("--").to_string();
        let fin = p.fecha_fin_dia().unwrap_or("--").to_string();
        view! {
            <tr class="project-row">
                <td class="cell-nombre">{p.nombre}</td>
                <td class="cell-descripcion">{p.descripcion}</td>
                <td><EstadoBadge estado=p.estado /></td>
                <td class="cell-fechas">
                    <span>"Inicio: " {inicio}</span>
                    <span>"Fin: " {fin}</span>
                </td>
                <td class="cell-acciones">
                    <button
                        class="btn-icon edit"
                        title="Editar"
                        on:click=move |_| ctx.navigate(Page::Formulario(Some(edit_id.clone())))
                    >
                        "Editar"
                    </button>
                    <DeleteConfirmButton
                        button_class="btn-icon danger"
                        on_confirm=Callback::new(move |_: ()| eliminar(delete_id.clone()))
                    />
                </td>
            </tr>
        }
    };

    let visible = move || vm.with(|v| v.visible().into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="project-list">
            <div class="page-header">
                <h1>"Listado de Proyectos"</h1>
                <p>"Gestiona y organiza todos tus proyectos en un solo lugar"</p>
            </div>

            <div class="toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar proyectos..."
                    prop:value=move || vm.with(|v| v.query().to_string())
                    on:input=move |ev| vm.update(|v| v.set_query(event_target_value(&ev)))
                />
                <button class="btn-primary" on:click=nuevo>"Nuevo Proyecto"</button>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p>"Cargando proyectos..."</p>
                        </div>
                    }.into_any();
                }

                let (nothing_loaded, matches) = vm.with(|v| (v.is_empty(), v.filtered_count()));
                if nothing_loaded {
                    view! {
                        <div class="empty-state">
                            <p class="empty-title">"No hay proyectos registrados"</p>
                            <p>"Comienza creando tu primer proyecto"</p>
                            <button class="btn-primary" on:click=nuevo>"Crear Proyecto"</button>
                        </div>
                    }.into_any()
                } else if matches == 0 {
                    view! {
                        <div class="empty-state">
                            <p>"No se encontraron proyectos que coincidan con tu búsqueda"</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <table class="project-table">
                            <thead>
                                <tr>
                                    <th>"Nombre"</th>
                                    <th>"Descripción"</th>
                                    <th>"Estado"</th>
                                    <th>"Fechas"</th>
                                    <th>"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=visible key=|p| p.id.clone() children=row />
                            </tbody>
                        </table>
                        <Pager vm=vm />
                    }.into_any()
                }
            }}
        </div>
    }
}
