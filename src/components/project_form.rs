//! Project Form Page
//!
//! Create or edit a project. Validation errors render inline and block the request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Page};
use crate::form::{FormErrors, FormField, ProjectForm};
use crate::models::ProyectoId;
use crate::status::Estado;
use crate::store::{notify_error, notify_success, use_app_store};

/// Inline error under a field
fn field_error(errors: RwSignal<FormErrors>, field: FormField) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        })
    }
}

fn input_class(errors: RwSignal<FormErrors>, field: FormField) -> impl Fn() -> &'static str + Copy {
    move || {
        if errors.with(|e| e.get(field).is_some()) {
            "form-input invalid"
        } else {
            "form-input"
        }
    }
}

/// Form for creating (`id = None`) or editing a project
#[component]
pub fn ProjectFormPage(id: Option<ProyectoId>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let form = RwSignal::new(ProjectForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let (saving, set_saving) = signal(false);
    let (loading, set_loading) = signal(id.is_some());
    let is_edit = id.is_some();
    let editing_id = StoredValue::new(id.clone());

    // Editing: pre-fill from the backend
    if let Some(id) = id.clone() {
        spawn_local(async move {
            match api::get_proyecto(&id).await {
                Ok(proyecto) => {
                    log::info!("[FORM] Loaded project {}", id);
                    form.set(ProjectForm::from_proyecto(&proyecto));
                }
                Err(err) => {
                    log::error!("[FORM] Failed to load project {}: {}", id, err);
                    let message = if err.is_not_found() {
                        "El proyecto ya no existe"
                    } else {
                        "No se pudo cargar el proyecto"
                    };
                    notify_error(&store, message);
                    ctx.navigate(Page::Inicio);
                }
            }
            set_loading.set(false);
        });
    }

    // Editing a field clears its error
    let set_field = move |field: FormField, value: String| {
        form.update(|f| f.set(field, value));
        errors.update(|e| e.clear(field));
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let payload = match form.with_untracked(ProjectForm::validate) {
            Ok(payload) => {
                errors.set(FormErrors::default());
                payload
            }
            Err(found) => {
                log::debug!("[FORM] {} invalid field(s)", found.len());
                errors.set(found);
                notify_error(&store, "Por favor corrige los errores del formulario");
                return;
            }
        };

        set_saving.set(true);
        let id = editing_id.get_value();
        spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_proyecto(id, &payload)
                    .await
                    .map(|_| "Proyecto actualizado correctamente"),
                None => api::create_proyecto(&payload)
                    .await
                    .map(|_| "Proyecto creado correctamente"),
            };
            match result {
                Ok(message) => {
                    notify_success(&store, message);
                    ctx.navigate(Page::Inicio);
                }
                Err(err) => {
                    log::error!("[FORM] Failed to save project: {}", err);
                    notify_error(&store, "Ocurrió un error al guardar el proyecto");
                }
            }
            set_saving.set(false);
        });
    };

    let estado_buttons = move || {
        Estado::ALL
            .iter()
            .map(|&estado| {
                let is_selected = move || form.with(|f| f.estado == Some(estado));
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "estado-btn active" } else { "estado-btn" }
                        on:click=move |_| set_field(FormField::Estado, estado.code().to_string())
                    >
                        {estado.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="project-form">
            <button class="back-btn" on:click=move |_| ctx.navigate(Page::Inicio)>
                "Volver al listado"
            </button>

            <div class="page-header">
                <h1>{if is_edit { "Editar Proyecto" } else { "Nuevo Proyecto" }}</h1>
                <p>
                    {if is_edit {
                        "Actualiza la información del proyecto"
                    } else {
                        "Completa los datos para crear un nuevo proyecto"
                    }}
                </p>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>"Cargando proyecto..."</p>
                    </div>
                }
            >
                <form class="form-card" on:submit=submit>
                    <div class="form-field">
                        <label>"Nombre del Proyecto *"</label>
                        <input
                            type="text"
                            name="nombre"
                            class=input_class(errors, FormField::Nombre)
                            placeholder="Ej: Desarrollo de aplicación móvil"
                            prop:value=move || form.with(|f| f.nombre.clone())
                            on:input=move |ev| set_field(FormField::Nombre, event_target_value(&ev))
                        />
                        {field_error(errors, FormField::Nombre)}
                    </div>

                    <div class="form-field">
                        <label>"Descripción *"</label>
                        <textarea
                            name="descripcion"
                            rows="4"
                            class=input_class(errors, FormField::Descripcion)
                            placeholder="Describe los objetivos y alcance del proyecto..."
                            prop:value=move || form.with(|f| f.descripcion.clone())
                            on:input=move |ev| set_field(FormField::Descripcion, event_target_value(&ev))
                        ></textarea>
                        {field_error(errors, FormField::Descripcion)}
                        <p class="char-count">
                            {move || format!("{} caracteres", form.with(ProjectForm::descripcion_chars))}
                        </p>
                    </div>

                    <div class="form-field">
                        <label>"Estado del Proyecto"</label>
                        <div class="estado-picker">{estado_buttons}</div>
                        {field_error(errors, FormField::Estado)}
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label>"Fecha de Inicio"</label>
                            <input
                                type="date"
                                name="fechaInicio"
                                class=input_class(errors, FormField::FechaInicio)
                                prop:value=move || form.with(|f| f.fecha_inicio.clone())
                                on:input=move |ev| set_field(FormField::FechaInicio, event_target_value(&ev))
                            />
                            {field_error(errors, FormField::FechaInicio)}
                        </div>
                        <div class="form-field">
                            <label>"Fecha de Fin"</label>
                            <input
                                type="date"
                                name="fechaFin"
                                class=input_class(errors, FormField::FechaFin)
                                prop:value=move || form.with(|f| f.fecha_fin.clone())
                                on:input=move |ev| set_field(FormField::FechaFin, event_target_value(&ev))
                            />
                            {field_error(errors, FormField::FechaFin)}
                        </div>
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| ctx.navigate(Page::Inicio)>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || match (saving.get(), is_edit) {
                                (true, _) => "Guardando...",
                                (false, true) => "Actualizar Proyecto",
                                (false, false) => "Crear Proyecto",
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
