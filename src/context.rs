//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::ProyectoId;

/// Pages of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Inicio,
    /// Create (`None`) or edit an existing project
    Formulario(Option<ProyectoId>),
    Graficos,
}

/// Navbar entries, one per page kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Inicio,
    Formulario,
    Graficos,
}

pub const NAV_ITEMS: &[(NavTarget, &str)] = &[
    (NavTarget::Inicio, "Inicio"),
    (NavTarget::Formulario, "Formulario"),
    (NavTarget::Graficos, "Gráficos"),
];

impl NavTarget {
    pub fn page(self) -> Page {
        match self {
            NavTarget::Inicio => Page::Inicio,
            NavTarget::Formulario => Page::Formulario(None),
            NavTarget::Graficos => Page::Graficos,
        }
    }
}

impl Page {
    pub fn nav_target(&self) -> NavTarget {
        match self {
            Page::Inicio => NavTarget::Inicio,
            Page::Formulario(_) => NavTarget::Formulario,
            Page::Graficos => NavTarget::Graficos,
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub page: ReadSignal<Page>,
    /// Page currently shown - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("[NAV] -> {:?}", page);
        self.set_page.set(page);
    }

    pub fn is_active(&self, target: NavTarget) -> bool {
        self.page.with(|p| p.nav_target() == target)
    }
}
