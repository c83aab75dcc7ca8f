//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the transient notification queue.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

/// How long a toast stays on screen
pub const TOAST_LIFETIME_MS: u32 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Toasts currently visible, oldest first
    pub toasts: Vec<Toast>,
    /// Last id handed out
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a toast and return its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) -> u32 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next = next.wrapping_add(1);
        *next
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });
    id
}

pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().get()
}

fn notify(store: &AppStore, kind: ToastKind, message: &str) {
    let id = store_push_toast(store, kind, message);
    let store = *store;
    Timeout::new(TOAST_LIFETIME_MS, move || store_dismiss_toast(&store, id)).forget();
}

pub fn notify_success(store: &AppStore, message: &str) {
    log::info!("[TOAST] {}", message);
    notify(store, ToastKind::Success, message);
}

pub fn notify_error(store: &AppStore, message: &str) {
    log::warn!("[TOAST] {}", message);
    notify(store, ToastKind::Error, message);
}
