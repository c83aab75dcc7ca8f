//! Status badge pill

use leptos::prelude::*;

use crate::status::status_badge;

#[component]
pub fn EstadoBadge(estado: i32) -> impl IntoView {
    let badge = status_badge(estado);
    view! {
        <span class=badge.class>{badge.label.into_owned()}</span>
    }
}
