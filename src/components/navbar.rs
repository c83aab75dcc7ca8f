//! Navbar Component
//!
//! Page switcher with active highlight and a collapsible mobile menu.

use leptos::prelude::*;

use crate::context::{AppContext, NAV_ITEMS};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (menu_open, set_menu_open) = signal(false);

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|(target, label)| {
                let target = *target;
                let link_class = move || {
                    let mut c = String::from(if mobile { "nav-link mobile" } else { "nav-link" });
                    if ctx.is_active(target) {
                        c.push_str(" active");
                    }
                    c
                };
                view! {
                    <li>
                        <button
                            class=link_class
                            on:click=move |_| {
                                set_menu_open.set(false);
                                ctx.navigate(target.page());
                            }
                        >
                            {*label}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-row">
                <h1 class="navbar-title">"Gestor de Proyectos"</h1>

                <ul class="nav-links desktop">{links(false)}</ul>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <ul class="nav-links mobile">{links(true)}</ul>
            </Show>
        </nav>
    }
}
