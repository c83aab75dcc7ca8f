//! Pager Component
//!
//! Page buttons for the project list; hidden when everything fits on one page.

use leptos::prelude::*;

use crate::list_view::ListViewModel;

#[component]
pub fn Pager(vm: RwSignal<ListViewModel>) -> impl IntoView {
    let caption = move || {
        let (first, last, total) = vm.with(ListViewModel::showing);
        format!("Mostrando {} a {} de {} proyectos", first, last, total)
    };

    view! {
        <Show when=move || vm.with(|v| v.total_pages() > 1)>
            <div class="pager">
                <p class="pager-caption">{caption}</p>

                <div class="pager-buttons">
                    <button
                        class="page-btn"
                        disabled=move || !vm.with(ListViewModel::has_prev)
                        on:click=move |_| {
                            vm.update(|v| {
                                v.prev_page();
                            })
                        }
                    >
                        "‹"
                    </button>

                    {move || {
                        (1..=vm.with(ListViewModel::total_pages))
                            .map(|n| {
                                let is_current = move || vm.with(|v| v.current_page() == n);
                                view! {
                                    <button
                                        class=move || if is_current() { "page-btn active" } else { "page-btn" }
                                        on:click=move |_| {
                                            vm.update(|v| {
                                                v.go_to_page(n);
                                            })
                                        }
                                    >
                                        {n}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}

                    <button
                        class="page-btn"
                        disabled=move || !vm.with(ListViewModel::has_next)
                        on:click=move |_| {
                            vm.update(|v| {
                                v.next_page();
                            })
                        }
                    >
                        "›"
                    </button>
                </div>
            </div>
        </Show>
    }
}
