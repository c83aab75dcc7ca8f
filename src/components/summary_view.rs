//! Formatted AI summary

use leptos::prelude::*;

use crate::summary_format::{format_summary, Inline, ListEntry, SummaryBlock};

fn inline_view(runs: Vec<Inline>) -> impl IntoView {
    runs.into_iter()
        .map(|run| match run {
            Inline::Text(text) => view! { <span>{text}</span> }.into_any(),
            Inline::Bold(text) => view! { <strong>{text}</strong> }.into_any(),
        })
        .collect_view()
}

fn entry_view(entry: ListEntry) -> impl IntoView {
    view! {
        <li>
            {entry.title.map(|title| view! { <strong>{title}": "</strong> })}
            {inline_view(entry.body)}
        </li>
    }
}

fn block_view(block: SummaryBlock) -> AnyView {
    match block {
        SummaryBlock::Heading(text) => view! { <h3 class="summary-heading">{text}</h3> }.into_any(),
        SummaryBlock::Subheading(text) => view! { <h4 class="summary-subheading">{text}</h4> }.into_any(),
        SummaryBlock::List(entries) => view! {
            <ul class="summary-list">{entries.into_iter().map(entry_view).collect_view()}</ul>
        }
        .into_any(),
        SummaryBlock::Rule => view! { <hr class="summary-rule" /> }.into_any(),
        SummaryBlock::Paragraph(runs) => view! { <p class="summary-paragraph">{inline_view(runs)}</p> }.into_any(),
    }
}

/// Re-formats on every change, so it can follow a running reveal
#[component]
pub fn SummaryView(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <div class="summary-body">
            {move || text.with(|t| format_summary(t)).into_iter().map(block_view).collect_view()}
        </div>
    }
}
