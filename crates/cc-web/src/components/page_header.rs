use leptos::prelude::*;

use crate::components::Reveal;

/// Title/subtitle/label banner at the top of every inner page.
/// Pure function of its three string inputs.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="header-bg-grid" aria-hidden="true"></div>
            <div class="header-container">
                {(!label.is_empty()).then(|| view! {
                    <Reveal class="header-badge">{label.clone()}</Reveal>
                })}
                <Reveal delay_ms=100>
                    <h1 class="header-title">{title}</h1>
                </Reveal>
                <Reveal delay_ms=200>
                    <p class="header-subtitle">{subtitle}</p>
                </Reveal>
            </div>
        </section>
    }
}
