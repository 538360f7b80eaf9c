use leptos::prelude::*;
use shared::CONFIG;

/// Page header: site name, tagline and in-page navigation
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="mb-8 text-center">
            <img src="/images/react-core-concepts.png" alt="Stylized atom" class="mx-auto mb-4 max-h-32" />
            <h1 class="text-xl font-bold">{CONFIG.name}</h1>
            <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline}</div>
            <nav class="mt-4 space-x-4">
                {CONFIG.nav.iter().map(|link| view! {
                    <a href=link.href()>{link.label}</a>
                }).collect_view()}
            </nav>
        </header>
    }
}
