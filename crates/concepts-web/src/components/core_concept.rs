use leptos::prelude::*;

/// A single concept card: illustration, title and description
#[component]
pub fn CoreConcept(title: &'static str, description: &'static str, image: &'static str) -> impl IntoView {
    view! {
        <li class="core-concept text-center">
            <img src=image alt=title class="mx-auto mb-2 max-h-24" />
            <h3 class="font-bold">{title}</h3>
            <p class="text-[var(--ink-light)]">{description}</p>
        </li>
    }
}
