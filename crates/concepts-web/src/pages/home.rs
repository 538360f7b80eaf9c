use leptos::prelude::*;

use crate::components::{CoreConcepts, Examples, Header};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <Header />

            // Core concepts
            <CoreConcepts />

            // Code examples
            <Examples />
        </main>
    }
}
