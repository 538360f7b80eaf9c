use leptos::prelude::*;
use shared::{EXAMPLES, ExampleRecord};

use super::Section;

/// Code examples section, one article per example
#[component]
pub fn Examples() -> impl IntoView {
    view! {
        <Section title="Examples" id="examples">
            <div class="space-y-6">
                {EXAMPLES.iter().map(|example| view! { <ExampleArticle example=example /> }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ExampleArticle(example: &'static ExampleRecord) -> impl IntoView {
    view! {
        <article id=example.id>
            <h3 class="font-bold">{example.title}</h3>
            <p class="mb-2 text-[var(--ink-light)]">{example.description}</p>
            <pre class="text-sm border border-dashed border-[var(--rule)] p-3 overflow-x-auto">
                <code>{example.code}</code>
            </pre>
        </article>
    }
}
