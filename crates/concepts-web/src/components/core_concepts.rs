use leptos::prelude::*;
use shared::{CORE_CONCEPTS, ConceptRecord};

use super::{CoreConcept, Section};

/// Anchor id of the core concepts section
pub const CORE_CONCEPTS_ID: &str = "core-concepts";

/// Core concepts section over the site's static concept list
#[component]
pub fn CoreConcepts() -> impl IntoView {
    view! { <CoreConceptList concepts=CORE_CONCEPTS /> }
}

/// Renders one `CoreConcept` per record, in list order, keyed by title
///
/// Titles are expected to be unique. Duplicates are not checked here; they only
/// affect how the list is diffed, never whether it renders.
#[component]
pub fn CoreConceptList(concepts: &'static [ConceptRecord]) -> impl IntoView {
    view! {
        <Section title="Core Concepts" id=CORE_CONCEPTS_ID>
            <ul class="grid grid-cols-2 gap-6 list-none p-0">
                <For
                    each=move || concepts.iter()
                    key=|concept| concept.title
                    children=move |concept: &'static ConceptRecord| {
                        view! {
                            <CoreConcept
                                title=concept.title
                                description=concept.description
                                image=concept.image
                            />
                        }
                    }
                />
            </ul>
        </Section>
    }
}
