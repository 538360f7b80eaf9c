mod core_concept;
mod core_concepts;
mod examples;
mod header;
mod section;

pub use core_concept::CoreConcept;
pub use core_concepts::{CORE_CONCEPTS_ID, CoreConceptList, CoreConcepts};
pub use examples::Examples;
pub use header::Header;
pub use section::Section;
