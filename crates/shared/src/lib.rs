//! Static data shared by the web components and the site exporter

mod config;
mod data;

pub use config::{CONFIG, Config, NavLink};
pub use data::{CORE_CONCEPTS, ConceptRecord, EXAMPLES, ExampleRecord};
