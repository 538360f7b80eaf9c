/// Static site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,
    /// Value of the document `lang` attribute
    pub lang: &'static str,
    pub nav: &'static [NavLink],
}

/// In-page navigation entry, pointing at a section identifier
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    /// Fragment link for this entry, e.g. `#core-concepts`
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub static CONFIG: Config = Config {
    name: "React Essentials",
    tagline: "Fundamental React concepts you will need for almost any app you are going to build!",
    lang: "en",

    // Order matches the order of sections on the home page
    nav: &[
        NavLink {
            label: "Core Concepts",
            anchor: "core-concepts",
        },
        NavLink {
            label: "Examples",
            anchor: "examples",
        },
    ],
};
