//! Server-side rendering of the home page to static HTML

use leptos::prelude::*;
use shared::CONFIG;

use crate::pages::HomePage;

/// Document-level settings for a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Contents of `<title>`
    pub title: String,
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
    /// Optional stylesheet href
    pub stylesheet: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: CONFIG.name.to_string(),
            lang: CONFIG.lang.to_string(),
            stylesheet: None,
        }
    }
}

/// Render the home page body (`<main>` and everything below it)
pub fn render_home_page() -> String {
    Owner::new().with(|| view! { <HomePage /> }.to_html())
}

/// Render the home page as a complete HTML5 document
pub fn render_document(options: &DocumentOptions) -> String {
    let DocumentOptions { title, lang, stylesheet } = options.clone();

    let html = Owner::new().with(|| {
        view! {
            <html lang=lang>
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>{title}</title>
                    {stylesheet.map(|href| view! { <link rel="stylesheet" href=href /> })}
                </head>
                <body>
                    <HomePage />
                </body>
            </html>
        }
        .to_html()
    });

    format!("<!DOCTYPE html>\n{}\n", html)
}
