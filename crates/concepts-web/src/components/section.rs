use leptos::prelude::*;

/// Section component - titled wrapper with decorative ASCII border
///
/// `id` makes the section addressable and adds a self-link next to the heading.
/// Any other attribute passed as `attr:name=value` is forwarded to the `<section>`.
#[component]
pub fn Section(
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = match class {
        Some(extra) => format!("mb-8 {}", extra),
        None => "mb-8".to_string(),
    };
    let anchor_href = id.as_ref().map(|id| format!("#{}", id));

    view! {
        <section id=id class=class>
            <h2 class="font-bold uppercase mb-3">
                <span aria-hidden="true">"\u{2500}\u{2524} "</span>
                {title}
                <span aria-hidden="true">" \u{251C}\u{2500}"</span>
                {anchor_href.map(|href| view! {
                    <a href=href class="section-anchor ml-1">" \u{00A7}"</a>
                })}
            </h2>
            <div class="pl-4 border-l border-dashed border-[var(--rule)]">
                {children()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| view().to_html())
    }

    #[test]
    fn test_section_renders_title_in_heading() {
        let html = render(|| view! { <Section title="Core Concepts">"body"</Section> });
        let heading_start = html.find("<h2").unwrap();
        let heading_end = html.find("</h2>").unwrap();
        assert!(html[heading_start..heading_end].contains("Core Concepts"));
    }

    #[test]
    fn test_section_children_follow_heading() {
        let html = render(|| view! { <Section title="T"><p>"first"</p><p>"second"</p></Section> });
        let heading = html.find("</h2>").unwrap();
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(heading < first);
        assert!(first < second);
    }

    #[test]
    fn test_section_without_children() {
        let html = render(|| view! { <Section title="Empty">{()}</Section> });
        assert!(html.contains("<section"));
        assert!(html.contains("Empty"));
        assert!(html.trim_end().ends_with("</section>"));
    }

    #[test]
    fn test_section_many_children() {
        let html = render(|| {
            view! {
                <Section title="Many">
                    {(0..5).map(|i| view! { <p>{format!("child-{}", i)}</p> }).collect_view()}
                </Section>
            }
        });
        let positions: Vec<_> = (0..5).map(|i| html.find(&format!("child-{}", i)).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_section_without_title_still_renders() {
        let html = render(|| view! { <Section>"content"</Section> });
        assert!(html.contains("<h2"));
        assert!(html.contains("content"));
    }

    #[test]
    fn test_section_id_on_root_container() {
        let html = render(|| view! { <Section title="Core Concepts" id="core-concepts">"x"</Section> });
        let root = &html[..html.find('>').unwrap()];
        assert!(root.contains(r#"id="core-concepts""#), "root tag was {}", root);
        assert!(html.contains(r##"href="#core-concepts""##));
    }

    #[test]
    fn test_section_without_id_has_no_anchor() {
        let html = render(|| view! { <Section title="Plain">"x"</Section> });
        let root = &html[..html.find('>').unwrap()];
        assert!(!root.contains("id="));
        assert!(!html.contains("section-anchor"));
    }

    #[test]
    fn test_section_extra_class() {
        let html = render(|| view! { <Section title="T" class="wide">"x"</Section> });
        let root = &html[..html.find('>').unwrap()];
        assert!(root.contains(r#"class="mb-8 wide""#), "root tag was {}", root);
    }

    #[test]
    fn test_section_forwards_attributes() {
        let html = render(|| view! { <Section title="T" attr:role="region">"x"</Section> });
        let root = &html[..html.find('>').unwrap()];
        assert!(root.contains(r#"role="region""#), "root tag was {}", root);
    }

    #[test]
    fn test_section_render_is_idempotent() {
        let first = render(|| view! { <Section title="Same" id="same">"body"</Section> });
        let second = render(|| view! { <Section title="Same" id="same">"body"</Section> });
        assert_eq!(first, second);
    }
}
