//! Page content: core concepts and code examples
//!
//! Both lists are rendered in the order they are declared here.

/// One "core concept" card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptRecord {
    /// Unique within a list, used as the rendering key
    pub title: &'static str,
    pub description: &'static str,
    /// Path of the illustration, relative to the site root
    pub image: &'static str,
}

/// One code example shown in the examples section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleRecord {
    /// Unique within a list, used as the element id
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub static CORE_CONCEPTS: &[ConceptRecord] = &[
    ConceptRecord {
        title: "Components",
        description: "The core UI building block - compose the user interface by combining multiple components.",
        image: "/images/components.png",
    },
    ConceptRecord {
        title: "JSX",
        description: "Return (potentially dynamic) HTML(ish) code to define the actual markup that will be rendered.",
        image: "/images/jsx-ui.png",
    },
    ConceptRecord {
        title: "Props",
        description: "Make components configurable (and therefore reusable) by passing input data to them.",
        image: "/images/config.png",
    },
    ConceptRecord {
        title: "State",
        description: "React-managed data which, when changed, causes the component to re-render & the UI to update.",
        image: "/images/state-mgmt.png",
    },
];

pub static EXAMPLES: &[ExampleRecord] = &[
    ExampleRecord {
        id: "components",
        title: "Components",
        description: "Components are the building blocks of React applications. A component is a self-contained \
                      module (HTML + optional CSS + JS) that renders some output.",
        code: r#"function Welcome() {
  return <h1>Hello, World!</h1>;
}"#,
    },
    ExampleRecord {
        id: "jsx",
        title: "JSX",
        description: "JSX is a syntax extension to JavaScript. It is similar to a template language, but it has \
                      full power of JavaScript (e.g., it may output dynamic content).",
        code: r#"<div>
  <h1>Welcome {userName}</h1>
  <p>Time to learn React!</p>
</div>"#,
    },
    ExampleRecord {
        id: "props",
        title: "Props",
        description: "Components accept arbitrary inputs called props. They are like function arguments.",
        code: r#"function Welcome(props) {
  return <h1>Hello, {props.name}</h1>;
}"#,
    },
    ExampleRecord {
        id: "state",
        title: "State",
        description: "State allows React components to change their output over time in response to user actions, \
                      network responses, and anything else.",
        code: r#"function Counter() {
  const [isVisible, setIsVisible] = useState(false);

  function handleClick() {
    setIsVisible(true);
  }

  return (
    <div>
      <button onClick={handleClick}>Show Details</button>
      {isVisible && <p>Amazing details!</p>}
    </div>
  );
}"#,
    },
];
