use crate::domain::ImageRef;

/// Grouping semantics of a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Div,
    Section,
    Article,
    Header,
    Main,
}

/// Abstract display unit. Markup is chosen by whoever serializes the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Container {
        kind: ContainerKind,
        class: &'static str,
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        text: String,
    },
    Text {
        class: &'static str,
        text: String,
    },
    Link {
        href: String,
        children: Vec<Node>,
    },
    Button {
        label: String,
    },
    Image(ImageRef),
}

impl Node {
    pub fn container(kind: ContainerKind, class: &'static str, children: Vec<Node>) -> Self {
        Self::Container { kind, class, children }
    }

    pub fn div(class: &'static str, children: Vec<Node>) -> Self {
        Self::container(ContainerKind::Div, class, children)
    }

    pub fn section(class: &'static str, children: Vec<Node>) -> Self {
        Self::container(ContainerKind::Section, class, children)
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    pub fn text(class: &'static str, text: impl Into<String>) -> Self {
        Self::Text {
            class,
            text: text.into(),
        }
    }

    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Link {
            href: href.into(),
            children,
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::Button { label: label.into() }
    }

    pub fn image(image: ImageRef) -> Self {
        Self::Image(image)
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Container { children, .. } | Self::Link { children, .. } => children,
            _ => &[],
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Container { class, .. } | Self::Text { class, .. } => Some(*class),
            _ => None,
        }
    }
}

/// A rendered page: document title plus its body tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Node,
}

impl Page {
    pub fn new(title: impl Into<String>, body: Node) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}
