//! Display-unit tree produced by the renderers.

mod node;
mod query;

pub use node::{ContainerKind, Node, Page};
