//! XML template engine: document tree, repetition, injection, finishing.

pub mod error;
pub mod expand;
pub mod finish;
pub mod inject;
pub mod tree;

pub use error::TemplateError;
pub use expand::{expand, split_first_block};
pub use finish::{TotalSpec, apply_total, prune};
pub use inject::{Placement, inject, inject_detail};
pub use tree::XmlNode;
