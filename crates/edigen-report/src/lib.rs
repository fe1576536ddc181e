//! Document generation, test-file filling, snippet emission and run
//! reporting.

pub mod documents;
pub mod filler;
pub mod output;
pub mod report;
pub mod run;
pub mod snippets;

pub use documents::{DocumentProfile, GenerateOptions, GeneratedDocument, generate_document, profile};
pub use filler::{FillError, fill_design};
pub use output::OutputWriter;
pub use report::{Artifact, RunReport};
pub use run::{RunConfig, run};
