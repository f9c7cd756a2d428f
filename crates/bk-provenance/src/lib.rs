//! SLSA provenance statements for Buildkite build artifacts.
//!
//! `bk-provenance` walks build artifacts, content-addresses every file with
//! SHA-256, and assembles an unsigned in-toto v0.1 statement carrying a
//! SLSA v0.1 provenance predicate that names the repository, commit,
//! command, and agent that produced them.
//!
//! The pipeline has four stages:
//! 1. **Subjects**: walk each artifact root and hash every regular file
//! 2. **Repository**: normalize the repository locator into a canonical URL
//! 3. **Statement**: assemble the statement from subjects and build context
//! 4. **Encoding**: render indented, HTML-unescaped JSON

pub mod builder;
pub mod context;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod provenance;
pub mod repo_url;
pub mod statement;
pub mod subjects;

pub use context::{AgentContext, BuildContext, ProvenanceConfig};
pub use error::ProvenanceError;
pub use statement::InTotoStatement;
