//! End-to-end provenance generation for one configuration.

use tracing::info;

use crate::builder;
use crate::context::ProvenanceConfig;
use crate::encode;
use crate::error::ProvenanceError;
use crate::statement::InTotoStatement;
use crate::subjects;

/// Hash every artifact root and assemble the statement.
///
/// # Errors
///
/// Returns [`ProvenanceError::ArtifactNotFound`] for a missing artifact
/// root, or the first unexpected walk or read failure.
pub fn generate(config: &ProvenanceConfig) -> Result<InTotoStatement, ProvenanceError> {
    let subjects = subjects::collect_all(&config.artifact_paths)?;
    let statement = builder::assemble(subjects, &config.build, &config.agent);

    info!(
        subjects = statement.subject.len(),
        commit = %config.build.commit,
        builder = %statement.predicate.builder.id,
        "assembled provenance statement"
    );
    Ok(statement)
}

/// [`generate`] and encode the result.
///
/// # Errors
///
/// As [`generate`], plus [`ProvenanceError::SerializeError`].
pub fn render(config: &ProvenanceConfig) -> Result<Vec<u8>, ProvenanceError> {
    let statement = generate(config)?;
    Ok(encode::to_vec_pretty(&statement)?)
}
