//! Build and agent context supplied by the pipeline, plus the
//! configuration value that drives one generation run.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ProvenanceError;

/// The `${build}` context of the step being attested.
///
/// Missing fields default to empty strings; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildContext {
    /// Repository locator as configured on the pipeline.
    pub repository: String,
    /// Web URL of the build.
    pub build_url: String,
    /// Commit hash being built.
    pub commit: String,
    /// Identifier of the step that produced the artifacts.
    pub step_id: String,
    /// Command the step ran.
    pub command: String,
}

/// The `${agent}` context of the agent that ran the step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentContext {
    /// Agent name.
    #[serde(rename = "agent_name")]
    pub name: String,
    /// Agent UUID.
    #[serde(rename = "agent_id")]
    pub id: String,
    /// Organization slug.
    #[serde(rename = "agent_organization")]
    pub organization: String,
}

/// Everything one provenance run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceConfig {
    /// Artifact roots (files or directories), hashed in this order.
    pub artifact_paths: Vec<PathBuf>,
    /// The build being attested.
    pub build: BuildContext,
    /// The agent that ran it.
    pub agent: AgentContext,
}

impl ProvenanceConfig {
    /// Build a config from artifact roots and the two raw JSON context blobs.
    ///
    /// # Errors
    ///
    /// Returns [`ProvenanceError::ContextError`] if either blob is not a
    /// JSON object matching its context schema.
    pub fn from_json(
        artifact_paths: Vec<PathBuf>,
        build_json: &str,
        agent_json: &str,
    ) -> Result<Self, ProvenanceError> {
        let build = parse_context("build", build_json)?;
        let agent = parse_context("agent", agent_json)?;

        Ok(Self {
            artifact_paths,
            build,
            agent,
        })
    }
}

/// Parse a context blob, requiring a JSON object so fields are matched by
/// name and never by position.
fn parse_context<T: DeserializeOwned>(
    context: &'static str,
    json: &str,
) -> Result<T, ProvenanceError> {
    let context_error = |source| ProvenanceError::ContextError { context, source };
    let object: Map<String, Value> = serde_json::from_str(json).map_err(context_error)?;
    serde_json::from_value(Value::Object(object)).map_err(context_error)
}
