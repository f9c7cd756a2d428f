//! SLSA v0.1 provenance predicate.
//!
//! See: <https://slsa.dev/provenance/v0.1>

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::statement::DigestSet;

/// SLSA v0.1 provenance predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlsaProvenance {
    /// Identifies the build system.
    pub builder: Builder,
    /// Invocation id, completeness, and timing.
    pub metadata: BuildMetadata,
    /// How the build was run.
    pub recipe: Recipe,
    /// Inputs to the build. Currently only the source repository.
    pub materials: Vec<Material>,
}

/// Identifies the build system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builder {
    /// Builder URI (organization and agent).
    pub id: String,
}

/// Invocation id, completeness, and timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    /// The Buildkite build URL.
    pub build_invocation_id: String,
    /// Which categories of information are complete.
    pub completeness: Completeness,
    /// Whether rerunning the recipe yields bit-identical output.
    pub reproducible: bool,
    /// When the statement was assembled, RFC 3339 with whole seconds.
    #[serde(serialize_with = "rfc3339_seconds")]
    pub build_finished_on: DateTime<Utc>,
}

/// Which categories of information are complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completeness {
    /// Whether `recipe.arguments` is complete.
    pub arguments: bool,
    /// Whether `recipe.environment` is complete.
    pub environment: bool,
    /// Whether `materials` is complete.
    pub materials: bool,
}

/// How the build was run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Always [`Recipe::TYPE`].
    #[serde(rename = "type")]
    pub recipe_type: String,
    /// Index into `materials` holding the recipe definition.
    pub defined_in_material: u32,
    /// The step command, verbatim.
    pub entry_point: String,
    /// Encoded as `null` when absent.
    pub arguments: Option<serde_json::Value>,
    /// Encoded as `null` when absent.
    pub environment: Option<serde_json::Value>,
}

impl Recipe {
    /// The Buildkite build recipe type URI.
    pub const TYPE: &str = "https://buildkite.com/Attestations/BuildkiteBuild@v1";
}

/// A material (input) to the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// URI identifying the material.
    pub uri: String,
    /// Content digests.
    pub digest: DigestSet,
}

fn rfc3339_seconds<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}
