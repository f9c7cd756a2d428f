//! Assembles the in-toto statement from subjects and pipeline context.

use chrono::{DateTime, SubsecRound, Utc};

use crate::context::{AgentContext, BuildContext};
use crate::provenance::{BuildMetadata, Builder, Completeness, Material, Recipe, SlsaProvenance};
use crate::repo_url;
use crate::statement::{DigestSet, InTotoStatement, Subject};

/// Builder id for a Buildkite agent:
/// `https://buildkite.com/organizations/{org}/agents/{id}`.
#[must_use]
pub fn builder_id(agent: &AgentContext) -> String {
    format!(
        "https://buildkite.com/organizations/{}/agents/{}",
        agent.organization, agent.id
    )
}

/// The single material: the source repository at the built commit.
#[must_use]
pub fn repository_material(build: &BuildContext) -> Material {
    Material {
        uri: repo_url::parse(&build.repository).materials_uri(),
        digest: DigestSet::sha1(build.commit.clone()),
    }
}

/// Assemble a statement finished now.
#[must_use]
pub fn assemble(
    subjects: Vec<Subject>,
    build: &BuildContext,
    agent: &AgentContext,
) -> InTotoStatement {
    assemble_at(subjects, build, agent, Utc::now())
}

/// Assemble a statement with an explicit finish time.
///
/// Only argument completeness is claimed; the environment and materials
/// are not captured in full, and the build is never marked reproducible.
/// `finished_on` is truncated to whole seconds.
#[must_use]
pub fn assemble_at(
    subjects: Vec<Subject>,
    build: &BuildContext,
    agent: &AgentContext,
    finished_on: DateTime<Utc>,
) -> InTotoStatement {
    let predicate = SlsaProvenance {
        builder: Builder {
            id: builder_id(agent),
        },
        metadata: BuildMetadata {
            build_invocation_id: build.build_url.clone(),
            completeness: Completeness {
                arguments: true,
                environment: false,
                materials: false,
            },
            reproducible: false,
            build_finished_on: finished_on.trunc_subsecs(0),
        },
        recipe: Recipe {
            recipe_type: Recipe::TYPE.to_owned(),
            defined_in_material: 0,
            entry_point: build.command.clone(),
            arguments: None,
            environment: None,
        },
        materials: vec![repository_material(build)],
    };

    InTotoStatement::new(subjects, predicate)
}
