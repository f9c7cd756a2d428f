//! in-toto v0.1 attestation statement.
//!
//! See: <https://github.com/in-toto/attestation/blob/v0.1.0/spec/README.md#statement>

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::provenance::SlsaProvenance;

/// An in-toto v0.1 attestation statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InTotoStatement {
    /// Always [`InTotoStatement::TYPE`].
    #[serde(rename = "_type")]
    pub statement_type: String,
    /// Build artifacts, in walk order.
    pub subject: Vec<Subject>,
    /// Always [`InTotoStatement::PREDICATE_TYPE`].
    #[serde(rename = "predicateType")]
    pub predicate_type: String,
    /// The SLSA provenance predicate.
    pub predicate: SlsaProvenance,
}

impl InTotoStatement {
    /// The statement type URI.
    pub const TYPE: &str = "https://in-toto.io/Statement/v0.1";
    /// The SLSA v0.1 provenance predicate type URI.
    pub const PREDICATE_TYPE: &str = "https://slsa.dev/provenance/v0.1";

    /// Wrap subjects and a predicate with the fixed type identifiers.
    #[must_use]
    pub fn new(subject: Vec<Subject>, predicate: SlsaProvenance) -> Self {
        Self {
            statement_type: Self::TYPE.to_owned(),
            subject,
            predicate_type: Self::PREDICATE_TYPE.to_owned(),
            predicate,
        }
    }
}

/// A subject (output artifact) of the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Path relative to the artifact root, `/`-separated.
    pub name: String,
    /// Content digests.
    pub digest: DigestSet,
}

/// Digest algorithm names mapped to lowercase hex values.
///
/// Ordered by algorithm name so encoding is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigestSet(BTreeMap<String, String>);

impl DigestSet {
    /// A set holding a single `sha256` entry.
    #[must_use]
    pub fn sha256(hex: impl Into<String>) -> Self {
        Self::single("sha256", hex)
    }

    /// A set holding a single `sha1` entry.
    #[must_use]
    pub fn sha1(hex: impl Into<String>) -> Self {
        Self::single("sha1", hex)
    }

    fn single(algorithm: &str, hex: impl Into<String>) -> Self {
        Self(BTreeMap::from([(algorithm.to_owned(), hex.into())]))
    }

    /// Look up the digest for an algorithm.
    #[must_use]
    pub fn get(&self, algorithm: &str) -> Option<&str> {
        self.0.get(algorithm).map(String::as_str)
    }
}
