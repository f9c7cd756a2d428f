//! `bk-provenance generate`: hash artifacts and write provenance.
//!
//! 1. Parse the build and agent context blobs
//! 2. Walk and hash every artifact root, in the order given
//! 3. Assemble and encode the in-toto statement
//! 4. Echo it to stdout and write it to the output path

use std::path::PathBuf;
use std::process;

use bk_provenance::{ProvenanceConfig, ProvenanceError, pipeline};
use clap::Args;
use color_eyre::eyre::{Result, WrapErr};

/// Arguments for `bk-provenance generate`.
///
/// Each flag also accepts its underscore spelling (`--artifact_path`),
/// as passed by existing pipeline hooks.
#[derive(Args)]
pub struct GenerateArgs {
    /// File or directory of artifacts to attest. Repeat for several roots.
    #[arg(
        long = "artifact-path",
        alias = "artifact_path",
        value_name = "PATH",
        required = true
    )]
    pub artifact_paths: Vec<PathBuf>,

    /// Where to write the provenance statement.
    #[arg(
        long,
        alias = "output_path",
        value_name = "PATH",
        default_value = "provenance.json"
    )]
    pub output_path: PathBuf,

    /// The `${build}` context as a JSON object.
    #[arg(long, alias = "build_context", value_name = "JSON", value_parser = non_empty)]
    pub build_context: String,

    /// The `${agent}` context as a JSON object.
    #[arg(long, alias = "agent_context", value_name = "JSON", value_parser = non_empty)]
    pub agent_context: String,

    /// Don't echo the statement to stdout.
    #[arg(long, short)]
    pub quiet: bool,
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("value must not be empty".to_owned())
    } else {
        Ok(value.to_owned())
    }
}

/// Execute the generate command.
///
/// A missing artifact root exits with status 1 after printing which path
/// was not found.
///
/// # Errors
///
/// Returns an error if a context blob is malformed, an artifact cannot be
/// read, or the output file cannot be written.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config =
        ProvenanceConfig::from_json(args.artifact_paths, &args.build_context, &args.agent_context)?;

    let payload = match pipeline::render(&config) {
        Ok(payload) => payload,
        Err(err @ ProvenanceError::ArtifactNotFound { .. }) => {
            eprintln!("{err}");
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if !args.quiet {
        println!("Provenance:\n{}", String::from_utf8_lossy(&payload));
    }

    std::fs::write(&args.output_path, &payload).wrap_err_with(|| {
        format!(
            "failed to write provenance to {}",
            args.output_path.display()
        )
    })?;

    tracing::info!(path = %args.output_path.display(), "wrote provenance statement");
    Ok(())
}
