//! The declare workflow: load one artifact, submit one declaration,
//! report one line.

use std::io::Write;
use std::path::Path;

use crate::artifact::{resolve_path, ArtifactSource, JsonArtifactLoader};
use crate::blockchain::{DeclareReport, SigningAccount};
use crate::workflow::outcome::{WorkflowError, SUCCESS_LABEL};

/// Orchestrates a single declaration and reports its outcome.
///
/// Loading failures and submission failures are both reported on `out`
/// with their own label and returned to the caller, which owns the exit
/// status. A loading failure never reaches the account.
pub struct DeclareWorkflow<A, L = JsonArtifactLoader> {
    account: A,
    loader: L,
}

impl<A: SigningAccount> DeclareWorkflow<A> {
    pub fn new(account: A) -> Self {
        Self {
            account,
            loader: JsonArtifactLoader,
        }
    }
}

impl<A: SigningAccount, L: ArtifactSource> DeclareWorkflow<A, L> {
    /// Use a different artifact source.
    pub fn with_loader<L2: ArtifactSource>(self, loader: L2) -> DeclareWorkflow<A, L2> {
        DeclareWorkflow {
            account: self.account,
            loader,
        }
    }

    /// Declare the artifact at `sierra_path`, resolved against `cwd`.
    ///
    /// Writes exactly one line to `out`. Each call is an independent
    /// submission; nothing is cached between calls.
    pub async fn declare_from_path<W: Write>(
        &self,
        sierra_path: &str,
        cwd: &Path,
        out: &mut W,
    ) -> Result<DeclareReport, WorkflowError> {
        let outcome = self.run(sierra_path, cwd).await;

        match &outcome {
            Ok(report) => {
                tracing::info!(class_hash = %report.class_hash, "Declaration succeeded");
                emit(out, format_args!("{}{}", SUCCESS_LABEL, report));
            }
            Err(e) => {
                tracing::error!(error = %e, path = %sierra_path, "Declaration failed");
                emit(out, format_args!("{}{}", e.label(), e));
            }
        }

        outcome
    }

    async fn run(&self, sierra_path: &str, cwd: &Path) -> Result<DeclareReport, WorkflowError> {
        let path = resolve_path(sierra_path, cwd)?;
        let artifact = self.loader.load(&path)?;
        let report = self.account.declare(&artifact).await?;
        Ok(report)
    }
}

fn emit<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
        tracing::warn!(error = %e, "Failed to write outcome line");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ArtifactError, ContractArtifact};
    use crate::blockchain::DeclareError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::path::PathBuf;

    struct FixedAccount;

    #[async_trait]
    impl SigningAccount for FixedAccount {
        async fn declare(
            &self,
            _artifact: &ContractArtifact,
        ) -> Result<DeclareReport, DeclareError> {
            Ok(DeclareReport::new("0x1", "0xABC"))
        }
    }

    struct InMemoryLoader;

    impl ArtifactSource for InMemoryLoader {
        fn load(&self, path: &Path) -> Result<ContractArtifact, ArtifactError> {
            if path.ends_with("token.sierra.json") {
                Ok(ContractArtifact::new(path, json!({ "sierra_program": [] })))
            } else {
                Err(ArtifactError::NotFound(path.to_path_buf()))
            }
        }
    }

    #[tokio::test]
    async fn test_success_line() {
        let workflow = DeclareWorkflow::new(FixedAccount).with_loader(InMemoryLoader);
        let mut out = Vec::new();
        let report = workflow
            .declare_from_path("build/token.sierra.json", Path::new("/work"), &mut out)
            .await
            .unwrap();

        assert_eq!(report.class_hash, "0xABC");
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Declare result: { transaction_hash: 0x1, class_hash: 0xABC }\n");
    }

    #[tokio::test]
    async fn test_empty_path_is_load_error() {
        let workflow = DeclareWorkflow::new(FixedAccount).with_loader(InMemoryLoader);
        let mut out = Vec::new();
        let err = workflow
            .declare_from_path("", Path::new("/work"), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Load(ArtifactError::EmptyPath)));
        assert!(String::from_utf8(out).unwrap().starts_with("Error loading artifact: "));
    }

    #[tokio::test]
    async fn test_path_resolved_against_cwd() {
        let workflow = DeclareWorkflow::new(FixedAccount).with_loader(InMemoryLoader);
        let mut out = Vec::new();
        let err = workflow
            .declare_from_path("other.json", Path::new("/work"), &mut out)
            .await
            .unwrap_err();

        match err {
            WorkflowError::Load(ArtifactError::NotFound(path)) => {
                assert_eq!(path, PathBuf::from("/work/other.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
