use std::path::Path;

use log::{info, warn};

use crate::handlers::{report_error, Status};
use crate::models::EdsignError;
use crate::services::verifier::Verdict;
use crate::services::{KeyStore, Verifier};
use crate::utils::pattern::{expand_pattern, Directories};

pub fn report_line(path: &Path, verdict: Verdict) -> String {
    format!("Signature of {} is {}", path.display(), verdict)
}

/// Verify every file matching `pattern`, reporting each one on its own line.
/// A matched directory contributes the files directly inside it.
pub fn verify_files(
    key_store: &KeyStore,
    pattern: &str,
    public_key_path: Option<&Path>,
) -> Result<Status, EdsignError> {
    let verifier = Verifier::new(key_store.load_public_key(public_key_path)?);
    let files = expand_pattern(pattern, Directories::Expand)?;
    info!("Verifying {} file(s) matching {}", files.len(), pattern);

    let mut failures = 0;
    for outcome in verifier.verify_files(&files) {
        match outcome.result {
            Ok(verdict) => println!("{}", report_line(&outcome.path, verdict)),
            Err(e) => {
                failures += 1;
                report_error(&e);
            }
        }
    }

    if failures > 0 {
        warn!("{} of {} file(s) could not be verified", failures, files.len());
        return Ok(Status::CompletedWithErrors);
    }
    Ok(Status::Completed)
}
