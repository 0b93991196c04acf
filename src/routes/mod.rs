use std::path::PathBuf;

use crate::cli;
use crate::handlers::{key_handlers, sign_handlers, verify_handlers, Status};
use crate::models::EdsignError;
use crate::services::KeyStore;

/// The one operation a single invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Create {
        force: bool,
    },
    Sign {
        pattern: String,
        comment: Option<String>,
        key_path: Option<PathBuf>,
    },
    Verify {
        pattern: String,
        public_key_path: Option<PathBuf>,
    },
    Help,
}

pub fn dispatch(route: Route, key_store: &KeyStore) -> Result<Status, EdsignError> {
    match route {
        Route::Create { force } => key_handlers::create_key_pair(key_store, force),
        Route::Sign {
            pattern,
            comment,
            key_path,
        } => sign_handlers::sign_files(key_store, &pattern, comment.as_deref(), key_path.as_deref()),
        Route::Verify {
            pattern,
            public_key_path,
        } => verify_handlers::verify_files(key_store, &pattern, public_key_path.as_deref()),
        Route::Help => show_help(),
    }
}

pub fn show_help() -> Result<Status, EdsignError> {
    cli::print_help().map_err(|e| EdsignError::io("Failed to write", "stdout", e))?;
    Ok(Status::Completed)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use ed25519_dalek::Signer as _;

    use super::*;
    use crate::config::KeyConfig;
    use crate::handlers::verify_handlers::report_line;
    use crate::services::Verifier;

    fn pattern(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    fn setup() -> (tempfile::TempDir, KeyStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(KeyConfig::in_dir(dir.path().join(".edsign")));
        dispatch(Route::Create { force: false }, &store).unwrap();
        (dir, store)
    }

    fn sign(store: &KeyStore, path: &Path, comment: Option<&str>) -> Result<Status, EdsignError> {
        dispatch(
            Route::Sign {
                pattern: pattern(path),
                comment: comment.map(str::to_string),
                key_path: None,
            },
            store,
        )
    }

    fn verify(store: &KeyStore, target: &Path) -> Result<Status, EdsignError> {
        dispatch(
            Route::Verify {
                pattern: pattern(target),
                public_key_path: None,
            },
            store,
        )
    }

    #[test]
    fn test_hello_scenario() {
        let (dir, store) = setup();
        let hello = dir.path().join("hello.txt");
        fs::write(&hello, "hello").unwrap();

        assert_eq!(sign(&store, &hello, None).unwrap(), Status::Completed);

        let private = store.load_private_key(None).unwrap();
        let expected = BASE64.encode(private.sign(b"hello").to_bytes());
        assert_eq!(fs::read_to_string(dir.path().join("hello.txt.sig")).unwrap(), expected);

        assert_eq!(verify(&store, &hello).unwrap(), Status::Completed);

        let public = store.load_public_key(None).unwrap();
        let verdict = Verifier::new(public).verify_file(&hello).unwrap();
        assert_eq!(
            report_line(&hello, verdict),
            format!("Signature of {} is valid", hello.display())
        );
    }

    #[test]
    fn test_sign_skips_matched_directories() {
        let (dir, store) = setup();
        let work = dir.path().join("work");
        let git = work.join(".git");
        let sub = work.join("sub");
        fs::create_dir_all(&git).unwrap();
        fs::create_dir_all(&sub).unwrap();
        fs::write(git.join("HEAD"), "ref: refs/heads/main").unwrap();
        fs::write(sub.join("inner.txt"), "inner").unwrap();
        fs::write(work.join(".env"), "TOKEN=1").unwrap();
        fs::write(work.join("a.txt"), "a").unwrap();

        assert_eq!(sign(&store, &work.join("*"), None).unwrap(), Status::Completed);

        assert!(work.join("a.txt.sig").exists());
        assert!(!sub.join("inner.txt.sig").exists());
        assert!(!git.join("HEAD.sig").exists());
        assert!(!work.join(".env.sig").exists());
    }

    #[test]
    fn test_create_twice_needs_force() {
        let (_dir, store) = setup();
        assert!(matches!(
            dispatch(Route::Create { force: false }, &store),
            Err(EdsignError::KeyExists(_))
        ));
        assert_eq!(dispatch(Route::Create { force: true }, &store).unwrap(), Status::Completed);
    }

    #[test]
    fn test_sign_glob_with_comment_and_explicit_key() {
        let (dir, store) = setup();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("a.txt"), "a").unwrap();
        fs::write(docs.join("b.txt"), "b").unwrap();

        let status = dispatch(
            Route::Sign {
                pattern: pattern(&docs.join("*.txt")),
                comment: Some("batch".to_string()),
                key_path: Some(store.config().private_key_path.clone()),
            },
            &store,
        )
        .unwrap();
        assert_eq!(status, Status::Completed);

        for name in ["a.txt.sig", "b.txt.sig"] {
            let text = fs::read_to_string(docs.join(name)).unwrap();
            assert!(text.ends_with(" batch"));
        }
        assert_eq!(verify(&store, &docs).unwrap(), Status::Completed);
    }

    #[test]
    fn test_verify_batch_reports_errors_after_all_files() {
        let (dir, store) = setup();
        let signed = dir.path().join("signed.txt");
        let unsigned = dir.path().join("unsigned.txt");
        fs::write(&signed, "x").unwrap();
        fs::write(&unsigned, "y").unwrap();
        sign(&store, &signed, None).unwrap();

        let status = verify(&store, &dir.path().join("*.txt")).unwrap();
        assert_eq!(status, Status::CompletedWithErrors);
    }

    #[test]
    fn test_invalid_verdict_is_not_an_error() {
        let (dir, store) = setup();
        let file = dir.path().join("doc.txt");
        fs::write(&file, "original").unwrap();
        sign(&store, &file, None).unwrap();
        fs::write(&file, "changed").unwrap();

        assert_eq!(verify(&store, &file).unwrap(), Status::Completed);
    }

    #[test]
    fn test_missing_file_fails() {
        let (dir, store) = setup();
        let missing = dir.path().join("missing.txt");

        let err = sign(&store, &missing, None).unwrap_err();
        assert_eq!(err.to_string(), format!("File not found: {}", missing.display()));
        let err = verify(&store, &missing).unwrap_err();
        assert!(matches!(err, EdsignError::NotFound(_)));
    }

    #[test]
    fn test_missing_keys_fail_before_any_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(KeyConfig::in_dir(dir.path().join("nowhere")));
        let file = dir.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        assert!(matches!(sign(&store, &file, None), Err(EdsignError::NotFound(_))));
        assert!(!dir.path().join("a.txt.sig").exists());
        assert!(matches!(verify(&store, &file), Err(EdsignError::NotFound(_))));
    }
}
