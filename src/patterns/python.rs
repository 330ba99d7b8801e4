//! Python-specific signature detector
//!
//! Scans the text of `requirements.txt`, `pyproject.toml` or `Pipfile`
//! for well-known framework and test-runner names.

use super::{RepoSnapshot, Signal, SignatureDetector};

/// Manifests checked in order; the first one present at the root is used
pub const MANIFESTS: &[&str] = &["requirements.txt", "pyproject.toml", "Pipfile"];

/// Python signature detector
pub struct PythonSignatureDetector;

impl PythonSignatureDetector {
    pub fn new() -> Self {
        Self
    }
}

impl SignatureDetector for PythonSignatureDetector {
    fn detect(&self, snapshot: &RepoSnapshot) -> Vec<Signal> {
        let Some(manifest) = &snapshot.python_manifest else {
            return Vec::new();
        };
        let text = manifest.to_lowercase();
        let mut signals = Vec::new();

        if text.contains("django") {
            signals.push(Signal::framework("Django", 5));
        }
        if text.contains("flask") {
            signals.push(Signal::framework("Flask", 5));
        }
        if text.contains("tensorflow") {
            signals.push(Signal::framework("TensorFlow", 5));
        }
        if text.contains("torch") {
            signals.push(Signal::framework("PyTorch", 5));
        }
        if text.contains("pytest") {
            signals.push(Signal::tool("Pytest", 3));
        }

        signals
    }

    fn ecosystem(&self) -> &'static str {
        "python"
    }
}
