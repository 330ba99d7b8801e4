//! Generic/language-agnostic signature detector
//!
//! Recognises tooling from the shape of the repository root: container files,
//! infrastructure-as-code, CI workflows and TypeScript configuration.

use super::{RepoSnapshot, Signal, SignatureDetector};

const DOCKER_FILES: &[&str] = &["dockerfile", "docker-compose.yml", "docker-compose.yaml"];
const KUBERNETES_FILES: &[&str] = &["k8s", "kubernetes", "helm", "chart.yaml"];

/// Generic signature detector
pub struct GenericSignatureDetector;

impl GenericSignatureDetector {
    pub fn new() -> Self {
        Self
    }
}

impl SignatureDetector for GenericSignatureDetector {
    fn detect(&self, snapshot: &RepoSnapshot) -> Vec<Signal> {
        let mut signals = Vec::new();

        if DOCKER_FILES.iter().any(|f| snapshot.has_file(f)) {
            signals.push(Signal::tool("Docker", 5));
        }

        if snapshot.has_workflows {
            signals.push(Signal::tool("GitHub Actions", 5));
            signals.push(Signal::tool("CI/CD", 3));
        }

        if snapshot.files.iter().any(|f| f.ends_with(".tf")) {
            signals.push(Signal::tool("Terraform", 5));
        }

        if snapshot.has_file("tsconfig.json") {
            signals.push(Signal::tool("TypeScript", 5));
        }

        if KUBERNETES_FILES.iter().any(|f| snapshot.has_file(f)) {
            signals.push(Signal::tool("Kubernetes", 5));
        }

        signals
    }

    fn ecosystem(&self) -> &'static str {
        "generic"
    }
}
