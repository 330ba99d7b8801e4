//! Modular framework/tool signature system organized by ecosystem.
//!
//! This module provides the detection side of the stack analysis:
//! - Signatures are organized by ecosystem (Node, Python, generic repository layout)
//! - Each detector inspects a `RepoSnapshot` and emits weighted signals
//! - New ecosystems are added by registering another detector

pub mod generic;
pub mod nodejs;
pub mod python;

/// What a signal counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Framework,
    Tool,
}

/// A weighted hint that a repository uses a named framework or tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub kind: SignalKind,
    pub name: &'static str,
    pub weight: u64,
}

impl Signal {
    pub fn framework(name: &'static str, weight: u64) -> Self {
        Self { kind: SignalKind::Framework, name, weight }
    }

    pub fn tool(name: &'static str, weight: u64) -> Self {
        Self { kind: SignalKind::Tool, name, weight }
    }
}

/// What is known about a repository's root directory.
#[derive(Debug, Clone, Default)]
pub struct RepoSnapshot {
    /// Lowercased names of files at the root
    pub files: Vec<String>,
    /// Names of directories at the root
    pub dirs: Vec<String>,
    /// Raw text of `package.json`
    pub package_json: Option<String>,
    /// Raw text of the first Python dependency manifest
    pub python_manifest: Option<String>,
    /// `.github/workflows` exists
    pub has_workflows: bool,
}

impl RepoSnapshot {
    pub fn has_file(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name)
    }

    pub fn has_dir(&self, name: &str) -> bool {
        self.dirs.iter().any(|d| d == name)
    }
}

/// Trait for modules that recognise frameworks and tools of one ecosystem
pub trait SignatureDetector {
    /// Signals found in the snapshot (empty vector if none)
    fn detect(&self, snapshot: &RepoSnapshot) -> Vec<Signal>;

    /// Get the ecosystem name this detector handles
    fn ecosystem(&self) -> &'static str;
}

/// Registry of all available signature detectors
pub struct SignatureRegistry {
    detectors: Vec<Box<dyn SignatureDetector>>,
}

impl SignatureRegistry {
    /// Create a new registry with all available detectors
    pub fn new() -> Self {
        Self {
            detectors: vec![
                Box::new(nodejs::NodeJsSignatureDetector::new()),
                Box::new(python::PythonSignatureDetector::new()),
                Box::new(generic::GenericSignatureDetector::new()),
            ],
        }
    }

    /// Run every registered detector over the snapshot
    pub fn detect_all(&self, snapshot: &RepoSnapshot) -> Vec<Signal> {
        self.detectors
            .iter()
            .flat_map(|detector| {
                let signals = detector.detect(snapshot);
                if !signals.is_empty() {
                    tracing::trace!("{} detector: {} signal(s)", detector.ecosystem(), signals.len());
                }
                signals
            })
            .collect()
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
