//! Node.js-specific signature detector
//!
//! Reads `dependencies` and `devDependencies` of `package.json` and maps
//! well-known packages to frameworks and build/test tools.

use std::collections::HashSet;

use super::{RepoSnapshot, Signal, SignatureDetector};

const FRAMEWORK_WEIGHT: u64 = 5;
const TOOL_WEIGHT: u64 = 3;

/// Package name to framework
const FRAMEWORKS: &[(&str, &str)] = &[
    ("react", "React"),
    ("next", "Next.js"),
    ("vue", "Vue.js"),
    ("@angular/core", "Angular"),
    ("svelte", "Svelte"),
    ("express", "Express"),
];

/// Package name to tool
const TOOLS: &[(&str, &str)] = &[
    ("jest", "Jest"),
    ("webpack", "Webpack"),
    ("vite", "Vite"),
];

/// Node.js signature detector
pub struct NodeJsSignatureDetector;

impl NodeJsSignatureDetector {
    pub fn new() -> Self {
        Self
    }

    /// Names of all runtime and dev dependencies, `None` if the manifest is not valid JSON
    fn dependency_names(&self, manifest: &str) -> Option<HashSet<String>> {
        let json: serde_json::Value = serde_json::from_str(manifest).ok()?;
        let mut names = HashSet::new();
        for section in ["dependencies", "devDependencies"] {
            if let Some(deps) = json.get(section).and_then(|d| d.as_object()) {
                names.extend(deps.keys().cloned());
            }
        }
        Some(names)
    }
}

impl SignatureDetector for NodeJsSignatureDetector {
    fn detect(&self, snapshot: &RepoSnapshot) -> Vec<Signal> {
        let Some(manifest) = &snapshot.package_json else {
            return Vec::new();
        };
        let Some(deps) = self.dependency_names(manifest) else {
            tracing::debug!("package.json is not valid JSON, skipping");
            return Vec::new();
        };

        let frameworks = FRAMEWORKS
            .iter()
            .filter(|(package, _)| deps.contains(*package))
            .map(|&(_, name)| Signal::framework(name, FRAMEWORK_WEIGHT));
        let tools = TOOLS
            .iter()
            .filter(|(package, _)| deps.contains(*package))
            .map(|&(_, name)| Signal::tool(name, TOOL_WEIGHT));

        frameworks.chain(tools).collect()
    }

    fn ecosystem(&self) -> &'static str {
        "nodejs"
    }
}
