pub fn config_loaded(user: &str) -> String {
    format!("Loaded configuration for user: {user}")
}

pub const STARTING: &str = "Starting profile-readme...";
pub const NO_TOKEN: &str = "No access token set (GH_TOKEN); using unauthenticated requests";

pub fn fetcher_fallback(what: &str, err: &str) -> String {
    format!("Failed to fetch {what}, using default: {err}")
}

pub fn repo_skipped(repo: &str, what: &str, err: &str) -> String {
    format!("Skipping {what} for {repo}: {err}")
}

pub fn collected(key: &str, value: &str) -> String {
    let preview = value.lines().next().unwrap_or_default();
    format!("{key} = {preview}")
}

pub fn template_rendered(path: &str, keys: usize) -> String {
    format!("Rendered {keys} placeholder(s) into {path}")
}

pub fn updated_successfully(path: &str) -> String {
    format!("{path} updated successfully!")
}

pub fn font_fallback(path: &str, err: &str) -> String {
    format!("Could not load FIGlet font {path}, using the standard font: {err}")
}

pub const ASCII_ART_FALLBACK: &str = "FIGlet rendering failed, falling back to speech bubble";
