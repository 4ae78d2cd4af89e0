use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex must compile"));

/// Turns a display name into a URL-safe connector slug.
///
/// The name is lowercased, every run of characters outside `a-z0-9` becomes
/// a single `-`, and leading or trailing dashes are removed.
///
/// # Examples
///
/// ```
/// use connector_sdk_registry::slugify;
///
/// assert_eq!(slugify("Google Sheets"), "google-sheets");
/// assert_eq!(slugify("  HTTP / REST API  "), "http-rest-api");
/// assert_eq!(slugify("OpenAI (GPT-4)"), "openai-gpt-4");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALPHANUMERIC_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
