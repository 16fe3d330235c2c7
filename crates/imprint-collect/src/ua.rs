//! User-agent analysis: engine version tag and script engine detection.
//!
//! Both functions are pure string scans so they can be unit tested without
//! any environment.

/// Engine tokens recognized for the version tag. At a given position an
/// earlier token wins, so `Edg/120` tags as `Edg-120` even though `Edge`
/// is also listed.
const ENGINE_TOKENS: &[&str] = &["Chrome", "Firefox", "Safari", "Edg", "OPR", "Edge"];

/// Derive a `Token-Major` tag from the leftmost engine token followed by a
/// slash and a version number, or `"unknown"`.
pub fn engine_version_tag(ua: &str) -> String {
    for (pos, _) in ua.char_indices() {
        for token in ENGINE_TOKENS {
            if let Some(rest) = ua[pos..].strip_prefix(token) {
                if let Some(after_slash) = rest.strip_prefix('/') {
                    if let Some(major) = leading_digits(after_slash) {
                        return format!("{token}-{major}");
                    }
                }
            }
        }
    }
    "unknown".to_string()
}

fn leading_digits(s: &str) -> Option<&str> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    (end > 0).then(|| &s[..end])
}

/// Script engine heuristic over the user-agent string.
///
/// Chromium-family and Node agents report V8; Firefox reports
/// SpiderMonkey; a Safari token without Chrome reports JavaScriptCore.
pub fn script_engine(ua: &str) -> &'static str {
    if ua.contains("Chrome") || ua.contains("Node") {
        return "V8";
    }
    if ua.contains("Firefox") {
        return "SpiderMonkey";
    }
    if ua.contains("Safari") {
        return "JavaScriptCore";
    }
    "Unknown"
}
