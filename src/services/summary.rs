pub const NOTHING_TO_SUMMARIZE: &str = "No reflections to summarize.";
pub const NO_REFLECTIONS_FOUND: &str = "No reflections found in the selected time period.";

/// Join reflections into one paragraph, verbatim apart from trimming. No advice is added.
pub fn summarize(reflections: &[String]) -> String {
    if reflections.is_empty() {
        return NOTHING_TO_SUMMARIZE.to_string();
    }

    let parts: Vec<&str> = reflections
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();

    if parts.is_empty() {
        return NO_REFLECTIONS_FOUND.to_string();
    }

    let mut summary = parts.join(". ");
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}
