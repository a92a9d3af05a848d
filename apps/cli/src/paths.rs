use std::path::{Path, PathBuf};

use anyhow::bail;

/// Clean up a path as typed or pasted into a terminal prompt.
///
/// Accepts the path quoted (`'/tmp/my file.json'`) or with shell escapes
/// (`/tmp/my\ file\(1\).json`), tries the plausible readings in order, and
/// returns the first one that exists on disk.
pub fn sanitize_path(raw: &str) -> anyhow::Result<PathBuf> {
    let trimmed = raw.trim().trim_matches(|c| c == '\'' || c == '"');
    let collapsed = trimmed.replace("\\\\", "\\");

    let candidates = [collapsed.clone(), unescape(&collapsed)];

    let mut tried = Vec::new();
    for candidate in candidates {
        let candidate = candidate.trim().to_string();
        if tried.contains(&candidate) {
            continue;
        }
        if Path::new(&candidate).exists() {
            return Ok(PathBuf::from(candidate));
        }
        tried.push(candidate);
    }

    bail!(
        "could not find {raw:?} — pass the path in quotes or with escaped special characters"
    )
}

/// Output path next to the input: `<stem>_processed.txt`.
pub fn processed_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    input.with_file_name(format!("{stem}_processed.txt"))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
