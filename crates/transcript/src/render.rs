use crate::types::{SpeakerNames, Turn};

/// Serialize turns into the final text.
///
/// Stable output contract: `"Name: words"` per turn, turns separated by one
/// blank line, no trailing newline. Labels missing from `names` render as
/// themselves.
pub fn render_turns(turns: &[Turn], names: &SpeakerNames) -> String {
    let parts: Vec<String> = turns
        .iter()
        .map(|turn| format!("{}: {}", names.resolve(&turn.speaker), turn.text()))
        .collect();

    parts.join("\n\n").trim().to_string()
}
