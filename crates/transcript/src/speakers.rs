use std::collections::BTreeSet;

use scribe_transcribe_interface::TranscriptFile;

use crate::TranscriptError;

/// How many distinct speakers the payload claims or implies.
///
/// A declared count field wins; it fails as malformed only when present but
/// non-numeric. Without one, the count is the number of distinct labels
/// across whichever segment stream the file carries — zero segments is a
/// valid answer of zero, never an error.
pub fn resolve_speaker_count(file: &TranscriptFile) -> Result<usize, TranscriptError> {
    let results = &file.results;

    if let Some(labels) = &results.speaker_labels {
        if let Some(count) = labels.speakers.as_ref().or(labels.speakers_count.as_ref()) {
            return count.to_count().ok_or_else(|| {
                TranscriptError::MalformedPayload("speaker count is not numeric".into())
            });
        }
        return Ok(distinct(
            labels.segments.iter().map(|s| s.speaker_label.as_str()),
        ));
    }

    if let Some(segments) = results.audio_segments.as_deref() {
        return Ok(distinct(segments.iter().map(|s| s.speaker_label.as_str())));
    }

    Ok(0)
}

/// The canonical label for speaker `index`, as emitted by the producer.
pub fn speaker_label(index: usize) -> String {
    format!("spk_{index}")
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.collect::<BTreeSet<_>>().len()
}
