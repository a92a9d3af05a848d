use scribe_transcribe_interface::{AudioSegment, Item, LabeledSegment, TranscriptFile};

use crate::TranscriptError;

/// The two known payload shapes, discriminated once at the entry point.
///
/// Borrowed views into the parsed file — classification allocates nothing.
#[derive(Debug, Clone, Copy)]
pub enum TranscriptPayload<'a> {
    /// Flat word stream plus diarized speaker windows. Words must be
    /// attributed to windows by interval containment.
    Items {
        items: &'a [Item],
        segments: &'a [LabeledSegment],
    },
    /// Pre-joined segments carrying both speaker label and text.
    AudioSegments { segments: &'a [AudioSegment] },
}

impl<'a> TranscriptPayload<'a> {
    /// Pick the shape this file is in.
    ///
    /// Pre-joined segments win when both shapes are present: they encode the
    /// same attribution without needing interval matching. A file with
    /// neither shape (or with speaker windows but no word stream) cannot be
    /// reconstructed and is rejected.
    pub fn classify(file: &'a TranscriptFile) -> Result<Self, TranscriptError> {
        let results = &file.results;

        if let Some(segments) = results.audio_segments.as_deref() {
            return Ok(Self::AudioSegments { segments });
        }

        if let Some(labels) = &results.speaker_labels {
            let items = results.items.as_deref().ok_or_else(|| {
                TranscriptError::MalformedPayload(
                    "results.speaker_labels present but results.items missing".into(),
                )
            })?;
            return Ok(Self::Items {
                items,
                segments: &labels.segments,
            });
        }

        Err(TranscriptError::MalformedPayload(
            "results has neither speaker_labels/items nor audio_segments".into(),
        ))
    }
}
