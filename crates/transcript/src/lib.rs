//! # Segment reconstruction
//!
//! Joins a time-stamped word stream with a time-stamped speaker-segment
//! stream into coherent speaker turns, and renders them as readable text.
//!
//! Two upstream payload shapes are handled by one discriminant check at the
//! entry point ([`TranscriptPayload::classify`]), not by polymorphism:
//!
//! - **item-level**: a flat word/punctuation stream plus diarized speaker
//!   windows. Words are attributed to the window that fully contains them
//!   ([`matcher`]).
//! - **pre-joined**: segments that already carry both a speaker label and
//!   text. No matching needed, but consecutive same-speaker segments still
//!   have to be merged.
//!
//! Both shapes are normalized into a `(speaker, fragments)` stream and fed
//! through the [`aggregator::TurnAggregator`], which keeps the rest of the
//! pipeline schema-agnostic. The core is synchronous, pure, and does no I/O;
//! fetching payloads and collecting display names belong to the callers.

pub mod aggregator;
pub mod matcher;
pub mod payload;
pub mod render;
pub mod speakers;
pub mod types;

use scribe_transcribe_interface::TranscriptFile;

pub use aggregator::TurnAggregator;
pub use payload::TranscriptPayload;
pub use render::render_turns;
pub use speakers::{resolve_speaker_count, speaker_label};
pub use types::{Rendered, SpeakerNames, Turn};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Convert one parsed payload into readable text.
///
/// Deterministic given identical inputs. Labels missing from `names` render
/// as themselves, so an empty map is always safe. The returned [`Rendered`]
/// echoes the name map that was applied.
pub fn render(
    file: &TranscriptFile,
    names: &SpeakerNames,
) -> Result<Rendered, TranscriptError> {
    let payload = TranscriptPayload::classify(file)?;
    let turns = reconstruct_turns(&payload);
    let text = render_turns(&turns, names);

    Ok(Rendered {
        text,
        speaker_names: names.clone(),
    })
}

/// Normalize a payload into maximal same-speaker turns.
///
/// Segment order is trusted as time order; nothing is re-sorted here.
pub fn reconstruct_turns(payload: &TranscriptPayload<'_>) -> Vec<Turn> {
    let mut aggregator = TurnAggregator::new();

    match payload {
        TranscriptPayload::Items { items, segments } => {
            for segment in *segments {
                if segment.items.is_none() {
                    tracing::debug!(speaker = %segment.speaker_label, "segment without items marker, skipped");
                    continue;
                }
                let Some(window) = segment.window() else {
                    tracing::debug!(speaker = %segment.speaker_label, "segment without usable window, skipped");
                    continue;
                };
                let fragments = matcher::contained_fragments(items, window);
                aggregator.push(&segment.speaker_label, fragments);
            }
        }
        TranscriptPayload::AudioSegments { segments } => {
            for segment in *segments {
                aggregator.push(&segment.speaker_label, [segment.transcript.clone()]);
            }
        }
    }

    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn names(pairs: &[(&str, &str)]) -> SpeakerNames {
        pairs
            .iter()
            .map(|(label, name)| (label.to_string(), name.to_string()))
            .collect()
    }

    const ITEM_LEVEL_JSON: &str = indoc! {r#"
        {
            "jobName": "interview",
            "results": {
                "transcripts": [{ "transcript": "good morning everyone thanks" }],
                "speaker_labels": {
                    "speakers": 2,
                    "segments": [
                        {
                            "start_time": "0.0", "end_time": "2.0", "speaker_label": "spk_0",
                            "items": [{ "start_time": "0.1", "end_time": "0.8" }]
                        },
                        {
                            "start_time": "2.0", "end_time": "4.0", "speaker_label": "spk_1",
                            "items": [{ "start_time": "2.1", "end_time": "3.9" }]
                        }
                    ]
                },
                "items": [
                    {
                        "type": "pronunciation", "start_time": "0.1", "end_time": "0.8",
                        "alternatives": [{ "content": "good" }]
                    },
                    {
                        "type": "pronunciation", "start_time": "0.9", "end_time": "1.6",
                        "alternatives": [{ "content": "morning" }]
                    },
                    {
                        "type": "punctuation",
                        "alternatives": [{ "content": "," }]
                    },
                    {
                        "type": "pronunciation", "start_time": "2.1", "end_time": "2.9",
                        "alternatives": [{ "content": "everyone" }]
                    },
                    {
                        "type": "pronunciation", "start_time": "3.0", "end_time": "3.8",
                        "alternatives": [{ "content": "thanks" }]
                    }
                ]
            }
        }
    "#};

    const PRE_JOINED_JSON: &str = indoc! {r#"
        {
            "results": {
                "transcripts": [{ "transcript": "hello hi bye" }],
                "audio_segments": [
                    { "speaker_label": "spk_0", "transcript": "hello" },
                    { "speaker_label": "spk_1", "transcript": "hi" },
                    { "speaker_label": "spk_0", "transcript": "bye" }
                ]
            }
        }
    "#};

    #[test]
    fn item_level_end_to_end() {
        let file: scribe_transcribe_interface::TranscriptFile =
            serde_json::from_str(ITEM_LEVEL_JSON).unwrap();

        let rendered = render(&file, &names(&[("spk_0", "Ana"), ("spk_1", "Ben")])).unwrap();
        assert_eq!(rendered.text, "Ana: good morning\n\nBen: everyone thanks");
    }

    #[test]
    fn pre_joined_end_to_end() {
        let file: scribe_transcribe_interface::TranscriptFile =
            serde_json::from_str(PRE_JOINED_JSON).unwrap();

        let rendered = render(&file, &names(&[("spk_0", "Alice"), ("spk_1", "Bob")])).unwrap();
        assert_eq!(rendered.text, "Alice: hello\n\nBob: hi\n\nAlice: bye");
    }

    #[test]
    fn empty_name_map_falls_back_to_raw_labels() {
        let file: scribe_transcribe_interface::TranscriptFile =
            serde_json::from_str(PRE_JOINED_JSON).unwrap();

        let rendered = render(&file, &SpeakerNames::new()).unwrap();
        assert_eq!(rendered.text, "spk_0: hello\n\nspk_1: hi\n\nspk_0: bye");
    }

    #[test]
    fn empty_segment_list_renders_empty_string() {
        let file: scribe_transcribe_interface::TranscriptFile = serde_json::from_str(
            r#"{ "results": { "transcripts": [], "audio_segments": [] } }"#,
        )
        .unwrap();

        let rendered = render(&file, &SpeakerNames::new()).unwrap();
        assert_eq!(rendered.text, "");
        assert_eq!(resolve_speaker_count(&file).unwrap(), 0);
    }

    #[test]
    fn missing_structure_is_malformed() {
        let file: scribe_transcribe_interface::TranscriptFile =
            serde_json::from_str(r#"{ "results": { "transcripts": [] } }"#).unwrap();

        let err = render(&file, &SpeakerNames::new()).unwrap_err();
        assert!(matches!(err, TranscriptError::MalformedPayload(_)));
    }

    #[test]
    fn rendered_echoes_the_name_map() {
        let file: scribe_transcribe_interface::TranscriptFile =
            serde_json::from_str(PRE_JOINED_JSON).unwrap();
        let map = names(&[("spk_0", "Alice")]);

        let rendered = render(&file, &map).unwrap();
        assert_eq!(rendered.speaker_names, map);
    }
}
