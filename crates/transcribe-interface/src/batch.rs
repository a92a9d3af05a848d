use serde::{Deserialize, Serialize};

// https://docs.aws.amazon.com/transcribe/latest/dg/how-input.html#how-it-works-output
//
// Two result-file shapes exist in the wild. Older jobs carry a flat
// `results.items` word stream plus `results.speaker_labels.segments`
// (timing-based attribution); newer jobs additionally or exclusively carry
// `results.audio_segments`, which are already joined per speaker.

/// One batch-transcription result file, as fetched from the job's result URI
/// or read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptFile {
    #[serde(rename = "jobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(rename = "accountId", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub results: Results,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub transcripts: Vec<TranscriptText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_labels: Option<SpeakerLabels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_segments: Option<Vec<AudioSegment>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptText {
    pub transcript: String,
}

/// Diarization block: an optional declared speaker count plus the
/// speaker-attributed time segments.
///
/// The count field has been observed under two names (`speakers` and
/// `speakers_count`) and as both a JSON number and a decimal string, so both
/// spellings are modeled and the value stays lenient until coerced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeakerLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers: Option<CountField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers_count: Option<CountField>,
    #[serde(default)]
    pub segments: Vec<LabeledSegment>,
}

/// A count that may arrive as a JSON number or as a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountField {
    Number(u64),
    Text(String),
}

impl CountField {
    /// Coerce to a count. `None` means the value is present but not numeric.
    pub fn to_count(&self) -> Option<usize> {
        match self {
            Self::Number(n) => usize::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One diarized time window attributed to a single speaker.
///
/// `items` holds the segment's own per-word attribution records. Their
/// contents are not used for reconstruction (words come from the flat
/// `results.items` stream via interval containment), but their *presence*
/// marks the segment as usable — a segment without the marker is skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledSegment {
    pub speaker_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SegmentItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// One word or punctuation mark from the flat item stream.
///
/// Punctuation items carry no timestamps and therefore cannot be attributed
/// to a speaker window; [`Item::window`] returns `None` for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

/// One pre-joined segment: speaker label plus its transcript text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub speaker_label: String,
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<u64>>,
}

// Timestamps arrive as decimal strings ("12.34"). An absent or unparsable
// value is treated as "no timestamp" so a single bad record degrades to a
// skip instead of failing the whole file.
fn parse_secs(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
}

impl Item {
    /// Time window in seconds, if the item carries both timestamps.
    pub fn window(&self) -> Option<(f64, f64)> {
        let start = parse_secs(self.start_time.as_deref())?;
        let end = parse_secs(self.end_time.as_deref())?;
        Some((start, end))
    }

    /// The first alternative's content. Alternatives are ordered by the
    /// producer; the first is the accepted reading.
    pub fn first_content(&self) -> Option<&str> {
        self.alternatives.first().map(|a| a.content.as_str())
    }
}

impl LabeledSegment {
    /// Time window in seconds, if the segment carries both timestamps.
    pub fn window(&self) -> Option<(f64, f64)> {
        let start = parse_secs(self.start_time.as_deref())?;
        let end = parse_secs(self.end_time.as_deref())?;
        Some((start, end))
    }
}
