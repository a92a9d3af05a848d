use std::collections::BTreeMap;

/// One contiguous run of speech attributed to a single speaker.
///
/// `words` holds the accumulated text fragments in stream order; a fragment
/// is one word for item-level payloads and one segment transcript for
/// pre-joined payloads. Immutable once flushed by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub speaker: String,
    pub words: Vec<String>,
}

impl Turn {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Display names for speaker labels, supplied by the caller.
///
/// Lookups fall back to the raw label, so a partial (or empty) map is always
/// safe. Iteration order is the label order, which keeps output and tests
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpeakerNames(BTreeMap<String, String>);

impl SpeakerNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, name: impl Into<String>) {
        self.0.insert(label.into(), name.into());
    }

    /// The display name for `label`, or the label itself when unmapped.
    pub fn resolve<'a>(&'a self, label: &'a str) -> &'a str {
        self.0.get(label).map(String::as_str).unwrap_or(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for SpeakerNames {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of [`crate::render`]: the final text plus the name map that was
/// applied to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub speaker_names: SpeakerNames,
}
