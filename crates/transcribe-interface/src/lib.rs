pub mod batch;

pub use batch::{
    Alternative, AudioSegment, CountField, Item, LabeledSegment, Results, SpeakerLabels,
    TranscriptFile, TranscriptText,
};
