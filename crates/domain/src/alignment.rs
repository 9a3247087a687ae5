use serde::{Deserialize, Serialize};

use crate::{Language, TalkId};

/// Word-level timing from audio alignment.
///
/// Intervals are closed on both ends: a time equal to `start_time` or
/// `end_time` is inside the word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSpan {
    #[serde(rename = "word")]
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    /// Alignment confidence in [0, 1]; producers that omit it get 1.0.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

impl WordSpan {
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }
}

/// Sentence/phrase-level alignment unit with word-level detail.
///
/// `words` is ordered by start time and expected, not enforced, to lie
/// within the segment's own interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpan {
    #[serde(rename = "segment_id")]
    pub id: String,
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default)]
    pub words: Vec<WordSpan>,
}

impl SegmentSpan {
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }
}

/// Full alignment for one talk version: segments ordered by start time.
///
/// Read-only after construction — when the backing file changes the index
/// is rebuilt wholesale, never mutated. Ordering and non-overlap are the
/// producer's responsibility; the lookups below stay well-defined on
/// malformed input (first match in sequence order wins) instead of
/// validating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentIndex {
    pub talk_id: TalkId,
    pub language: Language,
    #[serde(default)]
    pub segments: Vec<SegmentSpan>,
}

impl AlignmentIndex {
    pub fn new(talk_id: TalkId, language: Language, segments: Vec<SegmentSpan>) -> Self {
        Self {
            talk_id,
            language,
            segments,
        }
    }

    /// Finds the segment whose closed interval contains `time`.
    ///
    /// Linear scan in sequence order. With sorted, non-overlapping segments
    /// this could be a binary search over `start_time`, but non-overlap is
    /// not enforced at construction and the earliest matching segment must
    /// win, so the scan stays.
    pub fn segment_at(&self, time: f64) -> Option<&SegmentSpan> {
        self.segments.iter().find(|segment| segment.contains(time))
    }

    /// Finds the word being spoken at `time`.
    ///
    /// `None` when no segment matches, and also when `time` falls in an
    /// inter-word silence gap inside the matched segment — word-level and
    /// segment-level hits are independent outcomes.
    pub fn word_at(&self, time: f64) -> Option<&WordSpan> {
        self.segment_at(time)?
            .words
            .iter()
            .find(|word| word.contains(time))
    }

    /// Zero-based position of the segment containing `time`, for callers
    /// doing index-based work on their own copy of the segment list.
    pub fn segment_index_at(&self, time: f64) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| segment.contains(time))
    }
}
