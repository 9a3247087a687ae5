pub mod alignment;
pub mod language;
pub mod repository;
pub mod talk;

pub use alignment::{AlignmentIndex, SegmentSpan, WordSpan};
pub use language::{Language, UnknownLanguage};
pub use repository::{AlignmentRepository, StoreError, StoreResult, TalkRepository};
pub use talk::{InvalidTalkId, Talk, TalkId, TalkVersion};
