pub mod alignment_store;
pub mod talk_store;

pub use alignment_store::FileAlignmentStore;
pub use talk_store::FileTalkStore;
