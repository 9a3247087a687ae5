use linguatalk_config::Settings;
use linguatalk_storage::{FileAlignmentStore, FileTalkStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub talks: Arc<FileTalkStore>,
    pub alignments: Arc<FileAlignmentStore>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let talks_dir = settings.talks_dir();
        Self {
            talks: Arc::new(FileTalkStore::new(talks_dir.clone())),
            alignments: Arc::new(FileAlignmentStore::new(talks_dir)),
            settings,
        }
    }
}
