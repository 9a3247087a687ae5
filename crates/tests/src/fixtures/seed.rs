use serde_json::{Value, json};

use super::test_app::TestApp;

impl TestApp {
    /// Write a complete talk version (text + audio) for each language.
    ///
    /// The text file's first line doubles as the talk title.
    pub fn seed_talk(&self, dir_name: &str, title: &str, languages: &[&str]) {
        for language in languages {
            let dir = self.talks_dir().join(dir_name).join(language);
            std::fs::create_dir_all(&dir).expect("Failed to create version dir");
            std::fs::write(dir.join("talk.txt"), format!("{title}\n\nHello world again."))
                .expect("Failed to write text");
            std::fs::write(dir.join("talk.mp3"), b"\xff\xfb\x90\x00fake-mpeg-frames")
                .expect("Failed to write audio");
        }
    }

    /// Write a version directory with text but no audio, which must not
    /// count as available.
    pub fn seed_text_only(&self, dir_name: &str, language: &str) {
        let dir = self.talks_dir().join(dir_name).join(language);
        std::fs::create_dir_all(&dir).expect("Failed to create version dir");
        std::fs::write(dir.join("talk.txt"), "Text without audio").expect("Failed to write text");
    }

    /// Write raw `alignment.json` contents for a version.
    pub fn seed_alignment_raw(&self, dir_name: &str, language: &str, contents: &str) {
        let dir = self.talks_dir().join(dir_name).join(language);
        std::fs::create_dir_all(&dir).expect("Failed to create version dir");
        std::fs::write(dir.join("alignment.json"), contents)
            .expect("Failed to write alignment");
    }

    pub fn seed_alignment(&self, dir_name: &str, language: &str, document: &Value) {
        self.seed_alignment_raw(dir_name, language, &document.to_string());
    }
}

/// Two-segment alignment: `seg-000` with two words and an inter-word gap
/// at 0.55, then a wordless `seg-001` sharing the 2.5 boundary.
pub fn sample_alignment(talk_id: &str, language: &str) -> Value {
    json!({
        "talk_id": talk_id,
        "language": language,
        "segments": [
            {
                "segment_id": "seg-000",
                "text": "Hello world",
                "start_time": 0.0,
                "end_time": 2.5,
                "words": [
                    {"word": "Hello", "start_time": 0.0, "end_time": 0.5, "confidence": 0.99},
                    {"word": "world", "start_time": 0.6, "end_time": 1.2, "confidence": 0.95}
                ]
            },
            {
                "segment_id": "seg-001",
                "text": "",
                "start_time": 2.5,
                "end_time": 5.0,
                "words": []
            }
        ]
    })
}
