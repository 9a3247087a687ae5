pub mod settings;

pub use settings::{AiProvider, AiSettings, AppSettings, DataSettings, Settings};
