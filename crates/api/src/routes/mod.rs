pub mod playback;
pub mod talks;
