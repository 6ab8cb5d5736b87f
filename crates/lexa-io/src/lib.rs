pub mod audio;
pub mod clipboard;

pub use audio::AudioPlayer;
pub use clipboard::copy_text;
