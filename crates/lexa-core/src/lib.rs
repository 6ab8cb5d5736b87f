pub mod entry;
pub mod error;
pub mod lookup;
pub mod records;
pub mod types;

pub use entry::{Definition, Entry, Meaning, Phonetic, all_synonyms, first_audio_url};
pub use error::LookupError;
pub use lookup::Lexicon;
pub use records::{FavoriteRecord, HistoryRecord};
pub use types::{AppEvent, Intent, Update};
