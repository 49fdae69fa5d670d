pub mod dictionary;
pub mod error;
pub mod language;
pub mod normalize;
pub mod preprocess;
pub mod repair;

pub use dictionary::DictionaryEntry;
pub use error::{NormalizeError, RepairError};
pub use language::{LanguagePair, LanguageTable};
pub use normalize::normalize;
pub use repair::{parse_payload, repair};
