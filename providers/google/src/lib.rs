pub mod decode;
pub mod translator;

pub use decode::decode_body;
pub use translator::GoogleTranslator;
