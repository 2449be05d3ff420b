pub mod decode;
pub mod error;
pub mod raw;

pub use decode::{decode_game, from_raw, read_game};
pub use error::{IngestError, Result};
