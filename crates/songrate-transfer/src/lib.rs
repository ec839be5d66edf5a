pub mod dto;
pub mod json_codec;

pub use dto::{RecordDto, SessionEnvelope};
pub use json_codec::JsonSessionCodec;
