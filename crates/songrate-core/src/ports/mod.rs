pub mod transfer;

pub use transfer::{SessionCodec, TransferError};
