pub mod rating;
pub mod record;

pub use rating::{AvgRating, Rating, feedback_for};
pub use record::SongRecord;
