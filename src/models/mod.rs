pub mod like;
pub mod movie;
pub mod vibe;

pub use like::{Like, LikedMovie, UserIdentity};
pub use movie::{MovieDetails, MovieSummary, OmdbSearch, OmdbStatus, SearchPage, NOT_AVAILABLE};
pub use vibe::{VibeBreakdown, VibeSegment};
