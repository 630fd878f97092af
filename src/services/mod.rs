pub mod language_model;
pub mod mood;
pub mod movie_search;
pub mod providers;
pub mod recommendations;
pub mod vibe;

pub use language_model::{GeminiClient, LanguageModel};
pub use providers::{MovieProvider, OmdbProvider};
