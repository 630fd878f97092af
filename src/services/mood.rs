use crate::{
    error::{AppError, AppResult},
    models::MovieDetails,
    services::{language_model::LanguageModel, providers::MovieProvider},
};

pub const SUGGESTION_NOT_FOUND: &str = "Could not find details for the suggested movie.";

/// Prompt asking the model for exactly one movie title
pub fn suggestion_prompt(mood: &str) -> String {
    format!(
        "Suggest one single, classic, and well-known movie title that fits the mood \"{}\". \
         Return only the movie title and nothing else.",
        mood
    )
}

/// Reduces a model reply to the bare title it names
pub fn clean_title(reply: &str) -> &str {
    reply
        .trim()
        .trim_matches(|c| c == '"' || c == '*' || c == '`')
        .trim()
}

/// Asks the model for a movie matching `mood`, then resolves it through the
/// movie database.
pub async fn suggest_for_mood(
    model: &dyn LanguageModel,
    provider: &dyn MovieProvider,
    mood: &str,
) -> AppResult<MovieDetails> {
    let reply = model.generate(&suggestion_prompt(mood)).await?;
    let title = clean_title(&reply);

    if title.is_empty() {
        return Err(AppError::LanguageModel(
            "Model suggested an empty title".to_string(),
        ));
    }

    tracing::info!(mood = %mood, suggested = %title, "Model suggested a title");

    provider.find_by_title(title).await.map_err(|e| match e {
        AppError::NotFound(_) => AppError::NotFound(SUGGESTION_NOT_FOUND.to_string()),
        other => other,
    })
}
