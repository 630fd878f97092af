use serde_json::Value;

use crate::{
    error::AppResult,
    models::VibeBreakdown,
    services::language_model::LanguageModel,
};

/// Prompt asking for a strict-JSON beginning/middle/end breakdown
pub fn vibe_prompt(plot: &str) -> String {
    format!(
        r#"Analyze the following movie plot. Describe the "vibe" of the movie at the beginning, middle, and end.
For each part (Beginning, Middle, End), provide a short "vibe" title (2-3 words, e.g., "Hopeful Start", "Dark Twist", "Action-Packed Climax") and a one-sentence description.
Return the response ONLY as a valid JSON object with the keys "beginning", "middle", and "end". Each key should have an object with "vibe" and "description" as its properties. Do not include any other text or markdown formatting.

Plot: "{}""#,
        plot
    )
}

/// Removes every Markdown code fence marker from a model reply
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses a (possibly fenced) model reply as JSON.
///
/// The shape is not checked: whatever JSON the model produced is returned.
pub fn parse_vibe_reply(reply: &str) -> AppResult<Value> {
    let cleaned = strip_code_fences(reply);
    Ok(serde_json::from_str(&cleaned)?)
}

/// Asks the model to split `plot` into beginning, middle and end vibes
pub async fn analyze_plot(model: &dyn LanguageModel, plot: &str) -> AppResult<Value> {
    let reply = model.generate(&vibe_prompt(plot)).await?;
    let vibe = parse_vibe_reply(&reply)?;

    match serde_json::from_value::<VibeBreakdown>(vibe.clone()) {
        Ok(breakdown) => tracing::info!(
            beginning = %breakdown.beginning.vibe,
            middle = %breakdown.middle.vibe,
            end = %breakdown.end.vibe,
            "Plot vibe analyzed"
        ),
        Err(e) => tracing::warn!(error = %e, "Vibe reply does not follow the requested shape"),
    }

    Ok(vibe)
}
