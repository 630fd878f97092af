use serde::{Deserialize, Serialize};

/// Mood of one part of a plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VibeSegment {
    /// Short label, e.g. "Dark Twist"
    pub vibe: String,
    /// One-sentence description
    pub description: String,
}

/// Beginning/middle/end breakdown of a movie's plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VibeBreakdown {
    pub beginning: VibeSegment,
    pub middle: VibeSegment,
    pub end: VibeSegment,
}
