//! Dominant emotion and sorted score distribution.
//!
//! Two label sets exist over the same scores: the display label used for
//! the dominant pick ("Happy") and the field name used for the full
//! distribution ("Happiness").

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Anger,
    Contempt,
    Disgust,
    Fear,
    Happiness,
    Neutral,
    Sadness,
    Surprise,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Anger,
        Emotion::Contempt,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happiness,
        Emotion::Neutral,
        Emotion::Sadness,
        Emotion::Surprise,
    ];

    /// User-facing adjective.
    pub fn display_label(self) -> &'static str {
        match self {
            Emotion::Anger => "Angry",
            Emotion::Contempt => "Contempt",
            Emotion::Disgust => "Disgusted",
            Emotion::Fear => "Feared",
            Emotion::Happiness => "Happy",
            Emotion::Neutral => "Neutral",
            Emotion::Sadness => "Sad",
            Emotion::Surprise => "Surprised",
        }
    }

    /// Name of the score field in the detection payload.
    pub fn field_name(self) -> &'static str {
        match self {
            Emotion::Anger => "Anger",
            Emotion::Contempt => "Contempt",
            Emotion::Disgust => "Disgust",
            Emotion::Fear => "Fear",
            Emotion::Happiness => "Happiness",
            Emotion::Neutral => "Neutral",
            Emotion::Sadness => "Sadness",
            Emotion::Surprise => "Surprise",
        }
    }
}

/// Independent per-emotion confidences in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionScores {
    pub anger: f64,
    pub contempt: f64,
    pub disgust: f64,
    pub fear: f64,
    pub happiness: f64,
    pub neutral: f64,
    pub sadness: f64,
    pub surprise: f64,
}

impl EmotionScores {
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Contempt => self.contempt,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Happiness => self.happiness,
            Emotion::Neutral => self.neutral,
            Emotion::Sadness => self.sadness,
            Emotion::Surprise => self.surprise,
        }
    }

    /// All emotions, highest score first, ties by ascending `label`.
    fn ranked_by(&self, label: fn(Emotion) -> &'static str) -> [Emotion; 8] {
        let mut order = Emotion::ALL;
        order.sort_by(|&a, &b| descending_score_then_label(self, a, b, label));
        order
    }

    /// Highest-scoring emotion, ties broken by display label.
    pub fn dominant(&self) -> Emotion {
        self.ranked_by(Emotion::display_label)[0]
    }

    /// `(field name, score)` pairs, highest score first, ties by field name.
    pub fn ranked(&self) -> Vec<(&'static str, f64)> {
        self.ranked_by(Emotion::field_name)
            .into_iter()
            .map(|e| (e.field_name(), self.score(e)))
            .collect()
    }
}

fn descending_score_then_label(
    scores: &EmotionScores,
    a: Emotion,
    b: Emotion,
    label: fn(Emotion) -> &'static str,
) -> Ordering {
    // `+ 0.0` folds -0.0 into 0.0 so equal scores reach the label tie-break
    let (sa, sb) = (scores.score(a) + 0.0, scores.score(b) + 0.0);
    sb.total_cmp(&sa).then_with(|| label(a).cmp(label(b)))
}

/// Display label of the dominant emotion, e.g. `"Happy"`.
pub fn dominant_emotion(scores: &EmotionScores) -> &'static str {
    scores.dominant().display_label()
}

/// Full distribution keyed by field name, in a stable total order.
pub fn ranked_distribution(scores: &EmotionScores) -> Vec<(&'static str, f64)> {
    scores.ranked()
}
