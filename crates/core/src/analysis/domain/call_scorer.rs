use crate::shared::math::round2;

/// Starting score before adjustments.
pub const BASE_SCORE: f64 = 70.0;
/// Filler ratio up to this level costs nothing.
pub const FILLER_ALLOWANCE: f64 = 0.05;
/// Points lost per unit of filler ratio beyond the allowance.
pub const FILLER_PENALTY_RATE: f64 = 500.0;
/// Points per question asked.
pub const QUESTION_POINTS: f64 = 2.0;
/// Question bonus never exceeds this.
pub const QUESTION_BONUS_CAP: f64 = 15.0;
/// Weight of the normalized sentiment score.
pub const SENTIMENT_WEIGHT: f64 = 10.0;
/// Flat bonus for closing with any next step.
pub const NEXT_STEP_BONUS: f64 = 10.0;

/// Metric summary feeding the composite score.
pub struct ScoreInputs {
    pub total_words: usize,
    pub filler_words: usize,
    pub questions_asked: usize,
    /// Normalized sentiment in [-1, 1].
    pub sentiment_score: f64,
    pub has_next_steps: bool,
}

/// Folds the sub-metrics into one 0-100 call quality score.
pub struct CallScorer;

impl CallScorer {
    pub fn composite(inputs: &ScoreInputs) -> f64 {
        let mut score = BASE_SCORE;

        let filler_ratio = if inputs.total_words == 0 {
            0.0
        } else {
            inputs.filler_words as f64 / inputs.total_words as f64
        };
        if filler_ratio > FILLER_ALLOWANCE {
            score -= (filler_ratio - FILLER_ALLOWANCE) * FILLER_PENALTY_RATE;
        }

        score += (inputs.questions_asked as f64 * QUESTION_POINTS).min(QUESTION_BONUS_CAP);
        score += inputs.sentiment_score * SENTIMENT_WEIGHT;
        if inputs.has_next_steps {
            score += NEXT_STEP_BONUS;
        }

        round2(score.clamp(0.0, 100.0))
    }
}
