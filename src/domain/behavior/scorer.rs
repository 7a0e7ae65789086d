//! Feature Scorer - maps a transcript and optional acoustic features onto the
//! assertiveness and emotionality axes.
//!
//! Every keyword is matched as a case-insensitive substring and every
//! occurrence counts. Both axes are clamped before they are returned.

use super::features::{AcousticFeatures, EmotionalTone};
use super::profile::AxisScores;

/// Direct commitment, urgency and decision language.
pub const ASSERTIVE_VOCABULARY: &[&str] = &[
    "decidir",
    "decisão",
    "quero",
    "vou",
    "preciso",
    "agora",
    "rápido",
    "urgente",
    "imediato",
    "resultado",
    "quanto",
    "roi",
    "prazo",
    "fechar",
    "objetivo",
    "direto",
    "concreto",
    "certeza",
    "totalmente",
    "completamente",
];

/// Hesitation and question language.
pub const HESITATION_VOCABULARY: &[&str] = &[
    "como",
    "quando",
    "por que",
    "posso",
    "poderia",
    "talvez",
    "será",
    "não sei",
    "acho",
    "dúvida",
    "hmm",
];

/// Emotional and relational language.
pub const EMOTIONAL_VOCABULARY: &[&str] = &[
    "sentir",
    "sinto",
    "incrível",
    "preocupado",
    "animado",
    "empolgado",
    "equipe",
    "pessoas",
    "imaginar",
    "transformar",
    "adoro",
    "amo",
    "feliz",
    "relacionamento",
    "confiança",
    "juntos",
    "sonho",
];

/// Rational and data-oriented language.
pub const RATIONAL_VOCABULARY: &[&str] = &[
    "dados",
    "números",
    "análise",
    "lógico",
    "lógica",
    "evidência",
    "prova",
    "custa",
    "custo",
    "métrica",
    "percentual",
    "estatística",
    "planilha",
    "comparar",
    "detalhe",
];

pub const ASSERTIVE_WEIGHT: i32 = 15;
pub const HESITATION_WEIGHT: i32 = 10;
pub const EMOTIONAL_WEIGHT: i32 = 15;
pub const RATIONAL_WEIGHT: i32 = 15;

/// Words per minute above which speech counts as fast.
pub const FAST_PACE_WPM: f64 = 150.0;
/// Volume above which speech counts as loud.
pub const LOUD_VOLUME: f64 = 70.0;
/// Pause frequency below which speech counts as fluent.
pub const FEW_PAUSES: f64 = 3.0;
/// Energy above which speech counts as energetic.
pub const HIGH_ENERGY: f64 = 70.0;
/// Pitch above which the voice counts as high.
pub const HIGH_PITCH_HZ: f64 = 220.0;

const FAST_PACE_BONUS: i32 = 10;
const LOUD_VOLUME_BONUS: i32 = 10;
const FEW_PAUSES_BONUS: i32 = 15;
const HIGH_ENERGY_ASSERTIVE_BONUS: i32 = 10;

const SENTENCE_WEIGHT: i32 = 10;
const SENTENCE_BONUS_CAP: i32 = 20;

const HIGH_ENERGY_EMOTIONAL_BONUS: i32 = 10;
const HIGH_PITCH_BONUS: i32 = 10;
const EXCLAMATION_BONUS: i32 = 10;

/// Declarative versus interrogative sentence counts.
///
/// Sentences are split on `.`, `!` and `?`; a sentence is interrogative iff
/// it ends with `?`. Trailing text without punctuation counts as declarative
/// and fragments with no word characters are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentenceStats {
    pub declarative: usize,
    pub interrogative: usize,
}

impl SentenceStats {
    pub fn from_text(text: &str) -> Self {
        let mut stats = SentenceStats::default();
        let mut has_content = false;

        for ch in text.chars() {
            match ch {
                '.' | '!' | '?' => {
                    if has_content {
                        if ch == '?' {
                            stats.interrogative += 1;
                        } else {
                            stats.declarative += 1;
                        }
                    }
                    has_content = false;
                }
                c if c.is_alphanumeric() => has_content = true,
                _ => {}
            }
        }

        if has_content {
            stats.declarative += 1;
        }

        stats
    }

    pub fn total(&self) -> usize {
        self.declarative + self.interrogative
    }
}

/// Counts every occurrence of every vocabulary entry in an already
/// lower-cased text.
pub fn count_occurrences(lowered: &str, vocabulary: &[&str]) -> usize {
    vocabulary
        .iter()
        .map(|word| lowered.matches(word).count())
        .sum()
}

/// Stateless axis scorer.
pub struct FeatureScorer;

impl FeatureScorer {
    /// Scores both axes for one utterance.
    pub fn score_axes(transcript: &str, features: Option<&AcousticFeatures>) -> AxisScores {
        AxisScores::new(
            Self::assertiveness(transcript, features),
            Self::emotionality(transcript, features),
        )
    }

    /// Raw assertiveness before clamping.
    pub fn assertiveness(transcript: &str, features: Option<&AcousticFeatures>) -> i32 {
        let lowered = transcript.to_lowercase();

        let mut score = weighted(&lowered, ASSERTIVE_VOCABULARY, ASSERTIVE_WEIGHT)
            - weighted(&lowered, HESITATION_VOCABULARY, HESITATION_WEIGHT);

        if let Some(features) = features {
            if features.pace > FAST_PACE_WPM {
                score += FAST_PACE_BONUS;
            }
            if features.volume > LOUD_VOLUME {
                score += LOUD_VOLUME_BONUS;
            }
            if features.pause_frequency < FEW_PAUSES {
                score += FEW_PAUSES_BONUS;
            }
            if features.energy > HIGH_ENERGY {
                score += HIGH_ENERGY_ASSERTIVE_BONUS;
            }
        }

        score + Self::sentence_bonus(&SentenceStats::from_text(transcript))
    }

    /// Raw emotionality before clamping.
    pub fn emotionality(transcript: &str, features: Option<&AcousticFeatures>) -> i32 {
        let lowered = transcript.to_lowercase();

        let mut score = weighted(&lowered, EMOTIONAL_VOCABULARY, EMOTIONAL_WEIGHT)
            - weighted(&lowered, RATIONAL_VOCABULARY, RATIONAL_WEIGHT);

        if let Some(features) = features {
            score += Self::tone_bonus(features.emotional_tone);
            if features.energy > HIGH_ENERGY {
                score += HIGH_ENERGY_EMOTIONAL_BONUS;
            }
            if features.pitch > HIGH_PITCH_HZ {
                score += HIGH_PITCH_BONUS;
            }
        }

        let exclamations = saturating_i32(transcript.matches('!').count());
        score.saturating_add(exclamations.saturating_mul(EXCLAMATION_BONUS))
    }

    /// Positive outweighs negative, which outweighs mixed; neutral pulls down.
    pub fn tone_bonus(tone: EmotionalTone) -> i32 {
        match tone {
            EmotionalTone::Positive => 25,
            EmotionalTone::Negative => 15,
            EmotionalTone::Mixed => 10,
            EmotionalTone::Neutral => -5,
        }
    }

    /// Grows with the declarative-to-interrogative ratio, capped.
    pub fn sentence_bonus(stats: &SentenceStats) -> i32 {
        if stats.total() == 0 {
            return 0;
        }
        let declarative = saturating_i32(stats.declarative);
        let interrogative = saturating_i32(stats.interrogative);
        (declarative.saturating_mul(SENTENCE_WEIGHT) / interrogative.saturating_add(1))
            .min(SENTENCE_BONUS_CAP)
    }
}

fn weighted(lowered: &str, vocabulary: &[&str], weight: i32) -> i32 {
    saturating_i32(count_occurrences(lowered, vocabulary)).saturating_mul(weight)
}

fn saturating_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loud_fast_features() -> AcousticFeatures {
        AcousticFeatures {
            pace: 170.0,
            volume: 80.0,
            pitch: 240.0,
            energy: 85.0,
            pause_frequency: 1.0,
            emotional_tone: EmotionalTone::Positive,
        }
    }

    #[test]
    fn sentence_stats_split_on_terminators() {
        let stats = SentenceStats::from_text("Quero isso. Quando chega? Ótimo!");
        assert_eq!(stats.declarative, 2);
        assert_eq!(stats.interrogative, 1);
    }

    #[test]
    fn sentence_stats_count_unterminated_tail_as_declarative() {
        let stats = SentenceStats::from_text("Me mande a proposta");
        assert_eq!(stats, SentenceStats { declarative: 1, interrogative: 0 });
    }

    #[test]
    fn sentence_stats_ignore_empty_fragments() {
        let stats = SentenceStats::from_text("Sério?! ... ok");
        assert_eq!(stats.interrogative, 1);
        assert_eq!(stats.declarative, 1);
    }

    #[test]
    fn count_occurrences_counts_every_match() {
        assert_eq!(count_occurrences("quero, quero e quero", &["quero"]), 3);
        assert_eq!(count_occurrences("nada aqui", &["quero"]), 0);
    }

    #[test]
    fn assertive_words_raise_assertiveness() {
        let score = FeatureScorer::assertiveness("Quero decidir agora", None);
        // quero + decidir + agora, one declarative sentence
        assert_eq!(score, 3 * ASSERTIVE_WEIGHT + 10);
    }

    #[test]
    fn hesitation_words_lower_assertiveness() {
        let score = FeatureScorer::assertiveness("talvez, não sei", None);
        assert_eq!(score, -2 * HESITATION_WEIGHT + 10);
    }

    #[test]
    fn questions_shrink_sentence_bonus() {
        assert_eq!(
            FeatureScorer::sentence_bonus(&SentenceStats { declarative: 1, interrogative: 1 }),
            5
        );
        assert_eq!(
            FeatureScorer::sentence_bonus(&SentenceStats { declarative: 0, interrogative: 3 }),
            0
        );
        assert_eq!(
            FeatureScorer::sentence_bonus(&SentenceStats { declarative: 9, interrogative: 0 }),
            20
        );
    }

    #[test]
    fn acoustic_features_add_assertive_bonuses() {
        let without = FeatureScorer::assertiveness("ok", None);
        let with = FeatureScorer::assertiveness("ok", Some(&loud_fast_features()));
        assert_eq!(with - without, 10 + 10 + 15 + 10);
    }

    #[test]
    fn tone_bonus_ordering() {
        let positive = FeatureScorer::tone_bonus(EmotionalTone::Positive);
        let negative = FeatureScorer::tone_bonus(EmotionalTone::Negative);
        let mixed = FeatureScorer::tone_bonus(EmotionalTone::Mixed);
        let neutral = FeatureScorer::tone_bonus(EmotionalTone::Neutral);

        assert!(positive > negative);
        assert!(negative > mixed);
        assert!(mixed > neutral);
        assert!(neutral < 0);
    }

    #[test]
    fn exclamations_raise_emotionality() {
        assert_eq!(FeatureScorer::emotionality("Uau!!", None), 2 * EXCLAMATION_BONUS);
    }

    #[test]
    fn rational_words_lower_emotionality() {
        let score = FeatureScorer::emotionality("Mostre os dados e os números", None);
        assert_eq!(score, -2 * RATIONAL_WEIGHT);
    }

    #[test]
    fn neutral_tone_adjusts_emotionality_down() {
        let score = FeatureScorer::emotionality("ok", Some(&AcousticFeatures::neutral()));
        assert_eq!(score, -5);
    }

    #[test]
    fn energetic_high_pitched_voice_raises_emotionality() {
        let score = FeatureScorer::emotionality("ok", Some(&loud_fast_features()));
        assert_eq!(score, 25 + 10 + 10);
    }

    #[test]
    fn score_axes_clamps_extreme_input() {
        let transcript = "quero agora! ".repeat(200);
        let axes = FeatureScorer::score_axes(&transcript, Some(&loud_fast_features()));
        assert_eq!(axes.assertiveness, 100);
        assert_eq!(axes.emotionality, 100);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            FeatureScorer::assertiveness("PRECISO", None),
            FeatureScorer::assertiveness("preciso", None)
        );
    }
}
