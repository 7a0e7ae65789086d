//! Indicator / Reasoning Generator - human-readable evidence for a classification.
//!
//! Output is diagnostic only. Nothing downstream branches on it.

use serde::{Deserialize, Serialize};

use super::features::{AcousticFeatures, EmotionalTone};
use super::profile::{AxisScores, Profile};

/// Emitted when no indicator fires.
pub const GENERIC_INDICATOR: &str = "Padrões gerais de comunicação identificados";

/// How many indicators the reasoning sentence quotes.
const REASONING_INDICATORS: usize = 3;

/// Each entry fires once if any of its phrases occurs in the transcript.
type PhraseTable = &'static [(&'static [&'static str], &'static str)];

const PRAGMATIC_PHRASES: PhraseTable = &[
    (&["resultado"], "Foco em resultados"),
    (&["roi", "retorno"], "Interesse em retorno sobre investimento"),
    (&["quanto"], "Pergunta direta sobre valores"),
    (&["prazo"], "Preocupação com prazos"),
    (&["agora", "rápido", "urgente", "imediato"], "Senso de urgência"),
    (&["decidir", "decisão", "fechar"], "Orientação à decisão"),
    (&["concreto", "objetivo", "direto"], "Busca por informações objetivas"),
];

const INTUITIVE_PHRASES: PhraseTable = &[
    (&["incrível", "fantástico", "adoro"], "Linguagem entusiasmada"),
    (&["imaginar", "imagino"], "Pensamento visionário"),
    (&["transformar", "revolucionar"], "Foco em transformação"),
    (&["inovação", "inovador", "novidade"], "Interesse por inovação"),
    (&["futuro"], "Visão de futuro"),
    (&["completamente", "totalmente"], "Expressões absolutas"),
];

const ANALYTICAL_PHRASES: PhraseTable = &[
    (&["dados"], "Solicitação de dados"),
    (&["análise", "analisar"], "Necessidade de análise"),
    (&["números", "métrica", "percentual"], "Foco em números"),
    (&["detalhe", "detalhad"], "Atenção a detalhes"),
    (&["garant"], "Busca por garantias"),
    (&["evidência", "prova"], "Exigência de evidências"),
    (&["comparar", "comparação"], "Postura comparativa"),
];

const INTEGRATOR_PHRASES: PhraseTable = &[
    (&["equipe", "time"], "Preocupação com a equipe"),
    (&["pessoas"], "Foco nas pessoas"),
    (&["confortável", "seguro", "segurança"], "Busca por conforto e segurança"),
    (&["confiança"], "Valoriza confiança"),
    (&["juntos", "todos"], "Linguagem colaborativa"),
    (&["relacionamento", "parceria"], "Ênfase em relacionamentos"),
    (&["será que", "acho que"], "Cautela na tomada de decisão"),
];

/// Indicators plus a one-sentence summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub indicators: Vec<String>,
    pub reasoning: String,
}

/// Stateless indicator generator.
pub struct IndicatorGenerator;

impl IndicatorGenerator {
    pub fn explain(
        transcript: &str,
        features: Option<&AcousticFeatures>,
        profile: Profile,
        axes: &AxisScores,
    ) -> Explanation {
        let indicators = Self::indicators(transcript, features, profile);
        let reasoning = Self::reasoning(profile, axes, &indicators);
        Explanation {
            indicators,
            reasoning,
        }
    }

    /// Never empty.
    pub fn indicators(
        transcript: &str,
        features: Option<&AcousticFeatures>,
        profile: Profile,
    ) -> Vec<String> {
        let lowered = transcript.to_lowercase();

        let mut indicators: Vec<String> = Self::phrases(profile)
            .iter()
            .filter(|(phrases, _)| phrases.iter().any(|p| lowered.contains(p)))
            .map(|(_, indicator)| indicator.to_string())
            .collect();

        if let Some(features) = features {
            indicators.extend(Self::acoustic(features, profile));
        }

        let questions = transcript.matches('?').count();
        if questions > 0 {
            indicators.push(format!("Perguntas feitas: {}", questions));
        }

        let exclamations = transcript.matches('!').count();
        if exclamations > 0 {
            indicators.push(format!("Exclamações: {}", exclamations));
        }

        if indicators.is_empty() {
            indicators.push(GENERIC_INDICATOR.to_string());
        }

        indicators
    }

    pub fn reasoning(profile: Profile, axes: &AxisScores, indicators: &[String]) -> String {
        let (first, second) = Self::adjectives(profile);
        let highlights = indicators
            .iter()
            .take(REASONING_INDICATORS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        format!(
            "Perfil {} identificado: comunicação {} e {}. Assertividade {}, emocionalidade {}. Principais indicadores: {}.",
            profile, first, second, axes.assertiveness, axes.emotionality, highlights
        )
    }

    fn phrases(profile: Profile) -> PhraseTable {
        match profile {
            Profile::Pragmatic => PRAGMATIC_PHRASES,
            Profile::Intuitive => INTUITIVE_PHRASES,
            Profile::Analytical => ANALYTICAL_PHRASES,
            Profile::Integrator => INTEGRATOR_PHRASES,
        }
    }

    fn adjectives(profile: Profile) -> (&'static str, &'static str) {
        match profile {
            Profile::Pragmatic => ("assertiva", "racional"),
            Profile::Intuitive => ("assertiva", "emocional"),
            Profile::Analytical => ("reservada", "racional"),
            Profile::Integrator => ("reservada", "emocional"),
        }
    }

    fn acoustic(features: &AcousticFeatures, profile: Profile) -> Vec<String> {
        let mut out = Vec::new();
        match profile {
            Profile::Pragmatic => {
                if features.pace > 150.0 {
                    out.push(format!("Fala acelerada ({:.0} palavras/min)", features.pace));
                }
                if features.pause_frequency < 3.0 {
                    out.push("Poucas pausas, discurso fluido".to_string());
                }
                if features.volume > 70.0 {
                    out.push("Volume de voz elevado".to_string());
                }
            }
            Profile::Intuitive => {
                if features.energy > 70.0 {
                    out.push("Alta energia vocal".to_string());
                }
                if features.pitch > 220.0 {
                    out.push("Tom de voz agudo e expressivo".to_string());
                }
                if features.emotional_tone == EmotionalTone::Positive {
                    out.push("Tom emocional positivo".to_string());
                }
            }
            Profile::Analytical => {
                if features.pace < 120.0 {
                    out.push("Fala pausada e ponderada".to_string());
                }
                if features.pause_frequency > 5.0 {
                    out.push("Pausas frequentes para reflexão".to_string());
                }
                if features.emotional_tone == EmotionalTone::Neutral {
                    out.push("Tom emocional neutro".to_string());
                }
            }
            Profile::Integrator => {
                if features.volume < 50.0 {
                    out.push("Volume de voz moderado".to_string());
                }
                if features.energy < 50.0 {
                    out.push("Energia vocal contida".to_string());
                }
                if matches!(
                    features.emotional_tone,
                    EmotionalTone::Positive | EmotionalTone::Mixed
                ) {
                    out.push("Tom emocional acolhedor".to_string());
                }
            }
        }
        out
    }
}
