//! Combined Insight Generator - merges an extended profile and a personality
//! type into coaching text.

use serde::{Deserialize, Serialize};

use super::personality::PersonalityTypeProfile;
use super::profile::Profile;
use super::subtype::ExtendedProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedInsights {
    pub immediate_action: String,
    pub script: String,
    pub disc_based_strategy: String,
    pub mbti_based_approach: String,
    pub combined_insights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisProfiles {
    pub disc: ExtendedProfile,
    pub mbti: PersonalityTypeProfile,
}

/// Output of a complete behavioral analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralAnalysis {
    pub transcript: String,
    pub profiles: AnalysisProfiles,
    pub recommendations: CombinedInsights,
}

pub struct InsightGenerator;

impl InsightGenerator {
    pub fn combine(
        extended: &ExtendedProfile,
        personality: &PersonalityTypeProfile,
    ) -> CombinedInsights {
        let subtype = extended.subtype.label();
        let motivation = extended
            .details
            .motivation_factors
            .first()
            .map(String::as_str)
            .unwrap_or("Resultados");
        let strength = personality
            .strengths
            .first()
            .map(String::as_str)
            .unwrap_or("Comunicação");
        let code = personality.personality_type.code();

        CombinedInsights {
            immediate_action: format!(
                "Baseado no perfil {}, {}: ajuste sua abordagem para ser mais {}.",
                extended.profile,
                subtype,
                subtype.to_lowercase()
            ),
            script: format!(
                "\"Entendo que você valoriza {}. Deixe-me mostrar como nossa solução atende exatamente isso...\"",
                motivation
            ),
            disc_based_strategy: Self::strategy(extended.profile).to_string(),
            mbti_based_approach: format!(
                "{} - Tipo {}",
                Self::approach(personality.personality_type.dominant_letter()),
                code
            ),
            combined_insights: format!(
                "Cliente {}/{}: {}. {} é um ponto forte para abordar.",
                extended.profile, code, extended.details.communication_style, strength
            ),
        }
    }

    fn strategy(profile: Profile) -> &'static str {
        match profile {
            Profile::Pragmatic => {
                "Foque em resultados concretos, seja direto e objetivo. Evite detalhes desnecessários."
            }
            Profile::Intuitive => {
                "Use entusiasmo, conecte-se emocionalmente e mostre o impacto social da solução."
            }
            Profile::Analytical => {
                "Apresente dados detalhados, estatísticas e evidências. Permita tempo para análise."
            }
            Profile::Integrator => {
                "Construa relacionamento, seja paciente e mostre como a solução beneficia a equipe."
            }
        }
    }

    /// Phrase for one personality letter.
    pub fn approach(letter: char) -> &'static str {
        match letter {
            'E' => "Pessoa extrovertida - engaje em discussão ativa",
            'I' => "Pessoa introvertida - dê tempo para reflexão",
            'S' => "Focado em sensação - use exemplos práticos e concretos",
            'N' => "Focado em intuição - explore possibilidades futuras",
            'T' => "Pensador - use lógica e análise objetiva",
            'F' => "Sentimental - enfatize valores e impacto nas pessoas",
            'J' => "Julgador - seja estruturado e pontual",
            'P' => "Perceptivo - mantenha flexibilidade e opções",
            _ => "Abordagem equilibrada",
        }
    }
}
