//! Four-dimension personality types.
//!
//! The type code is always derived from the dimension signs so the letters
//! can never disagree with the scores that produced them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::profile::clamp_axis;

/// Four independent axes, each in `[-100, 100]`.
///
/// Positive values mean E, S, T and J respectively. Zero resolves to the
/// opposite letter (I, N, F, P).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonalityDimensions {
    #[serde(rename = "extroversion", alias = "extraversion")]
    pub extraversion: i32,
    pub sensing: i32,
    pub thinking: i32,
    pub judging: i32,
}

impl PersonalityDimensions {
    pub fn new(extraversion: i32, sensing: i32, thinking: i32, judging: i32) -> Self {
        Self {
            extraversion: clamp_axis(extraversion),
            sensing: clamp_axis(sensing),
            thinking: clamp_axis(thinking),
            judging: clamp_axis(judging),
        }
    }

    /// The four letters implied by the signs.
    pub fn letters(&self) -> [char; 4] {
        [
            if self.extraversion > 0 { 'E' } else { 'I' },
            if self.sensing > 0 { 'S' } else { 'N' },
            if self.thinking > 0 { 'T' } else { 'F' },
            if self.judging > 0 { 'J' } else { 'P' },
        ]
    }
}

/// One of the sixteen four-letter type codes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityType {
    ENFP,
    ENFJ,
    ENTP,
    ENTJ,
    ESFP,
    ESFJ,
    ESTP,
    ESTJ,
    INFP,
    INFJ,
    INTP,
    INTJ,
    ISFP,
    ISFJ,
    ISTP,
    ISTJ,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 16] = [
        PersonalityType::ENFP,
        PersonalityType::ENFJ,
        PersonalityType::ENTP,
        PersonalityType::ENTJ,
        PersonalityType::ESFP,
        PersonalityType::ESFJ,
        PersonalityType::ESTP,
        PersonalityType::ESTJ,
        PersonalityType::INFP,
        PersonalityType::INFJ,
        PersonalityType::INTP,
        PersonalityType::INTJ,
        PersonalityType::ISFP,
        PersonalityType::ISFJ,
        PersonalityType::ISTP,
        PersonalityType::ISTJ,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PersonalityType::ENFP => "ENFP",
            PersonalityType::ENFJ => "ENFJ",
            PersonalityType::ENTP => "ENTP",
            PersonalityType::ENTJ => "ENTJ",
            PersonalityType::ESFP => "ESFP",
            PersonalityType::ESFJ => "ESFJ",
            PersonalityType::ESTP => "ESTP",
            PersonalityType::ESTJ => "ESTJ",
            PersonalityType::INFP => "INFP",
            PersonalityType::INFJ => "INFJ",
            PersonalityType::INTP => "INTP",
            PersonalityType::INTJ => "INTJ",
            PersonalityType::ISFP => "ISFP",
            PersonalityType::ISFJ => "ISFJ",
            PersonalityType::ISTP => "ISTP",
            PersonalityType::ISTJ => "ISTJ",
        }
    }

    pub fn from_dimensions(dimensions: &PersonalityDimensions) -> PersonalityType {
        let code: String = dimensions.letters().iter().collect();
        Self::from_code(&code).unwrap_or(PersonalityType::INFP)
    }

    pub fn from_code(code: &str) -> Option<PersonalityType> {
        let wanted = code.trim().to_uppercase();
        Self::ALL.iter().copied().find(|t| t.code() == wanted)
    }

    /// First letter of the code (E or I).
    pub fn dominant_letter(&self) -> char {
        if self.code().starts_with('E') {
            'E'
        } else {
            'I'
        }
    }

    pub fn description(&self) -> TypeDescription {
        use PersonalityType::*;
        match self {
            ENFP => TypeDescription::new(
                "Entusiasta, criativo e sociável. Busca possibilidades e inspira outros.",
                &["Criatividade", "Entusiasmo", "Flexibilidade", "Conexão pessoal"],
                &["Foco em detalhes", "Planejamento estruturado", "Follow-through"],
            ),
            ENFJ => TypeDescription::new(
                "Carismático e inspirador. Natural líder focado no desenvolvimento das pessoas.",
                &["Liderança", "Empatia", "Comunicação", "Visão de futuro"],
                &["Objetividade", "Tomada de decisões difíceis", "Autocuidado"],
            ),
            ENTP => TypeDescription::new(
                "Inovador e questionador. Adora debater ideias e explorar possibilidades.",
                &["Inovação", "Pensamento estratégico", "Adaptabilidade", "Networking"],
                &["Execução consistente", "Atenção aos detalhes", "Rotina"],
            ),
            ENTJ => TypeDescription::new(
                "Líder natural, estratégico e determinado. Foca em eficiência e resultados.",
                &["Liderança", "Estratégia", "Decisão", "Organização"],
                &["Paciência", "Sensibilidade interpessoal", "Flexibilidade"],
            ),
            ESFP => TypeDescription::new(
                "Espontâneo e amigável. Traz energia positiva e foca no momento presente.",
                &["Espontaneidade", "Otimismo", "Relacionamento", "Adaptabilidade"],
                &["Planejamento de longo prazo", "Disciplina", "Análise crítica"],
            ),
            ESFJ => TypeDescription::new(
                "Prestativo e organizado. Focado em atender necessidades dos outros.",
                &["Organização", "Lealdade", "Suporte", "Responsabilidade"],
                &["Assertividade", "Mudanças", "Crítica construtiva"],
            ),
            ESTP => TypeDescription::new(
                "Pragmático e energético. Prefere ação a planejamento.",
                &["Ação imediata", "Pragmatismo", "Flexibilidade", "Solução de problemas"],
                &["Planejamento estratégico", "Paciência", "Teoria abstrata"],
            ),
            ESTJ => TypeDescription::new(
                "Organizador natural, sistemático e focado em resultados.",
                &["Organização", "Liderança", "Eficiência", "Confiabilidade"],
                &["Flexibilidade", "Inovação", "Sensibilidade emocional"],
            ),
            INFP => TypeDescription::new(
                "Idealista e autêntico. Busca significado e harmonia com valores pessoais.",
                &["Autenticidade", "Criatividade", "Empatia", "Valores fortes"],
                &["Assertividade", "Decisões práticas", "Estrutura"],
            ),
            INFJ => TypeDescription::new(
                "Visionário e determinado. Combina intuição com planejamento estruturado.",
                &["Visão de futuro", "Determinação", "Insight", "Planejamento"],
                &["Flexibilidade", "Praticidade", "Assertividade"],
            ),
            INTP => TypeDescription::new(
                "Pensador lógico e independente. Busca compreender sistemas complexos.",
                &["Lógica", "Análise", "Independência", "Inovação"],
                &["Expressão emocional", "Prazos", "Implementação"],
            ),
            INTJ => TypeDescription::new(
                "Estrategista independente. Combina visão de longo prazo com determinação.",
                &["Estratégia", "Independência", "Visão sistêmica", "Determinação"],
                &["Relacionamento interpessoal", "Flexibilidade", "Trabalho em equipe"],
            ),
            ISFP => TypeDescription::new(
                "Artístico e sensível. Valoriza autenticidade e harmonia.",
                &["Sensibilidade", "Flexibilidade", "Lealdade", "Criatividade"],
                &["Assertividade", "Planejamento", "Confronto"],
            ),
            ISFJ => TypeDescription::new(
                "Protetor dedicado e confiável. Focado em apoiar e cuidar dos outros.",
                &["Dedicação", "Confiabilidade", "Atenção aos detalhes", "Suporte"],
                &["Assertividade", "Mudanças", "Autocuidado"],
            ),
            ISTP => TypeDescription::new(
                "Solucionador prático e adaptável. Prefere trabalhar com as mãos.",
                &["Solução prática", "Adaptabilidade", "Independência", "Calma"],
                &["Expressão emocional", "Planejamento", "Relacionamento"],
            ),
            ISTJ => TypeDescription::new(
                "Responsável e sistemático. Valoriza tradição, lealdade e hard work.",
                &["Responsabilidade", "Organização", "Confiabilidade", "Atenção aos detalhes"],
                &["Flexibilidade", "Inovação", "Expressão pessoal"],
            ),
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Static description record for one type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescription {
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub development_areas: &'static [&'static str],
}

impl TypeDescription {
    const fn new(
        description: &'static str,
        strengths: &'static [&'static str],
        development_areas: &'static [&'static str],
    ) -> Self {
        Self {
            description,
            strengths,
            development_areas,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTypeProfile {
    #[serde(rename = "type")]
    pub personality_type: PersonalityType,
    pub dimensions: PersonalityDimensions,
    pub confidence: u8,
    pub description: String,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
}

impl PersonalityTypeProfile {
    /// Builds a profile whose code and description follow from `dimensions`.
    pub fn from_dimensions(dimensions: PersonalityDimensions, confidence: u8) -> Self {
        let personality_type = PersonalityType::from_dimensions(&dimensions);
        let info = personality_type.description();

        Self {
            personality_type,
            dimensions,
            confidence: confidence.min(100),
            description: info.description.to_string(),
            strengths: to_strings(info.strengths),
            development_areas: to_strings(info.development_areas),
        }
    }

    /// The fixed profile returned whenever the language model is unavailable.
    pub fn canned() -> Self {
        let dimensions = PersonalityDimensions::new(20, -10, -5, -15);
        Self {
            personality_type: PersonalityType::from_dimensions(&dimensions),
            dimensions,
            confidence: 60,
            description: "Análise de fallback - perfil equilibrado com tendências colaborativas."
                .to_string(),
            strengths: to_strings(&["Comunicação", "Adaptabilidade", "Criatividade"]),
            development_areas: to_strings(&["Estruturação", "Foco", "Planejamento"]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_follow_signs() {
        let dims = PersonalityDimensions::new(40, 10, 70, 5);
        assert_eq!(PersonalityType::from_dimensions(&dims), PersonalityType::ESTJ);

        let dims = PersonalityDimensions::new(-40, -10, -70, -5);
        assert_eq!(PersonalityType::from_dimensions(&dims), PersonalityType::INFP);
    }

    #[test]
    fn zero_resolves_to_default_letters() {
        let dims = PersonalityDimensions::default();
        assert_eq!(PersonalityType::from_dimensions(&dims), PersonalityType::INFP);
    }

    #[test]
    fn every_code_round_trips_through_lookup() {
        for t in PersonalityType::ALL {
            assert_eq!(PersonalityType::from_code(t.code()), Some(t));
            assert!(!t.description().strengths.is_empty());
        }
    }

    #[test]
    fn from_dimensions_uses_lookup_table() {
        let dimensions = PersonalityDimensions::new(-30, -20, 60, 40);
        let profile = PersonalityTypeProfile::from_dimensions(dimensions, 80);

        assert_eq!(profile.personality_type, PersonalityType::INTJ);
        assert!(profile.description.starts_with("Estrategista independente"));
        assert_eq!(profile.strengths[0], "Estratégia");
    }

    #[test]
    fn canned_profile_is_consistent() {
        let canned = PersonalityTypeProfile::canned();
        assert_eq!(canned.personality_type, PersonalityType::ENFP);
        assert_eq!(canned.confidence, 60);
        assert_eq!(
            PersonalityType::from_dimensions(&canned.dimensions),
            canned.personality_type
        );
    }

    #[test]
    fn dimensions_serialize_with_wire_name() {
        let value = serde_json::to_value(PersonalityDimensions::new(1, 2, 3, 4)).unwrap();
        assert_eq!(value["extroversion"], 1);

        let json = r#"{"extraversion": 9, "sensing": 0, "thinking": 0, "judging": 0}"#;
        let parsed: PersonalityDimensions = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.extraversion, 9);
    }

    #[test]
    fn profile_serializes_type_code() {
        let value = serde_json::to_value(PersonalityTypeProfile::canned()).unwrap();
        assert_eq!(value["type"], "ENFP");
        assert!(value["developmentAreas"].is_array());
    }
}
