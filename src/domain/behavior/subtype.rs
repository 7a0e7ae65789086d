//! Extended profiles: subtype catalogue, behavioral axes and the local
//! keyword classifier used when no language model is available.

use serde::{Deserialize, Serialize};

use super::profile::{clamp_axis, Profile};

/// Finer-grained label nested under a base profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subtype {
    // Pragmatic
    #[serde(rename = "Empreendedor")]
    Entrepreneur,
    #[serde(rename = "Estrategista")]
    Strategist,
    #[serde(rename = "Ponderador")]
    Deliberator,
    // Intuitive
    #[serde(rename = "Influenciador")]
    Influencer,
    #[serde(rename = "Engajador")]
    Engager,
    #[serde(rename = "Agregador")]
    Aggregator,
    #[serde(rename = "Formador de relacionamentos")]
    RelationshipBuilder,
    // Analytical
    #[serde(rename = "Pensador entusiasta")]
    EnthusiasticThinker,
    #[serde(rename = "Adaptador")]
    Adapter,
    // Integrator
    #[serde(rename = "Facilitador")]
    Facilitator,
}

const PRAGMATIC_SUBTYPES: &[Subtype] = &[
    Subtype::Entrepreneur,
    Subtype::Strategist,
    Subtype::Deliberator,
];
const INTUITIVE_SUBTYPES: &[Subtype] = &[
    Subtype::Influencer,
    Subtype::Engager,
    Subtype::Aggregator,
    Subtype::RelationshipBuilder,
];
const ANALYTICAL_SUBTYPES: &[Subtype] = &[Subtype::EnthusiasticThinker, Subtype::Adapter];
const INTEGRATOR_SUBTYPES: &[Subtype] = &[Subtype::Facilitator];

impl Subtype {
    /// Valid subtypes of a profile, preferred first.
    pub fn for_profile(profile: Profile) -> &'static [Subtype] {
        match profile {
            Profile::Pragmatic => PRAGMATIC_SUBTYPES,
            Profile::Intuitive => INTUITIVE_SUBTYPES,
            Profile::Analytical => ANALYTICAL_SUBTYPES,
            Profile::Integrator => INTEGRATOR_SUBTYPES,
        }
    }

    /// The profile this subtype belongs to.
    pub fn profile(&self) -> Profile {
        match self {
            Subtype::Entrepreneur | Subtype::Strategist | Subtype::Deliberator => {
                Profile::Pragmatic
            }
            Subtype::Influencer
            | Subtype::Engager
            | Subtype::Aggregator
            | Subtype::RelationshipBuilder => Profile::Intuitive,
            Subtype::EnthusiasticThinker | Subtype::Adapter => Profile::Analytical,
            Subtype::Facilitator => Profile::Integrator,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subtype::Entrepreneur => "Empreendedor",
            Subtype::Strategist => "Estrategista",
            Subtype::Deliberator => "Ponderador",
            Subtype::Influencer => "Influenciador",
            Subtype::Engager => "Engajador",
            Subtype::Aggregator => "Agregador",
            Subtype::RelationshipBuilder => "Formador de relacionamentos",
            Subtype::EnthusiasticThinker => "Pensador entusiasta",
            Subtype::Adapter => "Adaptador",
            Subtype::Facilitator => "Facilitador",
        }
    }

    /// Case-insensitive label lookup.
    pub fn from_label(label: &str) -> Option<Subtype> {
        let wanted = label.trim().to_lowercase();
        [
            PRAGMATIC_SUBTYPES,
            INTUITIVE_SUBTYPES,
            ANALYTICAL_SUBTYPES,
            INTEGRATOR_SUBTYPES,
        ]
        .iter()
        .flat_map(|set| set.iter())
        .copied()
        .find(|s| s.label().to_lowercase() == wanted)
    }

    /// Accepts `candidate` only if it belongs to `profile`; otherwise the
    /// profile's first subtype.
    pub fn resolve(profile: Profile, candidate: Option<&str>) -> Subtype {
        let preferred = Self::for_profile(profile)[0];
        candidate
            .and_then(Subtype::from_label)
            .filter(|s| s.profile() == profile)
            .unwrap_or(preferred)
    }
}

/// Attack/defense and reason/emotion, each in `[-100, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralAxes {
    pub attack_defense: i32,
    pub reason_emotion: i32,
}

impl BehavioralAxes {
    pub fn new(attack_defense: i32, reason_emotion: i32) -> Self {
        Self {
            attack_defense: clamp_axis(attack_defense),
            reason_emotion: clamp_axis(reason_emotion),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDetails {
    pub primary_traits: Vec<String>,
    pub communication_style: String,
    pub motivation_factors: Vec<String>,
}

/// Base profile enriched with a subtype, behavioral axes and traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedProfile {
    #[serde(rename = "type")]
    pub profile: Profile,
    pub confidence: u8,
    pub reasoning: String,
    pub subtype: Subtype,
    pub behavioral_axes: BehavioralAxes,
    #[serde(rename = "fdnaDetails")]
    pub details: TraitDetails,
}

/// Confidence assigned to every keyword-derived profile.
pub const KEYWORD_FALLBACK_CONFIDENCE: u8 = 60;

const KEYWORDS: [(Profile, &[&str]); 4] = [
    (
        Profile::Pragmatic,
        &["resultado", "eficiente", "rápido", "direto", "objetivo"],
    ),
    (
        Profile::Intuitive,
        &["pessoas", "relacionamento", "sentir", "emoção", "conectar"],
    ),
    (
        Profile::Analytical,
        &["dados", "análise", "detalhe", "informação", "estudo"],
    ),
    (
        Profile::Integrator,
        &["equipe", "consenso", "harmonia", "estável", "confiança"],
    ),
];

/// Local extended classifier: counts distinct keyword hits per profile.
pub struct KeywordSubtypeClassifier;

impl KeywordSubtypeClassifier {
    pub fn classify(transcript: &str) -> ExtendedProfile {
        let profile = Self::top_profile(transcript);

        ExtendedProfile {
            profile,
            confidence: KEYWORD_FALLBACK_CONFIDENCE,
            reasoning: "Análise de fallback baseada em palavras-chave identificadas no texto."
                .to_string(),
            subtype: Subtype::for_profile(profile)[0],
            behavioral_axes: BehavioralAxes::new(
                if profile == Profile::Pragmatic { 50 } else { -20 },
                if profile == Profile::Intuitive { 50 } else { -30 },
            ),
            details: TraitDetails {
                primary_traits: vec!["Comunicativo".to_string(), "Focado".to_string()],
                communication_style: "Estilo padrão identificado".to_string(),
                motivation_factors: vec!["Resultados".to_string(), "Relacionamentos".to_string()],
            },
        }
    }

    /// Highest distinct-keyword count wins; ties keep enumeration order.
    pub fn top_profile(transcript: &str) -> Profile {
        let lowered = transcript.to_lowercase();

        let mut best = (Profile::Pragmatic, 0usize);
        for (index, (profile, keywords)) in KEYWORDS.iter().enumerate() {
            let hits = keywords.iter().filter(|k| lowered.contains(*k)).count();
            if index == 0 || hits > best.1 {
                best = (*profile, hits);
            }
        }
        best.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subtype_belongs_to_its_profile_set() {
        for profile in Profile::ALL {
            for subtype in Subtype::for_profile(profile) {
                assert_eq!(subtype.profile(), profile);
            }
        }
    }

    #[test]
    fn subtype_serializes_with_portuguese_label() {
        let json = serde_json::to_string(&Subtype::RelationshipBuilder).unwrap();
        assert_eq!(json, "\"Formador de relacionamentos\"");
    }

    #[test]
    fn from_label_ignores_case() {
        assert_eq!(
            Subtype::from_label("pensador ENTUSIASTA"),
            Some(Subtype::EnthusiasticThinker)
        );
        assert_eq!(Subtype::from_label("Guerreiro"), None);
    }

    #[test]
    fn resolve_rejects_cross_profile_subtype() {
        assert_eq!(
            Subtype::resolve(Profile::Integrator, Some("Empreendedor")),
            Subtype::Facilitator
        );
        assert_eq!(
            Subtype::resolve(Profile::Pragmatic, Some("Estrategista")),
            Subtype::Strategist
        );
        assert_eq!(Subtype::resolve(Profile::Analytical, None), Subtype::EnthusiasticThinker);
    }

    #[test]
    fn keyword_classifier_picks_highest_count() {
        let extended = KeywordSubtypeClassifier::classify(
            "A equipe precisa de consenso e harmonia antes de qualquer resultado",
        );

        assert_eq!(extended.profile, Profile::Integrator);
        assert_eq!(extended.subtype, Subtype::Facilitator);
        assert_eq!(extended.confidence, KEYWORD_FALLBACK_CONFIDENCE);
        assert_eq!(extended.behavioral_axes, BehavioralAxes::new(-20, -30));
    }

    #[test]
    fn keyword_classifier_ties_keep_enumeration_order() {
        assert_eq!(KeywordSubtypeClassifier::top_profile("nada relevante"), Profile::Pragmatic);
        assert_eq!(
            KeywordSubtypeClassifier::top_profile("pessoas e dados"),
            Profile::Intuitive
        );
    }

    #[test]
    fn keyword_classifier_axes_depend_on_profile() {
        let pragmatic = KeywordSubtypeClassifier::classify("quero um resultado rápido");
        assert_eq!(pragmatic.behavioral_axes, BehavioralAxes::new(50, -30));

        let intuitive = KeywordSubtypeClassifier::classify("gosto de conectar pessoas");
        assert_eq!(intuitive.behavioral_axes, BehavioralAxes::new(-20, 50));
    }

    #[test]
    fn extended_profile_uses_wire_field_names() {
        let value = serde_json::to_value(KeywordSubtypeClassifier::classify("dados")).unwrap();
        assert_eq!(value["type"], "ANALITICO");
        assert_eq!(value["subtype"], "Pensador entusiasta");
        assert_eq!(value["behavioralAxes"]["attackDefense"], -20);
        assert!(value["fdnaDetails"]["primaryTraits"].is_array());
    }
}
