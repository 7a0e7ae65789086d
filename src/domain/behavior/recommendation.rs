//! Recommendation Selector - static coaching templates keyed by profile.
//!
//! Selection is a table lookup. The sales stage in the context is accepted
//! and carried along but does not change which template is returned.

use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// When the seller should act on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    Immediate,
    ShortTerm,
    LongTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Stage of the sales conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesStage {
    Discovery,
    Presentation,
    Objection,
    Closing,
}

/// One coaching template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub immediate_action: String,
    pub approach: String,
    pub suggested_script: String,
    pub timing: Timing,
    pub rationale: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objection_handling: Option<String>,
    pub next_steps: Vec<String>,
}

/// Optional context accompanying a recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationContext {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub conversation_context: Vec<String>,
    #[serde(default)]
    pub sales_stage: Option<SalesStage>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub product_context: Option<String>,
}

struct Template {
    immediate_action: &'static str,
    approach: &'static str,
    suggested_script: &'static str,
    timing: Timing,
    rationale: &'static str,
    priority: Priority,
    objection_handling: &'static str,
    next_steps: [&'static str; 3],
}

const PRAGMATIC: Template = Template {
    immediate_action: "Seja direto e apresente resultados concretos",
    approach: "Foque em ROI e eficiência. Use senso de urgência apropriado",
    suggested_script: "Baseado no que você mencionou, nossos clientes veem ROI de 200% em 6 meses. Quando podemos agendar a implementação?",
    timing: Timing::Immediate,
    rationale: "Perfil pragmático valoriza decisões rápidas e resultados tangíveis",
    priority: Priority::High,
    objection_handling: "Apresente números concretos e casos de sucesso similares",
    next_steps: [
        "Apresentar proposta com ROI detalhado",
        "Definir cronograma de implementação",
        "Agendar reunião para fechamento",
    ],
};

const INTUITIVE: Template = Template {
    immediate_action: "Demonstre entusiasmo e visão de futuro",
    approach: "Foque em inovação, possibilidades e reconhecimento",
    suggested_script: "Imagino como essa solução pode transformar completamente sua operação e colocá-los à frente da concorrência!",
    timing: Timing::Immediate,
    rationale: "Perfil intuitivo se conecta com visão de futuro e inovação",
    priority: Priority::High,
    objection_handling: "Enfatize a exclusividade e o pioneirismo da solução",
    next_steps: [
        "Apresentar casos de inovação similares",
        "Mostrar visão de futuro com a solução",
        "Criar senso de exclusividade",
    ],
};

const ANALYTICAL: Template = Template {
    immediate_action: "Forneça dados detalhados e evidências",
    approach: "Apresente informações técnicas e permita tempo para análise",
    suggested_script: "Entendo sua necessidade de análise. Tenho aqui um case study detalhado com métricas de cliente similar. Posso compartilhar os dados completos?",
    timing: Timing::ShortTerm,
    rationale: "Perfil analítico precisa de dados concretos e tempo para avaliar",
    priority: Priority::Medium,
    objection_handling: "Ofereça mais dados, estudos de caso e período de teste",
    next_steps: [
        "Enviar documentação técnica detalhada",
        "Agendar demo técnica",
        "Oferecer período de piloto",
    ],
};

const INTEGRATOR: Template = Template {
    immediate_action: "Enfatize benefícios para equipe e relacionamentos",
    approach: "Foque no impacto nas pessoas e construa consenso",
    suggested_script: "Entendo sua preocupação com a equipe. Nossa solução facilita o trabalho de todos. Que tal um workshop para alinhar os envolvidos?",
    timing: Timing::ShortTerm,
    rationale: "Perfil integrador valoriza impacto positivo nas pessoas",
    priority: Priority::Medium,
    objection_handling: "Foque em suporte, treinamento e benefícios colaborativos",
    next_steps: [
        "Organizar workshop com a equipe",
        "Apresentar plano de treinamento",
        "Destacar suporte continuado",
    ],
};

impl Template {
    fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            immediate_action: self.immediate_action.to_string(),
            approach: self.approach.to_string(),
            suggested_script: self.suggested_script.to_string(),
            timing: self.timing,
            rationale: self.rationale.to_string(),
            priority: self.priority,
            objection_handling: Some(self.objection_handling.to_string()),
            next_steps: self.next_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Stateless template selector.
pub struct RecommendationSelector;

impl RecommendationSelector {
    pub fn recommend(profile: Profile, _context: &RecommendationContext) -> Recommendation {
        Self::template(profile).to_recommendation()
    }

    /// Looks the template up by label; unknown labels get the analytical one.
    pub fn recommend_for_label(label: &str, context: &RecommendationContext) -> Recommendation {
        let profile = Profile::from_label(label).unwrap_or(Profile::Analytical);
        Self::recommend(profile, context)
    }

    /// Next steps of a profile's template.
    pub fn next_steps(profile: Profile) -> Vec<String> {
        Self::template(profile)
            .next_steps
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn template(profile: Profile) -> &'static Template {
        match profile {
            Profile::Pragmatic => &PRAGMATIC,
            Profile::Intuitive => &INTUITIVE,
            Profile::Analytical => &ANALYTICAL,
            Profile::Integrator => &INTEGRATOR,
        }
    }
}
