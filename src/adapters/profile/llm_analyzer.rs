//! Language-model backed profile analyzers.
//!
//! One completion per call, no retries. Any provider error or reply that
//! fails the strict decode drops to the local classifiers in
//! `domain::behavior`.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::behavior::{
    BehavioralAxes, ExtendedProfile, KeywordSubtypeClassifier, PersonalityDimensions,
    PersonalityTypeProfile, Profile, Subtype, TraitDetails,
};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, ExtendedProfileAnalyzer, MessageRole,
    PersonalityAnalyzer, RequestMetadata,
};

/// Prior utterances included in a prompt.
pub const HISTORY_WINDOW: usize = 5;

const DEFAULT_LLM_CONFIDENCE: f64 = 70.0;
const DEFAULT_REASONING: &str = "Análise baseada em padrões de comunicação identificados.";
const DEFAULT_COMMUNICATION_STYLE: &str = "Direto e objetivo";
const DEFAULT_PRIMARY_TRAITS: [&str; 3] = ["Comunicativo", "Focado", "Analítico"];
const DEFAULT_MOTIVATION_FACTORS: [&str; 2] = ["Resultados", "Eficiência"];

const EXTENDED_SYSTEM_PROMPT: &str =
    "Você é um especialista em análise comportamental DISC com conhecimento profundo da metodologia FDNA. Analise com precisão e forneça respostas no formato JSON solicitado.";
const PERSONALITY_SYSTEM_PROMPT: &str =
    "Você é um especialista em análise de personalidade MBTI. Analise o texto e determine o tipo de personalidade baseado nas 4 dimensões: E/I, S/N, T/F, J/P. Seja preciso e forneça evidências textuais.";

/// Whether analyzers may call the language model.
///
/// Chosen once at start-up from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Llm,
    LocalOnly,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LlmAnalyzerConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LlmAnalyzerConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 1000,
        }
    }
}

/// Extended-profile and personality analyzer over an `AIProvider`.
pub struct LlmBehavioralAnalyzer {
    ai_provider: Arc<dyn AIProvider>,
    mode: AnalysisMode,
    config: LlmAnalyzerConfig,
}

impl LlmBehavioralAnalyzer {
    pub fn new(ai_provider: Arc<dyn AIProvider>, mode: AnalysisMode) -> Self {
        Self {
            ai_provider,
            mode,
            config: LlmAnalyzerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LlmAnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    fn request(&self, operation: &str, system_prompt: &str, prompt: String) -> CompletionRequest {
        let trace_id = format!("{}-{}", operation, uuid::Uuid::new_v4());
        let metadata = RequestMetadata::new(operation, trace_id);

        CompletionRequest::new(metadata)
            .with_system_prompt(system_prompt)
            .with_message(MessageRole::User, prompt)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens)
            .with_json_response()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, AIError> {
        let response = self.ai_provider.complete(request).await?;
        Ok(response.content)
    }

    fn extended_prompt(transcript: &str, history: &[String]) -> String {
        format!(
            r#"
Analise a seguinte conversa de vendas e identifique o perfil comportamental DISC expandido com metodologia FDNA:
{history}
TEXTO DA CONVERSA:
"{transcript}"

Analise e determine:

1. PERFIL DISC PRINCIPAL:
   - Pragmático: Orientado por resultados, direto, focado em eficiência
   - Intuitivo: Sociável, expressivo, busca aprovação social
   - Analítico: Preciso, sistemático, busca informações detalhadas
   - Integrador: Paciente, confiável, busca harmonia e estabilidade

2. SUBTIPO FDNA ESPECÍFICO:
   - Pragmático: Empreendedor (inovador, assume riscos) | Estrategista (planejador, visionário) | Ponderador (cauteloso, avalia riscos)
   - Intuitivo: Influenciador (persuasivo, carismático) | Engajador (animado, otimista) | Agregador (conecta pessoas) | Formador de relacionamentos (empático, socialmente hábil)
   - Analítico: Pensador entusiasta (curioso, quer entender tudo) | Adaptador (flexível, se ajusta às situações)
   - Integrador: Facilitador (mediador, cria consenso)

3. EIXOS COMPORTAMENTAIS FDNA (-100 a +100):
   - ATAQUE/DEFESA: Orientação por resultados vs comportamento cauteloso
   - RAZÃO/EMOÇÃO: Orientação por relacionamentos vs lógica pura

4. CARACTERÍSTICAS COMPORTAMENTAIS:
   - 3-5 traços primários observados
   - Estilo de comunicação predominante
   - 2-3 fatores principais de motivação

RESPONDA EM JSON:
{{
  "type": "PRAGMATICO|INTUITIVO|ANALITICO|INTEGRADOR",
  "confidence": <0-100>,
  "reasoning": "<justificativa detalhada baseada em evidências do texto>",
  "subtype": "<subtipo FDNA específico>",
  "behavioralAxes": {{
    "attackDefense": <-100 a +100>,
    "reasonEmotion": <-100 a +100>
  }},
  "fdnaDetails": {{
    "primaryTraits": ["<trait1>", "<trait2>", "<trait3>"],
    "communicationStyle": "<descrição do estilo>",
    "motivationFactors": ["<fator1>", "<fator2>"]
  }}
}}
"#,
            history = history_block(history),
            transcript = transcript,
        )
    }

    fn personality_prompt(transcript: &str, history: &[String]) -> String {
        format!(
            r#"
Analise a seguinte conversa e determine o tipo MBTI da pessoa baseado nas 4 dimensões:
{history}
TEXTO DA CONVERSA:
"{transcript}"

Analise cada dimensão e forneça um score de -100 a +100:

1. EXTROVERSÃO vs INTROVERSÃO (E/I):
   - +100: Muito extrovertido (energizado por pessoas, fala para processar, busca estímulos externos)
   - -100: Muito introvertido (energizado pela reflexão, pensa antes de falar, prefere profundidade)

2. SENSAÇÃO vs INTUIÇÃO (S/N):
   - +100: Muito sensorial (fatos concretos, experiência prática, detalhes, presente)
   - -100: Muito intuitivo (possibilidades, padrões, futuro, conceitos abstratos)

3. PENSAMENTO vs SENTIMENTO (T/F):
   - +100: Muito pensador (lógica, objetividade, crítica, eficiência)
   - -100: Muito sentimental (valores, harmonia, pessoas, impacto emocional)

4. JULGAMENTO vs PERCEPÇÃO (J/P):
   - +100: Muito julgador (estrutura, planejamento, decisões, cronogramas)
   - -100: Muito perceptivo (flexibilidade, espontaneidade, adaptação, opções abertas)

Determine o tipo MBTI final (ex: ENFP, INTJ) e forneça evidências específicas do texto.

RESPONDA EM JSON:
{{
  "dimensions": {{
    "extroversion": <-100 a +100>,
    "sensing": <-100 a +100>,
    "thinking": <-100 a +100>,
    "judging": <-100 a +100>
  }},
  "type": "<tipo MBTI de 4 letras>",
  "confidence": <0-100>,
  "evidences": {{
    "extroversion": "<evidência textual para E/I>",
    "sensing": "<evidência textual para S/N>",
    "thinking": "<evidência textual para T/F>",
    "judging": "<evidência textual para J/P>"
  }}
}}
"#,
            history = history_block(history),
            transcript = transcript,
        )
    }

    /// Strict decode: the reply must be a JSON object naming a known profile.
    /// Every other field falls back to its default on its own.
    fn decode_extended(content: &str) -> Result<ExtendedProfile, AIError> {
        let reply: ExtendedReply = serde_json::from_str(strip_code_fence(content))
            .map_err(|e| AIError::parse(format!("extended profile reply: {}", e)))?;

        let profile = Profile::from_label(&reply.profile)
            .ok_or_else(|| AIError::parse(format!("unknown profile label: {}", reply.profile)))?;

        let axes = reply.behavioral_axes.unwrap_or_default();
        let details = reply.fdna_details.unwrap_or_default();

        Ok(ExtendedProfile {
            profile,
            confidence: to_confidence(reply.confidence),
            reasoning: non_empty(reply.reasoning).unwrap_or_else(|| DEFAULT_REASONING.to_string()),
            subtype: Subtype::resolve(profile, reply.subtype.as_deref()),
            behavioral_axes: BehavioralAxes::new(
                to_axis(axes.attack_defense),
                to_axis(axes.reason_emotion),
            ),
            details: TraitDetails {
                primary_traits: details
                    .primary_traits
                    .unwrap_or_else(|| to_strings(&DEFAULT_PRIMARY_TRAITS)),
                communication_style: non_empty(details.communication_style)
                    .unwrap_or_else(|| DEFAULT_COMMUNICATION_STYLE.to_string()),
                motivation_factors: details
                    .motivation_factors
                    .unwrap_or_else(|| to_strings(&DEFAULT_MOTIVATION_FACTORS)),
            },
        })
    }

    /// The type code in the reply is ignored; it is recomputed from the
    /// dimensions.
    fn decode_personality(content: &str) -> Result<PersonalityTypeProfile, AIError> {
        let reply: PersonalityReply = serde_json::from_str(strip_code_fence(content))
            .map_err(|e| AIError::parse(format!("personality reply: {}", e)))?;

        let dims = reply.dimensions;
        let dimensions = PersonalityDimensions::new(
            to_axis(dims.extroversion),
            to_axis(dims.sensing),
            to_axis(dims.thinking),
            to_axis(dims.judging),
        );

        Ok(PersonalityTypeProfile::from_dimensions(
            dimensions,
            to_confidence(reply.confidence),
        ))
    }
}

#[async_trait]
impl ExtendedProfileAnalyzer for LlmBehavioralAnalyzer {
    async fn classify_extended(&self, transcript: &str, history: &[String]) -> ExtendedProfile {
        if self.mode == AnalysisMode::LocalOnly {
            tracing::debug!("Language model disabled, using keyword classifier");
            return KeywordSubtypeClassifier::classify(transcript);
        }

        let request = self.request(
            "extended_profile",
            EXTENDED_SYSTEM_PROMPT,
            Self::extended_prompt(transcript, recent(history)),
        );

        let decoded = self
            .complete(request)
            .await
            .and_then(|content| Self::decode_extended(&content));

        match decoded {
            Ok(profile) => {
                tracing::info!(
                    profile = %profile.profile,
                    subtype = profile.subtype.label(),
                    confidence = profile.confidence,
                    "Extended profile classified"
                );
                profile
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Extended profile analysis failed, using keyword fallback"
                );
                KeywordSubtypeClassifier::classify(transcript)
            }
        }
    }
}

#[async_trait]
impl PersonalityAnalyzer for LlmBehavioralAnalyzer {
    async fn classify_personality(
        &self,
        transcript: &str,
        history: &[String],
    ) -> PersonalityTypeProfile {
        if self.mode == AnalysisMode::LocalOnly {
            tracing::debug!("Language model disabled, using canned personality profile");
            return PersonalityTypeProfile::canned();
        }

        let request = self.request(
            "personality_type",
            PERSONALITY_SYSTEM_PROMPT,
            Self::personality_prompt(transcript, recent(history)),
        );

        let decoded = self
            .complete(request)
            .await
            .and_then(|content| Self::decode_personality(&content));

        match decoded {
            Ok(profile) => {
                tracing::info!(
                    personality_type = %profile.personality_type,
                    confidence = profile.confidence,
                    "Personality type classified"
                );
                profile
            }
            Err(e) => {
                tracing::warn!(error = %e, "Personality analysis failed, using canned profile");
                PersonalityTypeProfile::canned()
            }
        }
    }
}

// ----- Reply shapes -----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtendedReply {
    #[serde(rename = "type")]
    profile: String,
    confidence: Option<f64>,
    reasoning: Option<String>,
    subtype: Option<String>,
    behavioral_axes: Option<AxesReply>,
    fdna_details: Option<DetailsReply>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AxesReply {
    attack_defense: f64,
    reason_emotion: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DetailsReply {
    primary_traits: Option<Vec<String>>,
    communication_style: Option<String>,
    motivation_factors: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct PersonalityReply {
    #[serde(default)]
    dimensions: DimensionsReply,
    confidence: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DimensionsReply {
    #[serde(alias = "extraversion")]
    extroversion: f64,
    sensing: f64,
    thinking: f64,
    judging: f64,
}

// ----- Helpers -----

fn recent(history: &[String]) -> &[String] {
    &history[history.len().saturating_sub(HISTORY_WINDOW)..]
}

fn history_block(history: &[String]) -> String {
    if history.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = history.iter().map(|h| format!("- {}", h)).collect();
    format!("\nHISTÓRICO RECENTE DA CONVERSA:\n{}\n", lines.join("\n"))
}

/// Some models wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

fn to_axis(value: f64) -> i32 {
    if value.is_finite() {
        value.round().clamp(-100.0, 100.0) as i32
    } else {
        0
    }
}

fn to_confidence(value: Option<f64>) -> u8 {
    let value = value.filter(|v| v.is_finite()).unwrap_or(DEFAULT_LLM_CONFIDENCE);
    value.round().clamp(0.0, 100.0) as u8
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::behavior::{PersonalityType, KEYWORD_FALLBACK_CONFIDENCE};
    use serde_json::json;

    fn analyzer(provider: MockAIProvider) -> LlmBehavioralAnalyzer {
        LlmBehavioralAnalyzer::new(Arc::new(provider), AnalysisMode::Llm)
    }

    #[tokio::test]
    async fn decodes_full_extended_reply() {
        let provider = MockAIProvider::new().with_json(json!({
            "type": "ANALITICO",
            "confidence": 82,
            "reasoning": "Pede dados e comparações.",
            "subtype": "Adaptador",
            "behavioralAxes": {"attackDefense": -40, "reasonEmotion": -150},
            "fdnaDetails": {
                "primaryTraits": ["Preciso"],
                "communicationStyle": "Detalhista",
                "motivationFactors": ["Segurança"]
            }
        }));

        let result = analyzer(provider).classify_extended("Quero ver os dados", &[]).await;

        assert_eq!(result.profile, Profile::Analytical);
        assert_eq!(result.confidence, 82);
        assert_eq!(result.subtype, Subtype::Adapter);
        assert_eq!(result.behavioral_axes, BehavioralAxes::new(-40, -100));
        assert_eq!(result.details.primary_traits, vec!["Preciso".to_string()]);
        assert_eq!(result.details.communication_style, "Detalhista");
    }

    #[tokio::test]
    async fn missing_fields_take_defaults() {
        let provider = MockAIProvider::new().with_json(json!({"type": "INTEGRADOR"}));

        let result = analyzer(provider).classify_extended("texto", &[]).await;

        assert_eq!(result.profile, Profile::Integrator);
        assert_eq!(result.confidence, 70);
        assert_eq!(result.reasoning, DEFAULT_REASONING);
        assert_eq!(result.subtype, Subtype::Facilitator);
        assert_eq!(result.behavioral_axes, BehavioralAxes::default());
        assert_eq!(result.details.communication_style, "Direto e objetivo");
        assert_eq!(result.details.motivation_factors.len(), 2);
    }

    #[tokio::test]
    async fn subtype_from_another_profile_is_replaced() {
        let provider = MockAIProvider::new()
            .with_json(json!({"type": "PRAGMATICO", "subtype": "Facilitador"}));

        let result = analyzer(provider).classify_extended("texto", &[]).await;

        assert_eq!(result.subtype, Subtype::Entrepreneur);
    }

    #[tokio::test]
    async fn unknown_profile_uses_keyword_fallback() {
        let provider = MockAIProvider::new().with_json(json!({"type": "DOMINANTE"}));

        let result = analyzer(provider)
            .classify_extended("Nossa equipe busca consenso", &[])
            .await;

        assert_eq!(result.profile, Profile::Integrator);
        assert_eq!(result.confidence, KEYWORD_FALLBACK_CONFIDENCE);
    }

    #[tokio::test]
    async fn non_json_reply_uses_keyword_fallback() {
        let result = analyzer(MockAIProvider::new())
            .classify_extended("Preciso de uma análise com dados", &[])
            .await;

        assert_eq!(result.profile, Profile::Analytical);
        assert_eq!(result.confidence, KEYWORD_FALLBACK_CONFIDENCE);
    }

    #[tokio::test]
    async fn provider_error_uses_keyword_fallback_without_retry() {
        let provider = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 });
        let analyzer = analyzer(provider.clone());

        let result = analyzer.classify_extended("Quero resultado rápido", &[]).await;

        assert_eq!(result.profile, Profile::Pragmatic);
        assert_eq!(result.confidence, KEYWORD_FALLBACK_CONFIDENCE);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn local_only_mode_never_calls_provider() {
        let provider = MockAIProvider::new();
        let analyzer =
            LlmBehavioralAnalyzer::new(Arc::new(provider.clone()), AnalysisMode::LocalOnly);

        analyzer.classify_extended("texto", &[]).await;
        let personality = analyzer.classify_personality("texto", &[]).await;

        assert_eq!(provider.call_count(), 0);
        assert_eq!(personality, PersonalityTypeProfile::canned());
    }

    #[tokio::test]
    async fn request_is_json_mode_with_configured_sampling() {
        let provider = MockAIProvider::new();
        let analyzer = analyzer(provider.clone()).with_config(LlmAnalyzerConfig {
            temperature: 0.1,
            max_tokens: 500,
        });

        analyzer.classify_extended("texto", &[]).await;

        let call = &provider.get_calls()[0];
        assert!(call.json_response);
        assert_eq!(call.temperature, Some(0.1));
        assert_eq!(call.max_tokens, Some(500));
        assert_eq!(call.metadata.operation, "extended_profile");
        assert_eq!(call.system_prompt.as_deref(), Some(EXTENDED_SYSTEM_PROMPT));
    }

    #[tokio::test]
    async fn prompt_includes_only_recent_history() {
        let provider = MockAIProvider::new();
        let history: Vec<String> = (1..=7).map(|i| format!("fala-{}", i)).collect();

        analyzer(provider.clone())
            .classify_extended("texto atual", &history)
            .await;

        let prompt = &provider.get_calls()[0].messages[0].content;
        assert!(prompt.contains("\"texto atual\""));
        assert!(!prompt.contains("fala-2"));
        assert!(prompt.contains("fala-3"));
        assert!(prompt.contains("fala-7"));
    }

    #[tokio::test]
    async fn personality_type_follows_dimensions_not_reply_code() {
        let provider = MockAIProvider::new().with_json(json!({
            "dimensions": {"extroversion": 40, "sensing": 10, "thinking": 70, "judging": 5},
            "type": "INFP",
            "confidence": 88
        }));

        let result = analyzer(provider).classify_personality("texto", &[]).await;

        assert_eq!(result.personality_type, PersonalityType::ESTJ);
        assert_eq!(result.confidence, 88);
        assert_eq!(
            result.description,
            PersonalityType::ESTJ.description().description
        );
    }

    #[tokio::test]
    async fn personality_missing_dimensions_resolve_to_opposite_letters() {
        let provider = MockAIProvider::new().with_json(json!({}));

        let result = analyzer(provider).classify_personality("texto", &[]).await;

        assert_eq!(result.personality_type, PersonalityType::INFP);
        assert_eq!(result.confidence, 70);
    }

    #[tokio::test]
    async fn personality_failure_returns_canned_profile() {
        let provider =
            MockAIProvider::new().with_error(MockError::Unavailable { message: "down".into() });

        let result = analyzer(provider).classify_personality("texto", &[]).await;

        assert_eq!(result, PersonalityTypeProfile::canned());
        assert_eq!(result.personality_type, PersonalityType::ENFP);
    }

    #[test]
    fn code_fence_is_stripped() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn numeric_conversions_clamp() {
        assert_eq!(to_axis(250.4), 100);
        assert_eq!(to_axis(-12.6), -13);
        assert_eq!(to_axis(f64::NAN), 0);
        assert_eq!(to_confidence(Some(140.0)), 100);
        assert_eq!(to_confidence(Some(-3.0)), 0);
        assert_eq!(to_confidence(None), 70);
    }
}
