//! LLM-backed judge over a `genai` chat client.

use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use tracing::{debug, instrument, warn};

use super::Judge;
use super::error::{JudgeError, JudgeResult};
use super::parser;
use super::types::Assessment;

/// Article content is cut to this many characters before scoring to stay
/// inside provider token limits.
pub const ARTICLE_EXCERPT_CHARS: usize = 15_000;

/// Hosts a discovered URL must belong to; anything else is dropped.
const TRUSTED_HOSTS: &[&str] = &["pmc.ncbi.nlm.nih.gov", "pubmed.ncbi.nlm.nih.gov"];

const SCORE_SYSTEM_PROMPT: &str = "You extract structured judgments about whether a scientific \
article supports a biological hypothesis. Be objective, concise, and conservative. Provide your \
response as a JSON object with the following structure: {\"relevancy\": <number 0-100>, \
\"key_take\": \"<2-3 sentence summary>\", \"validity\": <number 0-100>}. Relevancy reflects how \
relevant the article is to the hypothesis. Validity reflects how much the article confirms \
(high) or refutes (low) the hypothesis.";

const DISCOVER_SYSTEM_PROMPT: &str =
    "Return JSON with a 'urls' array containing PMC or PubMed article URLs.";

/// Judge configuration.
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Model identifier passed to the provider (e.g. `gpt-4o-mini`).
    pub model: String,
}

/// Default model when `EUREKA_JUDGE_MODEL` is not set.
pub const DEFAULT_JUDGE_MODEL: &str = "gpt-4o-mini";

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_JUDGE_MODEL.to_string(),
        }
    }
}

/// Production [`Judge`] implementation.
///
/// The client and model are injected at construction so tests and
/// alternate providers can substitute their own.
#[derive(Clone)]
pub struct LlmJudge {
    client: Client,
    config: JudgeConfig,
}

impl LlmJudge {
    pub fn new(client: Client, config: JudgeConfig) -> Self {
        Self { client, config }
    }

    /// Judge with a default provider client (API keys from the
    /// environment, per `genai` convention).
    pub fn with_config(config: JudgeConfig) -> Self {
        Self::new(Client::default(), config)
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    async fn exec(&self, system: &str, user: String) -> JudgeResult<String> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(system),
            ChatMessage::user(user),
        ]);

        let response = self
            .client
            .exec_chat(&self.config.model, request, None)
            .await
            .map_err(|e| JudgeError::Provider(e.to_string()))?;

        match response.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(JudgeError::EmptyResponse),
        }
    }
}

impl std::fmt::Debug for LlmJudge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmJudge")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Judge for LlmJudge {
    #[instrument(skip(self, hypothesis, article), fields(article_len = article.len()))]
    async fn score(&self, hypothesis: &str, article: &str) -> JudgeResult<Assessment> {
        let excerpt: String = article.chars().take(ARTICLE_EXCERPT_CHARS).collect();
        let prompt = format!(
            "Hypothesis to validate:\n{hypothesis}\n\nArticle content:\n{excerpt}\n\n\
             Please analyze the article and provide your assessment in the JSON format specified."
        );

        let text = self.exec(SCORE_SYSTEM_PROMPT, prompt).await?;
        debug!(response_len = text.len(), "judge scored article");
        parser::parse_assessment(&text)
    }

    #[instrument(skip(self, hypothesis))]
    async fn discover(&self, hypothesis: &str, count: usize) -> JudgeResult<Vec<String>> {
        let prompt = format!(
            "Hypothesis: \"{hypothesis}\"\n\nReturn JSON with up to {count} URLs of real \
             PMC/PubMed articles relevant to this hypothesis:\n\
             {{\"urls\": [\"https://pmc.ncbi.nlm.nih.gov/articles/PMC<ID>/\", ...]}}"
        );

        let text = self.exec(DISCOVER_SYSTEM_PROMPT, prompt).await?;
        let urls = parser::parse_url_list(&text)?;

        let trusted: Vec<String> = urls
            .into_iter()
            .filter(|url| is_trusted_url(url))
            .take(count)
            .collect();

        if trusted.is_empty() {
            warn!("discovery returned no trusted article URLs");
        }
        Ok(trusted)
    }
}

fn is_trusted_url(url: &str) -> bool {
    TRUSTED_HOSTS.iter().any(|host| {
        url.strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .is_some_and(|rest| rest.starts_with(host))
    })
}

#[cfg(test)]
mod tests {
    use super::is_trusted_url;

    #[test]
    fn trusted_hosts_only() {
        assert!(is_trusted_url(
            "https://pmc.ncbi.nlm.nih.gov/articles/PMC8859548/"
        ));
        assert!(is_trusted_url("https://pubmed.ncbi.nlm.nih.gov/35131123/"));
        assert!(!is_trusted_url("https://example.com/articles/1"));
        assert!(!is_trusted_url("https://evil.test/pmc.ncbi.nlm.nih.gov/"));
        assert!(!is_trusted_url("pmc.ncbi.nlm.nih.gov/articles/PMC1/"));
    }
}
