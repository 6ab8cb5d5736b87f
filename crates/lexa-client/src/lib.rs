use async_trait::async_trait;
use lexa_core::{Entry, Lexicon, LookupError};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Client for the free dictionary REST API (dictionaryapi.dev).
///
/// One GET per lookup, no API key. The service answers unknown words with
/// a 404 and an explanatory JSON body; the body is not consulted.
#[derive(Clone)]
pub struct DictApiClient {
    endpoint: String,
    language: String,
    client: reqwest::Client,
}

impl DictApiClient {
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            language: language.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn entry_url(&self, term: &str) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.language,
            utf8_percent_encode(term, NON_ALPHANUMERIC)
        )
    }
}

#[async_trait]
impl Lexicon for DictApiClient {
    async fn lookup(&self, term: &str) -> Result<Vec<Entry>, LookupError> {
        let url = self.entry_url(term);
        tracing::debug!("looking up {term:?} at {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("lookup of {term:?} answered {status}");
            return Err(LookupError::NotFound {
                term: term.to_string(),
            });
        }

        response
            .json::<Vec<Entry>>()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))
    }
}
