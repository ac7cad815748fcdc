use super::config::{KEEPALIVE, MYMEMORY_API, REQUEST_TIMEOUT};
use super::types::{TranslateError, TranslateResult, Translation, Translator};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use url::Url;

#[derive(Deserialize, Debug)]
struct MyMemoryResponse {
    #[serde(rename = "responseData", default)]
    response_data: Option<ResponseData>,
}

#[derive(Deserialize, Debug)]
struct ResponseData {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
    #[serde(rename = "match", default)]
    confidence: Option<f64>,
}

/// Live translator backed by the public MyMemory API.
pub struct MyMemoryTranslator {
    client: Client,
    endpoint: Url,
}

impl MyMemoryTranslator {
    pub fn new() -> TranslateResult<Self> {
        Self::with_endpoint(MYMEMORY_API, REQUEST_TIMEOUT)
    }

    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> TranslateResult<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .tcp_keepalive(KEEPALIVE)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }

    fn request_url(&self, text: &str, source: &str, target: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", text)
            .append_pair("langpair", &format!("{}|{}", source, target));
        url
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<Option<Translation>> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(self.request_url(text, source, target))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed = parse_response(&body)?;

        log::trace!(
            "mymemory.call text={} pair={}|{} found={} perf.us={}",
            text,
            source,
            target,
            parsed.is_some(),
            t0.elapsed().as_micros()
        );

        Ok(parsed)
    }
}

fn parse_response(body: &str) -> TranslateResult<Option<Translation>> {
    let data: MyMemoryResponse =
        serde_json::from_str(body).map_err(|e| TranslateError::Decode(e.to_string()))?;

    let Some(inner) = data.response_data else {
        return Ok(None);
    };

    match (inner.translated_text, inner.confidence) {
        (Some(text), Some(confidence)) => Ok(Some(Translation::new(text, confidence))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_translated_text_and_match_score() {
        let body = r#"{"responseData":{"translatedText":"Flower","match":0.98},"responseStatus":200}"#;
        let parsed = parse_response(body).unwrap().unwrap();
        assert_eq!(parsed.text, "Flower");
        assert!((parsed.confidence - 0.98).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_response_data_is_not_an_error() {
        assert_eq!(parse_response(r#"{"responseStatus":403}"#).unwrap(), None);
        assert_eq!(
            parse_response(r#"{"responseData":{"translatedText":"x"}}"#).unwrap(),
            None
        );
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = parse_response("<html>busy</html>").unwrap_err();
        assert!(matches!(err, TranslateError::Decode(_)));
    }

    #[test]
    fn request_url_encodes_query_and_language_pair() {
        let translator =
            MyMemoryTranslator::with_endpoint("https://example.test/get", REQUEST_TIMEOUT)
                .unwrap();
        let url = translator.request_url("flor azul", "es", "en");
        assert_eq!(url.path(), "/get");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "flor azul".to_string()),
                ("langpair".to_string(), "es|en".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let err = MyMemoryTranslator::with_endpoint("not a url", REQUEST_TIMEOUT)
            .err()
            .unwrap();
        assert!(matches!(err, TranslateError::Endpoint(_)));
    }
}
