use super::types::{TranslateResult, Translation, Translator};
use async_trait::async_trait;

/// Never answers; resolution falls through to the static dictionary.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTranslator;

#[async_trait]
impl Translator for OfflineTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source: &str,
        _target: &str,
    ) -> TranslateResult<Option<Translation>> {
        Ok(None)
    }
}
