use anyhow::Context;
use std::sync::Arc;

use lexicount::application::resolver::load_dictionary_dir;
use lexicount::application::{Counter, Resolver, StaticDictionary};
use lexicount::infrastructure::translation::{MyMemoryTranslator, OfflineTranslator, Translator};
use lexicount::infrastructure::{Settings, TranslatorBackend, logging};
use lexicount::interfaces::console;

fn build_translator(settings: &Settings) -> anyhow::Result<Arc<dyn Translator>> {
    match settings.backend {
        TranslatorBackend::MyMemory => {
            let translator =
                MyMemoryTranslator::with_endpoint(&settings.api_url, settings.call_timeout)
                    .context("failed to build translation client")?;
            Ok(Arc::new(translator))
        }
        TranslatorBackend::Offline => Ok(Arc::new(OfflineTranslator)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let settings = Settings::from_env();
    log::info!(
        "settings backend={:?} timeout_ms={} confidence={}",
        settings.backend,
        settings.call_timeout.as_millis(),
        settings.confidence_threshold
    );

    let resolver = Resolver::builder()
        .translator(build_translator(&settings)?)
        .dictionary(StaticDictionary::seeded())
        .config(settings.resolver_config())
        .build();

    if let Some(dir) = &settings.dictionary_dir {
        if let Err(e) = load_dictionary_dir(dir, &resolver).await {
            log::error!("Failed to load dictionary dir {}: {}", dir.display(), e);
        }
    }

    let counter = Arc::new(Counter::new(Arc::new(resolver)));
    console::run(counter).await.context("console session failed")?;

    Ok(())
}
