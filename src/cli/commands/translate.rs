use std::env;
use std::io::{self, Write};

use anyhow::{Result, anyhow};

use crate::translation::{
    TRANSLATE_ENDPOINT, Translation, TranslationClient, TranslationRequest, unescape,
};

/// Environment variable consulted when `--key` is not supplied.
pub const API_KEY_ENV: &str = "GOOGLEAPIKEY";

pub struct TranslateOptions {
    pub key: Option<String>,
    pub to: String,
    pub from: Option<String>,
    pub text: Vec<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    // Credential resolution happens before any network access.
    let key = resolve_api_key(options.key, env::var(API_KEY_ENV).ok())?;

    let request = TranslationRequest {
        key,
        target: options.to,
        source: options.from.filter(|s| !s.is_empty()),
        query: options.text.join(" "),
    };

    let client = TranslationClient::new(TRANSLATE_ENDPOINT.to_string());
    let translations = client.translate(&request).await?;

    let mut stdout = io::stdout().lock();
    for translation in &translations {
        writeln!(stdout, "{}", format_translation(translation))?;
    }

    Ok(())
}

/// Render one translation record as its output line, with HTML
/// entities unescaped.
pub fn format_translation(translation: &Translation) -> String {
    format!(
        "{} ({})",
        unescape(&translation.translated_text),
        translation.detected_source_language
    )
}

/// Pick the API key: a non-empty `--key` flag wins, then a non-empty
/// `GOOGLEAPIKEY` value. The environment lookup happens at the call
/// site so resolution itself stays a pure function.
fn resolve_api_key(flag: Option<String>, env_key: Option<String>) -> Result<String> {
    flag.filter(|k| !k.is_empty())
        .or_else(|| env_key.filter(|k| !k.is_empty()))
        .ok_or_else(|| {
            anyhow!(
                "Missing API key\n\n\
                 Provide it via:\n  \
                 - CLI option: translate --key <key> <text>...\n  \
                 - Environment variable: {API_KEY_ENV}"
            )
        })
}
