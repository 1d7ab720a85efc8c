mod client;
mod html;

pub use client::{TRANSLATE_ENDPOINT, Translation, TranslationClient, TranslationRequest};
pub use html::unescape;
