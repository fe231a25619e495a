//! Translation pass-through.
//!
//! RULE: translation failure is non-fatal and invisible beyond
//! untranslated text. Every helper here returns the original input when
//! the underlying engine fails; callers never branch on errors.

use crate::{
    error::EvoResult,
    types::Locale,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The localization engine contract. One method — structured helpers
/// below are built on top of it.
pub trait Translator {
    fn translate_text(&self, text: &str, target: &Locale, source: Option<&Locale>) -> EvoResult<String>;
}

/// The no-credentials engine: every text comes back unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate_text(&self, text: &str, _target: &Locale, _source: Option<&Locale>) -> EvoResult<String> {
        Ok(text.to_string())
    }
}

/// One line of a group-chat conversation. Speaker names are never
/// translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLine {
    pub name: String,
    pub text: String,
}

/// Translate a plain string, keeping the original on failure.
/// Empty input short-circuits to empty output.
pub fn translate_text_or_original(
    engine: &dyn Translator,
    text: &str,
    target: &Locale,
    source: Option<&Locale>,
) -> String {
    if text.is_empty() {
        return String::new();
    }
    match engine.translate_text(text, target, source) {
        Ok(translated) => translated,
        Err(e) => {
            log::warn!("translation to '{target}' failed, keeping original: {e}");
            text.to_string()
        }
    }
}

/// Translate a flat string map, preserving keys and structure. Entries
/// that fail keep their original value.
pub fn translate_object(
    engine: &dyn Translator,
    content: &BTreeMap<String, String>,
    target: &Locale,
    source: Option<&Locale>,
) -> BTreeMap<String, String> {
    content
        .iter()
        .map(|(key, value)| {
            let translated = translate_text_or_original(engine, value, target, source);
            (key.clone(), translated)
        })
        .collect()
}

/// Translate a conversation message-by-message, preserving speaker
/// names. Lines with empty text are dropped, matching the sanitize
/// step of the original flow.
pub fn translate_chat(
    engine: &dyn Translator,
    conversation: &[ChatLine],
    target: &Locale,
    source: Option<&Locale>,
) -> Vec<ChatLine> {
    conversation
        .iter()
        .filter(|line| !line.text.is_empty())
        .map(|line| ChatLine {
            name: line.name.clone(),
            text: translate_text_or_original(engine, &line.text, target, source),
        })
        .collect()
}
