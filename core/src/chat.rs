//! Group chat with per-member auto-translation.
//!
//! Groups and messages are held in memory only — persistence and
//! authentication live outside this core.

use crate::{
    error::{EvoError, EvoResult},
    translate::{translate_text_or_original, Translator},
    types::Locale,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    /// Locale this member reads messages in.
    pub locale: Locale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: String,
    pub sender_locale: Locale,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// A posted message plus one rendering per distinct member locale.
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    pub message: ChatMessage,
    pub renderings: BTreeMap<Locale, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRoom {
    pub id: Uuid,
    pub name: String,
    /// Short invite code, e.g. "X8J2P".
    pub join_code: String,
    members: Vec<Member>,
    messages: Vec<ChatMessage>,
}

impl ChatRoom {
    pub fn new(name: impl Into<String>) -> Self {
        let id = Uuid::new_v4();
        Self {
            join_code: join_code_from(&id),
            id,
            name: name.into(),
            members: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn join(&mut self, name: impl Into<String>, locale: impl Into<Locale>) -> Uuid {
        let member = Member {
            id: Uuid::new_v4(),
            name: name.into(),
            locale: locale.into(),
        };
        let id = member.id;
        self.members.push(member);
        id
    }

    pub fn leave(&mut self, member_id: Uuid) {
        self.members.retain(|m| m.id != member_id);
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Post a message and fan it out through the translation engine,
    /// once per distinct member locale. A failed translation keeps the
    /// original text for that locale.
    pub fn post(
        &mut self,
        member_id: Uuid,
        text: impl Into<String>,
        engine: &dyn Translator,
    ) -> EvoResult<Delivery> {
        let sender = self
            .members
            .iter()
            .find(|m| m.id == member_id)
            .ok_or_else(|| EvoError::UnknownMember {
                member_id: member_id.to_string(),
                group: self.name.clone(),
            })?
            .clone();

        let message = ChatMessage {
            id: Uuid::new_v4(),
            sender: sender.name.clone(),
            sender_locale: sender.locale.clone(),
            text: text.into(),
            sent_at: Utc::now(),
        };

        let mut renderings = BTreeMap::new();
        for member in &self.members {
            if renderings.contains_key(&member.locale) {
                continue;
            }
            let rendered = if member.locale == sender.locale {
                message.text.clone()
            } else {
                translate_text_or_original(
                    engine,
                    &message.text,
                    &member.locale,
                    Some(&sender.locale),
                )
            };
            renderings.insert(member.locale.clone(), rendered);
        }

        self.messages.push(message.clone());
        Ok(Delivery { message, renderings })
    }
}

/// Derive a short uppercase invite code from the group id.
fn join_code_from(id: &Uuid) -> String {
    id.simple()
        .to_string()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(5)
        .collect::<String>()
        .to_uppercase()
}
