use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// The signed-in user as cached in browser storage by the login flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredUser")]
pub struct SessionRecord {
    pub name: String,
    pub avatar_url: String,
}

/// Raw shape of the stored blob. Older logins wrote Spanish keys, sometimes
/// next to the English ones, so every spelling gets its own slot.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredUser {
    name: Option<String>,
    nombre: Option<String>,
    avatar_url: Option<String>,
    foto: Option<String>,
    avatar: Option<String>,
}

impl TryFrom<StoredUser> for SessionRecord {
    type Error = &'static str;

    fn try_from(user: StoredUser) -> Result<Self, Self::Error> {
        let name = user.name.or(user.nombre).ok_or("missing field `name`")?;
        let avatar_url = [user.avatar_url, user.foto, user.avatar]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
            .unwrap_or_default();
        Ok(Self { name, avatar_url })
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored session is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SessionRecord {
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// First word of the stored name, shown next to the avatar.
    pub fn display_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    pub fn avatar_src(&self) -> &str {
        if self.avatar_url.trim().is_empty() {
            config::DEFAULT_AVATAR
        } else {
            &self.avatar_url
        }
    }
}

/// Decide what an `<img>` whose load failed should show instead.
///
/// Returns `None` once the placeholder itself is the failing source, so a
/// missing placeholder can't bounce the element through `onerror` forever.
pub fn avatar_fallback(failed_src: &str) -> Option<&'static str> {
    if failed_src.ends_with(config::DEFAULT_AVATAR) {
        None
    } else {
        Some(config::DEFAULT_AVATAR)
    }
}
