//! Registry of the platform's built-in emoji (QQ faces).
//!
//! The dataset ships embedded in the crate and is projected once, lazily,
//! into the filtered list the lookups run against: entries without an id,
//! without a visible name, or marked hidden are dropped. The projection is
//! pure and deterministic, so a racing first access at worst recomputes the
//! same list.

use std::sync::OnceLock;

use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::error;

/// The embedded QQ face dataset.
const FACE_DATA: &str = include_str!("../assets/qq-faces.json");

/// One usable emoji from the platform dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    /// Platform emoji identifier.
    pub id: String,
    /// Display name, without the dataset's leading slash.
    pub name: String,
    /// Platform emoticon code, if the dataset carries one.
    pub code: Option<String>,
    /// Input shortcuts that produce this emoji.
    pub inputs: Vec<String>,
}

/// A raw dataset record; most fields are optional and hidden entries stay.
#[derive(Debug, Deserialize)]
struct RawFace {
    #[serde(rename = "QSid")]
    id: Option<String>,
    #[serde(rename = "QDes")]
    description: Option<String>,
    #[serde(rename = "QHide")]
    hidden: Option<String>,
    #[serde(rename = "EMCode")]
    code: Option<String>,
    #[serde(rename = "Input", default)]
    inputs: Vec<String>,
}

/// Lazily built, cached, indexed view over the embedded emoji dataset.
#[derive(Debug, Default)]
pub struct EmojiRegistry {
    faces: OnceLock<Vec<Emoji>>,
}

impl EmojiRegistry {
    /// Creates a registry; nothing is parsed until the first lookup.
    pub const fn new() -> Self {
        Self {
            faces: OnceLock::new(),
        }
    }

    /// All usable emojis, in dataset order.
    pub fn all(&self) -> &[Emoji] {
        self.faces.get_or_init(|| {
            let raw: Vec<RawFace> = match serde_json::from_str(FACE_DATA) {
                Ok(faces) => faces,
                Err(err) => {
                    error!(error = %err, "embedded face dataset failed to parse");
                    Vec::new()
                }
            };

            raw.into_iter()
                .filter_map(|face| {
                    let id = face.id?;
                    let description = face.description?;
                    if description.is_empty() || face.hidden.as_deref() == Some("1") {
                        return None;
                    }
                    Some(Emoji {
                        id,
                        name: strip_slash(&description).to_string(),
                        code: face.code,
                        inputs: face.inputs,
                    })
                })
                .collect()
        })
    }

    /// A uniformly random usable emoji, or `None` on an empty dataset.
    pub fn random(&self) -> Option<&Emoji> {
        self.all().choose(&mut rand::thread_rng())
    }

    /// Looks an emoji up by its platform identifier.
    pub fn by_id(&self, id: &str) -> Option<&Emoji> {
        self.all().iter().find(|emoji| emoji.id == id)
    }

    /// Looks an emoji up by name; a leading `/` on the query is ignored.
    pub fn by_name(&self, name: &str) -> Option<&Emoji> {
        let name = strip_slash(name);
        self.all().iter().find(|emoji| emoji.name == name)
    }
}

/// Strips at most one leading slash.
fn strip_slash(name: &str) -> &str {
    name.strip_prefix('/').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_excludes_hidden_and_incomplete_entries() {
        let registry = EmojiRegistry::new();
        let all = registry.all();
        assert!(!all.is_empty());

        // Hidden entries and entries without an id or name are filtered out.
        assert!(all.iter().all(|e| !e.id.is_empty() && !e.name.is_empty()));
        assert!(registry.by_id("24").is_none()); // QHide = "1"
        assert!(registry.by_id("36").is_none()); // no QDes
    }

    #[test]
    fn names_lose_their_leading_slash() {
        let registry = EmojiRegistry::new();
        let smile = registry.by_id("14").unwrap();
        assert_eq!(smile.name, "微笑");
        assert_eq!(smile.code.as_deref(), Some("100"));
    }

    #[test]
    fn by_name_ignores_leading_slash_on_the_query() {
        let registry = EmojiRegistry::new();
        let with_slash = registry.by_name("/微笑").unwrap();
        let without = registry.by_name("微笑").unwrap();
        assert_eq!(with_slash, without);
        assert_eq!(with_slash.id, "14");
    }

    #[test]
    fn random_returns_a_listed_emoji() {
        let registry = EmojiRegistry::new();
        for _ in 0..32 {
            let emoji = registry.random().unwrap();
            assert!(registry.all().contains(emoji));
        }
    }

    #[test]
    fn unknown_lookups_return_none() {
        let registry = EmojiRegistry::new();
        assert!(registry.by_id("no-such-id").is_none());
        assert!(registry.by_name("no-such-name").is_none());
    }
}
