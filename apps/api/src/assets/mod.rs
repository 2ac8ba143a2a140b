// Asset Hub: generated documents and images the user chose to keep.
// Capped, newest first; content is opaque to the backend.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const MAX_ASSETS: usize = 50;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Resume,
    CoverLetter,
    LinkedinProfile,
    Headshot,
    LinkedinBanner,
    ElevatorPitch,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedAsset {
    pub id: Uuid,
    pub kind: AssetKind,
    pub title: String,
    pub content: Value,
    pub created_at: DateTime<Utc>,
}

impl SavedAsset {
    pub fn new(kind: AssetKind, title: impl Into<String>, content: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            content,
            created_at: Utc::now(),
        }
    }
}

/// Prepends and trims to `MAX_ASSETS`. Returns how many were evicted.
pub fn insert_asset(assets: &mut Vec<SavedAsset>, asset: SavedAsset) -> usize {
    assets.insert(0, asset);
    let overflow = assets.len().saturating_sub(MAX_ASSETS);
    assets.truncate(MAX_ASSETS);
    overflow
}

pub fn remove_asset(assets: &mut Vec<SavedAsset>, id: Uuid) -> Option<SavedAsset> {
    let position = assets.iter().position(|a| a.id == id)?;
    Some(assets.remove(position))
}

pub fn filter_assets(assets: &[SavedAsset], kind: Option<AssetKind>) -> Vec<SavedAsset> {
    assets
        .iter()
        .filter(|a| kind.map_or(true, |k| a.kind == k))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_caps_at_max() {
        let mut assets = Vec::new();
        let mut evicted = 0;
        for i in 0..(MAX_ASSETS + 2) {
            evicted += insert_asset(
                &mut assets,
                SavedAsset::new(AssetKind::Resume, format!("resume {i}"), json!({})),
            );
        }
        assert_eq!(assets.len(), MAX_ASSETS);
        assert_eq!(evicted, 2);
        assert_eq!(assets[0].title, format!("resume {}", MAX_ASSETS + 1));
        assert_eq!(assets.last().unwrap().title, "resume 2");
    }

    #[test]
    fn test_filter_by_kind() {
        let mut assets = Vec::new();
        insert_asset(&mut assets, SavedAsset::new(AssetKind::Headshot, "studio", json!({"url": "a"})));
        insert_asset(&mut assets, SavedAsset::new(AssetKind::CoverLetter, "acme", json!({"text": "hi"})));
        assert_eq!(filter_assets(&assets, Some(AssetKind::Headshot)).len(), 1);
        assert_eq!(filter_assets(&assets, None).len(), 2);
        assert!(filter_assets(&assets, Some(AssetKind::ElevatorPitch)).is_empty());
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut assets = vec![SavedAsset::new(AssetKind::Resume, "r", json!({}))];
        assert!(remove_asset(&mut assets, Uuid::new_v4()).is_none());
        assert_eq!(assets.len(), 1);
    }
}
