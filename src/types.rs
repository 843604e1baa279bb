//!
//! src/types.rs  Andrew Belles  Oct 19th, 2026
//!
//! Shapes of the saavn search response. Fields are trusted as the server
//! sends them, the types only pin down what we expect to read.
//!

use serde::{Deserialize, Serialize};

/// Envelope around every search: { data: { results: [...] } }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    pub data: SearchData<T>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchData<T> {
    pub results: Vec<T>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub quality: String,
    pub url: String
}

// Same shape as Image, points at an audio stream instead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadUrl {
    pub quality: String,
    pub url: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: Vec<Image>,
    pub url: String
}

/// Artist credits, each list in the order the api returned it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artists {
    pub primary: Vec<Artist>,
    pub featured: Vec<Artist>,
    pub all: Vec<Artist>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: Option<String>,
    pub duration: Option<u64>,      // seconds
    pub label: Option<String>,
    pub language: String,
    pub url: String,
    pub album: Album,
    pub artists: Artists,
    pub image: Vec<Image>,
    pub download_url: Vec<DownloadUrl>
}

impl Song {
    /// Primary artist names joined for display, e.g. "Arijit Singh, Pritam"
    pub fn primary_artist_names(&self) -> String {
        self.artists.primary
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
