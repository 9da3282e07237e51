use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SeriesRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Genre")]
    pub genres: String, // comma-joined, source order
    #[serde(rename = "Actors")]
    pub cast: String, // comma-joined, source order
    #[serde(rename = "Runtime")]
    pub runtime: String, // unit suffix stripped
}
