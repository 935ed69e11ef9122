use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adoptable dog as returned by the catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub img: String,
    pub name: String,
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

/// Sort direction for breed ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Sort expression understood by `/dogs/search`
    pub fn breed_sort(&self) -> String {
        format!("breed:{}", self.as_str())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Sort order must be asc or desc, got {}", other)),
        }
    }
}

/// Query for `/dogs/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogSearchParams {
    #[serde(default)]
    pub breeds: Option<Vec<String>>,
    #[serde(rename = "zipCodes", default)]
    pub zip_codes: Option<Vec<String>>,
    #[serde(rename = "ageMin", default)]
    pub age_min: Option<u32>,
    #[serde(rename = "ageMax", default)]
    pub age_max: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl DogSearchParams {
    /// Query-string pairs; list values repeat their key with a `[]` suffix
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        for breed in self.breeds.iter().flatten() {
            query.push(("breeds[]", breed.clone()));
        }
        for zip in self.zip_codes.iter().flatten() {
            query.push(("zipCodes[]", zip.clone()));
        }
        if let Some(age_min) = self.age_min {
            query.push(("ageMin", age_min.to_string()));
        }
        if let Some(age_max) = self.age_max {
            query.push(("ageMax", age_max.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        if let Some(from) = &self.from {
            query.push(("from", from.clone()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort", sort.clone()));
        }

        query
    }
}

/// Page of matching ids from `/dogs/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "resultIds")]
    pub result_ids: Vec<String>,
    pub total: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Response of `/dogs/match`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "match")]
    pub dog_id: String,
}

/// Dog card with the caller's favorite flag attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogCard {
    #[serde(flatten)]
    pub dog: Dog,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}
