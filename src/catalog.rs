use serde::Deserialize;

use crate::error::AppResult;

/// One movie from the external metadata endpoint, not yet saved locally.
#[derive(Clone, Debug, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidatePage {
    results: Vec<Candidate>,
}

/// Immutable snapshot of the external movie list, fetched once at startup.
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn get(&self, id: i64) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// One-shot fetch of the candidate list. Any failure here is fatal to
/// startup; there is no retry and no refresh for the process lifetime.
pub async fn fetch(client: &reqwest::Client, url: &str, api_key: &str) -> AppResult<Catalog> {
    let mut req = client.get(url);
    if !api_key.trim().is_empty() {
        req = req.bearer_auth(api_key.trim());
    }

    let page: CandidatePage = req.send().await?.error_for_status()?.json().await?;

    Ok(Catalog::new(page.results))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "page": 1,
        "results": [
            {"id": 42, "title": "X", "release_date": "1999-03-02", "overview": "...", "poster_path": "/p.jpg"},
            {"id": 7, "title": "Y", "overview": "no date or poster", "poster_path": null}
        ]
    }"#;

    #[test]
    fn parses_candidate_page() {
        let page: CandidatePage = serde_json::from_str(PAGE).unwrap();
        let catalog = Catalog::new(page.results);

        assert_eq!(catalog.len(), 2);
        let first = catalog.get(42).unwrap();
        assert_eq!(first.title, "X");
        assert_eq!(first.release_date, "1999-03-02");
        assert_eq!(first.poster_path.as_deref(), Some("/p.jpg"));

        let second = catalog.get(7).unwrap();
        assert_eq!(second.release_date, "");
        assert!(second.poster_path.is_none());
    }

    #[test]
    fn get_misses_unknown_id() {
        let page: CandidatePage = serde_json::from_str(PAGE).unwrap();
        let catalog = Catalog::new(page.results);
        assert!(catalog.get(9999).is_none());
    }
}
