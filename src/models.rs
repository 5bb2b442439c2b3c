use anyhow::Context;
use serde::Deserialize;

use crate::catalog::Candidate;

pub const DEFAULT_REVIEW: &str = "No review yet";

/// Field values for a movie that has not been inserted yet.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub rating: f64,
    pub review: String,
    pub img_url: String,
}

impl NewMovie {
    /// Maps an external candidate onto local movie fields. The year is the
    /// leading component of the release date; the poster URL is the image
    /// base concatenated with the poster path as-is.
    pub fn from_candidate(candidate: &Candidate, image_base: &str) -> anyhow::Result<Self> {
        let year: i32 = candidate
            .release_date
            .split('-')
            .next()
            .unwrap_or_default()
            .parse()
            .with_context(|| {
                format!("bad release date {:?} for {:?}", candidate.release_date, candidate.title)
            })?;

        Ok(Self {
            title: candidate.title.clone(),
            year,
            description: candidate.overview.clone(),
            rating: 0.0,
            review: DEFAULT_REVIEW.to_string(),
            img_url: format!("{image_base}{}", candidate.poster_path.as_deref().unwrap_or_default()),
        })
    }
}

/// Raw edit-form input, exactly as submitted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

/// Validated edit-form values.
#[derive(Clone, Debug, PartialEq)]
pub struct EditInput {
    pub rating: f64,
    pub review: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EditErrors {
    pub rating: Option<&'static str>,
    pub review: Option<&'static str>,
}

impl EditForm {
    pub fn validate(&self) -> Result<EditInput, EditErrors> {
        let mut errors = EditErrors::default();

        let rating = self.rating.trim();
        let rating = if rating.is_empty() {
            errors.rating = Some("Rating is required.");
            None
        } else {
            match rating.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.rating = Some("Rating must be a number.");
                    None
                },
            }
        };

        let review = self.review.trim();
        if review.is_empty() {
            errors.review = Some("Review is required.");
        }

        match (rating, errors.review) {
            (Some(rating), None) => Ok(EditInput { rating, review: review.to_string() }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Candidate {
        Candidate {
            id: 42,
            title: "X".to_string(),
            release_date: "1999-03-02".to_string(),
            overview: "...".to_string(),
            poster_path: Some("/p.jpg".to_string()),
        }
    }

    #[test]
    fn candidate_maps_to_new_movie() {
        let new = NewMovie::from_candidate(&candidate(), "https://img/").unwrap();

        assert_eq!(new.title, "X");
        assert_eq!(new.year, 1999);
        assert_eq!(new.description, "...");
        assert_eq!(new.rating, 0.0);
        assert_eq!(new.review, "No review yet");
        assert_eq!(new.img_url, "https://img//p.jpg");
    }

    #[test]
    fn unparseable_release_date_is_an_error() {
        let mut c = candidate();
        c.release_date = String::new();
        assert!(NewMovie::from_candidate(&c, "https://img/").is_err());
    }

    #[test]
    fn missing_poster_path_falls_back_to_bare_base() {
        let mut c = candidate();
        c.poster_path = None;
        let new = NewMovie::from_candidate(&c, "https://img/").unwrap();
        assert_eq!(new.img_url, "https://img/");
    }

    #[test]
    fn valid_form_parses() {
        let form = EditForm { rating: "8.5".to_string(), review: "Great".to_string() };
        assert_eq!(
            form.validate().unwrap(),
            EditInput { rating: 8.5, review: "Great".to_string() }
        );
    }

    #[test]
    fn non_numeric_rating_is_rejected() {
        let form = EditForm { rating: "abc".to_string(), review: "Great".to_string() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.rating, Some("Rating must be a number."));
        assert_eq!(errors.review, None);
    }

    #[test]
    fn empty_fields_are_rejected() {
        let form = EditForm { rating: "  ".to_string(), review: "".to_string() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.rating, Some("Rating is required."));
        assert_eq!(errors.review, Some("Review is required."));
    }
}
