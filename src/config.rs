use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub movie_api_url: String,
    pub movie_api_key: String,
    pub image_base_url: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let movie_api_url = std::env::var("MOVIE_API_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3/movie/top_rated".to_string());

        let movie_api_key = std::env::var("MOVIE_API_KEY").unwrap_or_else(|_| "".to_string());

        let image_base_url = std::env::var("IMAGE_BASE_URL")
            .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string())
            .trim()
            .to_string();

        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            movie_api_url,
            movie_api_key,
            image_base_url,
            database_url,
        })
    }
}
