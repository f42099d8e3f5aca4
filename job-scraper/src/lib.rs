pub mod api;
pub mod headhunter;
pub mod salary;
pub mod superjob;

pub use api::{SearchResult, VacancySource};

use chrono::{DateTime, Days, Utc};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' failed with status {status}")]
    RequestNotOk {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Unexpected response from '{url}': {source}")]
    Deserialize {
        url: String,
        source: serde_json::Error,
    },
    #[error("Search period of {0} days reaches past the supported date range")]
    PeriodOutOfRange(u32),
}

impl Error {
    /// The response arrived but did not have the shape we expected
    pub fn is_data_error(&self) -> bool {
        matches!(self, Error::Deserialize { .. })
    }
}

/// Earliest publication date still counted, `period_days` before now
pub(crate) fn date_floor(period_days: u32) -> Result<DateTime<Utc>> {
    Utc::now()
        .checked_sub_days(Days::new(u64::from(period_days)))
        .ok_or(Error::PeriodOutOfRange(period_days))
}

/// Reads a page body and decodes it, keeping network and data-shape failures apart
pub(crate) async fn read_page<T>(resp: reqwest::Response) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let url = resp.url().to_string();
    if !resp.status().is_success() {
        let status = resp.status();
        let error_body = resp.text().await;
        log::error!(
            "request to {} not successful, status code: {}, body: {:?}",
            url,
            status,
            error_body
        );
        return Err(Error::RequestNotOk { url, status });
    }
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|source| Error::Deserialize { url, source })
}
