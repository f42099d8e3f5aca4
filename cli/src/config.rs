use job_scraper::{headhunter, superjob};
use thiserror::Error;

pub const SUPER_JOB_KEY: &str = "SUPER_JOB_KEY";

#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable '{0}' is not set")]
    MissingVar(&'static str),
    #[error(transparent)]
    Scrape(#[from] job_scraper::Error),
}

pub fn headhunter_config(period_days: u32) -> headhunter::Config {
    headhunter::Config {
        period_days,
        ..headhunter::Config::default()
    }
}

/// Reads the SuperJob key from the environment (a `.env` file counts)
pub fn superjob_config(period_days: u32) -> Result<superjob::Config, Error> {
    let api_key = std::env::var(SUPER_JOB_KEY).map_err(|_| Error::MissingVar(SUPER_JOB_KEY))?;
    Ok(superjob::Config {
        period_days,
        ..superjob::Config::new(api_key)
    })
}
