//! SuperJob vacancy search, paged with the `more` flag
pub mod types;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::api::{SearchResult, VacancySource};
use crate::salary::predict_salary;
use crate::{date_floor, read_page, Result};
use types::{SearchPage, Vacancy};

const RUB_CURRENCY: &str = "rub";
const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub town: String,
    /// 48 is "Development, programming"
    pub catalogue: u32,
    pub period_days: u32,
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0".to_owned(),
            api_key,
            town: "Москва".to_owned(),
            catalogue: 48,
            period_days: 30,
        }
    }
}

pub struct Client {
    client: HttpClient,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self::with_client(config, HttpClient::new())
    }

    pub fn with_client(config: Config, client: HttpClient) -> Self {
        Self { client, config }
    }

    async fn fetch_page(&self, keywords: &str, date_from: i64, page: u32) -> Result<SearchPage> {
        let url = format!("{}/vacancies/", self.config.base_url);
        log::debug!("requesting vacancies from superjob, page: {}, search: {}", page, keywords);
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(&[
                ("keywords", keywords.to_owned()),
                ("town", self.config.town.clone()),
                ("catalogues", self.config.catalogue.to_string()),
                ("date_published_from", date_from.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;
        read_page(resp).await
    }
}

#[async_trait]
impl VacancySource for Client {
    type Vacancy = Vacancy;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    async fn fetch(&self, language: &str) -> Result<SearchResult<Vacancy>> {
        let keywords = format!("Программист {}", language);
        let date_from = date_floor(self.config.period_days)?.timestamp();

        let mut vacancies = Vec::new();
        let mut found = 0;
        let mut page = 0;
        let mut more_pages = true;
        while more_pages {
            let search_page = self.fetch_page(&keywords, date_from, page).await?;
            vacancies.extend(search_page.objects);
            found = search_page.total;
            more_pages = search_page.more;
            page += 1;
        }
        log::info!(
            "superjob: {} vacancies fetched for {}, {} reported",
            vacancies.len(),
            language,
            found
        );
        Ok(SearchResult { vacancies, found })
    }

    fn predict_rub_salary(&self, vacancy: &Vacancy) -> Option<f64> {
        predict_rub_salary(vacancy)
    }
}

pub fn predict_rub_salary(vacancy: &Vacancy) -> Option<f64> {
    if vacancy.currency.as_deref() != Some(RUB_CURRENCY) {
        return None;
    }
    predict_salary(vacancy.payment_from, vacancy.payment_to)
}
