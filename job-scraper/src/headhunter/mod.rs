//! HeadHunter vacancy search, paged with `page`/`pages`
pub mod types;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client as HttpClient;

use crate::api::{SearchResult, VacancySource};
use crate::salary::predict_salary;
use crate::{date_floor, read_page, Result};
use types::{SearchPage, Vacancy};

const RUB_CURRENCY: &str = "RUR";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// 1 is Moscow
    pub area: String,
    pub period_days: u32,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru".to_owned(),
            area: "1".to_owned(),
            period_days: 30,
            user_agent: "vacancy-stats/0.1".to_owned(),
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

    async fn fetch_page(&self, text: &str, date_from: &str, page: u32) -> Result<SearchPage> {
        let url = format!("{}/vacancies", self.config.base_url);
        log::debug!("requesting vacancies from hh, page: {}, search: {}", page, text);
        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .query(&[
                ("text", text),
                ("area", self.config.area.as_str()),
                ("date_from", date_from),
                ("page", page.to_string().as_str()),
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
        "HeadHunter"
    }

    async fn fetch(&self, language: &str) -> Result<SearchResult<Vacancy>> {
        let text = format!("Программист {}", language);
        let date_from = date_floor(self.config.period_days)?
            .format("%Y-%m-%d")
            .to_string();

        let mut vacancies = Vec::new();
        let mut found = 0;
        let mut page = 0;
        let mut pages_number = 1;
        while page < pages_number {
            let search_page = self.fetch_page(&text, &date_from, page).await?;
            pages_number = search_page.pages;
            found = search_page.found;
            page += 1;
            vacancies.extend(search_page.items);
        }
        log::info!(
            "hh: {} vacancies fetched for {}, {} reported",
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
    let salary = vacancy.salary.as_ref()?;
    if salary.currency.as_deref() != Some(RUB_CURRENCY) {
        return None;
    }
    predict_salary(salary.from, salary.to)
}
