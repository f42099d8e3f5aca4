use async_trait::async_trait;

use crate::Result;

/// Every vacancy a search returned, plus the total the platform reported.
/// The two can differ: listings change while we page through them.
#[derive(Debug)]
pub struct SearchResult<V> {
    pub vacancies: Vec<V>,
    pub found: u64,
}

/// A job platform we can search and read rouble salaries from
#[async_trait]
pub trait VacancySource {
    type Vacancy: Send;

    /// Label used in table titles
    fn name(&self) -> &'static str;

    async fn fetch(&self, language: &str) -> Result<SearchResult<Self::Vacancy>>;

    fn predict_rub_salary(&self, vacancy: &Self::Vacancy) -> Option<f64>;
}
