use job_scraper::{Result, VacancySource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStatistics {
    /// Total reported by the platform, not the number of records received
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: Option<u64>,
}

/// Per-language statistics, kept in the order languages were searched
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatisticsTable {
    rows: Vec<(String, LanguageStatistics)>,
}

impl StatisticsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the statistics of a language already present, keeping its position
    pub fn insert(&mut self, language: String, statistics: LanguageStatistics) {
        match self.rows.iter_mut().find(|(l, _)| *l == language) {
            Some((_, existing)) => *existing = statistics,
            None => self.rows.push((language, statistics)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStatistics> {
        self.rows
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, statistics)| statistics)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStatistics)> {
        self.rows.iter().map(|(l, s)| (l.as_str(), s))
    }
}

pub fn summarize<I>(vacancies_found: u64, salaries: I) -> LanguageStatistics
where
    I: IntoIterator<Item = f64>,
{
    let (count, sum) = salaries
        .into_iter()
        .fold((0usize, 0.0), |(count, sum), salary| (count + 1, sum + salary));
    let average_salary = if count > 0 {
        Some((sum / count as f64) as u64)
    } else {
        None
    };
    LanguageStatistics {
        vacancies_found,
        vacancies_processed: count,
        average_salary,
    }
}

/// Searches every language in turn. The first failed search aborts the run.
pub async fn calculate_statistics<S>(source: &S, languages: &[String]) -> Result<StatisticsTable>
where
    S: VacancySource + Sync,
{
    let mut statistics = StatisticsTable::new();
    for language in languages {
        let result = source.fetch(language).await?;
        let salaries = result
            .vacancies
            .iter()
            .filter_map(|vacancy| source.predict_rub_salary(vacancy));
        let language_statistics = summarize(result.found, salaries);
        log::info!(
            "{}: {} processed out of {} found for {}",
            source.name(),
            language_statistics.vacancies_processed,
            language_statistics.vacancies_found,
            language
        );
        statistics.insert(language.clone(), language_statistics);
    }
    Ok(statistics)
}
