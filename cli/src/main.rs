mod config;
mod scrape;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use job_analyzer::{print_statistics_table, DEFAULT_LANGUAGES};

use crate::config::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Site {
    HeadHunter,
    SuperJob,
}

/// Vacancy counts and average salaries for programming languages in Moscow
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job sites to query, in order
    #[clap(long, value_enum)]
    site: Vec<Site>,

    /// Languages to search for, defaults to the built-in catalog
    #[clap(long)]
    language: Vec<String>,

    /// Only count vacancies published within this many days
    #[clap(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=3650))]
    period_days: u32,
}

impl Cli {
    fn sites(&self) -> Vec<Site> {
        if self.site.is_empty() {
            vec![Site::HeadHunter, Site::SuperJob]
        } else {
            self.site.clone()
        }
    }

    fn languages(&self) -> Vec<String> {
        if self.language.is_empty() {
            DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
        } else {
            self.language.clone()
        }
    }
}

fn report(error: &Error) {
    log::error!("run failed: {:?}", error);
    match error {
        Error::Scrape(e) if e.is_data_error() => eprintln!("Ошибка обработки данных: {}", e),
        Error::Scrape(e @ job_scraper::Error::PeriodOutOfRange(_)) => {
            eprintln!("Ошибка конфигурации: {}", e)
        }
        Error::Scrape(e) => eprintln!("Ошибка при выполнении запроса: {}", e),
        Error::MissingVar(_) => eprintln!("Ошибка конфигурации: {}", error),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    match scrape::scrape(&args.sites(), &args.languages(), args.period_days).await {
        Ok(tables) => {
            for (platform, statistics) in &tables {
                print_statistics_table(statistics, platform);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Cli::parse_from(["vacancy-stats"]);
        assert_eq!(args.sites(), vec![Site::HeadHunter, Site::SuperJob]);
        assert_eq!(args.languages().len(), 9);
        assert_eq!(args.languages()[0], "Python");
        assert_eq!(args.period_days, 30);
    }

    #[test]
    fn test_explicit_sites_and_languages() {
        let args = Cli::parse_from([
            "vacancy-stats",
            "--site",
            "super-job",
            "--language",
            "Rust",
            "--language",
            "C++",
        ]);
        assert_eq!(args.sites(), vec![Site::SuperJob]);
        assert_eq!(args.languages(), vec!["Rust", "C++"]);
    }

    #[test]
    fn test_period_days_is_bounded() {
        let args = Cli::try_parse_from(["vacancy-stats", "--period-days", "7"]).expect("7 is valid");
        assert_eq!(args.period_days, 7);
        for value in ["0", "-5", "3651", "100000000"] {
            let result = Cli::try_parse_from(["vacancy-stats", "--period-days", value]);
            assert!(result.is_err(), "--period-days {} should be rejected", value);
        }
    }
}
