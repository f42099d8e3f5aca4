use job_analyzer::{calculate_statistics, StatisticsTable};
use job_scraper::{headhunter, superjob, VacancySource};

use crate::config::{self, Error};
use crate::Site;

enum Source {
    HeadHunter(headhunter::Client),
    SuperJob(superjob::Client),
}

impl Source {
    fn new(site: Site, period_days: u32) -> Result<Self, Error> {
        Ok(match site {
            Site::HeadHunter => {
                Source::HeadHunter(headhunter::Client::new(config::headhunter_config(period_days)))
            }
            Site::SuperJob => {
                Source::SuperJob(superjob::Client::new(config::superjob_config(period_days)?))
            }
        })
    }
}

async fn collect<S>(source: &S, languages: &[String]) -> Result<(&'static str, StatisticsTable), Error>
where
    S: VacancySource + Sync,
{
    log::info!("collecting {} statistics for {} languages", source.name(), languages.len());
    let statistics = calculate_statistics(source, languages).await?;
    Ok((source.name(), statistics))
}

/// Runs every site in order; tables come back labelled with the site name.
/// Configuration for all sites is checked before the first request.
pub async fn scrape(
    sites: &[Site],
    languages: &[String],
    period_days: u32,
) -> Result<Vec<(&'static str, StatisticsTable)>, Error> {
    let sources = sites
        .iter()
        .map(|site| Source::new(*site, period_days))
        .collect::<Result<Vec<_>, _>>()?;

    let mut tables = Vec::with_capacity(sources.len());
    for source in &sources {
        let table = match source {
            Source::HeadHunter(client) => collect(client, languages).await?,
            Source::SuperJob(client) => collect(client, languages).await?,
        };
        tables.push(table);
    }
    Ok(tables)
}
