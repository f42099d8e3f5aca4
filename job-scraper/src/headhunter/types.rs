use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: Option<String>,
    pub name: Option<String>,
    pub salary: Option<Salary>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchPage {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u64,
    pub(crate) pages: u32,
}
