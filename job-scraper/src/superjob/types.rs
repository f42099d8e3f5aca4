use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: Option<u64>,
    pub profession: Option<String>,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchPage {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u64,
    pub(crate) more: bool,
}
