/// Point estimate from a salary fork.
/// Zero is how both platforms spell "not specified", so it counts as absent.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|v| *v != 0.0);
    let to = to.filter(|v| *v != 0.0);
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}
