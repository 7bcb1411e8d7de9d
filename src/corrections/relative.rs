/// Gravity readings relative to the first one.
pub fn relative_gravity(gravity: &[f64]) -> Vec<f64> {
    match gravity.first() {
        Some(g0) => gravity.iter().map(|g| g - g0).collect(),
        None => Vec::new(),
    }
}
