use crate::models::Provider;

/// Providers a fresh `providers-api` starts with.
static DEFAULT_PROVIDERS: &[(i64, &str, &str)] = &[
    (1, "Sanite Belair", "Pediatry"),
    (2, "Catherine Flon", "Surgery"),
    (3, "Toussaint Louverture", "Podology"),
];

pub fn default_providers() -> Vec<Provider> {
    DEFAULT_PROVIDERS
        .iter()
        .map(|&(id, name, specialty)| Provider::new(id, name, specialty))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ids_are_one_to_three_in_order() {
        let ids: Vec<i64> = default_providers().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
