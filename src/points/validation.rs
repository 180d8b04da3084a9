use super::config::PointsConfig;
use std::collections::HashSet;

/// Validate points configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_points(config: &PointsConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.standard_field == Some(0) {
        errors.push("points.standard_field: must be a positive integer".to_string());
    }

    if let Some(ref table) = config.table {
        let mut seen = HashSet::new();
        for key in table.keys() {
            match key.trim().parse::<u32>() {
                Ok(0) => errors.push(format!(
                    "points.table['{}']: placements start at 1",
                    key
                )),
                Ok(placement) => {
                    if !seen.insert(placement) {
                        errors.push(format!(
                            "points.table['{}']: duplicate placement {}",
                            key, placement
                        ));
                    }
                }
                Err(e) => errors.push(format!(
                    "points.table['{}']: invalid placement - {}",
                    key, e
                )),
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
