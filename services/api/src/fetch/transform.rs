//! Pure body-to-record transforms for the three upstream response shapes.
//!
//! Input ordering is preserved. Numeric values arrive as JSON numbers or as
//! numeric strings depending on the upstream, so everything goes through one
//! coercion path.

use serde_json::{json, Value};

use crate::fetch::FetchError;
use crate::models::records::{BudgetRecord, ObservationRecord};

/// Jurisdiction budget body: `{"data": [...], "total": n?}`.
pub fn budget_records(body: &Value) -> Result<(Vec<BudgetRecord>, u64), FetchError> {
    let Some(items) = body.get("data").and_then(Value::as_array) else {
        return Err(FetchError::NotFound {
            message: "No budget data found for the specified criteria".to_string(),
            details: json!({}),
        });
    };

    let records = items
        .iter()
        .map(|item| {
            Ok(BudgetRecord {
                years: string_series(item, "fiscal_years"),
                revenue: numeric_series(item, "revenue")?,
                expenses: numeric_series(item, "expenses")?,
                deficit: numeric_series(item, "deficit")?,
                net_debt: numeric_series(item, "net_debt")?,
            })
        })
        .collect::<Result<Vec<_>, FetchError>>()?;

    let total = total_or(body, "total", records.len());
    Ok((records, total))
}

/// Statistics Canada cube body: `{"observations": [{"refPer", "value"}, ...]}`.
pub fn cube_records(body: &Value) -> Result<(Vec<ObservationRecord>, u64), FetchError> {
    observation_records(body, "refPer", "value")
}

/// Bank of Canada Valet body: `{"observations": [{"d", "v"}, ...]}`.
pub fn series_records(body: &Value) -> Result<(Vec<ObservationRecord>, u64), FetchError> {
    observation_records(body, "d", "v")
}

fn observation_records(
    body: &Value,
    date_key: &str,
    value_key: &str,
) -> Result<(Vec<ObservationRecord>, u64), FetchError> {
    let Some(observations) = body.get("observations").and_then(Value::as_array) else {
        return Err(FetchError::NotFound {
            message: "No observations found for the specified criteria".to_string(),
            details: json!({}),
        });
    };

    let records = observations
        .iter()
        .map(|obs| {
            let date = obs
                .get(date_key)
                .map(display_string)
                .ok_or_else(|| FetchError::Transform {
                    message: format!("observation is missing '{}'", date_key),
                })?;
            let value = obs
                .get(value_key)
                .and_then(coerce_f64)
                .ok_or_else(|| FetchError::Transform {
                    message: format!("observation '{}' has a non-numeric '{}'", date, value_key),
                })?;
            Ok(ObservationRecord { date, value })
        })
        .collect::<Result<Vec<_>, FetchError>>()?;

    let total = total_or(body, "totalCount", records.len());
    Ok((records, total))
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn numeric_series(item: &Value, field: &str) -> Result<Vec<f64>, FetchError> {
    let Some(values) = item.get(field).and_then(Value::as_array) else {
        return Ok(Vec::new());
    };
    values
        .iter()
        .map(|v| {
            coerce_f64(v).ok_or_else(|| FetchError::Transform {
                message: format!("budget field '{}' contains a non-numeric value", field),
            })
        })
        .collect()
}

fn string_series(item: &Value, field: &str) -> Vec<String> {
    item.get(field)
        .and_then(Value::as_array)
        .map(|values| values.iter().map(display_string).collect())
        .unwrap_or_default()
}

fn total_or(body: &Value, key: &str, fallback: usize) -> u64 {
    body.get(key).and_then(Value::as_u64).unwrap_or(fallback as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_observation_coerces_string_values() {
        let body = json!({ "observations": [{ "refPer": "2023", "value": "2.5" }] });
        let (records, total) = cube_records(&body).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "2023");
        assert_eq!(records[0].value, 2.5);
        assert_eq!(total, 1);
    }

    #[test]
    fn series_observations_preserve_order_and_total() {
        let body = json!({
            "observations": [
                { "d": "2023-01-01", "v": 1.2 },
                { "d": "2023-02-01", "v": "1.4" }
            ],
            "totalCount": 240
        });
        let (records, total) = series_records(&body).unwrap();

        assert_eq!(records[0].date, "2023-01-01");
        assert_eq!(records[1].value, 1.4);
        assert_eq!(total, 240);
    }

    #[test]
    fn missing_observations_key_is_not_found() {
        let body = json!({ "status": "ok" });
        match cube_records(&body) {
            Err(FetchError::NotFound { .. }) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_observation_is_a_transform_failure() {
        let body = json!({ "observations": [{ "refPer": "2023", "value": "n/a" }] });
        match cube_records(&body) {
            Err(FetchError::Transform { message }) => assert!(message.contains("2023")),
            other => panic!("expected Transform, got {:?}", other),
        }
    }

    #[test]
    fn budget_body_maps_field_arrays() {
        let body = json!({
            "data": [{
                "fiscal_years": ["2022-23", "2023-24"],
                "revenue": [413.3, "429.1"],
                "expenses": [448.2, 453.0],
                "deficit": [-34.9, -23.9],
                "net_debt": [1183.0, 1206.9]
            }],
            "total": 7
        });
        let (records, total) = budget_records(&body).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].years, vec!["2022-23", "2023-24"]);
        assert_eq!(records[0].revenue[1], 429.1);
        assert_eq!(records[0].deficit[0], -34.9);
        assert_eq!(total, 7);
    }

    #[test]
    fn budget_body_without_data_key_is_not_found() {
        match budget_records(&json!({})) {
            Err(FetchError::NotFound { message, .. }) => {
                assert!(message.contains("No budget data"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn budget_total_falls_back_to_record_count() {
        let body = json!({ "data": [{ "fiscal_years": [], "revenue": [] }] });
        let (_, total) = budget_records(&body).unwrap();
        assert_eq!(total, 1);
    }
}
