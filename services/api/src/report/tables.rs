use crate::models::records::BudgetRecord;
use crate::models::response::FiscalYearRow;

/// Fiscal-summary rows from one budget record, `{value}B` formatted.
pub fn fiscal_table(record: &BudgetRecord) -> Vec<FiscalYearRow> {
    record
        .years
        .iter()
        .enumerate()
        .map(|(i, year)| FiscalYearRow {
            fiscal_year: year.clone(),
            revenue: billions(&record.revenue, i),
            expenses: billions(&record.expenses, i),
            deficit: billions(&record.deficit, i),
        })
        .collect()
}

fn billions(values: &[f64], index: usize) -> String {
    values
        .get(index)
        .map(|v| format!("{}B", v))
        .unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_row_per_fiscal_year() {
        let record = BudgetRecord {
            years: vec!["2022-23".to_string(), "2023-24".to_string()],
            revenue: vec![413.3, 429.1],
            expenses: vec![448.2, 453.0],
            deficit: vec![-34.9, -23.9],
            net_debt: vec![1183.0, 1206.9],
        };

        let rows = fiscal_table(&record);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fiscal_year, "2022-23");
        assert_eq!(rows[0].revenue, "413.3B");
        assert_eq!(rows[1].deficit, "-23.9B");
    }

    #[test]
    fn short_series_fall_back_instead_of_panicking() {
        let record = BudgetRecord {
            years: vec!["2022-23".to_string(), "2023-24".to_string()],
            revenue: vec![413.3],
            expenses: vec![],
            deficit: vec![-34.9, -23.9],
            net_debt: vec![],
        };

        let rows = fiscal_table(&record);
        assert_eq!(rows[1].revenue, "n/a");
        assert_eq!(rows[0].expenses, "n/a");
        assert_eq!(rows[1].deficit, "-23.9B");
    }
}
