use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ApiError;
use crate::models::response::FiscalYearRow;

const TEMPLATE: &str = include_str!("../../templates/report_template.md");

pub struct ReportContext<'a> {
    pub title: &'a str,
    pub narrative: &'a str,
    pub user_name: &'a str,
    pub company_email: &'a str,
}

/// Fills the report template with narrative, graph embeds, and table rows.
pub fn render(ctx: &ReportContext<'_>, graph_urls: &[String], tables: &[FiscalYearRow]) -> String {
    let graph_md = graph_urls
        .iter()
        .map(|url| {
            let name = url.rsplit('/').next().unwrap_or(url);
            format!("![{}]({})", name, url)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let table_md = tables
        .iter()
        .map(|row| {
            format!(
                "| {} | {} | {} | {} |",
                row.fiscal_year, row.revenue, row.expenses, row.deficit
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    TEMPLATE
        .replace("{report_title}", ctx.title)
        .replace("{report_content}", ctx.narrative)
        .replace("{user_name}", ctx.user_name)
        .replace("{company_email}", ctx.company_email)
        .replace("{graph_paths}", &graph_md)
        .replace("{table_data}", &table_md)
}

/// Writes the rendered report under `output_dir` and returns its path.
pub fn write_report(output_dir: &Path, title: &str, contents: &str) -> Result<PathBuf, ApiError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{}.md", file_stem(title)));
    fs::write(&path, contents)?;
    tracing::info!("Generated report: {}", path.display());
    Ok(path)
}

fn file_stem(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else if c == ' ' {
                Some('_')
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<FiscalYearRow> {
        vec![FiscalYearRow {
            fiscal_year: "2023-24".to_string(),
            revenue: "429.1B".to_string(),
            expenses: "453.0B".to_string(),
            deficit: "-23.9B".to_string(),
        }]
    }

    #[test]
    fn render_fills_every_placeholder() {
        let ctx = ReportContext {
            title: "Financial Report: Federal - Canada",
            narrative: "Revenues grew modestly while program spending outpaced them.",
            user_name: "Jordan Li",
            company_email: "jordan@example.com",
        };
        let urls = vec!["http://localhost:8080/reports/net_debt.png".to_string()];

        let out = render(&ctx, &urls, &rows());
        assert!(out.contains("# Financial Report: Federal - Canada"));
        assert!(out.contains("![net_debt.png](http://localhost:8080/reports/net_debt.png)"));
        assert!(out.contains("| 2023-24 | 429.1B | 453.0B | -23.9B |"));
        assert!(out.contains("Jordan Li"));
        assert!(!out.contains('{'));
    }

    #[test]
    fn file_stem_keeps_filenames_tame() {
        assert_eq!(
            file_stem("Financial Report: Province - British Columbia"),
            "Financial_Report_Province_-_British_Columbia"
        );
    }
}
