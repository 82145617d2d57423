//! HTML `<table>` extraction: header and row strings.
//!
//! This is the table-to-rows collaborator: given page HTML it returns
//! [`RawTable`]s with every cell still a string. Stat pages put a
//! grouping row ("PASSING", "RUSHING") above the real per-column
//! header, so the last `th` row wins and data rows restart below it.

use crate::error::{FfdpError, Result};
use crate::team::normalize::RawTable;
use scraper::{ElementRef, Html, Selector};

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| FfdpError::Selector {
        message: err.to_string(),
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extract every `<table>` in the document.
pub fn extract_tables(html: &str) -> Result<Vec<RawTable>> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let tr_selector = selector("tr")?;
    let th_selector = selector("th")?;
    let td_selector = selector("td")?;

    let mut tables = Vec::new();
    for table in document.select(&table_selector) {
        let mut header: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<String>> = Vec::new();

        for tr in table.select(&tr_selector) {
            let header_cells: Vec<String> = tr.select(&th_selector).map(cell_text).collect();
            if !header_cells.is_empty() {
                header = header_cells;
                rows.clear();
                continue;
            }

            let data_cells: Vec<String> = tr.select(&td_selector).map(cell_text).collect();
            if !data_cells.is_empty() {
                rows.push(data_cells);
            }
        }

        tables.push(RawTable { header, rows });
    }

    Ok(tables)
}

/// The first table with both a header and data rows, or
/// [`FfdpError::TableNotFound`].
pub fn first_table(html: &str, url: &str) -> Result<RawTable> {
    extract_tables(html)?
        .into_iter()
        .find(|table| !table.header.is_empty() && !table.rows.is_empty())
        .ok_or_else(|| FfdpError::TableNotFound {
            url: url.to_string(),
        })
}
