use std::fmt::Write;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::error::{Error, Result};
use crate::observability::INGEST_SPREADSHEET_ROWS;

/// Rows summarized when no cap is given.
pub const DEFAULT_MAX_ROWS: usize = 60;

/// Read access to one worksheet.
///
/// Rows and columns are 1-based, as a spreadsheet user counts them.  Cells that
/// do not exist read as the empty string.
pub trait Worksheet {
    /// The worksheet's tab name.
    fn name(&self) -> &str;

    /// The cell's value rendered as text.
    fn cell_string(&self, row: u32, column: u32) -> String;
}

/// A worksheet loaded from a workbook file.
pub struct SheetGrid {
    name: String,
    range: Range<Data>,
}

impl SheetGrid {
    /// Wraps an already-loaded range.
    pub fn new(name: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }
}

impl Worksheet for SheetGrid {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell_string(&self, row: u32, column: u32) -> String {
        if row == 0 || column == 0 {
            return String::new();
        }
        self.range
            .get_value((row - 1, column - 1))
            .map(|data| data.to_string())
            .unwrap_or_default()
    }
}

/// Open `path` and load its first worksheet.
pub fn open_first_worksheet(path: &Path) -> Result<SheetGrid> {
    let mut workbook = open_workbook_auto(path).map_err(|err| {
        Error::spreadsheet(format!("cannot open {}: {err}", path.display()), None)
    })?;
    let Some(name) = workbook.sheet_names().first().cloned() else {
        return Err(Error::spreadsheet(
            format!("{} has no worksheets", path.display()),
            None,
        ));
    };
    let range = workbook.worksheet_range(&name).map_err(|err| {
        Error::spreadsheet(format!("cannot read worksheet {name}: {err}"), None)
    })?;
    Ok(SheetGrid::new(name, range))
}

/// Summarize columns A and B of the first worksheet of `path`.
pub fn summarize_workbook(path: &Path, max_rows: usize) -> Result<String> {
    let sheet = open_first_worksheet(path)?;
    let workbook_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(summarize_worksheet(&workbook_name, &sheet, max_rows))
}

/// Summarize columns A and B of `sheet`, one line per row.
///
/// Stops at the first row whose column A is blank, or after `max_rows` rows.
pub fn summarize_worksheet(workbook_name: &str, sheet: &dyn Worksheet, max_rows: usize) -> String {
    let mut summary = String::new();
    let _ = writeln!(summary, "Workbook: {workbook_name}");
    let _ = writeln!(summary, "Worksheet: {}", sheet.name());
    summary.push_str("Showing Column A (field) and Column B (value) rows:\n\n");

    let mut rows = 0;
    for row in (1..).take(max_rows) {
        let a = sheet.cell_string(row, 1);
        if a.trim().is_empty() {
            break;
        }
        let b = sheet.cell_string(row, 2);
        let _ = writeln!(summary, "{row:02}. A: {a} | B: {b}");
        rows += 1;
    }
    INGEST_SPREADSHEET_ROWS.add(rows as f64);
    summary
}
