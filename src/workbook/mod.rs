//! Workbook gateway - the spreadsheet document behind one processing run
//!
//! The whole document is loaded into memory as an ordered list of named
//! sheets, each a row/column grid of typed cells. Reading goes through
//! calamine, saving rebuilds the xlsx container with rust_xlsxwriter and
//! writes it over the original path.

mod reader;
mod writer;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Result, StatementError};

/// A single cell value, preserved through a read-modify-write cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(Decimal),
    Bool(bool),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Reference to a column located by header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef(usize);

/// One worksheet: a dense grid whose first row is the header.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Cell>>,
    /// Header row carries an autofilter when the sheet is (re)generated by us.
    autofilter: bool,
}

impl Sheet {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locate a column by exact header text in the first row.
    ///
    /// Column position in the source file is irrelevant; only the header
    /// text identifies a column.
    pub fn column(&self, header: &str) -> Result<ColumnRef> {
        let first = self.rows.first().map(Vec::as_slice).unwrap_or(&[]);
        first
            .iter()
            .position(|cell| matches!(cell, Cell::Text(text) if text == header))
            .map(ColumnRef)
            .ok_or_else(|| StatementError::MissingColumn(header.to_string()))
    }

    /// All rows after the header that contain any data.
    pub fn data_rows(&self) -> impl Iterator<Item = Row<'_>> {
        let name = self.name.as_str();
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, cells)| cells.iter().any(|cell| !cell.is_empty()))
            .map(move |(idx, cells)| Row {
                sheet: name,
                row: idx + 1,
                cells: cells.as_slice(),
            })
    }

    fn grid(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    fn has_autofilter(&self) -> bool {
        self.autofilter
    }
}

/// A borrowed view of one data row with typed field accessors.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    sheet: &'a str,
    /// 1-based workbook row, for error reporting
    row: usize,
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    /// Read a cell as text. Empty cells read as the empty string; numbers
    /// and booleans coerce to their canonical string form.
    pub fn text(&self, col: ColumnRef) -> Result<String> {
        match self.cells.get(col.0) {
            None | Some(Cell::Empty) => Ok(String::new()),
            Some(Cell::Text(text)) => Ok(text.clone()),
            Some(Cell::Number(number)) => Ok(number.to_string()),
            Some(Cell::Bool(flag)) => Ok(flag.to_string()),
        }
    }

    /// Read a cell as an exact decimal. Blank cells read as zero - monetary
    /// columns in statement exports leave cells empty rather than writing a
    /// zero. Numeric text is parsed; anything else is a `CellType` error.
    pub fn decimal(&self, col: ColumnRef) -> Result<Decimal> {
        match self.cells.get(col.0) {
            None | Some(Cell::Empty) => Ok(Decimal::ZERO),
            Some(Cell::Number(number)) => Ok(*number),
            Some(cell @ Cell::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(Decimal::ZERO);
                }
                Decimal::from_str(trimmed).map_err(|_| self.type_error(col, "number", cell))
            }
            Some(cell @ Cell::Bool(_)) => Err(self.type_error(col, "number", cell)),
        }
    }

    fn type_error(&self, col: ColumnRef, expected: &'static str, found: &Cell) -> StatementError {
        StatementError::CellType {
            sheet: self.sheet.to_string(),
            row: self.row,
            column: col.0 + 1,
            expected,
            found: format!("{:?}", found),
        }
    }
}

/// An in-memory workbook bound to the file path it came from (or will be
/// saved to).
#[derive(Debug)]
pub struct Workbook {
    path: PathBuf,
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Load a workbook from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        reader::load(path.as_ref())
    }

    /// An empty in-memory workbook bound to `path`. Nothing touches the
    /// file system until [`Workbook::save`].
    pub fn create<P: AsRef<Path>>(path: P) -> Self {
        Workbook {
            path: path.as_ref().to_path_buf(),
            sheets: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    /// Look up a sheet by exact name.
    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| StatementError::MissingSheet(name.to_string()))
    }

    /// Drop any sheet called `name` and append a fresh one holding the
    /// header row followed by `rows`. The header row is marked filterable.
    pub fn replace_sheet(&mut self, name: &str, header: Vec<String>, rows: Vec<Vec<Cell>>) {
        self.sheets.retain(|sheet| sheet.name != name);

        let mut grid = Vec::with_capacity(rows.len() + 1);
        grid.push(header.into_iter().map(Cell::Text).collect());
        grid.extend(rows);

        self.sheets.push(Sheet {
            name: name.to_string(),
            rows: grid,
            autofilter: true,
        });
    }

    /// Persist the document back to its path.
    ///
    /// The xlsx container is rebuilt from the in-memory model, so cell
    /// values survive but formatting from the original file does not.
    /// The write is not atomic: a failure partway through can leave a
    /// truncated file behind.
    pub fn save(&self) -> Result<()> {
        writer::save(self, &self.path)
    }

    fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }
}
