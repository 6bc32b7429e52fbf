//! Round-trip tests for the workbook gateway: build a document in memory,
//! save it, and read it back through calamine.

use etoro_summary::workbook::{Cell, Workbook};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

#[test]
fn cells_survive_a_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roundtrip.xlsx");

    let mut workbook = Workbook::create(&path);
    workbook.replace_sheet(
        "Holdings",
        vec!["Name".to_string(), "Units".to_string(), "Active".to_string()],
        vec![
            vec![text("alpha"), Cell::Number(dec!(12.75)), Cell::Bool(true)],
            vec![text("beta"), Cell::Empty, Cell::Bool(false)],
        ],
    );
    workbook.save().unwrap();

    let reloaded = Workbook::open(&path).unwrap();
    let sheet = reloaded.sheet("Holdings").unwrap();
    let name_col = sheet.column("Name").unwrap();
    let units_col = sheet.column("Units").unwrap();

    let rows: Vec<_> = sheet.data_rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text(name_col).unwrap(), "alpha");
    assert_eq!(rows[0].decimal(units_col).unwrap(), dec!(12.75));
    assert_eq!(rows[1].text(name_col).unwrap(), "beta");
    // The unwritten cell reads back as zero.
    assert_eq!(rows[1].decimal(units_col).unwrap(), Decimal::ZERO);
}

#[test]
fn sheet_order_is_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("order.xlsx");

    let mut workbook = Workbook::create(&path);
    for name in ["First", "Second", "Third"] {
        workbook.replace_sheet(name, vec!["H".to_string()], vec![]);
    }
    workbook.save().unwrap();

    let reloaded = Workbook::open(&path).unwrap();
    assert_eq!(reloaded.sheet_names(), vec!["First", "Second", "Third"]);
}

#[test]
fn saving_twice_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overwrite.xlsx");

    let mut workbook = Workbook::create(&path);
    workbook.replace_sheet(
        "Data",
        vec!["Value".to_string()],
        vec![vec![Cell::Number(dec!(1))]],
    );
    workbook.save().unwrap();

    workbook.replace_sheet(
        "Data",
        vec!["Value".to_string()],
        vec![vec![Cell::Number(dec!(2))]],
    );
    workbook.save().unwrap();

    let reloaded = Workbook::open(&path).unwrap();
    let sheet = reloaded.sheet("Data").unwrap();
    let value_col = sheet.column("Value").unwrap();
    let row = sheet.data_rows().next().unwrap();
    assert_eq!(row.decimal(value_col).unwrap(), dec!(2));
}
