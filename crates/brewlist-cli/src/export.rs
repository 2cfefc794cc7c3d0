//! CSV export of normalized product rows.
//!
//! Spreadsheet tools detect the encoding of a semicolon-delimited file from
//! a UTF-8 byte-order mark, so the file starts with one. The target path is
//! overwritten unconditionally; the caller only invokes this after the full
//! product list has been collected.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use brewlist_core::ProductRow;
use rust_decimal::Decimal;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

const HEADER: [&str; 6] = ["id", "name", "regular_price", "promo_price", "brand", "city"];

/// Writes `rows` to `path` as semicolon-delimited, BOM-prefixed UTF-8 with a
/// fixed header row.
///
/// Absent prices serialize as empty fields; present prices carry exactly two
/// fractional digits.
///
/// # Errors
///
/// Returns an error when the file cannot be created or a record cannot be
/// written.
pub fn write_csv(rows: &[ProductRow], path: &Path) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    writer.write_record(HEADER)?;

    for row in rows {
        let regular = price_field(row.regular_price);
        let promo = price_field(row.promo_price);
        writer.write_record([
            row.product_id.as_str(),
            row.name.as_str(),
            regular.as_str(),
            promo.as_str(),
            row.brand.as_str(),
            row.city.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders a price for the CSV: scale-2 decimal text, or empty when absent.
fn price_field(price: Option<Decimal>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use brewlist_core::from_minor_units;

    use super::*;

    fn make_row(id: &str, promo_minor: Option<i64>) -> ProductRow {
        ProductRow {
            product_id: id.to_string(),
            name: format!("Кофе Тест {id}"),
            regular_price: Some(from_minor_units(70_000)),
            promo_price: promo_minor.map(from_minor_units),
            brand: "Тест".to_string(),
            city: "Москва".to_string(),
        }
    }

    #[test]
    fn writes_header_plus_one_line_per_row() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("coffee.csv");

        let rows = vec![make_row("1", Some(50_000)), make_row("2", None)];
        write_csv(&rows, &path).expect("write should succeed");

        let bytes = std::fs::read(&path).expect("read back");
        assert!(bytes.starts_with(UTF8_BOM), "file must start with a BOM");

        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("valid UTF-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3, "header plus two records");
        assert_eq!(lines[0], "id;name;regular_price;promo_price;brand;city");
    }

    #[test]
    fn prices_carry_two_fractional_digits_and_absent_promo_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("coffee.csv");

        write_csv(&[make_row("1", None)], &path).expect("write should succeed");

        let text = std::fs::read_to_string(&path).expect("read back");
        let record = text.lines().nth(1).expect("one record");
        assert_eq!(record, "1;Кофе Тест 1;700.00;;Тест;Москва");
    }

    #[test]
    fn promo_price_is_rendered_when_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("coffee.csv");

        write_csv(&[make_row("1", Some(50_000))], &path).expect("write should succeed");

        let text = std::fs::read_to_string(&path).expect("read back");
        let record = text.lines().nth(1).expect("one record");
        assert!(
            record.contains(";700.00;500.00;"),
            "expected both prices in {record:?}"
        );
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("coffee.csv");

        write_csv(&[make_row("1", None), make_row("2", None)], &path).expect("first write");
        write_csv(&[make_row("3", None)], &path).expect("second write");

        let text = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2, "second write replaces the first");
        assert!(lines[1].starts_with("3;"), "only the new record remains");
    }

    #[test]
    fn empty_row_list_still_writes_the_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("coffee.csv");

        write_csv(&[], &path).expect("write should succeed");

        let text = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(text.lines().count(), 1, "header only");
    }
}
