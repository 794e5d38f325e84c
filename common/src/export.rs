//! CSV export of scraped listings.

use crate::Listing;
use csv::Writer;
use std::io::Write;

/// Fixed column header of every export.
pub const CSV_HEADER: [&str; 5] = ["Title", "Company", "Location", "Summary", "Link"];

/// Writes `listings` as UTF-8 CSV to `out`, one row per listing in
/// collection order. Missing optional fields become empty cells.
pub fn write_csv<W: Write>(listings: &[Listing], out: W) -> csv::Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for listing in listings {
        writer.write_record([
            listing.title.as_str(),
            listing.company.as_deref().unwrap_or(""),
            listing.location.as_deref().unwrap_or(""),
            listing.summary.as_deref().unwrap_or(""),
            listing.link.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// In-memory variant for handing the export to an HTTP response.
pub fn csv_bytes(listings: &[Listing]) -> csv::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(listings, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Listing> {
        vec![
            Listing {
                title: "BD Manager".to_string(),
                company: Some("Acme Ltd".to_string()),
                location: Some("London".to_string()),
                summary: Some("Growth, sales and client development".to_string()),
                link: Some("https://www.reed.co.uk/jobs/1".to_string()),
            },
            Listing {
                title: "Marketing Exec".to_string(),
                company: None,
                location: None,
                summary: None,
                link: None,
            },
        ]
    }

    #[test]
    fn writes_fixed_header_and_one_row_per_listing() {
        let out = String::from_utf8(csv_bytes(&sample()).unwrap()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Title,Company,Location,Summary,Link"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn missing_fields_become_empty_cells() {
        let out = String::from_utf8(csv_bytes(&sample()).unwrap()).unwrap();
        assert_eq!(out.lines().nth(2), Some("Marketing Exec,,,,"));
    }

    #[test]
    fn quotes_fields_containing_commas() {
        let out = String::from_utf8(csv_bytes(&sample()).unwrap()).unwrap();
        assert!(out.contains("\"Growth, sales and client development\""));
    }
}
