//! Asset inventory CSV parsing

use log::debug;

use crate::error::{KumaError, Result};
use crate::output::csv::{parse_csv, CsvLine};

use super::models::{Asset, AssetOs};

/// Columns every asset CSV must carry (any order, extra columns ignored)
pub const ASSET_HEADER: &[&str] = &[
    "name",
    "fqdn",
    "ipAddresses",
    "macAddresses",
    "osName",
    "osVersion",
];

/// Column positions of the required fields
struct Columns([usize; 6]);

impl Columns {
    fn locate(header: &CsvLine) -> Result<Self> {
        let mut positions = [0; 6];
        for (slot, name) in positions.iter_mut().zip(ASSET_HEADER) {
            *slot = header
                .fields
                .iter()
                .position(|f| f.trim() == *name)
                .ok_or_else(|| KumaError::Csv {
                    line: header.line,
                    message: format!("missing required column '{}'", name),
                })?;
        }
        Ok(Self(positions))
    }

    fn get<'a>(&self, record: &'a CsvLine, index: usize) -> Result<&'a str> {
        let position = self.0[index];
        record
            .fields
            .get(position)
            .map(String::as_str)
            .ok_or_else(|| KumaError::Csv {
                line: record.line,
                message: format!("missing value for '{}'", ASSET_HEADER[index]),
            })
    }
}

/// Split a `;`-delimited list; an empty cell is an empty list
fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(';').map(str::to_string).collect()
}

/// Parse an asset inventory
///
/// The first record is the header. `fqdn`, `ipAddresses` and `macAddresses`
/// are `;`-delimited lists and `osVersion` must be an integer. Errors carry
/// the line number of the offending record.
pub fn parse_assets(text: &str) -> Result<Vec<Asset>> {
    let records = parse_csv(text)?;
    let Some((header, rows)) = records.split_first() else {
        return Err(KumaError::Csv {
            line: 1,
            message: "file is empty".to_string(),
        });
    };
    let columns = Columns::locate(header)?;

    let mut assets = Vec::with_capacity(rows.len());
    for record in rows {
        let version_text = columns.get(record, 5)?;
        let version = version_text.trim().parse::<i64>().map_err(|_| KumaError::Csv {
            line: record.line,
            message: format!("osVersion '{}' is not an integer", version_text),
        })?;

        assets.push(Asset {
            name: columns.get(record, 0)?.to_string(),
            fqdn: split_list(columns.get(record, 1)?),
            ip_addresses: split_list(columns.get(record, 2)?),
            mac_addresses: split_list(columns.get(record, 3)?),
            os: AssetOs {
                name: columns.get(record, 4)?.to_string(),
                version,
            },
        });
    }

    debug!("Parsed {} assets", assets.len());
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,fqdn,ipAddresses,macAddresses,osName,osVersion\n";

    #[test]
    fn test_empty_fqdn_and_ip_list() {
        let text = format!("{}db-01,,10.0.0.1;10.0.0.2,,Windows Server,2019\n", HEADER);
        let assets = parse_assets(&text).unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name, "db-01");
        assert!(assets[0].fqdn.is_empty());
        assert_eq!(assets[0].ip_addresses, vec!["10.0.0.1", "10.0.0.2"]);
        assert!(assets[0].mac_addresses.is_empty());
        assert_eq!(
            assets[0].os,
            AssetOs {
                name: "Windows Server".to_string(),
                version: 2019
            }
        );
    }

    #[test]
    fn test_columns_in_any_order_with_extras() {
        let text = "osVersion,comment,name,osName,macAddresses,ipAddresses,fqdn\n\
                    7,spare,web-01,CentOS,aa:bb,10.1.1.1,web-01.local;web.local\n";
        let assets = parse_assets(text).unwrap();

        assert_eq!(assets[0].name, "web-01");
        assert_eq!(assets[0].fqdn, vec!["web-01.local", "web.local"]);
        assert_eq!(assets[0].os.version, 7);
    }

    #[test]
    fn test_header_only() {
        assert!(parse_assets(HEADER).unwrap().is_empty());
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_assets("").unwrap_err(),
            KumaError::Csv { line: 1, .. }
        ));
    }

    #[test]
    fn test_missing_column() {
        let err = parse_assets("name,fqdn,ipAddresses,macAddresses,osName\n").unwrap_err();
        assert!(err.to_string().contains("osVersion"));
    }

    #[test]
    fn test_bad_version_reports_line() {
        let text = format!("{}a,a.local,,,Linux,5\nb,b.local,,,Linux,five\n", HEADER);
        match parse_assets(&text).unwrap_err() {
            KumaError::Csv { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("five"));
            }
            other => panic!("Expected KumaError::Csv, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row() {
        let text = format!("{}a,a.local\n", HEADER);
        assert!(matches!(
            parse_assets(&text).unwrap_err(),
            KumaError::Csv { line: 2, .. }
        ));
    }
}
