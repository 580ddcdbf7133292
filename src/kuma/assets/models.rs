//! Asset data models

use serde::Serialize;

/// Asset as sent to `/assets/import`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    pub fqdn: Vec<String>,
    pub ip_addresses: Vec<String>,
    pub mac_addresses: Vec<String>,
    pub os: AssetOs,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AssetOs {
    pub name: String,
    pub version: i64,
}

/// Body of an asset import request
#[derive(Serialize, Debug)]
pub(crate) struct ImportRequest<'a> {
    pub assets: &'a [Asset],
    #[serde(rename = "tenantID")]
    pub tenant_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_request_shape() {
        let assets = vec![Asset {
            name: "web-01".to_string(),
            fqdn: vec!["web-01.corp.local".to_string()],
            ip_addresses: vec![],
            mac_addresses: vec!["00:11:22:33:44:55".to_string()],
            os: AssetOs {
                name: "Ubuntu".to_string(),
                version: 22,
            },
        }];
        let request = ImportRequest {
            assets: &assets,
            tenant_id: "t-1",
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "assets": [{
                    "name": "web-01",
                    "fqdn": ["web-01.corp.local"],
                    "ipAddresses": [],
                    "macAddresses": ["00:11:22:33:44:55"],
                    "os": {"name": "Ubuntu", "version": 22}
                }],
                "tenantID": "t-1"
            })
        );
    }
}
