use serde::{Deserialize, Deserializer};
use serde_json::Value;

// search response: [ hit, hit, ... ]
//  hit
//   └── account            (string or number)
//
// account response
//  ├── account             (string or number)
//  ├── siteAddress
//  ├── parcelID
//  ├── acreage
//  ├── propertyUse         (string, or { code, description })
//  ├── owner
//  ├── salesHistory[]
//  │    ├── saleDate
//  │    └── salePrice
//  ├── valueSummary[]
//  │    └── marketVal
//  └── buildings[]
//       ├── totalBaseArea
//       ├── totalSubArea
//       ├── yearBuilt
//       ├── constructionInfo[]
//       │    ├── code
//       │    └── description
//       └── extraFeatureInfo[]
//            └── description

/// Account numbers come back as strings from some endpoints and as numbers from others.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AccountNumber {
    Number(u64),
    Text(String),
}

impl AccountNumber {
    pub fn to_u64(&self) -> Result<u64, String> {
        match self {
            AccountNumber::Number(n) => Ok(*n),
            AccountNumber::Text(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("account '{s}' is not an integer: {e}")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub account: AccountNumber,
}

#[derive(Debug, Deserialize)]
pub struct AccountDetail {
    pub account: AccountNumber,
    #[serde(rename = "siteAddress")]
    pub site_address: String,
    #[serde(rename = "parcelID")]
    pub parcel_id: String,
    pub acreage: f64,
    #[serde(rename = "propertyUse")]
    pub property_use: PropertyUse,
    pub owner: String,

    #[serde(rename = "salesHistory", default)]
    pub sales_history: Option<Vec<Sale>>,
    #[serde(rename = "valueSummary", default)]
    pub value_summary: Option<Vec<ValueSummary>>,
    #[serde(default)]
    pub buildings: Option<Vec<Building>>,
}

/// Older responses carry a bare string, newer ones a code/description pair.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropertyUse {
    Text(String),
    Described {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl PropertyUse {
    pub fn label(&self) -> String {
        match self {
            PropertyUse::Text(s) => s.clone(),
            PropertyUse::Described { code, description } => description
                .as_deref()
                .or(code.as_deref())
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Sale {
    #[serde(rename = "saleDate", default)]
    pub sale_date: Option<String>,
    #[serde(rename = "salePrice", default)]
    pub sale_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValueSummary {
    #[serde(rename = "marketVal", default)]
    pub market_val: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Building {
    #[serde(rename = "totalBaseArea", default, deserialize_with = "whole_number")]
    pub total_base_area: Option<i64>,
    #[serde(rename = "totalSubArea", default, deserialize_with = "whole_number")]
    pub total_sub_area: Option<i64>,
    #[serde(rename = "yearBuilt", default, deserialize_with = "whole_number")]
    pub year_built: Option<i32>,
    #[serde(rename = "constructionInfo", default)]
    pub construction_info: Option<Vec<ConstructionInfo>>,
    #[serde(rename = "extraFeatureInfo", default)]
    pub extra_feature_info: Option<Vec<ExtraFeature>>,
}

/// Building numbers show up as `1400`, `1400.0` or occasionally `"1400"`.
/// Anything that isn't a whole number in range reads as missing rather than
/// failing the whole account.
fn whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let n = match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(n.and_then(|n| T::try_from(n).ok()))
}

#[derive(Debug, Deserialize)]
pub struct ConstructionInfo {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtraFeature {
    #[serde(default)]
    pub description: Option<String>,
}
