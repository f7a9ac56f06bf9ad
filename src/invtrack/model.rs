use crate::error::{InvError, Result};
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "General";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A single product. The `id` is the key of the record in the inventory file,
/// so it is not part of the serialized value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub quantity: u64,
    pub price: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(rename = "added_date", with = "timestamp")]
    pub added_at: NaiveDateTime,
    #[serde(
        rename = "updated_date",
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::optional"
    )]
    pub updated_at: Option<NaiveDateTime>,
}

impl ProductRecord {
    pub fn total_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Checks the invariants a record must hold to live in an inventory.
    pub fn check(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(InvError::invalid("Product ID cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(InvError::invalid(format!(
                "Product '{}' has an empty name",
                self.id
            )));
        }
        validate_price(self.price)?;
        Ok(())
    }
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub quantity: u64,
    pub price: f64,
    pub category: Option<String>,
}

impl NewProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u64, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A partial update. `None` (or a blank string for text fields) leaves the
/// field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub quantity: Option<u64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Text fields that carry a non-blank value, trimmed.
    pub fn name_value(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn category_value(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(InvError::invalid("Price must be a non-negative number"));
    }
    Ok(price)
}

/// Parses a quantity typed by a user. Whole-valued decimals such as `"5.0"`
/// are accepted.
pub fn parse_quantity(input: &str) -> Result<u64> {
    let input = input.trim();
    if let Ok(n) = input.parse::<u64>() {
        return Ok(n);
    }
    match input.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => {
            Ok(v as u64)
        }
        _ => Err(InvError::invalid(format!(
            "'{}' is not a valid quantity (non-negative integer)",
            input
        ))),
    }
}

/// Parses a price typed by a user. A leading `$` is tolerated.
pub fn parse_price(input: &str) -> Result<f64> {
    let input = input.trim();
    let digits = input.strip_prefix('$').unwrap_or(input).trim();
    let invalid = || {
        InvError::invalid(format!(
            "'{}' is not a valid price (non-negative number)",
            input
        ))
    };
    let price = digits.parse::<f64>().map_err(|_| invalid())?;
    validate_price(price).map_err(|_| invalid())
}

/// Timestamps are stored as local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
pub mod timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn now() -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }

    pub fn format(ts: &NaiveDateTime) -> String {
        ts.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(
        ts: &NaiveDateTime,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }

    pub mod optional {
        use super::*;

        pub fn serialize<S: Serializer>(
            ts: &Option<NaiveDateTime>,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> std::result::Result<Option<NaiveDateTime>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| NaiveDateTime::parse_from_str(&raw, FORMAT))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: "P1".into(),
            name: "Widget".into(),
            quantity: 4,
            price: 2.5,
            category: "Tools".into(),
            added_at: NaiveDateTime::parse_from_str("2024-03-01 09:15:00", timestamp::FORMAT)
                .unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn total_value_multiplies_quantity_and_price() {
        assert_eq!(record().total_value(), 10.0);
    }

    #[test]
    fn serializes_with_file_field_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["added_date"], "2024-03-01 09:15:00");
        assert!(json.get("updated_date").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn missing_category_defaults_to_general() {
        let raw = r#"{"name":"Bolt","quantity":1,"price":0.1,"added_date":"2024-01-01 00:00:00"}"#;
        let rec: ProductRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.category, DEFAULT_CATEGORY);
        assert_eq!(rec.updated_at, None);
    }

    #[test]
    fn rejects_bad_timestamp() {
        let raw = r#"{"name":"Bolt","quantity":1,"price":0.1,"added_date":"yesterday"}"#;
        assert!(serde_json::from_str::<ProductRecord>(raw).is_err());
    }

    #[test]
    fn parses_quantities() {
        assert_eq!(parse_quantity("12").unwrap(), 12);
        assert_eq!(parse_quantity(" 7 ").unwrap(), 7);
        assert_eq!(parse_quantity("5.0").unwrap(), 5);
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn parses_prices() {
        assert_eq!(parse_price("9.99").unwrap(), 9.99);
        assert_eq!(parse_price("$3").unwrap(), 3.0);
        assert_eq!(parse_price("0").unwrap(), 0.0);
        assert!(parse_price("-0.5").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("ten").is_err());
    }

    #[test]
    fn check_rejects_invalid_records() {
        let mut rec = record();
        rec.price = -1.0;
        assert!(matches!(rec.check(), Err(InvError::InvalidInput(_))));

        let mut rec = record();
        rec.name = "  ".into();
        assert!(rec.check().is_err());

        assert!(record().check().is_ok());
    }

    #[test]
    fn blank_update_fields_are_ignored() {
        let update = ProductUpdate::new().with_name("   ").with_category(" Tools ");
        assert_eq!(update.name_value(), None);
        assert_eq!(update.category_value(), Some("Tools"));
    }
}
