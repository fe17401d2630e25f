// SPDX-License-Identifier: MPL-2.0
//! Country record as served by the countries API.
//!
//! Every field is optional at decode time, and a field holding a value of
//! the wrong type reads as absent. Missing fields are only turned into
//! errors when the info panel reaches them, so fields assigned before the
//! missing one still reach the panel.

use serde::de::{DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Subset of the API payload consumed by the info panel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Flag image URL.
    #[serde(default, deserialize_with = "lenient")]
    pub flag: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<CountryName>,

    /// UN membership, read by JSON truthiness; absent reads as "not a member".
    #[serde(default, deserialize_with = "truthy")]
    pub un_member: Option<bool>,

    /// `None` unless the payload holds an object.
    #[serde(default, deserialize_with = "lenient")]
    pub currencies: Option<Currencies>,

    /// Capital cities, in API order. `None` unless the payload holds an array.
    #[serde(default, deserialize_with = "lenient_list")]
    pub capital: Option<Vec<String>>,

    /// Codes of neighbouring countries, in API order.
    #[serde(default, deserialize_with = "lenient_list")]
    pub borders: Option<Vec<String>>,
}

impl CountryRecord {
    /// Returns the common name when the payload carries one.
    #[must_use]
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.common.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryName {
    #[serde(default, deserialize_with = "lenient")]
    pub common: Option<String>,
}

/// Per-currency details. Only the display symbol is used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Currency {
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
}

/// Currency map kept in the order the server wrote its keys.
///
/// An entry whose value is not an object is kept as `None` and renders like
/// a missing symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Currencies(Vec<(String, Option<Currency>)>);

impl Currencies {
    /// Builds a map from ordered entries.
    #[must_use]
    pub fn from_entries(entries: Vec<(String, Option<Currency>)>) -> Self {
        Self(entries)
    }

    /// Iterates entries in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Currency>)> {
        self.0.iter().map(|(code, info)| (code.as_str(), info.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Currencies {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = Currencies;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of currency codes to currency details")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((code, info)) = access.next_entry::<String, Value>()? {
                    entries.push((code, serde_json::from_value(info).ok()));
                }
                Ok(Currencies(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Decodes `T`, reading a value of another type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decodes a list of display strings; anything but an array reads as absent.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(items.into_iter().map(list_item_text).collect()))
}

fn list_item_text(item: Value) -> String {
    match item {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let truth = match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    Ok(Some(truth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currencies_keep_server_key_order() {
        let record: CountryRecord = serde_json::from_str(
            r#"{"currencies": {"SEK": {"symbol": "kr"}, "EUR": {"symbol": "€"}, "ALL": {}}}"#,
        )
        .expect("valid payload");
        let codes: Vec<&str> = record
            .currencies
            .as_ref()
            .expect("currencies present")
            .iter()
            .map(|(code, _)| code)
            .collect();
        assert_eq!(codes, vec!["SEK", "EUR", "ALL"]);
    }

    #[test]
    fn null_currency_entry_is_kept() {
        let record: CountryRecord =
            serde_json::from_str(r#"{"currencies": {"XXX": null}}"#).expect("valid payload");
        let currencies = record.currencies.expect("currencies present");
        assert_eq!(currencies.len(), 1);
        assert!(currencies.iter().next().expect("one entry").1.is_none());
    }

    #[test]
    fn missing_fields_decode_as_none() {
        let record: CountryRecord = serde_json::from_str("{}").expect("empty object decodes");
        assert_eq!(record, CountryRecord::default());
        assert!(record.common_name().is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let record: CountryRecord = serde_json::from_str(
            r#"{"name": {"common": "Denmark", "official": "Kingdom of Denmark"}, "area": 43094}"#,
        )
        .expect("valid payload");
        assert_eq!(record.common_name(), Some("Denmark"));
    }

    #[test]
    fn wrong_value_types_read_as_absent() {
        let record: CountryRecord = serde_json::from_str(
            r#"{"flag": 7, "name": "Italy", "currencies": "EUR",
                "capital": "Rome", "borders": {"FRA": true}}"#,
        )
        .expect("body still decodes");
        assert_eq!(record, CountryRecord::default());
    }

    #[test]
    fn non_object_currency_entry_has_no_details() {
        let record: CountryRecord = serde_json::from_str(
            r#"{"currencies": {"EUR": "E", "DKK": {"symbol": 5}, "SEK": {"symbol": "kr"}}}"#,
        )
        .expect("valid payload");
        let currencies = record.currencies.expect("currencies present");
        let symbols: Vec<Option<&str>> = currencies
            .iter()
            .map(|(_, info)| info.and_then(|c| c.symbol.as_deref()))
            .collect();
        assert_eq!(symbols, vec![None, None, Some("kr")]);
        assert!(currencies.iter().next().expect("one entry").1.is_none());
    }

    #[test]
    fn un_member_follows_json_truthiness() {
        let member = |json: &str| {
            serde_json::from_str::<CountryRecord>(json)
                .expect("valid payload")
                .un_member
                .unwrap_or(false)
        };
        assert!(member(r#"{"unMember": 1}"#));
        assert!(member(r#"{"unMember": "yes"}"#));
        assert!(member(r#"{"unMember": {}}"#));
        assert!(!member(r#"{"unMember": 0}"#));
        assert!(!member(r#"{"unMember": ""}"#));
        assert!(!member(r#"{"unMember": null}"#));
        assert!(!member("{}"));
    }

    #[test]
    fn list_items_are_rendered_as_text() {
        let record: CountryRecord =
            serde_json::from_str(r#"{"capital": ["Bern", 3, null]}"#).expect("valid payload");
        assert_eq!(
            record.capital,
            Some(vec!["Bern".to_string(), "3".to_string(), String::new()])
        );
    }
}
