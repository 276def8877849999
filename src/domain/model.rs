use crate::utils::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const POSTAL_CODE_LEN: usize = 8;

/// An 8-digit CEP with all formatting stripped. Only obtainable through
/// [`PostalCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Keeps the ASCII digits of `raw`, in order.
    pub fn normalize(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }

    /// Every Unicode digit counts toward the length, but only ASCII digits
    /// make a valid code: `01310100٣` has 9 digits and `٠١٣١٠١٠٠` is rejected
    /// outright, so the request path stays ASCII.
    pub fn parse(raw: &str) -> Result<Self> {
        let digits = raw.chars().filter(|c| c.is_numeric()).count();
        let code = Self::normalize(raw);
        if digits != POSTAL_CODE_LEN || code.len() != digits {
            return Err(LookupError::InvalidFormat {
                input: raw.to_string(),
                digits,
            });
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `01310100` -> `01310-100`
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address payload exactly as the lookup service returned it.
///
/// The fields are kept as a JSON object so that anything the service adds
/// survives a round trip; the accessors below cover the fields ViaCEP
/// documents today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressRecord {
    fields: Map<String, Value>,
}

impl AddressRecord {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn cep(&self) -> Option<&str> {
        self.get_str("cep")
    }

    pub fn street(&self) -> Option<&str> {
        self.get_str("logradouro")
    }

    pub fn complement(&self) -> Option<&str> {
        self.get_str("complemento")
    }

    pub fn neighborhood(&self) -> Option<&str> {
        self.get_str("bairro")
    }

    pub fn city(&self) -> Option<&str> {
        self.get_str("localidade")
    }

    pub fn state(&self) -> Option<&str> {
        self.get_str("uf")
    }

    pub fn ibge(&self) -> Option<&str> {
        self.get_str("ibge")
    }

    pub fn gia(&self) -> Option<&str> {
        self.get_str("gia")
    }

    pub fn ddd(&self) -> Option<&str> {
        self.get_str("ddd")
    }

    pub fn siafi(&self) -> Option<&str> {
        self.get_str("siafi")
    }

    /// True when the service flagged the code as unknown (`"erro": true`,
    /// and also the `"erro": "true"` string form some responses carry).
    pub fn is_not_found(&self) -> bool {
        self.fields.get("erro").is_some_and(is_truthy)
    }

    /// Two-space indented JSON with non-ASCII text left as is.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> AddressRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_keeps_digits_in_order() {
        assert_eq!(PostalCode::normalize("01310-100"), "01310100");
        assert_eq!(PostalCode::normalize(" 01.310 - 100 "), "01310100");
        assert_eq!(PostalCode::normalize("abc"), "");
        assert_eq!(PostalCode::normalize("cep: 7-6-5"), "765");
    }

    #[test]
    fn test_parse_accepts_eight_digits_with_separators() {
        let code = PostalCode::parse("01310-100").unwrap();
        assert_eq!(code.as_str(), "01310100");
        assert_eq!(code.to_string(), "01310100");
        assert_eq!(code.formatted(), "01310-100");

        assert!(PostalCode::parse("\t01310100\n").is_ok());
    }

    #[test]
    fn test_parse_rejects_wrong_digit_count() {
        for input in ["", "1234567", "123456789", "01310-1000", "cep"] {
            match PostalCode::parse(input) {
                Err(LookupError::InvalidFormat { input: raw, digits }) => {
                    assert_eq!(raw, input);
                    assert_eq!(digits, PostalCode::normalize(input).len());
                }
                other => panic!("{:?} should be rejected, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_non_ascii_digits_count_and_reject() {
        for (input, digits) in [("01310100٣", 9), ("0131010²0", 9), ("٠١٣١٠١٠٠", 8), ("0131010٣", 8)] {
            match PostalCode::parse(input) {
                Err(LookupError::InvalidFormat { digits: found, .. }) => {
                    assert_eq!(found, digits, "input {:?}", input)
                }
                other => panic!("{:?} should be rejected, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_not_found_flag_truthiness() {
        assert!(record(json!({"erro": true})).is_not_found());
        assert!(record(json!({"erro": "true"})).is_not_found());
        assert!(record(json!({"erro": 1})).is_not_found());

        assert!(!record(json!({"erro": false})).is_not_found());
        assert!(!record(json!({"erro": null})).is_not_found());
        assert!(!record(json!({"erro": ""})).is_not_found());
        assert!(!record(json!({"erro": 0})).is_not_found());
        assert!(!record(json!({"cep": "01310-100"})).is_not_found());
    }

    #[test]
    fn test_accessors_and_unknown_fields() {
        let payload = json!({
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "ddd": "11",
            "regiao": "Sudeste"
        });
        let rec = record(payload.clone());

        assert_eq!(rec.cep(), Some("01310-100"));
        assert_eq!(rec.street(), Some("Avenida Paulista"));
        assert_eq!(rec.neighborhood(), Some("Bela Vista"));
        assert_eq!(rec.city(), Some("São Paulo"));
        assert_eq!(rec.state(), Some("SP"));
        assert_eq!(rec.ddd(), Some("11"));
        assert_eq!(rec.gia(), None);
        assert_eq!(rec.get_str("regiao"), Some("Sudeste"));

        assert_eq!(serde_json::to_value(&rec).unwrap(), payload);
    }

    #[test]
    fn test_record_built_from_fields() {
        let mut fields = Map::new();
        fields.insert("cep".to_string(), json!("70040-010"));
        fields.insert("complemento".to_string(), json!(""));
        fields.insert("ibge".to_string(), json!("5300108"));
        fields.insert("siafi".to_string(), json!("9701"));
        fields.insert("ddd".to_string(), json!(61));

        let rec = AddressRecord::from_fields(fields.clone());

        assert_eq!(rec.complement(), Some(""));
        assert_eq!(rec.ibge(), Some("5300108"));
        assert_eq!(rec.siafi(), Some("9701"));
        // Present but not a string.
        assert_eq!(rec.ddd(), None);
        assert_eq!(rec.get("ddd"), Some(&json!(61)));
        assert_eq!(rec.into_fields(), fields);
    }

    #[test]
    fn test_pretty_json_preserves_non_ascii() {
        let rec = record(json!({"localidade": "São Paulo", "bairro": "Jardim Paulistano"}));
        let out = rec.to_pretty_json().unwrap();

        assert!(out.contains("São Paulo"));
        assert!(!out.contains("\\u"));
        assert!(out.contains("\n  \"localidade\""));
    }
}
