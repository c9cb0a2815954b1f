use std::collections::HashMap;

/// Decoded `application/x-www-form-urlencoded` fields.
///
/// Only the first value of a repeated key is kept.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
  fields: HashMap<String, String>,
}

impl FormFields {
  /// Parse a form body or query string
  pub fn parse(input: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(input)?;
    let mut fields = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
      fields.entry(key).or_insert(value);
    }
    Ok(Self { fields })
  }

  /// Like [`FormFields::parse`], but an unparsable input yields no fields
  pub fn parse_lossy(input: &[u8]) -> Self {
    Self::parse(input).unwrap_or_default()
  }

  /// Field value, empty when absent
  pub fn text(&self, key: &str) -> String {
    self.fields.get(key).cloned().unwrap_or_default()
  }

  /// Field value as an integer; absent or malformed values read as zero
  pub fn number(&self, key: &str) -> i64 {
    self
      .fields
      .get(key)
      .and_then(|v| v.parse().ok())
      .unwrap_or(0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_fields() {
    let fields = FormFields::parse(b"nama=Kopi+Susu&harga=15000&stok=-2").unwrap();
    assert_eq!(fields.text("nama"), "Kopi Susu");
    assert_eq!(fields.number("harga"), 15000);
    assert_eq!(fields.number("stok"), -2);
  }

  #[test]
  fn test_missing_and_malformed_default() {
    let fields = FormFields::parse(b"harga=15rb").unwrap();
    assert_eq!(fields.text("nama"), "");
    assert_eq!(fields.number("harga"), 0);
    assert_eq!(fields.number("stok"), 0);
  }

  #[test]
  fn test_first_value_wins() {
    let fields = FormFields::parse(b"name=first&name=second").unwrap();
    assert_eq!(fields.text("name"), "first");
  }

  #[test]
  fn test_empty_input() {
    let fields = FormFields::parse(b"").unwrap();
    assert_eq!(fields.text("anything"), "");
  }
}
