//! Building `UserRecord`s from command-line arguments.

use anyhow::{Context as _, Result, bail};
use serde_json::Value;
use userdir_business::UserRecord;

/// Parse one `key=value` argument.
///
/// The value is taken as JSON when it parses (`age=3`, `admin=true`,
/// `tags=["a"]`) and as a plain string otherwise (`name=Ada`).
pub fn parse_field(raw: &str) -> Result<(String, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Invalid field '{raw}': expected KEY=VALUE");
    };

    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid field '{raw}': key is empty");
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}

/// Start from `data` (a JSON object) or `base`, then apply `fields` in order.
pub fn build_record(
    base: UserRecord,
    data: Option<&str>,
    fields: &[String],
) -> Result<UserRecord> {
    let mut record = match data {
        Some(json) => serde_json::from_str::<UserRecord>(json)
            .context("--data must be a JSON object describing one user")?,
        None => base,
    };

    for raw in fields {
        let (key, value) = parse_field(raw)?;
        if key == "id" {
            record.id = Some(
                value
                    .as_i64()
                    .with_context(|| format!("Invalid field '{raw}': id must be an integer"))?,
            );
        } else {
            record.fields.insert(key, value);
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_field_types() {
        assert_eq!(
            parse_field("name=Ada").expect("string"),
            ("name".to_owned(), json!("Ada"))
        );
        assert_eq!(parse_field("age=3").expect("number"), ("age".to_owned(), json!(3)));
        assert_eq!(
            parse_field("tags=[\"a\"]").expect("array"),
            ("tags".to_owned(), json!(["a"]))
        );
        assert_eq!(
            parse_field("motto=a=b").expect("split on first ="),
            ("motto".to_owned(), json!("a=b"))
        );
    }

    #[test]
    fn test_parse_field_rejects_bad_input() {
        assert!(parse_field("name").is_err());
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn test_build_record_overlays_fields_on_data() {
        let record = build_record(
            UserRecord::new(),
            Some(r#"{"name": "A", "email": "a@example.com"}"#),
            &["name=B".to_owned()],
        )
        .expect("record");

        assert_eq!(record.id, None);
        assert_eq!(record.name(), Some("B"));
        assert_eq!(record.field("email"), Some(&json!("a@example.com")));
    }

    #[test]
    fn test_build_record_keeps_base_without_data() {
        let base = UserRecord::new().with_id(2).with_field("name", "B");
        let record = build_record(base, None, &["name=C".to_owned()]).expect("record");

        assert_eq!(record, UserRecord::new().with_id(2).with_field("name", "C"));
    }

    #[test]
    fn test_build_record_id_field() {
        let record = build_record(UserRecord::new(), None, &["id=4".to_owned()]).expect("record");
        assert_eq!(record.id, Some(4));

        assert!(build_record(UserRecord::new(), None, &["id=x".to_owned()]).is_err());
    }

    #[test]
    fn test_build_record_rejects_non_object_data() {
        assert!(build_record(UserRecord::new(), Some("[1, 2]"), &[]).is_err());
    }
}
