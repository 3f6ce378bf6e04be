#![cfg(feature = "chrono")]

use chrono::{FixedOffset, TimeZone, Utc};
use plainjson::Source;
use serde_json::json;

#[test]
fn utc_datetime_encodes_as_a_record() -> Result<(), Box<dyn std::error::Error>> {
    let dt = Utc.with_ymd_and_hms(2014, 10, 12, 0, 0, 0).unwrap();
    assert_eq!(
        plainjson::encode(&Source::from(dt))?,
        r#"{"date":"2014-10-12 00:00:00.000000","timezone_type":3,"timezone":"UTC"}"#
    );
    Ok(())
}

#[test]
fn fixed_offset_datetime_keeps_its_offset() -> Result<(), Box<dyn std::error::Error>> {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let dt = tz.with_ymd_and_hms(2023, 9, 9, 10, 0, 0).unwrap();
    assert_eq!(
        plainjson::encode(&Source::from(dt))?,
        r#"{"date":"2023-09-09 10:00:00.000000","timezone_type":1,"timezone":"+02:00"}"#
    );
    Ok(())
}

#[test]
fn datetime_nested_in_a_container() -> Result<(), Box<dyn std::error::Error>> {
    let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
    let source = Source::Map(vec![("ts".to_string(), Source::from(dt))]);
    assert_eq!(
        plainjson::normalize(&source)?,
        plainjson::Value::from(json!({
            "ts": {
                "date": "2024-05-01 12:34:56.000000",
                "timezone_type": 3,
                "timezone": "UTC"
            }
        }))
    );
    Ok(())
}

#[test]
fn subsecond_precision_is_kept() -> Result<(), Box<dyn std::error::Error>> {
    let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap()
        + chrono::TimeDelta::microseconds(123456);
    let out = plainjson::encode(&Source::from(dt))?;
    assert!(out.contains("2024-05-01 12:34:56.123456"));
    Ok(())
}
