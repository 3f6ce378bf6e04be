use plainjson::{Serializable, Source};
use serde_json::json;

#[test]
fn escapes_the_five_html_characters() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        plainjson::html_encode(&Source::from("&<>\"'/"))?,
        r#""\u0026\u003C\u003E\u0022\u0027\/""#
    );
    Ok(())
}

#[test]
fn output_has_no_literal_markup_characters() -> Result<(), Box<dyn std::error::Error>> {
    let out = plainjson::html_encode(&Source::from("<script>alert('&\"')</script>"))?;
    let inner = out.trim_matches('"');
    assert!(!inner.contains(['<', '>', '&', '"', '\'']));
    Ok(())
}

#[test]
fn plain_values_are_unaffected() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(plainjson::html_encode(&Source::from("1"))?, r#""1""#);
    assert_eq!(plainjson::html_encode(&Source::from(json!([1, 2])))?, "[1,2]");
    assert_eq!(
        plainjson::html_encode(&Source::Map(vec![
            ("a".to_string(), Source::from(1)),
            ("b".to_string(), Source::from(2)),
        ]))?,
        r#"{"a":1,"b":2}"#
    );
    Ok(())
}

#[test]
fn non_ascii_stays_literal() -> Result<(), Box<dyn std::error::Error>> {
    let out = plainjson::html_encode(&Source::from("🎁"))?;
    assert_eq!(out, "\"🎁\"");
    Ok(())
}

struct Post {
    id: i64,
    title: &'static str,
}

impl Serializable for Post {
    fn json_replacement(&self) -> Option<Source> {
        Some(Source::Map(vec![
            ("id".to_string(), Source::from(self.id)),
            ("title".to_string(), Source::from(self.title)),
        ]))
    }
}

#[test]
fn custom_serializable_goes_through_normalization() -> Result<(), Box<dyn std::error::Error>> {
    let post = Source::object(Post {
        id: 42,
        title: "json serializable",
    });
    assert_eq!(
        plainjson::html_encode(&post)?,
        r#"{"id":42,"title":"json serializable"}"#
    );
    Ok(())
}

#[test]
fn empty_record_encodes_as_object() -> Result<(), Box<dyn std::error::Error>> {
    struct Unit;
    impl Serializable for Unit {}
    assert_eq!(plainjson::html_encode(&Source::object(Unit))?, "{}");
    Ok(())
}
