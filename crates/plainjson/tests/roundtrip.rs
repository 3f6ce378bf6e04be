//! Encoding then decoding must land on the normalized form of the input.

use plainjson::{Serializable, Source, normalize};
use serde_json::json;

#[test]
fn plain_document_roundtrips_to_its_normal_form() -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::from(json!({
        "b": [1, 2.5, true, null],
        "a": {"nested": "x/y🎁"},
        "n": -3
    }));
    let encoded = plainjson::encode(&source)?;
    assert_eq!(plainjson::decode(&encoded)?, normalize(&source)?);
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
fn custom_serializable_roundtrips_to_its_normal_form() -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::List(vec![
        Source::object(Post {
            id: 1,
            title: "first",
        }),
        Source::object(Post {
            id: 2,
            title: "second",
        }),
    ]);
    let encoded = plainjson::encode(&source)?;
    assert_eq!(plainjson::decode(&encoded)?, normalize(&source)?);
    Ok(())
}

#[test]
fn empty_containers_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    struct Unit;
    impl Serializable for Unit {}

    for source in [Source::List(Vec::new()), Source::object(Unit)] {
        let encoded = plainjson::encode(&source)?;
        assert_eq!(plainjson::decode(&encoded)?, normalize(&source)?);
    }
    Ok(())
}

#[test]
fn html_encoded_output_decodes_to_the_same_tree() -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::from(json!({"markup": "<a href=\"/\">&'</a>"}));
    let encoded = plainjson::html_encode(&source)?;
    assert_eq!(plainjson::decode(&encoded)?, normalize(&source)?);
    Ok(())
}
