//! Structural round-trip: parse, re-encode, re-parse, compare trees.

const KITCHEN_SINK: &str = "\
name John Doe
age!int 30
verbose

# comment between entries
server {
  host example.com
  ports [
    8080
    8443
  ]
  backup {
    host fallback.local
  }
}

tags [dev, fast]

users |
  name role
  alice admin
  bob   guest
  carol anne | guest
|

motd ```
  Welcome!
    Indented line.

  Done.
```
";

fn roundtrip(input: &str) -> (up::Document, up::Document) {
    let first = up::parse(input).expect("initial parse");
    let encoded = up::encode_to_string(&first);
    let second = up::parse(&encoded)
        .unwrap_or_else(|e| panic!("re-parse failed: {e}\n--- encoded ---\n{encoded}"));
    (first, second)
}

#[test]
fn kitchen_sink_roundtrips() {
    let (first, second) = roundtrip(KITCHEN_SINK);
    assert_eq!(first, second);
}

#[test]
fn duplicate_keys_roundtrip() {
    let (first, second) = roundtrip("a 1\na 2\na {\n  b 3\n}\n");
    assert_eq!(first, second);
    assert_eq!(second.len(), 3);
}

#[test]
fn annotations_roundtrip() {
    let (first, second) = roundtrip("age!int 30\nratio!float 0.5\n");
    assert_eq!(first, second);
    assert_eq!(second.nodes[0].type_annotation.as_deref(), Some("int"));
}

#[test]
fn flag_keys_roundtrip() {
    let (first, second) = roundtrip("verbose\nnext value\n");
    assert_eq!(first, second);
    assert_eq!(second.get_scalar("verbose"), Some(""));
}

#[test]
fn encoded_form_is_stable() {
    // Encoding a re-parsed document reproduces the same text exactly.
    let doc = up::parse(KITCHEN_SINK).unwrap();
    let once = up::encode_to_string(&doc);
    let twice = up::encode_to_string(&up::parse(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn scalar_interior_spacing_roundtrips() {
    let (first, second) = roundtrip("k   padded value\n");
    assert_eq!(first, second);
    assert_eq!(second.get_scalar("k"), Some("  padded value"));
}
