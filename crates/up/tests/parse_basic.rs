use up::Value;

#[test]
fn scalar_entries() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("name John Doe\ncity Oslo\n")?;
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get_scalar("name"), Some("John Doe"));
    assert_eq!(doc.get_scalar("city"), Some("Oslo"));
    Ok(())
}

#[test]
fn annotation_is_carried_but_not_interpreted() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("age!int 30\n")?;
    let node = &doc.nodes[0];
    assert_eq!(node.key, "age");
    assert_eq!(node.type_annotation.as_deref(), Some("int"));
    assert_eq!(node.value, Value::Scalar("30".to_string()));
    Ok(())
}

#[test]
fn duplicate_keys_are_kept_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("a 1\na 2\n")?;
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.nodes[0].value, Value::Scalar("1".to_string()));
    assert_eq!(doc.nodes[1].value, Value::Scalar("2".to_string()));
    assert_eq!(doc.get_scalar("a"), Some("1"));
    Ok(())
}

#[test]
fn comments_and_blank_lines_produce_no_nodes() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("# header comment\n\n   \nname X\n  # trailing comment\n")?;
    assert_eq!(doc.len(), 1);
    Ok(())
}

#[test]
fn bare_key_is_an_empty_scalar_flag() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("verbose\n")?;
    assert_eq!(doc.get_scalar("verbose"), Some(""));
    Ok(())
}

#[test]
fn bare_key_at_end_of_input_without_newline() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("verbose")?;
    assert_eq!(doc.get_scalar("verbose"), Some(""));
    Ok(())
}

#[test]
fn only_one_separator_space_is_stripped() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("k   v\n")?;
    assert_eq!(doc.get_scalar("k"), Some("  v"));
    Ok(())
}

#[test]
fn source_order_is_preserved() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("b 1\na 2\nc 3\nb 4\n")?;
    let keys: Vec<&str> = doc.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, ["b", "a", "c", "b"]);
    Ok(())
}

#[test]
fn empty_input_is_an_empty_document() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("")?;
    assert!(doc.is_empty());
    Ok(())
}

#[test]
fn crlf_input_parses() -> Result<(), Box<dyn std::error::Error>> {
    let doc = up::parse("a 1\r\nb 2\r\n")?;
    assert_eq!(doc.get_scalar("b"), Some("2"));
    Ok(())
}

#[test]
fn fresh_parse_calls_are_independent() -> Result<(), Box<dyn std::error::Error>> {
    let a = up::parse("x 1\n")?;
    let b = up::parse("x 1\n")?;
    assert_eq!(a, b);
    Ok(())
}
