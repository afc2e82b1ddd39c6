use structtag::{parse, parse_partial, tags, Error, Parser, TagMap};

#[test]
fn test_server_host_tag() {
    let tags = parse(r#"json:"host" env:"SERVER_HOST" default:"localhost""#).unwrap();
    assert_eq!(tags.len(), 3);
    assert_eq!(tags.get("json"), Some("host"));
    assert_eq!(tags.get("env"), Some("SERVER_HOST"));
    assert_eq!(tags.get("default"), Some("localhost"));
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(parse(""), Ok(TagMap::new()));
    assert_eq!(parse(" "), Ok(TagMap::new()));
    assert_eq!(parse("     "), Ok(TagMap::new()));
}

#[test]
fn test_surrounding_and_repeated_spaces() {
    let tags = parse(r#"   json:"port"     env:"SERVER_PORT"   "#).unwrap();
    assert_eq!(tags, tags! { "json" => "port", "env" => "SERVER_PORT" });
}

#[test]
fn test_pairs_without_separating_space() {
    let tags = parse(r#"a:"1"b:"2""#).unwrap();
    assert_eq!(tags, tags! { "a" => "1", "b" => "2" });
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let tags = parse(r#"env:"A" json:"x" env:"B" env:"C""#).unwrap();
    assert_eq!(tags, tags! { "env" => "C", "json" => "x" });
}

#[test]
fn test_empty_value() {
    let tags = parse(r#"json:"""#).unwrap();
    assert_eq!(tags.get("json"), Some(""));
}

#[test]
fn test_value_with_spaces_commas_and_colons() {
    let tags = parse(r#"json:"name,omitempty" doc:"a: b c""#).unwrap();
    assert_eq!(tags.get("json"), Some("name,omitempty"));
    assert_eq!(tags.get("doc"), Some("a: b c"));
}

#[test]
fn test_escaped_quotes_in_value() {
    let tags = parse(r#"doc:"say \"hi\"" next:"x""#).unwrap();
    assert_eq!(tags.get("doc"), Some(r#"say "hi""#));
    assert_eq!(tags.get("next"), Some("x"));
}

#[test]
fn test_escape_sequences() {
    let tags = parse(r#"a:"tab\there" b:"\u00e9\x41\101" c:"back\\slash""#).unwrap();
    assert_eq!(tags.get("a"), Some("tab\there"));
    assert_eq!(tags.get("b"), Some("éAA"));
    assert_eq!(tags.get("c"), Some("back\\slash"));
}

#[test]
fn test_unusual_key_characters() {
    let tags = parse(r#"x-y.z/w:"1" 名前:"2""#).unwrap();
    assert_eq!(tags.get("x-y.z/w"), Some("1"));
    assert_eq!(tags.get("名前"), Some("2"));
}

#[test]
fn test_invalid_syntax() {
    for input in ["invalid syntax", "key", "key:", "key :\"v\"", "key\t:\"v\""] {
        assert_eq!(parse(input), Err(Error::InvalidSyntax), "{input:?}");
    }
}

#[test]
fn test_invalid_key() {
    for input in [":value", r#"":"value""#, r#"  :"value""#, "\tkey:\"v\"", "\x7fkey:\"v\""] {
        assert_eq!(parse(input), Err(Error::InvalidKey), "{input:?}");
    }
}

#[test]
fn test_invalid_value() {
    for input in [
        "key:value",
        r#"key:value""#,
        r#"key:"value"#,
        r#"key:"value\""#,
        r#"key:\"value""#,
        r#"key: """#,
        r#"key:"\q""#,
        r#"key:'value'"#,
        "key:\"multi\nline\"",
    ] {
        assert_eq!(parse(input), Err(Error::InvalidValue), "{input:?}");
    }
}

#[test]
fn test_invalid_separator() {
    assert_eq!(
        parse(r#"key:"value", other:"value""#),
        Err(Error::InvalidSeparator)
    );
    assert_eq!(parse(r#"a,b:"1""#), Err(Error::InvalidSeparator));
    assert_eq!(parse(","), Err(Error::InvalidSeparator));
}

#[test]
fn test_first_error_wins() {
    // The separator error comes first even though a bad value follows.
    assert_eq!(
        parse(r#"a:"1", b:value"#),
        Err(Error::InvalidSeparator)
    );
    assert_eq!(parse(r#"a:1, b:"2""#), Err(Error::InvalidValue));
}

#[test]
fn test_partial_result_on_error() {
    let (tags, err) = parse_partial(r#"json:"host" env:"SERVER_HOST" default:localhost"#);
    assert_eq!(err, Some(Error::InvalidValue));
    assert_eq!(tags, tags! { "json" => "host", "env" => "SERVER_HOST" });

    let (tags, err) = parse_partial(r#":"x" json:"host""#);
    assert_eq!(err, Some(Error::InvalidKey));
    assert!(tags.is_empty());
}

#[test]
fn test_byte_input() {
    let tags = parse(b"json:\"host\"").unwrap();
    assert_eq!(tags.get("json"), Some("host"));

    let tags = parse(&b"bin:\"\xff\xfe\""[..]).unwrap();
    assert_eq!(tags.get("bin"), Some("\u{FFFD}\u{FFFD}"));
}

#[test]
fn test_parser_yields_duplicates_in_order() {
    let pairs: Vec<(String, String)> = Parser::new(r#"env:"A" json:"x" env:"B""#)
        .collect::<Result<_, _>>()
        .unwrap();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["env", "json", "env"]);
}

#[test]
fn test_parser_stops_after_error() {
    let results: Vec<_> = Parser::new(r#"a:"1" b:2 c:"3""#).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert_eq!(results[1], Err(Error::InvalidValue));
}
