/// Builds a [`TagMap`](crate::TagMap) from `key => value` pairs.
///
/// Keys and values may be any expressions implementing `Display`. Later
/// pairs overwrite earlier ones with the same key.
///
/// # Examples
///
/// ```rust
/// use structtag::tags;
///
/// let port = 3000;
/// let tags = tags! {
///     "json" => "port",
///     "env" => "SERVER_PORT",
///     "default" => port,
/// };
/// assert_eq!(tags.to_string(), r#"json:"port" env:"SERVER_PORT" default:"3000""#);
/// ```
#[macro_export]
macro_rules! tags {
    () => {
        $crate::TagMap::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut tags = $crate::TagMap::new();
        $(
            tags.insert(
                ::std::string::ToString::to_string(&$key),
                ::std::string::ToString::to_string(&$value),
            );
        )+
        tags
    }};
}

#[cfg(test)]
mod tests {
    use crate::TagMap;

    #[test]
    fn test_tags_macro_empty() {
        assert_eq!(tags!(), TagMap::new());
    }

    #[test]
    fn test_tags_macro_pairs() {
        let tags = tags! { "json" => "host", "env" => "SERVER_HOST" };
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("json"), Some("host"));
        assert_eq!(tags.get("env"), Some("SERVER_HOST"));
    }

    #[test]
    fn test_tags_macro_duplicate_keys() {
        let tags = tags! { "env" => "A", "env" => "B", };
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("env"), Some("B"));
    }

    #[test]
    fn test_tags_macro_expressions() {
        let key = String::from("default");
        let tags = tags! { key => 8080, "flag" => true };
        assert_eq!(tags.get("default"), Some("8080"));
        assert_eq!(tags.get("flag"), Some("true"));
    }
}
