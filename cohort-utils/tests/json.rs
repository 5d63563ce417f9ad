mod tests {
    use cohort_utils::{dejsonify, jsonify, read_json_file, write_json_file};
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    struct Doc {
        zulu: u32,
        alpha: String,
        nested: BTreeMap<String, Vec<u32>>,
    }

    fn doc() -> Doc {
        Doc {
            zulu: 7,
            alpha: "x".to_string(),
            nested: BTreeMap::from([("b".to_string(), vec![2, 1]), ("a".to_string(), vec![])]),
        }
    }

    #[test]
    fn test_jsonify_sorts_keys() {
        assert_eq!(
            jsonify(&doc()),
            r#"{"alpha":"x","nested":{"a":[],"b":[2,1]},"zulu":7}"#
        );
    }

    #[test]
    fn test_jsonify_sorts_inside_arrays() {
        let value = serde_json::json!([{"b": 1, "a": {"d": 0, "c": 0}}]);
        assert_eq!(jsonify(&value), r#"[{"a":{"c":0,"d":0},"b":1}]"#);
    }

    #[test]
    fn test_dejsonify_round_trip() {
        let parsed: Doc = dejsonify(&jsonify(&doc())).unwrap();
        assert_eq!(parsed, doc());
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "cohort-utils-json-test-{}.json",
            std::process::id()
        ));
        write_json_file(&path, &doc()).unwrap();
        let read: Doc = read_json_file(&path).unwrap();
        assert_eq!(read, doc());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_json_file_missing() {
        let path = std::env::temp_dir().join("cohort-utils-json-test-missing.json");
        assert!(read_json_file::<Doc>(&path).is_err());
    }
}
