use crate::ir::Properties;
use crate::value::Mapping;

/// One entry per non-blank key of `m`, in the mapping's own order.
pub fn classify_properties(m: &Mapping) -> Properties {
    let mut out = Properties::with_capacity(m.len());
    for (k, v) in m {
        // null / "" → nothing to infer from, key is skipped
        if let Some(schema) = super::classify(v) {
            out.insert(k.clone(), schema);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::tests::doc;
    use crate::ir::Schema;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn skips_blank_keys_only() {
        let props = classify_properties(&doc(json!({
            "a": null, "b": "", "c": 0, "d": false, "e": [], "f": {}
        })));
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c", "d", "e", "f"]);
        assert_eq!(props["e"], Schema::array(Schema::Any));
        assert_eq!(props["f"], Schema::object(Properties::new()));
    }

    #[test]
    fn empty_mapping_yields_no_properties() {
        assert!(classify_properties(&Mapping::new()).is_empty());
    }
}
