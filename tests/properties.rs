//! Property tests for prefix derivation and store bookkeeping

use proptest::prelude::*;
use std::collections::HashSet;
use xmpns::{derive_prefix, Namespace, Schema, XmpError};

struct OpenNamespace;

impl Schema for OpenNamespace {
    const URI: Option<&'static str> = Some("http://example.com/open/");
}

#[derive(Debug, Clone)]
enum Op {
    Set(String, i64),
    Delete(String),
}

fn op() -> impl Strategy<Value = Op> {
    let key = "[a-d]";
    prop_oneof![
        (key, any::<i64>()).prop_map(|(k, v)| Op::Set(k, v)),
        key.prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn prefix_is_deterministic(name in "[A-Za-z0-9]{1,24}") {
        prop_assert_eq!(derive_prefix(&name), derive_prefix(&name));
    }

    #[test]
    fn prefix_is_lowercase_hyphenated(name in "[A-Z][a-zA-Z0-9]{0,20}") {
        let prefix = derive_prefix(&name);
        prop_assert!(prefix.chars().all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()));
        prop_assert!(!prefix.split('-').any(|word| word == "namespace"));
    }

    #[test]
    fn namespace_suffix_is_dropped(word in "[A-Z][a-z]{1,8}") {
        prop_assume!(word != "Namespace");
        let with_suffix = derive_prefix(&format!("{}Namespace", word));
        prop_assert_eq!(with_suffix, word.to_lowercase());
    }

    #[test]
    fn store_tracks_live_keys(ops in proptest::collection::vec(op(), 0..40)) {
        let mut ns = Namespace::<OpenNamespace>::new().unwrap();
        let mut live = HashSet::new();

        for op in ops {
            match op {
                Op::Set(key, value) => {
                    ns.set(key.clone(), value);
                    prop_assert_eq!(ns.get(&key).unwrap().as_int(), Some(value));
                    live.insert(key);
                }
                Op::Delete(key) => {
                    let result = ns.delete(&key);
                    if live.remove(&key) {
                        prop_assert!(result.is_ok());
                    } else {
                        prop_assert_eq!(result.unwrap_err(), XmpError::KeyNotFound(key.clone()));
                    }
                    prop_assert!(ns.get(&key).is_err());
                }
            }
            prop_assert_eq!(ns.len(), live.len());
        }
    }
}
