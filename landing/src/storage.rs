use std::{cell::RefCell, collections::HashMap};

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::submission::{PartialSubmission, SUBMISSIONS_KEY};

// key-value storage
//
// this is the shape of the browser's local storage: string keys, string values,
// reads that can come back empty and writes that can fail (quota, private mode).
// the webapp implements it over gloo-storage and the tests use MemoryStore
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// read the list stored under key
//
// this never fails: a missing key, text that isn't json, and json that isn't an
// array all read as an empty list.  the elements themselves are left untouched so
// that appending never rewrites entries we don't understand
pub fn read_list<S>(store: &S, key: &str) -> Vec<Value>
where
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_item(key) else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            debug!(key, "stored value is not a list, reading as empty");
            Vec::new()
        }
        Err(err) => {
            debug!(key, %err, "stored value is not valid json, reading as empty");
            Vec::new()
        }
    }
}

// read-modify-write of the list under key
//
// there is no locking across tabs, so two writers racing each other can lose one
// of the records
pub fn append_and_save<S, T>(store: &S, key: &str, record: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let mut items = read_list(store, key);
    items.push(serde_json::to_value(record)?);

    store.set_item(key, &serde_json::to_string(&items)?)
}

pub fn read_submissions<S>(store: &S) -> Vec<PartialSubmission>
where
    S: KeyValueStore + ?Sized,
{
    read_list(store, SUBMISSIONS_KEY)
        .iter()
        .map(PartialSubmission::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_key_reads_empty() {
        assert!(read_list(&MemoryStore::new(), "nothing").is_empty());
    }

    #[test]
    fn empty_string_reads_empty() {
        let store = MemoryStore::with_item("k", "");
        assert!(read_list(&store, "k").is_empty());
    }

    #[test]
    fn garbage_reads_empty() {
        for raw in ["{not json", "{\"a\": 1}", "42", "\"text\"", "null", "true"] {
            let store = MemoryStore::with_item("k", raw);
            assert!(read_list(&store, "k").is_empty(), "{raw} should read empty");
        }
    }

    #[test]
    fn append_starts_a_new_list() {
        let store = MemoryStore::new();
        append_and_save(&store, "k", &json!({"a": 1})).unwrap();

        assert_eq!(store.get_item("k").as_deref(), Some(r#"[{"a":1}]"#));
    }

    #[test]
    fn append_replaces_a_corrupt_value() {
        let store = MemoryStore::with_item("k", "oops");
        append_and_save(&store, "k", &json!("x")).unwrap();

        assert_eq!(read_list(&store, "k"), vec![json!("x")]);
    }

    #[test]
    fn append_keeps_unknown_elements() {
        let store = MemoryStore::with_item("k", r#"[1, {"name": "Ann"}, null]"#);
        append_and_save(&store, "k", &json!({"name": "Bo"})).unwrap();

        assert_eq!(
            read_list(&store, "k"),
            vec![json!(1), json!({"name": "Ann"}), json!(null), json!({"name": "Bo"})]
        );
    }

    #[test]
    fn read_submissions_uses_the_fixed_key() {
        let store = MemoryStore::with_item(SUBMISSIONS_KEY, r#"[{"name": "Ann"}, 3]"#);
        let log = read_submissions(&store);

        assert_eq!(log.len(), 2);
        assert_eq!(log[0].name.as_deref(), Some("Ann"));
        assert_eq!(log[1], PartialSubmission::default());
    }
}
