use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use landing::storage::KeyValueStore;

// browser local storage
//
// values are read and written as raw strings; the json handling for the
// submission log lives in landing::storage so that it can be tested natively
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage(key)
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        set_local_storage(key, value)
    }
}

pub fn set_local_storage(key: &str, value: &str) -> anyhow::Result<()> {
    LocalStorage::raw().set_item(key, value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// a read failure (storage disabled, security error) is the same as an empty key
pub fn get_local_storage(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        None
    })
}
