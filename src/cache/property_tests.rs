//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key validation and pool invariants over
//! generated keys and operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{
    validate_key, CacheItem, DeferredPool, ItemPool, MemoryPool, TimeToLive, MAX_KEY_LENGTH,
};
use crate::error::{CacheError, InvalidKeyError};

// == Strategies ==
/// Generates valid cache keys (non-empty, within length limit)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,64}".prop_map(|s| s)
}

/// Generates keys holding at least one forbidden character
fn bad_char_key_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{0,20}", "[ /:?!@#%*]", "[a-z]{0,20}")
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum PoolOp {
    Save { key: String, value: String },
    Delete { key: String },
}

fn pool_op_strategy() -> impl Strategy<Value = PoolOp> {
    // Small key space so deletes and overwrites actually collide
    let key = "[a-d]{1,2}";
    prop_oneof![
        (key, valid_value_strategy()).prop_map(|(key, value)| PoolOp::Save { key, value }),
        key.prop_map(|key| PoolOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every well-formed key is accepted.
    #[test]
    fn prop_valid_keys_accepted(key in valid_key_strategy()) {
        prop_assert!(validate_key(&key).is_ok());
    }

    // Keys longer than the limit are rejected with their length.
    #[test]
    fn prop_long_keys_rejected(extra in 1usize..64) {
        let key = "k".repeat(MAX_KEY_LENGTH + extra);
        let rejected = matches!(
            validate_key(&key),
            Err(InvalidKeyError::TooLong { length, .. }) if length == MAX_KEY_LENGTH + extra
        );
        prop_assert!(rejected);
    }

    // Every key-accepting pool operation rejects forbidden characters.
    #[test]
    fn prop_bad_characters_rejected_everywhere(key in bad_char_key_strategy()) {
        let mut pool: MemoryPool<String> = MemoryPool::new();

        let is_invalid = |result: Result<bool, CacheError>| {
            matches!(result, Err(CacheError::InvalidKey(InvalidKeyError::InvalidCharacters { .. })))
        };

        prop_assert!(matches!(pool.get_item(&key), Err(CacheError::InvalidKey(_))));
        prop_assert!(is_invalid(pool.has_item(&key)));
        prop_assert!(is_invalid(pool.delete_item(&key)));
        prop_assert!(is_invalid(pool.save(CacheItem::with_value(key.clone(), String::new()))));
    }

    // Storing an item and reading it back yields the same value.
    #[test]
    fn prop_roundtrip_storage(key in valid_key_strategy(), value in valid_value_strategy()) {
        let mut pool = MemoryPool::new();

        pool.save(CacheItem::with_value(key.clone(), value.clone())).unwrap();

        let item = pool.get_item(&key).unwrap();
        prop_assert!(item.is_hit());
        prop_assert_eq!(item.into_value(), Some(value));
    }

    // Already-expired items are stored but never hit.
    #[test]
    fn prop_negative_ttl_never_hits(key in valid_key_strategy(), secs in 0i64..100_000) {
        let mut pool = MemoryPool::new();
        let mut item = CacheItem::with_value(key.clone(), 1u8);
        item.expires_after(Some(TimeToLive::Seconds(-secs)));
        pool.save(item).unwrap();

        prop_assert!(pool.has_item(&key).unwrap());
        prop_assert!(!pool.get_item(&key).unwrap().is_hit());
    }

    // A pool behaves like a plain map under any mix of saves and deletes.
    #[test]
    fn prop_pool_matches_model(ops in prop::collection::vec(pool_op_strategy(), 1..60)) {
        let mut pool = MemoryPool::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                PoolOp::Save { key, value } => {
                    pool.save(CacheItem::with_value(key.clone(), value.clone())).unwrap();
                    model.insert(key, value);
                }
                PoolOp::Delete { key } => {
                    let existed = model.remove(&key).is_some();
                    prop_assert_eq!(pool.delete_item(&key).unwrap(), existed);
                }
            }
        }

        prop_assert_eq!(pool.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(pool.get_item(key).unwrap().into_value(), Some(value.clone()));
        }
    }

    // Staged items are visible to has_item only, until commit.
    #[test]
    fn prop_deferred_visible_after_commit(
        entries in prop::collection::hash_map(valid_key_strategy(), valid_value_strategy(), 1..20)
    ) {
        let mut pool = DeferredPool::new();

        for (key, value) in &entries {
            pool.save_deferred(CacheItem::with_value(key.clone(), value.clone())).unwrap();
        }

        for key in entries.keys() {
            prop_assert!(pool.has_item(key).unwrap());
            prop_assert!(!pool.get_item(key).unwrap().is_hit());
        }

        pool.commit().unwrap();
        prop_assert_eq!(pool.pending(), 0);

        for (key, value) in &entries {
            prop_assert_eq!(pool.get_item(key).unwrap().into_value(), Some(value.clone()));
        }
    }

    // Batch delete is false when any key is missing but still removes the rest.
    #[test]
    fn prop_delete_items_not_short_circuited(
        present in prop::collection::hash_set("[a-m]{3}", 1..10),
        missing in "[n-z]{3}"
    ) {
        let mut pool = MemoryPool::new();
        for key in &present {
            pool.save(CacheItem::with_value(key.clone(), 0u8)).unwrap();
        }

        let mut keys: Vec<&str> = vec![missing.as_str()];
        keys.extend(present.iter().map(String::as_str));

        prop_assert!(!pool.delete_items(&keys).unwrap());
        prop_assert!(pool.is_empty());
    }
}
