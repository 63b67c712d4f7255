//! Bounded in-memory cache mapping question text to generated answers.
//!
//! The key is the raw question string, case- and whitespace-sensitive.
//! Eviction is least-recently-used; entries have no TTL and live until
//! evicted or the process exits.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

/// Maximum number of distinct questions retained at once.
pub const ANSWER_CACHE_CAPACITY: usize = 100;

pub struct AnswerCache {
    inner: Mutex<LruCache<String, String>>,
}

impl AnswerCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).expect("cache capacity must be > 0"),
            )),
        }
    }

    /// Look up a cached answer, marking the entry as most recently used.
    pub fn get(&self, question: &str) -> Option<String> {
        self.inner.lock().get(question).cloned()
    }

    /// Store an answer, evicting the least-recently-used entry at capacity.
    pub fn insert(&self, question: String, answer: String) {
        self.inner.lock().put(question, answer);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let cache = AnswerCache::new(10);
        assert!(cache.get("how do I sear a steak").is_none());
        cache.insert("how do I sear a steak".into(), "hot pan, dry meat".into());
        assert_eq!(
            cache.get("how do I sear a steak").as_deref(),
            Some("hot pan, dry meat")
        );
    }

    #[test]
    fn keys_are_case_and_whitespace_sensitive() {
        let cache = AnswerCache::new(10);
        cache.insert("brine a turkey".into(), "12 hours".into());
        assert!(cache.get("Brine a turkey").is_none());
        assert!(cache.get(" brine a turkey").is_none());
        assert!(cache.get("brine a turkey ").is_none());
        assert_eq!(cache.get("brine a turkey").as_deref(), Some("12 hours"));
    }

    #[test]
    fn insert_past_capacity_evicts_least_recently_used() {
        let cache = AnswerCache::new(2);
        cache.insert("a".into(), "1".into());
        cache.insert("b".into(), "2".into());
        // Touch "a" so "b" becomes the LRU entry.
        assert!(cache.get("a").is_some());
        cache.insert("c".into(), "3".into());
        assert!(cache.get("b").is_none(), "LRU entry should be evicted");
        assert!(cache.get("a").is_some());
        assert!(cache.get("c").is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn hundred_and_first_key_evicts_oldest() {
        let cache = AnswerCache::new(ANSWER_CACHE_CAPACITY);
        for i in 0..=ANSWER_CACHE_CAPACITY {
            cache.insert(format!("question {i}"), format!("answer {i}"));
        }
        assert_eq!(cache.len(), ANSWER_CACHE_CAPACITY);
        assert!(cache.get("question 0").is_none());
        assert!(cache.get("question 1").is_some());
    }

    #[test]
    fn reinserting_same_key_does_not_grow_cache() {
        let cache = AnswerCache::new(2);
        cache.insert("a".into(), "1".into());
        cache.insert("a".into(), "updated".into());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").as_deref(), Some("updated"));
    }

    #[test]
    fn len_and_is_empty() {
        let cache = AnswerCache::new(5);
        assert!(cache.is_empty());
        cache.insert("a".into(), "1".into());
        assert!(!cache.is_empty());
        assert_eq!(cache.len(), 1);
    }
}
