//! 有界 LRU 记忆化缓存
//!
//! 进程内缓存，容量按条目数限制，满时淘汰最久未使用的条目。
//! 内部映射由互斥锁保护：查询和插入各自持锁，生产函数（远程调用）在锁外执行。

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;
use serde::Serialize;

/// 默认缓存容量
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// 缓存统计信息
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub evictions: u64,
    pub len: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// 命中率，没有任何查询时为 0
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Default)]
struct Counters {
    hits: u64,
    misses: u64,
    inserts: u64,
    evictions: u64,
}

struct Inner<K: Hash + Eq, V> {
    entries: LruCache<K, V>,
    counters: Counters,
}

/// 线程安全的 LRU 记忆化缓存
pub struct LruMemo<K: Hash + Eq, V> {
    inner: Mutex<Inner<K, V>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LruMemo<K, V> {
    /// 创建缓存，容量为 0 时使用默认容量
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(DEFAULT_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                counters: Counters::default(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        // 持锁期间没有会 panic 的用户代码，中毒的锁仍可继续使用
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 查询并将条目标记为最近使用
    pub fn get(&self, key: &K) -> Option<V> {
        let mut inner = self.lock();
        match inner.entries.get(key).cloned() {
            Some(value) => {
                inner.counters.hits += 1;
                Some(value)
            }
            None => {
                inner.counters.misses += 1;
                None
            }
        }
    }

    /// 查询但不改变使用顺序，也不计入统计
    pub fn peek(&self, key: &K) -> Option<V> {
        self.lock().entries.peek(key).cloned()
    }

    /// 插入条目，返回被淘汰的条目（如有）
    pub fn insert(&self, key: K, value: V) -> Option<(K, V)> {
        let mut inner = self.lock();
        inner.counters.inserts += 1;

        let replaced_key_exists = inner.entries.contains(&key);
        let evicted = inner.entries.push(key, value);

        // push 在覆盖已有键时也会返回旧值，这种情况不算淘汰
        match evicted {
            Some(pair) if !replaced_key_exists => {
                inner.counters.evictions += 1;
                Some(pair)
            }
            _ => None,
        }
    }

    /// 命中则直接返回，否则调用 `produce`，只有成功结果才会写入缓存
    pub fn get_or_try_insert_with<E, F>(&self, key: K, produce: F) -> Result<V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = produce(&key)?;
        self.insert(key, value.clone());
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().entries.cap().get()
    }

    /// 清空缓存（统计信息保留）
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    /// 按最近使用到最久未使用的顺序返回键的快照
    pub fn keys(&self) -> Vec<K> {
        self.lock().entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            hits: inner.counters.hits,
            misses: inner.counters.misses,
            inserts: inner.counters.inserts,
            evictions: inner.counters.evictions,
            len: inner.entries.len(),
            capacity: inner.entries.cap().get(),
        }
    }

    pub fn reset_stats(&self) {
        self.lock().counters = Counters::default();
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Default for LruMemo<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
