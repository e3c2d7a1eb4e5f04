//! 翻译包装器集成测试
//!
//! 覆盖输入校验、记忆化缓存和错误规范化

use std::sync::Arc;
use std::thread;

use lingovox::network::RemoteFailure;
use lingovox::translation::TranslationRequest;
use lingovox::{ErrorKind, LingoError};

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::{TestEnvironment, TestEnvironmentBuilder};

/// 空白输入在缓存和网络之前被拒绝
#[test]
fn test_whitespace_input_rejected() {
    let env = TestEnvironment::new();

    for text in ["", "   ", "\n\t  "] {
        let err = env.service.translate("en", "es", text).unwrap_err();
        assert_eq!(err, LingoError::EmptyInput);
        assert_eq!(err.to_string(), "Text cannot be empty or whitespace");
    }

    assert_eq!(env.translator_mock.calls(), 0);
    let stats = env.service.cache_stats();
    assert_eq!(stats.hits + stats.misses, 0);

    println!("✅ Whitespace input rejection test passed");
}

/// 相同请求第二次命中缓存
#[test]
fn test_repeated_request_served_from_cache() {
    let env = TestEnvironment::new();

    let first = env.service.translate("en", "es", "Hello").unwrap();
    let second = env.service.translate("en", "es", "Hello").unwrap();

    assert_eq!(first, second);
    assert_eq!(env.translator_mock.calls(), 1);
    assert_eq!(env.service.cache_stats().hits, 1);

    println!("✅ Cache hit test passed");
}

/// 首尾空白不同的文本共用缓存条目
#[test]
fn test_trimmed_text_shares_cache_entry() {
    let env = TestEnvironment::new();

    env.service.translate("en", "es", "Hello").unwrap();
    env.service.translate("en", "es", "  Hello \n").unwrap();

    assert_eq!(env.translator_mock.calls(), 1);
    assert_eq!(env.cache.len(), 1);
}

/// 缓存键包含语言对
#[test]
fn test_language_pair_is_part_of_key() {
    let env = TestEnvironment::new();

    let es = env.service.translate("en", "es", "Hello").unwrap();
    let fr = env.service.translate("en", "fr", "Hello").unwrap();

    assert_ne!(es, fr);
    assert_eq!(env.translator_mock.calls(), 2);
}

/// 超出容量时淘汰最久未使用的条目
#[test]
fn test_least_recently_used_entry_evicted() {
    let env = TestEnvironmentBuilder::new().with_cache_size(3).build();

    for text in ["one", "two", "three"] {
        env.service.translate("en", "es", text).unwrap();
    }
    // 访问 "one"，使 "two" 成为最久未使用
    env.service.translate("en", "es", "one").unwrap();
    env.service.translate("en", "es", "four").unwrap();

    assert_eq!(env.cache.len(), 3);
    assert!(env.cache.peek(&TranslationRequest::new("en", "es", "two")).is_none());
    assert!(env.cache.peek(&TranslationRequest::new("en", "es", "one")).is_some());

    let calls = env.translator_mock.calls();
    env.service.translate("en", "es", "two").unwrap();
    assert_eq!(env.translator_mock.calls(), calls + 1);

    println!("✅ LRU eviction test passed");
}

/// 超时不会被缓存，下一次调用重新请求远程服务
#[test]
fn test_timeout_not_cached_and_retried() {
    let env = TestEnvironment::new();
    env.translator_mock
        .fail_next(RemoteFailure::Timeout("operation timed out".to_string()));

    let err = env.service.translate("en", "es", "Hello").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteTimeout);
    assert!(err.is_retryable());
    assert!(err.to_string().contains("timed out"));
    assert!(err.to_string().contains("check your internet connection"));
    assert!(env.cache.is_empty());

    let ok = env.service.translate("en", "es", "Hello").unwrap();
    assert_eq!(ok, "es:Hello");
    assert_eq!(env.translator_mock.calls(), 2);

    println!("✅ Timeout retry test passed");
}

/// 远程失败按类别规范化
#[test]
fn test_failure_kinds() {
    let env = TestEnvironment::new();
    env.translator_mock
        .fail_next(RemoteFailure::Network("connection refused".to_string()));
    env.translator_mock
        .fail_next(RemoteFailure::Other("HTTP 400: invalid language pair".to_string()));

    let network = env.service.translate("en", "xx", "Hello").unwrap_err();
    assert_eq!(network.kind(), ErrorKind::RemoteNetworkError);
    assert!(network.to_string().contains("check your internet connection"));

    let other = env.service.translate("en", "xx", "Hello").unwrap_err();
    assert_eq!(other.kind(), ErrorKind::RemoteTranslationError);
    assert!(!other.is_retryable());
    assert!(other.to_string().starts_with("Translation failed:"));
    assert!(other.to_string().contains("invalid language pair"));
}

/// 多线程共享同一个包装器
#[test]
fn test_concurrent_translations() {
    let env = TestEnvironmentBuilder::new().with_cache_size(8).build();
    let service = Arc::new(env.service.clone());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            thread::spawn(move || {
                for j in 0..20 {
                    let text = format!("text {}", (i + j) % 4);
                    let out = service.translate("en", "de", &text).unwrap();
                    assert_eq!(out, format!("de:{}", text));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(env.cache.len() <= 8);
    assert_eq!(env.cache.len(), 4);
}

/// 真实 Google 服务
#[test]
#[ignore = "requires network access"]
fn test_live_translation() {
    let service = lingovox::LingoService::from_config(&lingovox::env::EnvConfig::default()).unwrap();

    let result = service.translate("en", "es", "Hello").unwrap();
    assert!(result.to_lowercase().starts_with("hola"), "got: {}", result);
}
