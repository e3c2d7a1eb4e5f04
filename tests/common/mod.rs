// 集成测试公共模块
//
// 提供可编排的模拟服务和测试环境构建器

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lingovox::network::RemoteFailure;
use lingovox::speech::{SpeechProvider, SpeechSynthesizer};
use lingovox::translation::{TranslationCache, TranslationProvider, Translator};
use lingovox::LingoService;

/// 模拟翻译服务
///
/// 预先排队的失败按顺序返回，队列为空后返回 `"<target>:<text>"`。
#[derive(Default)]
pub struct MockTranslator {
    calls: AtomicUsize,
    failures: Mutex<VecDeque<RemoteFailure>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next(&self, failure: RemoteFailure) {
        self.failures
            .lock()
            .expect("mock lock poisoned")
            .push_back(failure);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TranslationProvider for MockTranslator {
    fn translate(
        &self,
        _source_lang: &str,
        target_lang: &str,
        text: &str,
    ) -> Result<String, RemoteFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.failures.lock().expect("mock lock poisoned").pop_front() {
            return Err(failure);
        }

        Ok(format!("{}:{}", target_lang, text))
    }
}

/// 模拟语音合成服务，返回固定字节；`empty` 时模拟空音频
#[derive(Default)]
pub struct MockSpeech {
    calls: AtomicUsize,
    empty: bool,
}

pub const FAKE_MP3: &[u8] = b"ID3\x03\x00\x00\x00fake-mp3-frames";

impl MockSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn silent() -> Self {
        Self {
            empty: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SpeechProvider for MockSpeech {
    fn synthesize(&self, _text: &str, lang: &str) -> Result<Vec<u8>, RemoteFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !lingovox::speech::is_supported_language(lang) {
            return Err(RemoteFailure::Other(format!("Language not supported: {}", lang)));
        }
        if self.empty {
            return Ok(Vec::new());
        }
        Ok(FAKE_MP3.to_vec())
    }
}

/// 测试环境：模拟服务 + 共享缓存
pub struct TestEnvironment {
    pub translator_mock: Arc<MockTranslator>,
    pub speech_mock: Arc<MockSpeech>,
    pub cache: Arc<TranslationCache>,
    pub service: LingoService,
}

/// 测试环境构建器
pub struct TestEnvironmentBuilder {
    cache_size: usize,
    speech: MockSpeech,
}

impl TestEnvironmentBuilder {
    pub fn new() -> Self {
        Self {
            cache_size: lingovox::cache::DEFAULT_CACHE_CAPACITY,
            speech: MockSpeech::new(),
        }
    }

    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    pub fn with_silent_speech(mut self) -> Self {
        self.speech = MockSpeech::silent();
        self
    }

    pub fn build(self) -> TestEnvironment {
        let translator_mock = Arc::new(MockTranslator::new());
        let speech_mock = Arc::new(self.speech);
        let cache = Arc::new(TranslationCache::new(self.cache_size));

        let service = LingoService::new(
            Translator::new(translator_mock.clone(), cache.clone()),
            SpeechSynthesizer::new(speech_mock.clone()),
        );

        TestEnvironment {
            translator_mock,
            speech_mock,
            cache,
            service,
        }
    }
}

impl TestEnvironment {
    pub fn new() -> Self {
        TestEnvironmentBuilder::new().build()
    }
}
