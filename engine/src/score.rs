use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigContentProvider, ConfigSerializer, YamlConfigSerializer};
use crate::log;

/// On-disk shape of the persisted high score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    best: u32,
}

/// Gateway to the single persisted high-score value.
///
/// The stored value is read once at construction; missing or unparseable
/// content degrades to 0 instead of failing. `report_game_end` performs the
/// compare-and-write as one step under the cache lock, so a better score
/// can never be lost to an interleaved report.
pub struct HighScoreStore<TProvider: ConfigContentProvider> {
    provider: TProvider,
    serializer: YamlConfigSerializer,
    best: Mutex<u32>,
}

impl<TProvider: ConfigContentProvider> HighScoreStore<TProvider> {
    pub fn load(provider: TProvider) -> Self {
        let serializer = YamlConfigSerializer::new();
        let best = match provider.get_config_content() {
            Ok(Some(content)) => {
                let parsed: Result<HighScoreRecord, String> = serializer.deserialize(&content);
                match parsed {
                    Ok(record) => record.best,
                    Err(e) => {
                        log!("Stored high score is unreadable, starting from 0: {}", e);
                        0
                    }
                }
            }
            Ok(None) => 0,
            Err(e) => {
                log!("Failed to read high score store, starting from 0: {}", e);
                0
            }
        };

        Self {
            provider,
            serializer,
            best: Mutex::new(best),
        }
    }

    pub fn high_score(&self) -> u32 {
        *self.best.lock().unwrap()
    }

    /// Reports a finished game. Returns true when `final_score` beats the
    /// stored high score, in which case the new value is persisted.
    /// Persistence failures are logged and do not affect the result.
    pub fn report_game_end(&self, final_score: u32) -> bool {
        let mut best = self.best.lock().unwrap();
        if final_score <= *best {
            return false;
        }
        *best = final_score;

        let record = HighScoreRecord { best: final_score };
        let persisted = self
            .serializer
            .serialize(&record)
            .and_then(|content| self.provider.set_config_content(&content));
        if let Err(e) = persisted {
            log!("Failed to persist high score {}: {}", final_score, e);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MemoryProvider {
        content: Mutex<Option<String>>,
        fail_writes: bool,
    }

    impl MemoryProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: Mutex::new(content.map(str::to_string)),
                fail_writes: false,
            }
        }

        fn stored(&self) -> Option<String> {
            self.content.lock().unwrap().clone()
        }
    }

    impl ConfigContentProvider for &MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.lock().unwrap().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            if self.fail_writes {
                return Err("store unavailable".to_string());
            }
            *self.content.lock().unwrap() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_store_loads_as_zero() {
        let provider = MemoryProvider::new(None);
        let store = HighScoreStore::load(&provider);
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_corrupt_store_loads_as_zero() {
        let provider = MemoryProvider::new(Some("not: [valid"));
        let store = HighScoreStore::load(&provider);
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_lower_score_leaves_store_unchanged() {
        let provider = MemoryProvider::new(Some("best: 50\n"));
        let store = HighScoreStore::load(&provider);
        assert_eq!(store.high_score(), 50);
        assert!(!store.report_game_end(30));
        assert_eq!(store.high_score(), 50);
        assert_eq!(provider.stored().as_deref(), Some("best: 50\n"));
    }

    #[test]
    fn test_higher_score_is_persisted_and_signaled_once() {
        let provider = MemoryProvider::new(Some("best: 50\n"));
        let store = HighScoreStore::load(&provider);
        assert!(store.report_game_end(70));
        assert_eq!(store.high_score(), 70);
        assert_eq!(provider.stored().as_deref(), Some("best: 70\n"));
        // Reporting the same score again is not a new high score.
        assert!(!store.report_game_end(70));
    }

    #[test]
    fn test_equal_score_is_not_a_new_high_score() {
        let provider = MemoryProvider::new(Some("best: 50\n"));
        let store = HighScoreStore::load(&provider);
        assert!(!store.report_game_end(50));
    }

    #[test]
    fn test_write_failure_does_not_panic() {
        let mut provider = MemoryProvider::new(None);
        provider.fail_writes = true;
        let store = HighScoreStore::load(&provider);
        assert!(store.report_game_end(10));
        assert_eq!(store.high_score(), 10);
    }
}
