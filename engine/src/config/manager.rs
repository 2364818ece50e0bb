use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. When the provider has no content
/// the config's `Default` is returned, so a missing file never fails.
pub struct ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    serializer: YamlConfigSerializer,
    provider: TProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TProvider, TConfig> ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(provider: TProvider) -> Self {
        Self {
            serializer: YamlConfigSerializer::new(),
            provider,
            config: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        *self.config.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        value: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { value: 7 }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.value == 0 {
                return Err("value must not be zero".to_string());
            }
            Ok(())
        }
    }

    struct MemoryProvider {
        content: Mutex<Option<String>>,
    }

    impl MemoryProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: Mutex::new(content.map(str::to_string)),
            }
        }
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.lock().unwrap().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.lock().unwrap() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(MemoryProvider::new(None));
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_roundtrip_through_provider() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(MemoryProvider::new(None));
        manager.set_config(&TestConfig { value: 42 }).unwrap();
        assert_eq!(manager.get_config().unwrap().value, 42);
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(MemoryProvider::new(Some("value: 0\n")));
        assert!(manager.get_config().is_err());
    }
}
