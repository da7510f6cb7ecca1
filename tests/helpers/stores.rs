//! Preference store doubles

use MarketLocale::state::PreferenceStore;
use MarketLocale::{LocaleError, Result};

/// Preference store whose reads and writes can be made to fail
#[derive(Debug, Default)]
pub struct FlakyPreferenceStore {
    pub value: Option<String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub write_attempts: u32,
}

impl FlakyPreferenceStore {
    pub fn failing_writes(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }
}

impl PreferenceStore for FlakyPreferenceStore {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(LocaleError::Storage("storage is unavailable".to_string()));
        }
        Ok(self.value.clone())
    }

    fn write(&mut self, _key: &str, value: &str) -> Result<()> {
        self.write_attempts += 1;
        if self.fail_writes {
            return Err(LocaleError::Storage("quota exceeded".to_string()));
        }
        self.value = Some(value.to_string());
        Ok(())
    }
}
