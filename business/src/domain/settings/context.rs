use std::sync::RwLock;

use super::errors::SettingsError;
use super::model::{CategoryDefinition, SessionSettings, Theme};
use crate::domain::product::category::FoodCategory;

/// Settings for one application session, passed explicitly to whoever needs
/// them.
///
/// Lifecycle: [`SettingsContext::begin`] opens the session, the accessors
/// read and write it, [`SettingsContext::end`] closes it and hands back the
/// final values. Every accessor fails with `SessionClosed` afterwards.
pub struct SettingsContext {
    inner: RwLock<Option<SessionSettings>>,
}

impl SettingsContext {
    pub fn begin(settings: SessionSettings) -> Self {
        Self {
            inner: RwLock::new(Some(settings)),
        }
    }

    pub fn snapshot(&self) -> Result<SessionSettings, SettingsError> {
        let guard = self.inner.read().map_err(|_| SettingsError::LockPoisoned)?;
        guard.clone().ok_or(SettingsError::SessionClosed)
    }

    pub fn theme(&self) -> Result<Theme, SettingsError> {
        self.read(|settings| settings.theme)
    }

    pub fn label_for(&self, category: FoodCategory) -> Result<String, SettingsError> {
        self.read(|settings| settings.label_for(category))
    }

    pub fn set_theme(&self, theme: Theme) -> Result<SessionSettings, SettingsError> {
        self.write(|settings| settings.theme = theme)
    }

    pub fn set_category_label(
        &self,
        category: FoodCategory,
        label: &str,
    ) -> Result<SessionSettings, SettingsError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(SettingsError::LabelEmpty);
        }

        self.write(|settings| {
            match settings
                .categories
                .iter_mut()
                .find(|definition| definition.category == category)
            {
                Some(definition) => definition.label = label.to_string(),
                None => settings.categories.push(CategoryDefinition {
                    category,
                    label: label.to_string(),
                }),
            }
        })
    }

    /// Closes the session. Returns the last settings, or `None` if it was
    /// already closed.
    pub fn end(&self) -> Result<Option<SessionSettings>, SettingsError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| SettingsError::LockPoisoned)?;
        Ok(guard.take())
    }

    pub fn is_open(&self) -> bool {
        self.inner.read().map(|g| g.is_some()).unwrap_or(false)
    }

    fn read<T>(&self, f: impl FnOnce(&SessionSettings) -> T) -> Result<T, SettingsError> {
        let guard = self.inner.read().map_err(|_| SettingsError::LockPoisoned)?;
        guard.as_ref().map(f).ok_or(SettingsError::SessionClosed)
    }

    fn write(
        &self,
        f: impl FnOnce(&mut SessionSettings),
    ) -> Result<SessionSettings, SettingsError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| SettingsError::LockPoisoned)?;
        let settings = guard.as_mut().ok_or(SettingsError::SessionClosed)?;
        f(settings);
        Ok(settings.clone())
    }
}
