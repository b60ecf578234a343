//! 设置弹窗状态

use article_desk_core::types::AppSettings;

use super::TextInput;

/// 设置项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    ApiKey,
    WpUrl,
    WpUsername,
    WpPassword,
}

impl SettingsField {
    pub fn all() -> &'static [SettingsField] {
        &[
            SettingsField::ApiKey,
            SettingsField::WpUrl,
            SettingsField::WpUsername,
            SettingsField::WpPassword,
        ]
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::ApiKey => Self::WpUrl,
            Self::WpUrl => Self::WpUsername,
            Self::WpUsername => Self::WpPassword,
            Self::WpPassword => Self::ApiKey,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::ApiKey => Self::WpPassword,
            Self::WpUrl => Self::ApiKey,
            Self::WpUsername => Self::WpUrl,
            Self::WpPassword => Self::WpUsername,
        }
    }

    /// 是否为密码字段
    pub fn is_secret(self) -> bool {
        matches!(self, Self::ApiKey | Self::WpPassword)
    }
}

/// 设置弹窗
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub api_key: TextInput,
    pub wp_url: TextInput,
    pub wp_username: TextInput,
    pub wp_password: TextInput,
    pub focus: SettingsField,
    /// 是否显示密码明文
    pub show_secrets: bool,
}

impl SettingsForm {
    /// 用已保存的设置预填
    pub fn from_settings(settings: &AppSettings) -> Self {
        let mut form = Self::default();
        form.api_key.set(&settings.openai_api_key);
        form.wp_url.set(&settings.wp_url);
        form.wp_username.set(&settings.wp_username);
        form.wp_password.set(&settings.wp_password);
        form
    }

    pub fn to_settings(&self) -> AppSettings {
        AppSettings {
            openai_api_key: self.api_key.value().trim().to_string(),
            wp_url: self.wp_url.value().trim().to_string(),
            wp_username: self.wp_username.value().trim().to_string(),
            wp_password: self.wp_password.value().to_string(),
        }
    }

    pub fn input(&self, field: SettingsField) -> &TextInput {
        match field {
            SettingsField::ApiKey => &self.api_key,
            SettingsField::WpUrl => &self.wp_url,
            SettingsField::WpUsername => &self.wp_username,
            SettingsField::WpPassword => &self.wp_password,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            SettingsField::ApiKey => &mut self.api_key,
            SettingsField::WpUrl => &mut self.wp_url,
            SettingsField::WpUsername => &mut self.wp_username,
            SettingsField::WpPassword => &mut self.wp_password,
        }
    }
}
