use serde::Deserialize;

/// Top-level configuration settings for the application.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub subject: SubjectSettings,
    pub logging: LoggingSettings,
}

/// Configuration for a `MessageSubject`.
///
/// `default_message` is what `create_default_message` publishes and
/// `business_message` is what `some_business_logic` publishes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SubjectSettings {
    pub default_message: String,
    pub business_message: String,
    pub strict_subscriptions: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub subject: Option<PartialSubjectSettings>,
    pub logging: Option<PartialLoggingSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialSubjectSettings {
    pub default_message: Option<String>,
    pub business_message: Option<String>,
    pub strict_subscriptions: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

impl Default for SubjectSettings {
    fn default() -> Self {
        Self {
            default_message: "empty".to_string(),
            business_message: "change message message".to_string(),
            strict_subscriptions: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            subject: SubjectSettings::default(),
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }
}

impl PartialSettings {
    /// Merge the values that were provided over the defaults.
    pub fn merge_with_defaults(self) -> Settings {
        let default = Settings::default();
        let subject = self.subject;
        let logging = self.logging;

        Settings {
            subject: SubjectSettings {
                default_message: subject
                    .as_ref()
                    .and_then(|s| s.default_message.clone())
                    .unwrap_or(default.subject.default_message),
                business_message: subject
                    .as_ref()
                    .and_then(|s| s.business_message.clone())
                    .unwrap_or(default.subject.business_message),
                strict_subscriptions: subject
                    .as_ref()
                    .and_then(|s| s.strict_subscriptions)
                    .unwrap_or(default.subject.strict_subscriptions),
            },
            logging: LoggingSettings {
                level: logging
                    .and_then(|l| l.level)
                    .unwrap_or(default.logging.level),
            },
        }
    }
}
