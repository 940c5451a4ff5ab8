use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid ratio spec '{spec}': {reason}")]
    InvalidRatioSpec { spec: String, reason: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown {kind} preset: {name}")]
    UnknownPreset { kind: String, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_value(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        CalcError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidConfigValueError { .. } => ErrorCategory::Input,
            CalcError::InvalidRatioSpec { .. }
            | CalcError::ConfigParseError { .. }
            | CalcError::UnknownPreset { .. } => ErrorCategory::Configuration,
            CalcError::SerializationError(_) | CalcError::CsvError(_) => ErrorCategory::Output,
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("輸入欄位 {} 的值 '{}' 不正確: {}", field, value, reason)
            }
            CalcError::InvalidRatioSpec { spec, reason } => {
                format!("比例設定 '{}' 無效: {}", spec, reason)
            }
            CalcError::UnknownPreset { kind, name } => {
                format!("找不到 {} 預設: {}", kind, name)
            }
            CalcError::ConfigParseError { field, message } => {
                format!("預設檔解析失敗 ({}): {}", field, message)
            }
            CalcError::IoError(e) => format!("讀寫檔案失敗: {}", e),
            CalcError::SerializationError(e) => format!("JSON 輸出失敗: {}", e),
            CalcError::CsvError(e) => format!("CSV 輸出失敗: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::InvalidConfigValueError { .. } => {
                "Check the value against the allowed range and retry".to_string()
            }
            CalcError::InvalidRatioSpec { .. } => {
                "Make sure the baseline ratio is greater than 0 and no ratio is negative"
                    .to_string()
            }
            CalcError::UnknownPreset { kind, .. } => {
                format!("Run `kitchen-ratio presets` to list the available {} presets", kind)
            }
            CalcError::ConfigParseError { .. } => {
                "Make sure the preset file is valid TOML".to_string()
            }
            CalcError::IoError(_) => "Check that the file exists and is readable".to_string(),
            CalcError::SerializationError(_) | CalcError::CsvError(_) => {
                "Try the text output format".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
