use crate::domain::ports::PresetSource;
use crate::domain::presets::{
    builtin_bread, builtin_rice, builtin_starter, BreadPreset, RicePreset, StarterPreset,
};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 預設檔的原始內容，缺少的區段會以內建預設補上
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetFile {
    pub rice: Option<Vec<RicePreset>>,
    pub starter: Option<Vec<StarterPreset>>,
    pub bread: Option<Vec<BreadPreset>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetCatalog {
    pub rice: Vec<RicePreset>,
    pub starter: Vec<StarterPreset>,
    pub bread: Vec<BreadPreset>,
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self {
            rice: builtin_rice(),
            starter: builtin_starter(),
            bread: builtin_bread(),
        }
    }
}

impl From<PresetFile> for PresetCatalog {
    fn from(file: PresetFile) -> Self {
        Self {
            rice: file.rice.unwrap_or_else(builtin_rice),
            starter: file.starter.unwrap_or_else(builtin_starter),
            bread: file.bread.unwrap_or_else(builtin_bread),
        }
    }
}

impl PresetCatalog {
    /// 從 TOML 檔案載入預設，並立即驗證
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading presets from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析預設
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: PresetFile =
            toml::from_str(content).map_err(|e| CalcError::ConfigParseError {
                field: "toml_parsing".to_string(),
                message: e.to_string(),
            })?;

        let catalog = PresetCatalog::from(file);
        // 比例錯誤在設定階段就擋下，不留到計算時
        catalog.validate()?;
        Ok(catalog)
    }

    /// 有指定檔案就讀檔，否則使用內建預設
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::ConfigParseError {
            field: "toml_serialize".to_string(),
            message: e.to_string(),
        })
    }
}

impl PresetSource for PresetCatalog {
    fn rice_varieties(&self) -> &[RicePreset] {
        &self.rice
    }

    fn starter_feedings(&self) -> &[StarterPreset] {
        &self.starter
    }

    fn bread_formulas(&self) -> &[BreadPreset] {
        &self.bread
    }
}

impl Validate for PresetCatalog {
    fn validate(&self) -> Result<()> {
        validation::validate_unique_ids("rice", self.rice.iter().map(|p| p.id.as_str()))?;
        validation::validate_unique_ids("starter", self.starter.iter().map(|p| p.id.as_str()))?;
        validation::validate_unique_ids("bread", self.bread.iter().map(|p| p.id.as_str()))?;

        for preset in &self.rice {
            validation::validate_non_empty_string("rice.id", &preset.id)?;
            preset.ratio_spec()?;
        }
        for preset in &self.starter {
            validation::validate_non_empty_string("starter.id", &preset.id)?;
            preset.ratio_spec()?;
        }
        for preset in &self.bread {
            validation::validate_non_empty_string("bread.id", &preset.id)?;
            preset.ratio_spec()?;
        }

        tracing::debug!(
            "Preset catalog validated: {} rice, {} starter, {} bread",
            self.rice.len(),
            self.starter.len(),
            self.bread.len()
        );
        Ok(())
    }
}
