//! 表單狀態由宿主明確持有並傳入。
//!
//! 切換預設時才把預設值寫回欄位；重複選同一個預設會保留使用者的修改。
//! 「前一次」與「這一次」的選擇直接比較，不依賴任何隱含的全域狀態。

use crate::app::calculators::bread::BreadInput;
use crate::app::calculators::rice::{RiceInput, CUSTOM_RATIO_DEFAULT};
use crate::app::calculators::starter::StarterInput;
use crate::domain::ports::PresetSource;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Preset(String),
    Custom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    rice_selection: Option<Selection>,
    starter_selection: Option<Selection>,
    bread_selection: Option<Selection>,
    /// 自訂水米比的滑桿值，切回預設再切回自訂時沿用
    rice_custom_ratio: f64,
    pub rice: RiceInput,
    pub starter: StarterInput,
    pub bread: BreadInput,
}

impl Default for FormSession {
    fn default() -> Self {
        Self {
            rice_selection: None,
            starter_selection: None,
            bread_selection: None,
            rice_custom_ratio: CUSTOM_RATIO_DEFAULT,
            rice: RiceInput::default(),
            starter: StarterInput::default(),
            bread: BreadInput::default(),
        }
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rice_selection(&self) -> Option<&Selection> {
        self.rice_selection.as_ref()
    }

    pub fn starter_selection(&self) -> Option<&Selection> {
        self.starter_selection.as_ref()
    }

    pub fn bread_selection(&self) -> Option<&Selection> {
        self.bread_selection.as_ref()
    }

    /// 回傳是否真的切換了米種
    pub fn select_rice<P: PresetSource>(&mut self, presets: &P, selection: Selection) -> Result<bool> {
        if self.rice_selection.as_ref() == Some(&selection) {
            return Ok(false);
        }

        let preset = match &selection {
            Selection::Preset(id) => Some(presets.rice_variety(id)?),
            Selection::Custom => None,
        };

        if self.rice.custom {
            self.rice_custom_ratio = self.rice.ratio;
        }

        match preset {
            Some(preset) => {
                self.rice.ratio = preset.ratio;
                self.rice.variety = preset.label.clone();
                self.rice.custom = false;
            }
            None => {
                self.rice.ratio = self.rice_custom_ratio;
                self.rice.variety = "自定义".to_string();
                self.rice.custom = true;
            }
        }

        tracing::debug!("Rice selection switched to {:?}", selection);
        self.rice_selection = Some(selection);
        Ok(true)
    }

    /// 自訂比例只有在「自定义」模式下才會生效
    pub fn set_rice_custom_ratio(&mut self, ratio: f64) {
        self.rice_custom_ratio = ratio;
        if self.rice.custom {
            self.rice.ratio = ratio;
        }
    }

    pub fn select_starter<P: PresetSource>(
        &mut self,
        presets: &P,
        selection: Selection,
    ) -> Result<bool> {
        if self.starter_selection.as_ref() == Some(&selection) {
            return Ok(false);
        }

        if let Selection::Preset(id) = &selection {
            let preset = presets.starter_feeding(id)?;
            self.starter.parts = preset.parts;
            self.starter.label = preset.label.clone();
        }

        tracing::debug!("Starter selection switched to {:?}", selection);
        self.starter_selection = Some(selection);
        Ok(true)
    }

    pub fn set_starter_parts(&mut self, parts: [f64; 3]) {
        self.starter.parts = parts;
        self.starter.label = format!("{}:{}:{}", parts[0], parts[1], parts[2]);
        self.starter_selection = Some(Selection::Custom);
    }

    /// 換了麵包配方才重設百分比欄位；同一個配方保留使用者的調整
    pub fn select_bread<P: PresetSource>(&mut self, presets: &P, selection: Selection) -> Result<bool> {
        if self.bread_selection.as_ref() == Some(&selection) {
            return Ok(false);
        }

        match &selection {
            Selection::Preset(id) => {
                let preset = presets.bread_formula(id)?;
                self.bread.hydration = preset.hydration;
                self.bread.salt = preset.salt;
                self.bread.starter = preset.starter;
                self.bread.label = preset.label.clone();
            }
            Selection::Custom => {
                self.bread.label = "Custom formula".to_string();
            }
        }

        tracing::debug!("Bread selection switched to {:?}", selection);
        self.bread_selection = Some(selection);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::PresetCatalog;

    #[test]
    fn test_switching_bread_preset_resets_fields() {
        let catalog = PresetCatalog::default();
        let mut session = FormSession::new();

        assert!(session
            .select_bread(&catalog, Selection::Preset("country".to_string()))
            .unwrap());
        session.bread.hydration = 78.0;

        // 同一個配方：保留使用者調整
        assert!(!session
            .select_bread(&catalog, Selection::Preset("country".to_string()))
            .unwrap());
        assert_eq!(session.bread.hydration, 78.0);

        // 換配方：套用新預設
        assert!(session
            .select_bread(&catalog, Selection::Preset("sandwich".to_string()))
            .unwrap());
        assert_eq!(session.bread.hydration, 65.0);
        assert_eq!(session.bread.salt, 1.8);
    }

    #[test]
    fn test_rice_custom_ratio_survives_preset_switch() {
        let catalog = PresetCatalog::default();
        let mut session = FormSession::new();

        session.select_rice(&catalog, Selection::Custom).unwrap();
        session.set_rice_custom_ratio(2.4);
        assert_eq!(session.rice.ratio, 2.4);
        assert!(session.rice.custom);

        session
            .select_rice(&catalog, Selection::Preset("jasmine".to_string()))
            .unwrap();
        assert_eq!(session.rice.ratio, 1.5);
        assert!(!session.rice.custom);

        session.select_rice(&catalog, Selection::Custom).unwrap();
        assert_eq!(session.rice.ratio, 2.4);
    }

    #[test]
    fn test_unknown_preset_leaves_state_untouched() {
        let catalog = PresetCatalog::default();
        let mut session = FormSession::new();
        let before = session.clone();

        assert!(session
            .select_bread(&catalog, Selection::Preset("pizza".to_string()))
            .is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_custom_starter_parts() {
        let mut session = FormSession::new();
        session.set_starter_parts([1.0, 5.0, 5.0]);
        assert_eq!(session.starter.label, "1:5:5");
        assert_eq!(session.starter_selection(), Some(&Selection::Custom));
    }
}
