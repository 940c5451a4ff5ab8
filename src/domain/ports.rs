use crate::domain::model::Report;
use crate::domain::presets::{BreadPreset, RicePreset, StarterPreset};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::Validate;

pub trait PresetSource {
    fn rice_varieties(&self) -> &[RicePreset];
    fn starter_feedings(&self) -> &[StarterPreset];
    fn bread_formulas(&self) -> &[BreadPreset];

    fn rice_variety(&self, id: &str) -> Result<&RicePreset> {
        self.rice_varieties()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| unknown_preset("rice", id))
    }

    fn starter_feeding(&self, id: &str) -> Result<&StarterPreset> {
        self.starter_feedings()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| unknown_preset("starter", id))
    }

    fn bread_formula(&self, id: &str) -> Result<&BreadPreset> {
        self.bread_formulas()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| unknown_preset("bread", id))
    }
}

fn unknown_preset(kind: &str, name: &str) -> CalcError {
    CalcError::UnknownPreset {
        kind: kind.to_string(),
        name: name.to_string(),
    }
}

/// 一張計算表單：接收已驗證的輸入，產生報表
pub trait Calculator {
    type Input: Validate;

    fn name(&self) -> &str;
    fn compute(&self, input: &Self::Input) -> Result<Report>;
}
