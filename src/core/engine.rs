use crate::domain::model::Report;
use crate::domain::ports::Calculator;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// 使用者按下「計算」時的觸發點：驗證 → 計算 → 回傳報表
pub struct CalcEngine<C: Calculator> {
    calculator: C,
}

impl<C: Calculator> CalcEngine<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    pub fn run(&self, input: &C::Input) -> Result<Report> {
        let name = self.calculator.name();
        tracing::info!("🧮 Running {} calculator", name);

        // 驗證
        if let Err(e) = input.validate() {
            tracing::error!("❌ {} input rejected: {}", name, e);
            return Err(e);
        }
        tracing::debug!("{} input validated", name);

        // 計算
        let report = self.calculator.compute(input)?;
        tracing::debug!("{} headline: {}", name, report.headline);

        for warning in &report.warnings {
            tracing::warn!("⚠️ {}", warning);
        }

        tracing::info!("✅ {} calculation finished", name);
        Ok(report)
    }
}
