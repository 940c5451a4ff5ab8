use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub ratio: f64,
}

/// 一組以基準成分為參照的比例設定。
///
/// 建立時就檢查：基準比例必須大於 0、所有比例不小於 0、名稱不可重複。
/// 通過檢查的 `RatioSpec` 在計算階段不會再失敗。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioSpec {
    name: String,
    baseline: usize,
    components: Vec<Component>,
}

impl RatioSpec {
    pub fn builder(name: impl Into<String>) -> RatioSpecBuilder {
        RatioSpecBuilder {
            name: name.into(),
            baseline: None,
            components: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn baseline(&self) -> &Component {
        &self.components[self.baseline]
    }

    pub fn baseline_index(&self) -> usize {
        self.baseline
    }

    pub fn ratio_of(&self, name: &str) -> Option<f64> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.ratio)
    }

    /// 相對基準的烘焙百分比：基準本身為 100%
    pub fn percent_of(&self, component: &Component) -> f64 {
        component.ratio * 100.0 / self.baseline().ratio
    }
}

#[derive(Debug, Clone)]
pub struct RatioSpecBuilder {
    name: String,
    baseline: Option<usize>,
    components: Vec<Component>,
}

impl RatioSpecBuilder {
    pub fn baseline(mut self, name: impl Into<String>, ratio: f64) -> Self {
        self.baseline = Some(self.components.len());
        self.components.push(Component {
            name: name.into(),
            ratio,
        });
        self
    }

    pub fn component(mut self, name: impl Into<String>, ratio: f64) -> Self {
        self.components.push(Component {
            name: name.into(),
            ratio,
        });
        self
    }

    pub fn build(self) -> Result<RatioSpec> {
        let invalid = |reason: String| CalcError::InvalidRatioSpec {
            spec: self.name.clone(),
            reason,
        };

        let baseline = self
            .baseline
            .ok_or_else(|| invalid("no baseline component".to_string()))?;

        for (i, component) in self.components.iter().enumerate() {
            if component.name.trim().is_empty() {
                return Err(invalid(format!("component #{} has an empty name", i + 1)));
            }
            if !component.ratio.is_finite() || component.ratio < 0.0 {
                return Err(invalid(format!(
                    "ratio of '{}' must be a finite number not below 0, got {}",
                    component.name, component.ratio
                )));
            }
            if self.components[..i].iter().any(|c| c.name == component.name) {
                return Err(invalid(format!(
                    "component '{}' appears more than once",
                    component.name
                )));
            }
        }

        let base = &self.components[baseline];
        if base.ratio <= 0.0 {
            return Err(invalid(format!(
                "baseline ratio of '{}' must be greater than 0",
                base.name
            )));
        }

        Ok(RatioSpec {
            name: self.name.clone(),
            baseline,
            components: self.components,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedComponent {
    pub name: String,
    pub grams: f64,
    /// 烘焙百分比（相對基準）
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionResult {
    pub spec: String,
    pub baseline: String,
    pub components: Vec<ResolvedComponent>,
    pub total: f64,
}

impl ResolutionResult {
    pub fn grams(&self, name: &str) -> Option<f64> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.grams)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleStep {
    pub component: String,
    pub add: f64,
    /// 加完這一項後秤上應顯示的讀數
    pub reading: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalePlan {
    pub tare: f64,
    pub steps: Vec<ScaleStep>,
    pub final_target: f64,
}

/// 秤上的量已超過目標時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OverPourPolicy {
    /// 截到 0 並標記警告
    #[default]
    Clamp,
    /// 直接顯示負值
    PassThrough,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopOffLine {
    pub component: String,
    pub target: f64,
    pub present: f64,
    pub delta: f64,
    pub to_add: f64,
    pub over_poured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopOff {
    pub policy: OverPourPolicy,
    pub lines: Vec<TopOffLine>,
}

impl TopOff {
    pub fn line(&self, component: &str) -> Option<&TopOffLine> {
        self.lines.iter().find(|l| l.component == component)
    }

    pub fn any_over_poured(&self) -> bool {
        self.lines.iter().any(|l| l.over_poured)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientRow {
    pub name: String,
    pub grams: i64,
    pub percent: String,
}

/// 交給宿主畫面呈現的結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub headline: String,
    pub metrics: Vec<Metric>,
    pub table: Vec<IngredientRow>,
    pub caption: Option<String>,
    pub warnings: Vec<String>,
    #[serde(skip)]
    pub resolution: Option<ResolutionResult>,
}

impl Report {
    pub fn new(title: impl Into<String>, headline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            headline: headline.into(),
            metrics: Vec::new(),
            table: Vec::new(),
            caption: None,
            warnings: Vec::new(),
            resolution: None,
        }
    }

    pub fn metric(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.metrics.push(Metric {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn metric_value(&self, label: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value.as_str())
    }
}
