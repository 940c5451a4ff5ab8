use crate::core::resolver::RatioResolver;
use crate::domain::model::{IngredientRow, Report, ResolutionResult};
use crate::domain::ports::Calculator;
use crate::domain::presets::{starter_spec, FLOUR, STARTER, WATER};
use crate::utils::error::{CalcError, Result};
use crate::utils::format::{format_grams, format_percent, truncate_grams};
use crate::utils::validation::{self, Validate};
use std::collections::HashMap;

/// 解析 `starter:water:flour`，例如 `1:2:2`
pub fn parse_feeding_ratio(value: &str) -> Result<[f64; 3]> {
    let parts: Vec<&str> = value.split(':').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CalcError::invalid_value(
            "starter.ratio",
            value,
            "Expected three parts as starter:water:flour",
        ));
    }

    let mut parsed = [0.0; 3];
    for (slot, part) in parsed.iter_mut().zip(&parts) {
        *slot = part.parse::<f64>().map_err(|_| {
            CalcError::invalid_value("starter.ratio", value, format!("'{}' is not a number", part))
        })?;
    }
    Ok(parsed)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarterInput {
    pub starter_weight: f64,
    pub parts: [f64; 3],
    pub label: String,
    /// 空瓶重量
    pub jar_weight: f64,
    /// 目前秤上讀數（瓶 + 內容物）
    pub current_weight: Option<f64>,
}

impl Default for StarterInput {
    fn default() -> Self {
        Self {
            starter_weight: 50.0,
            parts: [1.0, 2.0, 2.0],
            label: "1:2:2".to_string(),
            jar_weight: 0.0,
            current_weight: None,
        }
    }
}

impl Validate for StarterInput {
    fn validate(&self) -> Result<()> {
        validation::validate_grams("starter.starter_weight", self.starter_weight)?;
        validation::validate_grams("starter.jar_weight", self.jar_weight)?;
        for part in self.parts {
            validation::validate_ratio("starter.ratio", part)?;
        }
        if let Some(current) = self.current_weight {
            validation::validate_grams("starter.current_weight", current)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StarterCalculator {
    resolver: RatioResolver,
}

impl StarterCalculator {
    pub fn new(resolver: RatioResolver) -> Self {
        Self { resolver }
    }

    /// 依「酵種 → 水 → 麵粉」的加入順序，把瓶中現有重量分配給各成分
    fn allocate_present(result: &ResolutionResult, contents: f64) -> HashMap<String, f64> {
        let mut remaining = contents.max(0.0);
        let mut present = HashMap::new();
        let count = result.components.len();
        for (i, c) in result.components.iter().enumerate() {
            // 最後一項吃掉所有剩餘重量，倒過頭才看得出來
            let share = if i + 1 == count {
                remaining
            } else {
                remaining.min(c.grams)
            };
            present.insert(c.name.clone(), share);
            remaining -= share;
        }
        present
    }
}

impl Calculator for StarterCalculator {
    type Input = StarterInput;

    fn name(&self) -> &str {
        "starter"
    }

    fn compute(&self, input: &StarterInput) -> Result<Report> {
        let spec = starter_spec(input.parts)?;
        let result = self.resolver.resolve(input.starter_weight, &spec);
        let plan = self.resolver.scale_plan(&result, input.jar_weight);

        let mut report = Report::new(
            "🫙 Starter feeding",
            format!(
                "Feed to a scale reading of {}",
                format_grams(plan.final_target)
            ),
        )
        .metric("Ratio", input.label.clone())
        .metric("Water", format_grams(result.grams(WATER).unwrap_or(0.0)))
        .metric("Flour", format_grams(result.grams(FLOUR).unwrap_or(0.0)))
        .metric("Total", format_grams(result.total));

        if result.is_empty() {
            report
                .warnings
                .push("Starter weight is 0, nothing to feed".to_string());
        }

        for step in &plan.steps {
            if step.component == STARTER && plan.tare == 0.0 {
                continue;
            }
            report = report.metric(
                format!("Scale after {}", step.component),
                format_grams(step.reading),
            );
        }

        if let Some(current) = input.current_weight {
            if current < input.jar_weight {
                report.warnings.push(format!(
                    "Reading {} is below the jar weight {}, treating the jar as empty",
                    format_grams(current),
                    format_grams(input.jar_weight)
                ));
            }
            let present = Self::allocate_present(&result, current - input.jar_weight);
            let top_off = self.resolver.top_off(&result, &present);
            for line in &top_off.lines {
                if line.over_poured {
                    report.warnings.push(format!(
                        "{} is over by {}",
                        line.component,
                        format_grams(-line.delta)
                    ));
                }
                report = report.metric(
                    format!("Still to add: {}", line.component),
                    format_grams(line.to_add),
                );
            }
        }

        report.table = result
            .components
            .iter()
            .map(|c| IngredientRow {
                name: c.name.clone(),
                grams: truncate_grams(c.grams),
                percent: format_percent(c.percent),
            })
            .collect();
        report.resolution = Some(result);

        Ok(report)
    }
}
