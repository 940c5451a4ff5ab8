use crate::core::resolver::RatioResolver;
use crate::domain::model::{IngredientRow, Report};
use crate::domain::ports::Calculator;
use crate::domain::presets::{rice_spec, RICE, WATER};
use crate::utils::error::Result;
use crate::utils::format::{format_grams, format_percent, truncate_grams};
use crate::utils::validation::{self, Validate};
use std::collections::HashMap;

pub const CUSTOM_RATIO_MIN: f64 = 1.0;
pub const CUSTOM_RATIO_MAX: f64 = 3.0;
pub const CUSTOM_RATIO_DEFAULT: f64 = 1.3;

#[derive(Debug, Clone, PartialEq)]
pub struct RiceInput {
    /// 空锅/内胆重量
    pub pot_weight: f64,
    /// 干米重量
    pub rice_weight: f64,
    pub ratio: f64,
    pub variety: String,
    pub custom: bool,
    /// 洗米沥干后的称重（内胆 + 湿米）
    pub current_weight: Option<f64>,
}

impl Default for RiceInput {
    fn default() -> Self {
        Self {
            pot_weight: 300.0,
            rice_weight: 200.0,
            ratio: CUSTOM_RATIO_DEFAULT,
            variety: "东北米/珍珠米".to_string(),
            custom: false,
            current_weight: Some(520.0),
        }
    }
}

impl Validate for RiceInput {
    fn validate(&self) -> Result<()> {
        validation::validate_grams("rice.pot_weight", self.pot_weight)?;
        validation::validate_grams("rice.rice_weight", self.rice_weight)?;
        if let Some(current) = self.current_weight {
            validation::validate_grams("rice.current_weight", current)?;
        }
        if self.custom {
            validation::validate_range(
                "rice.ratio",
                self.ratio,
                CUSTOM_RATIO_MIN,
                CUSTOM_RATIO_MAX,
            )?;
        } else {
            validation::validate_ratio("rice.ratio", self.ratio)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RiceCalculator {
    resolver: RatioResolver,
}

impl RiceCalculator {
    pub fn new(resolver: RatioResolver) -> Self {
        Self { resolver }
    }
}

impl Calculator for RiceCalculator {
    type Input = RiceInput;

    fn name(&self) -> &str {
        "rice"
    }

    fn compute(&self, input: &RiceInput) -> Result<Report> {
        let spec = rice_spec(input.ratio)?;
        let result = self.resolver.resolve(input.rice_weight, &spec);
        let target_water = result.grams(WATER).unwrap_or(0.0);

        // 目标总重：用户只需要把秤加到这个数
        let plan = self.resolver.scale_plan(&result, input.pot_weight);
        let final_target = plan.final_target;

        let mut report = Report::new(
            "🍚 完美煮饭计算器",
            format!("🚰 请加水，直到电子秤显示：{}", format_grams(final_target)),
        )
        .metric("水米比", format!("1:{} ({})", input.ratio, input.variety))
        .metric("理论需水量", format_grams(target_water))
        .metric("目标总重", format_grams(final_target));

        if result.is_empty() {
            report.warnings.push("干米重量为 0，无需计算".to_string());
        }

        if let Some(current) = input.current_weight {
            // 锅里已有的水 = 当前总重 - 空锅 - 干米
            let mut absorbed = current - input.pot_weight - input.rice_weight;
            if absorbed < 0.0 {
                report.warnings.push(format!(
                    "当前称重 {} 低于空锅加干米 {}，视为未吸水",
                    format_grams(current),
                    format_grams(input.pot_weight + input.rice_weight)
                ));
                absorbed = 0.0;
            }

            let present = HashMap::from([
                (RICE.to_string(), input.rice_weight),
                (WATER.to_string(), absorbed),
            ]);
            let top_off = self.resolver.top_off(&result, &present);
            if let Some(line) = top_off.line(WATER) {
                if line.over_poured {
                    report.warnings.push(format!(
                        "锅里的水已超过目标 {}，请倒掉一些",
                        format_grams(-line.delta)
                    ));
                }
                report = report
                    .metric("米已吸收水分", format_grams(absorbed))
                    .metric("还需要倒入", format!("{} 水", format_grams(line.to_add)));
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

        report.caption = Some(format!(
            "计算逻辑：目标总重 {}g = 锅{} + 米{} + 水{}",
            truncate_grams(final_target),
            truncate_grams(input.pot_weight),
            truncate_grams(input.rice_weight),
            truncate_grams(target_water)
        ));
        report.resolution = Some(result);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OverPourPolicy;

    #[test]
    fn test_default_form_values() {
        let report = RiceCalculator::default()
            .compute(&RiceInput::default())
            .unwrap();

        assert!(report.headline.contains("760 g"));
        assert_eq!(report.metric_value("理论需水量"), Some("260 g"));
        assert_eq!(report.metric_value("米已吸收水分"), Some("20 g"));
        assert_eq!(report.metric_value("还需要倒入"), Some("240 g 水"));
        assert_eq!(
            report.caption.as_deref(),
            Some("计算逻辑：目标总重 760g = 锅300 + 米200 + 水260")
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_without_reading_skips_top_off() {
        let input = RiceInput {
            current_weight: None,
            ..RiceInput::default()
        };
        let report = RiceCalculator::default().compute(&input).unwrap();
        assert!(report.metric_value("还需要倒入").is_none());
        assert_eq!(report.metric_value("目标总重"), Some("760 g"));
    }

    #[test]
    fn test_over_poured_is_flagged_and_clamped() {
        let input = RiceInput {
            current_weight: Some(800.0),
            ..RiceInput::default()
        };
        let report = RiceCalculator::default().compute(&input).unwrap();
        assert_eq!(report.metric_value("还需要倒入"), Some("0 g 水"));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("40 g"));
    }

    #[test]
    fn test_over_poured_passes_through() {
        let input = RiceInput {
            current_weight: Some(800.0),
            ..RiceInput::default()
        };
        let calculator = RiceCalculator::new(RatioResolver::new(OverPourPolicy::PassThrough));
        let report = calculator.compute(&input).unwrap();
        assert_eq!(report.metric_value("还需要倒入"), Some("-40 g 水"));
    }

    #[test]
    fn test_reading_below_pot_and_rice_warns() {
        let input = RiceInput {
            current_weight: Some(450.0),
            ..RiceInput::default()
        };
        let report = RiceCalculator::default().compute(&input).unwrap();
        assert_eq!(report.metric_value("米已吸收水分"), Some("0 g"));
        assert_eq!(report.metric_value("还需要倒入"), Some("260 g 水"));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_zero_rice_warns() {
        let input = RiceInput {
            rice_weight: 0.0,
            current_weight: None,
            ..RiceInput::default()
        };
        let report = RiceCalculator::default().compute(&input).unwrap();
        assert_eq!(report.metric_value("理论需水量"), Some("0 g"));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_custom_ratio_range() {
        let mut input = RiceInput {
            custom: true,
            ratio: 3.5,
            ..RiceInput::default()
        };
        assert!(input.validate().is_err());
        input.ratio = 2.4;
        assert!(input.validate().is_ok());
    }
}
