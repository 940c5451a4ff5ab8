use crate::core::resolver::RatioResolver;
use crate::domain::model::{IngredientRow, Report};
use crate::domain::ports::Calculator;
use crate::domain::presets::{bread_spec, SALT, STARTER, WATER};
use crate::utils::error::Result;
use crate::utils::format::{format_grams, format_percent, truncate_grams};
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, PartialEq)]
pub struct BreadInput {
    pub flour_weight: f64,
    pub hydration: f64,
    pub salt: f64,
    pub starter: f64,
    /// 酵種本身的含水率，預設 100%（水粉各半）
    pub starter_hydration: f64,
    pub label: String,
}

impl Default for BreadInput {
    fn default() -> Self {
        Self {
            flour_weight: 500.0,
            hydration: 75.0,
            salt: 2.0,
            starter: 20.0,
            starter_hydration: 100.0,
            label: "Country sourdough".to_string(),
        }
    }
}

impl Validate for BreadInput {
    fn validate(&self) -> Result<()> {
        validation::validate_grams("bread.flour_weight", self.flour_weight)?;
        validation::validate_range("bread.hydration", self.hydration, 0.0, 200.0)?;
        validation::validate_range("bread.salt", self.salt, 0.0, 10.0)?;
        validation::validate_range("bread.starter", self.starter, 0.0, 100.0)?;
        validation::validate_range(
            "bread.starter_hydration",
            self.starter_hydration,
            0.0,
            500.0,
        )?;
        Ok(())
    }
}

/// 把酵種裡的水和粉也算進去的實際含水率
pub fn true_hydration(flour: f64, water: f64, starter: f64, starter_hydration: f64) -> f64 {
    let starter_flour = starter / (1.0 + starter_hydration / 100.0);
    let starter_water = starter - starter_flour;
    let total_flour = flour + starter_flour;
    if total_flour <= 0.0 {
        return 0.0;
    }
    (water + starter_water) / total_flour * 100.0
}

#[derive(Debug, Clone, Default)]
pub struct BreadCalculator {
    resolver: RatioResolver,
}

impl BreadCalculator {
    pub fn new(resolver: RatioResolver) -> Self {
        Self { resolver }
    }
}

impl Calculator for BreadCalculator {
    type Input = BreadInput;

    fn name(&self) -> &str {
        "bread"
    }

    fn compute(&self, input: &BreadInput) -> Result<Report> {
        let spec = bread_spec(input.hydration, input.salt, input.starter)?;
        let result = self.resolver.resolve(input.flour_weight, &spec);

        let water = result.grams(WATER).unwrap_or(0.0);
        let salt = result.grams(SALT).unwrap_or(0.0);
        let starter = result.grams(STARTER).unwrap_or(0.0);

        let mut report = Report::new(
            format!("🍞 {}", input.label),
            format!("Total dough weight: {}", format_grams(result.total)),
        )
        .metric("Water", format_grams(water))
        .metric("Salt", format_grams(salt))
        .metric("Starter", format_grams(starter))
        .metric("Total dough", format_grams(result.total))
        .metric(
            "True hydration",
            format_percent(true_hydration(
                input.flour_weight.max(0.0),
                water,
                starter,
                input.starter_hydration,
            )),
        );

        if result.is_empty() {
            report
                .warnings
                .push("Flour weight is 0, nothing to compute".to_string());
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
            "Baker's percentages relative to {} flour",
            format_grams(input.flour_weight)
        ));
        report.resolution = Some(result);

        Ok(report)
    }
}
