use crate::domain::model::{
    OverPourPolicy, RatioSpec, ResolutionResult, ResolvedComponent, ScalePlan, ScaleStep, TopOff,
    TopOffLine,
};
use std::collections::HashMap;

/// 以基準量換算一組比例成分的目標重量。純函數，不做 I/O。
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioResolver {
    policy: OverPourPolicy,
}

impl RatioResolver {
    pub fn new(policy: OverPourPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverPourPolicy {
        self.policy
    }

    /// `target[c] = baseline_quantity * ratio[c] / ratio[baseline]`
    ///
    /// 基準量不大於 0（或不是有限數）時視為「沒有東西要算」，全部回傳 0。
    pub fn resolve(&self, baseline_quantity: f64, spec: &RatioSpec) -> ResolutionResult {
        let quantity = if baseline_quantity.is_finite() && baseline_quantity > 0.0 {
            baseline_quantity
        } else {
            tracing::debug!(
                "Baseline quantity {} for '{}' is not positive, resolving to zero",
                baseline_quantity,
                spec.name()
            );
            0.0
        };

        let base_ratio = spec.baseline().ratio;
        let components: Vec<ResolvedComponent> = spec
            .components()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let grams = if i == spec.baseline_index() {
                    quantity
                } else {
                    quantity * c.ratio / base_ratio
                };
                ResolvedComponent {
                    name: c.name.clone(),
                    grams,
                    percent: spec.percent_of(c),
                }
            })
            .collect();

        let total = components.iter().map(|c| c.grams).sum();

        ResolutionResult {
            spec: spec.name().to_string(),
            baseline: spec.baseline().name.clone(),
            components,
            total,
        }
    }

    /// 依序加入各成分時，秤上每一步應該出現的累計讀數
    pub fn scale_plan(&self, result: &ResolutionResult, tare: f64) -> ScalePlan {
        let tare = if tare.is_finite() { tare.max(0.0) } else { 0.0 };
        let mut reading = tare;
        let steps = result
            .components
            .iter()
            .map(|c| {
                reading += c.grams;
                ScaleStep {
                    component: c.name.clone(),
                    add: c.grams,
                    reading,
                }
            })
            .collect();

        ScalePlan {
            tare,
            steps,
            final_target: tare + result.total,
        }
    }

    /// 還需要加多少：`to_add[c] = target[c] - already_present[c]`
    ///
    /// 沒有出現在 `already_present` 的成分視為 0。倒過頭（delta < 0）一律標記，
    /// 是否截到 0 由 `OverPourPolicy` 決定。
    pub fn top_off(
        &self,
        result: &ResolutionResult,
        already_present: &HashMap<String, f64>,
    ) -> TopOff {
        let lines = result
            .components
            .iter()
            .map(|c| {
                let present = already_present.get(&c.name).copied().unwrap_or(0.0);
                let delta = c.grams - present;
                let over_poured = delta < 0.0;
                if over_poured {
                    tracing::warn!(
                        "⚠️ {} already exceeds its target by {:.1} g",
                        c.name,
                        -delta
                    );
                }
                let to_add = match self.policy {
                    OverPourPolicy::Clamp => delta.max(0.0),
                    OverPourPolicy::PassThrough => delta,
                };
                TopOffLine {
                    component: c.name.clone(),
                    target: c.grams,
                    present,
                    delta,
                    to_add,
                    over_poured,
                }
            })
            .collect();

        TopOff {
            policy: self.policy,
            lines,
        }
    }
}
