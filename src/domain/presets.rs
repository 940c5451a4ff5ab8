use crate::domain::model::RatioSpec;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const RICE: &str = "rice";
pub const WATER: &str = "water";
pub const FLOUR: &str = "flour";
pub const SALT: &str = "salt";
pub const STARTER: &str = "starter";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RicePreset {
    pub id: String,
    pub label: String,
    /// 水米比（水 / 干米）
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarterPreset {
    pub id: String,
    pub label: String,
    /// starter : water : flour
    pub parts: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadPreset {
    pub id: String,
    pub label: String,
    pub hydration: f64,
    pub salt: f64,
    pub starter: f64,
}

pub fn builtin_rice() -> Vec<RicePreset> {
    vec![
        RicePreset {
            id: "japonica".to_string(),
            label: "东北米/珍珠米".to_string(),
            ratio: 1.3,
        },
        RicePreset {
            id: "jasmine".to_string(),
            label: "丝苗米/泰国米".to_string(),
            ratio: 1.5,
        },
        RicePreset {
            id: "brown".to_string(),
            label: "糙米/五谷米".to_string(),
            ratio: 2.0,
        },
    ]
}

pub fn builtin_starter() -> Vec<StarterPreset> {
    [
        ("equal", [1.0, 1.0, 1.0]),
        ("two-fold", [1.0, 2.0, 2.0]),
        ("five-fold", [1.0, 5.0, 5.0]),
    ]
    .into_iter()
    .map(|(id, parts)| StarterPreset {
        id: id.to_string(),
        label: format!("{}:{}:{}", parts[0], parts[1], parts[2]),
        parts,
    })
    .collect()
}

pub fn builtin_bread() -> Vec<BreadPreset> {
    vec![
        BreadPreset {
            id: "country".to_string(),
            label: "Country sourdough".to_string(),
            hydration: 75.0,
            salt: 2.0,
            starter: 20.0,
        },
        BreadPreset {
            id: "sandwich".to_string(),
            label: "Sandwich loaf".to_string(),
            hydration: 65.0,
            salt: 1.8,
            starter: 15.0,
        },
        BreadPreset {
            id: "ciabatta".to_string(),
            label: "Ciabatta".to_string(),
            hydration: 80.0,
            salt: 2.2,
            starter: 25.0,
        },
    ]
}

/// 干米为基准：rice 1 : water ratio
pub fn rice_spec(ratio: f64) -> Result<RatioSpec> {
    RatioSpec::builder("rice")
        .baseline(RICE, 1.0)
        .component(WATER, ratio)
        .build()
}

/// 酵种为基准：starter : water : flour
pub fn starter_spec(parts: [f64; 3]) -> Result<RatioSpec> {
    RatioSpec::builder("starter")
        .baseline(STARTER, parts[0])
        .component(WATER, parts[1])
        .component(FLOUR, parts[2])
        .build()
}

/// 面粉为基准（100%），其余皆为烘焙百分比
pub fn bread_spec(hydration: f64, salt: f64, starter: f64) -> Result<RatioSpec> {
    RatioSpec::builder("bread")
        .baseline(FLOUR, 100.0)
        .component(WATER, hydration)
        .component(SALT, salt)
        .component(STARTER, starter)
        .build()
}

impl RicePreset {
    pub fn ratio_spec(&self) -> Result<RatioSpec> {
        rice_spec(self.ratio)
    }
}

impl StarterPreset {
    pub fn ratio_spec(&self) -> Result<RatioSpec> {
        starter_spec(self.parts)
    }
}

impl BreadPreset {
    pub fn ratio_spec(&self) -> Result<RatioSpec> {
        bread_spec(self.hydration, self.salt, self.starter)
    }
}
