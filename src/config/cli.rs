use crate::app::calculators::starter::parse_feeding_ratio;
use crate::app::render::OutputFormat;
use crate::app::session::{FormSession, Selection};
use crate::domain::model::OverPourPolicy;
use crate::domain::ports::PresetSource;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "kitchen-ratio")]
#[command(about = "Rice water, starter feeding and bread dough calculators")]
pub struct CliConfig {
    /// Preset file (TOML); built-in presets are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// What to show when a live reading is already past the target
    #[arg(long, value_enum, default_value_t = OverPourPolicy::Clamp, global = true)]
    pub over_pour: OverPourPolicy,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_non_empty_string("config", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 洗米后还要加多少水
    Rice(RiceArgs),
    /// Starter feeding amounts
    Starter(StarterArgs),
    /// Bread dough from baker's percentages
    Bread(BreadArgs),
    /// List the available presets
    Presets {
        /// Print the catalog as TOML, usable as a --config file
        #[arg(long)]
        export: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RiceArgs {
    /// 空锅/内胆重量 (g)
    #[arg(long, default_value = "300")]
    pub pot: f64,

    /// 干米重量 (g)
    #[arg(long, default_value = "200")]
    pub rice: f64,

    /// Rice variety preset id
    #[arg(long, default_value = "japonica")]
    pub variety: String,

    /// Custom water:rice ratio (1.0-3.0), overrides --variety
    #[arg(long)]
    pub ratio: Option<f64>,

    /// 洗完米后的当前称重 (内胆+湿米) (g)
    #[arg(long, default_value = "520")]
    pub current: f64,
}

impl RiceArgs {
    pub fn apply<P: PresetSource>(&self, session: &mut FormSession, presets: &P) -> Result<()> {
        match self.ratio {
            Some(ratio) => {
                session.select_rice(presets, Selection::Custom)?;
                session.set_rice_custom_ratio(ratio);
            }
            None => {
                session.select_rice(presets, Selection::Preset(self.variety.clone()))?;
            }
        }
        session.rice.pot_weight = self.pot;
        session.rice.rice_weight = self.rice;
        session.rice.current_weight = Some(self.current);
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct StarterArgs {
    /// Starter weight to feed (g)
    #[arg(long, default_value = "50")]
    pub starter: f64,

    /// Feeding preset id
    #[arg(long, default_value = "two-fold")]
    pub preset: String,

    /// Custom starter:water:flour ratio such as 1:2:2, overrides --preset
    #[arg(long)]
    pub ratio: Option<String>,

    /// Empty jar weight (g)
    #[arg(long, default_value = "0")]
    pub jar: f64,

    /// Current scale reading, jar included (g)
    #[arg(long)]
    pub current: Option<f64>,
}

impl StarterArgs {
    pub fn apply<P: PresetSource>(&self, session: &mut FormSession, presets: &P) -> Result<()> {
        match &self.ratio {
            Some(ratio) => session.set_starter_parts(parse_feeding_ratio(ratio)?),
            None => {
                session.select_starter(presets, Selection::Preset(self.preset.clone()))?;
            }
        }
        session.starter.starter_weight = self.starter;
        session.starter.jar_weight = self.jar;
        session.starter.current_weight = self.current;
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct BreadArgs {
    /// Flour weight (g)
    #[arg(long, default_value = "500")]
    pub flour: f64,

    /// Formula preset id
    #[arg(long, default_value = "country")]
    pub preset: String,

    /// Hydration (% of flour), overrides the preset
    #[arg(long)]
    pub hydration: Option<f64>,

    /// Salt (% of flour), overrides the preset
    #[arg(long)]
    pub salt: Option<f64>,

    /// Starter (% of flour), overrides the preset
    #[arg(long)]
    pub starter: Option<f64>,

    /// Hydration of the starter itself (%)
    #[arg(long, default_value = "100")]
    pub starter_hydration: f64,
}

impl BreadArgs {
    pub fn apply<P: PresetSource>(&self, session: &mut FormSession, presets: &P) -> Result<()> {
        session.select_bread(presets, Selection::Preset(self.preset.clone()))?;
        if let Some(hydration) = self.hydration {
            session.bread.hydration = hydration;
        }
        if let Some(salt) = self.salt {
            session.bread.salt = salt;
        }
        if let Some(starter) = self.starter {
            session.bread.starter = starter;
        }
        session.bread.flour_weight = self.flour;
        session.bread.starter_hydration = self.starter_hydration;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::PresetCatalog;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let config = CliConfig::try_parse_from([
            "kitchen-ratio",
            "bread",
            "--flour",
            "750",
            "--format",
            "json",
            "--over-pour",
            "pass-through",
        ])
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.over_pour, OverPourPolicy::PassThrough);
        match config.command {
            Command::Bread(args) => {
                assert_eq!(args.flour, 750.0);
                assert_eq!(args.preset, "country");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rice_defaults() {
        let config = CliConfig::try_parse_from(["kitchen-ratio", "rice"]).unwrap();
        match config.command {
            Command::Rice(args) => {
                assert_eq!(args.pot, 300.0);
                assert_eq!(args.rice, 200.0);
                assert_eq!(args.variety, "japonica");
                assert!(args.ratio.is_none());
                assert_eq!(args.current, 520.0);

                let catalog = PresetCatalog::default();
                let mut session = FormSession::new();
                args.apply(&mut session, &catalog).unwrap();
                assert_eq!(session.rice.current_weight, Some(520.0));

                let report = crate::CalcEngine::new(crate::RiceCalculator::default())
                    .run(&session.rice)
                    .unwrap();
                assert_eq!(report.metric_value("还需要倒入"), Some("240 g 水"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rice_custom_ratio_overrides_variety() {
        let args = RiceArgs {
            pot: 300.0,
            rice: 200.0,
            variety: "jasmine".to_string(),
            ratio: Some(1.8),
            current: 520.0,
        };
        let mut session = FormSession::new();
        args.apply(&mut session, &PresetCatalog::default()).unwrap();
        assert_eq!(session.rice.ratio, 1.8);
        assert!(session.rice.custom);
    }

    #[test]
    fn test_bread_overrides_on_top_of_preset() {
        let args = BreadArgs {
            flour: 1000.0,
            preset: "sandwich".to_string(),
            hydration: Some(70.0),
            salt: None,
            starter: None,
            starter_hydration: 100.0,
        };
        let mut session = FormSession::new();
        args.apply(&mut session, &PresetCatalog::default()).unwrap();
        assert_eq!(session.bread.flour_weight, 1000.0);
        assert_eq!(session.bread.hydration, 70.0);
        assert_eq!(session.bread.salt, 1.8);
    }

    #[test]
    fn test_starter_bad_ratio_string() {
        let args = StarterArgs {
            starter: 50.0,
            preset: "two-fold".to_string(),
            ratio: Some("1-2-2".to_string()),
            jar: 0.0,
            current: None,
        };
        let mut session = FormSession::new();
        assert!(args.apply(&mut session, &PresetCatalog::default()).is_err());
    }
}
