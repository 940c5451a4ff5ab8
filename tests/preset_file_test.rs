use anyhow::Result;
use kitchen_ratio::app::render::{render, OutputFormat};
use kitchen_ratio::domain::ports::PresetSource;
use kitchen_ratio::{
    BreadCalculator, CalcEngine, CalcError, FormSession, PresetCatalog, Selection,
};
use std::path::Path;
use tempfile::TempDir;

/// 從檔案載入自訂配方，切換配方後計算並輸出 CSV
#[test]
fn test_custom_bread_preset_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("presets.toml");
    std::fs::write(
        &config_path,
        r#"
[[bread]]
id = "bagel"
label = "Bagel"
hydration = 58.0
salt = 2.0
starter = 10.0
"#,
    )?;

    let catalog = PresetCatalog::load(Some(config_path.as_path()))?;
    assert_eq!(catalog.bread_formulas().len(), 1);
    // 沒寫到的區段沿用內建
    assert!(catalog.rice_variety("jasmine").is_ok());

    let mut session = FormSession::new();
    session.select_bread(&catalog, Selection::Preset("bagel".to_string()))?;
    session.bread.flour_weight = 1000.0;

    let report = CalcEngine::new(BreadCalculator::default()).run(&session.bread)?;
    assert_eq!(report.metric_value("Water"), Some("580 g"));
    assert_eq!(report.metric_value("Total dough"), Some("1700 g"));

    let mut out = Vec::new();
    render(&report, OutputFormat::Csv, &mut out)?;
    let csv_text = String::from_utf8(out)?;
    assert!(csv_text.starts_with("name,grams,percent\n"));
    assert!(csv_text.contains("water,580,58.0%"));
    Ok(())
}

#[test]
fn test_preset_file_with_zero_baseline_fails_to_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(
        &config_path,
        r#"
[[starter]]
id = "empty"
label = "0:1:1"
parts = [0, 1, 1]
"#,
    )?;

    let err = PresetCatalog::load(Some(config_path.as_path())).unwrap_err();
    assert!(matches!(err, CalcError::InvalidRatioSpec { .. }));
    Ok(())
}

#[test]
fn test_missing_preset_file_is_io_error() {
    let err = PresetCatalog::load(Some(Path::new("/nonexistent/presets.toml"))).unwrap_err();
    assert!(matches!(err, CalcError::IoError(_)));
}

#[test]
fn test_no_file_means_builtin_presets() -> Result<()> {
    let catalog = PresetCatalog::load(None)?;
    assert_eq!(catalog, PresetCatalog::default());
    assert_eq!(catalog.rice_varieties().len(), 3);
    Ok(())
}
