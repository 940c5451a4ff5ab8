use clap::Parser;
use kitchen_ratio::app::render::{self, OutputFormat};
use kitchen_ratio::config::cli::Command;
use kitchen_ratio::domain::ports::PresetSource;
use kitchen_ratio::utils::error::ErrorSeverity;
use kitchen_ratio::utils::{logger, validation::Validate};
use kitchen_ratio::{
    BreadCalculator, CalcEngine, CalcError, CliConfig, FormSession, PresetCatalog, RatioResolver,
    RiceCalculator, StarterCalculator,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting kitchen-ratio CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    if let Err(e) = run(&config) {
        exit_with(&e);
    }

    Ok(())
}

fn run(config: &CliConfig) -> kitchen_ratio::Result<()> {
    let catalog = PresetCatalog::load(config.config.as_deref())?;
    let resolver = RatioResolver::new(config.over_pour);
    let mut session = FormSession::new();
    let mut stdout = std::io::stdout().lock();

    match &config.command {
        Command::Rice(args) => {
            args.apply(&mut session, &catalog)?;
            let report = CalcEngine::new(RiceCalculator::new(resolver)).run(&session.rice)?;
            render::render(&report, config.format, &mut stdout)
        }
        Command::Starter(args) => {
            args.apply(&mut session, &catalog)?;
            let report = CalcEngine::new(StarterCalculator::new(resolver)).run(&session.starter)?;
            render::render(&report, config.format, &mut stdout)
        }
        Command::Bread(args) => {
            args.apply(&mut session, &catalog)?;
            let report = CalcEngine::new(BreadCalculator::new(resolver)).run(&session.bread)?;
            render::render(&report, config.format, &mut stdout)
        }
        Command::Presets { export } => {
            if *export {
                use std::io::Write;
                write!(stdout, "{}", catalog.to_toml_string()?)?;
                return Ok(());
            }
            print_presets(&catalog, config.format, &mut stdout)
        }
    }
}

fn print_presets<W: std::io::Write>(
    catalog: &PresetCatalog,
    format: OutputFormat,
    out: &mut W,
) -> kitchen_ratio::Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, catalog)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "rice")?;
    for p in catalog.rice_varieties() {
        writeln!(out, "  {:<12} {} (1:{})", p.id, p.label, p.ratio)?;
    }
    writeln!(out, "starter")?;
    for p in catalog.starter_feedings() {
        writeln!(out, "  {:<12} {}", p.id, p.label)?;
    }
    writeln!(out, "bread")?;
    for p in catalog.bread_formulas() {
        writeln!(
            out,
            "  {:<12} {} (hydration {}%, salt {}%, starter {}%)",
            p.id, p.label, p.hydration, p.salt, p.starter
        )?;
    }
    Ok(())
}

fn exit_with(e: &CalcError) -> ! {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 輸入錯誤
        ErrorSeverity::High => 1,   // 設定或輸出錯誤
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
