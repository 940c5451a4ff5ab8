use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未設定 `RUST_LOG` 時的預設層級
fn fallback_directives(verbose: bool) -> &'static str {
    if verbose {
        "kitchen_ratio=debug,info"
    } else {
        "kitchen_ratio=info"
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_directives(verbose)))
}

/// 日誌一律寫到 stderr，stdout 保留給計算結果
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_directives() {
        assert_eq!(fallback_directives(false), "kitchen_ratio=info");
        assert_eq!(fallback_directives(true), "kitchen_ratio=debug,info");
        // 兩組預設都要能被 EnvFilter 解析
        assert!(EnvFilter::try_new(fallback_directives(false)).is_ok());
        assert!(EnvFilter::try_new(fallback_directives(true)).is_ok());
    }
}
