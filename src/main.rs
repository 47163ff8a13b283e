use even_odd_demo::utils::logger;
use even_odd_demo::{CliConfig, Program};

fn main() {
    let config = CliConfig::parse_lenient(std::env::args_os());

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = Program::new().run(&mut out) {
        tracing::error!("❌ Program failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
