use anyhow::Context as _;
use clap::Parser;
use dial_zeros::app::driver::run_cli;
use dial_zeros::utils::logger;
use dial_zeros::CliConfig;
use std::io::Write as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run_cli(&cli).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("Writing report to stdout")?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Dial run failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
