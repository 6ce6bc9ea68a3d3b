/**
* filename : main
* author : HAMA
* date: 2025. 5. 8.
* description: 피드 파일 -> VWAP 리포트
**/

use anyhow::Context;

use itch_vwap::config::Config;
use itch_vwap::utils::logging;

fn main() -> Result<(), anyhow::Error> {
    // 설정 로드
    let mut config = Config::load().context("설정 로드 실패")?;

    // 로깅 초기화
    logging::init(&config.logging.level)?;
    log::info!("VWAP 리포트 생성 시작 (v{})", itch_vwap::VERSION);

    // 명령줄 인수: <input> [output]
    let args: Vec<String> = std::env::args().collect();
    if let Some(input) = args.get(1) {
        config.feed.input_path = input.clone();
    }
    if let Some(output) = args.get(2) {
        config.output.path = output.clone();
    }

    match itch_vwap::run(&config) {
        Ok(outcome) => {
            println!("VWAP data saved to {} ({} rows)", config.output.path, outcome.rows.len());
            Ok(())
        }
        Err(e) => {
            logging::log_error("피드 처리", &e);
            Err(e).with_context(|| format!("failed to process {}", config.feed.input_path))
        }
    }
}
