use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use qr_reader::{actions, cli, config, decoder, error, logging, scanner};
use qr_reader_common::{
    classify, ActionDispatcher, ActionKind, ActionResult, Session, StatusMessage,
};
use actions::{SystemClipboard, SystemNavigator};
use cli::{Cli, Commands};
use config::Config;
use decoder::{apply_outcomes, CommandDecoder};
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { inputs, recursive, output, action, rules } => {
            println!("📷 qr-reader - スキャン\n");

            let images = scanner::collect_images(&inputs, recursive)?;
            if images.is_empty() {
                return Err(error::QrReaderError::NoImagesFound(
                    inputs.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "),
                ));
            }

            let dispatcher = ActionDispatcher::new(config.load_rules(rules.as_deref())?);
            let decoder = CommandDecoder::from_config(&config);
            tracing::debug!(decoder = decoder.command(), images = images.len(), "scan start");

            println!("{}", StatusMessage::Scanning);
            let progress = (images.len() > 1).then(|| new_progress_bar(images.len() as u64));
            let outcomes = decoder.decode_batch(&images, progress.as_ref()).await?;
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }

            for outcome in &outcomes {
                match &outcome.result {
                    Ok(report) => {
                        println!("✔ {}", report.file_name);
                        println!("  {}", report.category.badge());
                        println!("  {}", report.text);
                    }
                    Err(_) => {
                        println!("✘ {}: {}", outcome.image.file_name, StatusMessage::DecodeFailed);
                    }
                }
            }

            // 失敗したデコードはスロットを空にする
            let (session, reports) = apply_outcomes(&outcomes);
            println!("\n✔ {}/{}枚をデコード", reports.len(), images.len());

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&reports)?;
                std::fs::write(&output, json)?;
                println!("✔ 結果を保存: {}", output.display());
            }

            if let Some(kind) = action {
                run_action(&dispatcher, &session, kind).await;
            }
        }

        Commands::Classify { text, json } => {
            let text = cli::text_or_stdin(text)?;
            let category = classify(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&category)?);
            } else {
                println!("{}", category.badge());
            }
        }

        Commands::Action { action, text, rules } => {
            let dispatcher = ActionDispatcher::new(config.load_rules(rules.as_deref())?);
            let mut session = Session::new();
            session.set_decoded(cli::text_or_stdin(text)?);

            run_action(&dispatcher, &session, action).await;
        }

        Commands::Config { set_decoder, set_rules, show } => {
            let mut config = config;

            if let Some(command) = set_decoder {
                config.set_decoder(command)?;
                println!("✔ デコーダを設定しました");
            }

            if let Some(path) = set_rules {
                config.set_rules_file(path)?;
                println!("✔ カスタムルールを設定しました");
            }

            if show {
                let rules = config.load_rules(None)?;
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  デコーダ: {} {}", config.decoder_command(), config.decoder_args.join(" "));
                println!("  ルールプリセット: {}", config.rules_preset);
                println!(
                    "  ルールファイル: {}",
                    config
                        .rules_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  カスタムルール: {}", rules.names().join(", "));
            }
        }
    }

    Ok(())
}

async fn run_action(dispatcher: &ActionDispatcher, session: &Session, kind: ActionKind) {
    let result = match kind {
        ActionKind::Open => dispatcher.open(session, &SystemNavigator),
        ActionKind::Copy => dispatcher.copy(session, &SystemClipboard::new()).await,
        ActionKind::Custom => dispatcher.custom(session),
    };

    let Some(result) = result else {
        tracing::info!(action = %kind, "nothing to act on");
        return;
    };

    match &result {
        ActionResult::CopyFailed { reason } | ActionResult::NavigationFailed { reason, .. } => {
            tracing::warn!(action = %kind, %reason, "action failed");
        }
        _ => {}
    }
    println!("{}", result.message());
}

fn new_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}
