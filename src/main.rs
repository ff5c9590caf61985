use clap::Parser;
use equip_viz_rust::{api, cli, config, error, render};

use cli::{Cli, Commands};
use config::Config;
use equip_viz_common::ChartData;
use error::Result;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Upload { file, output } => {
            println!("📊 equip-viz - CSVアップロード解析\n");

            let backend = config.backend();
            let client = api::build_client(config.timeout_seconds)?;

            if cli.verbose {
                println!("POST {}", backend.upload_url());
            }

            // 1. アップロード
            println!("[1/2] アップロード中: {}", file.display());
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("バックエンドへ送信中...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let result = api::upload_csv(&client, &backend, &file).await;
            spinner.finish_and_clear();
            let result = result?;
            println!("✔ 解析完了\n");

            // 2. 結果表示
            print!("{}", render::summary_block(&result));

            let chart = ChartData::from_distribution(&result.equipment_type_distribution);
            if !chart.is_empty() {
                println!("\nEquipment Type Distribution:");
                print!("{}", render::distribution_block(&chart));
            }

            if !result.table_data.is_empty() {
                println!();
                print!("{}", render::table_block(&result.table_data));
            }

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&output, json)?;
                println!("\n✔ 結果を保存: {}", output.display());
            }

            // 3. 履歴更新
            println!("\n[2/2] 履歴を更新中...");
            match api::fetch_history(&client, &backend).await {
                Ok(history) => {
                    println!("✔ 直近のアップロード:\n");
                    print!("{}", render::history_block(&history, &backend));
                }
                Err(e) => println!("履歴の取得に失敗: {}", e),
            }

            println!("\n✅ 完了");
        }

        Commands::History => {
            println!("📋 equip-viz - アップロード履歴\n");

            let backend = config.backend();
            let client = api::build_client(config.timeout_seconds)?;

            if cli.verbose {
                println!("GET {}", backend.history_url());
            }

            let history = api::fetch_history(&client, &backend).await?;
            print!("{}", render::history_block(&history, &backend));
        }

        Commands::Download { id, output } => {
            println!("📄 equip-viz - PDFダウンロード\n");

            let backend = config.backend();
            let client = api::build_client(config.timeout_seconds)?;

            if cli.verbose {
                println!("GET {}", backend.pdf_url(id));
            }

            let bytes = api::download_pdf(&client, &backend, id).await?;
            let output = output.unwrap_or_else(|| PathBuf::from(format!("report_{id}.pdf")));
            std::fs::write(&output, &bytes)?;
            println!("✔ PDFを保存: {} ({} bytes)", output.display(), bytes.len());
        }

        Commands::Config {
            set_base_url,
            set_username,
            set_password,
            show,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.base_url = url;
                changed = true;
            }
            if let Some(user) = set_username {
                config.username = Some(user);
                changed = true;
            }
            if let Some(pass) = set_password {
                config.password = Some(pass);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!(
                    "  ユーザー名: {}",
                    config.username.as_deref().unwrap_or("未設定")
                );
                println!(
                    "  パスワード: {}",
                    if config.password.is_some() {
                        "設定済み"
                    } else {
                        "未設定"
                    }
                );
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
