use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "equip-viz")]
#[command(about = "化学機器CSV解析・可視化クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// リクエストURLなどの詳細を出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVをアップロードして解析結果を表示
    Upload {
        /// 機器データCSVファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 解析結果JSONの保存先（省略時は保存しない）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 直近5件のアップロード履歴を表示
    History,

    /// 履歴IDを指定してPDFレポートをダウンロード
    Download {
        /// 履歴エントリのID
        #[arg(required = true)]
        id: i64,

        /// 出力PDFファイル（デフォルト: report_{id}.pdf）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定の表示・変更
    Config {
        /// バックエンドのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// Basic認証ユーザー名を設定
        #[arg(long)]
        set_username: Option<String>,

        /// Basic認証パスワードを設定
        #[arg(long)]
        set_password: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
