use crate::error::Result;
use clap::{Parser, Subcommand};
use qr_reader_common::ActionKind;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qr-reader")]
#[command(about = "QRコード画像のデコード・分類・アクション実行ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をデコードして分類
    Scan {
        /// 画像ファイルまたはフォルダ
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 最後にデコードできた結果へ実行するアクション (open/copy/custom)
        #[arg(short, long)]
        action: Option<ActionKind>,

        /// 追加カスタムルールのJSONファイル
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// テキストを分類（省略時は標準入力）
    Classify {
        text: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// テキストにアクションを実行（省略時は標準入力）
    Action {
        /// open/copy/custom
        action: ActionKind,

        text: Option<String>,

        /// 追加カスタムルールのJSONファイル
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// デコーダコマンドを設定
        #[arg(long)]
        set_decoder: Option<String>,

        /// カスタムルールファイルを設定
        #[arg(long)]
        set_rules: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 引数のテキスト、なければ標準入力を読む
pub fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(strip_trailing_newline(buffer))
        }
    }
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
