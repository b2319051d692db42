use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::fit::{FitOptions, SizeBudget};

#[derive(Parser)]
#[command(author, version, about = "WAV → C header converter for embedded playback")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// WAV ファイルを個別に変換
    Convert {
        /// 入力 WAV ファイル
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        fit: FitArgs,

        /// ヘッダ出力先ディレクトリ
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// ディレクトリ直下の全 WAV を変換
    Batch {
        /// 入力ディレクトリ
        dir: PathBuf,

        #[command(flatten)]
        fit: FitArgs,

        /// ヘッダ出力先ディレクトリ
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// zip バンドルから WAV を取り出して一括変換
    Extract {
        /// zip ファイルが置かれたディレクトリ
        zip_dir: PathBuf,

        /// 取り出した WAV の置き場所
        #[arg(long, default_value = "soundeffects_wavs")]
        wav_dir: PathBuf,

        /// ヘッダ出力先
        #[arg(long, default_value = "soundeffects_headers")]
        header_dir: PathBuf,

        /// 1 ファイルあたりの出力上限 (KB)
        #[arg(long, default_value_t = 236)]
        max_size_kb: usize,

        /// 目標サンプリングレート (Hz)
        #[arg(long, default_value_t = 22050)]
        target_rate: u32,

        /// ステレオを保持する（既定はモノラル化）
        #[arg(long, default_value_t = false)]
        keep_stereo: bool,

        /// 最大再生時間（秒）
        #[arg(long, default_value_t = 4.0)]
        max_duration: f64,

        /// レート削減の下限 (Hz)
        #[arg(long, default_value_t = 8000)]
        min_rate: u32,
    },
}

/// `convert` / `batch` 共通のフィット設定
#[derive(Args)]
pub struct FitArgs {
    /// 出力上限 (KB)
    #[arg(long, default_value_t = 2048)]
    pub max_size_kb: usize,

    /// 目標サンプリングレート (Hz)
    #[arg(long, default_value_t = 22050)]
    pub target_rate: u32,

    /// ステレオを無条件でモノラル化する
    #[arg(long, default_value_t = false)]
    pub force_mono: bool,

    /// 最大再生時間（秒）。省略時は切り詰めない
    #[arg(long)]
    pub max_duration: Option<f64>,

    /// レート削減の下限 (Hz)
    #[arg(long, default_value_t = 8000)]
    pub min_rate: u32,
}

impl FitArgs {
    pub fn to_options(&self) -> FitOptions {
        FitOptions {
            budget: SizeBudget {
                max_bytes: self.max_size_kb * 1024,
                min_sample_rate: self.min_rate,
            },
            target_rate: self.target_rate,
            force_mono: self.force_mono,
            max_duration_secs: self.max_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["wav2header", "convert", "tone.wav"]).unwrap();
        match cli.cmd {
            Cmd::Convert { files, fit, .. } => {
                assert_eq!(files.len(), 1);
                let opts = fit.to_options();
                assert_eq!(opts.budget.max_bytes, 2048 * 1024);
                assert_eq!(opts.budget.min_sample_rate, 8000);
                assert_eq!(opts.target_rate, 22050);
                assert!(!opts.force_mono);
                assert!(opts.max_duration_secs.is_none());
            }
            _ => panic!("expected convert subcommand"),
        }
    }

    #[test]
    fn test_convert_requires_input() {
        assert!(Cli::try_parse_from(["wav2header", "convert"]).is_err());
    }

    #[test]
    fn test_extract_defaults_follow_soundeffects_preset() {
        let cli = Cli::try_parse_from(["wav2header", "extract", "soundeffects"]).unwrap();
        match cli.cmd {
            Cmd::Extract {
                max_size_kb,
                target_rate,
                keep_stereo,
                max_duration,
                ..
            } => {
                assert_eq!(max_size_kb, 236);
                assert_eq!(target_rate, 22050);
                assert!(!keep_stereo);
                assert_eq!(max_duration, 4.0);
            }
            _ => panic!("expected extract subcommand"),
        }
    }

    #[test]
    fn test_batch_overrides() {
        let cli = Cli::try_parse_from([
            "wav2header",
            "batch",
            "sounds",
            "--max-size-kb",
            "64",
            "--force-mono",
            "--max-duration",
            "2.5",
        ])
        .unwrap();
        match cli.cmd {
            Cmd::Batch { fit, .. } => {
                let opts = fit.to_options();
                assert_eq!(opts.budget.max_bytes, 64 * 1024);
                assert!(opts.force_mono);
                assert_eq!(opts.max_duration_secs, Some(2.5));
            }
            _ => panic!("expected batch subcommand"),
        }
    }
}
