//! wav2header CLI: WAV 録音素材を組込み再生用の C ヘッダ配列へ変換する。
//! `convert` / `batch` / `extract` の各サブコマンドを提供します。

use clap::Parser;

use wav2header::application::batch::{self, BatchSummary};
use wav2header::cli::{Cli, Cmd};
use wav2header::domain::fit::{FitOptions, SizeBudget};
use wav2header::infrastructure::archive;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Convert { files, fit, out_dir } => {
            let options = fit.to_options();
            let summary = batch::convert_many(&files, &out_dir, &options)?;
            print_summary(&summary, &options);
        }
        Cmd::Batch { dir, fit, out_dir } => {
            let options = fit.to_options();
            let summary = batch::convert_dir(&dir, &out_dir, &options)?;
            print_summary(&summary, &options);
        }
        Cmd::Extract {
            zip_dir,
            wav_dir,
            header_dir,
            max_size_kb,
            target_rate,
            keep_stereo,
            max_duration,
            min_rate,
        } => {
            let options = FitOptions {
                budget: SizeBudget {
                    max_bytes: max_size_kb * 1024,
                    min_sample_rate: min_rate,
                },
                target_rate,
                force_mono: !keep_stereo,
                max_duration_secs: Some(max_duration),
            };
            let wavs = archive::extract_wavs(&zip_dir, &wav_dir)?;
            println!(
                "Extracted {} WAV files to {}\n",
                wavs.len(),
                wav_dir.display()
            );
            let summary = batch::convert_many(&wavs, &header_dir, &options)?;
            println!("✓ Conversion complete!");
            println!("  Headers saved to: {}", header_dir.display());
            print_summary(&summary, &options);
        }
    }

    Ok(())
}

fn print_summary(summary: &BatchSummary, options: &FitOptions) {
    let total = summary.total_bytes();
    println!(
        "Total size of all headers: {} bytes ({:.2} MB)",
        total,
        total as f64 / 1024.0 / 1024.0
    );
    if summary.failed > 0 {
        println!("⚠ {} input(s) skipped", summary.failed);
    }
    let over = summary.over_budget_count();
    if over > 0 {
        println!(
            "⚠ WARNING: {over} header(s) exceed the {} byte limit!",
            options.budget.max_bytes
        );
        println!("  Consider using --force-mono or a lower --target-rate");
    }
}
