//! 複数入力のバッチ変換
//!
//! ファイル間に共有状態はなく、1 件の失敗は警告して次へ進む。
//! 合計サイズはレポートから集計し、呼び出し側の予算判定に使う。

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::fit::FitOptions;
use crate::error::Result;

use super::converter::{ConversionReport, convert_file};

/// バッチ実行の集計結果
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<ConversionReport>,
    /// デコード等で読み飛ばした入力数
    pub failed: usize,
}

impl BatchSummary {
    /// 全ヘッダの実サイズ合計
    pub fn total_bytes(&self) -> usize {
        self.reports.iter().map(|r| r.actual_bytes).sum()
    }

    pub fn over_budget_count(&self) -> usize {
        self.reports.iter().filter(|r| r.over_budget()).count()
    }
}

/// 指定されたファイル群を順に変換する。
pub fn convert_many(files: &[PathBuf], out_dir: &Path, options: &FitOptions) -> Result<BatchSummary> {
    fs::create_dir_all(out_dir)?;

    let mut summary = BatchSummary::default();
    for input in files {
        match convert_file(input, out_dir, options) {
            Ok(report) => summary.reports.push(report),
            Err(e) => {
                summary.failed += 1;
                log::warn!("skipping {}: {e}", input.display());
                eprintln!("✗ Skipped {}: {e}", input.display());
            }
        }
        println!();
    }
    Ok(summary)
}

/// `dir` 直下の `*.wav`（大文字小文字問わず）をすべて変換する。
pub fn convert_dir(dir: &Path, out_dir: &Path, options: &FitOptions) -> Result<BatchSummary> {
    let mut wav_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|ext| ext.eq_ignore_ascii_case("wav"))
                    .unwrap_or(false)
        })
        .collect();
    wav_files.sort();

    println!("Processing {} file(s) in {}...\n", wav_files.len(), dir.display());
    convert_many(&wav_files, out_dir, options)
}
