//! 1 入力ぶんの変換パイプライン
//!
//! デコード → フィット（見積もり駆動）→ ヘッダ出力 → 実サイズ検証。
//! 見積もりはループ打ち切り判定にのみ使い、予算超過の最終判定は
//! 出力後の実ファイルサイズで行う。

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::fit::{FitOptions, fit};
use crate::error::Result;
use crate::infrastructure::{header, wav};
use crate::utils::symbol::symbol_from_path;

/// 変換 1 件ぶんのレポート
#[derive(Debug)]
pub struct ConversionReport {
    pub header_path: PathBuf,
    pub symbol: String,
    pub sample_count: usize,
    pub channels: u16,
    pub sample_rate: u32,
    /// フィットループ終了時点の見積もり
    pub estimated_bytes: usize,
    /// 出力後に計測した実サイズ。予算判定はこちらが正
    pub actual_bytes: usize,
    pub max_bytes: usize,
}

impl ConversionReport {
    pub fn over_budget(&self) -> bool {
        self.actual_bytes > self.max_bytes
    }

    /// 予算超過ぶんのバイト数（超過していなければ 0）
    pub fn excess_bytes(&self) -> usize {
        self.actual_bytes.saturating_sub(self.max_bytes)
    }
}

/// WAV ファイル 1 件を変換してヘッダを `out_dir` へ書き出す。
///
/// 予算を満たせなくても成果物は必ず書き出し、超過は警告として
/// レポートに載せる。デコード失敗時のみエラーを返す（出力は残らない）。
pub fn convert_file(
    input: &Path,
    out_dir: &Path,
    options: &FitOptions,
) -> Result<ConversionReport> {
    let symbol = symbol_from_path(input);
    let source = wav::decode_wav(input)?;

    println!("Processing: {}", input.display());
    println!(
        "  Original: {} frames, {} ch, {} Hz",
        source.frames(),
        source.channels,
        source.sample_rate
    );

    let outcome = fit(&source, options, &symbol);

    // ヘッダファイル名は入力のベース名そのまま（シンボルは中身だけ）
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| symbol.clone());
    let header_path = out_dir.join(format!("{stem}.h"));

    let artifact = header::emit_header_file(&outcome.buffer, &symbol, &header_path)?;
    let actual_bytes = fs::metadata(&header_path)?.len() as usize;

    let report = ConversionReport {
        header_path,
        symbol,
        sample_count: artifact.buffer.samples.len(),
        channels: artifact.buffer.channels,
        sample_rate: artifact.buffer.sample_rate,
        estimated_bytes: outcome.estimated_bytes,
        actual_bytes,
        max_bytes: options.budget.max_bytes,
    };

    println!(
        "✓ Converted {} -> {}",
        input.display(),
        report.header_path.display()
    );
    println!(
        "  Final: {} samples, {} ch, {} Hz",
        report.sample_count, report.channels, report.sample_rate
    );
    println!("  File size: {} bytes", report.actual_bytes);
    if report.over_budget() {
        log::warn!(
            "{}: output exceeds budget by {} bytes ({} > {})",
            report.symbol,
            report.excess_bytes(),
            report.actual_bytes,
            report.max_bytes
        );
        println!(
            "  ⚠ WARNING: File size exceeds limit ({} > {} bytes)",
            report.actual_bytes, report.max_bytes
        );
    } else {
        println!("  ✓ File size OK (under {} bytes limit)", report.max_bytes);
    }

    Ok(report)
}
