//! バイト予算へ収めるフィットコントローラ
//!
//! トランケート → モノラル化 → 目標レートへのリサンプル → 10% ずつの
//! レート削減ループ → 最終手段のモノラルフォールバック、の固定順で
//! 変換を適用し、見積もりが予算内に収まるか方策が尽きるまで反復する。
//! 予算を満たせなくても失敗にはせず、到達できた最良のバッファを返す。

use super::buffer::{AudioBuffer, fold_to_mono, truncate};
use super::estimate::estimate_bytes;
use super::resampler::resample;

/// リサンプルループの既定レート下限 (Hz)
pub const DEFAULT_MIN_SAMPLE_RATE: u32 = 8000;

/// 出力サイズ制約
#[derive(Debug, Clone, Copy)]
pub struct SizeBudget {
    /// 出力ヘッダの上限バイト数
    pub max_bytes: usize,
    /// レート削減ループの下限 (Hz)。これ未満へは下げない
    pub min_sample_rate: u32,
}

impl SizeBudget {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            min_sample_rate: DEFAULT_MIN_SAMPLE_RATE,
        }
    }
}

/// フィット処理の設定
#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    pub budget: SizeBudget,
    /// 削減ループ前に合わせる目標レート (Hz)
    pub target_rate: u32,
    /// ステレオを無条件でモノラル化する
    pub force_mono: bool,
    /// 先頭からの最大再生時間（秒）。None なら切り詰めない
    pub max_duration_secs: Option<f64>,
}

/// 削減ループ中の検討状態。ループ内でのみ生存する
#[derive(Debug, Clone, Copy)]
struct FitPlan {
    rate: u32,
    mono: bool,
}

/// フィット結果。予算超過でも必ず返る
#[derive(Debug)]
pub struct FitOutcome {
    pub buffer: AudioBuffer,
    /// 最終的な見積もりバイト数。確定値は出力後の実サイズで検証すること
    pub estimated_bytes: usize,
}

impl FitOutcome {
    pub fn over_budget(&self, budget: &SizeBudget) -> bool {
        self.estimated_bytes > budget.max_bytes
    }
}

/// `input` に固定順の方策を適用し、見積もりが予算内に収まるバッファを探す。
///
/// 状態遷移: `Initial → Truncated → RateAdjusted* → MonoFallback? → Done`。
/// `RateAdjusted` 以外の遷移は再訪しない。
pub fn fit(input: &AudioBuffer, options: &FitOptions, symbol: &str) -> FitOutcome {
    let budget = &options.budget;

    // 1. 時間切り詰め（最も安価な削減。サイズに関わらず常に適用）
    let mut buffer = match options.max_duration_secs {
        Some(secs) => truncate(input, secs),
        None => input.clone(),
    };

    // 2. 設定によるモノラル化
    if options.force_mono && buffer.is_stereo() {
        buffer = fold_to_mono(&buffer);
        log::debug!("{symbol}: folded to mono ({} samples)", buffer.samples.len());
    }

    // 3. 目標レートへ一度だけ合わせる
    if buffer.sample_rate != options.target_rate {
        buffer = resample(&buffer, options.target_rate);
        log::debug!(
            "{symbol}: resampled to {} Hz ({} samples)",
            buffer.sample_rate,
            buffer.samples.len()
        );
    }

    // 4. 削減ループ: 見積もりが収まるかレート下限に達するまで 10% ずつ下げる
    let mut plan = FitPlan {
        rate: buffer.sample_rate,
        mono: !buffer.is_stereo(),
    };
    let mut estimated = estimate_bytes(buffer.samples.len(), buffer.sample_rate, symbol);
    while estimated > budget.max_bytes && plan.rate > budget.min_sample_rate {
        plan.rate = (((plan.rate as f64) * 0.9) as u32).max(budget.min_sample_rate);
        buffer = resample(&buffer, plan.rate);
        estimated = estimate_bytes(buffer.samples.len(), buffer.sample_rate, symbol);
        log::debug!(
            "{symbol}: estimate {estimated} B over budget, reduced rate to {} Hz",
            plan.rate
        );
    }

    // 5. まだ超過していてステレオなら、最終手段としてモノラル化（一度だけ）
    if estimated > budget.max_bytes && buffer.is_stereo() {
        buffer = fold_to_mono(&buffer);
        plan.mono = true;
        estimated = estimate_bytes(buffer.samples.len(), buffer.sample_rate, symbol);
        log::debug!("{symbol}: mono fallback, estimate now {estimated} B");
    }

    log::debug!("{symbol}: fit done with {plan:?}, estimate {estimated} B");
    FitOutcome {
        buffer,
        estimated_bytes: estimated,
    }
}
