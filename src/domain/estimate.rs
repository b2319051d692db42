//! ヘッダ出力サイズの閉形式見積もり
//!
//! 実際にシリアライズせずに出力バイト数を予測する。フィットループは
//! この見積もりだけで反復を打ち切るため、`sample_count` に対して単調
//! 非減少であることが収束の前提になる。見積もりは近似であり、確定値は
//! 必ず出力後の実ファイルサイズで検証する。

/// ガード・コメント・配列宣言などの固定テキストぶんのオーバーヘッド
const FIXED_OVERHEAD: usize = 500;

/// 1 サンプルあたりの平均印字幅の近似値。
/// `{:6}` 右詰め + カンマ + 区切り（スペースまたは改行）で約 7 バイト。
/// 実際の幅は値の桁数と符号で変動するため、あくまで近似。
const BYTES_PER_SAMPLE: usize = 7;

/// `sample_count` サンプルをシンボル名 `symbol` で出力した場合の
/// ヘッダファイルサイズを予測する。
pub fn estimate_bytes(sample_count: usize, sample_rate: u32, symbol: &str) -> usize {
    let prefix = symbol.to_uppercase();
    // チャンネル数は 1 か 2 でどちらも 1 桁
    let defines = format!("#define {prefix}_LENGTH {sample_count}\n").len()
        + format!("#define {prefix}_RATE {sample_rate}\n").len()
        + format!("#define {prefix}_CHANNELS 1\n").len();
    FIXED_OVERHEAD + sample_count * BYTES_PER_SAMPLE + defines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_in_sample_count() {
        let mut last = 0;
        for count in [0, 1, 9, 10, 99, 1000, 10_000, 123_456] {
            let est = estimate_bytes(count, 22050, "drum_loop");
            assert!(est >= last, "estimate decreased at count={count}");
            last = est;
        }
    }

    #[test]
    fn test_longer_symbol_costs_more() {
        let short = estimate_bytes(1000, 22050, "a");
        let long = estimate_bytes(1000, 22050, "seventies_funk_drum_loop");
        assert!(long > short);
    }

    #[test]
    fn test_empty_buffer_estimate_is_overhead_only() {
        let est = estimate_bytes(0, 8000, "s");
        // 固定オーバーヘッド + define 3 行のみ
        assert!(est >= FIXED_OVERHEAD);
        assert!(est < FIXED_OVERHEAD + 100);
    }

    #[test]
    fn test_rate_digits_counted_exactly() {
        let narrow = estimate_bytes(100, 8000, "fx");
        let wide = estimate_bytes(100, 44100, "fx");
        assert_eq!(wide - narrow, 1);
    }
}
