//! パイプラインを流れる中心的な値型 `AudioBuffer`
//!
//! 各変換（トランケート / モノラル化 / リサンプル）は入力を変更せず
//! 新しいバッファを返す純粋関数として実装する。

/// インターリーブ済み 16bit PCM バッファ。
///
/// 不変条件:
/// - `samples.len() % channels == 0`（フレーム境界を跨がない）
/// - 全サンプルは i16 範囲内（演算は拡張アキュムレータ上で行い飽和させる）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    /// チャンネルインターリーブ順のサンプル列（L, R, L, R, ...）
    pub samples: Vec<i16>,
    /// サンプリングレート (Hz)
    pub sample_rate: u32,
    /// チャンネル数（1 または 2）
    pub channels: u16,
}

impl AudioBuffer {
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        debug_assert!(channels == 1 || channels == 2);
        debug_assert_eq!(samples.len() % channels as usize, 0);
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// チャンネルあたりのフレーム数
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// 再生時間（秒）
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.sample_rate as f64
    }

    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }
}

/// ステレオバッファを L/R 平均でモノラル化する。
///
/// 平均は i32 アキュムレータ上で `(l + r) / 2`（ゼロ方向切り捨て）。
/// 既にモノラルの場合は入力をそのまま返す（冪等）。
pub fn fold_to_mono(buffer: &AudioBuffer) -> AudioBuffer {
    if !buffer.is_stereo() {
        return buffer.clone();
    }
    let mono: Vec<i16> = buffer
        .samples
        .chunks_exact(2)
        .map(|frame| {
            let sum = frame[0] as i32 + frame[1] as i32;
            (sum / 2).clamp(i16::MIN as i32, i16::MAX as i32) as i16
        })
        .collect();
    AudioBuffer::new(mono, buffer.sample_rate, 1)
}

/// 先頭から最大 `max_seconds` 秒分だけを残す（ハードカット、フェードなし）。
///
/// `max_frames = floor(max_seconds * rate)` をフレーム単位で切り出すため、
/// ステレオでもフレームを分断しない。既定より短い場合は入力をそのまま返す。
pub fn truncate(buffer: &AudioBuffer, max_seconds: f64) -> AudioBuffer {
    let max_frames = (max_seconds * buffer.sample_rate as f64).floor() as usize;
    let max_samples = max_frames * buffer.channels as usize;
    if buffer.samples.len() <= max_samples {
        return buffer.clone();
    }
    AudioBuffer::new(
        buffer.samples[..max_samples].to_vec(),
        buffer.sample_rate,
        buffer.channels,
    )
}
