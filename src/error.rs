//! 統一エラーハンドリング
//!
//! wav2header 全体で使用する統一エラー型を定義します。
//! デコード失敗はその入力の処理だけを中断し、バッチは次の入力へ進みます。

use thiserror::Error;

/// wav2header 全体で使用する統一エラー型
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 16bit 符号付き PCM 以外は変換対象外
    #[error("Unsupported sample format: {bits}-bit {format}. Only 16-bit signed PCM is supported")]
    UnsupportedFormat { bits: u16, format: &'static str },

    /// モノラル / ステレオ以外のチャンネル構成
    #[error("Unsupported channel count: {0}. Only mono and stereo are supported")]
    UnsupportedChannels(u16),

    #[error("WAV decode failed: {0}")]
    WavDecode(#[from] hound::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 統一Result型エイリアス
pub type Result<T> = std::result::Result<T, ConvertError>;
