//! WAV コンテナのデコード
//!
//! 16bit 符号付き PCM のみ対応。それ以外のビット深度・フォーマットは
//! 暗黙に変換せず `UnsupportedFormat` で拒否する。

use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::domain::buffer::AudioBuffer;
use crate::error::{ConvertError, Result};

/// WAV ファイルを読み込んで `AudioBuffer` を構築する。
pub fn decode_wav(path: &Path) -> Result<AudioBuffer> {
    decode(WavReader::open(path)?)
}

/// 任意のリーダーから WAV をデコードする（テスト用にも公開）。
pub fn decode<R: Read>(mut reader: WavReader<R>) -> Result<AudioBuffer> {
    let spec = reader.spec();

    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        return Err(ConvertError::UnsupportedFormat {
            bits: spec.bits_per_sample,
            format: match spec.sample_format {
                SampleFormat::Int => "integer",
                SampleFormat::Float => "float",
            },
        });
    }
    if spec.channels == 0 || spec.channels > 2 {
        return Err(ConvertError::UnsupportedChannels(spec.channels));
    }

    let mut samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    // 壊れたコンテナで末尾に半端なフレームが残った場合は切り落とす
    let remainder = samples.len() % spec.channels as usize;
    if remainder != 0 {
        samples.truncate(samples.len() - remainder);
    }

    Ok(AudioBuffer::new(samples, spec.sample_rate, spec.channels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wav_bytes(spec: hound::WavSpec, samples: &[i16]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    fn spec_16(channels: u16, sample_rate: u32) -> hound::WavSpec {
        hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    #[test]
    fn test_decode_mono_16bit() {
        let bytes = wav_bytes(spec_16(1, 44100), &[0, 100, -100, i16::MAX]);
        let buf = decode(WavReader::new(Cursor::new(bytes)).unwrap()).unwrap();
        assert_eq!(buf.samples, vec![0, 100, -100, i16::MAX]);
        assert_eq!(buf.sample_rate, 44100);
        assert_eq!(buf.channels, 1);
    }

    #[test]
    fn test_decode_stereo_keeps_interleaving() {
        let bytes = wav_bytes(spec_16(2, 22050), &[1, -1, 2, -2]);
        let buf = decode(WavReader::new(Cursor::new(bytes)).unwrap()).unwrap();
        assert_eq!(buf.samples, vec![1, -1, 2, -2]);
        assert_eq!(buf.frames(), 2);
    }

    #[test]
    fn test_8bit_rejected() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 8,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            writer.write_sample(0i8).unwrap();
            writer.finalize().unwrap();
        }
        let err = decode(WavReader::new(Cursor::new(cursor.into_inner())).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedFormat { bits: 8, .. }
        ));
    }

    #[test]
    fn test_too_many_channels_rejected() {
        let bytes = wav_bytes(spec_16(4, 44100), &[0, 0, 0, 0]);
        let err = decode(WavReader::new(Cursor::new(bytes)).unwrap()).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedChannels(4)));
    }
}
