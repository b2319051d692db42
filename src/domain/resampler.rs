//! 周波数領域（FFT）による帯域制限リサンプラ
//!
//! scipy.signal.resample と同系の方式: バッファ全体を周期信号とみなして
//! フォワード FFT → スペクトラムの切り詰め / ゼロ埋め → 逆 FFT で
//! レート変換する。帯域制限された信号に対しては正確だが、非周期信号では
//! バッファ端にリンギングが乗る。静的サンプルデータ用途ではこれを許容する。
//!
//! ステレオはチャンネルごとにデインターリーブして独立にリサンプルし、
//! 最後に再インターリーブする。インターリーブ列を 1 本の信号として
//! 処理してはならない。

use rustfft::{FftPlanner, num_complex::Complex};

use super::buffer::AudioBuffer;

/// `buffer` を `target_rate` へリサンプルした新しいバッファを返す。
///
/// 出力フレーム数は `round(frames * target_rate / sample_rate)`。
/// 同一レートへの変換はアルゴリズム適用と値同等の no-op。
pub fn resample(buffer: &AudioBuffer, target_rate: u32) -> AudioBuffer {
    if target_rate == buffer.sample_rate {
        return buffer.clone();
    }
    let new_frames = scaled_frames(buffer.frames(), buffer.sample_rate, target_rate);

    if buffer.is_stereo() {
        let left: Vec<i16> = buffer.samples.iter().copied().step_by(2).collect();
        let right: Vec<i16> = buffer.samples.iter().copied().skip(1).step_by(2).collect();
        let left = resample_channel(&left, new_frames);
        let right = resample_channel(&right, new_frames);

        let mut interleaved = Vec::with_capacity(new_frames * 2);
        for (l, r) in left.iter().zip(right.iter()) {
            interleaved.push(*l);
            interleaved.push(*r);
        }
        AudioBuffer::new(interleaved, target_rate, 2)
    } else {
        AudioBuffer::new(
            resample_channel(&buffer.samples, new_frames),
            target_rate,
            1,
        )
    }
}

/// レート比でスケールしたフレーム数（四捨五入）
fn scaled_frames(frames: usize, from_rate: u32, to_rate: u32) -> usize {
    if from_rate == 0 {
        return 0;
    }
    ((frames as u64 * to_rate as u64 + from_rate as u64 / 2) / from_rate as u64) as usize
}

/// 1 チャンネル分をスペクトラム切り詰め / ゼロ埋めで `num_out` サンプルへ変換する。
fn resample_channel(input: &[i16], num_out: usize) -> Vec<i16> {
    let n = input.len();
    if n == 0 || num_out == 0 {
        return Vec::new();
    }
    if num_out == n {
        return input.to_vec();
    }

    let mut planner = FftPlanner::<f64>::new();
    let mut spectrum: Vec<Complex<f64>> = input
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    planner.plan_fft_forward(n).process(&mut spectrum);

    // 低域 nyq 本と高域側の共役部を保持し、残りはゼロ
    let mut shifted = vec![Complex::new(0.0, 0.0); num_out];
    let m = n.min(num_out);
    let nyq = m / 2 + 1;
    shifted[..nyq].copy_from_slice(&spectrum[..nyq]);
    if m > 2 {
        let tail = m - nyq;
        shifted[num_out - tail..].copy_from_slice(&spectrum[n - tail..]);
    }
    if m % 2 == 0 {
        if num_out < n {
            // ダウンサンプル: 折り返し側のナイキスト成分を合算して実数に戻す
            shifted[m / 2] = shifted[m / 2] + spectrum[n - m / 2];
        } else {
            // アップサンプル: ナイキスト成分を正負の周波数へ二分する
            shifted[m / 2] = shifted[m / 2] * 0.5;
            shifted[num_out - m / 2] = shifted[m / 2].conj();
        }
    }

    planner.plan_fft_inverse(num_out).process(&mut shifted);

    // rustfft は正規化しないため forward 長 n で割る
    // (scipy の ifft 正規化 1/num_out と振幅補正 num_out/n の合成)
    let scale = 1.0 / n as f64;
    shifted.iter().map(|c| quantize(c.re * scale)).collect()
}

/// 四捨五入して i16 範囲へクリップする（ラップさせない）
fn quantize(value: f64) -> i16 {
    (value.round() as i64).clamp(i16::MIN as i64, i16::MAX as i64) as i16
}
