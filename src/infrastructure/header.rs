//! C ヘッダ出力（ビット単位の互換フォーマット）
//!
//! 組込み側のビルドツールがこの書式に依存しているため、列揃え・カンマと
//! 空白の配置・改行位置は変更してはならない。書き込みは一時ファイル経由の
//! rename で行い、失敗時に書きかけのヘッダを残さない。

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use crate::domain::buffer::AudioBuffer;
use crate::error::Result;
use crate::utils::symbol::{guard_name, macro_prefix};

/// 1 行に並べるサンプル数
const SAMPLES_PER_LINE: usize = 10;

/// 出力済みヘッダ成果物
#[derive(Debug)]
pub struct HeaderArtifact {
    pub symbol: String,
    /// シリアライズ後の実バイト数
    pub byte_length: usize,
    pub buffer: AudioBuffer,
}

/// バッファをヘッダテキストへシリアライズする。
///
/// 各サンプルは 6 桁右詰め + カンマで印字し、10 個ごとに改行、それ以外は
/// スペース 1 個で区切る。末尾行が 10 個に満たない場合も改行で閉じる。
pub fn render_header(buffer: &AudioBuffer, symbol: &str) -> String {
    let guard = guard_name(symbol);
    let prefix = macro_prefix(symbol);

    let mut out = String::new();
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}");
    out.push('\n');

    let _ = writeln!(
        out,
        "// {symbol}: {} samples, {} ch, {} Hz",
        buffer.samples.len(),
        buffer.channels,
        buffer.sample_rate
    );
    let _ = writeln!(out, "const int16_t {symbol}_data[] PROGMEM = {{");

    for (i, sample) in buffer.samples.iter().enumerate() {
        let _ = write!(out, "{sample:6},");
        if (i + 1) % SAMPLES_PER_LINE == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    if buffer.samples.len() % SAMPLES_PER_LINE != 0 {
        out.push('\n');
    }

    out.push_str("};\n\n");
    let _ = writeln!(out, "#define {prefix}_LENGTH {}", buffer.samples.len());
    let _ = writeln!(out, "#define {prefix}_RATE {}", buffer.sample_rate);
    let _ = writeln!(out, "#define {prefix}_CHANNELS {}", buffer.channels);
    out.push('\n');
    let _ = writeln!(out, "#endif // {guard}");
    out
}

/// ヘッダを `dest` へ書き出し、成果物レコードを返す。
///
/// 同一ディレクトリの一時ファイルに書いてから rename するため、
/// 途中で失敗しても `dest` に中途半端な内容は残らない。
pub fn emit_header_file(
    buffer: &AudioBuffer,
    symbol: &str,
    dest: &Path,
) -> Result<HeaderArtifact> {
    let text = render_header(buffer, symbol);

    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.persist(dest).map_err(|e| e.error)?;

    Ok(HeaderArtifact {
        symbol: symbol.to_string(),
        byte_length: text.len(),
        buffer: buffer.clone(),
    })
}
