//! C 識別子サニタイズ
//!
//! 任意のファイル名からシンボル名・ガード名・マクロ接頭辞を導出する。
//! 正規化ルールを一箇所に集約し、シンボルとガードの規則が乖離しないようにする。

use std::path::Path;

/// ファイルパスの拡張子を除いたベース名を C 識別子へ正規化する。
/// 小文字化し、スペースとハイフンをアンダースコアに置換する。
pub fn symbol_from_path(path: &Path) -> String {
    let base = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize(&base)
}

/// 識別子として使えない文字を置換した小文字シンボル名を返す。
pub fn sanitize(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

/// インクルードガード名（`<SYMBOL>_H`）
pub fn guard_name(symbol: &str) -> String {
    format!("{}_H", macro_prefix(symbol))
}

/// `_LENGTH` / `_RATE` / `_CHANNELS` マクロの接頭辞（大文字シンボル）
pub fn macro_prefix(symbol: &str) -> String {
    symbol.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_spaces_and_hyphens() {
        assert_eq!(sanitize("Groove-loop-126-bpm"), "groove_loop_126_bpm");
        assert_eq!(sanitize("My Sound FX"), "my_sound_fx");
    }

    #[test]
    fn test_symbol_from_path_strips_extension() {
        let path = Path::new("sounds/Seventies-funk-drum-loop-109-BPM.wav");
        assert_eq!(
            symbol_from_path(path),
            "seventies_funk_drum_loop_109_bpm"
        );
    }

    #[test]
    fn test_guard_and_macro_prefix_share_normalization() {
        let symbol = sanitize("Laser-Blast 2");
        assert_eq!(symbol, "laser_blast_2");
        assert_eq!(macro_prefix(&symbol), "LASER_BLAST_2");
        assert_eq!(guard_name(&symbol), "LASER_BLAST_2_H");
    }
}
