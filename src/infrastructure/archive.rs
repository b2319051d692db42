//! zip バンドルからの WAV 取り出し
//!
//! 効果音配布サイトの zip を展開し、各アーカイブの最初の WAV エントリを
//! 変換パイプラインの入力ディレクトリへコピーする。アーカイブ単位の
//! エラーは警告して読み飛ばし、残りの処理を続行する。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// `zip_dir` 直下の各 zip から最初の `.wav` を `wav_dir` へ取り出す。
/// 取り出せた WAV のパス一覧を返す。
pub fn extract_wavs(zip_dir: &Path, wav_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(wav_dir)?;

    let mut zip_paths: Vec<PathBuf> = fs::read_dir(zip_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("zip"))
                .unwrap_or(false)
        })
        .collect();
    zip_paths.sort();

    println!("Found {} zip files", zip_paths.len());

    let mut extracted = Vec::new();
    for zip_path in &zip_paths {
        match extract_first_wav(zip_path, wav_dir) {
            Ok(Some(wav)) => {
                println!("  ✓ Extracted: {}", wav.display());
                extracted.push(wav);
            }
            Ok(None) => {
                log::warn!("no WAV entry in {}", zip_path.display());
            }
            Err(e) => {
                log::warn!("failed to process {}: {e}", zip_path.display());
            }
        }
    }
    Ok(extracted)
}

/// アーカイブ内で最初に見つかった WAV エントリを `wav_dir` へコピーする。
fn extract_first_wav(zip_path: &Path, wav_dir: &Path) -> Result<Option<PathBuf>> {
    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if !name.to_ascii_lowercase().ends_with(".wav") {
            continue;
        }
        // アーカイブ内のディレクトリ構造は捨ててファイル名だけ使う
        let base = match Path::new(&name).file_name() {
            Some(base) => base.to_owned(),
            None => continue,
        };
        let dest = wav_dir.join(base);
        let mut out = fs::File::create(&dest)?;
        io::copy(&mut entry, &mut out)?;
        return Ok(Some(dest));
    }
    Ok(None)
}
