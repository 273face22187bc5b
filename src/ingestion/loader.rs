//! Corpus Loading
//!
//! Reads translation files and assembles the canon model plus the verse corpus in
//! one pass. Any configuration error here is fatal: the engine must never serve
//! with a canon that disagrees with its verse data.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::canon::model::CanonModel;
use crate::canon::types::ConfigError;
use crate::reference::types::Reference;
use crate::search::tokenizer::fold_diacritics;
use crate::store::types::Verse;

use super::types::TranslationFile;

/// The fully assembled load-time output: one consistent canon and the verses it
/// was derived from.
#[derive(Debug)]
pub struct Corpus {
    pub canon: CanonModel,
    pub verses: Vec<Verse>,
}

/// Read every `.json` translation file in a directory.
pub fn load_dir(path: &Path) -> anyhow::Result<Vec<TranslationFile>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(path).with_context(|| format!("reading data directory {}", path.display()))?;

    for entry in entries {
        let entry = entry?;
        let file_path = entry.path();
        if file_path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let raw = fs::read_to_string(&file_path)
            .with_context(|| format!("reading {}", file_path.display()))?;
        let file: TranslationFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", file_path.display()))?;
        tracing::info!(
            translation = %file.abbreviation,
            verses = file.verses.len(),
            path = %file_path.display(),
            "loaded translation file"
        );
        files.push(file);
    }

    files.sort_by(|a, b| a.abbreviation.cmp(&b.abbreviation));
    Ok(files)
}

/// Assemble the canon and verse corpus from parsed translation files.
pub fn build_corpus(files: &[TranslationFile]) -> Result<Corpus, ConfigError> {
    let mut builder = CanonModel::builder();
    let mut verses = Vec::new();

    for file in files {
        builder.add_translation(&file.abbreviation, &file.full_name, &file.language_code)?;
        for record in &file.verses {
            let text = record.text.trim();
            if text.is_empty() {
                continue;
            }
            let book = builder.record_verse(
                &file.abbreviation,
                &record.book,
                record.chapter,
                record.verse,
            )?;
            verses.push(Verse {
                translation: file.abbreviation.to_uppercase(),
                reference: Reference::verse(book, record.chapter, record.verse)
                    .bind(&file.abbreviation),
                text: text.to_string(),
                text_normalized: fold_diacritics(text),
            });
        }
    }

    let canon = builder.build()?;
    tracing::info!(
        translations = canon.translations().len(),
        verses = verses.len(),
        "corpus assembled"
    );
    Ok(Corpus { canon, verses })
}
