//! Text lexicon loader.
//!
//! One item per line:
//!
//! ```text
//! ## comment
//! kitap [A:Voicing]
//! okumak
//! ben [P:Pron,Pers]
//! Ankara
//! saat [A:NoVoicing, InverseHarmony]
//! sabahleyin [P:Adv]
//! ```
//!
//! Supported metadata keys are `P` (POS), `A` (attributes), `Pr` (pronunciation),
//! `Ref` (reference item id) and `Index`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::dictionary_item::DictionaryItem;
use super::pos::{PrimaryPos, SecondaryPos};
use super::root_attribute::{RootAttribute, RootAttributes};
use super::root_lexicon::RootLexicon;
use crate::alphabet;
use crate::errors::LexiconError;

/// Bundled lexicon with the closed-class items the morphotactics graph refers to
/// and a set of common roots.
pub const CORE_LEXICON: &str = include_str!("../../resources/core-lexicon.txt");

struct ParsedLine {
  item: DictionaryItem,
  reference_id: Option<String>,
}

/// Loads the bundled core lexicon.
pub fn load_core_lexicon() -> Result<RootLexicon, LexiconError> {
  load_text(CORE_LEXICON)
}

/// Parses lexicon text into a new lexicon.
pub fn load_text(text: &str) -> Result<RootLexicon, LexiconError> {
  let mut lexicon = RootLexicon::new();
  load_into(&mut lexicon, text)?;
  Ok(lexicon)
}

/// Reads a lexicon file into a new lexicon.
pub fn load_file(path: &Path) -> Result<RootLexicon, LexiconError> {
  let mut lexicon = RootLexicon::new();
  load_file_into(&mut lexicon, path)?;
  Ok(lexicon)
}

/// Reads a lexicon file and adds its items to `lexicon`. `Ref:` may point at items already
/// in `lexicon`.
pub fn load_file_into(lexicon: &mut RootLexicon, path: &Path) -> Result<usize, LexiconError> {
  let text = fs::read_to_string(path).map_err(|e| LexiconError::Io {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;
  load_into(lexicon, &text)
}

/// Parses lexicon text and adds its items to `lexicon`.
///
/// Items with a `Ref:` are added after all other items so the reference may appear anywhere
/// in the text.
pub fn load_into(lexicon: &mut RootLexicon, text: &str) -> Result<usize, LexiconError> {
  let mut deferred = Vec::new();
  let mut count = 0;
  for (i, raw) in text.lines().enumerate() {
    let Some(parsed) = parse_line(raw, i + 1)? else {
      continue;
    };
    count += 1;
    match parsed.reference_id {
      Some(ref_id) => deferred.push((parsed.item, ref_id)),
      None => {
        lexicon.add(parsed.item);
      }
    }
  }

  for (mut item, ref_id) in deferred {
    let reference = lexicon.get_item_by_id(&ref_id).cloned().ok_or_else(|| {
      LexiconError::ReferenceNotFound {
        item_id: item.id().to_string(),
        reference_id: ref_id.clone(),
      }
    })?;
    item.set_reference_item(reference);
    lexicon.add(item);
  }

  debug!(items = count, total = lexicon.len(), "Lexicon text loaded");
  Ok(count)
}

/// Parses one line. Blank lines and `##` comments give `None`.
fn parse_line(raw: &str, line_number: usize) -> Result<Option<ParsedLine>, LexiconError> {
  let line = raw.trim();
  if line.is_empty() || line.starts_with("##") {
    return Ok(None);
  }

  let malformed = |reason: &str| LexiconError::MalformedLine {
    line_number,
    line: line.to_string(),
    reason: reason.to_string(),
  };

  let (word, meta) = match line.find('[') {
    Some(start) => {
      let end = line.rfind(']').filter(|e| *e > start).ok_or_else(|| malformed("missing ']'"))?;
      (line[..start].trim(), Some(&line[start + 1..end]))
    }
    None => (line, None),
  };
  if word.is_empty() {
    return Err(malformed("empty word"));
  }

  let mut primary: Option<PrimaryPos> = None;
  let mut secondary: Option<SecondaryPos> = None;
  let mut attributes = RootAttributes::empty();
  let mut pronunciation: Option<String> = None;
  let mut reference_id: Option<String> = None;
  let mut index = 0u32;

  for pair in meta.into_iter().flat_map(|m| m.split(';')) {
    let pair = pair.trim();
    if pair.is_empty() {
      continue;
    }
    let (key, value) = pair.split_once(':').ok_or_else(|| malformed("metadata without ':'"))?;
    let value = value.trim();
    match key.trim() {
      "P" => {
        for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
          if let Ok(p) = token.parse::<PrimaryPos>() {
            if primary.is_none() {
              primary = Some(p);
              continue;
            }
          }
          secondary = Some(token.parse::<SecondaryPos>()?);
        }
      }
      "A" => {
        for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
          attributes.insert(token.parse::<RootAttribute>()?);
        }
      }
      "Pr" => pronunciation = Some(value.to_string()),
      "Ref" => reference_id = Some(value.to_string()),
      "Index" => {
        index = value.parse().map_err(|_| malformed("Index is not a number"))?;
      }
      _ => return Err(malformed("unknown metadata key")),
    }
  }

  let is_verb_form = |w: &str| {
    let lower = alphabet::to_lowercase(w);
    (lower.ends_with("mek") || lower.ends_with("mak")) && lower.chars().count() > 3
  };
  let capitalized = word.chars().next().is_some_and(char::is_uppercase);

  let primary = match (primary, secondary) {
    (Some(p), _) => p,
    (None, Some(s)) => infer_primary_from_secondary(s),
    (None, None) if is_verb_form(word) && !capitalized => PrimaryPos::Verb,
    (None, None) => PrimaryPos::Noun,
  };
  let secondary = secondary.unwrap_or(if primary == PrimaryPos::Noun && capitalized {
    SecondaryPos::ProperNoun
  } else {
    SecondaryPos::None
  });

  let lowered = alphabet::to_lowercase(word);
  let mut root = alphabet::normalize_circumflex(&lowered).into_owned();
  if primary == PrimaryPos::Verb && is_verb_form(word) {
    let cut = root.char_indices().rev().nth(2).map_or(0, |(i, _)| i);
    root.truncate(cut);
  }
  root.retain(|c| c != '\'' && c != ' ');

  let pron = pronunciation.unwrap_or_else(|| root.clone());
  infer_attributes(&mut attributes, primary, secondary, &pron);

  let item = DictionaryItem::new(word, root, primary, secondary, attributes, Some(&pron), index);
  Ok(Some(ParsedLine { item, reference_id }))
}

fn infer_primary_from_secondary(secondary: SecondaryPos) -> PrimaryPos {
  match secondary {
    SecondaryPos::PersonalPron
    | SecondaryPos::DemonstrativePron
    | SecondaryPos::QuantitivePron
    | SecondaryPos::QuestionPron
    | SecondaryPos::ReflexivePron => PrimaryPos::Pronoun,
    SecondaryPos::Cardinal | SecondaryPos::Ordinal => PrimaryPos::Numeral,
    _ => PrimaryPos::Noun,
  }
}

/// Adds attributes implied by the shape of the word.
fn infer_attributes(
  attributes: &mut RootAttributes,
  primary: PrimaryPos,
  secondary: SecondaryPos,
  pronunciation: &str,
) {
  use RootAttribute::*;

  let Some(last) = alphabet::last_letter(pronunciation) else {
    return;
  };
  let vowel_count = alphabet::vowel_count(pronunciation);

  match primary {
    PrimaryPos::Verb => {
      if last.is_vowel() {
        attributes.insert(ProgressiveVowelDrop);
        attributes.insert(Passive_In);
      }
      if vowel_count > 1 && !attributes.contains(Aorist_A) {
        attributes.insert(Aorist_I);
      }
      if vowel_count == 1 && !attributes.contains(Aorist_I) {
        attributes.insert(Aorist_A);
      }
      if last.ch == 'l' {
        attributes.insert(Passive_In);
      }
      if last.is_vowel() || (matches!(last.ch, 'l' | 'r') && vowel_count > 1) {
        attributes.insert(Causative_t);
      }
    }
    PrimaryPos::Noun | PrimaryPos::Adjective | PrimaryPos::Numeral => {
      if vowel_count > 1
        && last.is_stop_consonant()
        && !attributes.contains(NoVoicing)
        && !attributes.contains(InverseHarmony)
      {
        attributes.insert(Voicing);
      }
      if pronunciation.ends_with("nk") || pronunciation.ends_with("og") {
        if !attributes.contains(NoVoicing) && secondary != SecondaryPos::ProperNoun {
          attributes.insert(Voicing);
        }
      } else if vowel_count < 2 && !attributes.contains(Voicing) {
        attributes.insert(NoVoicing);
      }
    }
    _ => {}
  }
}
