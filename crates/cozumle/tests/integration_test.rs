//! crates/cozumle/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow over the bundled core lexicon: build the service -> analyze words
//! and sentences -> generate words -> format surfaces -> index lemmas in tantivy and search.

use std::sync::Arc;

use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{IndexRecordOption, Schema, TextFieldIndexing, TextOptions};
use tantivy::{Index, IndexWriter, doc};

use cozumle::analysis::CaseType;
use cozumle::lexicon::{PrimaryPos, SecondaryPos};
use cozumle::tokenizer::{LEMMA_TOKENIZER_NAME, register_lemma_tokenizer};
use cozumle::{CozumleConfig, CozumleService, SingleAnalysis};

fn service() -> CozumleService {
  CozumleService::with_defaults().expect("core lexicon should load")
}

fn morpheme_ids(service: &CozumleService, analysis: &SingleAnalysis) -> Vec<&'static str> {
  let morphemes = service.morphotactics().morphemes();
  analysis.morphemes().into_iter().map(|m| morphemes.id_of(m)).collect()
}

// ─── Analysis ───────────────────────────────────────────────────────────────

#[test]
fn analyzes_nouns_with_possessive_and_case() {
  let service = service();
  let result = service.analyze("kitaplarımı").unwrap();
  assert!(result.is_correct());

  let found = result.iter().any(|a| {
    let ids = morpheme_ids(&service, a);
    a.item().lemma == "kitap"
      && ids.contains(&"A3pl")
      && ids.contains(&"P1sg")
      && ids.contains(&"Acc")
  });
  assert!(found, "{:?}", result.iter().map(SingleAnalysis::format_long).collect::<Vec<_>>());
}

#[test]
fn analyzes_verbs() {
  let service = service();
  let result = service.analyze("okuyorum").unwrap();
  let analysis =
    result.iter().find(|a| a.item().lemma == "okumak").expect("okumak reading should exist");
  assert_eq!(analysis.item().primary_pos, PrimaryPos::Verb);
  assert_eq!(analysis.stem(), "oku");
  let ids = morpheme_ids(&service, analysis);
  assert!(ids.contains(&"Prog1") && ids.contains(&"A1sg"), "{ids:?}");
}

#[test]
fn analyzes_a_sentence_token_by_token() {
  let service = service();
  let words = service.analyze_sentence("Kitaplar evde.").unwrap();
  let inputs: Vec<&str> = words.iter().map(|w| w.input()).collect();
  assert_eq!(inputs, vec!["Kitaplar", "evde", "."]);

  assert!(words[0].iter().all(|a| a.item().lemma == "kitap"));
  assert!(words[1].iter().any(|a| a.item().lemma == "ev" && a.ending() == "de"));
  assert!(words[2].iter().all(|a| a.item().primary_pos == PrimaryPos::Punctuation));
}

#[test]
fn unknown_lowercase_word_has_no_analysis() {
  let service = service();
  let result = service.analyze("qwxzzt").unwrap();
  assert!(result.is_empty());
}

// ─── Unidentified tokens ────────────────────────────────────────────────────

#[test]
fn numbers_split_into_digits_and_ending() {
  let service = service();
  for (input, ending) in [("3'te", "te"), ("3te", "te")] {
    let result = service.analyze(input).unwrap();
    assert!(!result.is_empty(), "{input} should be analyzed");
    for analysis in result.iter() {
      assert_eq!(analysis.item().lemma, "3");
      assert_eq!(analysis.stem(), "3");
      assert_eq!(analysis.ending(), ending);
      assert!(analysis.is_runtime());
    }
  }
}

#[test]
fn unknown_proper_noun_is_injected_then_retracted() {
  let service = service();
  let first = service.analyze_without_cache("Zonguldak'ta").unwrap();
  assert!(!first.is_empty());
  assert!(first.iter().all(|a| a.item().secondary_pos == SecondaryPos::ProperNoun));

  // the runtime root does not leak into the stem index
  let stems = service.morphotactics().stem_transitions();
  assert!(stems.get_transitions("zonguldak").is_empty());

  let second = service.analyze_without_cache("Zonguldak'ta").unwrap();
  assert_eq!(first, second);
}

// ─── Generation ─────────────────────────────────────────────────────────────

#[test]
fn generates_inflected_words() {
  let service = service();
  let results = service.generate("kitap_Noun", &["A3pl", "P1sg"]).unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].surface, "kitaplarım");

  let results = service.generate("kitap_Noun", &["A3sg", "P1sg"]).unwrap();
  assert_eq!(results[0].surface, "kitabım");
}

#[test]
fn generated_words_analyze_back_to_the_same_morphemes() {
  let service = service();
  for word in ["evlerde", "kalemsiz", "geliyorum"] {
    for analysis in service.analyze(word).unwrap().iter() {
      let ids = morpheme_ids(&service, analysis);
      let results = service.generate(analysis.item().id(), &ids).unwrap();
      let surfaces: Vec<&str> = results.iter().map(|r| r.surface.as_str()).collect();
      assert!(surfaces.contains(&word), "{word}: {surfaces:?}");
    }
  }
}

// ─── Formatting and informal forms ──────────────────────────────────────────

#[test]
fn formats_proper_nouns_with_apostrophe() {
  let service = service();
  let result = service.analyze("Ankara'ya").unwrap();
  let analysis = result
    .iter()
    .find(|a| a.item().secondary_pos == SecondaryPos::ProperNoun)
    .expect("proper noun reading should exist");

  assert_eq!(service.format_surface(analysis, CaseType::Default), "Ankara'ya");
  assert_eq!(service.format_surface(analysis, CaseType::Upper), "ANKARA'YA");
  assert_eq!(service.formatter().guess_case("ANKARA"), CaseType::Upper);
}

#[test]
fn informal_verbs_convert_to_formal() {
  let mut config = CozumleConfig::default();
  config.morphology.informal = true;
  let service = CozumleService::new(config).unwrap();

  let result = service.analyze("geliyom").unwrap();
  assert!(result.iter().any(SingleAnalysis::contains_informal_morpheme));

  let formal: Vec<String> = result
    .iter()
    .filter_map(|a| service.convert_informal("geliyom", a).unwrap())
    .map(|r| r.surface)
    .collect();
  assert!(formal.contains(&"geliyorum".to_string()), "{formal:?}");
}

// ─── Search integration ─────────────────────────────────────────────────────

#[test]
fn lemma_index_matches_inflected_forms() {
  let service = Arc::new(service());

  let mut schema_builder = Schema::builder();
  let indexing = TextFieldIndexing::default()
    .set_tokenizer(LEMMA_TOKENIZER_NAME)
    .set_index_option(IndexRecordOption::WithFreqsAndPositions);
  let options = TextOptions::default().set_indexing_options(indexing);
  let body = schema_builder.add_text_field("body", options);
  let index = Index::create_in_ram(schema_builder.build());
  register_lemma_tokenizer(index.tokenizers(), service);

  let mut writer: IndexWriter = index.writer(50_000_000).unwrap();
  writer.add_document(doc!(body => "Kitaplarımı masaya koydum.")).unwrap();
  writer.add_document(doc!(body => "Evlerde kalemler var.")).unwrap();
  writer.add_document(doc!(body => "Okulda kitabını okuyor.")).unwrap();
  writer.commit().unwrap();

  let searcher = index.reader().unwrap().searcher();
  let parser = QueryParser::for_index(&index, vec![body]);

  let query = parser.parse_query("kitap").unwrap();
  let hits = searcher.search(&query, &TopDocs::with_limit(10)).unwrap();
  assert_eq!(hits.len(), 2);

  let query = parser.parse_query("evde").unwrap();
  let hits = searcher.search(&query, &TopDocs::with_limit(10)).unwrap();
  assert_eq!(hits.len(), 1);
}
