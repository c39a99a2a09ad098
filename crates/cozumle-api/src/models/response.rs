//! Response model definitions

use serde::Serialize;

use cozumle::lexicon::SecondaryPos;
use cozumle::{GenerationResult, SingleAnalysis, WordAnalysis};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
  /// Always "ok"
  pub status: &'static str,
}

/// Analysis response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  /// One entry per token, in text order
  pub words: Vec<WordDto>,
}

/// Analyses of one token (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct WordDto {
  /// Token as it appeared in the text
  pub input: String,
  /// Normalized form that was analyzed
  pub normalized: String,
  /// Every analysis, possibly none
  pub analyses: Vec<AnalysisDto>,
}

/// One analysis (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDto {
  /// Lemma of the lexicon item
  pub lemma: String,
  /// Primary POS short form (`Noun`)
  pub pos: String,
  /// Secondary POS short form (`Prop`), omitted when there is none
  #[serde(skip_serializing_if = "Option::is_none")]
  pub secondary_pos: Option<String>,
  /// Stem surface
  pub stem: String,
  /// Suffix surfaces after the stem
  pub ending: String,
  /// Morphemes with their surfaces
  pub morphemes: Vec<MorphemeDto>,
  /// Formatted analysis (`[kitap:Noun] kitab:Noun+A3sg+ım:P1sg`)
  pub formatted: String,
  /// Contains a colloquial morpheme
  pub informal: bool,
}

/// Morpheme and surface (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct MorphemeDto {
  /// Morpheme id (`A3pl`)
  pub id: String,
  /// Surface, empty for silent morphemes
  pub surface: String,
}

/// Generation response
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
  /// Generated words, possibly none
  pub results: Vec<GenerationDto>,
}

/// One generated word (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct GenerationDto {
  /// Generated word
  pub surface: String,
  /// Formatted analysis the word was generated along
  pub analysis: String,
}

impl AnalysisDto {
  /// Converts a cozumle analysis
  #[must_use]
  pub fn from_analysis(analysis: &SingleAnalysis) -> Self {
    let item = analysis.item();
    Self {
      lemma: item.lemma.clone(),
      pos: item.primary_pos.short_form().to_string(),
      secondary_pos: (item.secondary_pos != SecondaryPos::None)
        .then(|| item.secondary_pos.short_form().to_string()),
      stem: analysis.stem().to_string(),
      ending: analysis.ending(),
      morphemes: analysis
        .morpheme_data()
        .iter()
        .map(|m| MorphemeDto { id: m.morpheme.id.to_string(), surface: m.surface.clone() })
        .collect(),
      formatted: analysis.format_long(),
      informal: analysis.contains_informal_morpheme(),
    }
  }
}

impl WordDto {
  /// Converts a cozumle word analysis
  #[must_use]
  pub fn from_word_analysis(word: &WordAnalysis) -> Self {
    Self {
      input: word.input().to_string(),
      normalized: word.normalized_input().to_string(),
      analyses: word.iter().map(AnalysisDto::from_analysis).collect(),
    }
  }
}

impl GenerationDto {
  /// Converts a cozumle generation result
  #[must_use]
  pub fn from_result(result: &GenerationResult) -> Self {
    Self { surface: result.surface.clone(), analysis: result.analysis.format_long() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn analyze_response_serialization() {
    let response = AnalyzeResponse {
      words: vec![WordDto {
        input: "Evde".to_string(),
        normalized: "evde".to_string(),
        analyses: vec![AnalysisDto {
          lemma: "ev".to_string(),
          pos: "Noun".to_string(),
          secondary_pos: None,
          stem: "ev".to_string(),
          ending: "de".to_string(),
          morphemes: vec![
            MorphemeDto { id: "Noun".to_string(), surface: "ev".to_string() },
            MorphemeDto { id: "A3sg".to_string(), surface: String::new() },
            MorphemeDto { id: "Loc".to_string(), surface: "de".to_string() },
          ],
          formatted: "[ev:Noun] ev:Noun+A3sg+de:Loc".to_string(),
          informal: false,
        }],
      }],
    };

    let json = serde_json::to_value(&response).unwrap();
    let analysis = &json["words"][0]["analyses"][0];
    assert_eq!(json["words"][0]["normalized"], "evde");
    assert_eq!(analysis["lemma"], "ev");
    assert_eq!(analysis["morphemes"][2]["id"], "Loc");
    assert!(analysis.get("secondary_pos").is_none());
    assert_eq!(analysis["informal"], false);
  }

  #[test]
  fn generate_response_serialization() {
    let response = GenerateResponse {
      results: vec![GenerationDto {
        surface: "kitaplarım".to_string(),
        analysis: "[kitap:Noun] kitap:Noun+lar:A3pl+ım:P1sg".to_string(),
      }],
    };
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"surface\":\"kitaplarım\""));
  }
}
