//! Request model definitions

use serde::Deserialize;

/// Analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
  /// Text to analyze
  pub text: String,
}

/// Generation request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
  /// Lexicon item id (`kitap_Noun`)
  pub item_id: String,
  /// Morpheme ids in order (`["Noun", "A3pl", "P1sg", "Nom"]`)
  pub morphemes: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_analyze_request() {
    let req: AnalyzeRequest = serde_json::from_str(r#"{"text": "evlerde"}"#).unwrap();
    assert_eq!(req.text, "evlerde");
  }

  #[test]
  fn deserialize_generate_request() {
    let json = r#"{"item_id": "kitap_Noun", "morphemes": ["A3pl", "P1sg"]}"#;
    let req: GenerateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.item_id, "kitap_Noun");
    assert_eq!(req.morphemes, vec!["A3pl", "P1sg"]);
  }

  #[test]
  fn missing_morphemes_is_rejected() {
    assert!(serde_json::from_str::<GenerateRequest>(r#"{"item_id": "kitap_Noun"}"#).is_err());
  }
}
