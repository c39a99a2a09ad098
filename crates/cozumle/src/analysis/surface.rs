//! Surface realization of suffix templates.

use std::fmt;

use crate::alphabet::{self, PhoneticAttribute, PhoneticAttributes, morphemic_attributes};
use crate::errors::MorphotacticsError;
use crate::morphotactics::{
  MorphotacticsGraph, StateId, SuffixTransition, TemplateToken, TransitionId,
};

/// Lexical side of a surface transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalTransition {
  /// The root. The stem transition itself is kept on the path.
  Stem,
  /// A suffix transition of the graph
  Suffix(TransitionId),
}

/// A transition taken by a path, with the text it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceTransition {
  /// Realized text, empty for transitions without surface
  pub surface: String,
  /// State entered
  pub state: StateId,
  /// Transition taken
  pub lexical: LexicalTransition,
}

impl SurfaceTransition {
  /// Creates a surface transition.
  pub fn new(surface: impl Into<String>, state: StateId, lexical: LexicalTransition) -> Self {
    Self { surface: surface.into(), state, lexical }
  }

  /// True if the entered state opens a derivation group.
  pub fn is_derivative(&self, graph: &MorphotacticsGraph) -> bool {
    graph.state(self.state).derivative
  }

  /// Renders as `surface:stateName`, or just the state name when the surface is empty.
  pub fn display<'a>(&'a self, graph: &'a MorphotacticsGraph) -> impl fmt::Display + 'a {
    DisplaySurface { transition: self, graph }
  }
}

struct DisplaySurface<'a> {
  transition: &'a SurfaceTransition,
  graph: &'a MorphotacticsGraph,
}

impl fmt::Display for DisplaySurface<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !self.transition.surface.is_empty() {
      write!(f, "{}:", self.transition.surface)?;
    }
    f.write_str(self.graph.state(self.transition.state).name)
  }
}

fn unresolved(
  placeholder: char,
  transition: &SuffixTransition,
  attrs: PhoneticAttributes,
) -> MorphotacticsError {
  MorphotacticsError::UnresolvedVowel {
    placeholder,
    template: transition.template.to_string(),
    attributes: format!("{attrs:?}"),
  }
}

/// Realizes the template of `transition` after text with attributes `attrs`.
///
/// Results are cached on the transition per attribute set. A vowel placeholder that cannot
/// be resolved means the graph or the lexicon is broken and is reported as an error.
pub fn generate_surface(
  transition: &SuffixTransition,
  attrs: PhoneticAttributes,
) -> Result<String, MorphotacticsError> {
  use PhoneticAttribute::*;

  if let Some(cached) = transition.cached_surface(attrs) {
    return Ok(cached);
  }

  let mut surface = String::new();
  for (index, token) in transition.tokens().iter().enumerate() {
    let current = morphemic_attributes(&surface, attrs);
    let skip_initial_vowel = index == 0 && attrs.contains(LastLetterVowel);
    match *token {
      TemplateToken::Letter(c) => surface.push(c),
      TemplateToken::AVowel => {
        if !skip_initial_vowel {
          if current.contains(LastVowelBack) {
            surface.push('a');
          } else if current.contains(LastVowelFrontal) {
            surface.push('e');
          } else {
            return Err(unresolved('A', transition, current));
          }
        }
      }
      TemplateToken::IVowel => {
        if !skip_initial_vowel {
          let vowel = match (
            current.contains(LastVowelFrontal),
            current.contains(LastVowelBack),
            current.contains(LastVowelRounded),
            current.contains(LastVowelUnrounded),
          ) {
            (true, _, _, true) => 'i',
            (_, true, _, true) => 'ı',
            (_, true, true, _) => 'u',
            (true, _, true, _) => 'ü',
            _ => return Err(unresolved('I', transition, current)),
          };
          surface.push(vowel);
        }
      }
      TemplateToken::Append(c) => {
        if current.contains(LastLetterVowel) {
          surface.push(c);
        }
      }
      TemplateToken::DevoiceFirst(c) => {
        if current.contains(LastLetterVoiceless) {
          surface.push(alphabet::devoice(c));
        } else {
          surface.push(c);
        }
      }
      TemplateToken::LastVoiced(c) | TemplateToken::LastNotVoiced(c) => surface.push(c),
    }
  }

  transition.cache_surface(attrs, surface.clone());
  Ok(surface)
}

/// Attributes after appending `surface`, with the marker annotations of the last template
/// token applied.
///
/// `keep` leaves the incoming attributes as they are apart from the annotations; the
/// analyzer uses it when the surface consumes the rest of the input.
pub fn attributes_after(
  transition: &SuffixTransition,
  surface: &str,
  attrs: PhoneticAttributes,
  keep: bool,
) -> PhoneticAttributes {
  use PhoneticAttribute::*;

  let mut next = if keep { attrs } else { morphemic_attributes(surface, attrs) };
  next.remove(CannotTerminate);
  match transition.last_token() {
    Some(TemplateToken::LastVoiced(_)) => next.insert(ExpectsConsonant),
    Some(TemplateToken::LastNotVoiced(_)) => {
      next.insert(ExpectsVowel);
      next.insert(CannotTerminate);
    }
    _ => {}
  }
  next
}

#[cfg(test)]
mod tests {
  use super::*;

  fn transition(template: &'static str) -> SuffixTransition {
    SuffixTransition::new(StateId(0), StateId(1), template, None)
  }

  fn attrs_of(word: &str) -> PhoneticAttributes {
    morphemic_attributes(word, PhoneticAttributes::empty())
  }

  fn surface(template: &'static str, word: &str) -> String {
    generate_surface(&transition(template), attrs_of(word)).unwrap()
  }

  #[test]
  fn vowel_harmony() {
    assert_eq!(surface("lAr", "kalem"), "ler");
    assert_eq!(surface("lAr", "kitap"), "lar");
    assert_eq!(surface("+Im", "kalem"), "im");
    assert_eq!(surface("+Im", "okul"), "um");
    assert_eq!(surface("+Im", "göz"), "üm");
    assert_eq!(surface("+Im", "kız"), "ım");
  }

  #[test]
  fn initial_vowel_is_dropped_after_vowel() {
    assert_eq!(surface("+Im", "araba"), "m");
    assert_eq!(surface("Im", "araba"), "m");
    assert_eq!(surface("+yA", "araba"), "ya");
    assert_eq!(surface("+yA", "kalem"), "e");
  }

  #[test]
  fn devoicing_after_voiceless_letter() {
    assert_eq!(surface(">dA", "kitap"), "ta");
    assert_eq!(surface(">dA", "ev"), "de");
    assert_eq!(surface(">dI", "git"), "ti");
  }

  #[test]
  fn voicing_markers_are_emitted() {
    assert_eq!(surface("+yAcA~k", "oku"), "yacak");
    assert_eq!(surface("+yAcA!ğ", "gel"), "eceğ");
  }

  #[test]
  fn surfaces_are_cached_per_attribute_set() {
    let t = transition("lAr");
    let attrs = attrs_of("ev");
    assert!(t.cached_surface(attrs).is_none());
    assert_eq!(generate_surface(&t, attrs).unwrap(), "ler");
    assert_eq!(t.cached_surface(attrs).as_deref(), Some("ler"));
  }

  #[test]
  fn unresolvable_vowel_is_an_error() {
    match generate_surface(&transition("lAr"), PhoneticAttributes::empty()) {
      Err(MorphotacticsError::UnresolvedVowel { placeholder, template, .. }) => {
        assert_eq!(placeholder, 'A');
        assert_eq!(template, "lAr");
      }
      other => panic!("expected UnresolvedVowel, got {other:?}"),
    }
  }

  #[test]
  fn markers_annotate_following_attributes() {
    let t = transition("+yAcA!ğ");
    let next = attributes_after(&t, "eceğ", attrs_of("gel"), false);
    assert!(next.contains(PhoneticAttribute::ExpectsVowel));
    assert!(next.contains(PhoneticAttribute::CannotTerminate));

    let t = transition("+yAcA~k");
    let before = attrs_of("oku").with(PhoneticAttribute::CannotTerminate);
    let next = attributes_after(&t, "yacak", before, true);
    assert!(next.contains(PhoneticAttribute::ExpectsConsonant));
    assert!(!next.contains(PhoneticAttribute::CannotTerminate));
  }
}
