//! Suffix and stem transitions.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::alphabet::{self, PhoneticAttribute, PhoneticAttributes};
use crate::analysis::SearchPath;
use crate::lexicon::DictionaryItem;

use super::conditions::{Condition, not_have};
use super::graph::MorphotacticsGraph;
use super::state::StateId;

/// Index of a suffix transition in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub(crate) u32);

impl TransitionId {
  /// Position in the arena
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// One token of a suffix template such as `+yA` or `dI~k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
  /// Literal letter
  Letter(char),
  /// `A`: `a` or `e` by harmony
  AVowel,
  /// `I`: `ı`, `i`, `u` or `ü` by harmony
  IVowel,
  /// `+x`: emitted only after a vowel
  Append(char),
  /// `>x`: devoiced after a voiceless letter
  DevoiceFirst(char),
  /// `~x`: the next suffix must start with a consonant
  LastVoiced(char),
  /// `!x`: the next suffix must start with a vowel
  LastNotVoiced(char),
}

/// Splits a suffix template into tokens.
///
/// `+I` and `+A` are plain vowel placeholders: a vowel placeholder at the start of a suffix
/// is already dropped after a vowel.
pub fn tokenize_template(template: &str) -> Vec<TemplateToken> {
  let mut tokens = Vec::with_capacity(template.len());
  let mut chars = template.chars();
  while let Some(c) = chars.next() {
    let token = match c {
      '!' | '+' | '>' | '~' => {
        let Some(next) = chars.next() else { break };
        match (c, next) {
          ('!', n) => TemplateToken::LastNotVoiced(n),
          ('+', 'I') => TemplateToken::IVowel,
          ('+', 'A') => TemplateToken::AVowel,
          ('+', n) => TemplateToken::Append(n),
          ('>', n) => TemplateToken::DevoiceFirst(n),
          (_, n) => TemplateToken::LastVoiced(n),
        }
      }
      'A' => TemplateToken::AVowel,
      'I' => TemplateToken::IVowel,
      other => TemplateToken::Letter(other),
    };
    tokens.push(token);
  }
  tokens
}

/// Condition implied by the first letter of a template.
///
/// Suffixes starting with a consonant are blocked after `!`, vowel-initial ones after `~`.
fn template_condition(template: &str) -> Option<Condition> {
  let lower: Vec<char> = alphabet::to_lowercase(template).chars().collect();
  let first = *lower.first()?;
  let first_vowel = alphabet::is_vowel(first);
  let mut condition = None;
  if first == '>' || !first_vowel {
    condition = Some(not_have(PhoneticAttribute::ExpectsVowel));
  }
  if (first == '+' && lower.get(2).is_some_and(|c| alphabet::is_vowel(*c))) || first_vowel {
    condition = Some(not_have(PhoneticAttribute::ExpectsConsonant));
  }
  condition
}

/// Edge between two morpheme states, realized by a suffix template.
pub struct SuffixTransition {
  /// Source state
  pub from: StateId,
  /// Destination state
  pub to: StateId,
  /// Template, empty for transitions without surface
  pub template: &'static str,
  /// Guard, including the one implied by the template
  pub condition: Option<Condition>,
  tokens: Vec<TemplateToken>,
  surface_cache: RwLock<HashMap<PhoneticAttributes, String>>,
}

impl SuffixTransition {
  /// Creates a transition. The template-implied condition is ANDed in front of `condition`.
  pub fn new(
    from: StateId,
    to: StateId,
    template: &'static str,
    condition: Option<Condition>,
  ) -> Self {
    let condition = match (template_condition(template), condition) {
      (Some(t), Some(c)) => Some(t.and(c)),
      (t, c) => t.or(c),
    };
    Self {
      from,
      to,
      template,
      condition,
      tokens: tokenize_template(template),
      surface_cache: RwLock::new(HashMap::new()),
    }
  }

  /// Same transition leaving another state. The surface cache starts empty.
  pub fn copy_from(&self, from: StateId) -> Self {
    Self {
      from,
      to: self.to,
      template: self.template,
      condition: self.condition.clone(),
      tokens: self.tokens.clone(),
      surface_cache: RwLock::new(HashMap::new()),
    }
  }

  /// Template tokens
  pub fn tokens(&self) -> &[TemplateToken] {
    &self.tokens
  }

  /// Last template token, if any.
  pub fn last_token(&self) -> Option<TemplateToken> {
    self.tokens.last().copied()
  }

  /// True if the template is not empty.
  pub fn has_surface_form(&self) -> bool {
    !self.tokens.is_empty()
  }

  /// Evaluates the guard.
  pub fn can_pass(&self, path: &SearchPath, graph: &MorphotacticsGraph) -> bool {
    self.condition.as_ref().is_none_or(|c| c.accept(path, graph))
  }

  /// Number of leaf predicates of the guard.
  pub fn condition_count(&self) -> usize {
    self.condition.as_ref().map_or(0, Condition::count)
  }

  /// Cached surface for an attribute set.
  pub fn cached_surface(&self, attrs: PhoneticAttributes) -> Option<String> {
    self.surface_cache.read().get(&attrs).cloned()
  }

  /// Stores a generated surface.
  pub fn cache_surface(&self, attrs: PhoneticAttributes, surface: String) {
    self.surface_cache.write().insert(attrs, surface);
  }

  /// Structural equality used to detect duplicate registrations.
  pub fn same_as(&self, other: &SuffixTransition) -> bool {
    self.from == other.from
      && self.to == other.to
      && self.template == other.template
      && self.condition == other.condition
  }
}

impl fmt::Debug for SuffixTransition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SuffixTransition")
      .field("from", &self.from)
      .field("to", &self.to)
      .field("template", &self.template)
      .field("condition", &self.condition.as_ref().map(ToString::to_string))
      .finish()
  }
}

/// Edge from a lexicon root into the graph.
///
/// Two stem transitions are equal when surface, item and attributes match.
#[derive(Debug, Clone)]
pub struct StemTransition {
  /// Surface of the stem as it appears in words (`kitab`, `burn`)
  pub surface: String,
  /// Lexicon item
  pub item: Arc<DictionaryItem>,
  /// Attributes after the stem
  pub attributes: PhoneticAttributes,
  /// Entry state
  pub to: StateId,
}

impl StemTransition {
  /// Creates a stem transition.
  pub fn new(
    surface: impl Into<String>,
    item: Arc<DictionaryItem>,
    attributes: PhoneticAttributes,
    to: StateId,
  ) -> Self {
    Self { surface: surface.into(), item, attributes, to }
  }
}

impl PartialEq for StemTransition {
  fn eq(&self, other: &Self) -> bool {
    self.surface == other.surface && self.item == other.item && self.attributes == other.attributes
  }
}

impl Eq for StemTransition {}

impl fmt::Display for StemTransition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[(Dict:{}):{} → {:?}]", self.item, self.surface, self.to)
  }
}

#[cfg(test)]
mod tests {
  use super::TemplateToken::*;
  use super::*;

  #[test]
  fn tokenizes_markers() {
    assert_eq!(tokenize_template("lAr"), vec![Letter('l'), AVowel, Letter('r')]);
    assert_eq!(tokenize_template("+yIm"), vec![Append('y'), IVowel, Letter('m')]);
    assert_eq!(tokenize_template(">dI"), vec![DevoiceFirst('d'), IVowel]);
    assert_eq!(tokenize_template("yAcA~k"), vec![
      Letter('y'),
      AVowel,
      Letter('c'),
      AVowel,
      LastVoiced('k')
    ]);
    assert_eq!(tokenize_template("yAcA!ğ").last(), Some(&LastNotVoiced('ğ')));
    assert_eq!(tokenize_template("+I"), vec![IVowel]);
    assert!(tokenize_template("").is_empty());
  }

  #[test]
  fn consonant_initial_templates_reject_expected_vowel() {
    let expected = Some(not_have(PhoneticAttribute::ExpectsVowel));
    assert_eq!(template_condition("lAr"), expected);
    assert_eq!(template_condition(">dI"), expected);
    assert_eq!(template_condition("+Im"), expected);
  }

  #[test]
  fn vowel_initial_templates_reject_expected_consonant() {
    let expected = Some(not_have(PhoneticAttribute::ExpectsConsonant));
    assert_eq!(template_condition("Im"), expected);
    assert_eq!(template_condition("+yA"), expected);
    assert_eq!(template_condition("A"), expected);
    assert_eq!(template_condition(""), None);
  }

  #[test]
  fn template_condition_comes_first() {
    let t = SuffixTransition::new(
      StateId(0),
      StateId(1),
      "lAr",
      Some(not_have(PhoneticAttribute::LastLetterVowel)),
    );
    assert_eq!(
      t.condition.map(|c| c.to_string()).as_deref(),
      Some("Not(HasPhoneticAttribute{ExpectsVowel}) AND Not(HasPhoneticAttribute{LastLetterVowel})")
    );
  }
}
