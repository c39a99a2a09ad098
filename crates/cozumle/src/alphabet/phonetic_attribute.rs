//! Phonetic attributes and their propagation over surface text.

use std::fmt;

use super::turkish_alphabet as alphabet;

/// A derived property of the text processed so far.
///
/// Vowel harmony and voicing rules consult these flags when choosing suffix allomorphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PhoneticAttribute {
  /// Ends with a vowel
  LastLetterVowel,
  /// Ends with a consonant
  LastLetterConsonant,
  /// Last vowel is a front vowel
  LastVowelFrontal,
  /// Last vowel is a back vowel
  LastVowelBack,
  /// Last vowel is rounded
  LastVowelRounded,
  /// Last vowel is unrounded
  LastVowelUnrounded,
  /// Ends with a voiceless consonant
  LastLetterVoiceless,
  /// Ends with a voiced letter
  LastLetterVoiced,
  /// Ends with a voiceless stop (ç, k, p, t)
  LastLetterVoicelessStop,
  /// Starts with a vowel
  FirstLetterVowel,
  /// Starts with a consonant
  FirstLetterConsonant,
  /// No vowel in the text
  HasNoVowel,
  /// The next suffix must start with a vowel
  ExpectsVowel,
  /// The next suffix must start with a consonant
  ExpectsConsonant,
  /// Modified pronoun stem (ban, san)
  ModifiedPronoun,
  /// Unmodified pronoun stem (ben, sen)
  UnModifiedPronoun,
  /// The last letter of the root was dropped
  LastLetterDropped,
  /// The word may not end here
  CannotTerminate,
}

impl PhoneticAttribute {
  /// Every attribute in declaration order.
  pub const ALL: [PhoneticAttribute; 18] = [
    Self::LastLetterVowel,
    Self::LastLetterConsonant,
    Self::LastVowelFrontal,
    Self::LastVowelBack,
    Self::LastVowelRounded,
    Self::LastVowelUnrounded,
    Self::LastLetterVoiceless,
    Self::LastLetterVoiced,
    Self::LastLetterVoicelessStop,
    Self::FirstLetterVowel,
    Self::FirstLetterConsonant,
    Self::HasNoVowel,
    Self::ExpectsVowel,
    Self::ExpectsConsonant,
    Self::ModifiedPronoun,
    Self::UnModifiedPronoun,
    Self::LastLetterDropped,
    Self::CannotTerminate,
  ];

  /// Short form used in debug output.
  pub fn short_form(&self) -> &'static str {
    match self {
      Self::LastLetterVowel => "LLV",
      Self::LastLetterConsonant => "LLC",
      Self::LastVowelFrontal => "LVF",
      Self::LastVowelBack => "LVB",
      Self::LastVowelRounded => "LVR",
      Self::LastVowelUnrounded => "LVuR",
      Self::LastLetterVoiceless => "LLVless",
      Self::LastLetterVoiced => "LLVo",
      Self::LastLetterVoicelessStop => "LLVlessStop",
      Self::FirstLetterVowel => "FLV",
      Self::FirstLetterConsonant => "FLC",
      Self::HasNoVowel => "NoVow",
      Self::ExpectsVowel => "EV",
      Self::ExpectsConsonant => "EC",
      Self::ModifiedPronoun => "MP",
      Self::UnModifiedPronoun => "UMP",
      Self::LastLetterDropped => "LWD",
      Self::CannotTerminate => "CNT",
    }
  }

  const fn bit(self) -> u32 {
    1 << (self as u8)
  }
}

/// A set of [`PhoneticAttribute`] stored as a bitmask.
///
/// `Copy`, so every search path owns its attributes without sharing.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhoneticAttributes(u32);

impl PhoneticAttributes {
  /// Empty set.
  pub const fn empty() -> Self {
    Self(0)
  }

  /// Builds a set from a slice.
  pub fn of(attrs: &[PhoneticAttribute]) -> Self {
    attrs.iter().fold(Self::empty(), |s, a| s.with(*a))
  }

  /// Membership test.
  pub fn contains(&self, attr: PhoneticAttribute) -> bool {
    self.0 & attr.bit() != 0
  }

  /// Adds an attribute in place.
  pub fn insert(&mut self, attr: PhoneticAttribute) {
    self.0 |= attr.bit();
  }

  /// Removes an attribute in place.
  pub fn remove(&mut self, attr: PhoneticAttribute) {
    self.0 &= !attr.bit();
  }

  /// Returns a copy with `attr` added.
  #[must_use]
  pub fn with(mut self, attr: PhoneticAttribute) -> Self {
    self.insert(attr);
    self
  }

  /// Returns a copy with `attr` removed.
  #[must_use]
  pub fn without(mut self, attr: PhoneticAttribute) -> Self {
    self.remove(attr);
    self
  }

  /// True if no attribute is set.
  pub fn is_empty(&self) -> bool {
    self.0 == 0
  }

  /// Iterates over contained attributes in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = PhoneticAttribute> + '_ {
    PhoneticAttribute::ALL.into_iter().filter(|a| self.contains(*a))
  }
}

impl fmt::Debug for PhoneticAttributes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter().map(|a| a.short_form())).finish()
  }
}

impl FromIterator<PhoneticAttribute> for PhoneticAttributes {
  fn from_iter<T: IntoIterator<Item = PhoneticAttribute>>(iter: T) -> Self {
    iter.into_iter().fold(Self::empty(), |s, a| s.with(a))
  }
}

/// Computes the attributes of `seq` appended after text whose attributes are `predecessor`.
///
/// Harmony attributes come from the last vowel of `seq`. When `seq` has no vowel they are
/// carried over from `predecessor`.
pub fn morphemic_attributes(seq: &str, predecessor: PhoneticAttributes) -> PhoneticAttributes {
  use PhoneticAttribute::*;

  if seq.is_empty() {
    return predecessor;
  }

  let mut attrs = if alphabet::contains_vowel(seq) {
    let mut attrs = PhoneticAttributes::empty();
    let last = alphabet::last_letter(seq);
    if last.is_some_and(|l| l.is_vowel()) {
      attrs.insert(LastLetterVowel);
    } else {
      attrs.insert(LastLetterConsonant);
    }

    let last_vowel = match last {
      Some(l) if l.is_vowel() => Some(l),
      _ => alphabet::last_vowel(seq),
    };
    if last_vowel.is_some_and(|v| v.is_frontal()) {
      attrs.insert(LastVowelFrontal);
    } else {
      attrs.insert(LastVowelBack);
    }
    if last_vowel.is_some_and(|v| v.is_rounded()) {
      attrs.insert(LastVowelRounded);
    } else {
      attrs.insert(LastVowelUnrounded);
    }

    if alphabet::first_letter(seq).is_some_and(|l| l.is_vowel()) {
      attrs.insert(FirstLetterVowel);
    } else {
      attrs.insert(FirstLetterConsonant);
    }
    attrs
  } else {
    let mut attrs = predecessor;
    attrs.insert(LastLetterConsonant);
    attrs.insert(FirstLetterConsonant);
    attrs.insert(HasNoVowel);
    attrs.remove(LastLetterVowel);
    attrs.remove(ExpectsConsonant);
    attrs
  };

  match alphabet::last_letter(seq) {
    Some(l) if l.is_voiceless() => {
      attrs.insert(LastLetterVoiceless);
      if l.is_stop_consonant() {
        attrs.insert(LastLetterVoicelessStop);
      }
    }
    _ => attrs.insert(LastLetterVoiced),
  }
  attrs
}

#[cfg(test)]
mod tests {
  use super::PhoneticAttribute::*;
  use super::*;

  #[test]
  fn bitset_operations() {
    let mut set = PhoneticAttributes::of(&[LastLetterVowel, CannotTerminate]);
    assert!(set.contains(LastLetterVowel));
    assert!(set.contains(CannotTerminate));
    set.remove(CannotTerminate);
    assert!(!set.contains(CannotTerminate));
    assert_eq!(set.iter().count(), 1);
    assert!(PhoneticAttributes::empty().is_empty());
    assert_eq!(format!("{:?}", set), "{\"LLV\"}");
  }

  #[test]
  fn attributes_of_consonant_final_root() {
    let attrs = morphemic_attributes("kitap", PhoneticAttributes::empty());
    assert!(attrs.contains(LastLetterConsonant));
    assert!(attrs.contains(LastVowelBack));
    assert!(attrs.contains(LastVowelUnrounded));
    assert!(attrs.contains(FirstLetterConsonant));
    assert!(attrs.contains(LastLetterVoiceless));
    assert!(attrs.contains(LastLetterVoicelessStop));
  }

  #[test]
  fn rounding_follows_the_last_vowel() {
    let attrs = morphemic_attributes("okul", PhoneticAttributes::empty());
    assert!(attrs.contains(LastVowelRounded));
    assert!(attrs.contains(LastLetterVoiced));

    let attrs = morphemic_attributes("göz", PhoneticAttributes::empty());
    assert!(attrs.contains(LastVowelFrontal));
    assert!(attrs.contains(LastVowelRounded));
  }

  #[test]
  fn vowelless_suffix_keeps_predecessor_harmony() {
    let pred = morphemic_attributes("ev", PhoneticAttributes::empty()).with(ExpectsConsonant);
    let attrs = morphemic_attributes("m", pred);
    assert!(attrs.contains(LastVowelFrontal));
    assert!(attrs.contains(HasNoVowel));
    assert!(!attrs.contains(ExpectsConsonant));
    assert!(!attrs.contains(LastLetterVowel));
  }

  #[test]
  fn empty_sequence_copies_predecessor() {
    let pred = PhoneticAttributes::of(&[LastVowelBack, CannotTerminate]);
    assert_eq!(morphemic_attributes("", pred), pred);
  }
}
