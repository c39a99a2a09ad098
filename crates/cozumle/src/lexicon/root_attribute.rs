//! Root attributes carried by lexicon items.

use std::fmt;
use std::str::FromStr;

use crate::errors::LexiconError;

macro_rules! root_attributes {
  ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
    /// Morphophonemic or lexical property of a root.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(u8)]
    #[allow(non_camel_case_types)]
    pub enum RootAttribute {
      $($(#[$doc])* $name,)+
    }

    impl RootAttribute {
      /// Every attribute in declaration order.
      pub const ALL: &'static [RootAttribute] = &[$(RootAttribute::$name,)+];

      /// Name as written in lexicon files.
      pub fn name(&self) -> &'static str {
        match self {
          $(RootAttribute::$name => stringify!($name),)+
        }
      }
    }
  };
}

root_attributes! {
  /// Aorist with I (gelir)
  Aorist_I,
  /// Aorist with A (yapar)
  Aorist_A,
  /// Last vowel drops before progressive (ara-yor → arıyor)
  ProgressiveVowelDrop,
  /// Passive with -In
  Passive_In,
  /// Causative with -t
  Causative_t,
  /// Last stop consonant voices before vowels (kitap → kitabı)
  Voicing,
  /// Explicitly no voicing
  NoVoicing,
  /// Suffixes harmonize with front vowels despite a back last vowel (saat → saati)
  InverseHarmony,
  /// Last consonant doubles before vowels (hak → hakkı)
  Doubling,
  /// Last vowel drops before vowels (burun → burnu)
  LastVowelDrop,
  /// Compound word ending with P3sg (zeytinyağı)
  CompoundP3sg,
  /// Takes no suffix
  NoSuffix,
  /// Inserts n before case suffixes
  NounConsInsert_n,
  /// No apostrophe when written with suffixes
  NoQuote,
  /// Root of a compound P3sg word
  CompoundP3sgRoot,
  /// Implicit reflexive verb
  Reflexive,
  /// Implicit reciprocal verb
  Reciprocal,
  /// Not reciprocal
  NonReciprocal,
  /// Extended lexicon item
  Ext,
  /// Created at runtime for unknown tokens
  Runtime,
  /// Placeholder item substituted by its reference item
  Dummy,
  /// Implicit dative
  ImplicitDative,
  /// Implicit plural (hayvanat)
  ImplicitPlural,
  /// Implicit P1sg (annem)
  ImplicitP1sg,
  /// Implicit P2sg
  ImplicitP2sg,
  /// Family member noun
  FamilyMember,
  /// Pronunciation was guessed
  PronunciationGuessed,
  /// Informal word
  Informal,
  /// English locale
  LocaleEn,
  /// Unknown
  Unknown,
}

impl RootAttribute {
  /// Attributes that make the stem surface differ from the root.
  pub const MODIFIERS: [RootAttribute; 7] = [
    RootAttribute::Doubling,
    RootAttribute::LastVowelDrop,
    RootAttribute::ProgressiveVowelDrop,
    RootAttribute::InverseHarmony,
    RootAttribute::Voicing,
    RootAttribute::CompoundP3sg,
    RootAttribute::CompoundP3sgRoot,
  ];

  const fn bit(self) -> u64 {
    1 << (self as u8)
  }
}

impl fmt::Display for RootAttribute {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for RootAttribute {
  type Err = LexiconError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .copied()
      .find(|a| a.name() == s)
      .ok_or_else(|| LexiconError::UnknownAttribute(s.to_string()))
  }
}

/// A set of [`RootAttribute`] stored as a bitmask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RootAttributes(u64);

impl RootAttributes {
  /// Empty set.
  pub const fn empty() -> Self {
    Self(0)
  }

  /// Builds a set from a slice.
  pub fn of(attrs: &[RootAttribute]) -> Self {
    attrs.iter().fold(Self::empty(), |s, a| s.with(*a))
  }

  /// Membership test.
  pub fn contains(&self, attr: RootAttribute) -> bool {
    self.0 & attr.bit() != 0
  }

  /// True if any of `attrs` is present.
  pub fn contains_any(&self, attrs: &[RootAttribute]) -> bool {
    attrs.iter().any(|a| self.contains(*a))
  }

  /// Adds an attribute in place.
  pub fn insert(&mut self, attr: RootAttribute) {
    self.0 |= attr.bit();
  }

  /// Removes an attribute in place.
  pub fn remove(&mut self, attr: RootAttribute) {
    self.0 &= !attr.bit();
  }

  /// Returns a copy with `attr` added.
  #[must_use]
  pub fn with(mut self, attr: RootAttribute) -> Self {
    self.insert(attr);
    self
  }

  /// True if no attribute is set.
  pub fn is_empty(&self) -> bool {
    self.0 == 0
  }

  /// Number of attributes.
  pub fn len(&self) -> usize {
    self.0.count_ones() as usize
  }

  /// Iterates over contained attributes in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = RootAttribute> + '_ {
    RootAttribute::ALL.iter().copied().filter(|a| self.contains(*a))
  }
}

impl fmt::Debug for RootAttributes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter().map(|a| a.name())).finish()
  }
}

impl FromIterator<RootAttribute> for RootAttributes {
  fn from_iter<T: IntoIterator<Item = RootAttribute>>(iter: T) -> Self {
    iter.into_iter().fold(Self::empty(), |s, a| s.with(a))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_parse_back() {
    for a in RootAttribute::ALL {
      assert_eq!(a.name().parse::<RootAttribute>().unwrap(), *a);
    }
    assert!("Voicin".parse::<RootAttribute>().is_err());
  }

  #[test]
  fn set_operations() {
    let mut set = RootAttributes::of(&[RootAttribute::Voicing, RootAttribute::NoQuote]);
    assert_eq!(set.len(), 2);
    assert!(set.contains_any(&RootAttribute::MODIFIERS));
    set.remove(RootAttribute::Voicing);
    assert!(!set.contains_any(&RootAttribute::MODIFIERS));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![RootAttribute::NoQuote]);
  }
}
