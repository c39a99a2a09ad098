//! Turkic letter table.

/// A letter of the Turkish alphabet with its phonological features.
///
/// Uppercase letters share the features of their lowercase forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurkicLetter {
  /// Character value
  pub ch: char,
  vowel: bool,
  frontal: bool,
  rounded: bool,
  voiceless: bool,
  continuant: bool,
}

impl TurkicLetter {
  const fn new(
    ch: char,
    vowel: bool,
    frontal: bool,
    rounded: bool,
    voiceless: bool,
    continuant: bool,
  ) -> Self {
    Self {
      ch,
      vowel,
      frontal,
      rounded,
      voiceless,
      continuant,
    }
  }

  /// Looks up a letter. Returns `None` for characters outside the alphabet.
  pub fn of(c: char) -> Option<Self> {
    //                    vowel  front  round  vless  cont
    let l = match c {
      'a' | 'A' => Self::new(c, true, false, false, false, false),
      'e' | 'E' => Self::new(c, true, true, false, false, false),
      'ı' | 'I' => Self::new(c, true, false, false, false, false),
      'i' | 'İ' => Self::new(c, true, true, false, false, false),
      'o' | 'O' => Self::new(c, true, false, true, false, false),
      'ö' | 'Ö' => Self::new(c, true, true, true, false, false),
      'u' | 'U' => Self::new(c, true, false, true, false, false),
      'ü' | 'Ü' => Self::new(c, true, true, true, false, false),
      'â' | 'Â' => Self::new(c, true, false, false, false, false),
      'î' | 'Î' => Self::new(c, true, true, false, false, false),
      'û' | 'Û' => Self::new(c, true, true, true, false, false),
      'ç' | 'Ç' | 'k' | 'K' | 'p' | 'P' | 't' | 'T' => {
        Self::new(c, false, false, false, true, false)
      }
      'f' | 'F' | 'h' | 'H' | 's' | 'S' | 'ş' | 'Ş' => {
        Self::new(c, false, false, false, true, true)
      }
      'ğ' | 'Ğ' | 'j' | 'J' | 'l' | 'L' | 'm' | 'M' | 'n' | 'N' | 'r' | 'R' | 'v' | 'V' | 'y'
      | 'Y' | 'z' | 'Z' => Self::new(c, false, false, false, false, true),
      'b' | 'B' | 'c' | 'C' | 'd' | 'D' | 'g' | 'G' | 'q' | 'Q' | 'w' | 'W' | 'x' | 'X' => {
        Self::new(c, false, false, false, false, false)
      }
      _ => return None,
    };
    Some(l)
  }

  /// Vowel flag
  pub fn is_vowel(&self) -> bool {
    self.vowel
  }

  /// Consonant flag
  pub fn is_consonant(&self) -> bool {
    !self.vowel
  }

  /// Front vowel (e, i, ö, ü, î, û)
  pub fn is_frontal(&self) -> bool {
    self.frontal
  }

  /// Rounded vowel (o, ö, u, ü, û)
  pub fn is_rounded(&self) -> bool {
    self.rounded
  }

  /// Voiceless consonant (ç, f, h, k, p, s, ş, t)
  pub fn is_voiceless(&self) -> bool {
    self.voiceless
  }

  /// Voiceless and not continuant (ç, k, p, t)
  pub fn is_stop_consonant(&self) -> bool {
    self.voiceless && !self.continuant
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn vowels_have_harmony_features() {
    let e = TurkicLetter::of('e').unwrap();
    assert!(e.is_vowel() && e.is_frontal() && !e.is_rounded());

    let u = TurkicLetter::of('u').unwrap();
    assert!(u.is_vowel() && !u.is_frontal() && u.is_rounded());

    let upper = TurkicLetter::of('Ö').unwrap();
    assert!(upper.is_frontal() && upper.is_rounded());
  }

  #[test]
  fn stop_consonants_are_voiceless_non_continuants() {
    for c in ['ç', 'k', 'p', 't'] {
      assert!(TurkicLetter::of(c).unwrap().is_stop_consonant(), "{c}");
    }
    for c in ['f', 'h', 's', 'ş'] {
      let l = TurkicLetter::of(c).unwrap();
      assert!(l.is_voiceless() && !l.is_stop_consonant(), "{c}");
    }
    assert!(!TurkicLetter::of('b').unwrap().is_voiceless());
  }

  #[test]
  fn unknown_characters_are_not_letters() {
    assert!(TurkicLetter::of('1').is_none());
    assert!(TurkicLetter::of('é').is_none());
    assert!(TurkicLetter::of('\'').is_none());
  }
}
