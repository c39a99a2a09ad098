//! Morphemes and the morpheme registry.

use std::collections::HashMap;
use std::fmt;

use crate::errors::MorphotacticsError;
use crate::lexicon::PrimaryPos;

/// Index of a morpheme in [`Morphemes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MorphemeId(u16);

impl MorphemeId {
  /// Position in the registry
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// Abstract grammatical unit (plural, past tense, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
  /// Long name, e.g. `FirstPersonSingular`
  pub name: &'static str,
  /// Short id used in analysis strings, e.g. `A1sg`
  pub id: &'static str,
  /// Starts a new derivation group
  pub derivational: bool,
  /// Colloquial variant of another morpheme
  pub informal: bool,
  /// Part of speech for POS root morphemes (`Noun`, `Verb`, ...)
  pub pos: Option<PrimaryPos>,
  /// Formal counterpart of an informal morpheme
  pub mapped_morpheme: Option<MorphemeId>,
}

impl fmt::Display for Morpheme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.name, self.id)
  }
}

#[derive(Default)]
struct Registry {
  all: Vec<Morpheme>,
  by_id: HashMap<&'static str, MorphemeId>,
}

impl Registry {
  fn push(&mut self, morpheme: Morpheme) -> MorphemeId {
    let id = MorphemeId(self.all.len() as u16);
    self.by_id.insert(morpheme.id, id);
    self.all.push(morpheme);
    id
  }

  fn instance(&mut self, name: &'static str, id: &'static str) -> MorphemeId {
    self.push(Morpheme {
      name,
      id,
      derivational: false,
      informal: false,
      pos: None,
      mapped_morpheme: None,
    })
  }

  fn pos(&mut self, name: &'static str, id: &'static str, pos: PrimaryPos) -> MorphemeId {
    self.push(Morpheme {
      name,
      id,
      derivational: false,
      informal: false,
      pos: Some(pos),
      mapped_morpheme: None,
    })
  }

  fn derivational(&mut self, name: &'static str, id: &'static str) -> MorphemeId {
    self.push(Morpheme {
      name,
      id,
      derivational: true,
      informal: false,
      pos: None,
      mapped_morpheme: None,
    })
  }

  fn informal(&mut self, id: &'static str, mapped: MorphemeId) -> MorphemeId {
    self.push(Morpheme {
      name: id,
      id,
      derivational: false,
      informal: true,
      pos: None,
      mapped_morpheme: Some(mapped),
    })
  }
}

macro_rules! morphemes {
  ($($field:ident = $kind:ident($($arg:expr),+);)+) => {
    /// Every morpheme of the morphotactics, as named fields plus an id lookup.
    ///
    /// Built once and shared read-only by the graph, the analyzer and the generator.
    pub struct Morphemes {
      $(
        #[allow(missing_docs)]
        pub $field: MorphemeId,
      )+
      registry: Registry,
    }

    impl Morphemes {
      /// Registers every morpheme.
      pub fn new() -> Self {
        let mut registry = Registry::default();
        $(let $field = registry.$kind($($arg),+);)+
        Self { $($field,)+ registry }
      }
    }
  };
}

morphemes! {
  unknown = instance("Unknown", "Unknown");
  root = instance("Root", "Root");
  noun = pos("Noun", "Noun", PrimaryPos::Noun);
  adj = pos("Adjective", "Adj", PrimaryPos::Adjective);
  verb = pos("Verb", "Verb", PrimaryPos::Verb);
  pron = pos("Pronoun", "Pron", PrimaryPos::Pronoun);
  adv = pos("Adverb", "Adv", PrimaryPos::Adverb);
  conj = pos("Conjunction", "Conj", PrimaryPos::Conjunction);
  punc = pos("Punctuation", "Punc", PrimaryPos::Punctuation);
  ques = pos("Question", "Ques", PrimaryPos::Question);
  postp = pos("PostPositive", "Postp", PrimaryPos::PostPositive);
  det = pos("Determiner", "Det", PrimaryPos::Determiner);
  num = pos("Numeral", "Num", PrimaryPos::Numeral);
  dup = pos("Duplicator", "Dup", PrimaryPos::Duplicator);
  interj = pos("Interjection", "Interj", PrimaryPos::Interjection);
  a1sg = instance("FirstPersonSingular", "A1sg");
  a2sg = instance("SecondPersonSingular", "A2sg");
  a3sg = instance("ThirdPersonSingular", "A3sg");
  a1pl = instance("FirstPersonPlural", "A1pl");
  a2pl = instance("SecondPersonPlural", "A2pl");
  a3pl = instance("ThirdPersonPlural", "A3pl");
  pnon = instance("NoPosession", "Pnon");
  p1sg = instance("FirstPersonSingularPossessive", "P1sg");
  p2sg = instance("SecondPersonSingularPossessive", "P2sg");
  p3sg = instance("ThirdPersonSingularPossessive", "P3sg");
  p1pl = instance("FirstPersonPluralPossessive", "P1pl");
  p2pl = instance("SecondPersonPluralPossessive", "P2pl");
  p3pl = instance("ThirdPersonPluralPossessive", "P3pl");
  nom = instance("Nominal", "Nom");
  dat = instance("Dative", "Dat");
  acc = instance("Accusative", "Acc");
  abl = instance("Ablative", "Abl");
  loc = instance("Locative", "Loc");
  ins = instance("Instrumental", "Ins");
  genitive = instance("Genitive", "Gen");
  equ = instance("Equ", "Equ");
  dim = derivational("Diminutive", "Dim");
  ness = derivational("Ness", "Ness");
  with = derivational("With", "With");
  without = derivational("Without", "Without");
  related = derivational("Related", "Related");
  just_like = derivational("JustLike", "JustLike");
  rel = derivational("Relation", "Rel");
  agt = derivational("Agentive", "Agt");
  become_ = derivational("Become", "Become");
  acquire = derivational("Acquire", "Acquire");
  ly = derivational("Ly", "Ly");
  caus = derivational("Causative", "Caus");
  recip = derivational("Reciprocal", "Recip");
  reflex = derivational("Reflexive", "Reflex");
  able = derivational("Ability", "Able");
  pass = derivational("Passive", "Pass");
  inf1 = derivational("Infinitive1", "Inf1");
  inf2 = derivational("Infinitive2", "Inf2");
  inf3 = derivational("Infinitive3", "Inf3");
  act_of = derivational("ActOf", "ActOf");
  past_part = derivational("PastParticiple", "PastPart");
  narr_part = derivational("NarrativeParticiple", "NarrPart");
  fut_part = derivational("FutureParticiple", "FutPart");
  pres_part = derivational("PresentParticiple", "PresPart");
  aor_part = derivational("AoristParticiple", "AorPart");
  not_state = derivational("NotState", "NotState");
  feel_like = derivational("FeelLike", "FeelLike");
  ever_since = derivational("EverSince", "EverSince");
  repeat = derivational("Repeat", "Repeat");
  almost = derivational("Almost", "Almost");
  hastily = derivational("Hastily", "Hastily");
  stay = derivational("Stay", "Stay");
  start = derivational("Start", "Start");
  as_if = derivational("AsIf", "AsIf");
  while_ = derivational("While", "While");
  when = derivational("When", "When");
  since_doing_so = derivational("SinceDoingSo", "SinceDoingSo");
  as_long_as = derivational("AsLongAs", "AsLongAs");
  by_doing_so = derivational("ByDoingSo", "ByDoingSo");
  adamantly = derivational("Adamantly", "Adamantly");
  after_doing_so = derivational("AfterDoingSo", "AfterDoingSo");
  without_having_done_so = derivational("WithoutHavingDoneSo", "WithoutHavingDoneSo");
  without_being_able_to_have_done_so =
    derivational("WithoutBeingAbleToHaveDoneSo", "WithoutBeingAbleToHaveDoneSo");
  zero = derivational("Zero", "Zero");
  cop = instance("Copula", "Cop");
  neg = instance("Negative", "Neg");
  unable = instance("Unable", "Unable");
  pres = instance("PresentTense", "Pres");
  past = instance("PastTense", "Past");
  narr = instance("NarrativeTense", "Narr");
  cond = instance("Condition", "Cond");
  prog1 = instance("Progressive1", "Prog1");
  prog2 = instance("Progressive2", "Prog2");
  aor = instance("Aorist", "Aor");
  fut = instance("Future", "Fut");
  imp = instance("Imparative", "Imp");
  opt = instance("Optative", "Opt");
  desr = instance("Desire", "Desr");
  neces = instance("Necessity", "Neces");
  a1pl_informal = informal("A1pl_Informal", a1pl);
  a1sg_informal = informal("A1sg_Informal", a1sg);
  prog1_informal = informal("Prog1_Informal", prog1);
  fut_informal = informal("Fut_Informal", fut);
  ques_suffix_informal = informal("QuesSuffix_Informal", ques);
  neg_informal = informal("Neg_Informal", neg);
  unable_informal = informal("Unable_Informal", unable);
  opt_informal = informal("Opt_Informal", opt);
}

impl Default for Morphemes {
  fn default() -> Self {
    Self::new()
  }
}

impl Morphemes {
  /// Morpheme data
  pub fn get(&self, id: MorphemeId) -> &Morpheme {
    &self.registry.all[id.index()]
  }

  /// Short id of a morpheme (`A3pl`).
  pub fn id_of(&self, id: MorphemeId) -> &'static str {
    self.get(id).id
  }

  /// Looks up a morpheme by its short id.
  pub fn by_id(&self, id: &str) -> Option<MorphemeId> {
    self.registry.by_id.get(id).copied()
  }

  /// Same as [`Morphemes::by_id`] but fails with [`MorphotacticsError::UnknownMorpheme`].
  pub fn require(&self, id: &str) -> Result<MorphemeId, MorphotacticsError> {
    self.by_id(id).ok_or_else(|| MorphotacticsError::UnknownMorpheme(id.to_string()))
  }

  /// Resolves a list of short ids.
  pub fn require_all<S: AsRef<str>>(
    &self,
    ids: &[S],
  ) -> Result<Vec<MorphemeId>, MorphotacticsError> {
    ids.iter().map(|id| self.require(id.as_ref())).collect()
  }

  /// Number of registered morphemes
  pub fn len(&self) -> usize {
    self.registry.all.len()
  }

  /// Always false, the registry is never empty.
  pub fn is_empty(&self) -> bool {
    self.registry.all.is_empty()
  }

  /// All morphemes with their ids.
  pub fn iter(&self) -> impl Iterator<Item = (MorphemeId, &Morpheme)> {
    self.registry.all.iter().enumerate().map(|(i, m)| (MorphemeId(i as u16), m))
  }
}
