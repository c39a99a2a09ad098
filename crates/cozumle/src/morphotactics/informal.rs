//! Colloquial verb forms such as `geliyom`, `gelcem` and `gelmiycek`.
//!
//! These states hang off the formal verb states. Analyses passing through them carry
//! informal morphemes that map back to their formal counterparts.

use crate::alphabet::PhoneticAttribute;

use super::conditions::{has, not_have, root_surface_is_any};
use super::graph::MorphotacticsGraph;
use super::morpheme::Morphemes;
use super::state::StateId;
use super::states::States;

/// States reached only by informal suffixes.
#[allow(missing_docs)]
pub struct InformalStates {
  pub v_a1pl_st_inf: StateId,
  pub v_a1sg_st_inf: StateId,
  pub v_prog_yor_s_inf: StateId,
  pub v_fut_s_inf: StateId,
  pub v_fut_s_inf2: StateId,
  pub v_fut_s_inf3: StateId,
  pub v_ques_s_inf: StateId,
  pub v_neg_s_inf: StateId,
  pub v_unable_s_inf: StateId,
  pub v_opt_s_inf: StateId,
  pub v_opt_s_empty_inf: StateId,
  pub v_opt_s_empty_inf2: StateId,
}

impl InformalStates {
  /// Registers the informal states in `graph`.
  pub fn register(graph: &mut MorphotacticsGraph, m: &Morphemes) -> Self {
    Self {
      v_a1pl_st_inf: graph.terminal("vA1pl_ST_Inf", m.a1pl_informal),
      v_a1sg_st_inf: graph.terminal("vA1sg_ST_Inf", m.a1sg_informal),
      v_prog_yor_s_inf: graph.non_terminal("vProgYor_S_Inf", m.prog1_informal),
      v_fut_s_inf: graph.non_terminal("vFut_S_Inf", m.fut_informal),
      v_fut_s_inf2: graph.non_terminal("vFut_S_Inf2", m.fut_informal),
      v_fut_s_inf3: graph.non_terminal("vFut_S_Inf3", m.fut_informal),
      v_ques_s_inf: graph.non_terminal("vQues_S_Inf", m.ques_suffix_informal),
      v_neg_s_inf: graph.non_terminal("vNeg_S_Inf", m.neg_informal),
      v_unable_s_inf: graph.non_terminal("vUnable_S_Inf", m.unable_informal),
      v_opt_s_inf: graph.non_terminal("vOpt_S_Inf", m.opt_informal),
      v_opt_s_empty_inf: graph.non_terminal("vOpt_S_Empty_Inf", m.opt_informal),
      v_opt_s_empty_inf2: graph.non_terminal("vOpt_S_Empty_Inf2", m.opt_informal),
    }
  }
}

pub(super) fn connect_informal(g: &mut MorphotacticsGraph, s: &States, i: &InformalStates) {
  g.at(s.verb_root_s)
    .add_when(i.v_prog_yor_s_inf, "Iyo", not_have(PhoneticAttribute::LastLetterVowel));
  g.at(s.verb_root_vowel_drop_s).add(i.v_prog_yor_s_inf, "Iyo");
  g.at(i.v_prog_yor_s_inf)
    .add(s.v_a1sg_st, "m")
    .add(s.v_a2sg_st, "sun")
    .add(s.v_a2sg_st, "n")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "z")
    .add(s.v_a2pl_st, "sunuz")
    .add(s.v_a2pl_st, "nuz")
    .add(s.v_a3pl_st, "lar")
    .add(s.v_cond_s, "sa")
    .add(s.v_past_after_tense_s, "du")
    .add(s.v_narr_after_tense_s, "muş")
    .add(s.v_cop_before_a3pl_s, "dur")
    .add(s.v_while_s, "ken");
  g.at(s.v_neg_prog1_s).add(i.v_prog_yor_s_inf, "Iyo");
  g.at(s.v_unable_prog1_s).add(i.v_prog_yor_s_inf, "Iyo");
  let di_yi_condition = root_surface_is_any(&["di", "yi"]);
  g.at(s.v_de_ye_root_s).add_when(i.v_prog_yor_s_inf, "yo", di_yi_condition);
  g.at(s.v_opt_s).add(i.v_a1pl_st_inf, "k");
  g.at(s.verb_root_s)
    .add(i.v_neg_s_inf, "mI")
    .add(i.v_unable_s_inf, "+yAmI")
    .add(i.v_fut_s_inf, "+ycA~k")
    .add(i.v_fut_s_inf, "+ycA!ğ")
    .add(i.v_fut_s_inf2, "+ycA")
    .add(i.v_fut_s_inf2, "+yIcA")
    .add(i.v_fut_s_inf2, "+yAcA");
  g.at(i.v_neg_s_inf)
    .add(s.v_fut_s, "yAcA~k")
    .add(s.v_fut_s, "yAcA!ğ")
    .add(i.v_fut_s_inf, "ycA~k")
    .add(i.v_fut_s_inf, "ycA!ğ")
    .add(i.v_fut_s_inf2, "ycA");
  g.at(i.v_unable_s_inf)
    .add(s.v_fut_s, "yAcA~k")
    .add(s.v_fut_s, "yAcA!ğ")
    .add(i.v_fut_s_inf, "ycA~k")
    .add(i.v_fut_s_inf, "ycA!ğ")
    .add(i.v_fut_s_inf2, "ycA");
  g.at(s.v_neg_s).add(i.v_fut_s_inf, "yAcA").add(i.v_fut_s_inf, "yAcAk");
  g.at(s.v_unable_s).add(i.v_fut_s_inf, "yAcA").add(i.v_fut_s_inf, "yAcAk");
  g.at(i.v_fut_s_inf)
    .add(s.v_a1sg_st, "+Im")
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "Iz")
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr");
  g.at(i.v_fut_s_inf2)
    .add(s.v_a1sg_st, "m")
    .add(s.v_a2sg_st, "n")
    .add(s.v_a1pl_st, "z")
    .add(s.v_a1pl_st, "nIz");
  g.at(i.v_fut_s_inf)
    .add(s.v_cond_s, "sA")
    .add(s.v_past_after_tense_s, "tI")
    .add(s.v_narr_after_tense_s, "mIş")
    .add(s.v_cop_before_a3pl_s, "tIr")
    .add(s.v_while_s, "ken");
  g.at(s.verb_root_s).add_when(i.v_opt_s_inf, "I", has(PhoneticAttribute::LastLetterConsonant));
  g.at(s.verb_root_vowel_drop_s).add(i.v_opt_s_inf, "I");
  g.at(s.verb_root_s)
    .add_empty_when(i.v_opt_s_empty_inf, has(PhoneticAttribute::LastLetterVowel));
  g.at(i.v_opt_s_inf).add(i.v_a1sg_st_inf, "+yIm").add(i.v_a1sg_st_inf, "+yim");
  g.at(i.v_opt_s_empty_inf).add(i.v_a1sg_st_inf, "+yim");
}
