//! Verbal transitions, the question particle and the `imek` copula.

use crate::alphabet::PhoneticAttribute;
use crate::lexicon::RootAttribute;

use super::conditions::{
  HAS_TAIL, HAS_SURFACE, contains_morpheme, current_group_contains_any, has, has_no_surface,
  has_root, last_derivation_is, last_derivation_is_any, not_have, not_have_root,
  previous_morpheme_is, previous_morpheme_is_any, previous_morpheme_is_not, previous_state_is_any,
  root_surface_is, root_surface_is_any,
};
use super::graph::MorphotacticsGraph;
use super::morpheme::Morphemes;
use super::states::States;

/// Verb roots: voice and ability derivations, negation, tense, mood, person and the
/// participle/converb derivations.
pub(super) fn connect_verbs(g: &mut MorphotacticsGraph, m: &Morphemes, s: &States) {
  g.at(s.verb_root_s).add_empty(s.v_imp_s);
  g.at(s.v_imp_s)
    .add_empty(s.v_a2sg_st)
    .add(s.v_a2sg_st, "sAnA")
    .add(s.v_a3sg_st, "sIn")
    .add(s.v_a2pl_st, "+yIn")
    .add(s.v_a2pl_st, "+yInIz")
    .add(s.v_a2pl_st, "sAnIzA")
    .add(s.v_a3pl_st, "sInlAr");
  g.at(s.verb_root_s)
    .add_when(
      s.v_caus_t_s,
      "t",
      has_root(RootAttribute::Causative_t)
        .or(last_derivation_is(s.v_caus_tir_s))
        .and_not(last_derivation_is_any(&[s.v_caus_t_s, s.v_pass_s, s.v_able_s])),
    )
    .add_when(
      s.v_caus_tir_s,
      ">dIr",
      has(PhoneticAttribute::LastLetterConsonant)
        .and_not(last_derivation_is_any(&[s.v_caus_tir_s, s.v_pass_s, s.v_able_s])),
    );
  g.at(s.v_caus_t_s).add_empty(s.verb_root_s);
  g.at(s.v_caus_tir_s).add_empty(s.verb_root_s);
  g.at(s.verb_root_s)
    .add_when(s.v_prog_yor_s, "Iyor", not_have(PhoneticAttribute::LastLetterVowel));
  g.at(s.verb_root_vowel_drop_s).add(s.v_prog_yor_s, "Iyor");
  g.at(s.v_prog_yor_s)
    .add(s.v_a1sg_st, "um")
    .add(s.v_a2sg_st, "sun")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "uz")
    .add(s.v_a2pl_st, "sunuz")
    .add(s.v_a3pl_st, "lar")
    .add(s.v_cond_s, "sa")
    .add(s.v_past_after_tense_s, "du")
    .add(s.v_narr_after_tense_s, "muş")
    .add(s.v_cop_before_a3pl_s, "dur")
    .add(s.v_while_s, "ken");
  g.at(s.verb_root_s).add(s.v_prog_makta_s, "mAktA");
  g.at(s.v_prog_makta_s)
    .add(s.v_a1sg_st, "yIm")
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "yIz")
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_cond_s, "ysA")
    .add(s.v_past_after_tense_s, "ydI")
    .add(s.v_narr_after_tense_s, "ymIş")
    .add(s.v_cop_before_a3pl_s, "dIr")
    .add(s.v_while_s, "yken");
  g.at(s.verb_root_s)
    .add_when(s.v_aor_s, "Ir", has_root(RootAttribute::Aorist_I).or(HAS_SURFACE))
    .add_when(s.v_aor_s, "Ar", has_root(RootAttribute::Aorist_A).and(has_no_surface()));
  g.at(s.v_aor_s)
    .add(s.v_a1sg_st, "Im")
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "Iz")
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_past_after_tense_s, "dI")
    .add(s.v_narr_after_tense_s, "mIş")
    .add(s.v_cond_s, "sA")
    .add(s.v_cop_before_a3pl_s, "dIr")
    .add(s.v_while_s, "ken");
  g.at(s.verb_root_s).add_when(s.v_neg_s, "mA", previous_morpheme_is_not(m.able));
  g.at(s.v_neg_s)
    .add_empty(s.v_imp_s)
    .add(s.v_past_s, "dI")
    .add(s.v_fut_s, "yAcA~k")
    .add(s.v_fut_s, "yAcA!ğ")
    .add(s.v_narr_s, "mIş")
    .add(s.v_prog_makta_s, "mAktA")
    .add(s.v_opt_s, "yA")
    .add(s.v_desr_s, "sA")
    .add(s.v_neces_s, "mAlI")
    .add(s.v_inf1_s, "mAk")
    .add(s.v_inf2_s, "mA")
    .add(s.v_inf3_s, "yIş")
    .add(s.v_act_of_s, "mAcA")
    .add(s.v_past_part_s, "dI~k")
    .add(s.v_past_part_s, "dI!ğ")
    .add(s.v_fut_part_s, "yAcA~k")
    .add(s.v_fut_part_s, "yAcA!ğ")
    .add(s.v_pres_part_s, "yAn")
    .add(s.v_narr_part_s, "mIş")
    .add(s.v_since_doing_so_s, "yAlI")
    .add(s.v_by_doing_so_s, "yArAk")
    .add(s.v_hastily_s, "yIver")
    .add(s.v_ever_since_s, "yAgör")
    .add(s.v_after_doing_s, "yIp")
    .add(s.v_when_s, "yIncA")
    .add(s.v_as_long_as_s, "dIkçA")
    .add(s.v_not_state_s, "mAzlI~k")
    .add(s.v_not_state_s, "mAzlI!ğ")
    .add(s.v_feel_like_s, "yAsI");
  g.at(s.verb_root_s).add(s.v_neg_prog1_s, "m");
  g.at(s.v_neg_prog1_s).add(s.v_prog_yor_s, "Iyor");
  g.at(s.v_neg_s).add(s.v_aor_neg_s, "z").add_empty(s.v_aor_neg_empty_s);
  g.at(s.v_aor_neg_s)
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_past_after_tense_s, "dI")
    .add(s.v_narr_after_tense_s, "mIş")
    .add(s.v_cond_s, "sA")
    .add(s.v_cop_before_a3pl_s, "dIr")
    .add(s.v_while_s, "ken");
  g.at(s.v_aor_neg_empty_s).add(s.v_a1sg_st, "m").add(s.v_a1pl_st, "yIz");
  g.at(s.v_neg_s).add(s.v_aor_part_neg_s, "z");
  g.at(s.v_aor_part_neg_s).add_empty(s.adj_after_verb_st);
  g.at(s.verb_root_s).add_when(s.v_able_s, "+yAbil", !last_derivation_is(s.v_able_s));
  g.at(s.v_able_s).add_empty(s.verb_root_s);
  g.at(s.v_able_neg_s).add_empty(s.v_able_neg_deriv_root_s);
  g.at(s.v_able_neg_deriv_root_s).add(s.v_neg_s, "mA").add(s.v_neg_prog1_s, "m");
  g.at(s.v_neg_s).add(s.v_able_s, "yAbil");
  g.at(s.verb_root_s).add_when(s.v_unable_s, "+yAmA", previous_morpheme_is_not(m.able));
  g.copy_outgoing_transitions(s.v_unable_s, s.v_neg_s);
  g.at(s.verb_root_s).add(s.v_unable_prog1_s, "+yAm");
  g.at(s.v_unable_prog1_s).add(s.v_prog_yor_s, "Iyor");
  g.at(s.verb_root_s).add(s.v_inf1_s, "mA~k");
  g.at(s.v_inf1_s).add_empty(s.noun_inf1_root_s);
  g.at(s.verb_root_s).add(s.v_inf2_s, "mA");
  g.at(s.v_inf2_s).add_empty(s.noun_s);
  g.at(s.verb_root_s).add(s.v_inf3_s, "+yIş");
  g.at(s.v_inf3_s).add_empty(s.noun_s);
  g.at(s.verb_root_s).add(s.v_agt_s, "+yIcI");
  g.at(s.v_agt_s).add_empty(s.noun_s).add_empty(s.adj_after_verb_st);
  g.at(s.verb_root_s).add(s.v_act_of_s, "mAcA");
  g.at(s.v_act_of_s).add_empty(s.noun_act_of_root_s);
  g.at(s.verb_root_s).add(s.v_past_part_s, ">dI~k").add(s.v_past_part_s, ">dI!ğ");
  g.at(s.v_past_part_s).add_empty(s.noun_s).add_empty(s.adj_after_verb_s);
  g.at(s.verb_root_s).add(s.v_fut_part_s, "+yAcA~k").add(s.v_fut_part_s, "+yAcA!ğ");
  g.at(s.v_fut_part_s).add_empty_when(s.noun_s, HAS_TAIL).add_empty(s.adj_after_verb_s);
  g.at(s.verb_root_s).add(s.v_narr_part_s, "mIş");
  g.at(s.v_narr_part_s).add_empty(s.adjective_root_st);
  g.at(s.verb_root_s)
    .add_when(s.v_aor_part_s, "Ir", has_root(RootAttribute::Aorist_I).or(HAS_SURFACE))
    .add_when(s.v_aor_part_s, "Ar", has_root(RootAttribute::Aorist_A).and(has_no_surface()));
  g.at(s.v_aor_part_s).add_empty(s.adj_after_verb_st);
  g.at(s.verb_root_s).add(s.v_pres_part_s, "+yAn");
  g.at(s.v_pres_part_s).add_empty_when(s.noun_s, HAS_TAIL).add_empty(s.adj_after_verb_st);
  g.at(s.verb_root_s).add(s.v_feel_like_s, "+yAsI");
  g.at(s.v_feel_like_s).add_empty_when(s.noun_s, HAS_TAIL).add_empty(s.adj_after_verb_st);
  g.at(s.verb_root_s).add(s.v_not_state_s, "mAzlI~k").add(s.v_not_state_s, "mAzlI!ğ");
  g.at(s.v_not_state_s).add_empty(s.noun_s);
  g.at(s.v_recip_s).add_empty(s.verb_root_s);
  g.at(s.v_implicit_recip_root_s).add_empty(s.v_recip_s);
  g.at(s.v_implicit_reflex_root_s).add_empty(s.v_reflex_s);
  g.at(s.v_reflex_s).add_empty(s.verb_root_s);
  g.at(s.verb_root_s)
    .add_when(
      s.v_pass_s,
      "In",
      has_root(RootAttribute::Passive_In).and_not(contains_morpheme(&[m.pass])),
    )
    .add_when(
      s.v_pass_s,
      "InIl",
      has_root(RootAttribute::Passive_In).and_not(contains_morpheme(&[m.pass])),
    )
    .add_when(
      s.v_pass_s,
      "+nIl",
      previous_state_is_any(&[s.v_caus_t_s, s.v_caus_tir_s])
        .or(not_have_root(RootAttribute::Passive_In).and_not(contains_morpheme(&[m.pass]))),
    );
  g.at(s.v_pass_s).add_empty(s.verb_root_s);
  g.at(s.v_cond_s)
    .add(s.v_a1sg_st, "m")
    .add(s.v_a2sg_st, "n")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "k")
    .add(s.v_a2pl_st, "nIz")
    .add(s.v_a3pl_st, "lAr");
  g.at(s.verb_root_s).add(s.v_past_s, ">dI");
  g.at(s.v_past_s)
    .add(s.v_a1sg_st, "m")
    .add(s.v_a2sg_st, "n")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "k")
    .add(s.v_a2pl_st, "nIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_cond_s, "ysA");
  g.at(s.verb_root_s).add(s.v_narr_s, "mIş");
  g.at(s.v_narr_s)
    .add(s.v_a1sg_st, "Im")
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "Iz")
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_cond_s, "sA")
    .add(s.v_past_after_tense_s, "tI")
    .add(s.v_cop_before_a3pl_s, "tIr")
    .add(s.v_while_s, "ken")
    .add(s.v_narr_after_tense_s, "mIş");
  g.at(s.v_past_after_tense_s)
    .add(s.v_a1sg_st, "m")
    .add(s.v_a2sg_st, "n")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "k")
    .add(s.v_a2pl_st, "nIz")
    .add(s.v_a3pl_st, "lAr");
  g.at(s.v_narr_after_tense_s)
    .add(s.v_a1sg_st, "Im")
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "Iz")
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_while_s, "ken")
    .add(s.v_cop_before_a3pl_s, "tIr");
  g.at(s.verb_root_s).add(s.v_fut_s, "+yAcA~k").add(s.v_fut_s, "+yAcA!ğ");
  g.at(s.v_fut_s)
    .add(s.v_a1sg_st, "Im")
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "Iz")
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_cond_s, "sA")
    .add(s.v_past_after_tense_s, "tI")
    .add(s.v_narr_after_tense_s, "mIş")
    .add(s.v_cop_before_a3pl_s, "tIr")
    .add(s.v_while_s, "ken");
  let di_yi_condition = root_surface_is_any(&["di", "yi"]);
  let de_ye_condition = root_surface_is_any(&["de", "ye"]);
  let c_multi_verb =
    !previous_morpheme_is_any(&[m.ever_since, m.repeat, m.almost, m.hastily, m.stay, m.start]);
  g.at(s.v_de_ye_root_s)
    .add_when(s.v_fut_s, "yece~k", di_yi_condition.clone())
    .add_when(s.v_fut_s, "yece!ğ", di_yi_condition.clone())
    .add_when(s.v_prog_yor_s, "yor", di_yi_condition.clone())
    .add_when(s.v_able_s, "yebil", di_yi_condition.clone())
    .add_when(s.v_able_neg_s, "ye", di_yi_condition.clone())
    .add_when(s.v_inf3_s, "yiş", root_surface_is_any(&["yi"]))
    .add_when(s.v_fut_part_s, "yece~k", di_yi_condition.clone())
    .add_when(s.v_fut_part_s, "yece!ğ", di_yi_condition.clone())
    .add_when(s.v_pres_part_s, "yen", di_yi_condition.clone())
    .add_when(s.v_ever_since_s, "yegel", di_yi_condition.clone().and(c_multi_verb.clone()))
    .add_when(s.v_repeat_s, "yedur", di_yi_condition.clone().and(c_multi_verb.clone()))
    .add_when(s.v_repeat_s, "yegör", di_yi_condition.clone().and(c_multi_verb.clone()))
    .add_when(s.v_almost_s, "yeyaz", di_yi_condition.clone().and(c_multi_verb.clone()))
    .add_when(s.v_start_s, "yekoy", di_yi_condition.clone().and(c_multi_verb.clone()))
    .add_when(s.v_since_doing_so_s, "yeli", di_yi_condition.clone())
    .add_when(s.v_by_doing_so_s, "yerek", di_yi_condition.clone())
    .add_when(s.v_feel_like_s, "yesi", di_yi_condition.clone())
    .add_when(s.v_after_doing_s, "yip", di_yi_condition.clone())
    .add_when(s.v_without_being_able_to_have_done_so_s, "yemeden", di_yi_condition.clone())
    .add_when(s.v_opt_s, "ye", di_yi_condition.clone())
    .add_when(s.v_caus_tir_s, "dir", de_ye_condition.clone())
    .add_when(s.v_pass_s, "n", de_ye_condition.clone())
    .add_when(s.v_pass_s, "nil", de_ye_condition.clone())
    .add_when(s.v_past_s, "di", de_ye_condition.clone())
    .add_when(s.v_narr_s, "miş", de_ye_condition.clone())
    .add_when(s.v_aor_s, "r", de_ye_condition.clone())
    .add_when(s.v_neg_s, "me", de_ye_condition.clone())
    .add_when(s.v_neg_prog1_s, "m", de_ye_condition.clone())
    .add_when(s.v_prog_makta_s, "mekte", de_ye_condition.clone())
    .add_when(s.v_desr_s, "se", de_ye_condition.clone())
    .add_when(s.v_inf1_s, "mek", de_ye_condition.clone())
    .add_when(s.v_inf2_s, "me", de_ye_condition.clone())
    .add_when(s.v_inf3_s, "yiş", root_surface_is_any(&["de"]))
    .add_when(s.v_past_part_s, "di~k", de_ye_condition.clone())
    .add_when(s.v_past_part_s, "di!ğ", de_ye_condition.clone())
    .add_when(s.v_narr_part_s, "miş", de_ye_condition)
    .add_when(s.v_hastily_s, "yiver", di_yi_condition.and(c_multi_verb.clone()))
    .add(s.v_as_long_as_s, "dikçe")
    .add(s.v_without_having_done_so_s, "meden")
    .add(s.v_without_having_done_so_s, "meksizin")
    .add(s.v_neces_s, "meli")
    .add(s.v_not_state_s, "mezli~k")
    .add(s.v_not_state_s, "mezli!ğ")
    .add_empty_when(s.v_imp_s, root_surface_is("de"))
    .add_empty_when(s.v_imp_yemek_ye_s, root_surface_is("ye"))
    .add_empty_when(s.v_imp_yemek_yi_s, root_surface_is("yi"));
  g.at(s.v_imp_yemek_yi_s).add(s.v_a2pl_st, "yin").add(s.v_a2pl_st, "yiniz");
  g.at(s.v_imp_yemek_ye_s)
    .add_empty(s.v_a2sg_st)
    .add(s.v_a2sg_st, "sene")
    .add(s.v_a3sg_st, "sin")
    .add(s.v_a2pl_st, "senize")
    .add(s.v_a3pl_st, "sinler");
  g.at(s.verb_root_s).add(s.v_opt_s, "+yA");
  g.at(s.v_opt_s)
    .add(s.v_a1sg_st, "yIm")
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "lIm")
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_past_after_tense_s, "ydI")
    .add(s.v_narr_after_tense_s, "ymIş");
  g.at(s.verb_root_s).add(s.v_desr_s, "sA");
  g.at(s.v_desr_s)
    .add(s.v_a1sg_st, "m")
    .add(s.v_a2sg_st, "n")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "k")
    .add(s.v_a2pl_st, "nIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_past_after_tense_s, "ydI")
    .add(s.v_narr_after_tense_s, "ymIş");
  g.at(s.verb_root_s).add(s.v_neces_s, "mAlI");
  g.at(s.v_neces_s)
    .add(s.v_a1sg_st, "yIm")
    .add(s.v_a2sg_st, "sIn")
    .add_empty(s.v_a3sg_st)
    .add(s.v_a1pl_st, "yIz")
    .add(s.v_a2pl_st, "sInIz")
    .add(s.v_a3pl_st, "lAr")
    .add(s.v_past_after_tense_s, "ydI")
    .add(s.v_cond_s, "ysA")
    .add(s.v_narr_after_tense_s, "ymIş")
    .add(s.v_cop_before_a3pl_s, "dIr")
    .add(s.v_while_s, "yken");
  let previous_not_past_narr_cond =
    !previous_state_is_any(&[s.v_past_after_tense_s, s.v_narr_after_tense_s, s.v_cond_s]);
  g.at(s.v_a3pl_st)
    .add_when(s.v_past_after_tense_st, "dI", previous_not_past_narr_cond.clone())
    .add_when(s.v_narr_after_tense_st, "mIş", previous_not_past_narr_cond.clone())
    .add_when(s.v_cond_st, "sA", previous_not_past_narr_cond);
  let a3pl_cop_while = previous_morpheme_is_any(&[m.prog1, m.prog2, m.neces, m.fut, m.narr, m.aor]);
  g.at(s.v_a3pl_st)
    .add_when(s.v_cop_st, "dIr", a3pl_cop_while.clone())
    .add_when(s.v_while_s, "ken", a3pl_cop_while);
  let a3sg_cop_while = previous_morpheme_is_any(&[m.prog1, m.prog2, m.neces, m.fut, m.narr, m.aor]);
  g.at(s.v_a1sg_st).add_when(s.v_cop_st, "dIr", a3sg_cop_while.clone());
  g.at(s.v_a2sg_st).add_when(s.v_cop_st, "dIr", a3sg_cop_while.clone());
  g.at(s.v_a3sg_st).add_when(s.v_cop_st, ">dIr", a3sg_cop_while.clone());
  g.at(s.v_a1pl_st).add_when(s.v_cop_st, "dIr", a3sg_cop_while.clone());
  g.at(s.v_a2pl_st).add_when(s.v_cop_st, "dIr", a3sg_cop_while);
  g.at(s.v_cop_before_a3pl_s).add(s.v_a3pl_st, "lAr");
  let previous_past = previous_morpheme_is(m.past).and_not(contains_morpheme(&[m.cond, m.desr]));
  g.at(s.v_a2pl_st).add_when(s.v_cond_after_person_st, "sA", previous_past.clone());
  g.at(s.v_a2sg_st).add_when(s.v_cond_after_person_st, "sA", previous_past.clone());
  g.at(s.v_a1sg_st).add_when(s.v_cond_after_person_st, "sA", previous_past.clone());
  g.at(s.v_a1pl_st).add_when(s.v_cond_after_person_st, "sA", previous_past);
  g.at(s.verb_root_s)
    .add_when(s.v_ever_since_s, "+yAgel", c_multi_verb.clone())
    .add_when(s.v_repeat_s, "+yAdur", c_multi_verb.clone())
    .add_when(s.v_repeat_s, "+yAgör", c_multi_verb.clone())
    .add_when(s.v_almost_s, "+yAyaz", c_multi_verb.clone())
    .add_when(s.v_hastily_s, "+yIver", c_multi_verb.clone())
    .add_when(s.v_stay_s, "+yAkal", c_multi_verb.clone())
    .add_when(s.v_start_s, "+yAkoy", c_multi_verb);
  g.at(s.v_ever_since_s).add_empty(s.verb_root_s);
  g.at(s.v_repeat_s).add_empty(s.verb_root_s);
  g.at(s.v_almost_s).add_empty(s.verb_root_s);
  g.at(s.v_hastily_s).add_empty(s.verb_root_s);
  g.at(s.v_stay_s).add_empty(s.verb_root_s);
  g.at(s.v_start_s).add_empty(s.verb_root_s);
  g.at(s.v_a3sg_st).add_when(s.v_as_if_s, ">cAsInA", previous_morpheme_is_any(&[m.aor, m.narr]));
  g.at(s.verb_root_s)
    .add(s.v_when_s, "+yIncA")
    .add(s.v_since_doing_so_s, "+yAlI")
    .add(s.v_by_doing_so_s, "+yArAk")
    .add(s.v_adamantly_s, "+yAsIyA")
    .add(s.v_after_doing_s, "+yIp")
    .add(s.v_without_being_able_to_have_done_so_s, "+yAmAdAn")
    .add(s.v_as_long_as_s, ">dIkçA")
    .add(s.v_without_having_done_so_s, "mAdAn")
    .add(s.v_without_having_done_so_s, "mAksIzIn");
  g.at(s.v_as_if_s).add_empty(s.adv_root_st);
  g.at(s.v_since_doing_so_s).add_empty(s.adv_root_st);
  g.at(s.v_by_doing_so_s).add_empty(s.adv_root_st);
  g.at(s.v_adamantly_s).add_empty(s.adv_root_st);
  g.at(s.v_after_doing_s).add_empty(s.adv_root_st);
  g.at(s.v_without_being_able_to_have_done_so_s).add_empty(s.adv_root_st);
  g.at(s.v_as_long_as_s).add_empty(s.adv_root_st);
  g.at(s.v_without_having_done_so_s).add_empty(s.adv_root_st);
  g.at(s.v_while_s).add_empty(s.adv_root_st);
  g.at(s.v_when_s).add_empty(s.adv_noun_root_st);
}

/// The question particle `mI` with its person and tense endings.
pub(super) fn connect_question(g: &mut MorphotacticsGraph, s: &States) {
  g.at(s.question_root_s).add_empty(s.q_present_s).add(s.q_past_s, "ydI").add(s.q_narr_s, "ymIş");
  g.at(s.q_present_s).add(s.q_a1sg_st, "yIm").add(s.q_a2sg_st, "sIn").add_empty(s.q_a3sg_st);
  g.at(s.q_past_s).add(s.q_a1sg_st, "m");
  g.at(s.q_narr_s).add(s.q_a1sg_st, "Im");
  g.at(s.q_past_s).add(s.q_a2sg_st, "n");
  g.at(s.q_narr_s).add(s.q_a2sg_st, "sIn");
  g.at(s.q_past_s).add(s.q_a1pl_st, "k");
  g.at(s.q_narr_s).add(s.q_a1pl_st, "Iz");
  g.at(s.q_present_s).add(s.q_a1pl_st, "+yIz");
  g.at(s.q_past_s).add(s.q_a2pl_st, "InIz");
  g.at(s.q_narr_s).add(s.q_a2pl_st, "sInIz");
  g.at(s.q_present_s).add(s.q_a2pl_st, "sInIz");
  g.at(s.q_past_s).add(s.q_a3pl_st, "lAr");
  g.at(s.q_narr_s).add(s.q_a3pl_st, "lAr");
  g.at(s.q_past_s).add_empty(s.q_a3sg_st);
  g.at(s.q_narr_s).add_empty(s.q_a3sg_st);
  let reject_no_copula = !current_group_contains_any(&[s.q_past_s]);
  g.at(s.q_a1sg_st).add_when(s.q_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.q_a2sg_st).add_when(s.q_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.q_a3sg_st).add_when(s.q_cop_st, ">dIr", reject_no_copula.clone());
  g.at(s.q_a1pl_st).add_when(s.q_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.q_a2pl_st).add_when(s.q_cop_st, "dIr", reject_no_copula);
  g.at(s.q_present_s).add(s.q_cop_before_a3pl_s, "dIr");
  g.at(s.q_cop_before_a3pl_s).add(s.q_a3pl_st, "lAr");
}

pub(super) fn connect_imek(g: &mut MorphotacticsGraph, s: &States) {
  g.at(s.imek_root_s).add(s.imek_past_s, "di").add(s.imek_narr_s, "miş").add(s.imek_cond_s, "se");
  g.at(s.imek_past_s)
    .add(s.imek_a1sg_st, "m")
    .add(s.imek_a2sg_st, "n")
    .add_empty(s.imek_a3sg_st)
    .add(s.imek_a1pl_st, "k")
    .add(s.imek_a2pl_st, "niz")
    .add(s.imek_a3pl_st, "ler");
  g.at(s.imek_narr_s)
    .add(s.imek_a1sg_st, "im")
    .add(s.imek_a2sg_st, "sin")
    .add_empty(s.imek_a3sg_st)
    .add(s.imek_a1pl_st, "iz")
    .add(s.imek_a2pl_st, "siniz")
    .add(s.imek_a3pl_st, "ler");
  g.at(s.imek_past_s).add(s.imek_cond_s, "yse");
  g.at(s.imek_narr_s).add(s.imek_cond_s, "se");
  g.at(s.imek_cond_s)
    .add(s.imek_a1sg_st, "m")
    .add(s.imek_a2sg_st, "n")
    .add_empty(s.imek_a3sg_st)
    .add(s.imek_a1pl_st, "k")
    .add(s.imek_a2pl_st, "niz")
    .add(s.imek_a3pl_st, "ler");
  let reject_no_copula = !current_group_contains_any(&[s.imek_past_s]);
  g.at(s.imek_a1sg_st).add_when(s.imek_cop_st, "dir", reject_no_copula.clone());
  g.at(s.imek_a2sg_st).add_when(s.imek_cop_st, "dir", reject_no_copula.clone());
  g.at(s.imek_a3sg_st).add_when(s.imek_cop_st, "tir", reject_no_copula.clone());
  g.at(s.imek_a1pl_st).add_when(s.imek_cop_st, "dir", reject_no_copula.clone());
  g.at(s.imek_a2pl_st).add_when(s.imek_cop_st, "dir", reject_no_copula.clone());
  g.at(s.imek_a3pl_st).add_when(s.imek_cop_st, "dir", reject_no_copula);
}

/// Roots whose last vowel drops (`kavur` → `kavr`) share every verb transition except the
/// passive.
pub(super) fn connect_post_processing(g: &mut MorphotacticsGraph, m: &Morphemes, s: &States) {
  g.at(s.verb_last_vowel_drop_mod_root_s).add(s.v_pass_s, "Il");
  g.copy_outgoing_transitions(s.verb_last_vowel_drop_unmod_root_s, s.verb_root_s);
  g.remove_transitions_to(s.verb_last_vowel_drop_unmod_root_s, m.pass);
}
