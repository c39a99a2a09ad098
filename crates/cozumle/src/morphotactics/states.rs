//! Named states of the formal morphotactics.
//!
//! State names follow the graph convention: `_S` for non-terminal and `_ST` for terminal
//! states.

use super::graph::MorphotacticsGraph;
use super::morpheme::Morphemes;
use super::state::StateId;

macro_rules! states {
  ($($field:ident = $kind:ident($name:literal, $morpheme:ident);)+) => {
    /// Every state of the formal graph as a named field.
    pub struct States {
      $(
        #[allow(missing_docs)]
        pub $field: StateId,
      )+
    }

    impl States {
      /// Registers every state in `graph`.
      pub fn register(graph: &mut MorphotacticsGraph, morphemes: &Morphemes) -> Self {
        Self { $($field: graph.$kind($name, morphemes.$morpheme),)+ }
      }
    }
  };
}

states! {
  root_s = non_terminal("root_S", root);
  punc_root_st = terminal_root("puncRoot_ST", punc);
  noun_s = root("noun_S", noun);
  noun_compound_root_s = root("nounCompoundRoot_S", noun);
  noun_su_root_s = root("nounSuRoot_S", noun);
  noun_inf1_root_s = root("nounInf1Root_S", noun);
  noun_act_of_root_s = root("nounActOfRoot_S", noun);
  a3sg_s = non_terminal("a3sg_S", a3sg);
  a3sg_su_s = non_terminal("a3sgSu_S", a3sg);
  a3sg_compound_s = non_terminal("a3sgCompound_S", a3sg);
  a3sg_inf1_s = non_terminal("a3sgInf1_S", a3sg);
  a3sg_act_of_s = non_terminal("a3sgActOf_S", a3sg);
  a3pl_s = non_terminal("a3pl_S", a3pl);
  a3pl_act_of_s = non_terminal("a3plActOf_S", a3pl);
  a3pl_compound_s = non_terminal("a3plCompound_S", a3pl);
  a3pl_compound2_s = non_terminal("a3plCompound2_S", a3pl);
  pnon_s = non_terminal("pnon_S", pnon);
  pnon_compound_s = non_terminal("pnonCompound_S", pnon);
  pnon_compound2_s = non_terminal("pnonCompound2_S", pnon);
  pnon_inf1_s = non_terminal("pnonInf1_S", pnon);
  pnon_act_of = non_terminal("pnonActOf", pnon);
  p1sg_s = non_terminal("p1sg_S", p1sg);
  p2sg_s = non_terminal("p2sg_S", p2sg);
  p3sg_s = non_terminal("p3sg_S", p3sg);
  p1pl_s = non_terminal("p1pl_S", p1pl);
  p2pl_s = non_terminal("p2pl_S", p2pl);
  p3pl_s = non_terminal("p3pl_S", p3pl);
  nom_st = terminal("nom_ST", nom);
  nom_s = non_terminal("nom_S", nom);
  dat_st = terminal("dat_ST", dat);
  abl_st = terminal("abl_ST", abl);
  loc_st = terminal("loc_ST", loc);
  ins_st = terminal("ins_ST", ins);
  acc_st = terminal("acc_ST", acc);
  gen_st = terminal("gen_ST", genitive);
  equ_st = terminal("equ_ST", equ);
  dim_s = derivative("dim_S", dim);
  ness_s = derivative("ness_S", ness);
  agt_s = derivative("agt_S", agt);
  related_s = derivative("related_S", related);
  rel_s = derivative("rel_S", rel);
  rel_to_pron_s = derivative("relToPron_S", rel);
  with_s = derivative("with_S", with);
  without_s = derivative("without_S", without);
  just_like_s = derivative("justLike_S", just_like);
  noun_zero_deriv_s = derivative("nounZeroDeriv_S", zero);
  become_s = derivative("become_S", become_);
  acquire_s = derivative("acquire_S", acquire);
  noun_last_vowel_drop_root_s = root("nounLastVowelDropRoot_S", noun);
  adj_last_vowel_drop_root_s = root("adjLastVowelDropRoot_S", adj);
  postp_last_vowel_drop_root_s = root("postpLastVowelDropRoot_S", postp);
  a3_pl_last_vowel_drop_s = non_terminal("a3PlLastVowelDrop_S", a3pl);
  a3sg_last_vowel_drop_s = non_terminal("a3sgLastVowelDrop_S", a3sg);
  p_non_last_vowel_drop_s = non_terminal("pNonLastVowelDrop_S", pnon);
  zero_last_vowel_drop_s = derivative("zeroLastVowelDrop_S", zero);
  noun_proper_s = root("nounProper_S", noun);
  noun_abbrv_s = root("nounAbbrv_S", noun);
  punc_proper_separator_s = non_terminal("puncProperSeparator_S", punc);
  noun_no_suffix_s = root("nounNoSuffix_S", noun);
  noun_a3sg_no_suffix_s = non_terminal("nounA3sgNoSuffix_S", a3sg);
  noun_pnon_no_suffix_s = non_terminal("nounPnonNoSuffix_S", pnon);
  noun_nom_no_suffix_st = terminal("nounNomNoSuffix_S", nom);
  adjective_root_st = terminal_root("adjectiveRoot_ST", adj);
  adj_after_verb_s = root("adjAfterVerb_S", adj);
  adj_after_verb_st = terminal_root("adjAfterVerb_ST", adj);
  adj_zero_deriv_s = derivative("adjZeroDeriv_S", zero);
  a_pnon_st = terminal("aPnon_ST", pnon);
  a_p1sg_st = terminal("aP1sg_ST", p1sg);
  a_p2sg_st = terminal("aP2sg_ST", p2sg);
  a_p3sg_st = terminal("aP3sg_ST", p3sg);
  a_p1pl_st = terminal("aP1pl_ST", p1pl);
  a_p2pl_st = terminal("aP2pl_ST", p2pl);
  a_p3pl_st = terminal("aP3pl_ST", p3pl);
  a_ly_s = derivative("aLy_S", ly);
  a_as_if_s = derivative("aAsIf_S", as_if);
  a_agt_s = derivative("aAgt_S", agt);
  numeral_root_st = terminal_root("numeralRoot_ST", num);
  num_zero_deriv_s = derivative("numZeroDeriv_S", zero);
  n_verb_s = root("nVerb_S", verb);
  n_verb_degil_s = root("nVerbDegil_S", verb);
  n_present_s = non_terminal("nPresent_S", pres);
  n_past_s = non_terminal("nPast_S", past);
  n_narr_s = non_terminal("nNarr_S", narr);
  n_cond_s = non_terminal("nCond_S", cond);
  n_a1sg_st = terminal("nA1sg_ST", a1sg);
  n_a2sg_st = terminal("nA2sg_ST", a2sg);
  n_a1pl_st = terminal("nA1pl_ST", a1pl);
  n_a2pl_st = terminal("nA2pl_ST", a2pl);
  n_a3sg_st = terminal("nA3sg_ST", a3sg);
  n_a3sg_s = non_terminal("nA3sg_S", a3sg);
  n_a3pl_st = terminal("nA3pl_ST", a3pl);
  n_cop_st = terminal("nCop_ST", cop);
  n_cop_before_a3pl_s = non_terminal("nCopBeforeA3pl_S", cop);
  n_neg_s = non_terminal("nNeg_S", neg);
  pron_pers_s = root("pronPers_S", pron);
  pron_demons_s = root("pronDemons_S", pron);
  pron_quant_s = root("pronQuant_S", pron);
  pron_quant_modified_s = root("pronQuantModified_S", pron);
  pron_ques_s = root("pronQues_S", pron);
  pron_reflex_s = root("pronReflex_S", pron);
  pron_pers_mod_s = root("pronPers_Mod_S", pron);
  pron_after_rel_s = root("pronAfterRel_S", pron);
  p_a1sg_s = non_terminal("pA1sg_S", a1sg);
  p_a2sg_s = non_terminal("pA2sg_S", a2sg);
  p_a1sg_mod_s = non_terminal("pA1sgMod_S", a1sg);
  p_a2sg_mod_s = non_terminal("pA2sgMod_S", a2sg);
  p_a3sg_s = non_terminal("pA3sg_S", a3sg);
  p_a3sg_rel_s = non_terminal("pA3sgRel_S", a3sg);
  p_a1pl_s = non_terminal("pA1pl_S", a1pl);
  p_a2pl_s = non_terminal("pA2pl_S", a2pl);
  p_a3pl_s = non_terminal("pA3pl_S", a3pl);
  p_a3pl_rel_s = non_terminal("pA3plRel_S", a3pl);
  p_quant_a3sg_s = non_terminal("pQuantA3sg_S", a3sg);
  p_quant_a3pl_s = non_terminal("pQuantA3pl_S", a3pl);
  p_quant_mod_a3pl_s = non_terminal("pQuantModA3pl_S", a3pl);
  p_quant_a1pl_s = non_terminal("pQuantA1pl_S", a1pl);
  p_quant_a2pl_s = non_terminal("pQuantA2pl_S", a2pl);
  p_ques_a3sg_s = non_terminal("pQuesA3sg_S", a3sg);
  p_ques_a3pl_s = non_terminal("pQuesA3pl_S", a3pl);
  p_reflex_a3sg_s = non_terminal("pReflexA3sg_S", a3sg);
  p_reflex_a3pl_s = non_terminal("pReflexA3pl_S", a3pl);
  p_reflex_a1sg_s = non_terminal("pReflexA1sg_S", a1sg);
  p_reflex_a2sg_s = non_terminal("pReflexA2sg_S", a2sg);
  p_reflex_a1pl_s = non_terminal("pReflexA1pl_S", a1pl);
  p_reflex_a2pl_s = non_terminal("pReflexA2pl_S", a2pl);
  p_pnon_s = non_terminal("pPnon_S", pnon);
  p_pnon_rel_s = non_terminal("pPnonRel_S", pnon);
  p_pnon_mod_s = non_terminal("pPnonMod_S", pnon);
  p_p1sg_s = non_terminal("pP1sg_S", p1sg);
  p_p2sg_s = non_terminal("pP2sg_S", p2sg);
  p_p3sg_s = non_terminal("pP3sg_S", p3sg);
  p_p1pl_s = non_terminal("pP1pl_S", p1pl);
  p_p2pl_s = non_terminal("pP2pl_S", p2pl);
  p_p3pl_s = non_terminal("pP3pl_S", p3pl);
  p_nom_st = terminal("pNom_ST", nom);
  p_dat_st = terminal("pDat_ST", dat);
  p_acc_st = terminal("pAcc_ST", acc);
  p_abl_st = terminal("pAbl_ST", abl);
  p_loc_st = terminal("pLoc_ST", loc);
  p_gen_st = terminal("pGen_ST", genitive);
  p_ins_st = terminal("pIns_ST", ins);
  p_equ_st = terminal("pEqu_ST", equ);
  pron_zero_deriv_s = derivative("pronZeroDeriv_S", zero);
  pv_present_s = non_terminal("pvPresent_S", pres);
  pv_past_s = non_terminal("pvPast_S", past);
  pv_narr_s = non_terminal("pvNarr_S", narr);
  pv_cond_s = non_terminal("pvCond_S", cond);
  pv_a1sg_st = terminal("pvA1sg_ST", a1sg);
  pv_a2sg_st = terminal("pvA2sg_ST", a2sg);
  pv_a3sg_st = terminal("pvA3sg_ST", a3sg);
  pv_a3sg_s = non_terminal("pvA3sg_S", a3sg);
  pv_a1pl_st = terminal("pvA1pl_ST", a1pl);
  pv_a2pl_st = terminal("pvA2pl_ST", a2pl);
  pv_a3pl_st = terminal("pvA3pl_ST", a3pl);
  pv_cop_before_a3pl_s = non_terminal("pvCopBeforeA3pl_S", cop);
  pv_cop_st = terminal("pvCop_ST", cop);
  pv_verb_root_s = root("pvVerbRoot_S", verb);
  adv_root_st = terminal_root("advRoot_ST", adv);
  adv_noun_root_st = terminal_root("advNounRoot_ST", adv);
  adv_for_verb_deriv_st = terminal_root("advForVerbDeriv_ST", adv);
  av_noun_after_adv_root_st = root("advToNounRoot_ST", noun);
  av_a3sg_s = non_terminal("avA3sg_S", a3sg);
  av_pnon_s = non_terminal("avPnon_S", pnon);
  av_dat_st = terminal("avDat_ST", dat);
  av_zero_s = derivative("avZero_S", zero);
  av_zero_to_verb_s = derivative("avZeroToVerb_S", zero);
  conj_root_st = terminal_root("conjRoot_ST", conj);
  interj_root_st = terminal_root("interjRoot_ST", interj);
  det_root_st = terminal_root("detRoot_ST", det);
  dup_root_st = terminal_root("dupRoot_ST", dup);
  postp_root_st = terminal_root("postpRoot_ST", postp);
  postp_zero_s = derivative("postpZero_S", zero);
  po2n_root_s = non_terminal("po2nRoot_S", noun);
  po2n_a3sg_s = non_terminal("po2nA3sg_S", a3sg);
  po2n_a3pl_s = non_terminal("po2nA3pl_S", a3pl);
  po2n_p3sg_s = non_terminal("po2nP3sg_S", p3sg);
  po2n_p1sg_s = non_terminal("po2nP1sg_S", p1sg);
  po2n_p2sg_s = non_terminal("po2nP2sg_S", p2sg);
  po2n_p1pl_s = non_terminal("po2nP1pl_S", p1pl);
  po2n_p2pl_s = non_terminal("po2nP2pl_S", p2pl);
  po2n_pnon_s = non_terminal("po2nPnon_S", pnon);
  po2n_nom_st = terminal("po2nNom_ST", nom);
  po2n_dat_st = terminal("po2nDat_ST", dat);
  po2n_abl_st = terminal("po2nAbl_ST", abl);
  po2n_loc_st = terminal("po2nLoc_ST", loc);
  po2n_ins_st = terminal("po2nIns_ST", ins);
  po2n_acc_st = terminal("po2nAcc_ST", acc);
  po2n_gen_st = terminal("po2nGen_ST", genitive);
  po2n_equ_st = terminal("po2nEqu_ST", equ);
  verb_root_s = root("verbRoot_S", verb);
  verb_last_vowel_drop_mod_root_s = root("verbLastVowelDropModRoot_S", verb);
  verb_last_vowel_drop_unmod_root_s = root("verbLastVowelDropUnmodRoot_S", verb);
  v_a1sg_st = terminal("vA1sg_ST", a1sg);
  v_a2sg_st = terminal("vA2sg_ST", a2sg);
  v_a3sg_st = terminal("vA3sg_ST", a3sg);
  v_a1pl_st = terminal("vA1pl_ST", a1pl);
  v_a2pl_st = terminal("vA2pl_ST", a2pl);
  v_a3pl_st = terminal("vA3pl_ST", a3pl);
  v_past_s = non_terminal("vPast_S", past);
  v_narr_s = non_terminal("vNarr_S", narr);
  v_cond_s = non_terminal("vCond_S", cond);
  v_cond_after_person_st = terminal("vCondAfterPerson_ST", cond);
  v_past_after_tense_s = non_terminal("vPastAfterTense_S", past);
  v_narr_after_tense_s = non_terminal("vNarrAfterTense_S", narr);
  v_past_after_tense_st = terminal("vPastAfterTense_ST", past);
  v_narr_after_tense_st = terminal("vNarrAfterTense_ST", narr);
  v_cond_st = terminal("vCond_ST", cond);
  v_prog_yor_s = non_terminal("vProgYor_S", prog1);
  v_prog_makta_s = non_terminal("vProgMakta_S", prog2);
  v_fut_s = non_terminal("vFut_S", fut);
  v_cop_st = terminal("vCop_ST", cop);
  v_cop_before_a3pl_s = non_terminal("vCopBeforeA3pl_S", cop);
  v_neg_s = non_terminal("vNeg_S", neg);
  v_unable_s = non_terminal("vUnable_S", unable);
  v_neg_prog1_s = non_terminal("vNegProg1_S", neg);
  v_unable_prog1_s = non_terminal("vUnableProg1_S", unable);
  v_imp_s = non_terminal("vImp_S", imp);
  v_imp_yemek_yi_s = non_terminal("vImpYemekYi_S", imp);
  v_imp_yemek_ye_s = non_terminal("vImpYemekYe_S", imp);
  v_caus_t_s = derivative("vCaus_S", caus);
  v_caus_tir_s = derivative("vCausTır_S", caus);
  v_recip_s = derivative("vRecip_S", recip);
  v_implicit_recip_root_s = root("vImplicitRecipRoot_S", verb);
  v_reflex_s = derivative("vReflex_S", reflex);
  v_implicit_reflex_root_s = root("vImplicitReflexRoot_S", verb);
  verb_root_vowel_drop_s = root("verbRoot_VowelDrop_S", verb);
  v_aor_s = non_terminal("vAor_S", aor);
  v_aor_neg_s = non_terminal("vAorNeg_S", aor);
  v_aor_neg_empty_s = non_terminal("vAorNegEmpty_S", aor);
  v_aor_part_neg_s = derivative("vAorPartNeg_S", aor_part);
  v_aor_part_s = derivative("vAorPart_S", aor_part);
  v_able_s = derivative("vAble_S", able);
  v_able_neg_s = derivative("vAbleNeg_S", able);
  v_able_neg_deriv_root_s = root("vAbleNegDerivRoot_S", verb);
  v_pass_s = derivative("vPass_S", pass);
  v_opt_s = non_terminal("vOpt_S", opt);
  v_desr_s = non_terminal("vDesr_S", desr);
  v_neces_s = non_terminal("vNeces_S", neces);
  v_inf1_s = derivative("vInf1_S", inf1);
  v_inf2_s = derivative("vInf2_S", inf2);
  v_inf3_s = derivative("vInf3_S", inf3);
  v_agt_s = derivative("vAgt_S", agt);
  v_act_of_s = derivative("vActOf_S", act_of);
  v_past_part_s = derivative("vPastPart_S", past_part);
  v_fut_part_s = derivative("vFutPart_S", fut_part);
  v_pres_part_s = derivative("vPresPart_S", pres_part);
  v_narr_part_s = derivative("vNarrPart_S", narr_part);
  v_feel_like_s = derivative("vFeelLike_S", feel_like);
  v_not_state_s = derivative("vNotState_S", not_state);
  v_ever_since_s = derivative("vEverSince_S", ever_since);
  v_repeat_s = derivative("vRepeat_S", repeat);
  v_almost_s = derivative("vAlmost_S", almost);
  v_hastily_s = derivative("vHastily_S", hastily);
  v_stay_s = derivative("vStay_S", stay);
  v_start_s = derivative("vStart_S", start);
  v_while_s = derivative("vWhile_S", while_);
  v_when_s = derivative("vWhen_S", when);
  v_as_if_s = derivative("vAsIf_S", as_if);
  v_since_doing_so_s = derivative("vSinceDoingSo_S", since_doing_so);
  v_as_long_as_s = derivative("vAsLongAs_S", as_long_as);
  v_by_doing_so_s = derivative("vByDoingSo_S", by_doing_so);
  v_adamantly_s = derivative("vAdamantly_S", adamantly);
  v_after_doing_s = derivative("vAfterDoing_S", after_doing_so);
  v_without_having_done_so_s = derivative("vWithoutHavingDoneSo_S", without_having_done_so);
  v_without_being_able_to_have_done_so_s =
    derivative("vWithoutBeingAbleToHaveDoneSo_S", without_being_able_to_have_done_so);
  v_de_ye_root_s = root("vDeYeRoot_S", verb);
  q_present_s = non_terminal("qPresent_S", pres);
  q_past_s = non_terminal("qPast_S", past);
  q_narr_s = non_terminal("qNarr_S", narr);
  q_a1sg_st = terminal("qA1sg_ST", a1sg);
  q_a2sg_st = terminal("qA2sg_ST", a2sg);
  q_a3sg_st = terminal("qA3sg_ST", a3sg);
  q_a1pl_st = terminal("qA1pl_ST", a1pl);
  q_a2pl_st = terminal("qA2pl_ST", a2pl);
  q_a3pl_st = terminal("qA3pl_ST", a3pl);
  q_cop_before_a3pl_s = non_terminal("qCopBeforeA3pl_S", cop);
  q_cop_st = terminal("qCop_ST", cop);
  question_root_s = root("questionRoot_S", ques);
  imek_root_s = root("imekRoot_S", verb);
  imek_past_s = non_terminal("imekPast_S", past);
  imek_narr_s = non_terminal("imekNarr_S", narr);
  imek_cond_s = non_terminal("imekCond_S", cond);
  imek_a1sg_st = terminal("imekA1sg_ST", a1sg);
  imek_a2sg_st = terminal("imekA2sg_ST", a2sg);
  imek_a3sg_st = terminal("imekA3sg_ST", a3sg);
  imek_a1pl_st = terminal("imekA1pl_ST", a1pl);
  imek_a2pl_st = terminal("imekA2pl_ST", a2pl);
  imek_a3pl_st = terminal("imekA3pl_ST", a3pl);
  imek_cop_st = terminal("imekCop_ST", cop);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn registers_named_states() {
    let m = Morphemes::new();
    let mut g = MorphotacticsGraph::new();
    let s = States::register(&mut g, &m);
    assert_eq!(g.state_by_name("noun_S"), Some(s.noun_s));
    assert_eq!(g.state_by_name("vA1sg_ST"), Some(s.v_a1sg_st));
    assert!(g.state(s.nom_st).terminal);
    assert!(!g.state(s.nom_s).terminal);
    assert!(g.state(s.v_caus_t_s).derivative);
    assert!(g.state(s.verb_root_s).pos_root);
    assert_eq!(g.state(s.v_caus_tir_s).morpheme, m.caus);
  }
}
