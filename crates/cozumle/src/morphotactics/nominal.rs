//! Nominal transitions: nouns, adjectives, numerals, pronouns, adverbs and postpositives.

use crate::alphabet::PhoneticAttribute;
use crate::lexicon::{RootAttribute, SecondaryPos};

use super::conditions::{
  HAS_TAIL, CURRENT_GROUP_EMPTY, contains_morpheme, contains_morpheme_sequence,
  current_group_contains_any, has_no_surface, has_root, has_tail_sequence, last_derivation_is,
  not_have, not_have_root, previous_group_contains, previous_group_contains_morpheme,
  previous_morpheme_is, previous_morpheme_is_any, previous_state_is, previous_state_is_not, root_is,
  root_is_any, root_is_none, root_is_not, secondary_pos_is,
};
use super::graph::MorphotacticsGraph;
use super::morpheme::Morphemes;
use super::states::States;

/// Number, possession and case of nouns, plus the noun derivations (`-lI`, `-sIz`, `-lIk`, ...).
pub(super) fn connect_nouns(g: &mut MorphotacticsGraph, m: &Morphemes, s: &States) {
  g.at(s.noun_s)
    .add_empty_when(s.a3sg_s, not_have_root(RootAttribute::ImplicitPlural))
    .add_when(
      s.a3pl_s,
      "lAr",
      not_have_root(RootAttribute::ImplicitPlural).and(not_have_root(RootAttribute::CompoundP3sg)),
    )
    .add_empty_when(s.a3pl_s, has_root(RootAttribute::ImplicitPlural));
  g.at(s.noun_compound_root_s)
    .add_empty_when(s.a3sg_compound_s, has_root(RootAttribute::CompoundP3sgRoot));
  g.at(s.a3sg_compound_s).add_empty(s.pnon_compound_s).add(s.p3pl_s, "lArI");
  g.at(s.pnon_compound_s).add_empty(s.nom_s);
  g.at(s.nom_s)
    .add(s.become_s, "lAş")
    .add(s.acquire_s, "lAn")
    .add_when(s.with_s, "lI", !contains_morpheme(&[m.with, m.without]))
    .add_when(s.without_s, "sIz", !contains_morpheme(&[m.with, m.without]));
  let contains_ness = contains_morpheme(&[m.ness]);
  g.at(s.nom_s)
    .add_when(s.ness_s, "lI~k", !contains_ness.clone())
    .add_when(s.ness_s, "lI!ğ", !contains_ness.clone())
    .add_when(s.agt_s, ">cI", !contains_morpheme(&[m.agt]))
    .add_when(s.just_like_s, "+msI", !contains_morpheme(&[m.just_like]))
    .add_when(s.dim_s, ">cI~k", has_no_surface().and_not(contains_morpheme(&[m.dim])))
    .add_when(s.dim_s, ">cI!ğ", has_no_surface().and_not(contains_morpheme(&[m.dim])))
    .add_when(s.dim_s, "cAğIz", has_no_surface());
  g.at(s.noun_compound_root_s)
    .add_when(s.a3pl_compound_s, "lAr", has_root(RootAttribute::CompoundP3sgRoot))
    .add_when(s.a3pl_compound2_s, "lArI", has_root(RootAttribute::CompoundP3sgRoot));
  g.at(s.a3pl_compound_s)
    .add(s.p3sg_s, "I")
    .add(s.p2sg_s, "In")
    .add(s.p1sg_s, "Im")
    .add(s.p1pl_s, "ImIz")
    .add(s.p2pl_s, "InIz")
    .add(s.p3pl_s, "I");
  g.at(s.a3pl_compound2_s).add_empty(s.pnon_compound2_s);
  g.at(s.pnon_compound2_s).add_empty(s.nom_st);
  let root_is_abbrv = secondary_pos_is(SecondaryPos::Abbreviation);
  let possession_cond = not_have_root(RootAttribute::FamilyMember).and_not(root_is_abbrv.clone());
  g.at(s.a3sg_s)
    .add_empty_when(s.pnon_s, not_have_root(RootAttribute::FamilyMember))
    .add_when(s.p1sg_s, "Im", possession_cond.clone())
    .add_when(
      s.p2sg_s,
      "In",
      possession_cond.clone().and_not(previous_group_contains_morpheme(&[m.just_like])),
    )
    .add_when(s.p3sg_s, "+sI", possession_cond.clone())
    .add_empty_when(s.p3sg_s, has_root(RootAttribute::CompoundP3sg))
    .add_when(s.p1pl_s, "ImIz", possession_cond.clone())
    .add_when(
      s.p2pl_s,
      "InIz",
      possession_cond.clone().and_not(previous_group_contains_morpheme(&[m.just_like])),
    )
    .add_when(s.p3pl_s, "lArI", possession_cond.clone());
  g.at(s.a3pl_s)
    .add_empty_when(s.pnon_s, not_have_root(RootAttribute::FamilyMember))
    .add_when(s.p1sg_s, "Im", possession_cond.clone())
    .add_when(s.p2sg_s, "In", possession_cond.clone())
    .add_empty_when(s.p1sg_s, has_root(RootAttribute::ImplicitP1sg))
    .add_empty_when(s.p2sg_s, has_root(RootAttribute::ImplicitP2sg))
    .add_when(s.p3sg_s, "I", possession_cond.clone())
    .add_when(s.p1pl_s, "ImIz", possession_cond.clone())
    .add_when(s.p2pl_s, "InIz", possession_cond.clone())
    .add_when(s.p3pl_s, "I", possession_cond);
  g.at(s.noun_su_root_s).add_empty(s.a3sg_su_s).add(s.a3pl_s, "lar");
  g.at(s.a3sg_su_s)
    .add_empty(s.pnon_s)
    .add(s.p1sg_s, "yum")
    .add(s.p2sg_s, "yun")
    .add(s.p3sg_s, "yu")
    .add(s.p1pl_s, "yumuz")
    .add(s.p2pl_s, "yunuz")
    .add(s.p3pl_s, "lArI");
  g.at(s.pnon_s).add_empty_when(s.nom_st, not_have_root(RootAttribute::FamilyMember));
  let equ_cond = previous_morpheme_is(m.a3pl)
    .or(!contains_morpheme(&[m.adj, m.fut_part, m.pres_part, m.narr_part, m.past_part]))
    .or(contains_morpheme_sequence(&[m.able, m.verb, m.past_part]));
  g.at(s.pnon_s)
    .add_when(s.dat_st, "+yA", not_have_root(RootAttribute::CompoundP3sg))
    .add_when(s.abl_st, ">dAn", not_have_root(RootAttribute::CompoundP3sg))
    .add_when(s.loc_st, ">dA", not_have_root(RootAttribute::CompoundP3sg))
    .add_when(s.acc_st, "+yI", not_have_root(RootAttribute::CompoundP3sg))
    .add_when(s.gen_st, "+nIn", previous_state_is_not(s.a3sg_su_s))
    .add_when(s.gen_st, "yIn", previous_state_is(s.a3sg_su_s))
    .add_when(s.equ_st, ">cA", not_have_root(RootAttribute::CompoundP3sg).and(equ_cond.clone()))
    .add(s.ins_st, "+ylA")
    .add_when(s.dat_st, "+nA", has_root(RootAttribute::CompoundP3sg))
    .add_when(s.abl_st, "+ndAn", has_root(RootAttribute::CompoundP3sg))
    .add_when(s.loc_st, "+ndA", has_root(RootAttribute::CompoundP3sg))
    .add_when(s.equ_st, "+ncA", has_root(RootAttribute::CompoundP3sg).and(equ_cond.clone()))
    .add_when(s.acc_st, "+nI", has_root(RootAttribute::CompoundP3sg))
    .add_empty_when(s.dat_st, has_root(RootAttribute::ImplicitDative));
  g.at(s.p1sg_s)
    .add_empty(s.nom_st)
    .add(s.dat_st, "A")
    .add(s.loc_st, "dA")
    .add(s.abl_st, "dAn")
    .add(s.ins_st, "lA")
    .add(s.gen_st, "In")
    .add_when(s.equ_st, "cA", equ_cond.clone().or(contains_morpheme(&[m.past_part])))
    .add(s.acc_st, "I");
  g.at(s.p2sg_s)
    .add_empty(s.nom_st)
    .add(s.dat_st, "A")
    .add(s.loc_st, "dA")
    .add(s.abl_st, "dAn")
    .add(s.ins_st, "lA")
    .add(s.gen_st, "In")
    .add_when(s.equ_st, "cA", equ_cond.clone().or(contains_morpheme(&[m.past_part])))
    .add(s.acc_st, "I");
  g.at(s.p3sg_s)
    .add_empty(s.nom_st)
    .add(s.dat_st, "nA")
    .add(s.loc_st, "ndA")
    .add(s.abl_st, "ndAn")
    .add(s.ins_st, "ylA")
    .add(s.gen_st, "nIn")
    .add_when(s.equ_st, "ncA", equ_cond.clone().or(contains_morpheme(&[m.past_part])))
    .add(s.acc_st, "nI");
  g.at(s.p1pl_s)
    .add_empty(s.nom_st)
    .add(s.dat_st, "A")
    .add(s.loc_st, "dA")
    .add(s.abl_st, "dAn")
    .add(s.ins_st, "lA")
    .add(s.gen_st, "In")
    .add_when(s.equ_st, "cA", equ_cond.clone().or(contains_morpheme(&[m.past_part])))
    .add(s.acc_st, "I");
  g.at(s.p2pl_s)
    .add_empty(s.nom_st)
    .add(s.dat_st, "A")
    .add(s.loc_st, "dA")
    .add(s.abl_st, "dAn")
    .add(s.ins_st, "lA")
    .add(s.gen_st, "In")
    .add_when(s.equ_st, "cA", equ_cond.or(contains_morpheme(&[m.past_part])))
    .add(s.acc_st, "I");
  g.at(s.p3pl_s)
    .add_empty(s.nom_st)
    .add(s.dat_st, "nA")
    .add(s.loc_st, "ndA")
    .add(s.abl_st, "ndAn")
    .add(s.ins_st, "ylA")
    .add(s.gen_st, "nIn")
    .add(s.equ_st, "+ncA")
    .add(s.acc_st, "nI");
  g.at(s.nom_st)
    .add_when(s.dim_s, ">cI~k", has_no_surface().and_not(root_is_abbrv.clone()))
    .add_when(s.dim_s, ">cI!ğ", has_no_surface().and_not(root_is_abbrv.clone()))
    .add_when(s.dim_s, "cAğIz", has_no_surface().and_not(root_is_abbrv.clone()));
  g.at(s.dim_s).add_empty(s.noun_s);
  let empty_adj_noun_seq =
    contains_morpheme_sequence(&[m.adj, m.zero, m.noun, m.a3sg, m.pnon, m.nom]);
  g.at(s.nom_st)
    .add_when(
      s.ness_s,
      "lI~k",
      CURRENT_GROUP_EMPTY
        .and_not(contains_ness.clone())
        .and_not(empty_adj_noun_seq.clone())
        .and_not(root_is_abbrv.clone()),
    )
    .add_when(
      s.ness_s,
      "lI!ğ",
      CURRENT_GROUP_EMPTY
        .and_not(contains_ness)
        .and_not(empty_adj_noun_seq)
        .and_not(root_is_abbrv.clone()),
    );
  g.at(s.ness_s).add_empty(s.noun_s);
  g.at(s.nom_st)
    .add_when(s.agt_s, ">cI", CURRENT_GROUP_EMPTY.and_not(contains_morpheme(&[m.adj, m.agt])));
  g.at(s.agt_s).add_empty(s.noun_s);
  let noun2_verb_zero_derivation_condition =
    HAS_TAIL.and_not(CURRENT_GROUP_EMPTY.and(last_derivation_is(s.adj_zero_deriv_s)));
  g.at(s.nom_st).add_empty_when(s.noun_zero_deriv_s, noun2_verb_zero_derivation_condition.clone());
  g.at(s.dat_st).add_empty_when(s.noun_zero_deriv_s, noun2_verb_zero_derivation_condition.clone());
  g.at(s.abl_st).add_empty_when(s.noun_zero_deriv_s, noun2_verb_zero_derivation_condition.clone());
  g.at(s.loc_st).add_empty_when(s.noun_zero_deriv_s, noun2_verb_zero_derivation_condition.clone());
  g.at(s.ins_st).add_empty_when(s.noun_zero_deriv_s, noun2_verb_zero_derivation_condition.clone());
  g.at(s.gen_st).add_empty_when(s.noun_zero_deriv_s, noun2_verb_zero_derivation_condition);
  g.at(s.noun_zero_deriv_s).add_empty(s.n_verb_s);
  let no_surface_after_derivation = CURRENT_GROUP_EMPTY;
  g.at(s.nom_st)
    .add_when(
      s.with_s,
      "lI",
      no_surface_after_derivation
        .clone()
        .and_not(contains_morpheme(&[m.with, m.without]))
        .and_not(root_is_abbrv.clone()),
    )
    .add_when(
      s.without_s,
      "sIz",
      no_surface_after_derivation
        .clone()
        .and_not(contains_morpheme(&[m.with, m.without, m.inf1]))
        .and_not(root_is_abbrv.clone()),
    )
    .add_when(
      s.just_like_s,
      "+msI",
      no_surface_after_derivation
        .clone()
        .and_not(contains_morpheme(&[m.just_like, m.fut_part, m.past_part, m.pres_part, m.adj]))
        .and_not(root_is_abbrv.clone()),
    )
    .add_when(
      s.just_like_s,
      "ImsI",
      not_have(PhoneticAttribute::LastLetterVowel)
        .and(no_surface_after_derivation.clone())
        .and_not(contains_morpheme(&[m.just_like, m.fut_part, m.past_part, m.pres_part, m.adj]))
        .and_not(root_is_abbrv.clone()),
    )
    .add_when(
      s.related_s,
      "sAl",
      no_surface_after_derivation
        .clone()
        .and_not(contains_morpheme(&[m.with, m.without, m.related]))
        .and_not(root_is_abbrv.clone()),
    );
  g.at(s.with_s).add_empty(s.adjective_root_st);
  g.at(s.without_s).add_empty(s.adjective_root_st);
  g.at(s.related_s).add_empty(s.adjective_root_st);
  g.at(s.just_like_s).add_empty(s.adjective_root_st);
  let not_rel_repetition =
    !has_tail_sequence(&[m.rel, m.adj, m.zero, m.noun, m.a3sg, m.pnon, m.loc]);
  g.at(s.loc_st).add_when(s.rel_s, "ki", not_rel_repetition);
  g.at(s.rel_s).add_empty(s.adjective_root_st);
  let time = CURRENT_GROUP_EMPTY.and(secondary_pos_is(SecondaryPos::Time));
  let dun = "dün_Noun_Time";
  let gun = "gün_Noun_Time";
  let bugun = "bugün_Noun_Time";
  let ileri = "ileri_Noun";
  let geri = "geri_Noun";
  let ote = "öte_Noun";
  let beri = "beri_Noun";
  let time2 = root_is_any(&[dun, gun, bugun]);
  g.at(s.nom_st)
    .add_when(s.rel_s, "ki", time.clone().and_not(time2.clone()))
    .add_when(s.rel_s, "ki", root_is_any(&[ileri, geri, ote, beri]))
    .add_when(s.rel_s, "kü", time2.and(time));
  g.at(s.gen_st).add(s.rel_to_pron_s, "ki");
  g.at(s.rel_to_pron_s).add_empty(s.pron_after_rel_s);
  let verb_deriv = contains_morpheme(&[m.inf1, m.inf2, m.inf3, m.past_part, m.fut_part]);
  g.at(s.nom_st)
    .add_when(
      s.become_s,
      "lAş",
      no_surface_after_derivation
        .clone()
        .and_not(contains_morpheme(&[m.adj]))
        .and_not(verb_deriv.clone())
        .and_not(root_is_abbrv.clone()),
    );
  g.at(s.become_s).add_empty(s.verb_root_s);
  g.at(s.nom_st)
    .add_when(
      s.acquire_s,
      "lAn",
      no_surface_after_derivation
        .and_not(contains_morpheme(&[m.adj]))
        .and_not(verb_deriv)
        .and_not(root_is_abbrv),
    );
  g.at(s.acquire_s).add_empty(s.verb_root_s);
  g.at(s.noun_inf1_root_s).add_empty(s.a3sg_inf1_s);
  g.at(s.a3sg_inf1_s).add_empty(s.pnon_inf1_s);
  g.at(s.pnon_inf1_s)
    .add_empty(s.nom_st)
    .add(s.abl_st, "tAn")
    .add(s.loc_st, "tA")
    .add(s.ins_st, "lA");
  g.at(s.noun_act_of_root_s).add_empty(s.a3sg_act_of_s).add(s.a3pl_act_of_s, "lar");
  g.at(s.a3sg_act_of_s).add_empty(s.pnon_act_of);
  g.at(s.a3pl_act_of_s).add_empty(s.pnon_act_of);
  g.at(s.pnon_act_of).add_empty(s.nom_st);
}

pub(super) fn connect_proper_nouns_and_abbreviations(g: &mut MorphotacticsGraph, s: &States) {
  g.at(s.noun_proper_s).add_empty(s.a3sg_s).add(s.a3pl_s, "lAr");
  g.at(s.punc_proper_separator_s).add_empty(s.a3sg_s).add(s.a3pl_s, "lAr");
  g.at(s.noun_abbrv_s).add_empty(s.a3sg_s).add(s.a3pl_s, "lAr");
  g.at(s.noun_no_suffix_s).add_empty(s.noun_a3sg_no_suffix_s);
  g.at(s.noun_a3sg_no_suffix_s).add_empty(s.noun_pnon_no_suffix_s);
  g.at(s.noun_pnon_no_suffix_s).add_empty(s.noun_nom_no_suffix_st);
}

/// Adjectives take no inflection of their own; they zero-derive into nouns and verbs.
pub(super) fn connect_adjectives(g: &mut MorphotacticsGraph, m: &Morphemes, s: &States) {
  g.at(s.adjective_root_st).add_empty_when(s.adj_zero_deriv_s, HAS_TAIL);
  g.at(s.adj_zero_deriv_s).add_empty(s.noun_s).add_empty(s.n_verb_s);
  g.at(s.adjective_root_st).add(s.a_ly_s, ">cA");
  g.at(s.a_ly_s).add_empty(s.adv_root_st);
  g.at(s.adjective_root_st)
    .add_when(s.a_as_if_s, ">cA", !contains_morpheme(&[m.as_if, m.ly, m.agt, m.with, m.just_like]));
  g.at(s.a_as_if_s).add_empty(s.adjective_root_st);
  g.at(s.adjective_root_st)
    .add_when(s.a_agt_s, ">cI", !contains_morpheme(&[m.as_if, m.ly, m.agt, m.with, m.just_like]));
  g.at(s.a_agt_s).add_empty(s.noun_s);
  g.at(s.adjective_root_st)
    .add_when(s.just_like_s, "+msI", CURRENT_GROUP_EMPTY.and(!contains_morpheme(&[m.just_like])))
    .add_when(
      s.just_like_s,
      "ImsI",
      not_have(PhoneticAttribute::LastLetterVowel)
        .and(CURRENT_GROUP_EMPTY)
        .and(!contains_morpheme(&[m.just_like])),
    )
    .add_when(s.become_s, "lAş", CURRENT_GROUP_EMPTY)
    .add_when(s.acquire_s, "lAn", CURRENT_GROUP_EMPTY);
  let c1 = previous_morpheme_is_any(&[m.fut_part, m.past_part]);
  g.at(s.adj_after_verb_s)
    .add_empty_when(s.a_pnon_st, c1.clone())
    .add_when(s.a_p1sg_st, "Im", c1.clone())
    .add_when(s.a_p2sg_st, "In", c1.clone())
    .add_when(s.a_p3sg_st, "I", c1.clone())
    .add_when(s.a_p1pl_st, "ImIz", c1.clone())
    .add_when(s.a_p2pl_st, "InIz", c1.clone())
    .add_when(s.a_p3pl_st, "lArI", c1);
  g.at(s.adjective_root_st).add(s.ness_s, "lI~k").add(s.ness_s, "lI!ğ");
  g.at(s.adj_after_verb_st)
    .add_when(s.ness_s, "lI~k", previous_morpheme_is(m.aor_part))
    .add_when(s.ness_s, "lI!ğ", previous_morpheme_is(m.aor_part));
}

pub(super) fn connect_numerals(g: &mut MorphotacticsGraph, m: &Morphemes, s: &States) {
  g.at(s.numeral_root_st)
    .add(s.ness_s, "lI~k")
    .add(s.ness_s, "lI!ğ")
    .add_empty_when(s.num_zero_deriv_s, HAS_TAIL);
  g.at(s.num_zero_deriv_s).add_empty(s.noun_s).add_empty(s.n_verb_s);
  g.at(s.numeral_root_st)
    .add_when(s.just_like_s, "+msI", CURRENT_GROUP_EMPTY.and(!contains_morpheme(&[m.just_like])))
    .add_when(
      s.just_like_s,
      "ImsI",
      not_have(PhoneticAttribute::LastLetterVowel)
        .and(CURRENT_GROUP_EMPTY)
        .and(!contains_morpheme(&[m.just_like])),
    );
}

/// Copular endings on nominals (`evdeyim`, `güzeldi`) including the negative `değil`.
pub(super) fn connect_verb_after_noun_adj(
  g: &mut MorphotacticsGraph,
  m: &Morphemes,
  s: &States,
) {
  g.at(s.n_verb_s)
    .add_empty(s.n_present_s)
    .add(s.n_past_s, "+y>dI")
    .add(s.n_narr_s, "+ymIş")
    .add(s.n_cond_s, "+ysA")
    .add(s.v_while_s, "+yken");
  let degil_root = "değil_Verb";
  g.at(s.n_verb_degil_s).add_empty_when(s.n_neg_s, root_is(degil_root));
  g.copy_outgoing_transitions(s.n_neg_s, s.n_verb_s);
  let no_family = not_have_root(RootAttribute::FamilyMember);
  let verb_deriv = contains_morpheme(&[m.inf1, m.inf2, m.inf3, m.past_part, m.fut_part]);
  let allow_a1sg_trans = no_family
    .clone()
    .and_not(contains_morpheme_sequence(&[m.p1sg, m.nom]))
    .and_not(verb_deriv.clone());
  let allow_a2sg_trans = no_family
    .clone()
    .and_not(contains_morpheme_sequence(&[m.p2sg, m.nom]))
    .and_not(verb_deriv.clone());
  let allow_a3pl_trans = no_family
    .clone()
    .and_not(previous_group_contains(&[s.a3pl_s]))
    .and_not(contains_morpheme_sequence(&[m.p3pl, m.nom]))
    .and_not(verb_deriv.clone());
  let allow_a2pl_trans = no_family
    .clone()
    .and_not(contains_morpheme_sequence(&[m.p2pl, m.nom]))
    .and_not(verb_deriv.clone());
  let allow_a1pl_trans = no_family
    .and_not(contains_morpheme_sequence(&[m.p1sg, m.nom]))
    .and_not(contains_morpheme_sequence(&[m.p1pl, m.nom]))
    .and_not(verb_deriv);
  g.at(s.n_present_s)
    .add_when(s.n_a1sg_st, "+yIm", allow_a1sg_trans.clone())
    .add_when(s.n_a2sg_st, "sIn", allow_a2sg_trans.clone())
    .add_empty(s.n_a3sg_s)
    .add_empty_when(s.n_a3sg_st, root_is(degil_root))
    .add_when(
      s.n_a3pl_st,
      "lAr",
      not_have_root(RootAttribute::CompoundP3sg)
        .and_not(previous_group_contains_morpheme(&[m.inf1]))
        .and(allow_a3pl_trans.clone()),
    );
  g.at(s.n_past_s).add_when(s.n_a1sg_st, "m", allow_a1sg_trans.clone());
  g.at(s.n_narr_s).add_when(s.n_a1sg_st, "Im", allow_a1sg_trans.clone());
  g.at(s.n_past_s).add_when(s.n_a2sg_st, "n", allow_a2sg_trans.clone());
  g.at(s.n_narr_s).add_when(s.n_a2sg_st, "sIn", allow_a2sg_trans.clone());
  g.at(s.n_past_s).add_when(s.n_a1pl_st, "k", allow_a1pl_trans.clone());
  g.at(s.n_narr_s).add_when(s.n_a1pl_st, "Iz", allow_a1pl_trans.clone());
  g.at(s.n_present_s).add_when(s.n_a1pl_st, "+yIz", allow_a1pl_trans.clone());
  g.at(s.n_past_s).add_when(s.n_a2pl_st, "InIz", allow_a2pl_trans.clone());
  g.at(s.n_narr_s).add_when(s.n_a2pl_st, "sInIz", allow_a2pl_trans.clone());
  g.at(s.n_present_s).add_when(s.n_a2pl_st, "sInIz", allow_a2pl_trans.clone());
  g.at(s.n_past_s)
    .add_when(
      s.n_a3pl_st,
      "lAr",
      not_have_root(RootAttribute::CompoundP3sg).and(allow_a3pl_trans.clone()),
    );
  g.at(s.n_narr_s)
    .add_when(s.n_a3pl_st, "lAr", not_have_root(RootAttribute::CompoundP3sg).and(allow_a3pl_trans));
  g.at(s.n_past_s).add_empty(s.n_a3sg_st);
  g.at(s.n_narr_s).add_empty(s.n_a3sg_st).add(s.n_cond_s, "sA");
  g.at(s.n_cond_s)
    .add_when(s.n_a1sg_st, "m", allow_a1sg_trans)
    .add_when(s.n_a2sg_st, "n", allow_a2sg_trans)
    .add_when(s.n_a1pl_st, "k", allow_a1pl_trans)
    .add_when(s.n_a2pl_st, "nIz", allow_a2pl_trans)
    .add_empty(s.n_a3sg_st)
    .add(s.n_a3pl_st, "lAr");
  let reject_no_copula =
    !current_group_contains_any(&[s.n_past_s, s.n_cond_s, s.n_cop_before_a3pl_s]);
  g.at(s.n_a1sg_st).add_when(s.n_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.n_a2sg_st).add_when(s.n_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.n_a1pl_st).add_when(s.n_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.n_a2pl_st).add_when(s.n_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.n_a3sg_s).add_when(s.n_cop_st, ">dIr", reject_no_copula.clone());
  g.at(s.n_a3pl_st).add_when(s.n_cop_st, "dIr", reject_no_copula);
  let as_if_cond = previous_morpheme_is_any(&[m.narr]);
  g.at(s.n_a3sg_st).add_when(s.v_as_if_s, ">cAsInA", as_if_cond.clone());
  g.at(s.n_a1sg_st).add_when(s.v_as_if_s, ">cAsInA", as_if_cond.clone());
  g.at(s.n_a2sg_st).add_when(s.v_as_if_s, ">cAsInA", as_if_cond.clone());
  g.at(s.n_a1pl_st).add_when(s.v_as_if_s, ">cAsInA", as_if_cond.clone());
  g.at(s.n_a2pl_st).add_when(s.v_as_if_s, ">cAsInA", as_if_cond.clone());
  g.at(s.n_a3pl_st).add_when(s.v_as_if_s, ">cAsInA", as_if_cond);
  g.at(s.n_present_s).add(s.n_cop_before_a3pl_s, ">dIr");
  g.at(s.n_cop_before_a3pl_s).add(s.n_a3pl_st, "lAr");
}

/// Personal, demonstrative, quantifying, question and reflexive pronouns.
///
/// Most pronouns have irregular person and case forms, so the transitions are guarded by
/// the lexicon item of the root.
pub(super) fn connect_pronouns(g: &mut MorphotacticsGraph, m: &Morphemes, s: &States) {
  let ben = "ben_Pron_Pers";
  let sen = "sen_Pron_Pers";
  let o = "o_Pron_Pers";
  let biz = "biz_Pron_Pers";
  let siz = "siz_Pron_Pers";
  let falan = "falan_Pron_Pers";
  let falanca = "falanca_Pron_Pers";
  g.at(s.pron_pers_s)
    .add_empty_when(s.p_a1sg_s, root_is(ben))
    .add_empty_when(s.p_a2sg_s, root_is(sen))
    .add_empty_when(s.p_a3sg_s, root_is_any(&[o, falan, falanca]))
    .add_when(s.p_a3pl_s, "nlAr", root_is(o))
    .add_when(s.p_a3pl_s, "lAr", root_is_any(&[falan, falanca]))
    .add_empty_when(s.p_a1pl_s, root_is(biz))
    .add_when(s.p_a1pl_s, "lAr", root_is(biz))
    .add_empty_when(s.p_a2pl_s, root_is(siz))
    .add_when(s.p_a2pl_s, "lAr", root_is(siz));
  g.at(s.pron_pers_mod_s)
    .add_empty_when(s.p_a1sg_mod_s, root_is(ben))
    .add_empty_when(s.p_a2sg_mod_s, root_is(sen));
  g.at(s.p_a1sg_mod_s).add_empty(s.p_pnon_mod_s);
  g.at(s.p_a2sg_mod_s).add_empty(s.p_pnon_mod_s);
  g.at(s.p_pnon_mod_s).add(s.p_dat_st, "A");
  g.at(s.p_a1sg_s).add_empty(s.p_pnon_s);
  g.at(s.p_a2sg_s).add_empty(s.p_pnon_s);
  g.at(s.p_a3sg_s).add_empty(s.p_pnon_s);
  g.at(s.p_a1pl_s).add_empty(s.p_pnon_s);
  g.at(s.p_a2pl_s).add_empty(s.p_pnon_s);
  g.at(s.p_a3pl_s).add_empty(s.p_pnon_s);
  g.at(s.pron_after_rel_s).add_empty(s.p_a3sg_rel_s).add(s.p_a3pl_rel_s, "lAr");
  g.at(s.p_a3sg_rel_s).add_empty(s.p_pnon_rel_s);
  g.at(s.p_a3pl_rel_s).add_empty(s.p_pnon_rel_s);
  g.at(s.p_pnon_rel_s)
    .add_empty(s.p_nom_st)
    .add(s.p_dat_st, "+nA")
    .add(s.p_acc_st, "+nI")
    .add(s.p_abl_st, "+ndAn")
    .add(s.p_loc_st, "+ndA")
    .add(s.p_ins_st, "+ylA")
    .add(s.p_gen_st, "+nIn");
  let bu = "bu_Pron_Demons";
  let su = "şu_Pron_Demons";
  let o_demons = "o_Pron_Demons";
  g.at(s.pron_demons_s).add_empty(s.p_a3sg_s).add(s.p_a3pl_s, "nlAr");
  let birbiri = "birbiri_Pron_Quant";
  let biri = "biri_Pron_Quant";
  let bazi = "bazı_Pron_Quant";
  let bircogu = "birçoğu_Pron_Quant";
  let birkaci = "birkaçı_Pron_Quant";
  let beriki = "beriki_Pron_Quant";
  let cogu = "çoğu_Pron_Quant";
  let cumlesi = "cümlesi_Pron_Quant";
  let hep = "hep_Pron_Quant";
  let herbiri = "herbiri_Pron_Quant";
  let herkes = "herkes_Pron_Quant";
  let hicbiri = "hiçbiri_Pron_Quant";
  let hepsi = "hepsi_Pron_Quant";
  let kimi = "kimi_Pron_Quant";
  let kimse = "kimse_Pron_Quant";
  let oburku = "öbürkü_Pron_Quant";
  let oburu = "öbürü_Pron_Quant";
  let tumu = "tümü_Pron_Quant";
  let topu = "topu_Pron_Quant";
  let umum = "umum_Pron_Quant";
  g.at(s.pron_quant_s)
    .add_empty_when(
      s.p_quant_a3sg_s,
      root_is_none(&[herkes, umum, hepsi, cumlesi, hep, tumu, birkaci, topu]),
    )
    .add_when(
      s.p_quant_a3pl_s,
      "lAr",
      root_is_none(&[
        hep, hepsi, birkaci, umum, cumlesi, cogu, bircogu, herbiri, tumu, hicbiri, topu, oburu,
      ]),
    )
    .add_when(s.p_quant_a1pl_s, "lAr", root_is_any(&[bazi]))
    .add_when(s.p_quant_a2pl_s, "lAr", root_is_any(&[bazi]))
    .add_empty_when(
      s.p_quant_a3pl_s,
      root_is_any(&[herkes, umum, birkaci, hepsi, cumlesi, cogu, bircogu, tumu, topu]),
    )
    .add_empty_when(s.a3sg_s, root_is(kimse))
    .add_when(s.a3pl_s, "lAr", root_is_any(&[kimse]))
    .add_empty_when(
      s.p_quant_a1pl_s,
      root_is_any(&[
        biri, bazi, birbiri, birkaci, herbiri, hep, kimi, cogu, bircogu, tumu, topu, hicbiri,
      ]),
    )
    .add_empty_when(
      s.p_quant_a2pl_s,
      root_is_any(&[
        biri, bazi, birbiri, birkaci, herbiri, hep, kimi, cogu, bircogu, tumu, topu, hicbiri,
      ]),
    );
  g.at(s.pron_quant_modified_s).add_empty(s.p_quant_mod_a3pl_s);
  g.at(s.p_quant_mod_a3pl_s).add(s.p_p3pl_s, "lArI");
  g.at(s.p_quant_a3sg_s)
    .add_empty_when(
      s.p_p3sg_s,
      root_is_any(&[biri, birbiri, kimi, herbiri, hicbiri, oburu, oburku, beriki])
        .and(not_have(PhoneticAttribute::ModifiedPronoun)),
    )
    .add_when(
      s.p_p3sg_s,
      "sI",
      root_is_any(&[biri, bazi, kimi, birbiri, herbiri, hicbiri, oburku])
        .and(not_have(PhoneticAttribute::ModifiedPronoun)),
    );
  g.at(s.p_quant_a3pl_s)
    .add_when(s.p_p3pl_s, "I", root_is_any(&[biri, bazi, birbiri, kimi, oburku, beriki]))
    .add_empty_when(s.p_p3pl_s, root_is_any(&[hepsi, birkaci, cumlesi, cogu, tumu, topu, bircogu]))
    .add_empty_when(s.p_pnon_s, root_is_any(&[herkes, umum, oburku, beriki]));
  g.at(s.p_quant_a1pl_s).add(s.p_p1pl_s, "ImIz");
  g.at(s.p_quant_a2pl_s).add(s.p_p2pl_s, "InIz");
  let ne = "ne_Pron_Ques";
  let nere = "nere_Pron_Ques";
  let kim = "kim_Pron_Ques";
  g.at(s.pron_ques_s).add_empty(s.p_ques_a3sg_s).add(s.p_ques_a3pl_s, "lAr");
  g.at(s.p_ques_a3sg_s)
    .add_empty(s.p_pnon_s)
    .add(s.p_p3sg_s, "+sI")
    .add_when(s.p_p1sg_s, "Im", root_is_not(ne))
    .add_when(s.p_p1sg_s, "yIm", root_is(ne))
    .add_when(s.p_p2sg_s, "In", root_is_not(ne))
    .add_when(s.p_p2sg_s, "yIn", root_is(ne))
    .add_when(s.p_p1pl_s, "ImIz", root_is_not(ne))
    .add_when(s.p_p1pl_s, "yImIz", root_is(ne));
  g.at(s.p_ques_a3pl_s)
    .add_empty(s.p_pnon_s)
    .add(s.p_p3sg_s, "I")
    .add(s.p_p1sg_s, "Im")
    .add(s.p_p1pl_s, "ImIz");
  let kendi = "kendi_Pron_Reflex";
  g.at(s.pron_reflex_s)
    .add_empty(s.p_reflex_a1sg_s)
    .add_empty(s.p_reflex_a2sg_s)
    .add_empty(s.p_reflex_a3sg_s)
    .add_empty(s.p_reflex_a1pl_s)
    .add_empty(s.p_reflex_a2pl_s)
    .add_empty(s.p_reflex_a3pl_s);
  g.at(s.p_reflex_a1sg_s).add(s.p_p1sg_s, "Im");
  g.at(s.p_reflex_a2sg_s).add(s.p_p2sg_s, "In");
  g.at(s.p_reflex_a3sg_s).add(s.p_p3sg_s, "+sI").add_empty(s.p_p3sg_s);
  g.at(s.p_reflex_a1pl_s).add(s.p_p1pl_s, "ImIz");
  g.at(s.p_reflex_a2pl_s).add(s.p_p2pl_s, "InIz");
  g.at(s.p_reflex_a3pl_s).add(s.p_p3pl_s, "lArI");
  let n_group = root_is_none(&[ne, nere, falan, falanca, hep, herkes]);
  let y_group = root_is_any(&[ne, nere, falan, falanca, hep, herkes]);
  g.at(s.p_pnon_s)
    .add_empty(s.p_nom_st)
    .add_when(s.p_dat_st, "+nA", root_is_none(&[ben, sen, ne, nere, falan, falanca, herkes]))
    .add_when(s.p_dat_st, "+yA", y_group.clone())
    .add_when(s.p_acc_st, "+nI", n_group.clone())
    .add_when(s.p_acc_st, "+yI", y_group.clone())
    .add_when(s.p_loc_st, "+ndA", n_group.clone())
    .add_when(s.p_loc_st, ">dA", y_group.clone())
    .add_when(s.p_abl_st, "+ndAn", n_group.clone())
    .add_when(s.p_abl_st, ">dAn", y_group.clone())
    .add_when(s.p_gen_st, "+nIn", n_group.clone().and(root_is_none(&[biz, ben, sen])))
    .add_when(s.p_gen_st, "im", root_is_any(&[ben, biz]))
    .add_when(s.p_gen_st, "in", root_is(sen))
    .add_when(s.p_gen_st, "+yIn", y_group.clone().and(root_is_none(&[biz])))
    .add_when(s.p_equ_st, ">cA", y_group.clone())
    .add_when(s.p_equ_st, ">cA", n_group.clone())
    .add_when(s.p_ins_st, "+ylA", y_group.clone())
    .add_when(s.p_ins_st, "+nlA", n_group.clone())
    .add_when(s.p_ins_st, "+nInlA", n_group.clone().and(root_is_any(&[bu, su, o, sen])))
    .add_when(s.p_ins_st, "inle", root_is(siz))
    .add_when(s.p_ins_st, "imle", root_is_any(&[biz, ben]));
  let p1sg_cond = root_is_any(&[kim, ben, ne, nere, kendi]);
  g.at(s.p_p1sg_s)
    .add_empty(s.p_nom_st)
    .add_when(s.p_dat_st, "+nA", n_group.clone())
    .add_when(s.p_acc_st, "+nI", n_group.clone())
    .add_when(s.p_dat_st, "+yA", y_group.clone())
    .add_when(s.p_acc_st, "+yI", y_group.clone())
    .add_when(s.p_loc_st, "+ndA", root_is_any(&[kendi]))
    .add_when(s.p_abl_st, "+ndAn", root_is_any(&[kendi]))
    .add_when(s.p_equ_st, "+ncA", root_is_any(&[kendi]))
    .add_when(s.p_ins_st, "+nlA", p1sg_cond.clone())
    .add_when(s.p_gen_st, "+nIn", p1sg_cond);
  let p2sg_cond = root_is_any(&[kim, sen, ne, nere, kendi]);
  g.at(s.p_p2sg_s)
    .add_empty(s.p_nom_st)
    .add_when(s.p_dat_st, "+nA", n_group.clone())
    .add_when(s.p_acc_st, "+nI", n_group.clone())
    .add_when(s.p_dat_st, "+yA", y_group.clone())
    .add_when(s.p_acc_st, "+yI", y_group.clone())
    .add_when(s.p_loc_st, "+ndA", root_is_any(&[kendi]))
    .add_when(s.p_abl_st, "+ndAn", root_is_any(&[kendi]))
    .add_when(s.p_equ_st, "+ncA", root_is_any(&[kendi]))
    .add_when(s.p_ins_st, "+nlA", p2sg_cond.clone())
    .add_when(s.p_gen_st, "+nIn", p2sg_cond);
  let p3sg_cond =
    root_is_any(&[kendi, kim, ne, nere, o, bazi, biri, birbiri, herbiri, hep, kimi, hicbiri]);
  g.at(s.p_p3sg_s)
    .add_empty(s.p_nom_st)
    .add_when(s.p_dat_st, "+nA", n_group.clone())
    .add_when(s.p_acc_st, "+nI", n_group.clone())
    .add_when(s.p_dat_st, "+yA", y_group.clone())
    .add_when(s.p_acc_st, "+yI", y_group.clone())
    .add_when(s.p_loc_st, "+ndA", p3sg_cond.clone())
    .add_when(s.p_abl_st, "+ndAn", p3sg_cond.clone())
    .add_when(s.p_gen_st, "+nIn", p3sg_cond.clone())
    .add_when(s.p_equ_st, "ncA", p3sg_cond.clone())
    .add_when(s.p_ins_st, "+ylA", p3sg_cond);
  let hep_cnd = root_is_any(&[
    kendi, kim, ne, nere, biz, siz, biri, birbiri, birkaci, herbiri, hep, kimi, cogu, bircogu, tumu,
    topu, bazi, hicbiri,
  ]);
  g.at(s.p_p1pl_s)
    .add_empty(s.p_nom_st)
    .add_when(s.p_dat_st, "+nA", n_group.clone())
    .add_when(s.p_acc_st, "+nI", n_group.clone())
    .add_when(s.p_dat_st, "+yA", y_group.clone())
    .add_when(s.p_acc_st, "+yI", y_group.clone())
    .add_when(s.p_loc_st, "+ndA", hep_cnd.clone())
    .add_when(s.p_abl_st, "+ndAn", hep_cnd.clone())
    .add_when(s.p_gen_st, "+nIn", hep_cnd.clone())
    .add_when(s.p_equ_st, "+ncA", hep_cnd.clone())
    .add_when(s.p_ins_st, "+nlA", hep_cnd.clone());
  g.at(s.p_p2pl_s)
    .add_empty(s.p_nom_st)
    .add_when(s.p_dat_st, "+nA", n_group.clone())
    .add_when(s.p_acc_st, "+nI", n_group.clone())
    .add_when(s.p_dat_st, "+yA", y_group.clone())
    .add_when(s.p_acc_st, "+yI", y_group.clone())
    .add_when(s.p_loc_st, "+ndA", hep_cnd.clone())
    .add_when(s.p_abl_st, "+ndAn", hep_cnd.clone())
    .add_when(s.p_gen_st, "+nIn", hep_cnd.clone())
    .add_when(s.p_equ_st, "+ncA", hep_cnd.clone())
    .add_when(s.p_ins_st, "+nlA", hep_cnd);
  let hepsi_cnd = root_is_any(&[
    kendi, kim, ne, nere, o, bazi, biri, herkes, umum, birkaci, hepsi, cumlesi, cogu, bircogu,
    birbiri, tumu, kimi, topu,
  ]);
  g.at(s.p_p3pl_s)
    .add_empty(s.p_nom_st)
    .add_when(s.p_dat_st, "+nA", n_group.clone())
    .add_when(s.p_acc_st, "+nI", n_group)
    .add_when(s.p_dat_st, "+yA", y_group.clone())
    .add_when(s.p_acc_st, "+yI", y_group)
    .add_when(s.p_loc_st, "+ndA", hepsi_cnd.clone())
    .add_when(s.p_abl_st, "+ndAn", hepsi_cnd.clone())
    .add_when(s.p_gen_st, "+nIn", hepsi_cnd.clone().or(root_is_any(&[sen, siz])))
    .add_when(s.p_equ_st, "+ncA", hepsi_cnd.clone())
    .add_when(s.p_ins_st, "+ylA", hepsi_cnd);
  g.at(s.p_nom_st)
    .add_when(s.with_s, "+nlI", root_is_any(&[bu, su, o_demons, ben, sen, o, biz, siz]))
    .add_when(s.with_s, "lI", root_is_any(&[nere]))
    .add_when(s.with_s, "+ylI", root_is_any(&[ne]))
    .add_when(s.without_s, "+nsIz", root_is_any(&[nere, bu, su, o_demons, ben, sen, o, biz, siz]))
    .add_when(s.without_s, "+ysIz", root_is_any(&[ne]));
  g.at(s.p_gen_st)
    .add_when(s.rel_s, "ki", root_is_any(&[nere, bu, su, o_demons, ne, sen, o, biz, siz]));
  let not_rel_repetition =
    !has_tail_sequence(&[m.rel, m.adj, m.zero, m.noun, m.a3sg, m.pnon, m.loc]);
  g.at(s.p_loc_st).add_when(s.rel_s, "ki", not_rel_repetition);
  g.at(s.p_ins_st).add(s.v_while_s, "+yken");
  g.at(s.p_nom_st).add_empty_when(s.pron_zero_deriv_s, HAS_TAIL);
  g.at(s.p_dat_st).add_empty_when(s.pron_zero_deriv_s, HAS_TAIL);
  g.at(s.p_loc_st).add_empty_when(s.pron_zero_deriv_s, HAS_TAIL);
  g.at(s.p_abl_st).add_empty_when(s.pron_zero_deriv_s, HAS_TAIL);
  g.at(s.p_gen_st).add_empty_when(s.pron_zero_deriv_s, HAS_TAIL);
  g.at(s.p_ins_st).add_empty_when(s.pron_zero_deriv_s, HAS_TAIL);
  g.at(s.pron_zero_deriv_s).add_empty(s.pv_verb_root_s);
}

pub(super) fn connect_verb_after_pronoun(g: &mut MorphotacticsGraph, s: &States) {
  g.at(s.pv_verb_root_s)
    .add_empty(s.pv_present_s)
    .add(s.v_while_s, "+yken")
    .add(s.pv_past_s, "+ydI")
    .add(s.pv_narr_s, "+ymIş")
    .add(s.pv_cond_s, "+ysA");
  let allow_a1sg_trans = !previous_group_contains(&[s.p_a1pl_s, s.p_p1sg_s]);
  let allow_a1pl_trans =
    !previous_group_contains(&[s.p_a1sg_s, s.p_a2sg_s, s.p_p1sg_s, s.p_p2sg_s]);
  let allow_a2sg_trans = !previous_group_contains(&[s.p_a2pl_s, s.p_p2sg_s]);
  let allow_a2pl_trans = !previous_group_contains(&[s.p_a2sg_s, s.p_p2pl_s]);
  g.at(s.pv_present_s)
    .add_when(s.pv_a1sg_st, "+yIm", allow_a1sg_trans.clone())
    .add_when(s.pv_a2sg_st, "sIn", allow_a2sg_trans.clone())
    .add_empty(s.n_a3sg_s)
    .add_when(s.pv_a1pl_st, "+yIz", allow_a1pl_trans.clone())
    .add(s.pv_a2pl_st, "sInIz")
    .add_when(s.pv_a3pl_st, "lAr", previous_group_contains(&[s.p_loc_st]));
  g.at(s.pv_past_s)
    .add_when(s.pv_a1sg_st, "m", allow_a1sg_trans.clone())
    .add_when(s.pv_a2sg_st, "n", allow_a2sg_trans.clone())
    .add_when(s.pv_a1pl_st, "k", allow_a1pl_trans.clone())
    .add(s.pv_a2pl_st, "InIz")
    .add(s.pv_a3pl_st, "lAr")
    .add_empty(s.pv_a3sg_st);
  g.at(s.pv_narr_s)
    .add_when(s.pv_a1sg_st, "Im", allow_a1sg_trans.clone())
    .add_when(s.pv_a2sg_st, "sIn", allow_a2sg_trans.clone())
    .add_when(s.pv_a1pl_st, "Iz", allow_a1pl_trans.clone())
    .add(s.pv_a2pl_st, "sInIz")
    .add(s.pv_a3pl_st, "lAr")
    .add_empty(s.pv_a3sg_st)
    .add(s.pv_cond_s, "sA");
  g.at(s.pv_cond_s)
    .add_when(s.pv_a1sg_st, "m", allow_a1sg_trans)
    .add_when(s.pv_a2sg_st, "n", allow_a2sg_trans)
    .add_when(s.pv_a1pl_st, "k", allow_a1pl_trans)
    .add_when(s.pv_a2pl_st, "nIz", allow_a2pl_trans)
    .add_empty(s.pv_a3sg_st)
    .add(s.pv_a3pl_st, "lAr");
  let reject_no_copula =
    !current_group_contains_any(&[s.pv_past_s, s.pv_cond_s, s.pv_cop_before_a3pl_s]);
  g.at(s.pv_a1sg_st).add_when(s.pv_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.pv_a2sg_st).add_when(s.pv_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.pv_a1pl_st).add_when(s.pv_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.pv_a2pl_st).add_when(s.pv_cop_st, "dIr", reject_no_copula.clone());
  g.at(s.pv_a3sg_s).add_when(s.pv_cop_st, ">dIr", reject_no_copula.clone());
  g.at(s.pv_a3pl_st).add_when(s.pv_cop_st, "dIr", reject_no_copula);
  g.at(s.pv_present_s).add(s.pv_cop_before_a3pl_s, ">dIr");
  g.at(s.pv_cop_before_a3pl_s).add(s.pv_a3pl_st, "lAr");
}

pub(super) fn connect_adverbs(g: &mut MorphotacticsGraph, s: &States) {
  g.at(s.adv_noun_root_st).add_empty(s.av_zero_s);
  g.at(s.av_zero_s).add_empty(s.av_noun_after_adv_root_st);
  g.at(s.av_noun_after_adv_root_st).add_empty(s.av_a3sg_s);
  g.at(s.av_a3sg_s).add_empty(s.av_pnon_s);
  g.at(s.av_pnon_s).add(s.av_dat_st, "+yA");
  g.at(s.adv_for_verb_deriv_st).add_empty(s.av_zero_to_verb_s);
  g.at(s.av_zero_to_verb_s).add_empty(s.n_verb_s);
}

pub(super) fn connect_last_vowel_drop_words(g: &mut MorphotacticsGraph, s: &States) {
  g.at(s.noun_last_vowel_drop_root_s)
    .add_empty(s.a3sg_last_vowel_drop_s)
    .add(s.a3_pl_last_vowel_drop_s, "lAr");
  g.at(s.a3sg_last_vowel_drop_s).add_empty(s.p_non_last_vowel_drop_s);
  g.at(s.a3_pl_last_vowel_drop_s).add_empty(s.p_non_last_vowel_drop_s);
  g.at(s.p_non_last_vowel_drop_s).add(s.loc_st, ">dA").add(s.abl_st, ">dAn");
  g.at(s.adj_last_vowel_drop_root_s).add_empty(s.zero_last_vowel_drop_s);
  g.at(s.postp_last_vowel_drop_root_s).add_empty(s.zero_last_vowel_drop_s);
  g.at(s.zero_last_vowel_drop_s).add_empty(s.noun_last_vowel_drop_root_s);
}

/// `gibi` and `sonra` can be used as nouns (`gibisi`, `sonrasında`).
pub(super) fn connect_postpositives(g: &mut MorphotacticsGraph, s: &States) {
  g.at(s.postp_root_st).add_empty(s.postp_zero_s);
  g.at(s.postp_zero_s).add_empty(s.n_verb_s);
  let gibi_gen = "gibi_Postp_PCGen";
  let gibi_nom = "gibi_Postp_PCNom";
  let sonra_abl = "sonra_Postp_PCAbl";
  g.at(s.postp_zero_s).add_empty_when(s.po2n_root_s, root_is_any(&[gibi_gen, gibi_nom, sonra_abl]));
  g.at(s.po2n_root_s).add_empty(s.po2n_a3sg_s).add(s.po2n_a3pl_s, "lAr");
  g.at(s.po2n_a3sg_s)
    .add(s.po2n_p3sg_s, "+sI")
    .add_when(s.po2n_p1sg_s, "m", root_is_any(&[gibi_gen, gibi_nom]))
    .add_when(s.po2n_p2sg_s, "n", root_is_any(&[gibi_gen, gibi_nom]))
    .add_when(s.po2n_p1pl_s, "miz", root_is_any(&[gibi_gen, gibi_nom]))
    .add_when(s.po2n_p2pl_s, "niz", root_is_any(&[gibi_gen, gibi_nom]));
  g.at(s.po2n_a3pl_s).add(s.po2n_p3sg_s, "+sI").add_empty(s.po2n_pnon_s);
  g.at(s.po2n_p3sg_s)
    .add_empty(s.po2n_nom_st)
    .add(s.po2n_dat_st, "nA")
    .add(s.po2n_loc_st, "ndA")
    .add(s.po2n_abl_st, "ndAn")
    .add(s.po2n_ins_st, "ylA")
    .add(s.po2n_gen_st, "nIn")
    .add(s.po2n_acc_st, "nI");
  g.at(s.po2n_pnon_s)
    .add_empty(s.po2n_nom_st)
    .add(s.po2n_dat_st, "A")
    .add(s.po2n_loc_st, "dA")
    .add(s.po2n_abl_st, "dAn")
    .add(s.po2n_ins_st, "lA")
    .add(s.po2n_gen_st, "In")
    .add(s.po2n_equ_st, "cA")
    .add(s.po2n_acc_st, "I");
  g.at(s.po2n_p1sg_s).add(s.po2n_dat_st, "e");
  g.at(s.po2n_p2sg_s).add(s.po2n_dat_st, "e");
  g.at(s.po2n_p1pl_s).add(s.po2n_dat_st, "e");
  g.at(s.po2n_p2pl_s).add(s.po2n_dat_st, "e");
}
