//! Edge-case coverage for character handling and boundary inputs.
//!
//! These tests focus on multi-byte characters, where lengths are counted in
//! characters rather than bytes, and on empty or very short inputs.

use obfuscate::{
    Obfuscator, SplitPoint, all, all_with_mask, at_first, at_nth, none, portion,
    with_fixed_length_with_mask,
};

mod empty_and_short_strings {
    use super::*;

    #[test]
    fn every_rule_accepts_empty_input() {
        assert_eq!(all().obfuscate(""), "");
        assert_eq!(none().obfuscate(""), "");
        assert_eq!(portion().keep_at_start(2).build().unwrap().obfuscate(""), "");
        assert_eq!(at_first("@").split_to(all(), none()).obfuscate(""), "");
        assert_eq!(
            none().until_length(1).unwrap().then(all()).obfuscate(""),
            ""
        );
    }

    #[test]
    fn input_exactly_at_prefix_length_uses_first_rule_only() {
        let obfuscator = none().until_length(3).unwrap().then(all());
        assert_eq!(obfuscator.obfuscate("abc"), "abc");
        assert_eq!(obfuscator.obfuscate("abcd"), "abc*");
    }

    #[test]
    fn separator_at_the_edges() {
        let obfuscator = at_first("@").split_to(all(), all());
        assert_eq!(obfuscator.obfuscate("@"), "@");
        assert_eq!(obfuscator.obfuscate("@abc"), "@***");
        assert_eq!(obfuscator.obfuscate("abc@"), "***@");
    }

    #[test]
    fn huge_keep_values_are_allowed_without_fixed_length() {
        let obfuscator = portion()
            .keep_at_start(usize::MAX)
            .keep_at_end(usize::MAX)
            .build()
            .unwrap();
        assert_eq!(obfuscator.obfuscate("secret"), "secret");
    }
}

mod unicode {
    use super::*;

    #[test]
    fn masks_count_characters() {
        assert_eq!(all().obfuscate("héllo"), "*****");
        assert_eq!(all().obfuscate("日本語"), "***");
        assert_eq!(all_with_mask("xx").obfuscate("日本"), "xxxx");
    }

    #[test]
    fn portions_keep_whole_characters() {
        let obfuscator = portion().keep_at_start(2).keep_at_end(1).build().unwrap();
        assert_eq!(obfuscator.obfuscate("日本語テキスト"), "日本****ト");
        assert_eq!(obfuscator.obfuscate("ñandú"), "ña**ú");
    }

    #[test]
    fn prefix_lengths_count_characters() {
        let obfuscator = none().until_length(2).unwrap().then(all());
        assert_eq!(obfuscator.obfuscate("€€€€"), "€€**");
    }

    #[test]
    fn multi_character_masks_repeat_per_position() {
        let obfuscator = with_fixed_length_with_mask(2, "‹›").unwrap();
        assert_eq!(obfuscator.obfuscate("anything"), "‹›‹›");

        let obfuscator = portion().keep_at_end(1).mask("#-").build().unwrap();
        assert_eq!(obfuscator.obfuscate("abc"), "#-#-c");
    }

    #[test]
    fn split_points_work_between_multi_byte_characters() {
        let obfuscator = at_first("→").split_to(none(), all());
        assert_eq!(obfuscator.obfuscate("clé→valeur"), "clé→******");
    }

    #[test]
    fn custom_offsets_inside_a_character_are_not_found() {
        // Byte offset 1 is inside the two-byte 'é'.
        let split = SplitPoint::new(|_| Some(1), 0);
        let obfuscator = split.split_to(all(), none());
        assert_eq!(obfuscator.obfuscate("éa"), "**");
    }
}

mod nth_occurrence {
    use super::*;

    #[test]
    fn counts_overlapping_matches() {
        let obfuscator = at_nth("aa", 1).split_to(all(), none());
        // Matches start at byte 0 and byte 1.
        assert_eq!(obfuscator.obfuscate("aaab"), "*aab");
    }

    #[test]
    fn missing_occurrence_uses_before_for_everything() {
        let obfuscator = at_nth(".", 3).split_to(all(), none());
        assert_eq!(obfuscator.obfuscate("a.b.c"), "*****");
    }
}
