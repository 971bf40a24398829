/// Property-based tests for trick resolution
use proptest::prelude::*;

use crate::domain::{card_beats, follow_wins, test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: an off-suit follow never wins, whatever its rank.
    #[test]
    fn prop_off_suit_follow_never_wins((lead, follow) in test_gens::two_distinct_cards()) {
        prop_assume!(lead.suit != follow.suit);
        prop_assert!(!follow_wins(lead, follow));
    }

    /// Property: a same-suit follow wins exactly when its value is higher.
    #[test]
    fn prop_same_suit_higher_wins(
        suit in test_gens::suit(),
        (a, b) in (test_gens::rank(), test_gens::rank()),
    ) {
        prop_assume!(a != b);
        let lead = Card { suit, rank: a };
        let follow = Card { suit, rank: b };
        prop_assert_eq!(follow_wins(lead, follow), follow.value() > lead.value());
    }

    /// Property: for distinct cards exactly one of them takes the trick.
    #[test]
    fn prop_exactly_one_winner((lead, follow) in test_gens::two_distinct_cards()) {
        let follow_takes = card_beats(follow, lead, lead.suit);
        let lead_takes = card_beats(lead, follow, lead.suit);
        prop_assert!(follow_takes != lead_takes);
    }
}
