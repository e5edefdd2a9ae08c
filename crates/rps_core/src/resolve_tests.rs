use super::*;

#[test]
fn identical_moves_tie() {
    for mv in Move::ALL {
        assert_eq!(resolve(mv, mv), Outcome::Tie);
    }
}

#[test]
fn swap_flips_the_outcome() {
    for a in Move::ALL {
        for b in Move::ALL {
            assert_eq!(resolve(a, b), resolve(b, a).flip());
        }
    }
}

#[test]
fn beats_relation_is_total_and_antisymmetric() {
    for a in Move::ALL {
        for b in Move::ALL {
            if a == b {
                assert!(!a.beats(b));
            } else {
                // Exactly one direction wins for every non-equal pair
                assert!(a.beats(b) ^ b.beats(a));
            }
        }
    }
}

#[test]
fn fixed_win_table() {
    assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::FirstWins);
    assert_eq!(resolve(Move::Scissors, Move::Rock), Outcome::SecondWins);
    assert_eq!(resolve(Move::Paper, Move::Paper), Outcome::Tie);

    assert!(Move::Scissors.beats(Move::Paper));
    assert!(Move::Paper.beats(Move::Rock));
}

#[test]
fn flip_is_an_involution() {
    assert_eq!(Outcome::FirstWins.flip(), Outcome::SecondWins);
    assert_eq!(Outcome::SecondWins.flip(), Outcome::FirstWins);
    assert_eq!(Outcome::Tie.flip(), Outcome::Tie);
}
