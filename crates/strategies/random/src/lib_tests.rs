use super::*;

#[test]
fn choose_returns_a_member_of_the_move_set() {
    let mut strategy = RandomStrategy::new();

    for _ in 0..50 {
        assert!(Move::ALL.contains(&strategy.choose()));
    }
}

#[test]
fn every_move_shows_up_over_many_draws() {
    let mut strategy = RandomStrategy::new();
    let mut seen = [false; 3];

    // A move missing from 300 uniform draws has probability (2/3)^300
    for _ in 0..300 {
        match strategy.choose() {
            Move::Rock => seen[0] = true,
            Move::Paper => seen[1] = true,
            Move::Scissors => seen[2] = true,
        }
    }

    assert_eq!(seen, [true; 3]);
}

#[test]
fn reports_its_name() {
    assert_eq!(RandomStrategy::new().name(), "Random v1.0");
}
