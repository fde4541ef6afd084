// Title scramble text effect.

use rand::rngs::StdRng;
use rand::SeedableRng;
use story_core::Scrambler;

#[test]
fn resolves_left_to_right_and_finishes_on_the_original() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut s = Scrambler::with_duration("ORIGIN", 1.0);
    assert_eq!(s.resolved(), 0);
    let first = s.frame(&mut rng);
    assert_eq!(first.chars().count(), 6);

    s.advance(0.5);
    assert_eq!(s.resolved(), 3);
    let half = s.frame(&mut rng);
    assert!(half.starts_with("ORI"));

    s.advance(0.6);
    assert!(s.is_done());
    assert_eq!(s.frame(&mut rng), "ORIGIN");
}

#[test]
fn whitespace_is_never_scrambled() {
    let mut rng = StdRng::seed_from_u64(1);
    let s = Scrambler::new("THE FIRE");
    let f = s.frame(&mut rng);
    assert_eq!(f.chars().nth(3), Some(' '));
}

#[test]
fn zero_duration_is_immediately_done() {
    let mut rng = StdRng::seed_from_u64(1);
    let s = Scrambler::with_duration("SKY", 0.0);
    assert!(s.is_done());
    assert_eq!(s.frame(&mut rng), "SKY");
}
