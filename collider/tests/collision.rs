use collider::report;
use collider::{Collider, Config, ConfigError, Draw, DrawSampler, Outcome, SeededSource, State};

fn report_line(outcome: &Outcome) -> String {
    let mut buf = String::new();
    let mut itoa_buf = itoa::Buffer::new();
    report::write_outcome(&mut buf, &mut itoa_buf, outcome);
    buf
}

#[test]
fn degenerate_game_reports_first_draw() {
    let config = Config::new(6, 6, None).unwrap();
    let mut game = Collider::new(&config, SeededSource::new(0));
    let outcome = game.run(None);
    assert_eq!(report_line(&outcome), "1 2 3 4 5 6 at 1 draws.\n");
    assert_eq!(game.state(), State::Done);

    // Asking again repeats the collision, not an exhausted cap
    //
    assert_eq!(report_line(&game.run(Some(5))), "1 2 3 4 5 6 at 1 draws.\n");
}

#[test]
fn invalid_parameters_are_rejected_before_sampling() {
    assert_eq!(
        Config::new(5, 6, None),
        Err(ConfigError::DrawExceedsPool { draw: 6, pool: 5 })
    );
    assert!(matches!(
        Config::new(49, 6, Some(vec![1, 2, 3, 4, 5])),
        Err(ConfigError::TargetLength {
            expected: 6,
            found: 5
        })
    ));
    assert!(DrawSampler::new(3, 4).is_err());
}

#[test]
fn reported_draw_is_the_target() {
    let config = Config::new(15, 4, Some(vec![15, 1, 8, 3])).unwrap();
    let mut game = Collider::new(&config, SeededSource::new(8));
    match game.run(Some(1_000_000)) {
        Outcome::Collision { draw, draws } => {
            assert_eq!(&draw, config.target());
            assert_eq!(draw, Draw::from_values([1, 3, 8, 15]));
            assert_eq!(draws, game.draws());
            assert_eq!(
                report_line(&Outcome::Collision { draw, draws }),
                format!("1 3 8 15 at {} draws.\n", draws)
            );
        }
        other => panic!("expected a collision, got {:?}", other),
    }
}

#[test]
fn same_seed_same_draw_count() {
    let config = Config::new(10, 3, None).unwrap();
    let a = Collider::new(&config, SeededSource::new(555)).run(None);
    let b = Collider::new(&config, SeededSource::new(555)).run(None);
    assert_eq!(a, b);
}

#[test]
fn cap_reports_exhaustion() {
    let config = Config::default();
    let mut game = Collider::new(&config, SeededSource::new(1));
    match game.run(Some(10)) {
        Outcome::Exhausted { draws } => {
            assert_eq!(draws, 10);
            assert_eq!(
                report_line(&Outcome::Exhausted { draws }),
                "no collision after 10 draws.\n"
            );
        }
        other => panic!("expected the cap to run out, got {:?}", other),
    }
}

// Expect around 14 million draws; run with `cargo test --release -- --ignored`.
#[test]
#[ignore = "slow: full 6/49 game"]
fn six_from_forty_nine_eventually_hits() {
    let config = Config::default();
    let mut game = Collider::new(&config, SeededSource::new(20240101));
    match game.run(Some(500_000_000)) {
        Outcome::Collision { draw, .. } => {
            assert_eq!(draw.as_slice(), &[1, 2, 3, 4, 5, 6]);
        }
        other => panic!("no collision within cap: {:?}", other),
    }
}
