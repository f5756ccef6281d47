//! Board-level properties of the move engine over many generated boards.

use merge2048::{Board, Direction, RandomSource, ScriptedRandom, SeededRandom};

type Values = [[u32; 4]; 4];

fn random_values(rng: &mut SeededRandom) -> Values {
    let mut values = [[0u32; 4]; 4];
    for row in values.iter_mut() {
        for cell in row.iter_mut() {
            // Roughly a third empty, the rest 2..=64.
            let draw = rng.next(9);
            *cell = if draw < 3 { 0 } else { 1 << (draw - 2) };
        }
    }
    values
}

fn mirror(values: Values) -> Values {
    values.map(|mut row| {
        row.reverse();
        row
    })
}

fn transpose(values: Values) -> Values {
    let mut out = [[0u32; 4]; 4];
    for (r, row) in values.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            out[c][r] = value;
        }
    }
    out
}

fn shifted(values: Values, direction: Direction) -> (Values, bool, u64, usize) {
    let mut board = Board::from_values(&values).unwrap();
    let result = board.shift(direction).unwrap();
    (board.values(), result.moved, result.score_gained.value(), result.tiles_merged)
}

#[test]
fn test_every_direction_matches_left_on_a_reoriented_board() {
    let mut rng = SeededRandom::new(2048);

    for _ in 0..200 {
        let values = random_values(&mut rng);

        let (right, moved, gained, merged) = shifted(values, Direction::Right);
        let (left, l_moved, l_gained, l_merged) = shifted(mirror(values), Direction::Left);
        assert_eq!(right, mirror(left));
        assert_eq!((moved, gained, merged), (l_moved, l_gained, l_merged));

        let (up, moved, gained, merged) = shifted(values, Direction::Up);
        let (left, l_moved, l_gained, l_merged) = shifted(transpose(values), Direction::Left);
        assert_eq!(up, transpose(left));
        assert_eq!((moved, gained, merged), (l_moved, l_gained, l_merged));

        let (down, moved, gained, merged) = shifted(values, Direction::Down);
        let (left, l_moved, l_gained, l_merged) =
            shifted(mirror(transpose(values)), Direction::Left);
        assert_eq!(down, transpose(mirror(left)));
        assert_eq!((moved, gained, merged), (l_moved, l_gained, l_merged));
    }
}

#[test]
fn test_moves_preserve_tile_sum_and_report_each_merge() {
    let mut rng = SeededRandom::new(7);

    for _ in 0..200 {
        let values = random_values(&mut rng);
        let before: u64 = values.iter().flatten().map(|&v| v as u64).sum();

        for direction in Direction::ALL {
            let mut board = Board::from_values(&values).unwrap();
            let result = board.shift(direction).unwrap();
            assert_eq!(board.total_value().value(), before);

            // Each merge consumes exactly one tile.
            let count = |grid: &Values| grid.iter().flatten().filter(|&&v| v != 0).count();
            assert_eq!(count(&values) - count(&board.values()), result.tiles_merged);
            assert_eq!(result.merge_events.len(), result.tiles_merged);
            for event in &result.merge_events {
                assert_eq!(event.new_value, event.old_value * 2);
                assert_eq!(board.tile(event.position).value, event.new_value);
            }
        }
    }
}

#[test]
fn test_no_op_moves_leave_the_board_and_rng_untouched() {
    let mut rng = SeededRandom::new(99);

    for _ in 0..200 {
        let values = random_values(&mut rng);
        for direction in Direction::ALL {
            let original = Board::from_values(&values).unwrap();
            let mut board = original.clone();
            let mut script = ScriptedRandom::new([5, 5]);

            let moved = board.move_tiles(direction, &mut script).unwrap();
            assert_eq!(moved, original.can_move(direction));
            if moved {
                assert_eq!(script.remaining(), 0);
                let spawned = board.total_value().value() - original.total_value().value();
                assert!(spawned == 2 || spawned == 4);
            } else {
                assert_eq!(board, original);
                assert_eq!(script.remaining(), 2);
            }
        }
    }
}

#[test]
fn test_spawn_distribution_favours_twos() {
    let mut rng = SeededRandom::new(1234);
    let mut twos = 0;
    let mut fours = 0;

    for _ in 0..2000 {
        let mut board = Board::empty();
        let position = board.add_new_tile(&mut rng).unwrap();
        match board.tile(position).value {
            2 => twos += 1,
            4 => fours += 1,
            other => panic!("unexpected spawn value {}", other),
        }
        assert_eq!(board.empty_positions().len(), 15);
    }

    assert_eq!(twos + fours, 2000);
    // Expected ~1800/200; generous bounds for a fixed seed.
    assert!((1650..=1950).contains(&twos), "twos = {}", twos);
}

#[test]
fn test_game_over_only_when_full_and_stuck() {
    let mut rng = SeededRandom::new(5);

    for _ in 0..200 {
        let values = random_values(&mut rng);
        let board = Board::from_values(&values).unwrap();
        let stuck = Direction::ALL.iter().all(|&d| !board.can_move(d));
        let full = board.empty_positions().is_empty();
        assert_eq!(board.is_game_over(), full && stuck);
    }

    let checkerboard = Board::from_values(&[
        [2u32, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
    .unwrap();
    assert!(checkerboard.is_game_over());
}
