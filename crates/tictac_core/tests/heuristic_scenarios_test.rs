//! Scenario tests for the automated player's move choice.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_core::{Board, Player, Position, Rule, Square, decide, find_line_completion, select_move};

fn board(cells: [char; 9]) -> Board {
    Board::from_squares(cells.map(|c| match c {
        'X' => Square::Occupied(Player::X),
        'O' => Square::Occupied(Player::O),
        _ => Square::Empty,
    }))
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn test_win_now_with_two_in_top_row() {
    // [A,A,_, _,_,_, _,_,_] with the automated player as A.
    let b = board(['O', 'O', '.', '.', '.', '.', '.', '.', '.']);
    assert_eq!(select_move(&b, Player::O, Player::X, &mut rng()), Some(Position::TopRight));
}

#[test]
fn test_block_beats_center_rule() {
    // [X,X,_, _,O,_, _,_,_], automated O to move.
    let b = board(['X', 'X', '.', '.', 'O', '.', '.', '.', '.']);
    let decision = decide(&b, Player::O, Player::X, &mut rng()).unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.rule, Rule::Block);
}

#[test]
fn test_center_chosen_over_corners() {
    let b = board(['.', 'X', '.', '.', '.', '.', '.', '.', '.']);
    let decision = decide(&b, Player::O, Player::X, &mut rng()).unwrap();
    assert_eq!(decision.position, Position::Center);
    assert_eq!(decision.rule, Rule::Center);
}

#[test]
fn test_line_completion_is_symmetric_in_mark() {
    // The block check is the win check with the opponent's mark.
    let b = board(['X', '.', '.', '.', 'X', '.', '.', '.', '.']);
    assert_eq!(find_line_completion(&b, Player::X), Some(Position::BottomRight));
    let mirrored = board(['O', '.', '.', '.', 'O', '.', '.', '.', '.']);
    assert_eq!(find_line_completion(&mirrored, Player::O), Some(Position::BottomRight));
}

#[test]
fn test_line_completion_only_names_completing_squares() {
    // Exhaustive over boards with exactly two X and one O.
    for a in 0..9 {
        for b in (a + 1)..9 {
            for o in 0..9 {
                if o == a || o == b {
                    continue;
                }
                let mut cells = ['.'; 9];
                cells[a] = 'X';
                cells[b] = 'X';
                cells[o] = 'O';
                let position = board(cells);
                let found = find_line_completion(&position, Player::X);
                let completing: Vec<Position> = position
                    .empty_positions()
                    .into_iter()
                    .filter(|p| {
                        let next = position.place(p.to_index(), Player::X).unwrap();
                        tictac_core::evaluate(&next).winner() == Some(Player::X)
                    })
                    .collect();
                match found {
                    Some(pos) => assert!(completing.contains(&pos), "{cells:?} -> {pos:?}"),
                    None => assert!(completing.is_empty(), "{cells:?} missed {completing:?}"),
                }
            }
        }
    }
}
