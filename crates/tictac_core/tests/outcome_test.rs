//! Tests for outcome evaluation against brute-force line checks.

use tictac_core::{Board, Outcome, Player, Square, WINNING_LINES, evaluate};

fn decode(mut code: u32) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in squares.iter_mut() {
        *square = match code % 3 {
            1 => Square::Occupied(Player::X),
            2 => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
        code /= 3;
    }
    Board::from_squares(squares)
}

fn has_line(board: &Board) -> bool {
    WINNING_LINES.iter().any(|line| {
        let [a, b, c] = line.indices();
        let s = board.squares();
        s[a] != Square::Empty && s[a] == s[b] && s[b] == s[c]
    })
}

#[test]
fn test_evaluate_matches_definition_on_every_board() {
    for code in 0..3u32.pow(9) {
        let board = decode(code);
        let outcome = evaluate(&board);
        match outcome {
            Outcome::Win { mark, line } => {
                let [a, b, c] = line.indices();
                for i in [a, b, c] {
                    assert_eq!(board.squares()[i], Square::Occupied(mark));
                }
            }
            Outcome::Draw => {
                assert!(board.is_full());
                assert!(!has_line(&board));
            }
            Outcome::Ongoing => {
                assert!(!board.is_full());
                assert!(!has_line(&board));
            }
        }
        assert_eq!(outcome.winner().is_some(), has_line(&board));
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_squares([
        Square::Occupied(Player::X),
        Square::Occupied(Player::O),
        Square::Occupied(Player::X),
        Square::Occupied(Player::X),
        Square::Occupied(Player::O),
        Square::Occupied(Player::O),
        Square::Occupied(Player::O),
        Square::Occupied(Player::X),
        Square::Occupied(Player::X),
    ]);
    assert_eq!(evaluate(&board), Outcome::Draw);
}
