//! Tests for the turn controller as a presenter sees it.

use tictac_core::{
    GreedyStrategy, InvalidMove, Move, Phase, Player, Position, Seats, Strategy, TurnController,
};

fn controller(seed: u64) -> TurnController {
    TurnController::new(Seats::default(), GreedyStrategy::seeded(seed))
}

#[test]
fn test_corner_opening_answered_with_center() {
    let mut controller = controller(0);
    let report = controller.apply_human_move(0);
    assert!(*report.accepted());
    assert_eq!(report.human_move(), &Some(Move::new(Player::X, Position::TopLeft)));
    assert_eq!(report.automated_move(), &Some(Move::new(Player::O, Position::Center)));
}

#[test]
fn test_occupied_square_never_changes_board() {
    let mut controller = controller(0);
    controller.apply_human_move(0);
    let before = controller.state();
    for index in [0, 4] {
        let report = controller.apply_human_move(index);
        assert!(!*report.accepted());
        assert_eq!(report.state(), &before);
    }
}

#[test]
fn test_out_of_range_is_noop() {
    let mut controller = controller(0);
    let report = controller.apply_human_move(42);
    assert_eq!(report.rejection(), &Some(InvalidMove::OutOfRange(42)));
    assert_eq!(report.state().board(), &[None; 9]);
}

#[test]
fn test_automated_player_wins_and_session_is_terminal() {
    // X takes edges only: O answers center, then a corner, then completes
    // the diagonal through that corner. Squares O already holds are refused
    // and skipped.
    let mut controller = controller(5);
    let mut finished = false;
    for index in [1, 3, 5, 7, 0, 2, 6, 8] {
        let report = controller.apply_human_move(index);
        if *report.state().terminal() {
            finished = true;
            break;
        }
    }
    assert!(finished);
    let state = controller.state();
    assert_eq!(state.phase(), &Phase::Terminal);
    assert_eq!(state.to_move(), &None);
    let report = controller.apply_human_move(4);
    assert_eq!(report.rejection(), &Some(InvalidMove::GameOver));
}

#[test]
fn test_reset_yields_fresh_game() {
    let mut controller = controller(3);
    controller.apply_human_move(4);
    controller.apply_human_move(0);
    let state = controller.reset();
    assert_eq!(state.board(), &[None; 9]);
    assert_eq!(state.to_move(), &Some(Player::X));
    assert_eq!(state.phase(), &Phase::WaitingForFirstMover);
    assert!(!*state.terminal());
    assert_eq!(state.winner(), &None);
    assert!(!*state.draw());
    assert_eq!(state.winning_line(), &None);
}

/// Always answers with the lowest free square, to force a draw script.
struct LowestFree;

impl Strategy for LowestFree {
    fn select_move(
        &mut self,
        board: &tictac_core::Board,
        _: Player,
        _: Player,
    ) -> Option<Position> {
        board.empty_positions().first().copied()
    }
}

#[test]
fn test_draw_reported_in_state() {
    // X: 1, O: 0, X: 4, O: 2, X: 5, O: 3, X: 6, O: 7, X: 8
    // O X O / O X X / X O X -> no line, full board.
    let mut controller = TurnController::new(Seats::default(), LowestFree);
    let mut last = None;
    for index in [1, 4, 5, 6, 8] {
        last = Some(controller.apply_human_move(index));
    }
    let report = last.unwrap();
    assert!(*report.accepted(), "{:?}", report.rejection());
    assert!(*report.state().draw());
    assert!(*report.state().terminal());
    assert_eq!(report.state().winner(), &None);
}

#[test]
fn test_human_win_has_winning_line() {
    let mut controller = TurnController::new(Seats::default(), LowestFree);
    // X: 4, O: 0, X: 2, O: 1, X: 6 -> X wins on 2-4-6.
    for index in [4, 2, 6] {
        controller.apply_human_move(index);
    }
    let state = controller.state();
    assert_eq!(state.winner(), &Some(Player::X));
    assert_eq!(state.winning_line(), &Some([2, 4, 6]));
}

#[test]
fn test_replay_rebuilds_state() {
    let mut controller = TurnController::new(Seats::default(), LowestFree);
    let state = controller.replay(&[4, 2]).unwrap();
    assert_eq!(state.board()[0], Some(Player::O));
    assert_eq!(state.board()[1], Some(Player::O));
    assert_eq!(state.board()[2], Some(Player::X));
    assert_eq!(state.board()[4], Some(Player::X));
}
