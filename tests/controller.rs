mod common;

use chess_client::{
    AutomatedPlayer, Color, ControllerSettings, GameResult, IdlePolicy, Move, PieceKind, Position,
    PromotionPiece, Square, TurnController, TurnState,
    controller::{Flow, PlayerSlots},
    enum_map::EnumMap,
    frontend::Sound,
    notation::Suffix,
    selection::Selection,
};
use common::{
    FakePosition, RecordingAudio, RecordingRenderer, ScriptedInput, ScriptedPlayer, mv,
};

type Controller = TurnController<FakePosition, RecordingRenderer, RecordingAudio, ScriptedInput>;

fn controller(position: FakePosition, players: PlayerSlots<FakePosition>, input: ScriptedInput) -> Controller {
    TurnController::new(
        position,
        players,
        RecordingRenderer::default(),
        RecordingAudio::default(),
        input,
        ControllerSettings {
            idle: IdlePolicy::IMMEDIATE,
            ..ControllerSettings::default()
        },
    )
}

fn humans() -> PlayerSlots<FakePosition> {
    EnumMap::from_fn(|_| None)
}

fn automated(side: Color, moves: &[Move]) -> PlayerSlots<FakePosition> {
    let mut players = humans();
    players[side] = Some(Box::new(ScriptedPlayer::new(moves)) as Box<dyn AutomatedPlayer<FakePosition>>);
    players
}

/// Kings, e-pawns and two white knights that can both reach e2.
fn opening() -> FakePosition {
    FakePosition::new(
        Color::White,
        &[
            (Square::E1, Color::White, PieceKind::King),
            (Square::E2, Color::White, PieceKind::Pawn),
            (Square::D2, Color::White, PieceKind::Pawn),
            (Square::C3, Color::White, PieceKind::Knight),
            (Square::G1, Color::White, PieceKind::Knight),
            (Square::E8, Color::Black, PieceKind::King),
            (Square::E7, Color::Black, PieceKind::Pawn),
        ],
        &[
            mv(Square::E2, Square::E4),
            mv(Square::D2, Square::D4),
            mv(Square::E7, Square::E5),
            mv(Square::C3, Square::E2),
            mv(Square::G1, Square::E2),
        ],
    )
}

#[test]
fn test_human_plies_alternate_and_record_san() {
    let input = ScriptedInput::clicks(&[
        Square::E2,
        Square::E4,
        Square::E7,
        Square::E5,
        Square::C3,
        Square::E2,
    ]);
    let mut controller = controller(opening(), humans(), input);
    assert_eq!(controller.state(), TurnState::HumanToMove);

    let state = controller.run();

    assert_eq!(state, TurnState::HumanToMove);
    let sans: Vec<&str> = controller.record().iter().collect();
    assert_eq!(sans, ["e4", "e5", "Nce2"]);
    assert_eq!(controller.record().lines(), ["1. e4 e5", "2. Nce2"]);
    assert_eq!(controller.to_move(), Color::Black);
    assert_eq!(controller.position().applied.len(), 3);
    assert_eq!(
        controller.audio().sounds,
        [Sound::Start, Sound::Move, Sound::Move, Sound::Move]
    );
    assert_eq!(controller.renderer().started, 1);
    assert!(controller.renderer().reports.is_empty());
}

#[test]
fn test_side_to_move_follows_ply_parity() {
    let clicks = [
        Square::E2,
        Square::E4,
        Square::E7,
        Square::E5,
        Square::C3,
        Square::E2,
    ];
    for n in 0..=3 {
        let input = ScriptedInput::clicks(&clicks[..2 * n]);
        let mut controller = controller(opening(), humans(), input);
        _ = controller.run();
        assert_eq!(controller.record().len(), n);
        let expected = if n % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(controller.to_move(), expected);
        assert_eq!(controller.position().ply(), n as u32);
    }
}

#[test]
fn test_ply_event_carries_previous_move() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::E4, Square::E7, Square::E5]);
    let mut controller = controller(opening(), humans(), input);
    _ = controller.run();

    let plies = &controller.renderer().plies;
    assert_eq!(plies.len(), 2);
    assert_eq!(plies[0].ply, 0);
    assert_eq!(plies[0].mover, Color::White);
    assert_eq!(plies[0].previous, None);
    assert_eq!(plies[1].ply, 1);
    assert_eq!(plies[1].mover, Color::Black);
    assert_eq!(plies[1].mov, mv(Square::E7, Square::E5));
    assert_eq!(plies[1].previous, Some(mv(Square::E2, Square::E4)));
    assert_eq!(plies[1].san, "e5");
}

#[test]
fn test_illegal_destination_changes_nothing() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::E5]);
    let mut controller = controller(opening(), humans(), input);
    _ = controller.run();

    assert!(controller.record().is_empty());
    assert!(controller.position().applied.is_empty());
    assert_eq!(controller.to_move(), Color::White);
    assert_eq!(controller.selection(), Selection::NoSelection);
    assert_eq!(controller.renderer().illegal, [(Square::E2, Square::E5)]);
    assert_eq!(controller.audio().sounds, [Sound::Start, Sound::Illegal]);
}

#[test]
fn test_clicking_selected_square_deselects_silently() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::E2]);
    let mut controller = controller(opening(), humans(), input);
    _ = controller.run();

    assert_eq!(controller.renderer().selections, [Some(Square::E2), None]);
    assert!(controller.renderer().illegal.is_empty());
    assert_eq!(controller.audio().sounds, [Sound::Start]);
    assert_eq!(controller.selection(), Selection::NoSelection);
}

#[test]
fn test_clicking_another_own_piece_replaces_selection() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::D2, Square::D4]);
    let mut controller = controller(opening(), humans(), input);
    _ = controller.run();

    assert_eq!(
        controller.renderer().selections,
        [Some(Square::E2), Some(Square::D2), None]
    );
    assert_eq!(controller.record().last(), Some("d4"));
}

#[test]
fn test_clicks_on_empty_or_enemy_squares_are_ignored() {
    let input = ScriptedInput::clicks(&[Square::E7, Square::A4]);
    let mut controller = controller(opening(), humans(), input);
    assert_eq!(controller.step(), Flow::Continue);
    assert_eq!(controller.step(), Flow::Continue);
    assert_eq!(controller.selection(), Selection::NoSelection);
    assert!(controller.renderer().selections.is_empty());
    assert_eq!(controller.step(), Flow::Quit);
}

fn promotion_position() -> FakePosition {
    let promotion = Move::encode(Square::A7, Square::A8, false, None, true).unwrap();
    FakePosition::new(
        Color::White,
        &[
            (Square::A7, Color::White, PieceKind::Pawn),
            (Square::E1, Color::White, PieceKind::King),
            (Square::H8, Color::Black, PieceKind::King),
        ],
        &[
            promotion,
            promotion.with_promotion_piece(PromotionPiece::Bishop),
            promotion.with_promotion_piece(PromotionPiece::Rook),
            promotion.with_promotion_piece(PromotionPiece::Queen),
        ],
    )
}

#[test]
fn test_promotion_reprompts_until_piece_recognized() {
    let input = ScriptedInput::clicks(&[Square::A7, Square::A8]).with_tokens(&["king", "", "Q"]);
    let mut controller = controller(promotion_position().with_verdict(1, Suffix::Check), humans(), input);
    _ = controller.run();

    assert_eq!(controller.input().prompts, 3);
    assert_eq!(controller.record().last(), Some("a8=Q+"));
    let applied = controller.position().applied[0];
    assert!(applied.is_promotion());
    assert_eq!(applied.promotion_piece(), PromotionPiece::Queen);
    assert_eq!(
        controller.position().piece(Square::A8),
        Some((Color::White, PieceKind::Queen))
    );
    assert_eq!(controller.audio().sounds, [Sound::Start, Sound::Check]);
}

#[test]
fn test_underpromotion_plays_promote_sound() {
    let input = ScriptedInput::clicks(&[Square::A7, Square::A8]).with_tokens(&["n"]);
    let mut controller = controller(promotion_position(), humans(), input);
    _ = controller.run();

    assert_eq!(controller.record().last(), Some("a8=N"));
    assert_eq!(controller.audio().sounds, [Sound::Start, Sound::Promote]);
}

#[test]
fn test_quit_during_promotion_prompt_abandons_ply() {
    let input = ScriptedInput::clicks(&[Square::A7, Square::A8, Square::E1]);
    let mut controller = controller(promotion_position(), humans(), input);
    _ = controller.run();

    assert_eq!(controller.input().prompts, 1);
    assert!(controller.position().applied.is_empty());
    assert!(controller.record().is_empty());
    assert_eq!(controller.to_move(), Color::White);
}

#[test]
fn test_checkmate_ends_game_once() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::E4, Square::E7, Square::E5]);
    let position = opening().with_verdict(1, Suffix::Checkmate);
    let mut controller = controller(position, humans(), input);
    let state = controller.run();

    let result = GameResult::Checkmate {
        winner: Color::White,
    };
    assert_eq!(state, TurnState::GameOver(result));
    assert_eq!(controller.record().last(), Some("e4#"));
    assert_eq!(controller.record().len(), 1);
    assert_eq!(controller.renderer().reports.len(), 1);
    assert_eq!(controller.renderer().reports[0].result, result);
    assert_eq!(controller.renderer().reports[0].transcript, ["1. e4#"]);
    assert_eq!(
        controller.audio().sounds,
        [Sound::Start, Sound::Check, Sound::End]
    );
}

#[test]
fn test_draw_ends_game_with_marker() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::E4]);
    let position = opening().with_verdict(1, Suffix::Draw);
    let mut controller = controller(position, humans(), input);

    assert_eq!(controller.run(), TurnState::GameOver(GameResult::Draw));
    assert_eq!(controller.record().last(), Some("e4 1/2-1/2"));
    assert_eq!(controller.renderer().reports.len(), 1);
    assert_eq!(controller.audio().sounds.last(), Some(&Sound::End));
}

#[test]
fn test_check_does_not_end_game() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::E4]);
    let position = opening().with_verdict(1, Suffix::Check);
    let mut controller = controller(position, humans(), input);

    assert_eq!(controller.run(), TurnState::HumanToMove);
    assert_eq!(controller.record().last(), Some("e4+"));
    assert!(controller.renderer().reports.is_empty());
}

#[test]
fn test_automated_reply_follows_human_move() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::E4]).idle(1);
    let players = automated(Color::Black, &[mv(Square::E7, Square::E5)]);
    let mut controller = controller(opening(), players, input);

    assert_eq!(controller.step(), Flow::Continue);
    assert_eq!(controller.step(), Flow::Continue);
    assert_eq!(controller.state(), TurnState::AutomatedToMove(Color::Black));
    assert_eq!(controller.step(), Flow::Continue);
    assert_eq!(controller.state(), TurnState::HumanToMove);

    let sans: Vec<&str> = controller.record().iter().collect();
    assert_eq!(sans, ["e4", "e5"]);
    assert!(!controller.timer(Color::Black).is_running());
    assert!(controller.timer(Color::Black).remaining() <= controller.timer(Color::White).remaining());
}

#[test]
fn test_two_automated_players_stop_at_game_end() {
    let mut players = automated(Color::White, &[mv(Square::E2, Square::E4)]);
    players[Color::Black] = Some(
        Box::new(ScriptedPlayer::new(&[mv(Square::E7, Square::E5)]))
            as Box<dyn AutomatedPlayer<FakePosition>>,
    );
    let position = opening().with_verdict(2, Suffix::Checkmate);
    let mut controller = controller(position, players, ScriptedInput::default().idle(2));
    assert_eq!(controller.state(), TurnState::AutomatedToMove(Color::White));

    // A third call to either player would exhaust its script.
    let state = controller.run();

    assert_eq!(
        state,
        TurnState::GameOver(GameResult::Checkmate {
            winner: Color::Black
        })
    );
    assert_eq!(controller.record().lines(), ["1. e4 e5#"]);
    assert_eq!(controller.renderer().reports.len(), 1);
}

#[test]
fn test_quit_before_automated_move_applies_nothing() {
    let players = automated(Color::White, &[mv(Square::E2, Square::E4)]);
    let input = ScriptedInput::default().then_quit();
    let mut controller = controller(opening(), players, input);

    assert_eq!(controller.step(), Flow::Quit);
    assert!(controller.position().applied.is_empty());
    assert!(controller.record().is_empty());
}

#[test]
fn test_finished_starting_position_reports_once() {
    let position = opening().with_verdict(0, Suffix::Checkmate);
    let mut controller = controller(position, humans(), ScriptedInput::clicks(&[Square::E2]));
    let result = GameResult::Checkmate {
        winner: Color::Black,
    };
    assert_eq!(controller.state(), TurnState::GameOver(result));

    assert_eq!(controller.run(), TurnState::GameOver(result));
    assert_eq!(controller.renderer().reports.len(), 1);
    assert!(controller.renderer().reports[0].transcript.is_empty());
    assert!(controller.renderer().selections.is_empty());
}

#[test]
fn test_resumed_game_numbers_from_start_ply() {
    let position = FakePosition::new(
        Color::Black,
        &[
            (Square::E8, Color::Black, PieceKind::King),
            (Square::E7, Color::Black, PieceKind::Pawn),
            (Square::E1, Color::White, PieceKind::King),
            (Square::E2, Color::White, PieceKind::Pawn),
        ],
        &[mv(Square::E7, Square::E5), mv(Square::E2, Square::E4)],
    )
    .with_start_ply(9);
    let input = ScriptedInput::clicks(&[Square::E7, Square::E5, Square::E2, Square::E4]);
    let mut controller = controller(position, humans(), input);
    _ = controller.run();

    assert_eq!(controller.record().lines(), ["5... e5", "6. e4"]);
    assert_eq!(controller.renderer().plies[0].ply, 9);
}

#[test]
fn test_new_game_clears_record() {
    let input = ScriptedInput::clicks(&[Square::E2, Square::E4]);
    let mut controller = controller(opening(), humans(), input);
    _ = controller.run();
    assert_eq!(controller.record().len(), 1);

    controller.new_game(opening());

    assert!(controller.record().is_empty());
    assert_eq!(controller.to_move(), Color::White);
    assert_eq!(controller.state(), TurnState::HumanToMove);
    assert_eq!(controller.step(), Flow::Quit);
    assert_eq!(controller.renderer().started, 2);
}
