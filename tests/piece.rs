use chess_client::{Color, MoveError, ParseError, PieceKind, PromotionPiece};
use std::str::FromStr;

#[test]
fn test_piece_kind_codes() {
    assert_eq!(PieceKind::Pawn.code(), 1);
    assert_eq!(PieceKind::King.code(), 6);
    assert_eq!(PieceKind::from_code(0), None);
    for code in 1..=6 {
        assert_eq!(PieceKind::from_code(code).map(PieceKind::code), Some(code));
    }
}

#[test]
#[should_panic]
fn test_piece_kind_code_out_of_range() {
    _ = PieceKind::from_code(7);
}

#[test]
fn test_letters() {
    assert_eq!(PieceKind::Pawn.letter(), None);
    assert_eq!(PieceKind::Knight.letter(), Some('N'));
    assert_eq!(PieceKind::King.letter(), Some('K'));
    assert_eq!(PromotionPiece::Bishop.letter(), 'B');
    assert_eq!(PromotionPiece::Queen.to_string(), "Q");
}

#[test]
fn test_promotion_codes() {
    assert_eq!(PromotionPiece::Knight.code(), 0);
    assert_eq!(PromotionPiece::Bishop.code(), 1);
    assert_eq!(PromotionPiece::Rook.code(), 2);
    assert_eq!(PromotionPiece::Queen.code(), 3);
    assert_eq!(PieceKind::from(PromotionPiece::Rook), PieceKind::Rook);
}

#[test]
fn test_promotion_piece_from_str() {
    assert_eq!(PromotionPiece::from_str("q"), Ok(PromotionPiece::Queen));
    assert_eq!(PromotionPiece::from_str("R"), Ok(PromotionPiece::Rook));
    assert_eq!(PromotionPiece::from_str(" b\n"), Ok(PromotionPiece::Bishop));
    assert_eq!(PromotionPiece::from_str("n"), Ok(PromotionPiece::Knight));
    assert_eq!(
        PromotionPiece::from_str("k"),
        Err(MoveError::AmbiguousPromotionInput("k".to_string()))
    );
    assert!(PromotionPiece::from_str("queen").is_err());
}

#[test]
fn test_color() {
    assert_eq!(Color::White.opposite(), Color::Black);
    assert_eq!(Color::White.promotion_rank(), 7);
    assert_eq!(Color::Black.back_rank(), 7);
    assert_eq!(Color::from_str("black"), Ok(Color::Black));
    assert_eq!(Color::from_str("red"), Err(ParseError));
    assert_eq!(Color::White.to_string(), "white");
}
