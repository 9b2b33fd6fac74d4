use super::*;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Orange.opponent(), Color::Gray);
    assert_eq!(Color::Gray.opponent(), Color::Orange);
}

#[test]
fn test_kind_weights() {
    assert_eq!(PieceKind::Kitten.weight(), 1);
    assert_eq!(PieceKind::Cat.weight(), 2);
    assert!(PieceKind::Cat.weight() >= PieceKind::Kitten.weight());
}

#[test]
fn test_piece_symbols() {
    assert_eq!(Piece::new(Color::Orange, PieceKind::Kitten).symbol(), 'o');
    assert_eq!(Piece::new(Color::Orange, PieceKind::Cat).symbol(), 'O');
    assert_eq!(Piece::new(Color::Gray, PieceKind::Kitten).symbol(), 'x');
    assert_eq!(Piece::new(Color::Gray, PieceKind::Cat).symbol(), 'X');
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(), 2 * 6 + 3);

    let pos2 = Pos::from_index(15);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 3);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(6, 0));
    assert!(!Pos::is_valid(0, 6));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(pos.offset(-1, 0), None);
    assert_eq!(Pos::new(5, 5).offset(0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 6);
    assert_eq!(TOTAL_CELLS, 36);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    let pos = Pos::new(2, 2);
    let piece = Piece::new(Color::Orange, PieceKind::Kitten);

    assert!(board.is_empty(pos));
    assert!(board.place(pos, piece));
    assert_eq!(board.get(pos), Some(piece));
    assert!(!board.is_empty(pos));
}

#[test]
fn test_place_occupied_rejected() {
    let mut board = Board::new();
    let pos = Pos::new(3, 3);
    let first = Piece::new(Color::Orange, PieceKind::Kitten);
    let second = Piece::new(Color::Gray, PieceKind::Cat);

    assert!(board.place(pos, first));
    assert!(!board.place(pos, second));
    // Original occupant unchanged
    assert_eq!(board.get(pos), Some(first));
}

#[test]
fn test_remove() {
    let mut board = Board::new();
    let pos = Pos::new(1, 4);
    let piece = Piece::new(Color::Gray, PieceKind::Kitten);

    board.place(pos, piece);
    assert_eq!(board.remove(pos), Some(piece));
    assert!(board.is_empty(pos));
    assert_eq!(board.remove(pos), None);
}

#[test]
fn test_counts() {
    let mut board = Board::new();
    assert_eq!(board.piece_count(), 0);

    board.place(Pos::new(0, 0), Piece::new(Color::Orange, PieceKind::Kitten));
    board.place(Pos::new(0, 1), Piece::new(Color::Orange, PieceKind::Cat));
    board.place(Pos::new(5, 5), Piece::new(Color::Gray, PieceKind::Kitten));

    assert_eq!(board.piece_count(), 3);
    assert_eq!(board.count_for(Color::Orange), 2);
    assert_eq!(board.count_for(Color::Gray), 1);
}

#[test]
fn test_occupied_iteration_order() {
    let mut board = Board::new();
    board.place(Pos::new(3, 0), Piece::new(Color::Gray, PieceKind::Cat));
    board.place(Pos::new(0, 2), Piece::new(Color::Orange, PieceKind::Kitten));

    let positions: Vec<Pos> = board.occupied().map(|(pos, _)| pos).collect();
    // Row-major order regardless of placement order
    assert_eq!(positions, vec![Pos::new(0, 2), Pos::new(3, 0)]);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    board.place(Pos::new(2, 2), Piece::new(Color::Orange, PieceKind::Cat));
    board.clear();
    assert_eq!(board.piece_count(), 0);
}
