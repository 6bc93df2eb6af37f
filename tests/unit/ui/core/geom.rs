use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));
    assert!(!r.contains(Pos::new(9, 20)));
}

#[test]
fn empty_rect_never_contains() {
    assert!(!Rect::new(0, 0, 0, 10).contains(Pos::new(0, 0)));
    assert!(!Rect::new(0, 0, 10, 0).contains(Pos::new(0, 0)));
}

#[test]
fn intersect_of_disjoint_rects_is_empty() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(10, 10, 4, 4);
    assert!(a.intersect(b).is_empty());
    assert_eq!(a.intersect(Rect::new(2, 1, 10, 2)), Rect::new(2, 1, 2, 2));
}

#[test]
fn bottom_sheet_is_centred_and_anchored() {
    let area = Rect::new(0, 0, 80, 24);
    let sheet = area.bottom_sheet(40, 9);
    assert_eq!(sheet, Rect::new(20, 15, 40, 9));

    // Oversized requests shrink to the area.
    assert_eq!(Rect::new(0, 0, 10, 5).bottom_sheet(40, 9), Rect::new(0, 0, 10, 5));
}

#[test]
fn shrink_saturates() {
    assert_eq!(Rect::new(0, 0, 10, 6).shrink(1, 1), Rect::new(1, 1, 8, 4));
    assert!(Rect::new(0, 0, 1, 1).shrink(1, 1).is_empty());
}

#[test]
fn row_past_bottom_is_empty() {
    let r = Rect::new(2, 3, 5, 2);
    assert_eq!(r.row(1), Rect::new(2, 4, 5, 1));
    assert!(r.row(2).is_empty());
}

#[test]
fn columns_split_with_gap_and_absorb_remainder() {
    let cols = Rect::new(0, 0, 11, 3).columns(3, 1);
    assert_eq!(
        cols,
        vec![
            Rect::new(0, 0, 3, 3),
            Rect::new(4, 0, 3, 3),
            Rect::new(8, 0, 3, 3),
        ]
    );

    let cols = Rect::new(0, 0, 12, 1).columns(2, 2);
    assert_eq!(cols, vec![Rect::new(0, 0, 5, 1), Rect::new(7, 0, 5, 1)]);
    assert!(Rect::new(0, 0, 12, 1).columns(0, 1).is_empty());
}
