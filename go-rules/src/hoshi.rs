use crate::Point;

/// Star points a renderer marks on an empty board.
///
/// Odd boards of 13 and up get the nine points on the third line; odd boards
/// from 7 to 11 get the four corners on the second line plus the centre.
/// Even and smaller boards have none.
pub fn star_points(size: u8) -> Vec<Point> {
    if size < 7 || size.is_multiple_of(2) {
        return Vec::new();
    }

    let off = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - off;
    let mid = size / 2;

    let mut pts = vec![(off, off), (far, off), (off, far), (far, far), (mid, mid)];
    if size >= 13 {
        pts.extend([(off, mid), (far, mid), (mid, off), (mid, far)]);
    }
    pts.sort();
    pts
}
