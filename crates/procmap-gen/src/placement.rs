/// Top-left corner that centres a `width` x `height` area on
/// `(center_x, center_y)`.
pub fn centered_origin(center_x: i32, center_y: i32, width: i32, height: i32) -> (i32, i32) {
    (center_x - width / 2, center_y - height / 2)
}
