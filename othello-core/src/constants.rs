//! 棋盘常量定义

/// 棋盘边长
pub const BOARD_SIZE: usize = 8;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 八个方向 (drow, dcol)，顺序：左上、上、右上、左、右、左下、下、右下
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
