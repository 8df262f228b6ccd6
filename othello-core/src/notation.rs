//! 坐标记法
//!
//! 标准记法：`<列字母><行号>`，列为 a-h，行为 1-8，例如 `d3` 即 (2, 3)。
//! 也接受以空格或逗号分隔的零起始行列，例如 `2 3`、`2,3`。

use crate::constants::BOARD_SIZE;
use crate::disc::Position;
use crate::error::OthelloError;

/// 坐标记法
pub struct Notation;

impl Notation {
    /// 位置转换为标准记法
    pub fn format(pos: Position) -> String {
        format!("{}{}", (b'a' + pos.col) as char, pos.row + 1)
    }

    /// 解析用户输入的坐标
    ///
    /// 数字形式超出棋盘时返回 `InvalidPosition`，其余无法识别的输入返回 `InvalidNotation`。
    pub fn parse(input: &str) -> Result<Position, OthelloError> {
        let trimmed = input.trim();
        let invalid = || OthelloError::InvalidNotation {
            input: input.to_string(),
        };

        let numbers: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if numbers.len() == 2 {
            let row: i32 = numbers[0].parse().map_err(|_| invalid())?;
            let col: i32 = numbers[1].parse().map_err(|_| invalid())?;
            return Self::checked(row, col);
        }

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(invalid());
        }
        let row: i32 = chars.as_str().parse().map_err(|_| invalid())?;
        let col = letter as i32 - 'a' as i32;

        Self::checked(row - 1, col).map_err(|_| invalid())
    }

    /// 校验行列范围
    pub fn checked(row: i32, col: i32) -> Result<Position, OthelloError> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Ok(Position::new_unchecked(row as u8, col as u8))
        } else {
            Err(OthelloError::InvalidPosition { row, col })
        }
    }
}
