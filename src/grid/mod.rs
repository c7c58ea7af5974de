pub mod generate;

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Raw value marking an impassable cell.
pub const WALL: i32 = -1;
/// Raw value marking an empty cell (movement cost 1).
pub const EMPTY: i32 = 0;

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `row,col` (parentheses and spaces are ignored).
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed
            .split_once(',')
            .ok_or_else(|| Error::Parse(format!("expected `row,col`, got `{}`", s)))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| Error::Parse(format!("bad coordinate `{}`: {}", part.trim(), e)))
        };
        Ok(Position::new(parse(row)?, parse(col)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Weighted(u32),
}

impl Cell {
    pub fn from_value(value: i32) -> Result<Self> {
        match value {
            WALL => Ok(Cell::Wall),
            EMPTY => Ok(Cell::Empty),
            v if v > 0 => Ok(Cell::Weighted(v as u32)),
            v => Err(Error::InvalidCellValue(v)),
        }
    }

    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => EMPTY,
            Cell::Wall => WALL,
            Cell::Weighted(w) => w as i32,
        }
    }

    /// Movement cost of stepping onto this cell. Empty cells cost 1, never 0.
    pub fn cost(self) -> u32 {
        match self {
            Cell::Weighted(w) => w,
            Cell::Empty | Cell::Wall => 1,
        }
    }
}

/// A rectangular, 4-connected grid of walls, empty cells and weighted cells.
///
/// Dimensions are fixed at construction. Cell values can be changed at any
/// time, but searches borrow the grid immutably so they always see a
/// consistent map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Sets a cell to a wall (`-1`), empty (`0`) or a weight (`> 0`).
    ///
    /// # Errors
    ///
    /// * [`Error::OutOfBounds`] if the coordinate is outside the grid.
    /// * [`Error::InvalidCellValue`] for negative values other than `-1`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        if !self.contains(Position::new(row, col)) {
            return Err(Error::OutOfBounds { row, col });
        }
        self.cells[row][col] = Cell::from_value(value)?;
        Ok(())
    }

    pub fn set(&mut self, pos: Position, value: i32) -> Result<()> {
        self.set_cell(pos.row, pos.col, value)
    }

    /// Raw cell value, or `None` outside the grid.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<i32> {
        self.cell(Position::new(row, col)).map(Cell::value)
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn is_walkable(&self, row: usize, col: usize) -> bool {
        self.is_open(Position::new(row, col))
    }

    /// Same as [`Grid::is_walkable`] for a [`Position`].
    pub fn is_open(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(cell) if cell != Cell::Wall)
    }

    /// Cost of moving onto a cell: its weight, or 1 for empty cells.
    pub fn get_cost(&self, row: usize, col: usize) -> u32 {
        self.cost_at(Position::new(row, col))
    }

    pub fn cost_at(&self, pos: Position) -> u32 {
        self.cell(pos).map_or(1, Cell::cost)
    }

    /// In-bounds orthogonal neighbours in the order up, down, left, right.
    ///
    /// Walls are not filtered out; callers check [`Grid::is_open`].
    pub fn get_neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            let next = Position::new(r, c);
            self.contains(next).then_some(next)
        })
    }

    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.get_neighbors(pos.row, pos.col)
    }

    /// Number of wall cells.
    pub fn walls(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Wall)
            .count()
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::Empty);
        }
    }

    /// Renders the grid with `S`/`G` for the endpoints and `*` along the path.
    pub fn render_with_path(
        &self,
        path: Option<&[Position]>,
        start: Position,
        goal: Position,
    ) -> String {
        let on_path = |pos: Position| path.is_some_and(|p| p.contains(&pos));
        let mut out = String::new();
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| {
                    let pos = Position::new(row, col);
                    if pos == start {
                        "S".to_string()
                    } else if pos == goal {
                        "G".to_string()
                    } else if on_path(pos) {
                        "*".to_string()
                    } else {
                        cell_symbol(self.cells[row][col])
                    }
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

fn cell_symbol(cell: Cell) -> String {
    match cell {
        Cell::Wall => "#".to_string(),
        Cell::Empty => ".".to_string(),
        // capped at 9 so columns stay aligned
        Cell::Weighted(w) => w.min(9).to_string(),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|cell| cell_symbol(*cell)).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses the ASCII layout produced by `Display`.
///
/// `#` is a wall, `.` is empty and a number is a weight. Cells may be
/// separated by whitespace; without whitespace every character is one cell.
/// Blank lines are ignored.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut values: Vec<Vec<i32>> = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let tokens: Vec<String> = if line.contains(char::is_whitespace) {
                line.split_whitespace().map(str::to_string).collect()
            } else {
                line.chars().map(String::from).collect()
            };
            let row = tokens
                .iter()
                .map(|token| parse_token(token, line_no + 1))
                .collect::<Result<Vec<i32>>>()?;
            values.push(row);
        }

        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);
        if let Some(bad) = values.iter().position(|row| row.len() != cols) {
            return Err(Error::Parse(format!(
                "row {} has {} cells, expected {}",
                bad + 1,
                values[bad].len(),
                cols
            )));
        }

        let mut grid = Grid::new(rows, cols)?;
        for (row, line) in values.into_iter().enumerate() {
            for (col, value) in line.into_iter().enumerate() {
                grid.set_cell(row, col, value)?;
            }
        }
        Ok(grid)
    }
}

fn parse_token(token: &str, line_no: usize) -> Result<i32> {
    match token {
        "#" => Ok(WALL),
        "." => Ok(EMPTY),
        other => other
            .parse::<i32>()
            .map_err(|_| Error::Parse(format!("line {}: unknown cell `{}`", line_no, other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        assert!(grid.is_walkable(0, 0));
        assert_eq!(grid.get_cell(4, 4), Some(EMPTY));
        assert_eq!(grid.walls(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(Error::InvalidDimensions { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            Grid::new(3, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn walls_block_walking() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell(1, 1, WALL).unwrap();
        assert!(!grid.is_walkable(1, 1));
        assert!(grid.is_walkable(1, 0));
        assert!(!grid.is_walkable(5, 0));
    }

    #[test]
    fn set_cell_validates_input() {
        let mut grid = Grid::new(3, 4).unwrap();
        assert!(matches!(
            grid.set_cell(3, 0, WALL),
            Err(Error::OutOfBounds { row: 3, col: 0 })
        ));
        assert!(matches!(
            grid.set_cell(0, 4, 2),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.set_cell(0, 0, -2),
            Err(Error::InvalidCellValue(-2))
        ));
        assert_eq!(grid.get_cell(0, 0), Some(EMPTY));
    }

    #[test]
    fn costs_map_empty_to_one() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell(2, 2, 5).unwrap();
        assert_eq!(grid.get_cost(2, 2), 5);
        assert_eq!(grid.get_cost(0, 0), 1);
        grid.set_cell(2, 2, EMPTY).unwrap();
        assert_eq!(grid.get_cost(2, 2), 1);
    }

    #[test]
    fn neighbors_follow_up_down_left_right() {
        let grid = Grid::new(5, 5).unwrap();
        let neighbors: Vec<_> = grid.get_neighbors(2, 2).collect();
        assert_eq!(
            neighbors,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3),
            ]
        );
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid = Grid::new(5, 5).unwrap();
        let neighbors: Vec<_> = grid.get_neighbors(0, 0).collect();
        assert_eq!(neighbors, vec![Position::new(1, 0), Position::new(0, 1)]);

        let neighbors: Vec<_> = grid.get_neighbors(4, 4).collect();
        assert_eq!(neighbors, vec![Position::new(3, 4), Position::new(4, 3)]);
    }

    #[test]
    fn neighbors_include_walls() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell(1, 2, WALL).unwrap();
        assert_eq!(grid.get_neighbors(2, 2).count(), 4);
        assert_eq!(
            grid.get_neighbors(2, 2).filter(|p| grid.is_open(*p)).count(),
            3
        );
    }

    #[test]
    fn parse_and_display_agree() {
        let text = "\
. # . .
. 5 . #
. . . .";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.get_cell(0, 1), Some(WALL));
        assert_eq!(grid.get_cost(1, 1), 5);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn parse_compact_rows() {
        let grid: Grid = "..#\n.9.\n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.get_cost(1, 1), 9);
        assert!(!grid.is_walkable(0, 2));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = "...\n..".parse::<Grid>().unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!("".parse::<Grid>().is_err());
        assert!("..x".parse::<Grid>().is_err());
    }

    #[test]
    fn position_parses_from_cli_form() {
        assert_eq!("3,4".parse::<Position>().unwrap(), Position::new(3, 4));
        assert_eq!("(0, 7)".parse::<Position>().unwrap(), Position::new(0, 7));
        assert!("3".parse::<Position>().is_err());
        assert!("a,1".parse::<Position>().is_err());
    }

    #[test]
    fn clear_keeps_dimensions() {
        let mut grid: Grid = "#3\n.#".parse().unwrap();
        assert_eq!(grid.walls(), 2);
        grid.clear();
        assert_eq!(grid.walls(), 0);
        assert_eq!(grid.get_cost(0, 1), 1);
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert!(grid.is_open(Position::new(1, 1)));
    }

    #[test]
    fn render_marks_path_and_endpoints() {
        let grid = Grid::new(2, 3).unwrap();
        let path = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
        ];
        let rendered = grid.render_with_path(Some(&path), path[0], path[2]);
        assert_eq!(rendered, "S * G\n. . .\n");
    }
}
