//! 5×5 logical grid emulation
//!
//! Programs written for a 5×5 LED matrix address "pixels" by (column, row),
//! both 1..=5. This module maps that grid onto whatever panel is attached:
//! the largest centred square that fits the shorter panel side is divided
//! into 25 cells separated by 3-pixel gutters.
//!
//! ```text
//!  xInset ┌───────────────────────────┐
//!  ◄────► │ ▪  ▪  ▪  ▪  ▪ │ 3px gutter, then squareSize cell, ...
//!         │ ▪  ▪  ▪  ▪  ▪ │
//!         └───────────────────────────┘
//! ```
//!
//! Everything up to the final driver calls is pure: [`GridLayout`] is the
//! geometry for one panel size and [`GridPlan`] is the list of cell fills for
//! one bitmask, so both can be tested without a panel.

// Layout arithmetic runs on panel dimensions (≤ i32::MAX after conversion)
// and cell indices 1..=5; the products stay far from overflow.
#![allow(clippy::arithmetic_side_effects)]

use core::fmt;

use platform::{Color16, PanelDriver};
use thiserror_no_std::Error;

/// Cells per grid side
pub const GRID_SIZE: u8 = 5;

/// Number of cells
pub const CELL_COUNT: usize = 25;

/// Gutter between cells and around the grid, in pixels
pub const LINE_WIDTH: i32 = 3;

/// Only the low 25 bits of a [`GridBitmask`] address cells
const CELL_BITS: u32 = (1 << CELL_COUNT) - 1;

/// Grid errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GridError {
    /// Column or row outside 1..=5
    #[error("grid cell ({column}, {row}) out of range 1..=5")]
    CellOutOfRange {
        /// Requested column
        column: i32,
        /// Requested row
        row: i32,
    },
}

/// One position in the 5×5 grid, 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    column: u8,
    row: u8,
}

impl Cell {
    /// Validate a (column, row) pair
    pub fn new(column: i32, row: i32) -> Result<Self, GridError> {
        let in_range = |v: i32| (1..=i32::from(GRID_SIZE)).contains(&v);
        if !in_range(column) || !in_range(row) {
            return Err(GridError::CellOutOfRange { column, row });
        }
        // Both checked to 1..=5 above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cell = Self {
            column: column as u8,
            row: row as u8,
        };
        Ok(cell)
    }

    /// Cell for bitmask bit `bit` (0..25)
    pub fn from_bit(bit: u8) -> Option<Self> {
        if usize::from(bit) >= CELL_COUNT {
            return None;
        }
        Some(Self {
            column: bit % GRID_SIZE + 1,
            row: bit / GRID_SIZE + 1,
        })
    }

    /// Column, 1..=5
    pub fn column(self) -> u8 {
        self.column
    }

    /// Row, 1..=5
    pub fn row(self) -> u8 {
        self.row
    }

    /// Bitmask bit addressing this cell: `5 × (row − 1) + column − 1`
    pub fn bit(self) -> u8 {
        GRID_SIZE * (self.row - 1) + self.column - 1
    }

    /// All cells, column-major (column 1..=5 outer, row 1..=5 inner)
    pub fn column_major() -> impl Iterator<Item = Cell> {
        (1..=GRID_SIZE)
            .flat_map(|column| (1..=GRID_SIZE).map(move |row| Cell { column, row }))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Whole-grid state packed into 25 bits
///
/// Bit `5 × (row − 1) + column − 1` is cell (column, row); bits 25..31 are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridBitmask(pub u32);

impl GridBitmask {
    /// No cell lit
    pub const EMPTY: Self = Self(0);
    /// Every cell lit
    pub const FULL: Self = Self(CELL_BITS);

    /// Whether `cell` is lit
    pub fn is_on(self, cell: Cell) -> bool {
        self.0 & (1 << cell.bit()) != 0
    }

    /// Whether no cell is lit
    pub fn is_empty(self) -> bool {
        self.0 & CELL_BITS == 0
    }

    /// Every cell with its state, column-major
    pub fn cells(self) -> impl Iterator<Item = (Cell, bool)> {
        Cell::column_major().map(move |cell| (cell, self.is_on(cell)))
    }

    /// Set or clear one cell
    #[must_use]
    pub fn with(self, cell: Cell, on: bool) -> Self {
        let bit = 1 << cell.bit();
        if on {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }
}

impl From<u32> for GridBitmask {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Grid geometry for one panel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridLayout {
    /// Horizontal letterbox on landscape panels
    pub x_inset: i32,
    /// Vertical letterbox on portrait panels
    pub y_inset: i32,
    /// Cell side in pixels
    pub square_size: i32,
}

impl GridLayout {
    /// Layout for a panel of `width` × `height` in its current rotation
    pub fn for_panel(width: u32, height: u32) -> Self {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        let min_dimension = width.min(height);

        let (x_inset, y_inset) = if width > height {
            ((width - height) / 2, 0)
        } else {
            (0, (height - width) / 2)
        };

        let gutters = (i32::from(GRID_SIZE) + 1) * LINE_WIDTH;
        let square_size = (min_dimension - gutters).max(0) / i32::from(GRID_SIZE);

        Self {
            x_inset,
            y_inset,
            square_size,
        }
    }

    /// Top-left pixel of `cell`
    pub fn cell_origin(&self, cell: Cell) -> (i32, i32) {
        let c = i32::from(cell.column());
        let r = i32::from(cell.row());
        (
            self.x_inset + (c - 1) * self.square_size + c * LINE_WIDTH,
            self.y_inset + (r - 1) * self.square_size + r * LINE_WIDTH,
        )
    }

    /// Fill command for `cell`
    pub fn cell_fill(&self, cell: Cell, on: bool) -> CellFill {
        let (x, y) = self.cell_origin(cell);
        CellFill {
            x,
            y,
            size: self.square_size,
            on,
        }
    }

    /// Plan for showing `mask`
    ///
    /// An empty mask clears the whole panel; anything else repaints all 25
    /// cells, column-major.
    pub fn plan(&self, mask: GridBitmask) -> GridPlan {
        if mask.is_empty() {
            return GridPlan::Clear;
        }
        GridPlan::Cells(
            mask.cells()
                .map(|(cell, on)| self.cell_fill(cell, on))
                .collect(),
        )
    }
}

/// One square to paint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellFill {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Side length
    pub size: i32,
    /// Lit or unlit
    pub on: bool,
}

/// Driver work for one `set_grid` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridPlan {
    /// Clear the whole panel to the off color
    Clear,
    /// Paint each cell
    Cells(heapless::Vec<CellFill, CELL_COUNT>),
}

/// The two grid colors, already reduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridPalette {
    /// Lit cell
    pub on: Color16,
    /// Unlit cell and cleared panel
    pub off: Color16,
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            on: Color16::GREEN,
            off: Color16::BLACK,
        }
    }
}

impl CellFill {
    /// Paint this square
    pub fn apply<D: PanelDriver>(&self, driver: &mut D, palette: GridPalette) -> Result<(), D::Error> {
        let color = if self.on { palette.on } else { palette.off };
        driver.fill_rect(self.x, self.y, self.size, self.size, color)
    }
}

impl GridPlan {
    /// Issue the planned driver calls
    pub fn apply<D: PanelDriver>(&self, driver: &mut D, palette: GridPalette) -> Result<(), D::Error> {
        match self {
            Self::Clear => driver.fill_screen(palette.off),
            Self::Cells(fills) => fills.iter().try_for_each(|fill| fill.apply(driver, palette)),
        }
    }
}
