//! Shared layout measurements.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_HEIGHT: u16 = 1;

/// Height of each task card in rows, border included.
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering.
///
/// Below this we show a "terminal too small" message instead of the board.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height at which the header is still drawn.
///
/// Between `MIN_HEIGHT` and this value the header is dropped to reclaim
/// rows for the board.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Three columns, each needing enough room for borders and a readable
/// truncated title.
pub const MIN_WIDTH: u16 = 36;
