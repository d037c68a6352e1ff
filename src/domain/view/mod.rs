pub mod board_view;

pub use board_view::{AlternativeView, BoardOverview, CellView, FactorView, RowView};
