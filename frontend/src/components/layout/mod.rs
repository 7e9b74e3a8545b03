pub mod card_grid;
pub mod modal_sheet;
