pub mod claim_dialogs;
pub mod item_card;
pub mod item_grid;
