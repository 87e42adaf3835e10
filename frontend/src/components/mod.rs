pub mod roster_board;
