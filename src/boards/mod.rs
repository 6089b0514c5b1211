pub mod checkers_board;
pub mod perft;
