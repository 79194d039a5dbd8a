//! Demonstration: trace a word through a small character board.
//!
//! Prints the board and the result of both query variants for a
//! hardcoded word.

use wordgrid::{CharGrid, WordSearcher};

fn main() {
    let grid = CharGrid::from_lines(&["ABCE", "SFCS", "ADEE"]).expect("well-formed board");
    println!("{grid}");
    println!();

    let searcher = WordSearcher::new(grid);
    let word = "SEE";
    println!("\"{word}\" traced greedily:     {}", searcher.contains(word));
    println!(
        "\"{word}\" traced exhaustively: {}",
        searcher.contains_exhaustive(word)
    );
}
