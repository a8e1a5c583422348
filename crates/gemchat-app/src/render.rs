//! Transcript rendering helpers.

use std::io::Write;

use gemchat_ai::{Role, Turn};

/// Split reply text into display lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Notice shown while a request is in flight.
pub fn thinking() {
    println!("(thinking...)");
}

pub fn prompt() {
    print!("you> ");
    let _ = std::io::stdout().flush();
}

pub fn print_turn(turn: &Turn) {
    let label = match turn.role {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    let mut lines = split_lines(&turn.text).into_iter();
    if let Some(first) = lines.next() {
        println!("{label}> {first}");
    }
    for line in lines {
        println!("{:width$}{line}", "", width = label.len() + 2);
    }
}

pub fn print_transcript(turns: &[Turn]) {
    for turn in turns {
        print_turn(turn);
    }
}
