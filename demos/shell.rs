//! Interactive shell over a score trie.
//!
//! Reads commands from stdin, one per line, and applies them to a
//! single trie. Run with `cargo run --example shell` and type `help`
//! for the command syntax. EOF (ctrl-d) or `quit` exits.

use std::io::{self, BufRead, Write};

use scoretrie::trie::Trie;

const HELP: &str = "\
Trie enables you to store integers in a tree data structure using strings as keys.

Available commands:
add <key> <value>     Inserts the value for a new key into the trie. Fails if the key already has a value assigned.
change <key> <value>  Changes the value for the given key. Fails if no value is associated with the key.
delete <key>          Removes a data element. Fails if no value is associated with the key.
points <key>          Prints the value of the specified key. Fails if no value is associated with the key.
trie   Prints the structure of the current trie.
help   Shows this help text.
new    Creates a new trie and discards the old data structure.
quit   Exits the program.

Note that the key must contain lowercase letters only.";

fn print_error(msg: &str) {
    println!("Error! {msg}");
    println!("Enter 'help' to display the syntax.");
}

/// Checks that the command carries enough parameters, complaining if
/// it does not.
fn has_enough_parameters(tokens: &[&str], required: usize) -> bool {
    let given = tokens.len() - 1;
    if given < required {
        print_error(&format!(
            "Missing parameters. {given} received, but {required} required."
        ));
        return false;
    }
    true
}

fn parse_value(token: &str) -> Option<i32> {
    match token.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            print_error("The value has to be an integer.");
            None
        }
    }
}

fn execute_command(trie: &mut Trie, tokens: &[&str]) -> bool {
    // The token list is never empty: blank lines are filtered out
    // before dispatch.
    match tokens[0].to_lowercase().as_str() {
        "new" => trie.clear(),
        "help" => println!("{HELP}"),
        "quit" => return false,
        "trie" => println!("{trie}"),
        "add" => {
            if has_enough_parameters(tokens, 2) {
                if let Some(value) = parse_value(tokens[2]) {
                    if let Err(e) = trie.add(tokens[1], value) {
                        print_error(&e.to_string());
                    }
                }
            }
        }
        "change" => {
            if has_enough_parameters(tokens, 2) {
                if let Some(value) = parse_value(tokens[2]) {
                    if let Err(e) = trie.change(tokens[1], value) {
                        print_error(&e.to_string());
                    }
                }
            }
        }
        "delete" => {
            if has_enough_parameters(tokens, 1) {
                if let Err(e) = trie.remove(tokens[1]) {
                    print_error(&e.to_string());
                }
            }
        }
        "points" => {
            if has_enough_parameters(tokens, 1) {
                match trie.lookup(tokens[1]) {
                    Some(points) => println!("{points}"),
                    None => print_error("The key does not hold a value."),
                }
            }
        }
        cmd => print_error(&format!("Unknown command {cmd:?}")),
    }
    true
}

fn main() -> io::Result<()> {
    let mut trie = Trie::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("trie> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // EOF terminates the shell.
            None => break,
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if !execute_command(&mut trie, &tokens) {
            break;
        }
    }

    Ok(())
}
