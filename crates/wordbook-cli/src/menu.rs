//! Interactive console menu: a numbered-option loop over the wordbook and
//! quiz crates. Every error is rendered as a message and control returns to
//! the menu; only end of input or an I/O failure leaves the loop.

use std::io::{self, BufRead};

use rand::thread_rng;

use wordbook_core::{DictionaryError, Wordbook};
use wordbook_quiz::{AnswerResult, QuizScore, QuizSession};

use crate::input::{non_empty, parse_count, prompt};

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

pub fn run(book: &mut Wordbook) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("=== Wordbook ===");
    loop {
        println!();
        println!("Options:");
        println!("1. Add a word");
        println!("2. Look up a word");
        println!("3. Edit a meaning");
        println!("4. Delete a word");
        println!("5. Show all words");
        println!("6. Quiz mode (match meanings)");
        println!("7. Exit");

        let Some(choice) = prompt(&mut lines, "Choose 1-7: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => add(book, &mut lines)?,
            "2" => lookup(book, &mut lines)?,
            "3" => edit(book, &mut lines)?,
            "4" => delete(book, &mut lines)?,
            "5" => list(book),
            "6" => quiz(book, &mut lines)?,
            "7" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice, try 1-7."),
        }
    }
}

fn render(err: DictionaryError) {
    match err {
        DictionaryError::NotFound(word) => println!("'{word}' not found."),
        DictionaryError::Store(e) => println!("Could not save dictionary: {e}"),
    }
}

fn add(book: &mut Wordbook, lines: &mut Lines) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Word to add: ")? else {
        return Ok(());
    };
    let Some(word) = non_empty(&raw) else {
        println!("Word cannot be empty.");
        return Ok(());
    };
    let Some(raw) = prompt(lines, "Meaning: ")? else {
        return Ok(());
    };
    let Some(meaning) = non_empty(&raw) else {
        println!("Meaning cannot be empty.");
        return Ok(());
    };

    match book.add(word, meaning) {
        Ok((word, meaning)) => println!("Added: {word} → {meaning}"),
        Err(e) => render(e),
    }
    Ok(())
}

fn lookup(book: &Wordbook, lines: &mut Lines) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Word to look up: ")? else {
        return Ok(());
    };
    let Some(word) = non_empty(&raw) else {
        println!("Word cannot be empty.");
        return Ok(());
    };

    match book.lookup(word) {
        Ok(meaning) => println!("{} : {meaning}", wordbook_core::normalize_word(word)),
        Err(e) => render(e),
    }
    Ok(())
}

fn edit(book: &mut Wordbook, lines: &mut Lines) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Word to edit: ")? else {
        return Ok(());
    };
    let Some(word) = non_empty(&raw) else {
        println!("Word cannot be empty.");
        return Ok(());
    };

    let current = match book.lookup(word) {
        Ok(meaning) => meaning.to_string(),
        Err(e) => {
            render(e);
            return Ok(());
        }
    };
    println!("Current meaning: {current}");

    let Some(raw) = prompt(lines, "New meaning: ")? else {
        return Ok(());
    };
    let Some(meaning) = non_empty(&raw) else {
        println!("Meaning cannot be empty.");
        return Ok(());
    };

    match book.edit(word, meaning) {
        Ok(()) => println!("Updated: {} → {meaning}", wordbook_core::normalize_word(word)),
        Err(e) => render(e),
    }
    Ok(())
}

fn delete(book: &mut Wordbook, lines: &mut Lines) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Word to delete: ")? else {
        return Ok(());
    };
    let Some(word) = non_empty(&raw) else {
        println!("Word cannot be empty.");
        return Ok(());
    };

    // Confirmation is the adapter's job; the wordbook deletes unconditionally.
    if book.lookup(word).is_err() {
        println!("'{}' not found.", wordbook_core::normalize_word(word));
        return Ok(());
    }
    let Some(confirm) = prompt(lines, &format!("Delete '{word}'? (y/n): "))? else {
        return Ok(());
    };
    if !confirm.eq_ignore_ascii_case("y") {
        return Ok(());
    }

    match book.delete(word) {
        Ok(()) => println!("Deleted '{}'.", wordbook_core::normalize_word(word)),
        Err(e) => render(e),
    }
    Ok(())
}

fn list(book: &Wordbook) {
    let entries = book.list();
    if entries.is_empty() {
        println!("Dictionary is empty.");
        return;
    }
    println!("Words in dictionary:");
    for (word, meaning) in &entries {
        println!("{word} : {meaning}");
    }
}

fn quiz(book: &Wordbook, lines: &mut Lines) -> io::Result<()> {
    if book.is_empty() {
        println!("Dictionary empty, add words first.");
        return Ok(());
    }

    let Some(raw) = prompt(lines, "How many words to quiz on? ")? else {
        return Ok(());
    };
    let Some(requested) = parse_count(&raw) else {
        println!("Please enter a number greater than zero.");
        return Ok(());
    };

    let mut session = match QuizSession::start(book.dictionary(), requested, &mut thread_rng()) {
        Ok(session) => session,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };
    if session.total() < requested {
        println!("Only {} words available, using all.", session.total());
    }

    println!();
    println!("=== Match the meanings to the correct words ===");
    for (i, meaning) in session.meanings().iter().enumerate() {
        println!("{}. {meaning}", i + 1);
    }
    println!();
    println!("Enter the number of the meaning that matches each word:");

    while let Some(word) = session.current_word().map(str::to_string) {
        println!();
        println!("Word: {word}");
        let Some(raw) = prompt(lines, "Meaning number: ")? else {
            return Ok(());
        };
        // Bad input does not consume the turn; the same word is asked again.
        let Some(choice) = parse_count(&raw) else {
            println!("Invalid, must be a number.");
            continue;
        };

        match session.submit(choice) {
            AnswerResult::OutOfRange => {
                println!("Out of range, pick 1 to {}.", session.meanings().len());
            }
            AnswerResult::Correct { finished } => {
                println!("✔ Correct!");
                results(finished);
            }
            AnswerResult::Incorrect {
                correct_meaning,
                finished,
            } => {
                println!("✘ Wrong. Correct meaning: {correct_meaning}");
                results(finished);
            }
            AnswerResult::Finished => break,
        }
    }
    Ok(())
}

fn results(finished: Option<QuizScore>) {
    if let Some(score) = finished {
        println!();
        println!("=== Quiz Results ===");
        println!("You matched correctly {}/{} words.", score.correct, score.total);
    }
}
