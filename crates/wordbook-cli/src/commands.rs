//! One-shot subcommands for scripted use. Result lines match the
//! interactive menu; store failures exit non-zero.

use std::process;

use wordbook_core::{DictionaryError, Wordbook};

use crate::input::non_empty;

fn require(arg: &str, what: &str) -> String {
    match non_empty(arg) {
        Some(value) => value.to_string(),
        None => {
            eprintln!("{what} cannot be empty.");
            process::exit(1);
        }
    }
}

fn report(err: DictionaryError) {
    match err {
        DictionaryError::NotFound(word) => println!("'{word}' not found."),
        DictionaryError::Store(e) => {
            eprintln!("Error saving dictionary: {e}");
            process::exit(1);
        }
    }
}

pub fn add(book: &mut Wordbook, word: &str, meaning: &str) {
    let word = require(word, "Word");
    let meaning = require(meaning, "Meaning");
    match book.add(&word, &meaning) {
        Ok((word, meaning)) => println!("Added: {word} → {meaning}"),
        Err(e) => report(e),
    }
}

pub fn lookup(book: &Wordbook, word: &str) {
    let word = require(word, "Word");
    match book.lookup(&word) {
        Ok(meaning) => println!("{word} : {meaning}"),
        Err(e) => report(e),
    }
}

pub fn edit(book: &mut Wordbook, word: &str, meaning: &str) {
    let word = require(word, "Word");
    let meaning = require(meaning, "Meaning");
    match book.edit(&word, &meaning) {
        Ok(()) => println!("Updated: {word} → {meaning}"),
        Err(e) => report(e),
    }
}

pub fn remove(book: &mut Wordbook, word: &str) {
    let word = require(word, "Word");
    match book.delete(&word) {
        Ok(()) => println!("Deleted '{word}'."),
        Err(e) => report(e),
    }
}

pub fn list(book: &Wordbook) {
    let entries = book.list();
    if entries.is_empty() {
        println!("(empty)");
    } else {
        for (word, meaning) in &entries {
            println!("{word} : {meaning}");
        }
        println!("---");
        println!("{} entries", entries.len());
    }
}
