// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests agree on what "the library" is.

#![doc(hidden)]

use serde_json::{json, Value};

use crate::engine::SearchEngine;
use crate::types::{Collection, CollectionConfig};

/// A book record with the fields the built-in books config reads.
pub fn make_book(name: &str, testament: &str) -> Value {
    json!({ "name": name, "testament": testament })
}

/// A book record with a description.
pub fn make_book_with_description(name: &str, testament: &str, description: &str) -> Value {
    json!({ "name": name, "testament": testament, "description": description })
}

/// A character record.
pub fn make_character(name: &str, role: &str, description: &str) -> Value {
    json!({ "name": name, "role": role, "description": description })
}

/// A chapter record.
pub fn make_chapter(book: &str, chapter: u32, title: &str, summary: &str) -> Value {
    json!({ "book": book, "chapter": chapter, "title": title, "summary": summary })
}

/// The single-book collection used by the Genesis scenarios.
pub fn genesis_collection() -> Collection {
    Collection::new(
        "books",
        vec![make_book("Genesis", "Old Testament")],
        CollectionConfig::books(),
    )
}

/// A small library spanning all three built-in collection types.
pub fn sample_library() -> Vec<Collection> {
    vec![
        Collection::new(
            "books",
            vec![
                make_book_with_description("Genesis", "Old Testament", "The beginning of the world and the patriarchs"),
                make_book_with_description("Exodus", "Old Testament", "Moses leads Israel out of Egypt"),
                make_book_with_description("Psalms", "Old Testament", "Songs and prayers to the LORD"),
                make_book_with_description("Matthew", "New Testament", "The gospel of Jesus the Messiah"),
                make_book_with_description("Revelation", "New Testament", "Visions of the end and a new heaven"),
            ],
            CollectionConfig::books(),
        ),
        Collection::new(
            "characters",
            vec![
                make_character("Moses", "Prophet", "Lawgiver who led the exodus from Egypt"),
                make_character("Aaron", "Priest", "Brother of Moses and first high priest"),
                make_character("David", "King", "Shepherd who became king of Israel"),
                json!({ "name": "LORD", "role": "God", "description": "The God of Israel" }),
            ],
            CollectionConfig::characters(),
        ),
        Collection::new(
            "chapters",
            vec![
                make_chapter("Genesis", 1, "The Creation", "In the beginning God created the heavens and the earth"),
                make_chapter("Exodus", 20, "The Ten Commandments", "God gives the law to Moses on Sinai"),
            ],
            CollectionConfig::chapters(),
        ),
    ]
}

/// An engine with [`sample_library`] loaded.
pub fn sample_engine() -> SearchEngine {
    let mut engine = SearchEngine::default();
    engine.initialize_indices(sample_library());
    engine
}
