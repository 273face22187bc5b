//! Static Book Registry
//!
//! The sixty-six protestant books with their USFX-style keys, canonical ordinals,
//! English display names, and accepted abbreviations. Name resolution normalizes
//! case, whitespace, and punctuation, so `"1 Sam"`, `"1sam"`, and `"1 Sam."` all
//! reach the same entry. The no-ambiguity invariant over this table is checked when
//! the `CanonModel` is built, not here.

use super::types::Book;

macro_rules! book {
    ($key:literal, $ord:literal, $name:literal, [$($alias:literal),*]) => {
        Book {
            key: $key,
            ordinal: $ord,
            name: $name,
            aliases: &[$($alias),*],
        }
    };
}

pub const BOOKS: &[Book] = &[
    // Old Testament
    book!("GEN", 1, "Genesis", ["Gen", "Ge", "Gn"]),
    book!("EXO", 2, "Exodus", ["Exod", "Ex"]),
    book!("LEV", 3, "Leviticus", ["Lev", "Lv"]),
    book!("NUM", 4, "Numbers", ["Num", "Nm", "Nb"]),
    book!("DEU", 5, "Deuteronomy", ["Deut", "Dt"]),
    book!("JOS", 6, "Joshua", ["Josh"]),
    book!("JDG", 7, "Judges", ["Judg"]),
    book!("RUT", 8, "Ruth", ["Rth", "Ru"]),
    book!("1SA", 9, "1 Samuel", ["1 Sam", "1 Sm"]),
    book!("2SA", 10, "2 Samuel", ["2 Sam", "2 Sm"]),
    book!("1KI", 11, "1 Kings", ["1 Kgs", "1 Kin"]),
    book!("2KI", 12, "2 Kings", ["2 Kgs", "2 Kin"]),
    book!("1CH", 13, "1 Chronicles", ["1 Chron", "1 Chr"]),
    book!("2CH", 14, "2 Chronicles", ["2 Chron", "2 Chr"]),
    book!("EZR", 15, "Ezra", []),
    book!("NEH", 16, "Nehemiah", ["Neh"]),
    book!("EST", 17, "Esther", ["Esth"]),
    book!("JOB", 18, "Job", ["Jb"]),
    book!("PSA", 19, "Psalms", ["Psalm", "Ps", "Pss"]),
    book!("PRO", 20, "Proverbs", ["Prov", "Prv", "Pr"]),
    book!("ECC", 21, "Ecclesiastes", ["Eccl", "Qoheleth"]),
    book!("SNG", 22, "Song of Solomon", ["Song of Songs", "Song", "Canticles", "SoS"]),
    book!("ISA", 23, "Isaiah", ["Is"]),
    book!("JER", 24, "Jeremiah", ["Jer"]),
    book!("LAM", 25, "Lamentations", ["Lam"]),
    book!("EZK", 26, "Ezekiel", ["Ezek", "Eze"]),
    book!("DAN", 27, "Daniel", ["Dan", "Dn"]),
    book!("HOS", 28, "Hosea", ["Hos"]),
    book!("JOL", 29, "Joel", ["Jl"]),
    book!("AMO", 30, "Amos", ["Am"]),
    book!("OBA", 31, "Obadiah", ["Obad", "Ob"]),
    book!("JON", 32, "Jonah", ["Jon"]),
    book!("MIC", 33, "Micah", ["Mic"]),
    book!("NAM", 34, "Nahum", ["Nah", "Na"]),
    book!("HAB", 35, "Habakkuk", ["Hab"]),
    book!("ZEP", 36, "Zephaniah", ["Zeph"]),
    book!("HAG", 37, "Haggai", ["Hag"]),
    book!("ZEC", 38, "Zechariah", ["Zech"]),
    book!("MAL", 39, "Malachi", ["Mal"]),
    // New Testament
    book!("MAT", 40, "Matthew", ["Matt", "Mt"]),
    book!("MRK", 41, "Mark", ["Mk", "Mar"]),
    book!("LUK", 42, "Luke", ["Lk"]),
    book!("JHN", 43, "John", ["Jn"]),
    book!("ACT", 44, "Acts", ["Ac"]),
    book!("ROM", 45, "Romans", ["Rom", "Rm"]),
    book!("1CO", 46, "1 Corinthians", ["1 Cor"]),
    book!("2CO", 47, "2 Corinthians", ["2 Cor"]),
    book!("GAL", 48, "Galatians", ["Gal"]),
    book!("EPH", 49, "Ephesians", ["Eph"]),
    book!("PHP", 50, "Philippians", ["Phil", "Philipp"]),
    book!("COL", 51, "Colossians", ["Col"]),
    book!("1TH", 52, "1 Thessalonians", ["1 Thess", "1 Thes"]),
    book!("2TH", 53, "2 Thessalonians", ["2 Thess", "2 Thes"]),
    book!("1TI", 54, "1 Timothy", ["1 Tim"]),
    book!("2TI", 55, "2 Timothy", ["2 Tim"]),
    book!("TIT", 56, "Titus", ["Tit"]),
    book!("PHM", 57, "Philemon", ["Phlm", "Philem"]),
    book!("HEB", 58, "Hebrews", ["Heb"]),
    book!("JAS", 59, "James", ["Jas", "Jm"]),
    book!("1PE", 60, "1 Peter", ["1 Pet", "1 Pt"]),
    book!("2PE", 61, "2 Peter", ["2 Pet", "2 Pt"]),
    book!("1JN", 62, "1 John", ["1 Jn"]),
    book!("2JN", 63, "2 John", ["2 Jn"]),
    book!("3JN", 64, "3 John", ["3 Jn"]),
    book!("JUD", 65, "Jude", ["Jude"]),
    book!("REV", 66, "Revelation", ["Rev", "Apocalypse"]),
];

/// Look a book up by its registry key (exact, case-sensitive).
pub fn by_key(key: &str) -> Option<&'static Book> {
    BOOKS.iter().find(|b| b.key == key)
}

/// Look a book up by its canonical ordinal (1-based).
pub fn by_ordinal(ordinal: u16) -> Option<&'static Book> {
    if ordinal == 0 {
        return None;
    }
    BOOKS.get(ordinal as usize - 1)
}
