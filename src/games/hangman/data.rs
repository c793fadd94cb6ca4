//! Static game data: candidate words, the on-screen alphabet and the miss limit.

pub const WORDS: &[&str] = &[
    "WINTER", "PAPER", "ORANGE", "WATER", "PHONE", "ANIMAL", "WHITE", "BLACK", "MACHINE", "SMART",
    "FIRST", "PAIN", "HAPPY", "SWIM", "COUNT", "MOUSE", "GROUND", "BREAK", "PLANE", "CAT", "HUMAN",
    "PROGRAM", "CHESS", "CHATGPT", "PROGRAMMER", "NUMBER", "BUBBLE", "PEOPLE", "WOMEN", "SUPER",
    "FOOTBALL", "VILLAGE", "STUDY", "PATIENT", "BITCOIN", "MONEY", "CURRENCY", "STUDENT", "ISLAND",
    "EYES", "DATA", "PHOTO", "PYTHON", "JAVASCRIPT", "PENCIL", "TEACHER", "DISPLAY", "SNIPER",
    "SALARY", "ROADMAP", "CRYPTO", "DREAM",
];

/// Used when an empty word list is supplied.
pub const FALLBACK_WORD: &str = "HANGMAN";

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Misses tolerated; the round is lost on the next one.
pub const MAX_MISS: u32 = 6;

/// Shown in the revealed string for letters not guessed yet.
pub const PLACEHOLDER: char = '_';
