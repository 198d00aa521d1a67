//! Fixed character cast and prompt fragments
//!
//! A small immutable in-memory table in the Monica's Gang house style. The
//! trigger words are prompt tokens only; nothing in the pipeline enforces
//! that a backend honors them.

/// Static prompt record for one cast member
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Character {
    /// Filesystem-safe identifier
    pub slug: &'static str,
    /// English display name
    pub name: &'static str,
    /// French display name used by the book viewer
    pub localized_name: &'static str,
    /// Original Brazilian name
    pub source_name: &'static str,
    /// Short textual style description
    pub description: &'static str,
    /// Full prompt fragment establishing the character's appearance
    pub full_prompt: &'static str,
    /// Prompt token intended to bias generation toward this character
    pub trigger_word: &'static str,
}

/// The fixed four-member cast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastMember {
    /// Boy with exactly five hair strands and a green shirt
    JimmyFive,
    /// Girl with a red dress and a blue bunny plush
    Monica,
    /// Girl with pigtails, a yellow dress, and a watermelon
    Maggie,
    /// Boy with messy hair and a striped shirt
    Smudge,
}

static JIMMY_FIVE: Character = Character {
    slug: "jimmy_five",
    name: "Jimmy Five",
    localized_name: "Jimmy Cinq",
    source_name: "Cebolinha",
    description: "cartoon boy with 5 spiky hair strands on top, green shirt, black shorts, big head, simple lines",
    full_prompt: "Monica's Gang cartoon style, Jimmy Five character, boy with exactly 5 hair strands, round big head, green t-shirt, black shorts, simple flat colors, white background, comic book style, chibi",
    trigger_word: "jimmy_five_character",
};

static MONICA: Character = Character {
    slug: "monica",
    name: "Monica",
    localized_name: "Monica",
    source_name: "Mônica",
    description: "cartoon girl with short black hair, red dress, bunny teeth, holding blue bunny plush, big head",
    full_prompt: "Monica's Gang cartoon style, Monica character, girl with bob haircut, red dress, prominent front teeth, blue stuffed bunny, round big head, simple flat colors, white background, comic book style, chibi",
    trigger_word: "monica_character",
};

static MAGGIE: Character = Character {
    slug: "maggie",
    name: "Maggie",
    localized_name: "Maggie",
    source_name: "Magali",
    description: "cartoon girl with yellow dress, black hair in pigtails, always eating watermelon",
    full_prompt: "Monica's Gang cartoon style, Maggie character, girl with pigtails, yellow dress, eating watermelon, round big head, simple flat colors, white background, comic book style, chibi",
    trigger_word: "maggie_character",
};

static SMUDGE: Character = Character {
    slug: "smudge",
    name: "Smudge",
    localized_name: "Cascao",
    source_name: "Cascão",
    description: "cartoon boy with messy hair, red striped shirt, brown shorts, dirt marks",
    full_prompt: "Monica's Gang cartoon style, Smudge character, boy with messy spiky hair, red and yellow striped shirt, brown shorts, round big head, simple flat colors, white background, comic book style, chibi",
    trigger_word: "smudge_character",
};

impl CastMember {
    /// Look up a cast member by slug, falling back to Jimmy Five
    pub fn from_key(key: &str) -> Self {
        match key {
            "monica" => Self::Monica,
            "maggie" => Self::Maggie,
            "smudge" => Self::Smudge,
            _ => Self::JimmyFive,
        }
    }

    /// The static character record for this member
    pub const fn reference(self) -> &'static Character {
        match self {
            Self::JimmyFive => &JIMMY_FIVE,
            Self::Monica => &MONICA,
            Self::Maggie => &MAGGIE,
            Self::Smudge => &SMUDGE,
        }
    }
}
