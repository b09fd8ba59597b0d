// Reading-drill content: numbers, vowels, consonants, syllables and words.
//
// Pure Rust with no browser dependencies so the host-side tests can
// `include!` it.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

pub const VOWELS: [&str; 5] = ["a", "e", "i", "o", "u"];
pub const CONSONANTS: [&str; 22] = [
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "ñ", "p", "q", "r", "s", "t", "v", "w",
    "x", "y", "z",
];
pub const MAX_NUMBER: u32 = 20;

pub const WORDS: &[&str] = &[
    "sol", "mar", "pan", "luz", "oso", "ojo", "uva", "mesa", "casa", "gato", "pato", "mamá", "papá",
    "luna", "sapo", "nube", "vaca", "pelo", "rosa", "lobo", "perro", "libro", "silla", "fresa",
    "queso", "árbol", "playa", "ratón", "camión", "conejo", "zapato", "tomate", "escuela",
    "ventana", "mariposa", "elefante", "pelota", "muñeca",
];
pub const MIN_WORD_LETTERS: usize = 2;
pub const MAX_WORD_LETTERS: usize = 8;
pub const DEFAULT_WORD_LETTERS: usize = 4;

pub const SELECT_CONSONANTS_PROMPT: &str = "¡Selecciona consonantes!";
pub const COMING_SOON: &str = "Próximamente";

pub const FONTS: [&str; 6] = [
    "'Comic Sans MS', cursive",
    "Arial, sans-serif",
    "Georgia, serif",
    "Verdana, sans-serif",
    "'Trebuchet MS', sans-serif",
    "'Courier New', monospace",
];
pub const MIN_FONT_REM: f32 = 4.0;
pub const MAX_FONT_REM: f32 = 7.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillMode {
    Numbers,
    Vowels,
    Consonants,
    Syllables,
    Words,
}

impl DrillMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "numbers" => Some(DrillMode::Numbers),
            "vowels" => Some(DrillMode::Vowels),
            "consonants" => Some(DrillMode::Consonants),
            "syllables" => Some(DrillMode::Syllables),
            "words" => Some(DrillMode::Words),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

impl LetterCase {
    pub fn toggled(self) -> Self {
        match self {
            LetterCase::Lower => LetterCase::Upper,
            LetterCase::Upper => LetterCase::Lower,
        }
    }

    /// Label for the toggle button: shows the case you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            LetterCase::Lower => "ABC",
            LetterCase::Upper => "abc",
        }
    }
}

pub fn apply_case(text: &str, case: LetterCase) -> String {
    match case {
        LetterCase::Lower => text.to_lowercase(),
        LetterCase::Upper => text.to_uppercase(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayStyle {
    pub font_family: &'static str,
    pub size_rem: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub text: String,
    /// False for prompts such as "select consonants"; prompts never trigger effects.
    pub is_content: bool,
    pub style: Option<DisplayStyle>,
}

#[derive(Clone, Debug)]
pub struct Drill {
    case: LetterCase,
    active_consonants: BTreeSet<&'static str>,
    word_letters: usize,
    random_style: bool,
    last: Option<String>,
}

impl Default for Drill {
    fn default() -> Self {
        Self {
            case: LetterCase::Lower,
            active_consonants: CONSONANTS.iter().copied().collect(),
            word_letters: DEFAULT_WORD_LETTERS,
            random_style: false,
            last: None,
        }
    }
}

impl Drill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case(&self) -> LetterCase {
        self.case
    }

    pub fn toggle_case(&mut self) -> LetterCase {
        self.case = self.case.toggled();
        self.case
    }

    pub fn set_random_style(&mut self, on: bool) {
        self.random_style = on;
    }

    pub fn set_consonant(&mut self, consonant: &str, active: bool) {
        let Some(c) = CONSONANTS.iter().copied().find(|c| *c == consonant) else {
            return;
        };
        if active {
            self.active_consonants.insert(c);
        } else {
            self.active_consonants.remove(c);
        }
    }

    pub fn active_consonants(&self) -> usize {
        self.active_consonants.len()
    }

    pub fn set_word_letters(&mut self, letters: usize) -> usize {
        self.word_letters = letters.clamp(MIN_WORD_LETTERS, MAX_WORD_LETTERS);
        self.word_letters
    }

    pub fn reveal<R: Rng>(&mut self, mode: DrillMode, rng: &mut R) -> Reveal {
        let candidates: Vec<String> = match mode {
            DrillMode::Numbers => (0..=MAX_NUMBER).map(|n| n.to_string()).collect(),
            DrillMode::Vowels => VOWELS.iter().map(|v| v.to_string()).collect(),
            DrillMode::Consonants => self.consonant_pool(),
            DrillMode::Syllables => self
                .consonant_pool()
                .iter()
                .flat_map(|c| VOWELS.iter().map(move |v| format!("{c}{v}")))
                .collect(),
            DrillMode::Words => WORDS
                .iter()
                .filter(|w| w.chars().count() == self.word_letters)
                .map(|w| w.to_string())
                .collect(),
        };

        if candidates.is_empty() {
            let prompt = match mode {
                DrillMode::Words => COMING_SOON,
                _ => SELECT_CONSONANTS_PROMPT,
            };
            return Reveal {
                text: prompt.to_string(),
                is_content: false,
                style: None,
            };
        }

        let raw = pick_avoiding(&candidates, self.last.as_deref(), rng);
        self.last = Some(raw.clone());
        let style = self.random_style.then(|| DisplayStyle {
            font_family: FONTS.choose(rng).copied().unwrap_or(FONTS[0]),
            size_rem: rng.gen_range(MIN_FONT_REM..=MAX_FONT_REM),
        });
        Reveal {
            text: apply_case(&raw, self.case),
            is_content: true,
            style,
        }
    }

    /// Re-apply the current case to text already on screen, if it is drill
    /// content rather than a prompt or instructions.
    pub fn recase(&self, shown: &str) -> Option<String> {
        is_drill_text(shown).then(|| apply_case(shown, self.case))
    }

    fn consonant_pool(&self) -> Vec<String> {
        self.active_consonants.iter().map(|c| c.to_string()).collect()
    }
}

/// Short runs of letters (accents and ñ included). Prompts and
/// instructions are longer or contain punctuation.
pub fn is_drill_text(text: &str) -> bool {
    !text.is_empty()
        && text.chars().count() <= MAX_WORD_LETTERS
        && text.chars().all(char::is_alphabetic)
}

/// Random candidate that differs from `last` whenever there is a choice.
fn pick_avoiding<R: Rng>(candidates: &[String], last: Option<&str>, rng: &mut R) -> String {
    let fresh: Vec<&String> = candidates
        .iter()
        .filter(|c| Some(c.as_str()) != last)
        .collect();
    match fresh.choose(rng) {
        Some(c) => (*c).clone(),
        None => candidates.choose(rng).cloned().unwrap_or_default(),
    }
}
