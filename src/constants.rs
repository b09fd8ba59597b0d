// DOM contract and presentation constants for the web front-end.
//
// Element ids and class names the page markup must provide live here so
// the wiring modules never spell them inline.

// Effects overlay
pub const EFFECTS_CANVAS_ID: &str = "effectsCanvas";
pub const REVEAL_DISABLED_CLASS: &str = "reveal-disabled";

// Reveal areas: (container id, drill mode name)
pub const REVEAL_AREAS: [(&str, &str); 5] = [
    ("numerosDisplay", "numbers"),
    ("vocalesDisplay", "vowels"),
    ("consonantesDisplay", "consonants"),
    ("silabasDisplay", "syllables"),
    ("palabrasDisplay", "words"),
];
pub const LETTER_DISPLAY_SELECTOR: &str = ".letter-display";

// Tabs and toggles
pub const TAB_BUTTON_SELECTOR: &str = ".tab-button";
pub const TAB_CONTENT_SELECTOR: &str = ".tab-content";
pub const ACTIVE_CLASS: &str = "active";
pub const CASE_TOGGLE_ID: &str = "caseToggle";
pub const CASE_TEXT_ID: &str = "caseText";
pub const RANDOM_STYLE_TOGGLE_ID: &str = "randomStyle";
pub const CONSONANTS_GRID_ID: &str = "consonantsGrid";
pub const LETTER_COUNT_ID: &str = "letterCount";
pub const LETTER_COUNT_VALUE_ID: &str = "letterCountValue";

// Settings panel inputs; value labels use the id with a "Value" suffix
pub const SETTING_ENABLED_ID: &str = "effectsEnabled";
pub const SETTING_INTERVAL_ID: &str = "effectInterval";
pub const SETTING_DURATION_ID: &str = "effectDuration";
pub const SETTING_COOLDOWN_ID: &str = "effectCooldown";

// Global JS handle name (window.<name>)
pub const JS_HANDLE_NAME: &str = "lecturaEffects";

// Glyph font for emoji rendering
pub const EMOJI_FONT_FAMILY: &str =
    "'Apple Color Emoji', 'Segoe UI Emoji', 'Noto Color Emoji', Arial";
