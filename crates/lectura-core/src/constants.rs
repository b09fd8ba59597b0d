// Shared tuning constants for the effect engine and catalog.
// Physics values are per animation tick (one frame).

// Configuration defaults and clamp ranges
pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_TRIGGER_INTERVAL: u32 = 5;
pub const DEFAULT_DURATION_MS: f64 = 4000.0;
pub const DEFAULT_COOLDOWN_MS: f64 = 1000.0;

pub const MIN_TRIGGER_INTERVAL: u32 = 1;
pub const MAX_TRIGGER_INTERVAL: u32 = 100;
pub const MIN_DURATION_MS: f64 = 500.0;
pub const MAX_DURATION_MS: f64 = 60_000.0;
pub const MIN_COOLDOWN_MS: f64 = 0.0;
pub const MAX_COOLDOWN_MS: f64 = 60_000.0;

// Shared physics
pub const GRAVITY: f32 = 0.1; // px/tick² for falling particles

// Confetti
pub const CONFETTI_MIN_COUNT: usize = 100;
pub const CONFETTI_MAX_COUNT: usize = 120;
pub const CONFETTI_SPAWN_Y: f32 = -20.0;
pub const CONFETTI_CLICK_BURST: usize = 25;
pub const CONFETTI_MAX_FALL_SPEED: f32 = 9.0; // terminal velocity

// Fireworks
pub const FIREWORKS_MIN_BURSTS: usize = 3;
pub const FIREWORKS_MAX_BURSTS: usize = 40;
pub const FIREWORKS_MS_PER_BURST: f64 = 250.0;
pub const FIREWORKS_SCHEDULE_FRACTION: f64 = 0.8; // bursts spread over this share of the window
pub const FIREWORKS_PARTICLES_PER_BURST: usize = 50;
pub const FIREWORKS_PARTICLE_LIFE: f32 = 100.0;
pub const FIREWORKS_LIFE_DECAY: f32 = 2.0;
pub const FIREWORKS_PARTICLE_SIZE: f32 = 3.0;

// Balloons
pub const BALLOON_COUNT: usize = 15;
pub const BALLOON_SPAWN_OFFSET: f32 = 50.0; // below the bottom edge
pub const BALLOON_SWAY_STEP: f32 = 0.05;
pub const BALLOON_POP_STEP: f32 = 0.08;
pub const BALLOON_SHARDS: usize = 8;

// Stars
pub const STAR_COUNT: usize = 30;
pub const STAR_LIFE: f32 = 100.0;
pub const STAR_LIFE_DECAY: f32 = 2.0;
pub const STAR_SPIN_STEP: f32 = 2.0; // degrees per tick
pub const STAR_INNER_RATIO: f32 = 0.4;
pub const STAR_TWINKLE_TICKS: u32 = 30;
pub const STAR_DRIFT_SPEED: f32 = 2.5;

// Bubbles
pub const BUBBLE_COUNT: usize = 25;
pub const BUBBLE_SPAWN_OFFSET: f32 = 20.0;
pub const BUBBLE_SWAY_STEP: f32 = 0.03;
pub const BUBBLE_POP_CHANCE: f64 = 0.01; // per tick
pub const BUBBLE_POP_STEP: f32 = 0.1;

// Emoji rain
pub const EMOJI_MIN_COUNT: usize = 30;
pub const EMOJI_MAX_COUNT: usize = 35;
pub const EMOJI_SPAWN_Y: f32 = -50.0;
pub const EMOJI_BOUNCE_SPEED: f32 = 8.0;
pub const EMOJI_RECOVERY: f32 = 0.2; // how fast a bounced glyph returns to its fall speed
pub const EMOJI_SET: [&str; 10] = ["😊", "🎉", "⭐", "💖", "🌈", "✨", "🎈", "🌟", "💫", "🎊"];

// Interaction
pub const MIN_HIT_RADIUS: f32 = 12.0; // small particles still get a usable target

// Shared palette
pub const PALETTE: [(u8, u8, u8); 7] = [
    (0xff, 0x6b, 0x6b), // coral
    (0x4e, 0xcd, 0xc4), // teal
    (0x45, 0xb7, 0xd1), // sky
    (0xf9, 0xca, 0x24), // sun
    (0x6c, 0x5c, 0xe7), // violet
    (0xfd, 0x79, 0xa8), // pink
    (0xfd, 0xcb, 0x6e), // sand
];
pub const STAR_GOLD: (u8, u8, u8) = (255, 215, 0);
pub const BUBBLE_BLUE: (u8, u8, u8) = (135, 206, 250);
pub const BUBBLE_DEEP: (u8, u8, u8) = (65, 105, 225);
