//! Default content pool: a deck of work-from-home icebreaker prompts.
//! Every generator takes an arbitrary pool; this one is a convenience for
//! demos, tests, and quick starts.

/// The built-in prompt list. 28 prompts — enough for a full bingo board (24)
/// and the default checklist (24) with room to spare.
pub const DEFAULT_PROMPTS: [&str; 28] = [
    "has worked in pajamas today",
    "drinks coffee during meetings",
    "has a dedicated home office space",
    "uses a second monitor",
    "has a plant visible on camera",
    "has muted themselves mid-sentence",
    "has said 'you're on mute' to someone",
    "prefers async communication",
    "has attended a meeting while walking",
    "has a pet that crashed a video call",
    "works from a different time zone",
    "has worked from a coffee shop this month",
    "has a standing desk",
    "has taken a meeting from bed",
    "has worked from a coworking space",
    "uses keyboard shortcuts religiously",
    "has a favorite background blur or virtual background",
    "has worked while traveling",
    "schedules 'focus time' blocks",
    "has a morning routine before logging on",
    "has worked from 3+ countries",
    "can show their weirdest desk accessory",
    "has accidentally shared the wrong screen",
    "has joined a meeting with bedhead",
    "has a WFH guilty pleasure snack",
    "has taken a 'camera off' mental health break",
    "has worked past midnight on a deadline",
    "knows their mail carrier's name",
];

/// The default pool as owned strings, ready to hand to a session.
pub fn default_prompts() -> Vec<String> {
    DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect()
}
