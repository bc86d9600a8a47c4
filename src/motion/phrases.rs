pub const PHRASES: &[&str] = &[
    "We build digital products that feel inevitable.",
    "Web Agency — design, code, performance.",
    "Digital Agency — strategy, content, conversion.",
    "Brand Identity — systems, tone, consistency.",
    "Interfaces that feel calm. Systems that scale.",
    "Fast, accessible, search-ready.",
    "Launch is just the beginning.",
    "Less noise. More clarity.",
];

pub const MICRO_CAPTIONS: &[&str] = &[
    "Stage 1 — Foundation",
    "Stage 2 — Performance",
    "Stage 3 — Strategy",
    "Stage 4 — Identity",
    "Stage 5 — Interfaces",
    "Stage 6 — Velocity",
    "Stage 7 — Launch",
    "Stage 8 — Clarity",
];

pub const STORY_STEPS: &[&str] = &["Discover", "Model", "Prototype", "Ship", "Iterate"];

pub const STORY_CAPTIONS: &[&str] = &[
    "Discovery in focus",
    "Systems over pages",
    "Prototype with signals",
    "Ship with observability",
    "Iterate with clarity",
];

/// Caption for `idx`, falling back to the first entry.
pub fn caption(list: &[&'static str], idx: usize) -> &'static str {
    list.get(idx).or_else(|| list.first()).copied().unwrap_or("")
}

/// Two phrase slots trading the "current" and "next" roles.
///
/// `T` is whatever handle the caller uses for a slot; the handles are
/// swapped in place rather than recreated.
pub struct PhraseCarousel<T> {
    current: T,
    next: T,
    index: usize,
    len: usize,
}

impl<T> PhraseCarousel<T> {
    pub fn new(current: T, next: T, len: usize) -> Self {
        Self { current, next, index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves the cursor to `idx`. Returns `(incoming, outgoing)` only when a
    /// swap actually happened; repeated or out-of-range indices are ignored.
    pub fn advance(&mut self, idx: usize) -> Option<(&T, &T)> {
        if idx == self.index || idx >= self.len {
            return None;
        }
        self.index = idx;
        std::mem::swap(&mut self.current, &mut self.next);
        Some((&self.current, &self.next))
    }
}
