// Single source of truth for all default values.

// --- Generation ---
pub const DEFAULT_NUM_CYCLES: usize = 3;
pub const DEFAULT_PROPOSALS_PER_CYCLE: usize = 3;

// --- Expansion layout ---
pub const DEFAULT_EXPANSION_ROW_GAP: f64 = 160.0;
pub const DEFAULT_EXPANSION_COLUMN_GAP: f64 = 220.0;
