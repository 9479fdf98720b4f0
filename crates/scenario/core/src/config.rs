/// Card layout bounds and the default footprint of projected icons.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Right edge every icon must fit within (`x + size_x`).
    pub max_x: u32,
    /// Bottom edge every icon must fit within (`y + size_y`).
    pub max_y: u32,
    /// Upper bound for each shield category of a skill test.
    pub max_shields: u32,
    /// Width of icons emitted by the projection rules.
    pub default_size_x: u32,
    /// Height of icons emitted by the projection rules.
    pub default_size_y: u32,
}

impl LayoutConfig {
    pub const MAX_SHIELDS: u32 = 50;
    pub const MAX_X_COORD: u32 = 300;
    pub const MAX_Y_COORD: u32 = 300;
    pub const DEFAULT_SIZE_X: u32 = 20;
    pub const DEFAULT_SIZE_Y: u32 = 20;

    pub const fn new() -> Self {
        Self {
            max_x: Self::MAX_X_COORD,
            max_y: Self::MAX_Y_COORD,
            max_shields: Self::MAX_SHIELDS,
            default_size_x: Self::DEFAULT_SIZE_X,
            default_size_y: Self::DEFAULT_SIZE_Y,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}
