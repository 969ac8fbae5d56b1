/// Errors the effect processors can return.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EffectError {
    /// Input and output channels differ in length.
    ChannelLength,
    /// The block holds no samples.
    EmptyBlock,
    /// An effect parameter is out of range.
    InvalidParameter,
}

impl core::fmt::Display for EffectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ChannelLength => "Channels differ in length".fmt(f),
            Self::EmptyBlock => "Block holds no samples".fmt(f),
            Self::InvalidParameter => "Effect parameter is out of range".fmt(f),
        }
    }
}

impl core::fmt::Debug for EffectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for EffectError {}
