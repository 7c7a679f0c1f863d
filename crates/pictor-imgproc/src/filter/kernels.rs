/// A 3x3 convolution kernel as row-major weights.
pub type Kernel3x3 = [[f32; 3]; 3];

const EDGE: Kernel3x3 = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];

const SHARPEN: Kernel3x3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

const BLUR: Kernel3x3 = [[1.0 / 9.0; 3]; 3];

const GAUSSIAN: Kernel3x3 = [
    [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
    [1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
    [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
];

const EMBOSS: Kernel3x3 = [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]];

const IDENTITY: Kernel3x3 = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];

/// The built-in 3x3 filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Laplacian edge detection.
    Edge,
    /// Center-weighted sharpening.
    Sharpen,
    /// Uniform box blur.
    Blur,
    /// Gaussian blur approximation.
    Gaussian,
    /// Directional emboss.
    Emboss,
    /// Pass-through kernel with weight 1 at the center.
    Identity,
}

impl FilterKind {
    /// Parse a filter name.
    ///
    /// The recognized names are `edge`, `sharpen`, `blur`, `gauss`, `emboss`
    /// and `identity`, matched case-sensitively. Returns `None` for anything
    /// else.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "edge" => Some(Self::Edge),
            "sharpen" => Some(Self::Sharpen),
            "blur" => Some(Self::Blur),
            "gauss" => Some(Self::Gaussian),
            "emboss" => Some(Self::Emboss),
            "identity" => Some(Self::Identity),
            _ => None,
        }
    }

    /// Resolve a filter name, falling back to [`FilterKind::Identity`].
    ///
    /// Unrecognized names deliberately select the identity kernel instead of
    /// reporting an error, so a misspelled filter yields an unmodified copy
    /// of the input rather than a failed run.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or(Self::Identity)
    }

    /// The weight table of this filter.
    pub fn kernel(self) -> Kernel3x3 {
        match self {
            Self::Edge => EDGE,
            Self::Sharpen => SHARPEN,
            Self::Blur => BLUR,
            Self::Gaussian => GAUSSIAN,
            Self::Emboss => EMBOSS,
            Self::Identity => IDENTITY,
        }
    }
}
