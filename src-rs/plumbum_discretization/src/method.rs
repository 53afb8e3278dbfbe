use std::fmt;

/// A family of spatial discretization methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialMethod {
    /// The region is a single point with no spatial operators.
    ZeroDimensional,
    /// Finite volumes over a one-dimensional mesh.
    FiniteVolume,
    /// Finite elements over a two-dimensional mesh.
    FiniteElement,
}

impl SpatialMethod {
    /// Returns the method name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZeroDimensional => "zero-dimensional",
            Self::FiniteVolume => "finite volume",
            Self::FiniteElement => "finite element",
        }
    }
}

impl fmt::Display for SpatialMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of submesh generated for a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmeshType {
    /// A single node.
    ZeroDimensional,
    /// Uniformly spaced nodes along one coordinate.
    Uniform1D,
    /// A uniform triangulation of a rectangle.
    Uniform2D,
}

impl SubmeshType {
    /// Returns the number of dimensions the submesh resolves.
    #[must_use]
    pub const fn dimensions(self) -> u8 {
        match self {
            Self::ZeroDimensional => 0,
            Self::Uniform1D => 1,
            Self::Uniform2D => 2,
        }
    }

    /// Returns the submesh name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZeroDimensional => "zero-dimensional",
            Self::Uniform1D => "uniform 1D",
            Self::Uniform2D => "uniform 2D",
        }
    }
}

impl fmt::Display for SubmeshType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
