/// Interaction parameters of a single colloidal species.
///
/// The two temperatures model two thermal scales of the pair potential (the
/// attractive and repulsive branches may couple to different effective
/// temperatures); `lambda` and `lambda2` are the attraction and repulsion
/// range parameters whose valid domain depends on the chosen potential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    /// Hard-core diameter, in units of the diameter scale.
    pub diameter: f64,
    /// Reduced temperature of the attractive branch.
    pub temperature: f64,
    /// Reduced temperature of the repulsive branch.
    pub temperature2: f64,
    /// Attraction range parameter.
    pub lambda: f64,
    /// Repulsion range parameter.
    pub lambda2: f64,
}

/// A two-species description of the fluid, as consumed by the OZ solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesPair {
    pub first: Species,
    pub second: Species,
}

impl SpeciesPair {
    /// Assembles the two-species description from scalar inputs.
    ///
    /// When `polydisperse` is false, the second species is built as an
    /// independent field-wise copy of the first, and the caller-supplied
    /// `diameter2` is discarded. This mirrors the historical behavior of the
    /// monodisperse shortcut and is part of the public contract: downstream
    /// numerics depend on it, so callers requesting a distinct second
    /// diameter while `polydisperse` is false silently get the first
    /// species' value.
    ///
    /// In the polydisperse case only the diameters differ; temperatures and
    /// range parameters are shared between the two species.
    pub fn build(
        diameter1: f64,
        diameter2: f64,
        temperature: f64,
        temperature2: f64,
        lambda_attract: f64,
        lambda_repel: f64,
        polydisperse: bool,
    ) -> Self {
        let first = Species {
            diameter: diameter1,
            temperature,
            temperature2,
            lambda: lambda_attract,
            lambda2: lambda_repel,
        };

        let second = if polydisperse {
            Species {
                diameter: diameter2,
                ..first
            }
        } else {
            first
        };

        Self { first, second }
    }
}
