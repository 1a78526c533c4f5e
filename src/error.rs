use thiserror::Error;

/// Top-level error type for passive module construction.
#[derive(Debug, Error)]
pub enum PassiveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised while reading or validating the algorithm arguments.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("passive module builder invoked without a configuration")]
    MissingConfiguration,

    #[error("{first} has {first_len} entries but {second} has {second_len}")]
    LengthMismatch {
        first: &'static str,
        first_len: usize,
        second: &'static str,
        second_len: usize,
    },

    #[error("layer type {value} at stack position {position} is outside the catalogue of {catalogue} layers")]
    LayerTypeOutOfRange {
        position: usize,
        value: i64,
        catalogue: usize,
    },

    #[error("failed to parse algorithm arguments: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors related to cross-section geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cross-section needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// Errors reported by the volume registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{kind} `{name}` is already registered with a different definition")]
    NameCollision { kind: &'static str, name: String },

    #[error("material `{0}` is not defined")]
    UnknownMaterial(String),

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("volume `{0}` cannot be placed inside itself")]
    SelfPlacement(String),

    #[error("copy {copy_number} of `{child}` is already placed in `{parent}`")]
    DuplicatePlacement {
        parent: String,
        child: String,
        copy_number: u32,
    },
}

/// Convenience type alias for results using [`PassiveError`].
pub type Result<T> = std::result::Result<T, PassiveError>;
