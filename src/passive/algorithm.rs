use tracing::debug;

use super::{BuildOptions, BuildReport, PassivePartial};
use crate::config::AlgorithmArguments;
use crate::error::{ConfigError, Result};
use crate::geometry::CrossSectionProvider;
use crate::registry::VolumeRegistry;

/// Name under which the construction is registered with the geometry host.
pub const ALGORITHM_NAME: &str = "DDCMS_hgcal_DDHGCalPassivePartial";

/// Status returned to the geometry host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The construction ran to completion.
    Executed,
}

/// Host entry point: validates the arguments, builds every variant and
/// forwards the diagnostics to `tracing`, including those recorded before a
/// fatal error.
///
/// Verbose diagnostics are recorded when the `passive_partial` target is
/// enabled at `TRACE` level.
///
/// # Errors
///
/// Returns [`ConfigError::MissingConfiguration`] when called without
/// arguments, before anything is registered. Argument validation and
/// construction errors are propagated unchanged.
pub fn algorithm(
    registry: &mut VolumeRegistry,
    provider: &dyn CrossSectionProvider,
    args: Option<&AlgorithmArguments>,
) -> Result<Status> {
    let args = args.ok_or(ConfigError::MissingConfiguration)?;
    debug!(parent = %args.parent_name, "executing passive partial construction");
    let config = args.clone().into_config()?;

    let options = BuildOptions {
        verbose: tracing::enabled!(target: "passive_partial", tracing::Level::TRACE),
    };
    let mut report = BuildReport::default();
    let outcome = PassivePartial::new(&config)
        .with_options(options)
        .execute_into(registry, provider, &mut report);
    report.emit();
    outcome?;
    Ok(Status::Executed)
}
