//! Store configuration and presentation arguments.

use derive_setters::Setters;

use crate::mode::{DetentSet, PresentationMode};

const DEFAULT_STACK_DEPTH_WARNING: usize = 64;

/// Configuration for a [`NavigationStore`](crate::NavigationStore).
///
/// # Examples
///
/// ```
/// use tessera_navigation::{Detent, NavigationConfig};
///
/// let config = NavigationConfig::default()
///     .default_detents([Detent::Medium, Detent::Large])
///     .stack_depth_warning(16);
/// assert_eq!(config.stack_depth_warning, Some(16));
/// ```
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct NavigationConfig {
    /// Detents used when a sheet is presented without explicit arguments.
    #[setters(into)]
    pub default_detents: DetentSet,
    /// Whether sheets presented without explicit arguments size to content.
    pub default_scalable: bool,
    /// Stack depth above which a push logs a warning. Pushes are never refused.
    #[setters(strip_option)]
    pub stack_depth_warning: Option<usize>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_detents: DetentSet::default(),
            default_scalable: false,
            stack_depth_warning: Some(DEFAULT_STACK_DEPTH_WARNING),
        }
    }
}

impl NavigationConfig {
    /// Sheet arguments built from this configuration's defaults.
    pub fn sheet_args(&self) -> SheetArgs {
        SheetArgs {
            detents: self.default_detents.clone(),
            scalable: self.default_scalable,
        }
    }
}

/// Arguments for presenting a sheet.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct SheetArgs {
    /// Heights the sheet may rest at. An empty set falls back to `{Large}`.
    #[setters(into)]
    pub detents: DetentSet,
    /// Size the sheet from its content instead of a fixed detent.
    pub scalable: bool,
}

impl Default for SheetArgs {
    fn default() -> Self {
        Self {
            detents: DetentSet::default(),
            scalable: false,
        }
    }
}

impl SheetArgs {
    pub(crate) fn into_mode(self) -> PresentationMode {
        PresentationMode::Sheet {
            detents: self.detents.or_default(),
            scalable: self.scalable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavigationConfig, SheetArgs};
    use crate::mode::{Detent, DetentSet, PresentationMode};

    #[test]
    fn empty_detents_become_large() {
        let mode = SheetArgs::default().detents(DetentSet::empty()).into_mode();
        assert_eq!(mode, PresentationMode::sheet());
    }

    #[test]
    fn config_defaults_feed_sheet_args() {
        let config = NavigationConfig::default()
            .default_detents([Detent::Medium])
            .default_scalable(true);
        let args = config.sheet_args();
        assert_eq!(args.detents, DetentSet::from([Detent::Medium]));
        assert!(args.scalable);
        assert_eq!(
            NavigationConfig::default().sheet_args(),
            SheetArgs::default()
        );
    }
}
