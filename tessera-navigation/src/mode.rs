//! How a navigation entry is shown.

use smallvec::SmallVec;

/// A resting height for a sheet.
///
/// Payloads compare bitwise, so every detent equals itself and a
/// [`DetentSet`] never holds the same detent twice.
#[derive(Clone, Copy, Debug)]
pub enum Detent {
    /// Roughly half of the container height.
    Medium,
    /// The full available height.
    Large,
    /// A share of the container height in `0.0..=1.0`.
    Fraction(f32),
    /// An explicit height in density-independent pixels.
    Height(f32),
}

impl Detent {
    /// A fractional detent, clamped into `0.0..=1.0`. NaN becomes `0.0`.
    pub fn fraction(value: f32) -> Self {
        if value.is_nan() {
            return Self::Fraction(0.0);
        }
        // `+ 0.0` folds -0.0 into 0.0.
        Self::Fraction(value.clamp(0.0, 1.0) + 0.0)
    }

    /// An explicit height, never negative. NaN becomes `0.0`.
    pub fn height(dp: f32) -> Self {
        Self::Height(dp.max(0.0) + 0.0)
    }
}

impl PartialEq for Detent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Medium, Self::Medium) | (Self::Large, Self::Large) => true,
            (Self::Fraction(a), Self::Fraction(b)) | (Self::Height(a), Self::Height(b)) => {
                a.to_bits() == b.to_bits()
            }
            _ => false,
        }
    }
}

impl Eq for Detent {}

/// The set of detents a sheet may rest at.
///
/// Insertion order is kept for containers that want a stable order, but
/// equality ignores it and duplicates are dropped.
#[derive(Clone, Debug)]
pub struct DetentSet {
    detents: SmallVec<[Detent; 2]>,
}

impl DetentSet {
    /// Build a set from any list of detents.
    pub fn new(detents: impl IntoIterator<Item = Detent>) -> Self {
        let mut set = Self::empty();
        for detent in detents {
            set.insert(detent);
        }
        set
    }

    /// A set with no detents.
    pub fn empty() -> Self {
        Self {
            detents: SmallVec::new(),
        }
    }

    /// Insert a detent. Returns `false` if it was already present.
    pub fn insert(&mut self, detent: Detent) -> bool {
        if self.contains(detent) {
            return false;
        }
        self.detents.push(detent);
        true
    }

    pub fn contains(&self, detent: Detent) -> bool {
        self.detents.contains(&detent)
    }

    pub fn len(&self) -> usize {
        self.detents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Detent> + '_ {
        self.detents.iter().copied()
    }

    /// `self` if it has at least one detent, the default `{Large}` otherwise.
    pub(crate) fn or_default(self) -> Self {
        if self.is_empty() {
            Self::default()
        } else {
            self
        }
    }
}

impl Default for DetentSet {
    fn default() -> Self {
        Self::new([Detent::Large])
    }
}

impl PartialEq for DetentSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|detent| other.contains(detent))
    }
}

impl FromIterator<Detent> for DetentSet {
    fn from_iter<I: IntoIterator<Item = Detent>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<const N: usize> From<[Detent; N]> for DetentSet {
    fn from(detents: [Detent; N]) -> Self {
        Self::new(detents)
    }
}

/// Presentation style of a navigation entry.
#[derive(Clone, Debug, PartialEq)]
pub enum PresentationMode {
    /// Pushed onto the root's stack.
    Stack,
    /// Presented as a sheet resting at one of `detents`.
    ///
    /// A scalable sheet sizes itself from its content's measured height
    /// instead of a fixed detent.
    Sheet { detents: DetentSet, scalable: bool },
    /// Presented as a full-screen cover.
    FullScreen,
    /// Selected as a tab. Tabs are tracked by id, never stored as entries.
    Tab,
}

impl PresentationMode {
    /// The default sheet: `{Large}`, not scalable.
    pub fn sheet() -> Self {
        Self::Sheet {
            detents: DetentSet::default(),
            scalable: false,
        }
    }

    pub fn is_stack(&self) -> bool {
        matches!(self, Self::Stack)
    }

    pub fn is_sheet(&self) -> bool {
        matches!(self, Self::Sheet { .. })
    }

    pub fn is_full_screen(&self) -> bool {
        matches!(self, Self::FullScreen)
    }

    pub fn is_tab(&self) -> bool {
        matches!(self, Self::Tab)
    }

    /// Sheet detents, `None` for every other mode.
    pub fn detents(&self) -> Option<&DetentSet> {
        match self {
            Self::Sheet { detents, .. } => Some(detents),
            _ => None,
        }
    }

    /// Whether this is a sheet sized from its content.
    pub fn is_scalable(&self) -> bool {
        matches!(self, Self::Sheet { scalable: true, .. })
    }
}
