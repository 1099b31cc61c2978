/// One band of the protoplanetary disk partition.
///
/// The full set of bands for a disk is sorted ascending by `inner_edge` and
/// forms a contiguous, non-overlapping cover of the disk range: each band's
/// `outer_edge` equals the next band's `inner_edge`. Sweeps only reclassify
/// material, splitting bands at sweep boundaries and clearing flags, so
/// the covered range never changes. Adjacent bands with identical flags are
/// merged after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DustBand {
    /// Inner edge of the band, in AU.
    pub inner_edge: f64,
    /// Outer edge of the band, in AU.
    pub outer_edge: f64,
    /// Does unswept dust remain in this band?
    pub dust_present: bool,
    /// Does unswept gas remain in this band?
    pub gas_present: bool,
}

impl DustBand {
    /// Creates a band covering `[inner, outer]`.
    pub fn new(inner: f64, outer: f64, has_dust: bool, has_gas: bool) -> Self {
        DustBand {
            inner_edge: inner,
            outer_edge: outer,
            dust_present: has_dust,
            gas_present: has_gas,
        }
    }

    /// Width of the band, in AU.
    pub fn width(&self) -> f64 {
        self.outer_edge - self.inner_edge
    }

    /// Whether this band carries the same dust/gas flags as `other`.
    pub fn same_contents(&self, other: &DustBand) -> bool {
        self.dust_present == other.dust_present && self.gas_present == other.gas_present
    }
}

/// Merges adjacent bands with identical contents, in place.
pub(crate) fn merge_adjacent(bands: &mut Vec<DustBand>) {
    let mut merged: Vec<DustBand> = Vec::with_capacity(bands.len());
    for band in bands.drain(..) {
        match merged.last_mut() {
            Some(previous) if previous.same_contents(&band) => {
                previous.outer_edge = band.outer_edge;
            }
            _ => merged.push(band),
        }
    }
    *bands = merged;
}

/// Asserts the partition invariant in debug builds: ascending, contiguous,
/// and free of mergeable neighbors.
pub(crate) fn debug_check_partition(bands: &[DustBand]) {
    if cfg!(debug_assertions) {
        for pair in bands.windows(2) {
            debug_assert!(
                pair[0].outer_edge == pair[1].inner_edge,
                "dust bands not contiguous: {:?} / {:?}",
                pair[0],
                pair[1]
            );
            debug_assert!(
                !pair[0].same_contents(&pair[1]),
                "unmerged adjacent dust bands: {:?} / {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}
