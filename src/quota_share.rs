use crate::layer::Layer;

/// Fill state of one quota-share band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandStatus {
    /// Sum of member layers' written limits.
    pub filled: f64,
    /// The shared band size every member carries.
    pub total: f64,
    /// `total − filled`; zero or negative once the band is fully placed.
    pub gap: f64,
    pub is_complete: bool,
    /// Inclusive index range of the band within the tower.
    pub start_index: usize,
    pub end_index: usize,
}

/// Fill status of the quota-share band containing `index`, or `None` if
/// that layer is 100%-placed.
///
/// A band is a maximal run of array-adjacent layers carrying the identical
/// `quota_share` value — there is no explicit group id, contiguity plus
/// value equality is the key. The walk expands outward from `index` in
/// both directions. Pure query, no side effects; `index` must be in
/// range.
pub fn band_status(layers: &[Layer], index: usize) -> Option<BandStatus> {
    let band = layers[index].band_value()?;

    let mut start = index;
    while start > 0 && layers[start - 1].band_value() == Some(band) {
        start -= 1;
    }
    let mut end = index;
    while end + 1 < layers.len() && layers[end + 1].band_value() == Some(band) {
        end += 1;
    }

    let filled: f64 = layers[start..=end].iter().map(|l| l.limit).sum();
    let gap = band - filled;
    Some(BandStatus {
        filled,
        total: band,
        gap,
        is_complete: gap <= 0.0,
        start_index: start,
        end_index: end,
    })
}

/// Band size a newly inserted layer should default to.
///
/// A layer inserted directly below the home-carrier layer inherits the
/// `quota_share` of the nearest incomplete band above it: the tower is
/// scanned from the top down and the first band still short of its size
/// wins, so a user filling out a band is not forced to re-pick the band
/// size on every added carrier. `None` when every band is fully placed
/// (or there are no bands) — the new layer starts 100%-placed.
pub fn inherited_quota_share(layers: &[Layer]) -> Option<f64> {
    let mut i = layers.len();
    while i > 0 {
        i -= 1;
        if let Some(status) = band_status(layers, i) {
            if !status.is_complete {
                return Some(status.total);
            }
            // Jump past this band; the loop decrement lands below it.
            i = status.start_index;
        }
    }
    None
}
