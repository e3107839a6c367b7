use crate::config::RPM_UNIT;
use crate::layer::Layer;

/// Which ILF definition a call site displays. Two conventions coexist
/// across the quoting screens and must stay independently selectable —
/// unifying them would silently change one screen's numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IlfConvention {
    /// This layer's RPM over the immediately preceding layer's RPM.
    Sequential,
    /// This layer's RPM over the ground layer's RPM, as a percentage.
    VsBase,
}

/// Derived pricing ratios for one layer. `None` means the input data is
/// missing or degenerate; callers render a blank, never a zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub rpm: Option<f64>,
    pub ilf: Option<f64>,
}

/// Rate per million: premium normalized to a $1M limit unit.
/// `None` when premium is absent or limit is not positive.
pub fn rpm(layer: &Layer) -> Option<f64> {
    let premium = layer.premium?;
    if layer.limit > 0.0 { Some(premium / (layer.limit / RPM_UNIT)) } else { None }
}

/// ILF against the immediately preceding layer: `rpm[index] / rpm[index-1]`.
/// The ground layer's own ILF is exactly 1.00 whenever it has an RPM.
pub fn ilf_sequential(layers: &[Layer], index: usize) -> Option<f64> {
    let own = rpm(&layers[index])?;
    if index == 0 {
        return Some(1.0);
    }
    let prior = rpm(&layers[index - 1])?;
    if prior > 0.0 { Some(own / prior) } else { None }
}

/// ILF against the tower's ground layer, expressed as a percentage:
/// `rpm[index] / rpm[0] × 100`.
pub fn ilf_vs_base(layers: &[Layer], index: usize) -> Option<f64> {
    let own = rpm(&layers[index])?;
    let base = rpm(&layers[0])?;
    if base > 0.0 { Some(own / base * 100.0) } else { None }
}

/// RPM and ILF for the layer at `index`, under the caller's ILF
/// convention. `index` must be in range; missing pricing data degrades
/// to `None`, never to zero.
pub fn ratios(layers: &[Layer], index: usize, convention: IlfConvention) -> Ratios {
    let ilf = match convention {
        IlfConvention::Sequential => ilf_sequential(layers, index),
        IlfConvention::VsBase => ilf_vs_base(layers, index),
    };
    Ratios { rpm: rpm(&layers[index]), ilf }
}
