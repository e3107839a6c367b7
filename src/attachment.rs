use crate::layer::Layer;

/// Total dollars the tower places across `layers[start..end]`: plain
/// layers contribute their own limit; a quota-share band contributes its
/// shared band size exactly once, however many carriers split it.
fn stack_height(layers: &[Layer], start: usize, end: usize) -> f64 {
    let mut total = 0.0;
    let mut i = start;
    while i < end {
        match layers[i].band_value() {
            Some(band) => {
                total += band;
                // Skip the rest of this band: contiguous layers sharing
                // the identical quota_share value.
                i += 1;
                while i < end && layers[i].band_value() == Some(band) {
                    i += 1;
                }
            }
            None => {
                total += layers[i].limit;
                i += 1;
            }
        }
    }
    total
}

/// Attachment point of the layer at `target`: the loss dollars that must
/// be exhausted below it before it responds.
///
/// Every member of a quota-share band attaches at the band's lowest index,
/// so the walk first rewinds `target` to the start of its band, then sums
/// the stack strictly below that point.
///
/// Index 0 normally attaches at 0. The exception is a tower whose stored
/// order puts the home carrier first even though it is logically excess
/// (legacy records do this): the home layer then attaches above the sum of
/// every other layer's contribution, band sizes counted once.
///
/// `target` must be in range; the full array is read, never mutated.
pub fn attachment_of(layers: &[Layer], target: usize) -> f64 {
    if target == 0 {
        if layers[0].is_home() {
            return stack_height(layers, 1, layers.len());
        }
        return 0.0;
    }

    let mut effective = target;
    if let Some(band) = layers[target].band_value() {
        while effective > 0 && layers[effective - 1].band_value() == Some(band) {
            effective -= 1;
        }
    }
    stack_height(layers, 0, effective)
}

/// Re-derive the `attachment` cache for every layer. Pure: returns a new
/// array, every attachment computed against the input array as given.
/// Callers must run this before persisting any tower whose limits, order,
/// or quota-share assignments changed; no other field is touched.
pub fn recalculate(layers: &[Layer]) -> Vec<Layer> {
    layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let mut layer = layer.clone();
            layer.attachment = attachment_of(layers, i);
            layer
        })
        .collect()
}
