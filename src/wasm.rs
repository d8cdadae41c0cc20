use crate::error::Result;
use crate::median_cut::MedianCut;
use crate::point::PointRgb;
use crate::scalar_cut::median_cut_values;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// A quantized color palette.
///
/// Colors are ordered by the extent of their cluster, widest first.
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct Palette {
    // Flat array of colors [r, g, b, r, g, b, ...]
    colors: Vec<u8>,
    // Number of input pixels mapped to each color
    counts: Vec<u32>,
}

#[wasm_bindgen]
impl Palette {
    #[wasm_bindgen(getter)]
    pub fn colors(&self) -> Vec<u8> {
        self.colors.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn counts(&self) -> Vec<u32> {
        self.counts.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn count_colors(&self) -> usize {
        self.counts.len()
    }
}

/// Reduces interleaved RGB pixels `[r, g, b, r, g, b, ...]` to at most `levels` colors.
#[wasm_bindgen(js_name = quantizeRgb)]
pub fn quantize_rgb(pixels: &[u8], levels: usize) -> std::result::Result<Palette, JsError> {
    Ok(build_palette(pixels, levels)?)
}

/// Reduces a list of values to at most `levels` representative values.
#[wasm_bindgen(js_name = quantizeValues)]
pub fn quantize_values(values: &[f32], levels: usize) -> std::result::Result<Vec<f32>, JsError> {
    Ok(representative_values(values, levels)?)
}

pub(crate) fn build_palette(pixels: &[u8], levels: usize) -> Result<Palette> {
    let mut points = PointRgb::from_flat(pixels)?;
    let summaries = MedianCut::new().summaries(&mut points, levels)?;

    let mut colors = Vec::with_capacity(summaries.len() * 3);
    let mut counts = Vec::with_capacity(summaries.len());
    for summary in summaries {
        colors.extend_from_slice(summary.representative.values());
        counts.push(summary.count as u32);
    }
    Ok(Palette { colors, counts })
}

pub(crate) fn representative_values(values: &[f32], levels: usize) -> Result<Vec<f32>> {
    Ok(median_cut_values(values, levels)?
        .into_iter()
        .map(|cluster| cluster.representative)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_palette_two_colors() {
        let pixels = [
            250, 10, 10, //
            254, 12, 8, //
            10, 10, 240, //
            12, 14, 250, //
        ];
        let palette = build_palette(&pixels, 2).expect("Palette should build");
        assert_eq!(palette.count_colors(), 2);
        assert_eq!(palette.counts(), vec![2, 2]);

        let mut colors: Vec<&[u8]> = palette.colors.chunks(3).collect();
        colors.sort();
        assert_eq!(colors, vec![&[11u8, 12, 245][..], &[252, 11, 9][..]]);
    }

    #[test]
    fn test_palette_ragged_buffer() {
        let err = build_palette(&[1, 2, 3, 4, 5], 2).unwrap_err();
        assert_eq!(err, Error::InvalidDimensionality { expected: 3, actual: 2 });
    }

    #[test]
    fn test_representative_values() {
        let mut values = representative_values(&[0.0, 10.0, 20.0, 30.0], 2).expect("Quantization should succeed");
        values.sort_by(f32::total_cmp);
        assert_eq!(values, vec![5.0, 25.0]);
    }
}
