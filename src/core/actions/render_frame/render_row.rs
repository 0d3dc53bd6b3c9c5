use crate::core::actions::render_frame::ports::pixel_algorithm::PixelAlgorithm;
use crate::core::data::point::Point;

/// Fills one row of a frame, left to right.
pub fn render_row<Alg>(algorithm: &Alg, y: u32, row: &mut [u32])
where
    Alg: PixelAlgorithm + ?Sized,
{
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = algorithm.compute(Point { x: x as u32, y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CoordinateAlgorithm;

    impl PixelAlgorithm for CoordinateAlgorithm {
        fn compute(&self, pixel: Point) -> u32 {
            pixel.y * 100 + pixel.x
        }
    }

    #[test]
    fn test_render_row_writes_every_column() {
        let mut row = vec![0; 5];

        render_row(&CoordinateAlgorithm, 3, &mut row);

        assert_eq!(row, vec![300, 301, 302, 303, 304]);
    }

    #[test]
    fn test_render_row_empty_slice_is_noop() {
        let mut row: Vec<u32> = vec![];

        render_row(&CoordinateAlgorithm, 0, &mut row);

        assert!(row.is_empty());
    }
}
