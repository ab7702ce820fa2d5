mod tests {
    use led_curtain_composer::{GridShape, IntensityGrid, Rgb};

    type Grid = IntensityGrid<4, 8>;

    #[test]
    fn test_with_shape() {
        let grid = Grid::with_shape(3, 5);
        assert_eq!(grid.shape(), GridShape::new(3, 5));
        assert_eq!(grid.shape().cells(), 15);
        assert_eq!(grid.lit_count(), 0);
        assert_eq!(grid.strips().count(), 3);
        assert!(grid.strips().all(|strip| strip.len() == 5));
    }

    #[test]
    fn test_reshape_clamps_to_capacity() {
        let grid = Grid::with_shape(10, 20);
        assert_eq!(grid.shape(), Grid::capacity());

        let empty = Grid::with_shape(0, 8);
        assert!(empty.shape().is_empty());
        assert_eq!(empty.cells().count(), 0);
    }

    #[test]
    fn test_out_of_shape_access() {
        let mut grid = Grid::with_shape(2, 3);
        grid.set(2, 0, 1.0);
        grid.set(0, 3, 1.0);
        grid.raise(5, 5, 1.0);
        assert_eq!(grid.lit_count(), 0);
        assert_eq!(grid.get(2, 0), 0.0);
        assert!(grid.strip(2).is_empty());
    }

    #[test]
    fn test_raise_keeps_maximum() {
        let mut grid = Grid::with_shape(1, 4);
        grid.raise(0, 1, 0.3);
        grid.raise(0, 1, 1.0);
        grid.raise(0, 1, 0.3);
        assert_eq!(grid.get(0, 1), 1.0);

        grid.set(0, 1, 0.3);
        assert_eq!(grid.get(0, 1), 0.3);
    }

    #[test]
    fn test_reshape_darkens() {
        let mut grid = Grid::with_shape(2, 3);
        grid.fill(1.0);
        assert_eq!(grid.lit_count(), 6);

        grid.reshape(4, 8);
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn test_clamp() {
        let mut grid = Grid::with_shape(1, 3);
        grid.set(0, 0, 1.5);
        grid.set(0, 1, -0.5);
        grid.set(0, 2, f32::NAN);
        grid.clamp();
        assert_eq!(grid.strip(0), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_shade_into() {
        let mut grid = Grid::with_shape(2, 2);
        grid.set(0, 1, 1.0);
        grid.set(1, 0, 0.5);

        let color = Rgb::new(200, 100, 0);
        let mut out = [Rgb::new(9, 9, 9); 4];
        assert_eq!(grid.shade_into(color, &mut out), 4);
        assert_eq!(
            out,
            [
                Rgb::new(0, 0, 0),
                color,
                Rgb::new(100, 50, 0),
                Rgb::new(0, 0, 0)
            ]
        );

        let mut short = [Rgb::default(); 3];
        assert_eq!(grid.shade_into(color, &mut short), 3);
    }
}
