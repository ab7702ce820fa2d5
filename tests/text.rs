mod tests {
    use led_curtain_composer::IntensityGrid;
    use led_curtain_composer::pattern::{MAX_MESSAGE_LEN, message, message_height, text};

    type Grid = IntensityGrid<8, 40>;

    fn render(strips: usize, t: f64, msg: &str) -> Grid {
        let mut grid = Grid::with_shape(strips, 40);
        text(t, &mut grid, msg);
        grid
    }

    fn lit_strips(grid: &Grid, led: usize) -> Vec<usize> {
        (0..grid.strip_count())
            .filter(|strip| grid.get(*strip, led) > 0.0)
            .collect()
    }

    #[test]
    fn test_message_starts_above_the_curtain() {
        assert_eq!(render(5, 0.0, "LED").lit_count(), 0);
    }

    #[test]
    fn test_last_glyph_enters_first() {
        // Seven rows scrolled in: rows 3-6 of 'D' on the first four LEDs
        let grid = render(5, 21.0, "LED");
        assert_eq!(lit_strips(&grid, 0), [0, 4]);
        assert_eq!(lit_strips(&grid, 3), [0, 1, 2]);
        assert!((4..40).all(|led| lit_strips(&grid, led).is_empty()));
    }

    #[test]
    fn test_full_message_on_screen() {
        // 30 rows scrolled in: the message occupies LEDs 0-29
        let grid = render(5, 90.0, "LED");
        assert_eq!(lit_strips(&grid, 0), [0]);
        assert_eq!(lit_strips(&grid, 6), [0, 1, 2, 3, 4]);
        for gap in 7..10 {
            assert!(lit_strips(&grid, gap).is_empty());
        }
        assert_eq!(lit_strips(&grid, 10), [0, 1, 2, 3, 4]);
        assert_eq!(lit_strips(&grid, 20), [0, 1, 2]);
        assert!((30..40).all(|led| lit_strips(&grid, led).is_empty()));
    }

    #[test]
    fn test_glyph_centered_on_wide_curtain() {
        let grid = render(7, 90.0, "LED");
        assert_eq!(lit_strips(&grid, 6), [1, 2, 3, 4, 5]);
        assert_eq!(lit_strips(&grid, 0), [1]);
    }

    #[test]
    fn test_glyph_cropped_on_narrow_curtain() {
        let grid = render(3, 90.0, "LED");
        assert_eq!(lit_strips(&grid, 10), [0, 1, 2]);
        assert!(lit_strips(&grid, 0).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let upper = render(5, 90.0, "LED");
        let lower = render(5, 90.0, "led");
        assert!(upper.cells().eq(lower.cells()));
    }

    #[test]
    fn test_unknown_characters_are_blank() {
        for t in [0.0, 30.0, 90.0, 150.0] {
            assert_eq!(render(5, t, "~~~").lit_count(), 0);
        }
        assert_eq!(render(5, 90.0, "").lit_count(), 0);
    }

    #[test]
    fn test_message_truncation() {
        assert_eq!(message("LED").as_str(), "LED");
        assert_eq!(message("ABCDEFGHIJKLMNOPQRSTUVWXYZ").len(), MAX_MESSAGE_LEN);
        // Two-byte characters are never split
        assert_eq!(message("ÄÄÄÄÄÄÄÄÄ").chars().count(), 8);
        assert_eq!(message_height("LED"), 30);
    }
}
